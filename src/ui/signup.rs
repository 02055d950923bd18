// SPDX-License-Identifier: MPL-2.0
//! Signup panel: names, display name, email and password.

use crate::ui::design_tokens::spacing;
use crate::ui::form::{self, ViewContext};
use crate::ui::stylesheet::ids;
use iced::alignment::Horizontal;
use iced::widget::{Column, Row};
use iced::{Element, Length};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub email: String,
    pub password: String,
}

/// Messages emitted by the signup panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    FirstNameChanged(String),
    LastNameChanged(String),
    DisplayNameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    SignupPressed,
    AlreadyHaveAccountClicked,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    BackToLogin,
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        let field = match message {
            Message::FirstNameChanged(value) => (&mut self.first_name, value),
            Message::LastNameChanged(value) => (&mut self.last_name, value),
            Message::DisplayNameChanged(value) => (&mut self.display_name, value),
            Message::EmailChanged(value) => (&mut self.email, value),
            Message::PasswordChanged(value) => (&mut self.password, value),
            Message::SignupPressed => {
                tracing::debug!("sign up pressed, no registration backend is wired");
                return Event::None;
            }
            Message::AlreadyHaveAccountClicked => return Event::BackToLogin,
        };

        let (slot, value) = field;
        *slot = value;
        Event::None
    }

    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let first_name = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(form::label(&ctx, ids::NAME_LABEL, "signup-first-name"))
            .push(form::input(
                &ctx,
                ids::NAME_INPUT,
                &self.first_name,
                Message::FirstNameChanged,
                false,
            ));
        let last_name = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(form::label(&ctx, ids::NAME_LABEL, "signup-last-name"))
            .push(form::input(
                &ctx,
                ids::NAME_INPUT,
                &self.last_name,
                Message::LastNameChanged,
                false,
            ));
        let names = Row::new()
            .spacing(spacing::SM)
            .push(first_name)
            .push(last_name);

        let content = form::header(&ctx, "signup-title")
            .spacing(spacing::SM)
            .push(form::gap(spacing::XS))
            .push(names)
            .push(form::label(&ctx, ids::EMAIL_LABEL, "signup-display-name"))
            .push(form::input(
                &ctx,
                ids::EMAIL_INPUT,
                &self.display_name,
                Message::DisplayNameChanged,
                false,
            ))
            .push(form::label(&ctx, ids::EMAIL_LABEL, "field-email"))
            .push(form::input(&ctx, ids::EMAIL_INPUT, &self.email, Message::EmailChanged, false))
            .push(form::label(&ctx, ids::PASSWORD_LABEL, "field-password"))
            .push(form::input(
                &ctx,
                ids::PASSWORD_INPUT,
                &self.password,
                Message::PasswordChanged,
                true,
            ))
            .push(form::primary_button(
                &ctx,
                ids::SIGNUP_BUTTON,
                "signup-button",
                Message::SignupPressed,
            ))
            .push(form::link(
                &ctx,
                ids::LINK_LABEL,
                "signup-have-account-link",
                Message::AlreadyHaveAccountClicked,
                Horizontal::Center,
            ));

        form::panel(&ctx, ids::SIGNUP_PANEL, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_field_is_updated_independently() {
        let mut state = State::default();
        state.update(Message::FirstNameChanged("Ada".into()));
        state.update(Message::LastNameChanged("Lovelace".into()));
        state.update(Message::DisplayNameChanged("ada".into()));
        state.update(Message::EmailChanged("ada@example.org".into()));
        state.update(Message::PasswordChanged("engine".into()));

        assert_eq!(
            state,
            State {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                display_name: "ada".into(),
                email: "ada@example.org".into(),
                password: "engine".into(),
            }
        );
    }

    #[test]
    fn already_have_account_returns_to_login() {
        let mut state = State::default();
        assert_eq!(state.update(Message::AlreadyHaveAccountClicked), Event::BackToLogin);
    }

    #[test]
    fn sign_up_is_inert() {
        let mut state = State::default();
        assert_eq!(state.update(Message::SignupPressed), Event::None);
        assert_eq!(state, State::default());
    }
}
