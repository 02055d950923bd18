// SPDX-License-Identifier: MPL-2.0
//! Login panel: email and password fields, a link to password recovery and a
//! link to the signup panel.

use crate::ui::design_tokens::spacing;
use crate::ui::form::{self, ViewContext};
use crate::ui::stylesheet::ids;
use iced::alignment::Horizontal;
use iced::Element;

/// Values typed into the panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub email: String,
    pub password: String,
}

/// Messages emitted by the login panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    ForgotPasswordClicked,
    LoginPressed,
    ContinueOfflinePressed,
    SignupClicked,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    ForgotPassword,
    Signup,
}

impl State {
    /// Process a login panel message and return the corresponding event.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                Event::None
            }
            Message::ForgotPasswordClicked => Event::ForgotPassword,
            Message::SignupClicked => Event::Signup,
            Message::LoginPressed => {
                tracing::debug!("login pressed, no authentication backend is wired");
                Event::None
            }
            Message::ContinueOfflinePressed => {
                tracing::debug!("continue offline pressed, no action is wired");
                Event::None
            }
        }
    }

    /// Render the login panel.
    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let content = form::header(&ctx, "login-title")
            .spacing(spacing::XS)
            .push(form::gap(spacing::XS))
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
            .push(form::link(
                &ctx,
                ids::FORGOT_LABEL,
                "login-forgot-link",
                Message::ForgotPasswordClicked,
                Horizontal::Right,
            ))
            .push(form::primary_button(
                &ctx,
                ids::LOGIN_BUTTON,
                "login-button",
                Message::LoginPressed,
            ))
            .push(form::divider(&ctx, "login-divider"))
            .push(form::secondary_button(
                &ctx,
                ids::CONTINUE_BUTTON,
                "login-continue-button",
                Message::ContinueOfflinePressed,
            ))
            .push(form::gap(spacing::XS))
            .push(form::link(
                &ctx,
                ids::LINK_LABEL,
                "login-signup-link",
                Message::SignupClicked,
                Horizontal::Center,
            ));

        form::panel(&ctx, ids::LOGIN_PANEL, content)
    }
}
