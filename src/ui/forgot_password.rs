// SPDX-License-Identifier: MPL-2.0
//! Password recovery panel.

use crate::ui::design_tokens::spacing;
use crate::ui::form::{self, ViewContext};
use crate::ui::stylesheet::ids;
use iced::alignment::Horizontal;
use iced::Element;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub email: String,
}

/// Messages emitted by the password recovery panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    EmailChanged(String),
    SendLoginLinkPressed,
    CreateAccountClicked,
    BackToLoginPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    BackToLogin,
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::SendLoginLinkPressed => {
                tracing::debug!("send login link pressed, no mail backend is wired");
                Event::None
            }
            // Both lead back to the login panel.
            Message::CreateAccountClicked | Message::BackToLoginPressed => Event::BackToLogin,
        }
    }

    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let content = form::header(&ctx, "forgot-title")
            .spacing(spacing::SM)
            .push(form::gap(spacing::XS))
            .push(form::label(&ctx, ids::EMAIL_LABEL, "field-email"))
            .push(form::input(&ctx, ids::EMAIL_INPUT, &self.email, Message::EmailChanged, false))
            .push(form::primary_button(
                &ctx,
                ids::SEND_LOGIN_LINK,
                "forgot-send-link-button",
                Message::SendLoginLinkPressed,
            ))
            .push(form::divider(&ctx, "forgot-divider"))
            .push(form::link(
                &ctx,
                ids::LINK_LABEL,
                "forgot-create-account-link",
                Message::CreateAccountClicked,
                Horizontal::Center,
            ))
            .push(form::gap(spacing::XL))
            .push(form::secondary_button(
                &ctx,
                ids::BACK_TO_LOGIN,
                "forgot-back-button",
                Message::BackToLoginPressed,
            ));

        form::panel(&ctx, ids::FORGOT_PANEL, content)
    }
}
