// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Panel messages are only honored while their panel is the active screen;
//! the navigation events they return drive the screen transitions.

use super::screen::Navigation;
use super::{panel_width, Message, Screen};
use crate::ui::{forgot_password, login, signup};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub login: &'a mut login::State,
    pub forgot_password: &'a mut forgot_password::State,
    pub signup: &'a mut signup::State,
    pub preserve_fields: bool,
    pub panel_width: &'a mut f32,
    pub warnings: &'a mut Vec<String>,
}

impl UpdateContext<'_> {
    /// Switches to the screen `request` leads to and resets the panel being
    /// entered unless fields are preserved.
    fn navigate(&mut self, request: Navigation) {
        let from = *self.screen;
        let to = from.navigate(request);
        if to == from {
            return;
        }

        if !self.preserve_fields {
            match to {
                Screen::Login => *self.login = login::State::default(),
                Screen::ForgotPassword => *self.forgot_password = forgot_password::State::default(),
                Screen::Signup => *self.signup = signup::State::default(),
            }
        }

        tracing::debug!(?from, ?to, "screen changed");
        *self.screen = to;
    }

    fn is_active(&self, screen: Screen) -> bool {
        if *self.screen == screen {
            return true;
        }
        tracing::debug!(active = ?*self.screen, source = ?screen, "dropping message from hidden panel");
        false
    }
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Login(message) => handle_login(ctx, message),
        Message::ForgotPassword(message) => handle_forgot_password(ctx, message),
        Message::Signup(message) => handle_signup(ctx, message),
        Message::WindowResized(size) => {
            *ctx.panel_width = panel_width(size.width);
        }
        Message::DismissWarnings => ctx.warnings.clear(),
    }

    Task::none()
}

fn handle_login(ctx: &mut UpdateContext<'_>, message: login::Message) {
    if !ctx.is_active(Screen::Login) {
        return;
    }
    match ctx.login.update(message) {
        login::Event::None => {}
        login::Event::ForgotPassword => ctx.navigate(Navigation::ForgotPassword),
        login::Event::Signup => ctx.navigate(Navigation::Signup),
    }
}

fn handle_forgot_password(ctx: &mut UpdateContext<'_>, message: forgot_password::Message) {
    if !ctx.is_active(Screen::ForgotPassword) {
        return;
    }
    match ctx.forgot_password.update(message) {
        forgot_password::Event::None => {}
        forgot_password::Event::BackToLogin => ctx.navigate(Navigation::BackToLogin),
    }
}

fn handle_signup(ctx: &mut UpdateContext<'_>, message: signup::Message) {
    if !ctx.is_active(Screen::Signup) {
        return;
    }
    match ctx.signup.update(message) {
        signup::Event::None => {}
        signup::Event::BackToLogin => ctx.navigate(Navigation::BackToLogin),
    }
}
