// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active panel is drawn inside a fixed-width column centered in the
//! window; startup warnings, if any, sit below it.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::form::ViewContext as PanelContext;
use crate::ui::styles;
use crate::ui::stylesheet::{ids, Stylesheet};
use crate::ui::{forgot_password, login, signup};
use iced::widget::{button, container, svg, text, Column};
use iced::{Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub login: &'a login::State,
    pub forgot_password: &'a forgot_password::State,
    pub signup: &'a signup::State,
    pub stylesheet: &'a Stylesheet,
    pub logo: Option<&'a svg::Handle>,
    pub panel_width: f32,
    pub warnings: &'a [String],
}

/// Renders the active panel.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel_ctx = PanelContext {
        i18n: ctx.i18n,
        stylesheet: ctx.stylesheet,
        logo: ctx.logo,
    };

    let active_panel: Element<'_, Message> = match ctx.screen {
        Screen::Login => ctx.login.view(panel_ctx).map(Message::Login),
        Screen::ForgotPassword => ctx
            .forgot_password
            .view(panel_ctx)
            .map(Message::ForgotPassword),
        Screen::Signup => ctx.signup.view(panel_ctx).map(Message::Signup),
    };

    let mut column = Column::new()
        .width(Length::Fixed(ctx.panel_width))
        .height(Length::Fill)
        .spacing(spacing::SM)
        .push(active_panel);

    if !ctx.warnings.is_empty() {
        column = column.push(view_warnings(ctx.i18n, ctx.warnings));
    }

    let window_style = *ctx.stylesheet.get(ids::MAIN_WINDOW);

    container(column)
        .center_x(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(move |theme: &Theme| window_style.container(styles::container::window(theme)))
        .into()
}

fn view_warnings<'a>(i18n: &I18n, warnings: &[String]) -> Element<'a, Message> {
    let lines = warnings.iter().fold(Column::new().spacing(spacing::XXS), |column, key| {
        column.push(text(i18n.tr(key)).size(typography::CAPTION))
    });

    button(lines)
        .on_press(Message::DismissWarnings)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::banner)
        .into()
}
