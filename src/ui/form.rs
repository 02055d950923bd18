// SPDX-License-Identifier: MPL-2.0
//! Building blocks shared by the login, password recovery and signup panels.
//!
//! Every helper takes the stylesheet identifier of the element it builds so
//! that stylesheet entries layer on top of the default styles.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::logo;
use crate::ui::styles;
use crate::ui::stylesheet::{ids, Stylesheet};
use crate::ui::widgets::clickable_label;
use iced::alignment::Horizontal;
use iced::widget::{button, container, scrollable, svg, text, text_input, Column, Space};
use iced::{Element, Length, Theme};

/// Contextual data needed to render any panel.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub stylesheet: &'a Stylesheet,
    pub logo: Option<&'a svg::Handle>,
}

/// Logo and title at the top of a panel.
pub fn header<'a, Message: 'a>(ctx: &ViewContext<'a>, title_key: &str) -> Column<'a, Message> {
    let title = ctx
        .stylesheet
        .get(ids::TITLE_LABEL)
        .text(text(ctx.i18n.tr(title_key)), typography::TITLE_LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .spacing(spacing::MD)
        .push(logo::view(ctx.logo))
        .push(title)
}

/// Caption above an input.
pub fn label<'a, Message: 'a>(ctx: &ViewContext<'a>, id: &str, key: &str) -> Element<'a, Message> {
    ctx.stylesheet
        .get(id)
        .text(text(ctx.i18n.tr(key)), typography::BODY)
        .into()
}

/// Single-line input. `secure` hides the typed characters.
pub fn input<'a, Message: Clone + 'a>(
    ctx: &ViewContext<'a>,
    id: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    secure: bool,
) -> Element<'a, Message> {
    let overrides = *ctx.stylesheet.get(id);

    text_input("", value)
        .on_input(on_input)
        .secure(secure)
        .size(overrides.text_size.unwrap_or(typography::BODY_LG))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(move |theme: &Theme, status| overrides.text_input(styles::text_input::field(theme, status)))
        .into()
}

/// Clickable text that navigates somewhere else.
pub fn link<'a, Message: Clone + 'a>(
    ctx: &ViewContext<'a>,
    id: &str,
    key: &str,
    on_click: Message,
    align: Horizontal,
) -> Element<'a, Message> {
    let overrides = ctx.stylesheet.get(id);
    let content = overrides.text(text(ctx.i18n.tr(key)), typography::BODY);
    let content = if overrides.text_color.is_none() {
        content.style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        })
    } else {
        content
    };

    container(clickable_label(content, on_click))
        .width(Length::Fill)
        .align_x(align)
        .into()
}

/// Centered separator text.
pub fn divider<'a, Message: 'a>(ctx: &ViewContext<'a>, key: &str) -> Element<'a, Message> {
    ctx.stylesheet
        .get(ids::DIVIDER_LABEL)
        .text(text(ctx.i18n.tr(key)), typography::CAPTION)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

/// Full-width button for the main action of a panel.
pub fn primary_button<'a, Message: Clone + 'a>(
    ctx: &ViewContext<'a>,
    id: &str,
    key: &str,
    on_press: Message,
) -> Element<'a, Message> {
    styled_button(ctx, id, key, on_press, styles::button::primary)
}

/// Full-width button for secondary actions.
pub fn secondary_button<'a, Message: Clone + 'a>(
    ctx: &ViewContext<'a>,
    id: &str,
    key: &str,
    on_press: Message,
) -> Element<'a, Message> {
    styled_button(ctx, id, key, on_press, styles::button::secondary)
}

fn styled_button<'a, Message: Clone + 'a>(
    ctx: &ViewContext<'a>,
    id: &str,
    key: &str,
    on_press: Message,
    base: fn(&Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    let overrides = *ctx.stylesheet.get(id);
    let label = text(ctx.i18n.tr(key))
        .size(overrides.text_size.unwrap_or(typography::BODY))
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    button(label)
        .on_press(on_press)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(move |theme: &Theme, status| overrides.button(base(theme, status)))
        .into()
}

/// Vertical gap between groups of fields.
pub fn gap<'a, Message: 'a>(height: f32) -> Element<'a, Message> {
    Space::new().height(Length::Fixed(height)).into()
}

/// Wraps the panel content in its padded, scrollable surface.
pub fn panel<'a, Message: 'a>(
    ctx: &ViewContext<'a>,
    id: &str,
    content: Column<'a, Message>,
) -> Element<'a, Message> {
    let overrides = *ctx.stylesheet.get(id);

    let body = content
        .width(Length::Fill)
        .padding([spacing::PANEL_Y, spacing::PANEL_X]);

    container(scrollable(body).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |theme: &Theme| overrides.container(styles::container::panel(theme)))
        .into()
}
