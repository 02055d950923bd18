// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input;
use iced::{Border, Theme};

/// Form field with a brand-colored border while focused.
pub fn field(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let base = text_input::default(theme, status);

    match status {
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            },
            ..base
        },
        _ => text_input::Style {
            border: Border {
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
                ..base.border
            },
            ..base
        },
    }
}
