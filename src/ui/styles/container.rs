// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface of the centered panel holding the active form.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Window background behind the panel.
pub fn window(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.extended_palette().background.base.color)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_slightly_translucent() {
        let style = panel(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::SURFACE),
            other => panic!("expected color background, got {:?}", other),
        }
    }

    #[test]
    fn window_background_is_opaque() {
        let style = window(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 1.0),
            other => panic!("expected color background, got {:?}", other),
        }
    }
}
