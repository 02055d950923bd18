// SPDX-License-Identifier: MPL-2.0
//! Element stylesheet loaded from a TOML file.
//!
//! Each top-level table is keyed by an element identifier (see [`ids`]) and
//! may set any of the following keys:
//!
//! ```toml
//! [TitleLabel]
//! text-size = 28
//! text-color = "#1E293B"
//!
//! [LoginButton]
//! background = "#2563EB"
//! border-radius = 6
//! ```
//!
//! Colors are `#RRGGBB` or `#RRGGBBAA`. A missing file is not an error: the
//! window keeps the look given by the design tokens.

use crate::error::{Error, Result, StylesheetError};
use iced::widget::{button, container, text_input, Text};
use iced::{Background, Border, Color};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Element identifiers understood by the stylesheet.
pub mod ids {
    pub const MAIN_WINDOW: &str = "MainWindow";
    pub const LOGIN_PANEL: &str = "LoginPanel";
    pub const FORGOT_PANEL: &str = "ForgotPanel";
    pub const SIGNUP_PANEL: &str = "SignupPanel";

    pub const TITLE_LABEL: &str = "TitleLabel";
    /// Also used by the display name field of the signup panel.
    pub const EMAIL_LABEL: &str = "EmailLabel";
    /// Also used by the display name field of the signup panel.
    pub const EMAIL_INPUT: &str = "EmailInput";
    /// First and last name fields of the signup panel.
    pub const NAME_LABEL: &str = "NameLabel";
    pub const NAME_INPUT: &str = "NameInput";
    pub const PASSWORD_LABEL: &str = "PasswordLabel";
    pub const PASSWORD_INPUT: &str = "PasswordInput";
    pub const DIVIDER_LABEL: &str = "DividerLabel";
    /// Clickable labels that navigate between panels.
    pub const LINK_LABEL: &str = "LinkLabel";
    pub const FORGOT_LABEL: &str = "ForgotLabel";

    pub const LOGIN_BUTTON: &str = "LoginButton";
    pub const CONTINUE_BUTTON: &str = "ContinueButton";
    pub const SEND_LOGIN_LINK: &str = "SndLoginLink";
    pub const BACK_TO_LOGIN: &str = "BackToLogin";
    pub const SIGNUP_BUTTON: &str = "Signup";

    /// Every identifier above.
    pub const ALL: [&str; 19] = [
        MAIN_WINDOW,
        LOGIN_PANEL,
        FORGOT_PANEL,
        SIGNUP_PANEL,
        TITLE_LABEL,
        EMAIL_LABEL,
        EMAIL_INPUT,
        NAME_LABEL,
        NAME_INPUT,
        PASSWORD_LABEL,
        PASSWORD_INPUT,
        DIVIDER_LABEL,
        LINK_LABEL,
        FORGOT_LABEL,
        LOGIN_BUTTON,
        CONTINUE_BUTTON,
        SEND_LOGIN_LINK,
        BACK_TO_LOGIN,
        SIGNUP_BUTTON,
    ];
}

/// Overrides for one element. Unset fields keep the default look.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementStyle {
    pub text_size: Option<f32>,
    pub text_color: Option<Color>,
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: Option<f32>,
    pub border_radius: Option<f32>,
}

static EMPTY_STYLE: ElementStyle = ElementStyle {
    text_size: None,
    text_color: None,
    background: None,
    border_color: None,
    border_width: None,
    border_radius: None,
};

impl ElementStyle {
    /// Applies size and color overrides to a text widget.
    pub fn text<'a>(&self, content: Text<'a>, default_size: f32) -> Text<'a> {
        let content = content.size(self.text_size.unwrap_or(default_size));
        match self.text_color {
            Some(color) => content.color(color),
            None => content,
        }
    }

    fn border(&self, base: Border) -> Border {
        Border {
            color: self.border_color.unwrap_or(base.color),
            width: self.border_width.unwrap_or(base.width),
            radius: self.border_radius.map_or(base.radius, Into::into),
        }
    }

    pub fn container(&self, base: container::Style) -> container::Style {
        container::Style {
            text_color: self.text_color.or(base.text_color),
            background: self.background.map(Background::Color).or(base.background),
            border: self.border(base.border),
            ..base
        }
    }

    pub fn button(&self, base: button::Style) -> button::Style {
        button::Style {
            background: self.background.map(Background::Color).or(base.background),
            text_color: self.text_color.unwrap_or(base.text_color),
            border: self.border(base.border),
            ..base
        }
    }

    pub fn text_input(&self, base: text_input::Style) -> text_input::Style {
        text_input::Style {
            background: self.background.map_or(base.background, Background::Color),
            border: self.border(base.border),
            value: self.text_color.unwrap_or(base.value),
            ..base
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawElementStyle {
    text_size: Option<f32>,
    text_color: Option<String>,
    background: Option<String>,
    border_color: Option<String>,
    border_width: Option<f32>,
    border_radius: Option<f32>,
}

/// Parsed stylesheet: element identifier to overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    elements: HashMap<String, ElementStyle>,
}

impl Stylesheet {
    /// Parses stylesheet source text.
    pub fn parse(source: &str) -> std::result::Result<Self, StylesheetError> {
        let raw: HashMap<String, RawElementStyle> =
            toml::from_str(source).map_err(|err| StylesheetError::Syntax(err.to_string()))?;

        let mut elements = HashMap::with_capacity(raw.len());
        for (element, style) in raw {
            let color = |value: Option<String>| -> std::result::Result<Option<Color>, StylesheetError> {
                value
                    .map(|value| {
                        parse_hex_color(&value).ok_or_else(|| StylesheetError::InvalidColor {
                            element: element.clone(),
                            value,
                        })
                    })
                    .transpose()
            };

            let parsed = ElementStyle {
                text_size: style.text_size,
                text_color: color(style.text_color)?,
                background: color(style.background)?,
                border_color: color(style.border_color)?,
                border_width: style.border_width,
                border_radius: style.border_radius,
            };
            elements.insert(element, parsed);
        }

        Ok(Self { elements })
    }

    /// Overrides for `id`, or an empty style when the sheet does not mention it.
    #[must_use]
    pub fn get(&self, id: &str) -> &ElementStyle {
        self.elements.get(id).unwrap_or(&EMPTY_STYLE)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

/// Loads a stylesheet from `path`.
///
/// A missing file yields the empty stylesheet and no error.
pub fn load_from_path(path: &Path) -> Result<Stylesheet> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Stylesheet::default()),
        Err(err) => return Err(err.into()),
    };
    Ok(Stylesheet::parse(&source)?)
}

/// Loads a stylesheet, returning the default one and a warning key on failure.
pub fn load(path: &Path) -> (Stylesheet, Option<String>) {
    match load_from_path(path) {
        Ok(sheet) => {
            if sheet.is_empty() {
                tracing::debug!(path = %path.display(), "no stylesheet, using default appearance");
            } else {
                tracing::info!(path = %path.display(), elements = sheet.len(), "stylesheet loaded");
            }
            (sheet, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "stylesheet ignored");
            let key = match &err {
                Error::Stylesheet(inner) => inner.i18n_key(),
                Error::Io(_) => "warning-stylesheet-read",
                _ => "warning-stylesheet-syntax",
            };
            (Stylesheet::default(), Some(key.to_string()))
        }
    }
}

/// Parses `#RRGGBB` or `#RRGGBBAA`.
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if hex.len() == 8 { channel(6)? } else { 255 };

    Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_hex_color_accepts_rgb_and_rgba() {
        assert_eq!(parse_hex_color("#ffffff"), Some(Color::WHITE));
        assert_eq!(parse_hex_color("#000000"), Some(Color::BLACK));

        let translucent = parse_hex_color("#FF000080").unwrap();
        assert_eq!(translucent.r, 1.0);
        assert!((translucent.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn parse_hex_color_rejects_malformed_values() {
        assert!(parse_hex_color("ffffff").is_none());
        assert!(parse_hex_color("#fff").is_none());
        assert!(parse_hex_color("#gggggg").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn parse_reads_element_tables() {
        let sheet = Stylesheet::parse(
            r##"
[TitleLabel]
text-size = 28
text-color = "#112233"

[LoginButton]
background = "#2563EB"
border-radius = 6
"##,
        )
        .expect("valid stylesheet");

        assert_eq!(sheet.len(), 2);
        let title = sheet.get(ids::TITLE_LABEL);
        assert_eq!(title.text_size, Some(28.0));
        assert_eq!(title.text_color, parse_hex_color("#112233"));
        assert_eq!(sheet.get(ids::LOGIN_BUTTON).border_radius, Some(6.0));
    }

    #[test]
    fn unknown_element_gets_empty_style() {
        let sheet = Stylesheet::default();
        assert_eq!(*sheet.get(ids::EMAIL_INPUT), ElementStyle::default());
    }

    #[test]
    fn invalid_color_names_element() {
        let err = Stylesheet::parse("[EmailInput]\nbackground = \"blue\"\n").unwrap_err();
        assert_eq!(
            err,
            StylesheetError::InvalidColor {
                element: "EmailInput".into(),
                value: "blue".into()
            }
        );
    }

    #[test]
    fn syntax_error_is_reported() {
        let err = Stylesheet::parse("[TitleLabel\n").unwrap_err();
        assert!(matches!(err, StylesheetError::Syntax(_)));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("missing.toml");

        let sheet = load_from_path(&path).expect("missing stylesheet must not fail");
        assert!(sheet.is_empty());

        let (sheet, warning) = load(&path);
        assert!(sheet.is_empty());
        assert!(warning.is_none());
    }

    #[test]
    fn invalid_file_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("login.toml");
        fs::write(&path, "[TitleLabel]\ntext-color = \"#12\"\n").expect("write");

        let (sheet, warning) = load(&path);
        assert!(sheet.is_empty());
        assert_eq!(warning.as_deref(), Some("warning-stylesheet-color"));
    }

    #[test]
    fn element_ids_are_distinct() {
        let unique: std::collections::HashSet<_> = ids::ALL.iter().collect();
        assert_eq!(unique.len(), ids::ALL.len());
    }

    #[test]
    fn email_entry_leaves_name_fields_alone() {
        let sheet = Stylesheet::parse(
            "[EmailInput]\nborder-radius = 2\n\n[EmailLabel]\ntext-size = 20\n",
        )
        .expect("valid stylesheet");

        assert_eq!(sheet.get(ids::EMAIL_INPUT).border_radius, Some(2.0));
        assert_eq!(*sheet.get(ids::NAME_INPUT), ElementStyle::default());
        assert_eq!(*sheet.get(ids::NAME_LABEL), ElementStyle::default());
    }

    #[test]
    fn unreadable_path_reports_read_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("login.toml");
        fs::create_dir(&path).expect("create dir");

        let (sheet, warning) = load(&path);
        assert!(sheet.is_empty());
        assert_eq!(warning.as_deref(), Some("warning-stylesheet-read"));
    }

    #[test]
    fn button_override_keeps_unset_fields() {
        let style = ElementStyle {
            background: Some(Color::BLACK),
            ..ElementStyle::default()
        };
        let base = button::Style {
            text_color: Color::WHITE,
            ..button::Style::default()
        };

        let merged = style.button(base);
        assert_eq!(merged.background, Some(Background::Color(Color::BLACK)));
        assert_eq!(merged.text_color, Color::WHITE);
    }
}
