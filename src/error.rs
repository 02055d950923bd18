// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Stylesheet(StylesheetError),
}

/// Specific failures while reading a stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub enum StylesheetError {
    /// The file is not valid TOML or does not match the expected layout.
    Syntax(String),

    /// A color value is not in `#RRGGBB` or `#RRGGBBAA` form.
    InvalidColor { element: String, value: String },
}

impl StylesheetError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            StylesheetError::Syntax(_) => "warning-stylesheet-syntax",
            StylesheetError::InvalidColor { .. } => "warning-stylesheet-color",
        }
    }
}

impl fmt::Display for StylesheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StylesheetError::Syntax(msg) => write!(f, "{}", msg),
            StylesheetError::InvalidColor { element, value } => {
                write!(f, "invalid color '{}' for element '{}'", value, element)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Stylesheet(e) => write!(f, "Stylesheet Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<StylesheetError> for Error {
    fn from(err: StylesheetError) -> Self {
        Error::Stylesheet(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let toml_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn stylesheet_color_error_names_element() {
        let err: Error = StylesheetError::InvalidColor {
            element: "TitleLabel".into(),
            value: "#zzz".into(),
        }
        .into();
        let rendered = format!("{}", err);
        assert!(rendered.starts_with("Stylesheet Error:"));
        assert!(rendered.contains("TitleLabel"));
        assert!(rendered.contains("#zzz"));
    }

    #[test]
    fn stylesheet_error_i18n_keys() {
        assert_eq!(
            StylesheetError::Syntax(String::new()).i18n_key(),
            "warning-stylesheet-syntax"
        );
        assert_eq!(
            StylesheetError::InvalidColor {
                element: String::new(),
                value: String::new()
            }
            .i18n_key(),
            "warning-stylesheet-color"
        );
    }
}
