// SPDX-License-Identifier: MPL-2.0
//! Logo shown at the top of every panel.
//!
//! The SVG is read from the resource directory once at startup. When the file
//! is missing or is not a valid SVG, panels show an empty area of the same
//! size so the layout does not jump.

use crate::error::{Error, Result};
use crate::ui::design_tokens::sizing;
use iced::widget::{svg, Space};
use iced::{Element, Length};
use resvg::usvg;
use std::fs;
use std::path::Path;

/// Reads and validates the logo at `path`.
pub fn load_from_path(path: &Path) -> Result<svg::Handle> {
    let data = fs::read(path)?;
    usvg::Tree::from_data(&data, &usvg::Options::default())
        .map_err(|err| Error::Svg(err.to_string()))?;
    Ok(svg::Handle::from_memory(data))
}

/// Loads the logo, logging instead of failing.
pub fn load(path: &Path) -> Option<svg::Handle> {
    match load_from_path(path) {
        Ok(handle) => {
            tracing::debug!(path = %path.display(), "logo loaded");
            Some(handle)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "logo unavailable");
            None
        }
    }
}

/// Renders the logo, or a blank square of the same size.
pub fn view<'a, Message: 'a>(handle: Option<&svg::Handle>) -> Element<'a, Message> {
    match handle {
        Some(handle) => svg(handle.clone())
            .width(Length::Fixed(sizing::LOGO))
            .height(Length::Fixed(sizing::LOGO))
            .into(),
        None => Space::new()
            .width(Length::Fixed(sizing::LOGO))
            .height(Length::Fixed(sizing::LOGO))
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SQUARE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="black"/></svg>"#;

    #[test]
    fn valid_svg_is_loaded() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("logo.svg");
        fs::write(&path, SQUARE_SVG).expect("write");

        assert!(load_from_path(&path).is_ok());
        assert!(load(&path).is_some());
    }

    #[test]
    fn missing_logo_is_none() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("absent.svg");

        assert!(matches!(load_from_path(&path), Err(Error::Io(_))));
        assert!(load(&path).is_none());
    }

    #[test]
    fn invalid_svg_is_rejected() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("logo.svg");
        fs::write(&path, "definitely not xml").expect("write");

        assert!(matches!(load_from_path(&path), Err(Error::Svg(_))));
    }
}
