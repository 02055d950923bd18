// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded brand SVG at runtime to produce an RGBA icon for
//! the window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/iced_login.svg");

/// Edge length of the rasterized icon, in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to a square RGBA buffer.
pub fn load_window_icon() -> Option<Icon> {
    let (rgba, size) = rasterize(SVG_SOURCE.as_bytes(), ICON_SIZE)?;
    icon::from_rgba(rgba, size, size).ok()
}

fn rasterize(svg_data: &[u8], target: u32) -> Option<(Vec<u8>, u32)> {
    let tree = match usvg::Tree::from_data(svg_data, &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!(error = %err, "window icon could not be parsed");
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some((pixmap.data().to_vec(), target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_icon_rasterizes() {
        let (rgba, size) = rasterize(SVG_SOURCE.as_bytes(), ICON_SIZE).expect("icon renders");
        assert_eq!(size, ICON_SIZE);
        assert_eq!(rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        assert!(rgba.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn invalid_svg_yields_none() {
        assert!(rasterize(b"not an svg", ICON_SIZE).is_none());
    }
}
