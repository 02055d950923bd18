// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Panel**: Width policy of the centered panel container
//! - **Resources**: File names looked up in the resource directory

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;

/// Initial window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: f32 = 1024.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 768.0;

// ==========================================================================
// Panel Defaults
// ==========================================================================

/// The panel container never gets narrower than this.
pub const MIN_PANEL_WIDTH: f32 = 430.0;

/// Share of the window width given to the panel container.
pub const PANEL_WIDTH_RATIO: f32 = 0.32;

// ==========================================================================
// Resource Defaults
// ==========================================================================

/// Stylesheet file name inside the resource directory.
pub const DEFAULT_STYLESHEET_FILE: &str = "login.toml";

/// Logo file name inside the resource directory.
pub const DEFAULT_LOGO_FILE: &str = "logo.svg";

/// Whether panel fields survive navigation when the config says nothing.
pub const DEFAULT_PRESERVE_FIELDS: bool = false;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);

    assert!(MIN_PANEL_WIDTH > 0.0);
    assert!(PANEL_WIDTH_RATIO > 0.0);
    assert!(PANEL_WIDTH_RATIO < 1.0);
    assert!(MIN_PANEL_WIDTH <= MIN_WINDOW_WIDTH);
};
