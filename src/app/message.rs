// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{forgot_password, login, signup};
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// panel messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Login(login::Message),
    ForgotPassword(forgot_password::Message),
    Signup(signup::Message),
    /// The window was opened or resized.
    WindowResized(Size),
    /// Hide the startup warnings banner.
    DismissWarnings,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional stylesheet path. Takes precedence over `[appearance]` in the config.
    pub stylesheet: Option<String>,
    /// Optional resource directory (stylesheet and logo).
    /// Takes precedence over `ICED_LOGIN_RESOURCE_DIR`.
    pub resource_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_LOGIN_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
