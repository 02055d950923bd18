// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for configuration and resource directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--resource-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_LOGIN_CONFIG_DIR`, `ICED_LOGIN_RESOURCE_DIR`)
//! 4. **Default** - platform config dir via `dirs`, or `res/` relative to the
//!    working directory for resources
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.resource_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedLogin";

/// Resource directory used when nothing else is configured.
pub const DEFAULT_RESOURCE_DIR: &str = "res";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_LOGIN_CONFIG_DIR";

/// Environment variable to override the resource directory.
pub const ENV_RESOURCE_DIR: &str = "ICED_LOGIN_RESOURCE_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_RESOURCE_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for config and resource directories.
///
/// Calls after the first one are ignored.
pub fn init_cli_overrides(config_dir: Option<String>, resource_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
    let _ = CLI_RESOURCE_DIR.set(resource_dir.map(PathBuf::from));
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_resource_dir() -> Option<PathBuf> {
    CLI_RESOURCE_DIR.get().and_then(Clone::clone)
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// This directory holds `settings.toml`. Platform defaults:
/// - Linux: `~/.config/IcedLogin/`
/// - macOS: `~/Library/Application Support/IcedLogin/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedLogin\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = env_path(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory holding the stylesheet and the logo.
///
/// Unlike the config directory this is never `None`: without any override
/// resources are looked up in `res/` relative to the working directory.
pub fn get_resource_dir() -> PathBuf {
    get_resource_dir_with_override(None)
}

/// Returns the resource directory with an optional override.
pub fn get_resource_dir_with_override(override_path: Option<PathBuf>) -> PathBuf {
    override_path
        .or_else(get_cli_resource_dir)
        .or_else(|| env_path(ENV_RESOURCE_DIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCE_DIR))
}
