// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded in the binary at build time.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
