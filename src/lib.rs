// SPDX-License-Identifier: MPL-2.0
//! `iced_login` is a desktop authentication front-end built with the Iced GUI
//! framework.
//!
//! It presents three mutually exclusive panels (login, forgot password and
//! sign-up) over a user-provided stylesheet and logo, with Fluent-based
//! localization and persisted user preferences.

#![doc(html_root_url = "https://docs.rs/iced_login/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
