// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Panels follow the Elm-style "state down, messages up" pattern: each owns
//! its field values, turns widget messages into navigation events, and
//! renders itself from a shared [`form::ViewContext`].
//!
//! # Panels
//!
//! - [`login`] - Email and password sign-in
//! - [`forgot_password`] - Login link request
//! - [`signup`] - Account creation
//!
//! # Shared Infrastructure
//!
//! - [`form`] - Header, field, link and button builders shared by the panels
//! - [`stylesheet`] - Per-element style overrides loaded from disk
//! - [`logo`] - Logo loading and placeholder
//! - [`state`] - Pointer gesture tracking
//! - [`widgets`] - Custom Iced widgets (clickable label)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod forgot_password;
pub mod form;
pub mod login;
pub mod logo;
pub mod signup;
pub mod state;
pub mod styles;
pub mod stylesheet;
pub mod theming;
pub mod widgets;
