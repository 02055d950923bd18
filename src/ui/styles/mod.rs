// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.
//!
//! Each function gives the default look of an element; panels layer
//! stylesheet overrides on top of it.

pub mod button;
pub mod container;
pub mod text_input;
