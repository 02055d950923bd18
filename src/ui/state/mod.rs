// SPDX-License-Identifier: MPL-2.0
//! Reusable interaction state.

pub mod click;

pub use click::ClickGesture;
