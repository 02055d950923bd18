// SPDX-License-Identifier: MPL-2.0
pub mod clickable_label;

pub use clickable_label::{clickable_label, ClickableLabel};
