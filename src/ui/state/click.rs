// SPDX-License-Identifier: MPL-2.0
//! Click gesture state
//!
//! Turns a press/release pair into a single activation, button-style: the
//! press must start inside the element and the release must end inside it.

use iced::mouse::Button;

/// Tracks whether the current press originated on the element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickGesture {
    pressed: bool,
}

impl ClickGesture {
    /// Records a press. Only a primary press inside the element arms the gesture.
    pub fn press(&mut self, button: Button, inside: bool) {
        if button == Button::Left && inside {
            self.pressed = true;
        }
    }

    /// Records a release and returns `true` when it completes a click.
    ///
    /// The gesture is disarmed on every release, whatever the button or
    /// position.
    #[must_use]
    pub fn release(&mut self, button: Button, inside: bool) -> bool {
        let activated = self.pressed && button == Button::Left && inside;
        self.pressed = false;
        activated
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}
