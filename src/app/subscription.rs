// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only window geometry is routed from native events; pointer and keyboard
//! input reach the panels through their widgets.

use super::Message;
use iced::{event, window, Event, Subscription};

/// Creates the subscription reporting window size changes.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| window_size_message(&event))
}

fn window_size_message(event: &Event) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(*size)),
        Event::Window(window::Event::Opened { size, .. }) => Some(Message::WindowResized(*size)),
        _ => None,
    }
}
