// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::design_tokens::motion;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window resizes, which drive the wide/narrow layout switch.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates the periodic tick, only while something animates or expires.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(Duration::from_millis(motion::TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
