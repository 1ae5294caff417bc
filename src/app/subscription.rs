// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription that drives alert auto-dismiss,
/// toast expiry, the search debounce, entry animations, and the saving
/// state.
///
/// The subscription only runs while some timed behavior is pending; an idle
/// application receives no ticks at all.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
