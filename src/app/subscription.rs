// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo shell.

use super::Message;
use crate::ui::toast_stack;
use iced::{time, Subscription};
use std::time::Duration;

/// Periodic tick driving toast auto-dismiss. Idle while the store is empty.
pub fn create_tick_subscription(has_toasts: bool, interval: Duration) -> Subscription<Message> {
    if has_toasts {
        time::every(interval).map(|_| Message::Toast(toast_stack::Message::Tick))
    } else {
        Subscription::none()
    }
}
