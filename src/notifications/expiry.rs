// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timers keyed by toast id.
//!
//! A timer is just a deadline owned by the store. Nothing runs in the
//! background on its own: a driver (the UI tick or [`super::ExpiryTask`])
//! asks for [`ExpiryTimers::take_expired`] and dismisses what comes back.
//! Dropping or clearing the timers therefore cancels them outright.

use super::id::ToastId;
use std::collections::HashMap;
use tokio::time::Instant;

#[derive(Debug, Default, Clone)]
pub struct ExpiryTimers {
    deadlines: HashMap<ToastId, Instant>,
}

impl ExpiryTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a timer for `id` unless one is already live.
    ///
    /// Returns `true` if a new timer was armed.
    pub fn arm(&mut self, id: &ToastId, deadline: Instant) -> bool {
        if self.deadlines.contains_key(id) {
            return false;
        }
        self.deadlines.insert(id.clone(), deadline);
        true
    }

    /// Cancels the timer for `id`. Returns `true` if one was armed.
    pub fn cancel(&mut self, id: &ToastId) -> bool {
        self.deadlines.remove(id).is_some()
    }

    /// Cancels every timer and returns how many were armed.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.deadlines.len();
        self.deadlines.clear();
        count
    }

    /// Keeps only the timers whose id satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&ToastId) -> bool) {
        self.deadlines.retain(|id, _| keep(id));
    }

    #[must_use]
    pub fn is_armed(&self, id: &ToastId) -> bool {
        self.deadlines.contains_key(id)
    }

    #[must_use]
    pub fn deadline(&self, id: &ToastId) -> Option<Instant> {
        self.deadlines.get(id).copied()
    }

    /// Earliest deadline among the armed timers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    /// Removes and returns the ids whose deadline is at or before `now`,
    /// earliest first. Fired timers are discarded.
    pub fn take_expired(&mut self, now: Instant) -> Vec<ToastId> {
        let mut expired: Vec<(Instant, ToastId)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, id.clone()))
            .collect();
        expired.sort_by_key(|(deadline, _)| *deadline);

        for (_, id) in &expired {
            self.deadlines.remove(id);
        }
        expired.into_iter().map(|(_, id)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn arming_is_idempotent() {
        let mut timers = ExpiryTimers::new();
        let id = ToastId::from("1");
        let now = Instant::now();

        assert!(timers.arm(&id, now + Duration::from_secs(5)));
        assert!(!timers.arm(&id, now + Duration::from_secs(9)));
        assert_eq!(timers.deadline(&id), Some(now + Duration::from_secs(5)));
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn take_expired_returns_due_timers_in_deadline_order() {
        let mut timers = ExpiryTimers::new();
        let now = Instant::now();
        timers.arm(&ToastId::from("late"), now + Duration::from_millis(300));
        timers.arm(&ToastId::from("early"), now + Duration::from_millis(100));
        timers.arm(&ToastId::from("future"), now + Duration::from_secs(10));

        let expired = timers.take_expired(now + Duration::from_millis(300));

        assert_eq!(expired, vec![ToastId::from("early"), ToastId::from("late")]);
        assert_eq!(timers.len(), 1);
        assert!(timers.is_armed(&ToastId::from("future")));
    }

    #[test]
    fn nothing_expires_before_deadline() {
        let mut timers = ExpiryTimers::new();
        let now = Instant::now();
        timers.arm(&ToastId::from("1"), now + Duration::from_millis(5_000));

        assert!(timers
            .take_expired(now + Duration::from_millis(4_999))
            .is_empty());
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn cancel_and_cancel_all() {
        let mut timers = ExpiryTimers::new();
        let now = Instant::now();
        timers.arm(&ToastId::from("1"), now);
        timers.arm(&ToastId::from("2"), now);
        timers.arm(&ToastId::from("3"), now);

        assert!(timers.cancel(&ToastId::from("2")));
        assert!(!timers.cancel(&ToastId::from("2")));
        assert_eq!(timers.cancel_all(), 2);
        assert!(timers.is_empty());
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn next_deadline_is_the_earliest() {
        let mut timers = ExpiryTimers::new();
        let now = Instant::now();
        timers.arm(&ToastId::from("a"), now + Duration::from_secs(3));
        timers.arm(&ToastId::from("b"), now + Duration::from_secs(1));

        assert_eq!(timers.next_deadline(), Some(now + Duration::from_secs(1)));
    }
}
