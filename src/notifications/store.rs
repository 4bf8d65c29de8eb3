// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! [`State`] is a plain reducer over the ordered toast list; every mutation
//! is one [`Action`]. [`ToastStore`] owns that state together with the
//! expiry timers and keeps the two in step after each action: visible toasts
//! without a timer get one, and timers of dismissed or removed toasts are
//! cancelled.

use super::expiry::ExpiryTimers;
use super::id::{next_id, ToastId};
use super::toast::{Severity, Toast, ToastProps, ToastUpdate};
use crate::config::DEFAULT_TOAST_TIMEOUT;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, trace};

/// A single mutation of the toast list.
#[derive(Debug, Clone)]
pub enum Action {
    /// Append a fully built toast.
    Add(Toast),
    /// Merge fields into the toast named by the update.
    Update(ToastUpdate),
    /// Hide one toast, or all of them when `None`.
    Dismiss(Option<ToastId>),
    /// Delete one toast, or all of them when `None`.
    Remove(Option<ToastId>),
}

/// Ordered toast list, oldest first.
#[derive(Debug, Clone, Default)]
pub struct State {
    toasts: Vec<Toast>,
}

impl State {
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Applies one action. Unknown ids are ignored.
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Add(toast) => self.toasts.push(toast),
            Action::Update(update) => {
                let Some(id) = update.id().cloned() else {
                    return;
                };
                if let Some(toast) = self.find_mut(&id) {
                    toast.merge(update);
                }
            }
            Action::Dismiss(Some(id)) => {
                if let Some(toast) = self.find_mut(&id) {
                    toast.close();
                }
            }
            Action::Dismiss(None) => self.toasts.iter_mut().for_each(Toast::close),
            Action::Remove(Some(id)) => self.toasts.retain(|toast| toast.id() != &id),
            Action::Remove(None) => self.toasts.clear(),
        }
    }

    fn find_mut(&mut self, id: &ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|toast| toast.id() == id)
    }
}

/// Owns the toast list and its auto-dismiss timers.
#[derive(Debug)]
pub struct ToastStore {
    state: State,
    timers: ExpiryTimers,
    timeout: Duration,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TIMEOUT)
    }
}

impl ToastStore {
    /// Creates an empty store whose toasts auto-dismiss after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            state: State::default(),
            timers: ExpiryTimers::new(),
            timeout,
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Current toasts in insertion order.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        self.state.toasts()
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&Toast> {
        self.toasts().iter().find(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts().is_empty()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.toasts().iter().filter(|toast| toast.is_open()).count()
    }

    /// Number of live auto-dismiss timers.
    #[must_use]
    pub fn armed_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_armed(&self, id: &ToastId) -> bool {
        self.timers.is_armed(id)
    }

    /// Earliest pending auto-dismiss deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Appends a new visible toast and returns its id.
    pub fn add(&mut self, props: ToastProps) -> ToastId {
        self.add_at(props, Instant::now())
    }

    /// Like [`ToastStore::add`], with an explicit creation instant.
    pub fn add_at(&mut self, props: ToastProps, now: Instant) -> ToastId {
        let id = next_id();
        debug!(id = %id, variant = ?props.variant(), "adding toast");
        self.dispatch(Action::Add(Toast::from_props(id.clone(), props, now)), now);
        id
    }

    /// Merges `update` into its target toast. No-op without a matching id.
    pub fn update(&mut self, update: ToastUpdate) {
        trace!(id = ?update.id(), "updating toast");
        self.dispatch(Action::Update(update), Instant::now());
    }

    /// Hides the toast with `id`, or every toast when `id` is `None`.
    pub fn dismiss(&mut self, id: Option<&ToastId>) {
        debug!(id = ?id, "dismissing toast");
        self.dispatch(Action::Dismiss(id.cloned()), Instant::now());
    }

    /// Deletes the toast with `id`, or every toast when `id` is `None`.
    pub fn remove(&mut self, id: Option<&ToastId>) {
        debug!(id = ?id, "removing toast");
        self.dispatch(Action::Remove(id.cloned()), Instant::now());
    }

    /// Creates a toast with the preset of `severity`.
    pub fn notify(&mut self, severity: Severity, props: ToastProps) -> ToastId {
        self.add(severity.apply(props))
    }

    pub fn success(&mut self, props: ToastProps) -> ToastId {
        self.notify(Severity::Success, props)
    }

    pub fn error(&mut self, props: ToastProps) -> ToastId {
        self.notify(Severity::Error, props)
    }

    pub fn warning(&mut self, props: ToastProps) -> ToastId {
        self.notify(Severity::Warning, props)
    }

    pub fn info(&mut self, props: ToastProps) -> ToastId {
        self.notify(Severity::Info, props)
    }

    /// Fires every timer due at `now`, dismissing its toast.
    ///
    /// Returns the ids that were dismissed.
    pub fn expire(&mut self, now: Instant) -> Vec<ToastId> {
        let expired = self.timers.take_expired(now);
        for id in &expired {
            trace!(id = %id, "toast timer fired");
            self.dispatch(Action::Dismiss(Some(id.clone())), now);
        }
        expired
    }

    /// Removes every dismissed toast, returning their ids.
    ///
    /// This is the pruning step the rendering layer runs once toasts
    /// have gone invisible.
    pub fn prune_dismissed(&mut self) -> Vec<ToastId> {
        let dismissed: Vec<ToastId> = self
            .toasts()
            .iter()
            .filter(|toast| !toast.is_open())
            .map(|toast| toast.id().clone())
            .collect();
        for id in &dismissed {
            self.dispatch(Action::Remove(Some(id.clone())), Instant::now());
        }
        dismissed
    }

    /// Cancels every outstanding timer. Toasts stay where they are.
    pub fn teardown(&mut self) {
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            debug!(cancelled, "cancelled toast timers on teardown");
        }
    }

    fn dispatch(&mut self, action: Action, now: Instant) {
        self.state.reduce(action);
        self.sync_timers(now);
    }

    fn sync_timers(&mut self, now: Instant) {
        let toasts = self.state.toasts();
        self.timers.retain(|id| {
            toasts
                .iter()
                .any(|toast| toast.id() == id && toast.is_open())
        });

        let deadline = now + self.timeout;
        for toast in toasts.iter().filter(|toast| toast.is_open()) {
            self.timers.arm(toast.id(), deadline);
        }
    }
}
