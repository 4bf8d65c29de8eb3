// SPDX-License-Identifier: MPL-2.0
//! Shared handle to the single toast store.
//!
//! The application root owns one [`Toaster`] and installs it in the
//! [`registry`](super::registry) so code outside the UI tree can reach it.
//! Clones share the same store.

use super::id::ToastId;
use super::store::ToastStore;
use super::toast::{Severity, Toast, ToastProps, ToastUpdate};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::trace;

#[derive(Debug)]
struct Shared {
    store: Mutex<ToastStore>,
    /// Signalled after every mutation so the expiry task re-reads deadlines.
    changed: Notify,
}

/// Cheaply cloneable handle to a [`ToastStore`].
#[derive(Debug, Clone)]
pub struct Toaster {
    shared: Arc<Shared>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::from_store(ToastStore::default())
    }
}

impl Toaster {
    /// Creates a handle around a new store with the given auto-dismiss timeout.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self::from_store(ToastStore::new(timeout))
    }

    #[must_use]
    pub fn from_store(store: ToastStore) -> Self {
        Self {
            shared: Arc::new(Shared {
                store: Mutex::new(store),
                changed: Notify::new(),
            }),
        }
    }

    /// Whether both handles point at the same store.
    #[must_use]
    pub fn same_store(&self, other: &Toaster) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    /// Runs `f` against the store without cloning its toasts.
    pub fn with_store<R>(&self, f: impl FnOnce(&ToastStore) -> R) -> R {
        f(&self.shared.store.lock())
    }

    /// Copy of the current toasts in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Toast> {
        self.with_store(|store| store.toasts().to_vec())
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<Toast> {
        self.with_store(|store| store.get(id).cloned())
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        self.with_store(|store| !store.is_empty())
    }

    pub fn add(&self, props: ToastProps) -> ToastId {
        self.mutate(|store| store.add(props))
    }

    pub fn update(&self, update: ToastUpdate) {
        self.mutate(|store| store.update(update));
    }

    pub fn dismiss(&self, id: Option<&ToastId>) {
        self.mutate(|store| store.dismiss(id));
    }

    pub fn remove(&self, id: Option<&ToastId>) {
        self.mutate(|store| store.remove(id));
    }

    pub fn notify(&self, severity: Severity, props: ToastProps) -> ToastId {
        self.mutate(|store| store.notify(severity, props))
    }

    pub fn success(&self, props: ToastProps) -> ToastId {
        self.notify(Severity::Success, props)
    }

    pub fn error(&self, props: ToastProps) -> ToastId {
        self.notify(Severity::Error, props)
    }

    pub fn warning(&self, props: ToastProps) -> ToastId {
        self.notify(Severity::Warning, props)
    }

    pub fn info(&self, props: ToastProps) -> ToastId {
        self.notify(Severity::Info, props)
    }

    /// Fires timers due at `now`. Called from the UI tick.
    pub fn tick(&self, now: Instant) -> Vec<ToastId> {
        self.mutate(|store| store.expire(now))
    }

    pub fn prune_dismissed(&self) -> Vec<ToastId> {
        self.mutate(ToastStore::prune_dismissed)
    }

    /// Cancels every outstanding timer of the store.
    pub fn teardown(&self) {
        self.mutate(ToastStore::teardown);
    }

    /// Spawns a tokio task that fires timers as their deadlines pass.
    ///
    /// Must be called from within a tokio runtime. The task stops when the
    /// returned [`ExpiryTask`] is dropped.
    #[must_use]
    pub fn spawn_expiry(&self) -> ExpiryTask {
        let shared = Arc::clone(&self.shared);
        ExpiryTask {
            handle: tokio::spawn(run_expiry(shared)),
        }
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut ToastStore) -> R) -> R {
        let result = f(&mut self.shared.store.lock());
        self.shared.changed.notify_one();
        result
    }
}

/// Background auto-dismiss driver. Aborted on drop.
#[derive(Debug)]
pub struct ExpiryTask {
    handle: JoinHandle<()>,
}

impl ExpiryTask {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ExpiryTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run_expiry(shared: Arc<Shared>) {
    loop {
        let deadline = shared.store.lock().next_deadline();
        match deadline {
            Some(deadline) => {
                tokio::select! {
                    () = time::sleep_until(deadline) => {
                        let expired = shared.store.lock().expire(Instant::now());
                        trace!(count = expired.len(), "expiry task dismissed toasts");
                    }
                    () = shared.changed.notified() => {}
                }
            }
            None => shared.changed.notified().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TOAST_TIMEOUT;
    use crate::notifications::toast::Variant;

    #[test]
    fn clones_share_one_store() {
        let toaster = Toaster::default();
        let other = toaster.clone();

        let id = other.success(ToastProps::titled("shared"));

        assert!(toaster.same_store(&other));
        assert!(toaster.get(&id).is_some());
        assert!(!toaster.same_store(&Toaster::default()));
    }

    #[test]
    fn snapshot_preserves_order() {
        let toaster = Toaster::default();
        let a = toaster.error(ToastProps::titled("A"));
        let b = toaster.error(ToastProps::titled("B"));
        toaster.dismiss(Some(&a));

        let snapshot = toaster.snapshot();
        let ids: Vec<&ToastId> = snapshot.iter().map(Toast::id).collect();

        assert_eq!(ids, vec![&a, &b]);
        assert!(!snapshot[0].is_open());
        assert!(snapshot[1].is_open());
        assert_eq!(snapshot[1].variant(), Variant::Destructive);
    }

    #[test]
    fn update_rewrites_open_toast_in_place() {
        let toaster = Toaster::default();
        let id = toaster.info(ToastProps::titled("Uploading"));

        toaster.update(
            ToastUpdate::for_toast(id.clone())
                .with_title("Uploaded")
                .with_description("2 of 2 photos")
                .with_variant(Variant::Destructive),
        );

        let toast = toaster.get(&id).expect("toast kept");
        assert_eq!(toast.title(), Some("Uploaded"));
        assert_eq!(toast.description(), Some("2 of 2 photos"));
        assert_eq!(toast.variant(), Variant::Destructive);
        assert!(toast.is_open());
        assert_eq!(toaster.snapshot().len(), 1);
    }

    #[test]
    fn tick_fires_due_timers() {
        let toaster = Toaster::new(Duration::from_millis(200));
        let id = toaster.info(ToastProps::titled("tick"));

        assert!(toaster.tick(Instant::now()).is_empty());
        let fired = toaster.tick(Instant::now() + Duration::from_millis(200));

        assert_eq!(fired, vec![id.clone()]);
        assert!(!toaster.get(&id).unwrap().is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_task_dismisses_after_timeout() {
        let toaster = Toaster::new(DEFAULT_TOAST_TIMEOUT);
        let _task = toaster.spawn_expiry();
        let id = toaster.success(ToastProps::titled("Saved"));

        time::sleep(DEFAULT_TOAST_TIMEOUT - Duration::from_millis(1)).await;
        assert!(toaster.get(&id).unwrap().is_open());

        time::sleep(Duration::from_millis(2)).await;
        assert!(!toaster.get(&id).unwrap().is_open());

        toaster.remove(None);
        assert!(!toaster.has_toasts());
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_task_skips_manually_dismissed_toasts() {
        let toaster = Toaster::new(DEFAULT_TOAST_TIMEOUT);
        let _task = toaster.spawn_expiry();
        let a = toaster.error(ToastProps::titled("A"));
        let b = toaster.error(ToastProps::titled("B"));

        toaster.dismiss(Some(&a));
        time::sleep(Duration::from_millis(10)).await;

        let snapshot = toaster.snapshot();
        assert!(!snapshot[0].is_open());
        assert!(snapshot[1].is_open());
        assert_eq!(snapshot[1].id(), &b);
        assert_eq!(toaster.with_store(ToastStore::armed_timers), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_task_stops_expiry() {
        let toaster = Toaster::new(Duration::from_millis(100));
        let task = toaster.spawn_expiry();
        let id = toaster.info(ToastProps::titled("orphan"));

        drop(task);
        time::sleep(Duration::from_millis(500)).await;

        assert!(toaster.get(&id).unwrap().is_open());
    }
}
