// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts are short, auto-expiring messages about the outcome of an action
//! (report saved, upload failed, ...). This module keeps them in one ordered
//! store and dismisses each one a fixed time after it appears.
//!
//! # Components
//!
//! - [`id`] - process-wide id generator
//! - [`toast`] - `Toast` record, props, partial updates and severities
//! - [`store`] - reducer and `ToastStore` owning toasts and timers
//! - [`expiry`] - auto-dismiss deadlines keyed by id
//! - [`handle`] - shared `Toaster` handle and the tokio expiry task
//! - [`registry`] - process-wide registration of the application's handle
//! - [`notify`] - free functions usable from anywhere once registered
//!
//! # Usage
//!
//! ```ignore
//! use hazard_watch::notifications::{notify, registry, ToastProps, Toaster};
//!
//! // At startup
//! let toaster = Toaster::default();
//! registry::install(toaster.clone());
//!
//! // Anywhere else
//! notify::success(ToastProps::titled("Report submitted"));
//!
//! // In the view, render `toaster.snapshot()`
//! ```
//!
//! # Lifecycle
//!
//! created -> visible -> dismissed (by the user or the timer) -> removed.
//! No state is ever re-entered.

pub mod expiry;
pub mod handle;
pub mod id;
pub mod notify;
pub mod registry;
pub mod store;
pub mod toast;

pub use handle::{ExpiryTask, Toaster};
pub use id::{next_id, ToastId};
pub use store::{Action, State, ToastStore};
pub use toast::{Severity, Toast, ToastAction, ToastProps, ToastUpdate, Variant};
