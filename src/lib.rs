// SPDX-License-Identifier: MPL-2.0
//! `hazard_watch` is the notification core of an environmental hazard
//! reporting client.
//!
//! It provides a toast store with per-toast auto-dismiss timers, a
//! process-wide registry with severity-typed free functions, hazard report
//! validation and an Iced rendering layer for the toast stack.

#![doc(html_root_url = "https://docs.rs/hazard_watch/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod notifications;
pub mod report;
pub mod ui;
