// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toasts**: Auto-dismiss timeout and how many toasts are rendered
//! - **Ticks**: UI polling interval driving auto-dismiss
//! - **Logging**: Default verbosity

use std::time::Duration;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Time a toast stays visible before it is dismissed automatically (ms).
pub const DEFAULT_TOAST_TIMEOUT_MS: u64 = 5_000;

/// Minimum configurable toast timeout (ms).
pub const MIN_TOAST_TIMEOUT_MS: u64 = 1_000;

/// Maximum configurable toast timeout (ms).
pub const MAX_TOAST_TIMEOUT_MS: u64 = 60_000;

/// [`DEFAULT_TOAST_TIMEOUT_MS`] as a `Duration`.
pub const DEFAULT_TOAST_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TOAST_TIMEOUT_MS);

/// Number of toasts rendered at once; older visible ones wait off-screen.
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 5;

/// Minimum number of rendered toasts.
pub const MIN_MAX_VISIBLE_TOASTS: usize = 1;

/// Maximum number of rendered toasts.
pub const MAX_MAX_VISIBLE_TOASTS: usize = 10;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval of the UI tick that fires due toast timers (ms).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log level used when neither the config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_TIMEOUT_MS > 0);
    assert!(MAX_TOAST_TIMEOUT_MS >= MIN_TOAST_TIMEOUT_MS);
    assert!(DEFAULT_TOAST_TIMEOUT_MS >= MIN_TOAST_TIMEOUT_MS);
    assert!(DEFAULT_TOAST_TIMEOUT_MS <= MAX_TOAST_TIMEOUT_MS);

    assert!(MIN_MAX_VISIBLE_TOASTS > 0);
    assert!(MAX_MAX_VISIBLE_TOASTS >= MIN_MAX_VISIBLE_TOASTS);
    assert!(DEFAULT_MAX_VISIBLE_TOASTS >= MIN_MAX_VISIBLE_TOASTS);
    assert!(DEFAULT_MAX_VISIBLE_TOASTS <= MAX_MAX_VISIBLE_TOASTS);

    // Ticks must be fine-grained enough to honour the shortest timeout.
    assert!(TICK_INTERVAL_MS < MIN_TOAST_TIMEOUT_MS);
};
