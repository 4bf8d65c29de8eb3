// SPDX-License-Identifier: MPL-2.0
//! Process-wide registration point for the application's [`Toaster`].
//!
//! The application root installs its handle once at startup. Code that
//! lives outside the UI tree reaches it through [`current`], usually via the
//! free functions in [`super::notify`].
//!
//! # Usage
//!
//! ```ignore
//! let toaster = Toaster::new(config.notifications.timeout());
//! registry::install(toaster.clone());
//! ```

use super::handle::Toaster;
use crate::error::ToastError;
use parking_lot::RwLock;
use tracing::{debug, info};

/// The installed handle. Single writer (the application root), many readers.
static CURRENT: RwLock<Option<Toaster>> = RwLock::new(None);

/// Installs `toaster` as the process-wide toast context.
///
/// A previously installed handle is returned. If it belongs to a different
/// store, that store's timers are cancelled first so nothing keeps firing
/// into a store that is no longer rendered.
pub fn install(toaster: Toaster) -> Option<Toaster> {
    let previous = CURRENT.write().replace(toaster.clone());

    if let Some(previous) = &previous {
        if previous.same_store(&toaster) {
            debug!("toast context re-installed with the same store");
        } else {
            previous.teardown();
            debug!("replaced toast context, previous store torn down");
        }
    }
    info!("toast context installed");
    previous
}

/// Removes the installed handle and cancels its timers.
pub fn uninstall() -> Option<Toaster> {
    let previous = CURRENT.write().take();
    if let Some(previous) = &previous {
        previous.teardown();
        info!("toast context uninstalled");
    }
    previous
}

/// Returns the installed handle.
///
/// # Errors
///
/// Returns [`ToastError::Uninitialized`] when nothing has been installed.
pub fn current() -> Result<Toaster, ToastError> {
    CURRENT.read().clone().ok_or(ToastError::Uninitialized)
}

#[must_use]
pub fn is_installed() -> bool {
    CURRENT.read().is_some()
}
