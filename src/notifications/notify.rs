// SPDX-License-Identifier: MPL-2.0
//! Free-function toast façade.
//!
//! These forward to the [`Toaster`](super::Toaster) installed in the
//! registry. Before anything is installed they log the problem and return
//! an empty id instead of failing the caller.

use super::id::ToastId;
use super::registry;
use super::toast::{Severity, ToastProps};
use tracing::error;

pub fn success(props: ToastProps) -> ToastId {
    dispatch(Severity::Success, props)
}

pub fn error(props: ToastProps) -> ToastId {
    dispatch(Severity::Error, props)
}

pub fn warning(props: ToastProps) -> ToastId {
    dispatch(Severity::Warning, props)
}

pub fn info(props: ToastProps) -> ToastId {
    dispatch(Severity::Info, props)
}

fn dispatch(severity: Severity, props: ToastProps) -> ToastId {
    match registry::current() {
        Ok(toaster) => toaster.notify(severity, props),
        Err(err) => {
            error!(%err, ?severity, "toast dropped");
            ToastId::empty()
        }
    }
}
