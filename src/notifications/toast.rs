// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record held by the store, the
//! `ToastProps` callers build it from, and the partial `ToastUpdate`
//! merged into an existing record.

use super::id::ToastId;
use std::time::Duration;
use tokio::time::Instant;

/// Visual category of a toast. Used for styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// Severity chosen by the caller of the façade.
///
/// Only `Success` and `Error` force a [`Variant`]; `Warning` and `Info`
/// keep whatever variant the props already carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Applies this severity's preset to the given props.
    #[must_use]
    pub fn apply(self, props: ToastProps) -> ToastProps {
        match self {
            Severity::Success => props.with_variant(Variant::Default),
            Severity::Error => props.with_variant(Variant::Destructive),
            Severity::Warning | Severity::Info => props,
        }
    }
}

/// Interactive element attached to a toast. The store never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
    label: String,
    alt_text: String,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            alt_text: alt_text.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Text read by assistive technology in place of the label.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

/// Everything a caller supplies when creating a toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastProps {
    title: Option<String>,
    description: Option<String>,
    variant: Variant,
    action: Option<ToastAction>,
}

impl ToastProps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for props carrying only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new().with_title(title)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }
}

/// A toast as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    title: Option<String>,
    description: Option<String>,
    variant: Variant,
    action: Option<ToastAction>,
    /// True from creation until the toast is dismissed.
    open: bool,
    created_at: Instant,
}

impl Toast {
    pub(crate) fn from_props(id: ToastId, props: ToastProps, created_at: Instant) -> Self {
        Self {
            id,
            title: props.title,
            description: props.description,
            variant: props.variant,
            action: props.action,
            open: true,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    /// Whether the toast is still visible (not yet dismissed).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Age of the toast relative to `now`, saturating at zero.
    #[must_use]
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Closes the toast. Closing is one-way.
    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    pub(crate) fn merge(&mut self, update: ToastUpdate) {
        if let Some(title) = update.title {
            self.title = Some(title);
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(variant) = update.variant {
            self.variant = variant;
        }
        if let Some(action) = update.action {
            self.action = Some(action);
        }
    }
}

/// Partial toast merged into an existing record by id.
///
/// Visibility is not part of an update: a dismissed toast stays dismissed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastUpdate {
    id: Option<ToastId>,
    title: Option<String>,
    description: Option<String>,
    variant: Option<Variant>,
    action: Option<ToastAction>,
}

impl ToastUpdate {
    /// An update with no target. Applying it is a no-op.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An update targeting the toast with the given id.
    #[must_use]
    pub fn for_toast(id: ToastId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&ToastId> {
        self.id.as_ref()
    }
}
