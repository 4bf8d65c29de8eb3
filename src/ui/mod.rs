// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`toast_stack`] - Toast overlay widget and its messages
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toast_stack;
