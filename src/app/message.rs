// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo shell.

use crate::config::Config;
use crate::notifications::Severity;
use crate::ui::toast_stack;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Toast(toast_stack::Message),
    /// Submit a sample report; `valid: false` leaves the description empty.
    SubmitSampleReport { valid: bool },
    /// Switch the in-memory backend between failing and working.
    ToggleOffline,
    /// Classify the next sample air-quality reading.
    SampleAirQuality,
    Notify(Severity),
    DismissAll,
}

/// Runtime flags passed from `main.rs` into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Loaded `settings.toml`, or defaults.
    pub config: Config,
    /// Why the settings file was ignored, shown as a warning toast.
    pub config_warning: Option<String>,
}
