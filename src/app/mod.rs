// SPDX-License-Identifier: MPL-2.0
//! Demo application shell.
//!
//! The `App` owns the single [`Toaster`] of the process, installs it in the
//! toast registry at startup and renders its toasts on top of a small panel
//! of buttons that exercise report submission, air-quality classification
//! and each toast severity. Reports go to an in-memory backend that can be
//! taken offline to show the failure toasts.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{Config, TICK_INTERVAL_MS};
use crate::notifications::{notify, registry, Severity, ToastAction, ToastId, ToastProps, Toaster};
use crate::report::air_quality::AirQuality;
use crate::report::{
    self, Coordinates, GeocodedAddress, HazardSeverity, LocationLookup, MemoryBackend,
    ReportBackend, ReportDraft, ReportType,
};
use crate::ui::toast_stack::ToastStack;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    toaster: Toaster,
    max_visible: usize,
    backend: MemoryBackend,
    /// Toast offering to show the last submitted report.
    report_toast: Option<ToastId>,
    /// Rotates the sample air-quality readings.
    air_sample: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toaster.with_store(|store| store.len()))
            .field("max_visible", &self.max_visible)
            .field("reports", &self.backend.len())
            .field("report_toast", &self.report_toast)
            .finish_non_exhaustive()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Ok(current) = registry::current() {
            if current.same_store(&self.toaster) {
                registry::uninstall();
            }
        }
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires an `Fn` boot closure.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Sample readings cycled by the air-quality button.
const AIR_SAMPLES: [(u16, f32); 4] = [(32, 6.1), (88, 27.4), (142, 51.0), (310, 260.5)];

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            config,
            config_warning,
        } = flags;

        let app = Self::with_config(&config);
        registry::install(app.toaster.clone());

        if let Some(warning) = config_warning {
            app.toaster.warning(
                ToastProps::titled("Settings could not be loaded").with_description(warning),
            );
        }
        info!(
            timeout_ms = config.notifications.timeout().as_millis() as u64,
            max_visible = app.max_visible,
            "demo shell started"
        );

        (app, Task::none())
    }

    fn with_config(config: &Config) -> Self {
        Self {
            toaster: Toaster::new(config.notifications.timeout()),
            max_visible: config.notifications.max_visible(),
            backend: MemoryBackend::new(),
            report_toast: None,
            air_sample: 0,
        }
    }

    fn title(&self) -> String {
        let open = self.toaster.with_store(|store| store.visible_count());
        if open == 0 {
            "Hazard Watch".to_string()
        } else {
            format!("Hazard Watch ({open})")
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.toaster.has_toasts(),
            Duration::from_millis(TICK_INTERVAL_MS),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(message) => {
                if let Some(id) = ToastStack::update(&self.toaster, message) {
                    self.handle_toast_action(&id);
                }
            }
            Message::SubmitSampleReport { valid } => self.submit_sample_report(valid),
            Message::ToggleOffline => {
                let offline = !self.backend.is_offline();
                self.backend.set_fail_uploads(offline);
                self.backend.set_fail_inserts(offline);
                info!(offline, "backend availability changed");
            }
            Message::SampleAirQuality => self.sample_air_quality(),
            Message::Notify(severity) => {
                let props = ToastProps::titled(severity_title(severity))
                    .with_description("Triggered from the demo panel");
                notify_with(severity, props);
            }
            Message::DismissAll => self.toaster.dismiss(None),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toasts: self.toaster.snapshot(),
            max_visible: self.max_visible,
            recent: self.recent_reports(),
            offline: self.backend.is_offline(),
        })
    }

    fn recent_reports(&self) -> Vec<report::Report> {
        self.backend.recent_reports().unwrap_or_else(|err| {
            warn!(%err, "recent reports unavailable");
            Vec::new()
        })
    }

    fn submit_sample_report(&mut self, valid: bool) {
        let mut draft = if valid {
            ReportDraft {
                hazard_type: Some(ReportType::WaterPollution),
                description: "Discoloured water downstream of the mill".to_string(),
                severity: Some(HazardSeverity::Medium),
                ..ReportDraft::default()
            }
        } else {
            ReportDraft {
                hazard_type: Some(ReportType::NoisePollution),
                ..ReportDraft::default()
            }
        };
        if let Ok(coordinates) = Coordinates::new(47.3769, 8.5417) {
            let address = GeocodedAddress {
                town: Some("Mill Creek".to_string()),
                ..GeocodedAddress::default()
            };
            draft.apply_location(&LocationLookup::resolved(coordinates, &address));
        }

        let files = ["creek.jpg".to_string()];
        // Every outcome has already raised its toast.
        let Ok(id) = report::submit_report(&draft, &files, &mut self.backend) else {
            return;
        };

        let offer = notify::info(
            ToastProps::titled(format!("Report #{id} stored"))
                .with_action(ToastAction::new("Details", "Show report details")),
        );
        self.report_toast = Some(offer);
    }

    fn sample_air_quality(&mut self) {
        let (index, pm25) = AIR_SAMPLES[self.air_sample % AIR_SAMPLES.len()];
        self.air_sample = self.air_sample.wrapping_add(1);

        let reading = AirQuality::new(index, pm25).with_temperature(18.0);
        let props = ToastProps::titled(format!("Air quality: {}", reading.level().label()))
            .with_description(reading.summary());
        if reading.level().is_harmful() {
            notify::warning(props);
        } else {
            notify::info(props);
        }
    }

    fn handle_toast_action(&mut self, id: &ToastId) {
        if self.report_toast.as_ref() != Some(id) {
            return;
        }
        self.report_toast = None;
        if let Some(stored) = self.recent_reports().into_iter().next() {
            notify::info(ToastProps::titled(format!("Report {}", stored.id)).with_description(
                format!(
                    "{}: {} ({:?}, {} photo(s))",
                    stored.location.name,
                    stored.description,
                    stored.status,
                    stored.media_urls.len()
                ),
            ));
        }
    }
}

fn notify_with(severity: Severity, props: ToastProps) -> ToastId {
    match severity {
        Severity::Success => notify::success(props),
        Severity::Error => notify::error(props),
        Severity::Warning => notify::warning(props),
        Severity::Info => notify::info(props),
    }
}

fn severity_title(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "All good",
        Severity::Error => "Something went wrong",
        Severity::Warning => "Heads up",
        Severity::Info => "For your information",
    }
}
