// SPDX-License-Identifier: MPL-2.0
//! Hazard reports.
//!
//! A report starts life as a [`ReportDraft`] filled in by the form. The
//! draft is validated into a [`NewReport`] before anything is uploaded;
//! validation failures are surfaced to the user as error toasts.
//! [`submit_report`] then uploads media and inserts the row through a
//! [`ReportBackend`], raising a toast for each outcome. [`Report`] is the
//! stored shape handed back by the backend.

pub mod air_quality;
pub mod backend;
pub mod location;
pub mod row;

pub use backend::{MemoryBackend, ReportBackend};
pub use location::{GeocodedAddress, LocationLookup};
pub use row::{recent_reports, NewReportRow, ReportRow};

use crate::notifications::{notify, ToastProps};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Toast title after a report was stored.
pub const SUBMIT_SUCCEEDED: &str = "Report submitted successfully";

/// Why a draft could not become a report.
///
/// The messages are shown verbatim in the error toast.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    #[error("Please select a hazard type")]
    MissingHazardType,
    #[error("Please provide a description")]
    MissingDescription,
    #[error("Location is required")]
    MissingLocation,
    #[error("Invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("Failed to upload images. Please try again.")]
    UploadFailed,
    #[error("Failed to submit report. Please try again.")]
    SubmitFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    #[serde(rename = "Water Pollution")]
    WaterPollution,
    #[serde(rename = "Air Pollution")]
    AirPollution,
    #[serde(rename = "Noise Pollution")]
    NoisePollution,
    #[serde(rename = "Chemical Spill")]
    ChemicalSpill,
    Other,
}

impl ReportType {
    /// Every type, in the order the form lists them.
    pub const ALL: [ReportType; 5] = [
        ReportType::WaterPollution,
        ReportType::AirPollution,
        ReportType::NoisePollution,
        ReportType::ChemicalSpill,
        ReportType::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ReportType::WaterPollution => "Water Pollution",
            ReportType::AirPollution => "Air Pollution",
            ReportType::NoisePollution => "Noise Pollution",
            ReportType::ChemicalSpill => "Chemical Spill",
            ReportType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportStatus {
    #[default]
    Pending,
    #[serde(rename = "Under Investigation")]
    UnderInvestigation,
    Resolved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HazardSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// WGS84 position, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidCoordinates`] outside -90..=90 / -180..=180.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ReportError> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(ReportError::InvalidCoordinates {
                latitude,
                longitude,
            })
        }
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Form state while the user is filling in a report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    pub hazard_type: Option<ReportType>,
    pub description: String,
    pub severity: Option<HazardSeverity>,
    /// Reverse-geocoded or typed location name.
    pub location_name: String,
    pub coordinates: Option<Coordinates>,
}

/// A validated draft, ready for upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReport {
    #[serde(rename = "type")]
    pub hazard_type: ReportType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<HazardSeverity>,
    pub location: Location,
}

impl ReportDraft {
    /// Fills the location fields from a finished lookup.
    pub fn apply_location(&mut self, lookup: &LocationLookup) {
        if let Some(location) = lookup.location() {
            self.location_name = location.name.clone();
            self.coordinates = location.coordinates;
        }
    }

    /// Checks the draft in form order: type, description, location.
    ///
    /// Only empty fields are rejected; text is kept as typed.
    ///
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn validate(&self) -> Result<NewReport, ReportError> {
        let hazard_type = self.hazard_type.ok_or(ReportError::MissingHazardType)?;

        if self.description.is_empty() {
            return Err(ReportError::MissingDescription);
        }
        if self.location_name.is_empty() {
            return Err(ReportError::MissingLocation);
        }

        Ok(NewReport {
            hazard_type,
            description: self.description.clone(),
            severity: self.severity,
            location: Location {
                name: self.location_name.clone(),
                coordinates: self.coordinates,
            },
        })
    }

    /// Validates the draft and raises an error toast when it is rejected.
    ///
    /// # Errors
    ///
    /// Same as [`ReportDraft::validate`].
    pub fn submit_with_feedback(&self) -> Result<NewReport, ReportError> {
        self.validate().inspect_err(|err| {
            warn!(%err, "report draft rejected");
            notify::error(ToastProps::titled(err.to_string()));
        })
    }
}

/// Validates `draft`, uploads `files` and stores the report.
///
/// Every outcome is reported to the user through a toast. A failed upload
/// does not stop the submission; the report is stored without media.
///
/// # Errors
///
/// Returns the validation error, or [`ReportError::SubmitFailed`] when the
/// backend rejects the insert.
pub fn submit_report<B: ReportBackend + ?Sized>(
    draft: &ReportDraft,
    files: &[String],
    backend: &mut B,
) -> Result<String, ReportError> {
    let report = draft.submit_with_feedback()?;
    let media_urls = upload_with_feedback(backend, files);

    match backend.insert_report(NewReportRow::new(report, media_urls)) {
        Ok(id) => {
            info!(%id, "report submitted");
            notify::success(ToastProps::titled(SUBMIT_SUCCEEDED));
            Ok(id)
        }
        Err(err) => {
            warn!(%err, "report submission failed");
            notify::error(ToastProps::titled(ReportError::SubmitFailed.to_string()));
            Err(ReportError::SubmitFailed)
        }
    }
}

/// Uploads `files`, returning their public URLs.
///
/// On failure an error toast is raised and no URLs are returned.
pub fn upload_with_feedback<B: ReportBackend + ?Sized>(
    backend: &mut B,
    files: &[String],
) -> Vec<String> {
    if files.is_empty() {
        return Vec::new();
    }
    let mut progress = UploadProgress::new(files.len());
    match backend.upload_media(files, &mut progress) {
        Ok(urls) => urls,
        Err(err) => {
            warn!(%err, completed = progress.percent(), "media upload failed");
            notify::error(ToastProps::titled(ReportError::UploadFailed.to_string()));
            Vec::new()
        }
    }
}

/// A report as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    #[serde(rename = "type")]
    pub hazard_type: ReportType,
    pub description: String,
    pub location: Location,
    pub status: ReportStatus,
    pub reported_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<HazardSeverity>,
}

/// Progress of a multi-file media upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    completed: usize,
    total: usize,
}

impl UploadProgress {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            completed: 0,
            total,
        }
    }

    /// Records one finished upload and returns the new percentage.
    pub fn file_done(&mut self) -> f32 {
        self.completed = (self.completed + 1).min(self.total);
        debug!(completed = self.completed, total = self.total, "upload progress");
        self.percent()
    }

    /// Completed share in percent; an empty batch counts as done.
    #[must_use]
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            return 100.0;
        }
        self.completed as f32 / self.total as f32 * 100.0
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }
}
