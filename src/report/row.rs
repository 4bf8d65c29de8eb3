// SPDX-License-Identifier: MPL-2.0
//! Backend row shape of a report.
//!
//! The `reports` table is flat and snake_case: the location is split into
//! `location_name` and `coordinates`, and `media_urls` may be missing.

use super::{Coordinates, HazardSeverity, Location, NewReport, Report, ReportStatus, ReportType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of reports shown in the recent list.
pub const RECENT_REPORTS_LIMIT: usize = 5;

/// One stored row of the `reports` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: String,
    #[serde(rename = "type")]
    pub hazard_type: ReportType,
    pub description: String,
    pub location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub status: ReportStatus,
    pub reported_at: DateTime<Utc>,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<HazardSeverity>,
}

impl From<ReportRow> for Report {
    fn from(row: ReportRow) -> Self {
        Report {
            id: row.id,
            hazard_type: row.hazard_type,
            description: row.description,
            location: Location {
                name: row.location_name,
                coordinates: row.coordinates,
            },
            status: row.status,
            reported_at: row.reported_at,
            media_urls: row.media_urls,
            severity: row.severity,
        }
    }
}

impl From<Report> for ReportRow {
    fn from(report: Report) -> Self {
        ReportRow {
            id: report.id,
            hazard_type: report.hazard_type,
            description: report.description,
            location_name: report.location.name,
            coordinates: report.location.coordinates,
            status: report.status,
            reported_at: report.reported_at,
            media_urls: report.media_urls,
            severity: report.severity,
        }
    }
}

/// Insert payload; the backend fills in `id` and `reported_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReportRow {
    #[serde(rename = "type")]
    pub hazard_type: ReportType,
    pub description: String,
    pub location_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub media_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<HazardSeverity>,
    pub status: ReportStatus,
}

impl NewReportRow {
    /// New rows always start out pending.
    #[must_use]
    pub fn new(report: NewReport, media_urls: Vec<String>) -> Self {
        Self {
            hazard_type: report.hazard_type,
            description: report.description,
            location_name: report.location.name,
            coordinates: report.location.coordinates,
            media_urls,
            severity: report.severity,
            status: ReportStatus::Pending,
        }
    }

    /// Completes the row with the values the backend assigns.
    #[must_use]
    pub fn stored(self, id: impl Into<String>, reported_at: DateTime<Utc>) -> ReportRow {
        ReportRow {
            id: id.into(),
            hazard_type: self.hazard_type,
            description: self.description,
            location_name: self.location_name,
            coordinates: self.coordinates,
            status: self.status,
            reported_at,
            media_urls: self.media_urls,
            severity: self.severity,
        }
    }
}

/// Newest reports first, at most [`RECENT_REPORTS_LIMIT`].
#[must_use]
pub fn recent_reports(rows: impl IntoIterator<Item = ReportRow>) -> Vec<Report> {
    let mut rows: Vec<ReportRow> = rows.into_iter().collect();
    rows.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
    rows.truncate(RECENT_REPORTS_LIMIT);
    rows.into_iter().map(Report::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    fn row(id: &str, reported_at: DateTime<Utc>) -> ReportRow {
        ReportRow {
            id: id.to_string(),
            hazard_type: ReportType::NoisePollution,
            description: "Generator running all night".to_string(),
            location_name: "Dock Street".to_string(),
            coordinates: None,
            status: ReportStatus::Resolved,
            reported_at,
            media_urls: Vec::new(),
            severity: None,
        }
    }

    #[test]
    fn snake_case_row_without_media_parses() {
        let row: ReportRow = toml::from_str(
            r#"
            id = "42"
            type = "Water Pollution"
            description = "Foam on the weir"
            location_name = "Lock 7"
            status = "Under Investigation"
            reported_at = "2024-05-01T09:30:00Z"

            [coordinates]
            latitude = 51.5
            longitude = -0.12
            "#,
        )
        .expect("valid row");

        let report = Report::from(row);
        assert_eq!(report.hazard_type, ReportType::WaterPollution);
        assert_eq!(report.location.name, "Lock 7");
        assert_eq!(report.location.coordinates, Coordinates::new(51.5, -0.12).ok());
        assert_eq!(report.status, ReportStatus::UnderInvestigation);
        assert!(report.media_urls.is_empty());
    }

    #[test]
    fn report_flattens_back_into_row() {
        let report = Report::from(row("7", at(10)));
        let flat = ReportRow::from(report.clone());

        assert_eq!(flat, row("7", at(10)));
        assert_eq!(flat.location_name, report.location.name);
    }

    #[test]
    fn new_rows_are_always_pending() {
        let report = NewReport {
            hazard_type: ReportType::ChemicalSpill,
            description: "Drums leaking".to_string(),
            severity: Some(HazardSeverity::Critical),
            location: Location {
                name: "Yard 3".to_string(),
                coordinates: None,
            },
        };
        let insert = NewReportRow::new(report, vec!["https://cdn/1.jpg".to_string()]);
        assert_eq!(insert.status, ReportStatus::Pending);

        let value = toml::Value::try_from(&insert).expect("row serializes");
        assert_eq!(value.get("status").and_then(toml::Value::as_str), Some("Pending"));
        assert_eq!(
            value.get("location_name").and_then(toml::Value::as_str),
            Some("Yard 3")
        );
        assert_eq!(
            value.get("type").and_then(toml::Value::as_str),
            Some("Chemical Spill")
        );

        let stored = insert.stored("9", at(8));
        assert_eq!(stored.id, "9");
        assert_eq!(stored.media_urls, vec!["https://cdn/1.jpg".to_string()]);
    }

    #[test]
    fn recent_reports_are_newest_first_and_capped() {
        let start = at(0);
        let rows = (0..7).map(|n| row(&n.to_string(), start + Duration::hours(n)));

        let recent = recent_reports(rows);

        let ids: Vec<&str> = recent.iter().map(|report| report.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "5", "4", "3", "2"]);
    }

    #[test]
    fn recent_reports_of_nothing_is_empty() {
        assert!(recent_reports(Vec::new()).is_empty());
    }
}
