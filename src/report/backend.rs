// SPDX-License-Identifier: MPL-2.0
//! Storage seam for reports and their media.
//!
//! [`ReportBackend`] is what the submit flow talks to. [`MemoryBackend`]
//! keeps everything in process and can be told to fail, which is what the
//! demo shell and the tests use.

use super::row::{recent_reports, NewReportRow, ReportRow};
use super::{Report, UploadProgress};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use tracing::debug;

// =============================================================================
// Trait
// =============================================================================

/// Remote store for report rows and media files.
pub trait ReportBackend {
    /// Uploads `files` in order, ticking `progress` per file.
    ///
    /// # Errors
    ///
    /// Fails on the first file that cannot be stored.
    fn upload_media(&mut self, files: &[String], progress: &mut UploadProgress)
        -> Result<Vec<String>>;

    /// Inserts a row and returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`] when the row is rejected.
    fn insert_report(&mut self, row: NewReportRow) -> Result<String>;

    /// Newest reports first, capped at the recent-list size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`] when the table cannot be read.
    fn recent_reports(&self) -> Result<Vec<Report>>;
}

// =============================================================================
// In-memory backend
// =============================================================================

/// Bucket prefix of uploaded media URLs.
pub const MEDIA_BUCKET: &str = "memory://report-media";

/// Process-local [`ReportBackend`].
#[derive(Debug, Default)]
pub struct MemoryBackend {
    rows: Vec<ReportRow>,
    next_id: u64,
    fail_uploads: bool,
    fail_inserts: bool,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every upload fail until switched back.
    pub fn set_fail_uploads(&mut self, fail: bool) {
        self.fail_uploads = fail;
    }

    /// Makes every insert fail until switched back.
    pub fn set_fail_inserts(&mut self, fail: bool) {
        self.fail_inserts = fail;
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.fail_uploads && self.fail_inserts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Inserts with an explicit timestamp.
    pub fn insert_at(&mut self, row: NewReportRow, reported_at: DateTime<Utc>) -> Result<String> {
        if self.fail_inserts {
            return Err(Error::Backend("insert rejected".to_string()));
        }
        self.next_id += 1;
        let id = self.next_id.to_string();
        debug!(%id, "report row stored");
        self.rows.push(row.stored(id.clone(), reported_at));
        Ok(id)
    }
}

impl ReportBackend for MemoryBackend {
    fn upload_media(
        &mut self,
        files: &[String],
        progress: &mut UploadProgress,
    ) -> Result<Vec<String>> {
        if self.fail_uploads {
            return Err(Error::Backend("media bucket unavailable".to_string()));
        }
        let stamp = Utc::now().timestamp_millis();
        let urls = files
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let url = match name.rsplit_once('.') {
                    Some((_, ext)) => format!("{MEDIA_BUCKET}/{stamp}-{index}.{ext}"),
                    None => format!("{MEDIA_BUCKET}/{stamp}-{index}"),
                };
                progress.file_done();
                url
            })
            .collect();
        Ok(urls)
    }

    fn insert_report(&mut self, row: NewReportRow) -> Result<String> {
        self.insert_at(row, Utc::now())
    }

    fn recent_reports(&self) -> Result<Vec<Report>> {
        Ok(recent_reports(self.rows.iter().cloned()))
    }
}
