//! PDF analyzer panel: upload, simulated progress, analysis.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{info, warn};

use super::{Submission, lock, reject, settle};
use crate::config::EdulinkConfig;
use crate::error::PanelError;
use crate::job::{Delay, SimulatedJob};
use crate::models::document::MAX_UPLOAD_BYTES;
use crate::models::{AnalyzedDocument, UploadedFile};
use crate::notice::{Notice, Notices};
use crate::services::DocumentAnalyzer;
use crate::services::analyzer::seeded_documents;

const FAILED: &str = "Analysis Failed";
const PANEL: &str = "pdf_analyzer";

/// What the upload area shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum UploadPhase {
    Idle,
    /// Transfer in progress, `progress` in percent.
    Uploading { progress: f64 },
    /// Transfer done, waiting on the analyzer.
    Analyzing,
}

pub struct PdfAnalyzer {
    documents: Mutex<Vec<AnalyzedDocument>>,
    selected: Mutex<Option<String>>,
    phase: Mutex<UploadPhase>,
    notices: Notices,
    job: SimulatedJob,
    analyzer: Arc<dyn DocumentAnalyzer>,
    delay: Delay,
}

impl PdfAnalyzer {
    #[must_use]
    pub fn new(analyzer: Arc<dyn DocumentAnalyzer>, config: &EdulinkConfig) -> Self {
        Self {
            documents: Mutex::new(seeded_documents()),
            selected: Mutex::new(None),
            phase: Mutex::new(UploadPhase::Idle),
            notices: Notices::new(),
            job: SimulatedJob::new(PANEL, config.job_timeout),
            analyzer,
            delay: config.pdf_upload(),
        }
    }

    /// Analyzed documents, newest first.
    #[must_use]
    pub fn documents(&self) -> Vec<AnalyzedDocument> {
        lock(&self.documents).clone()
    }

    #[must_use]
    pub fn phase(&self) -> UploadPhase {
        *lock(&self.phase)
    }

    /// Open a document's detail view. Returns `false` for an unknown id.
    pub fn select(&self, id: &str) -> bool {
        let found = lock(&self.documents).iter().any(|d| d.id == id);
        if found {
            *lock(&self.selected) = Some(id.to_string());
        }
        found
    }

    #[must_use]
    pub fn selected(&self) -> Option<AnalyzedDocument> {
        let id = lock(&self.selected).clone()?;
        lock(&self.documents).iter().find(|d| d.id == id).cloned()
    }

    #[must_use]
    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    #[must_use]
    pub fn job(&self) -> &SimulatedJob {
        &self.job
    }

    pub fn unmount(&self) {
        self.job.cancel();
    }

    /// Upload and analyze `file`. `None` models a submit with no file chosen.
    ///
    /// # Errors
    ///
    /// `MissingField` with no file, `InvalidFileType` for anything but a PDF,
    /// `Service` if the analyzer fails.
    pub async fn upload(&self, file: Option<UploadedFile>) -> Result<Submission<AnalyzedDocument>, PanelError> {
        if self.job.is_pending() {
            return Ok(Submission::Ignored);
        }
        let Some(file) = file else {
            return reject(PANEL, &self.notices, PanelError::missing("file", "File Required", "Please choose a PDF to upload."));
        };
        if !file.is_pdf() {
            return reject(PANEL, &self.notices, PanelError::InvalidFileType { mime: file.mime_type });
        }
        if file.exceeds_advertised_limit() {
            warn!(name = %file.name, size_bytes = file.size_bytes, limit = MAX_UPLOAD_BYTES, "pdf_analyzer: over advertised size");
        }

        let Some(flight) = self.job.try_begin() else {
            return Ok(Submission::Ignored);
        };
        info!(name = %file.name, size_bytes = file.size_bytes, "pdf_analyzer: uploading");

        let mut on_progress = |progress: f64| {
            *lock(&self.phase) =
                if progress >= 100.0 { UploadPhase::Analyzing } else { UploadPhase::Uploading { progress } };
        };
        let outcome = self
            .job
            .run(&flight, &self.delay, &mut on_progress, self.analyzer.analyze(&file))
            .await;
        *lock(&self.phase) = UploadPhase::Idle;
        let submission = settle(PANEL, FAILED, &self.notices, outcome)?;

        if let Submission::Completed(doc) = &submission {
            lock(&self.documents).insert(0, doc.clone());
            self.notices.push(Notice::info(
                "PDF Analyzed Successfully!",
                format!("{} has been processed and questions generated.", doc.name),
            ));
        }
        drop(flight);
        Ok(submission)
    }
}

#[cfg(test)]
#[path = "pdf_analyzer_test.rs"]
mod pdf_analyzer_test;
