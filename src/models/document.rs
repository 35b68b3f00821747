use serde::Serialize;

use super::{Difficulty, Timestamp};

/// The only MIME type the analyzer accepts.
pub const PDF_MIME: &str = "application/pdf";

/// Size ceiling advertised to users. Not enforced.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// A file handed to the analyzer by the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self { name: name.into(), mime_type: mime_type.into(), size_bytes }
    }

    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.mime_type.eq_ignore_ascii_case(PDF_MIME)
    }

    #[must_use]
    pub fn exceeds_advertised_limit(&self) -> bool {
        self.size_bytes > MAX_UPLOAD_BYTES
    }

    /// Size rendered as megabytes with one decimal, e.g. `"2.4 MB"`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_label(&self) -> String {
        format!("{:.1} MB", self.size_bytes as f64 / (1024.0 * 1024.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenQuestion {
    pub prompt: String,
    pub points: u32,
}

/// Questions generated from a document, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    pub mcq: Vec<ChoiceQuestion>,
    pub short: Vec<WrittenQuestion>,
    pub long: Vec<WrittenQuestion>,
}

impl QuestionSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.mcq.len() + self.short.len() + self.long.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Points across the written questions; choice questions carry none.
    #[must_use]
    pub fn written_points(&self) -> u32 {
        self.short.iter().chain(&self.long).map(|q| q.points).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedDocument {
    pub id: String,
    pub name: String,
    pub size_label: String,
    #[serde(with = "time::serde::rfc3339")]
    pub uploaded_at: Timestamp,
    pub summary: String,
    pub key_points: Vec<String>,
    pub questions: QuestionSet,
    pub reading_minutes: u32,
    pub difficulty: Difficulty,
}
