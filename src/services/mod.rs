//! AI collaborators behind the four feature panels.
//!
//! ARCHITECTURE
//! ============
//! Panels never synthesize results themselves. Each panel holds an
//! `Arc<dyn Trait>` for its collaborator and awaits it inside a
//! `SimulatedJob`, which owns the delay, the timeout and cancellation.
//! The canned implementations in this module interpolate the user's input
//! into fixed templates; a real client would implement the same traits.

pub mod analyzer;
pub mod assistant;
pub mod test_author;
pub mod videos;

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{AnalyzedDocument, Difficulty, GeneratedTest, Message, Test, UploadedFile, VideoRecommendation};

pub use analyzer::CannedAnalyzer;
pub use assistant::CannedAssistant;
pub use test_author::CannedTestAuthor;
pub use videos::CannedVideoSearch;

// =============================================================================
// ERROR
// =============================================================================

/// Failures a real collaborator can report. Canned collaborators never do.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("service timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl crate::error::ErrorCode for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "E_SERVICE_UNAVAILABLE",
            Self::Timeout { .. } => "E_SERVICE_TIMEOUT",
            Self::RateLimited(_) => "E_RATE_LIMITED",
            Self::Malformed(_) => "E_SERVICE_MALFORMED",
        }
    }

    fn retryable(&self) -> bool {
        !matches!(self, Self::Malformed(_))
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Validated input for a student practice test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeTestRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub mcq_count: u32,
    pub short_answer_count: u32,
    pub long_answer_count: u32,
    pub duration_minutes: u32,
}

/// Validated input for a teacher assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub mcq_count: u32,
    pub true_false_count: u32,
    pub short_answer_count: u32,
    pub essay_count: u32,
    pub duration_minutes: u32,
}

// =============================================================================
// TRAITS
// =============================================================================

#[async_trait]
pub trait TestAuthor: Send + Sync {
    async fn practice_test(&self, request: &PracticeTestRequest) -> Result<GeneratedTest, ServiceError>;

    async fn assessment(&self, request: &AssessmentRequest) -> Result<Test, ServiceError>;
}

#[async_trait]
pub trait StudyAssistant: Send + Sync {
    /// Reply to `question`, given the conversation so far.
    async fn reply(&self, history: &[Message], question: &str) -> Result<String, ServiceError>;
}

#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    async fn analyze(&self, file: &UploadedFile) -> Result<AnalyzedDocument, ServiceError>;
}

#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<VideoRecommendation>, ServiceError>;
}

/// One handle per collaborator, shared by every panel a dashboard mounts.
#[derive(Clone)]
pub struct Collaborators {
    pub tests: Arc<dyn TestAuthor>,
    pub assistant: Arc<dyn StudyAssistant>,
    pub analyzer: Arc<dyn DocumentAnalyzer>,
    pub videos: Arc<dyn VideoSearch>,
}

impl Collaborators {
    /// Canned collaborators that always succeed.
    #[must_use]
    pub fn canned() -> Self {
        Self {
            tests: Arc::new(CannedTestAuthor),
            assistant: Arc::new(CannedAssistant),
            analyzer: Arc::new(CannedAnalyzer),
            videos: Arc::new(CannedVideoSearch),
        }
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::canned()
    }
}
