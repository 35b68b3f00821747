//! Shared fixtures for unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::config::EdulinkConfig;
use crate::models::{AnalyzedDocument, GeneratedTest, Message, Test, UploadedFile, VideoRecommendation};
use crate::services::{
    AssessmentRequest, Collaborators, DocumentAnalyzer, PracticeTestRequest, ServiceError, StudyAssistant,
    TestAuthor, VideoSearch,
};

/// Default delays, so paused-clock tests exercise the real timings.
#[must_use]
pub fn config() -> EdulinkConfig {
    EdulinkConfig::default()
}

/// Collaborator that fails every call and counts how often it was asked.
#[derive(Default)]
pub struct Unavailable {
    pub calls: AtomicUsize,
}

impl Unavailable {
    fn fail<T>(&self) -> Result<T, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ServiceError::Unavailable("upstream down".into()))
    }
}

#[async_trait]
impl TestAuthor for Unavailable {
    async fn practice_test(&self, _request: &PracticeTestRequest) -> Result<GeneratedTest, ServiceError> {
        self.fail()
    }

    async fn assessment(&self, _request: &AssessmentRequest) -> Result<Test, ServiceError> {
        self.fail()
    }
}

#[async_trait]
impl StudyAssistant for Unavailable {
    async fn reply(&self, _history: &[Message], _question: &str) -> Result<String, ServiceError> {
        self.fail()
    }
}

#[async_trait]
impl DocumentAnalyzer for Unavailable {
    async fn analyze(&self, _file: &UploadedFile) -> Result<AnalyzedDocument, ServiceError> {
        self.fail()
    }
}

#[async_trait]
impl VideoSearch for Unavailable {
    async fn search(&self, _query: &str) -> Result<Vec<VideoRecommendation>, ServiceError> {
        self.fail()
    }
}

/// Collaborators that all fail, sharing one call counter.
#[must_use]
pub fn failing_collaborators() -> (Collaborators, Arc<Unavailable>) {
    let failing = Arc::new(Unavailable::default());
    let collab = Collaborators {
        tests: failing.clone(),
        assistant: failing.clone(),
        analyzer: failing.clone(),
        videos: failing.clone(),
    };
    (collab, failing)
}
