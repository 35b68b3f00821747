//! Student test generator panel.

use std::sync::{Arc, Mutex};

use tracing::info;

use super::{Submission, lock, reject, settle, slider};
use crate::config::EdulinkConfig;
use crate::error::{PanelError, require};
use crate::job::{Delay, SimulatedJob, no_progress};
use crate::models::{Difficulty, GeneratedTest};
use crate::notice::{Notice, Notices};
use crate::services::{PracticeTestRequest, TestAuthor};

const FAILED: &str = "Generation Failed";
const PANEL: &str = "test_generator";

/// Generator settings. Counts clamp to the slider bounds and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestGeneratorForm {
    pub topic: String,
    pub difficulty: Difficulty,
    pub mcq_count: u32,
    pub short_answer_count: u32,
    pub long_answer_count: u32,
    pub duration_minutes: u32,
}

impl Default for TestGeneratorForm {
    fn default() -> Self {
        Self {
            topic: String::new(),
            difficulty: Difficulty::Intermediate,
            mcq_count: 5,
            short_answer_count: 3,
            long_answer_count: 2,
            duration_minutes: 30,
        }
    }
}

impl TestGeneratorForm {
    #[must_use]
    pub fn with_topic(self, topic: impl Into<String>) -> Self {
        Self { topic: topic.into(), ..self }
    }

    #[must_use]
    pub fn with_difficulty(self, difficulty: Difficulty) -> Self {
        Self { difficulty, ..self }
    }

    #[must_use]
    pub fn with_mcq_count(self, n: u32) -> Self {
        Self { mcq_count: slider(n, 0, 20, 1), ..self }
    }

    #[must_use]
    pub fn with_short_answer_count(self, n: u32) -> Self {
        Self { short_answer_count: slider(n, 0, 10, 1), ..self }
    }

    #[must_use]
    pub fn with_long_answer_count(self, n: u32) -> Self {
        Self { long_answer_count: slider(n, 0, 5, 1), ..self }
    }

    #[must_use]
    pub fn with_duration(self, minutes: u32) -> Self {
        Self { duration_minutes: slider(minutes, 15, 120, 5), ..self }
    }

    fn request(&self, topic: &str) -> PracticeTestRequest {
        PracticeTestRequest {
            topic: topic.to_string(),
            difficulty: self.difficulty,
            mcq_count: self.mcq_count,
            short_answer_count: self.short_answer_count,
            long_answer_count: self.long_answer_count,
            duration_minutes: self.duration_minutes,
        }
    }
}

pub struct TestGenerator {
    form: Mutex<TestGeneratorForm>,
    tests: Mutex<Vec<GeneratedTest>>,
    notices: Notices,
    job: SimulatedJob,
    author: Arc<dyn TestAuthor>,
    delay: Delay,
}

impl TestGenerator {
    #[must_use]
    pub fn new(author: Arc<dyn TestAuthor>, config: &EdulinkConfig) -> Self {
        Self {
            form: Mutex::new(TestGeneratorForm::default()),
            tests: Mutex::new(Vec::new()),
            notices: Notices::new(),
            job: SimulatedJob::new(PANEL, config.job_timeout),
            author,
            delay: config.test_gen(),
        }
    }

    #[must_use]
    pub fn form(&self) -> TestGeneratorForm {
        lock(&self.form).clone()
    }

    /// Replace the form with `f(current)`.
    pub fn update_form(&self, f: impl FnOnce(TestGeneratorForm) -> TestGeneratorForm) {
        let mut form = lock(&self.form);
        *form = f(form.clone());
    }

    /// Every test generated so far, oldest first.
    #[must_use]
    pub fn tests(&self) -> Vec<GeneratedTest> {
        lock(&self.tests).clone()
    }

    #[must_use]
    pub fn latest(&self) -> Option<GeneratedTest> {
        lock(&self.tests).last().cloned()
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

    /// Generate a practice test from the current form.
    ///
    /// # Errors
    ///
    /// `MissingField` when the topic is blank; `Service` if the author fails.
    pub async fn generate(&self) -> Result<Submission<GeneratedTest>, PanelError> {
        if self.job.is_pending() {
            return Ok(Submission::Ignored);
        }

        let form = self.form();
        let topic = match require(&form.topic, || {
            PanelError::missing("topic", "Topic Required", "Please enter a topic for your test.")
        }) {
            Ok(t) => t.to_string(),
            Err(e) => return reject(PANEL, &self.notices, e),
        };

        let Some(flight) = self.job.try_begin() else {
            return Ok(Submission::Ignored);
        };
        let request = form.request(&topic);
        info!(%topic, difficulty = %request.difficulty, "test_generator: generating");

        let outcome = self
            .job
            .run(&flight, &self.delay, &mut no_progress, self.author.practice_test(&request))
            .await;
        let submission = settle(PANEL, FAILED, &self.notices, outcome)?;

        if let Submission::Completed(test) = &submission {
            lock(&self.tests).push(test.clone());
            self.notices
                .push(Notice::info("Test Generated Successfully!", format!("Your {topic} test is ready.")));
        }
        drop(flight);
        Ok(submission)
    }
}

#[cfg(test)]
#[path = "test_generator_test.rs"]
mod test_generator_test;
