//! Teacher test manager: create, edit, library and assignment tabs.
//!
//! DESIGN
//! ======
//! The library holds every saved test. The editor holds at most one
//! working copy, opened from the library; edits change only that copy
//! until `save` writes it back. Every edit replaces the copy with a new
//! `Test` built through `Question::apply`, and point totals are always
//! recomputed from the questions, never tracked alongside them.
//!
//! Only generation runs as a job. Editor, library and assignment
//! operations are synchronous and complete immediately.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{debug, info};

use super::{Submission, lock, reject, settle, slider};
use crate::config::EdulinkConfig;
use crate::error::{PanelError, require};
use crate::job::{Delay, SimulatedJob, no_progress};
use crate::models::{Difficulty, QuestionEdit, Test, TestStatus};
use crate::notice::{Notice, Notices};
use crate::services::test_author::{ASSESSMENT_SHORT_POINTS, ESSAY_POINTS, MCQ_POINTS, TRUE_FALSE_POINTS};
use crate::services::{AssessmentRequest, TestAuthor};

const FAILED: &str = "Generation Failed";
const PANEL: &str = "test_manager";

// =============================================================================
// TABS AND FORMS
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManagerTab {
    #[default]
    Create,
    Edit,
    Library,
    Assign,
}

/// Create-tab settings. Difficulty has no default and must be chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentForm {
    pub topic: String,
    pub difficulty: Option<Difficulty>,
    pub mcq_count: u32,
    pub true_false_count: u32,
    pub short_answer_count: u32,
    pub essay_count: u32,
    pub duration_minutes: u32,
}

impl Default for AssessmentForm {
    fn default() -> Self {
        Self {
            topic: String::new(),
            difficulty: None,
            mcq_count: 5,
            true_false_count: 3,
            short_answer_count: 2,
            essay_count: 1,
            duration_minutes: 60,
        }
    }
}

impl AssessmentForm {
    #[must_use]
    pub fn with_topic(self, topic: impl Into<String>) -> Self {
        Self { topic: topic.into(), ..self }
    }

    #[must_use]
    pub fn with_difficulty(self, difficulty: Option<Difficulty>) -> Self {
        Self { difficulty, ..self }
    }

    #[must_use]
    pub fn with_mcq_count(self, n: u32) -> Self {
        Self { mcq_count: slider(n, 0, 20, 1), ..self }
    }

    #[must_use]
    pub fn with_true_false_count(self, n: u32) -> Self {
        Self { true_false_count: slider(n, 0, 15, 1), ..self }
    }

    #[must_use]
    pub fn with_short_answer_count(self, n: u32) -> Self {
        Self { short_answer_count: slider(n, 0, 10, 1), ..self }
    }

    #[must_use]
    pub fn with_essay_count(self, n: u32) -> Self {
        Self { essay_count: slider(n, 0, 5, 1), ..self }
    }

    #[must_use]
    pub fn with_duration(self, minutes: u32) -> Self {
        Self { duration_minutes: slider(minutes, 15, 180, 15), ..self }
    }

    /// Question count shown in the create-tab summary.
    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.mcq_count + self.true_false_count + self.short_answer_count + self.essay_count
    }

    /// Points the generated test will carry before any edits.
    #[must_use]
    pub fn projected_points(&self) -> u32 {
        self.mcq_count * MCQ_POINTS
            + self.true_false_count * TRUE_FALSE_POINTS
            + self.short_answer_count * ASSESSMENT_SHORT_POINTS
            + self.essay_count * ESSAY_POINTS
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignTarget {
    #[default]
    Individual,
    Class,
}

impl AssignTarget {
    fn plural(self) -> &'static str {
        match self {
            Self::Individual => "students",
            Self::Class => "classes",
        }
    }
}

/// Assign-tab settings. Student and class lists are free text, comma separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentForm {
    pub selected_test: String,
    pub target: AssignTarget,
    pub students: String,
    pub classes: String,
    /// Opaque date text; not parsed.
    pub due_date: String,
    pub instructions: String,
}

impl AssignmentForm {
    #[must_use]
    pub fn with_selected_test(self, id: impl Into<String>) -> Self {
        Self { selected_test: id.into(), ..self }
    }

    #[must_use]
    pub fn with_target(self, target: AssignTarget) -> Self {
        Self { target, ..self }
    }

    #[must_use]
    pub fn with_students(self, students: impl Into<String>) -> Self {
        Self { students: students.into(), ..self }
    }

    #[must_use]
    pub fn with_classes(self, classes: impl Into<String>) -> Self {
        Self { classes: classes.into(), ..self }
    }

    #[must_use]
    pub fn with_due_date(self, due: impl Into<String>) -> Self {
        Self { due_date: due.into(), ..self }
    }

    #[must_use]
    pub fn with_instructions(self, text: impl Into<String>) -> Self {
        Self { instructions: text.into(), ..self }
    }

    /// Names from the list matching `target`, trimmed, empties dropped.
    #[must_use]
    pub fn assignees(&self) -> Vec<String> {
        let raw = match self.target {
            AssignTarget::Individual => &self.students,
            AssignTarget::Class => &self.classes,
        };
        raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
    }
}

// =============================================================================
// PANEL
// =============================================================================

pub struct TestManager {
    tab: Mutex<ManagerTab>,
    form: Mutex<AssessmentForm>,
    assignment: Mutex<AssignmentForm>,
    library: Mutex<Vec<Test>>,
    editing: Mutex<Option<Test>>,
    notices: Notices,
    job: SimulatedJob,
    author: Arc<dyn TestAuthor>,
    delay: Delay,
}

impl TestManager {
    #[must_use]
    pub fn new(author: Arc<dyn TestAuthor>, config: &EdulinkConfig) -> Self {
        Self {
            tab: Mutex::new(ManagerTab::default()),
            form: Mutex::new(AssessmentForm::default()),
            assignment: Mutex::new(AssignmentForm::default()),
            library: Mutex::new(Vec::new()),
            editing: Mutex::new(None),
            notices: Notices::new(),
            job: SimulatedJob::new(PANEL, config.job_timeout),
            author,
            delay: config.test_gen(),
        }
    }

    #[must_use]
    pub fn tab(&self) -> ManagerTab {
        *lock(&self.tab)
    }

    pub fn set_tab(&self, tab: ManagerTab) {
        *lock(&self.tab) = tab;
    }

    #[must_use]
    pub fn form(&self) -> AssessmentForm {
        lock(&self.form).clone()
    }

    pub fn update_form(&self, f: impl FnOnce(AssessmentForm) -> AssessmentForm) {
        let mut form = lock(&self.form);
        *form = f(form.clone());
    }

    #[must_use]
    pub fn assignment(&self) -> AssignmentForm {
        lock(&self.assignment).clone()
    }

    pub fn update_assignment(&self, f: impl FnOnce(AssignmentForm) -> AssignmentForm) {
        let mut form = lock(&self.assignment);
        *form = f(form.clone());
    }

    /// Saved tests in creation order.
    #[must_use]
    pub fn library(&self) -> Vec<Test> {
        lock(&self.library).clone()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<Test> {
        lock(&self.library).iter().find(|t| t.id == id).cloned()
    }

    /// The editor's working copy, if a test is open.
    #[must_use]
    pub fn editing(&self) -> Option<Test> {
        lock(&self.editing).clone()
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

    // -------------------------------------------------------------------------
    // Create
    // -------------------------------------------------------------------------

    /// Generate an assessment from the create form, add it to the library
    /// and open it in the editor.
    ///
    /// # Errors
    ///
    /// `MissingField` when topic or difficulty is missing; `Service` if the
    /// author fails.
    pub async fn generate(&self) -> Result<Submission<Test>, PanelError> {
        if self.job.is_pending() {
            return Ok(Submission::Ignored);
        }
        let form = self.form();
        let missing = |field| PanelError::missing(field, "Missing Information", "Please fill in topic and difficulty level.");
        let topic = match require(&form.topic, || missing("topic")) {
            Ok(t) => t.to_string(),
            Err(e) => return reject(PANEL, &self.notices, e),
        };
        let Some(difficulty) = form.difficulty else {
            return reject(PANEL, &self.notices, missing("difficulty"));
        };

        let Some(flight) = self.job.try_begin() else {
            return Ok(Submission::Ignored);
        };
        let request = AssessmentRequest {
            topic: topic.clone(),
            difficulty,
            mcq_count: form.mcq_count,
            true_false_count: form.true_false_count,
            short_answer_count: form.short_answer_count,
            essay_count: form.essay_count,
            duration_minutes: form.duration_minutes,
        };
        info!(%topic, %difficulty, questions = form.question_count(), "test_manager: generating");

        let outcome = self
            .job
            .run(&flight, &self.delay, &mut no_progress, self.author.assessment(&request))
            .await;
        let submission = settle(PANEL, FAILED, &self.notices, outcome)?;

        if let Submission::Completed(test) = &submission {
            lock(&self.library).push(test.clone());
            *lock(&self.editing) = Some(test.clone());
            self.set_tab(ManagerTab::Edit);
            self.notices.push(Notice::info(
                "Test Generated Successfully!",
                format!("Created {} questions for {topic}", test.questions.len()),
            ));
        }
        drop(flight);
        Ok(submission)
    }

    // -------------------------------------------------------------------------
    // Edit
    // -------------------------------------------------------------------------

    /// Open a library test in the editor and switch to the edit tab.
    ///
    /// # Errors
    ///
    /// `UnknownTest` if no library test has this id.
    pub fn open(&self, id: &str) -> Result<Test, PanelError> {
        let Some(test) = self.find(id) else {
            return reject(PANEL, &self.notices, PanelError::UnknownTest(id.to_string()));
        };
        *lock(&self.editing) = Some(test.clone());
        self.set_tab(ManagerTab::Edit);
        Ok(test)
    }

    /// Close the editor without saving.
    pub fn close(&self) {
        *lock(&self.editing) = None;
    }

    /// Apply `edit` to one question of the working copy.
    ///
    /// # Errors
    ///
    /// `NoTestOpen` or `UnknownQuestion`.
    pub fn edit_question(&self, question_id: &str, edit: QuestionEdit) -> Result<Test, PanelError> {
        self.revise(|test| {
            if test.question(question_id).is_none() {
                return Err(PanelError::UnknownQuestion(question_id.to_string()));
            }
            let questions = test
                .questions
                .iter()
                .map(|q| if q.id == question_id { q.apply(edit.clone()) } else { q.clone() })
                .collect();
            Ok(test.with_questions(questions))
        })
    }

    /// Drop one question from the working copy. Removing the last one
    /// leaves an empty, zero-point test.
    ///
    /// # Errors
    ///
    /// `NoTestOpen` or `UnknownQuestion`.
    pub fn remove_question(&self, question_id: &str) -> Result<Test, PanelError> {
        self.revise(|test| {
            if test.question(question_id).is_none() {
                return Err(PanelError::UnknownQuestion(question_id.to_string()));
            }
            let questions = test.questions.iter().filter(|q| q.id != question_id).cloned().collect();
            Ok(test.with_questions(questions))
        })
    }

    fn revise(&self, f: impl FnOnce(&Test) -> Result<Test, PanelError>) -> Result<Test, PanelError> {
        let result = {
            let mut editing = lock(&self.editing);
            let next = editing.as_ref().map_or(Err(PanelError::NoTestOpen), f);
            if let Ok(test) = &next {
                *editing = Some(test.clone());
            }
            next
        };
        match result {
            Ok(test) => {
                debug!(test = %test.id, questions = test.questions.len(), points = test.total_points(), "test_manager: edited");
                Ok(test)
            }
            Err(e) => reject(PANEL, &self.notices, e),
        }
    }

    /// Write the working copy back into the library.
    ///
    /// # Errors
    ///
    /// `NoTestOpen` when the editor is empty; `UnknownTest` if the test was
    /// deleted from the library meanwhile.
    pub fn save(&self) -> Result<Test, PanelError> {
        let Some(test) = self.editing() else {
            return reject(PANEL, &self.notices, PanelError::NoTestOpen);
        };
        let replaced = match lock(&self.library).iter_mut().find(|t| t.id == test.id) {
            Some(slot) => {
                *slot = test.clone();
                true
            }
            None => false,
        };
        if !replaced {
            return reject(PANEL, &self.notices, PanelError::UnknownTest(test.id));
        }
        info!(test = %test.id, points = test.total_points(), "test_manager: saved");
        self.notices.push(Notice::info("Test Saved", "Your test has been saved successfully."));
        Ok(test)
    }

    // -------------------------------------------------------------------------
    // Library
    // -------------------------------------------------------------------------

    /// Remove a test from the library, closing it in the editor if open.
    ///
    /// # Errors
    ///
    /// `UnknownTest` if no library test has this id.
    pub fn delete_test(&self, id: &str) -> Result<Test, PanelError> {
        let removed = {
            let mut library = lock(&self.library);
            library.iter().position(|t| t.id == id).map(|i| library.remove(i))
        };
        let Some(removed) = removed else {
            return reject(PANEL, &self.notices, PanelError::UnknownTest(id.to_string()));
        };
        {
            let mut editing = lock(&self.editing);
            if editing.as_ref().is_some_and(|t| t.id == id) {
                *editing = None;
            }
        }
        info!(test = %id, "test_manager: deleted");
        self.notices.push(Notice::info("Test Deleted", "Test has been removed from your library."));
        Ok(removed)
    }

    /// Mark a draft as published. Tests already published or assigned are
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// `UnknownTest` if no library test has this id.
    pub fn publish(&self, id: &str) -> Result<Test, PanelError> {
        let Some(current) = self.find(id) else {
            return reject(PANEL, &self.notices, PanelError::UnknownTest(id.to_string()));
        };
        if current.status != TestStatus::Draft {
            return Ok(current);
        }
        let published = current.with_status(TestStatus::Published);
        self.replace(&published, |t| t.with_status(TestStatus::Published));
        self.notices.push(Notice::info("Test Published", format!("{} is ready to assign.", published.title)));
        Ok(published)
    }

    /// Swap `updated` into the library and apply `sync` to an open copy of
    /// the same test so the editor shows the new status.
    fn replace(&self, updated: &Test, sync: impl FnOnce(&Test) -> Test) {
        {
            let mut library = lock(&self.library);
            if let Some(slot) = library.iter_mut().find(|t| t.id == updated.id) {
                *slot = updated.clone();
            }
        }
        let mut editing = lock(&self.editing);
        let synced = editing.as_ref().filter(|t| t.id == updated.id).map(sync);
        if synced.is_some() {
            *editing = synced;
        }
    }

    // -------------------------------------------------------------------------
    // Assign
    // -------------------------------------------------------------------------

    /// Assign the selected test to the listed students or classes and reset
    /// the assignment form.
    ///
    /// # Errors
    ///
    /// `MissingField` without a selected test or due date; `UnknownTest` if
    /// the selection is not in the library.
    pub fn assign(&self) -> Result<Test, PanelError> {
        let form = self.assignment();
        let missing = |field| PanelError::missing(field, "Missing Information", "Please select a test and due date.");
        let test_id = match require(&form.selected_test, || missing("selected_test")) {
            Ok(id) => id.to_string(),
            Err(e) => return reject(PANEL, &self.notices, e),
        };
        if let Err(e) = require(&form.due_date, || missing("due_date")) {
            return reject(PANEL, &self.notices, e);
        }
        let Some(current) = self.find(&test_id) else {
            return reject(PANEL, &self.notices, PanelError::UnknownTest(test_id));
        };

        let assignees = form.assignees();
        let assigned = current.assigned(assignees.clone());
        self.replace(&assigned, |t| t.assigned(assignees.clone()));
        info!(test = %test_id, assign_to = ?form.target, count = assignees.len(), due = %form.due_date.trim(), "test_manager: assigned");

        self.notices.push(Notice::info(
            "Test Assigned Successfully!",
            format!("Test assigned to {} {}", assignees.len(), form.target.plural()),
        ));
        *lock(&self.assignment) = AssignmentForm::default();
        Ok(assigned)
    }
}

#[cfg(test)]
#[path = "test_manager_test.rs"]
mod test_manager_test;
