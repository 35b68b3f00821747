use super::*;

use std::time::Duration;

use crate::models::QuestionKind;
use crate::services::CannedTestAuthor;
use crate::test_helpers;

fn panel() -> TestManager {
    TestManager::new(Arc::new(CannedTestAuthor), &test_helpers::config())
}

async fn generated(panel: &TestManager, topic: &str) -> Test {
    panel.update_form(|f| f.with_topic(topic).with_difficulty(Some(Difficulty::Intermediate)));
    panel.generate().await.unwrap().completed().unwrap()
}

// =========================================================================
// forms
// =========================================================================

#[test]
fn assessment_form_defaults_and_preview() {
    let form = AssessmentForm::default();
    assert!(form.difficulty.is_none());
    assert_eq!(form.duration_minutes, 60);
    assert_eq!(form.question_count(), 11);
    assert_eq!(form.projected_points(), 29);

    let form = form.with_essay_count(0).with_true_false_count(40).with_duration(100);
    assert_eq!(form.true_false_count, 15);
    assert_eq!(form.duration_minutes, 105);
    assert_eq!(form.projected_points(), 10 + 15 + 6);
}

#[test]
fn assignees_split_trim_and_drop_empties() {
    let form = AssignmentForm::default().with_students(" ana, ,bo ,, cy ").with_classes("CS101-A");
    assert_eq!(form.assignees(), ["ana", "bo", "cy"]);
    assert_eq!(form.with_target(AssignTarget::Class).assignees(), ["CS101-A"]);
    assert!(AssignmentForm::default().assignees().is_empty());
}

// =========================================================================
// generate
// =========================================================================

#[tokio::test(start_paused = true)]
async fn generate_requires_topic_and_difficulty() {
    let panel = panel();
    panel.update_form(|f| f.with_topic("Algebra"));
    let err = panel.generate().await.unwrap_err();
    assert!(matches!(err, PanelError::MissingField { field: "difficulty", .. }));

    panel.update_form(|f| f.with_topic("").with_difficulty(Some(Difficulty::Beginner)));
    let err = panel.generate().await.unwrap_err();
    assert!(matches!(err, PanelError::MissingField { field: "topic", .. }));

    let notices = panel.notices().snapshot();
    assert_eq!(notices.len(), 2);
    assert!(notices.iter().all(|n| n.title == "Missing Information" && n.is_destructive()));
    assert!(panel.library().is_empty());
}

#[tokio::test(start_paused = true)]
async fn generate_opens_editor_on_edit_tab() {
    let panel = panel();
    let test = generated(&panel, "Algebra").await;
    assert_eq!(test.title, "Algebra Assessment");
    assert_eq!(test.questions.len(), 11);
    assert_eq!(test.total_points(), 29);
    assert_eq!(test.status, TestStatus::Draft);

    assert_eq!(panel.library(), [test.clone()]);
    assert_eq!(panel.editing(), Some(test));
    assert_eq!(panel.tab(), ManagerTab::Edit);
    assert_eq!(panel.notices().latest().unwrap().description, "Created 11 questions for Algebra");
}

#[tokio::test(start_paused = true)]
async fn generate_while_pending_is_noop() {
    let panel = panel();
    panel.update_form(|f| f.with_topic("Algebra").with_difficulty(Some(Difficulty::Advanced)));
    let (_, second) = tokio::join!(panel.generate(), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        panel.generate().await
    });
    assert!(second.unwrap().is_ignored());
    assert_eq!(panel.library().len(), 1);
}

// =========================================================================
// editor
// =========================================================================

#[tokio::test(start_paused = true)]
async fn deleting_essay_drops_total_to_nineteen() {
    let panel = panel();
    let test = generated(&panel, "Algebra").await;
    let essay = test.questions.iter().find(|q| q.kind == QuestionKind::Essay).unwrap();

    let edited = panel.remove_question(&essay.id).unwrap();
    assert_eq!(edited.total_points(), 19);
    assert_eq!(edited.questions.len(), 10);
    // Library keeps the saved version until save.
    assert_eq!(panel.find(&test.id).unwrap().total_points(), 29);

    panel.save().unwrap();
    assert_eq!(panel.find(&test.id).unwrap().total_points(), 19);
    assert_eq!(panel.notices().latest().unwrap().title, "Test Saved");
}

#[tokio::test(start_paused = true)]
async fn edits_keep_total_derived() {
    let panel = panel();
    let test = generated(&panel, "Algebra").await;

    let edited = panel.edit_question("q1", QuestionEdit::Points(7)).unwrap();
    assert_eq!(edited.total_points(), 34);
    let edited = panel.edit_question("q1", QuestionEdit::Prompt("Rewritten".into())).unwrap();
    assert_eq!(edited.question("q1").unwrap().prompt, "Rewritten");
    let edited = panel
        .edit_question("q1", QuestionEdit::Option { index: 2, text: "New C".into() })
        .unwrap();
    assert_eq!(edited.question("q1").unwrap().options.as_ref().unwrap()[2], "New C");
    let edited = panel
        .edit_question("q1", QuestionEdit::CorrectAnswer("New C".into()))
        .unwrap();
    assert_eq!(edited.question("q1").unwrap().correct_answer.as_deref(), Some("New C"));
    assert_eq!(edited.total_points(), 34);

    for q in &test.questions {
        panel.remove_question(&q.id).unwrap();
    }
    let empty = panel.editing().unwrap();
    assert!(empty.questions.is_empty());
    assert_eq!(empty.total_points(), 0);
}

#[tokio::test(start_paused = true)]
async fn unknown_question_rejected() {
    let panel = panel();
    generated(&panel, "Algebra").await;
    let before = panel.notices().len();
    let err = panel.remove_question("q99").unwrap_err();
    assert!(matches!(err, PanelError::UnknownQuestion(_)));
    assert_eq!(panel.notices().len(), before + 1);
    assert_eq!(panel.editing().unwrap().questions.len(), 11);
}

#[test]
fn edits_without_open_test_rejected() {
    let panel = panel();
    assert!(matches!(panel.edit_question("q1", QuestionEdit::Points(1)), Err(PanelError::NoTestOpen)));
    assert!(matches!(panel.save(), Err(PanelError::NoTestOpen)));
    assert_eq!(panel.notices().latest().unwrap().title, "No Test Selected");
}

#[tokio::test(start_paused = true)]
async fn open_and_close() {
    let panel = panel();
    let test = generated(&panel, "Algebra").await;
    panel.close();
    panel.set_tab(ManagerTab::Library);
    assert!(panel.editing().is_none());

    assert_eq!(panel.open(&test.id).unwrap(), test);
    assert_eq!(panel.tab(), ManagerTab::Edit);
    assert!(matches!(panel.open("missing"), Err(PanelError::UnknownTest(_))));
}

// =========================================================================
// library
// =========================================================================

#[tokio::test(start_paused = true)]
async fn delete_closes_open_test() {
    let panel = panel();
    let first = generated(&panel, "Algebra").await;
    let second = generated(&panel, "Geometry").await;
    assert_eq!(panel.editing().unwrap().id, second.id);

    panel.delete_test(&first.id).unwrap();
    assert_eq!(panel.editing().unwrap().id, second.id);
    panel.delete_test(&second.id).unwrap();
    assert!(panel.editing().is_none());
    assert!(panel.library().is_empty());
    assert_eq!(panel.notices().latest().unwrap().title, "Test Deleted");
    assert!(matches!(panel.delete_test(&second.id), Err(PanelError::UnknownTest(_))));
}

#[tokio::test(start_paused = true)]
async fn save_after_delete_fails() {
    let panel = panel();
    let test = generated(&panel, "Algebra").await;
    panel.open(&test.id).unwrap();
    {
        // Delete from the library while keeping the editor copy.
        lock(&panel.library).clear();
    }
    assert!(matches!(panel.save(), Err(PanelError::UnknownTest(_))));
}

#[tokio::test(start_paused = true)]
async fn publish_only_moves_drafts() {
    let panel = panel();
    let test = generated(&panel, "Algebra").await;
    let published = panel.publish(&test.id).unwrap();
    assert_eq!(published.status, TestStatus::Published);
    assert_eq!(panel.find(&test.id).unwrap().status, TestStatus::Published);
    assert_eq!(panel.editing().unwrap().status, TestStatus::Published);

    panel.update_assignment(|a| a.with_selected_test(&test.id).with_due_date("2025-03-01"));
    panel.assign().unwrap();
    assert_eq!(panel.publish(&test.id).unwrap().status, TestStatus::Assigned);
}

// =========================================================================
// assign
// =========================================================================

#[tokio::test(start_paused = true)]
async fn assign_requires_test_and_due_date() {
    let panel = panel();
    let test = generated(&panel, "Algebra").await;
    panel.update_assignment(|a| a.with_selected_test(&test.id));
    let err = panel.assign().unwrap_err();
    assert!(matches!(err, PanelError::MissingField { field: "due_date", .. }));
    assert_eq!(panel.notices().latest().unwrap().description, "Please select a test and due date.");
    assert_eq!(panel.find(&test.id).unwrap().status, TestStatus::Draft);
    // Rejected forms are left for the user to fix.
    assert_eq!(panel.assignment().selected_test, test.id);
}

#[tokio::test(start_paused = true)]
async fn assign_to_students_resets_form() {
    let panel = panel();
    let test = generated(&panel, "Algebra").await;
    panel.update_assignment(|a| {
        a.with_selected_test(&test.id)
            .with_students("ana, bo, ")
            .with_due_date("2025-03-01")
            .with_instructions("Open book")
    });
    let assigned = panel.assign().unwrap();
    assert_eq!(assigned.status, TestStatus::Assigned);
    assert_eq!(assigned.assigned_to, ["ana", "bo"]);
    assert_eq!(panel.find(&test.id).unwrap(), assigned);
    assert_eq!(panel.editing().unwrap().status, TestStatus::Assigned);
    assert_eq!(panel.notices().latest().unwrap().description, "Test assigned to 2 students");
    assert_eq!(panel.assignment(), AssignmentForm::default());
}

#[tokio::test(start_paused = true)]
async fn assign_to_classes() {
    let panel = panel();
    let test = generated(&panel, "Algebra").await;
    panel.update_assignment(|a| {
        a.with_selected_test(&test.id)
            .with_target(AssignTarget::Class)
            .with_classes("CS101-A,CS201")
            .with_due_date("Friday")
    });
    panel.assign().unwrap();
    assert_eq!(panel.notices().latest().unwrap().description, "Test assigned to 2 classes");
}
