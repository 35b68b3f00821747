//! End-to-end checks against the public panel API, run on a paused clock.

use std::time::Duration;

use edulink::models::{Difficulty, QuestionEdit, QuestionKind, UploadedFile};
use edulink::panels::Submission;
use edulink::{Collaborators, EdulinkConfig, StudentDashboard, TeacherDashboard, TeacherSession};

fn student() -> StudentDashboard {
    StudentDashboard::new(&Collaborators::canned(), &EdulinkConfig::default())
}

fn teacher() -> TeacherDashboard {
    TeacherDashboard::new(TeacherSession::default(), &Collaborators::canned(), &EdulinkConfig::default())
}

#[tokio::test(start_paused = true)]
async fn empty_required_fields_never_start_a_job() {
    let dash = student();

    assert!(dash.test_generator.generate().await.is_err());
    assert!(dash.chat.send("").await.is_err());
    assert!(dash.pdf_analyzer.upload(None).await.is_err());
    assert!(dash.videos.search().await.is_err());

    assert_eq!(dash.test_generator.notices().len(), 1);
    assert_eq!(dash.chat.notices().len(), 1);
    assert_eq!(dash.pdf_analyzer.notices().len(), 1);
    assert_eq!(dash.videos.notices().len(), 1);
    assert!(dash.test_generator.job().last_status().is_none());
    assert!(dash.chat.job().last_status().is_none());
    assert!(dash.pdf_analyzer.job().last_status().is_none());
    assert!(dash.videos.job().last_status().is_none());
}

#[tokio::test(start_paused = true)]
async fn invocation_while_pending_is_a_noop() {
    let dash = student();
    dash.videos.set_query("Optics");
    let (first, second) = tokio::join!(dash.videos.search(), async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        dash.videos.search().await
    });
    assert!(matches!(first.unwrap(), Submission::Completed(_)));
    assert!(second.unwrap().is_ignored());
    assert_eq!(dash.videos.videos().len(), 6);
    assert!(dash.videos.notices().is_empty());
}

#[tokio::test(start_paused = true)]
async fn totals_track_every_edit() {
    let dash = teacher();
    let tests = &dash.tests;
    tests.update_form(|f| f.with_topic("Cell Biology").with_difficulty(Some(Difficulty::Intermediate)));
    let test = tests.generate().await.unwrap().completed().unwrap();
    assert_eq!(test.total_points(), 29);

    let essay = test.questions.iter().find(|q| q.kind == QuestionKind::Essay).unwrap();
    assert_eq!(tests.remove_question(&essay.id).unwrap().total_points(), 19);

    let tf = test.questions.iter().find(|q| q.kind == QuestionKind::TrueFalse).unwrap();
    let edited = tests.edit_question(&tf.id, QuestionEdit::Points(4)).unwrap();
    assert_eq!(edited.total_points(), 22);
    assert_eq!(edited.total_points(), edited.questions.iter().map(|q| q.points).sum::<u32>());
}

#[tokio::test(start_paused = true)]
async fn non_pdf_upload_adds_nothing() {
    let dash = student();
    let before = dash.pdf_analyzer.documents();
    let result = dash
        .pdf_analyzer
        .upload(Some(UploadedFile::new("slides.pptx", "application/vnd.ms-powerpoint", 2048)))
        .await;
    assert!(result.is_err());
    assert_eq!(dash.pdf_analyzer.documents(), before);
    assert_eq!(dash.pdf_analyzer.notices().latest().unwrap().title, "Invalid File Type");
}

#[tokio::test(start_paused = true)]
async fn photosynthesis_practice_test() {
    let dash = student();
    let generator = &dash.test_generator;
    generator.update_form(|f| {
        f.with_topic("Photosynthesis")
            .with_difficulty(Difficulty::Beginner)
            .with_mcq_count(2)
            .with_short_answer_count(1)
            .with_long_answer_count(0)
    });
    let test = generator.generate().await.unwrap().completed().unwrap();
    assert_eq!(test.questions.len(), 3);
    assert!(test.questions.iter().all(|q| q.prompt.contains("Photosynthesis")));
    assert_eq!(test.difficulty.to_string(), "beginner");
}

#[tokio::test(start_paused = true)]
async fn video_search_prepends_two() {
    let dash = student();
    let seeded = dash.videos.videos();
    dash.videos.set_query("Thermodynamics");
    dash.videos.search().await.unwrap();

    let videos = dash.videos.videos();
    assert_eq!(videos.len(), seeded.len() + 2);
    assert!(videos[..2].iter().all(|v| v.topics.iter().any(|t| t.contains("Thermodynamics"))));
    assert_eq!(&videos[2..], seeded.as_slice());
}
