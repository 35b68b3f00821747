use super::*;

use std::time::Duration;

use crate::job::JobStatus;
use crate::models::message::Author;
use crate::services::CannedAssistant;
use crate::services::assistant::OPENERS;
use crate::test_helpers;

fn panel() -> ChatPanel {
    ChatPanel::new(Arc::new(CannedAssistant), &test_helpers::config())
}

#[test]
fn transcript_starts_with_greeting() {
    let panel = panel();
    let messages = panel.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].author, Author::Assistant);
    assert_eq!(messages[0].content, GREETING);
    assert_eq!(panel.quick_questions().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn blank_message_rejected() {
    let panel = panel();
    let err = panel.send("  \n").await.unwrap_err();
    assert!(matches!(err, PanelError::MissingField { field: "message", .. }));
    assert_eq!(panel.notices().len(), 1);
    assert_eq!(panel.notices().latest().unwrap().title, "Message Required");
    assert_eq!(panel.messages().len(), 1);
    assert!(!panel.job().is_pending());
}

#[tokio::test(start_paused = true)]
async fn reply_quotes_trimmed_question() {
    let panel = panel();
    let reply = panel.send("  What is entropy? ").await.unwrap().completed().unwrap();
    assert!(reply.content.contains("Regarding \"What is entropy?\""));
    assert!(OPENERS.iter().any(|o| reply.content.starts_with(o)));

    let messages = panel.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].content, "What is entropy?");
    assert!(messages[1].is_user());
    assert_eq!(messages[2], reply);
    assert!(messages.iter().all(|m| !m.pending));
}

#[tokio::test(start_paused = true)]
async fn typing_placeholder_shown_while_pending() {
    let panel = panel();
    let ((), result) = tokio::join!(
        async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let messages = panel.messages();
            assert_eq!(messages.len(), 3);
            assert!(messages[2].pending);
        },
        panel.send("Explain osmosis")
    );
    assert!(matches!(result.unwrap(), Submission::Completed(_)));
}

#[tokio::test(start_paused = true)]
async fn reply_arrives_within_jitter_band() {
    let panel = panel();
    let start = tokio::time::Instant::now();
    panel.send("Explain osmosis").await.unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(1500));
    assert!(elapsed <= Duration::from_millis(2500));
}

#[tokio::test(start_paused = true)]
async fn send_while_pending_is_noop() {
    let panel = panel();
    let (_, second) = tokio::join!(panel.send("first"), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        panel.send("second").await
    });
    assert!(second.unwrap().is_ignored());
    let messages = panel.messages();
    assert_eq!(messages.len(), 3);
    assert!(messages.iter().all(|m| m.content != "second"));
}

#[tokio::test(start_paused = true)]
async fn quick_question_sends_and_clears_draft() {
    let panel = panel();
    let reply = panel.ask_quick(1).await.unwrap().completed().unwrap();
    assert!(reply.content.contains("Summarize photosynthesis"));
    assert!(panel.draft().is_empty());
    assert!(panel.ask_quick(9).await.unwrap().is_ignored());
}

#[tokio::test(start_paused = true)]
async fn send_draft_uses_current_draft() {
    let panel = panel();
    panel.set_draft("Define torque");
    panel.send_draft().await.unwrap();
    assert_eq!(panel.messages()[1].content, "Define torque");
    assert!(panel.draft().is_empty());
}

#[tokio::test(start_paused = true)]
async fn failed_reply_drops_placeholder() {
    let (collab, _) = test_helpers::failing_collaborators();
    let panel = ChatPanel::new(collab.assistant, &test_helpers::config());
    assert!(panel.send("hello").await.is_err());
    let messages = panel.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().all(|m| !m.pending));
    assert_eq!(panel.job().last_status(), Some(JobStatus::Failed));
    let notice = panel.notices().latest().unwrap();
    assert!(notice.is_destructive());
    assert_eq!(notice.title, "Reply Failed");
}

#[tokio::test(start_paused = true)]
async fn repeated_blank_sends_stay_within_tray_limit() {
    let panel = panel();
    for _ in 0..50 {
        assert!(panel.send("").await.is_err());
    }
    assert_eq!(panel.notices().len(), crate::notice::NOTICE_LIMIT);
    assert_eq!(panel.notices().raised(), 50);
    assert_eq!(panel.notices().latest().unwrap().title, "Message Required");
}

#[tokio::test(start_paused = true)]
async fn unmount_discards_reply() {
    let panel = panel();
    let (result, ()) = tokio::join!(panel.send("hello"), async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        panel.unmount();
    });
    assert_eq!(result.unwrap(), Submission::Cancelled);
    assert_eq!(panel.messages().len(), 2);
}
