//! Study assistant chat panel.
//!
//! The transcript starts with the assistant greeting. While a reply is
//! pending a typing placeholder sits at the end of the transcript; it is
//! removed when the job settles, whatever the outcome.

use std::sync::{Arc, Mutex};

use tracing::info;
use uuid::Uuid;

use super::{Submission, lock, reject, settle};
use crate::config::EdulinkConfig;
use crate::error::{PanelError, require};
use crate::job::{Delay, SimulatedJob, no_progress};
use crate::models::Message;
use crate::notice::Notices;
use crate::services::StudyAssistant;
use crate::services::assistant::{GREETING, QUICK_QUESTIONS, QuickQuestion};

const FAILED: &str = "Reply Failed";
const PANEL: &str = "chat";

pub struct ChatPanel {
    messages: Mutex<Vec<Message>>,
    draft: Mutex<String>,
    notices: Notices,
    job: SimulatedJob,
    assistant: Arc<dyn StudyAssistant>,
    delay: Delay,
}

impl ChatPanel {
    #[must_use]
    pub fn new(assistant: Arc<dyn StudyAssistant>, config: &EdulinkConfig) -> Self {
        Self {
            messages: Mutex::new(vec![Message::assistant(GREETING)]),
            draft: Mutex::new(String::new()),
            notices: Notices::new(),
            job: SimulatedJob::new(PANEL, config.job_timeout),
            assistant,
            delay: config.chat_reply(),
        }
    }

    /// Transcript in display order, including any typing placeholder.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        lock(&self.messages).clone()
    }

    #[must_use]
    pub fn quick_questions(&self) -> &'static [QuickQuestion] {
        &QUICK_QUESTIONS
    }

    #[must_use]
    pub fn draft(&self) -> String {
        lock(&self.draft).clone()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        *lock(&self.draft) = text.into();
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

    /// Send the current draft. The draft is cleared once the message is accepted.
    ///
    /// # Errors
    ///
    /// See [`ChatPanel::send`].
    pub async fn send_draft(&self) -> Result<Submission<Message>, PanelError> {
        let draft = self.draft();
        self.send(&draft).await
    }

    /// Put a quick question into the draft and send it. Out-of-range indexes
    /// are ignored.
    ///
    /// # Errors
    ///
    /// See [`ChatPanel::send`].
    pub async fn ask_quick(&self, index: usize) -> Result<Submission<Message>, PanelError> {
        let Some(quick) = QUICK_QUESTIONS.get(index) else {
            return Ok(Submission::Ignored);
        };
        if self.job.is_pending() {
            return Ok(Submission::Ignored);
        }
        self.set_draft(quick.text);
        self.send_draft().await
    }

    /// Post `content` as the user and wait for the assistant's reply.
    ///
    /// # Errors
    ///
    /// `MissingField` when `content` is blank; `Service` if the assistant fails.
    pub async fn send(&self, content: &str) -> Result<Submission<Message>, PanelError> {
        if self.job.is_pending() {
            return Ok(Submission::Ignored);
        }
        let question = match require(content, || {
            PanelError::missing("message", "Message Required", "Please type a question first.")
        }) {
            Ok(q) => q.to_string(),
            Err(e) => return reject(PANEL, &self.notices, e),
        };

        let Some(flight) = self.job.try_begin() else {
            return Ok(Submission::Ignored);
        };
        let placeholder = Message::typing();
        let history = {
            let mut messages = lock(&self.messages);
            messages.push(Message::user(question.clone()));
            let history = messages.clone();
            messages.push(placeholder.clone());
            history
        };
        lock(&self.draft).clear();
        info!(chars = question.len(), history = history.len(), "chat: sent");

        let outcome = self
            .job
            .run(&flight, &self.delay, &mut no_progress, self.assistant.reply(&history, &question))
            .await;
        self.remove(placeholder.id);
        let submission = settle(PANEL, FAILED, &self.notices, outcome)?.map(Message::assistant);

        if let Submission::Completed(reply) = &submission {
            lock(&self.messages).push(reply.clone());
        }
        drop(flight);
        Ok(submission)
    }

    fn remove(&self, id: Uuid) {
        lock(&self.messages).retain(|m| m.id != id);
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;
