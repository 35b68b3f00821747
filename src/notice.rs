//! Notice: transient, dismissible user-facing messages.
//!
//! DESIGN
//! ======
//! Each panel owns a `Notices` tray. Validation failures, wrong upload
//! types, collaborator failures and success confirmations all land here.
//! Nothing propagates beyond the panel that raised it.
//!
//! The tray is bounded: it keeps the newest `NOTICE_LIMIT` entries and
//! evicts the oldest on overflow. `raised` counts every notice ever pushed
//! so callers can still observe one notice per action.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde::Serialize;

use crate::error::ErrorCode;

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub tone: Tone,
    /// Grepable error code, set only for notices built from an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl Notice {
    #[must_use]
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), tone: Tone::Default, code: None }
    }

    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), tone: Tone::Destructive, code: None }
    }

    /// Build a destructive notice titled `title` from a typed error.
    /// Retryable errors invite the user to try again.
    #[must_use]
    pub fn from_error(title: &str, err: &(impl ErrorCode + ?Sized)) -> Self {
        let description = if err.retryable() {
            "Something went wrong. Please try again.".to_string()
        } else {
            err.to_string()
        };
        Self {
            title: title.to_string(),
            description,
            tone: Tone::Destructive,
            code: Some(err.error_code()),
        }
    }

    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.tone == Tone::Destructive
    }
}

// =============================================================================
// TRAY
// =============================================================================

/// Most notices a tray holds at once.
pub const NOTICE_LIMIT: usize = 3;

/// Per-panel notice tray, bounded to the newest `NOTICE_LIMIT` entries.
#[derive(Debug, Default)]
pub struct Notices {
    inner: Mutex<Tray>,
}

#[derive(Debug, Default)]
struct Tray {
    items: VecDeque<Notice>,
    raised: u64,
}

impl Notices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notice: Notice) {
        tracing::debug!(title = %notice.title, tone = ?notice.tone, "notice raised");
        let mut tray = self.lock();
        tray.raised += 1;
        tray.items.push_back(notice);
        while tray.items.len() > NOTICE_LIMIT {
            tray.items.pop_front();
        }
    }

    /// Copy of the current notices, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notice> {
        self.lock().items.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    /// Total notices pushed over the tray's lifetime, evicted ones included.
    #[must_use]
    pub fn raised(&self) -> u64 {
        self.lock().raised
    }

    #[must_use]
    pub fn latest(&self) -> Option<Notice> {
        self.lock().items.back().cloned()
    }

    /// Remove the notice at `index`. Out-of-range indexes are ignored.
    pub fn dismiss(&self, index: usize) -> Option<Notice> {
        self.lock().items.remove(index)
    }

    /// Remove and return every notice.
    pub fn drain(&self) -> Vec<Notice> {
        self.lock().items.drain(..).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tray> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;
