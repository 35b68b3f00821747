//! Feature panels: self-contained blocks with their own local state.
//!
//! ARCHITECTURE
//! ============
//! A panel owns a form (value type, replaced wholesale on edit), a result
//! list, a notice tray and one `SimulatedJob`. Primary actions are `async`
//! and take `&self`, so two overlapping invocations on the same panel are
//! possible; the job's single-flight guard turns the second into a no-op.
//!
//! Every primary action runs the same sequence:
//! 1. Pending check: return `Submission::Ignored` without touching anything.
//! 2. Validation: raise one notice and return `Err` on a blank required field.
//! 3. Claim the flight, run the collaborator under the job, update results.
//!
//! Interior state sits behind `std::sync::Mutex`; no guard is ever held
//! across an `.await`.

pub mod chat;
pub mod pdf_analyzer;
pub mod test_generator;
pub mod test_manager;
pub mod video_recommender;

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::warn;

use crate::error::{ErrorCode, PanelError};
use crate::job::JobOutcome;
use crate::notice::{Notice, Notices};

pub use chat::ChatPanel;
pub use pdf_analyzer::{PdfAnalyzer, UploadPhase};
pub use test_generator::{TestGenerator, TestGeneratorForm};
pub use test_manager::{AssessmentForm, AssignTarget, AssignmentForm, ManagerTab, TestManager};
pub use video_recommender::VideoRecommender;

/// What happened to an admitted or ignored primary action.
#[derive(Debug, PartialEq)]
pub enum Submission<T> {
    /// The job ran to completion and its result was recorded.
    Completed(T),
    /// A job was already pending; nothing changed.
    Ignored,
    /// The panel was unmounted before the job finished; nothing recorded.
    Cancelled,
}

impl<T> Submission<T> {
    #[must_use]
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(v) => Some(v),
            Self::Ignored | Self::Cancelled => None,
        }
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Submission<U> {
        match self {
            Self::Completed(v) => Submission::Completed(f(v)),
            Self::Ignored => Submission::Ignored,
            Self::Cancelled => Submission::Cancelled,
        }
    }
}

/// Raise the error's notice in `notices` and return it.
pub(crate) fn reject<T>(panel: &'static str, notices: &Notices, err: PanelError) -> Result<T, PanelError> {
    warn!(panel, code = err.error_code(), error = %err, "panel: rejected");
    notices.push(err.notice());
    Err(err)
}

/// Translate a job outcome into a submission. A failed job raises a
/// notice titled `failure`.
pub(crate) fn settle<T>(
    panel: &'static str,
    failure: &'static str,
    notices: &Notices,
    outcome: JobOutcome<T>,
) -> Result<Submission<T>, PanelError> {
    match outcome {
        JobOutcome::Succeeded(v) => Ok(Submission::Completed(v)),
        JobOutcome::Failed(e) => {
            let err = PanelError::from(e);
            warn!(panel, code = err.error_code(), error = %err, "panel: job failed");
            notices.push(Notice::from_error(failure, &err));
            Err(err)
        }
        JobOutcome::Cancelled => Ok(Submission::Cancelled),
    }
}

pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Slider semantics: clamp to `[min, max]` and snap to the nearest `step`
/// above `min`.
#[must_use]
pub fn slider(value: u32, min: u32, max: u32, step: u32) -> u32 {
    let clamped = value.clamp(min, max);
    if step <= 1 {
        return clamped;
    }
    let offset = clamped - min;
    let snapped = min + (offset + step / 2) / step * step;
    snapped.min(max - (max - min) % step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_clamps_and_snaps() {
        assert_eq!(slider(25, 0, 20, 1), 20);
        assert_eq!(slider(0, 15, 120, 5), 15);
        assert_eq!(slider(33, 15, 120, 5), 35);
        assert_eq!(slider(32, 15, 120, 5), 30);
        assert_eq!(slider(50, 15, 180, 15), 45);
        assert_eq!(slider(999, 15, 180, 15), 180);
    }

    #[test]
    fn submission_map_and_completed() {
        assert_eq!(Submission::Completed(2).map(|v| v * 2).completed(), Some(4));
        assert!(Submission::<u8>::Ignored.is_ignored());
        assert_eq!(Submission::<u8>::Cancelled.completed(), None);
    }
}
