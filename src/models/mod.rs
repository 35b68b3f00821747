//! Display-only records produced by the panels.
//!
//! DESIGN
//! ======
//! Nothing here has a server-side counterpart or survives the session.
//! Records are immutable once created; the only editable record, the
//! teacher's `Question`, changes through copy-with-change (`Question::apply`)
//! and every test's point total is derived on read.

pub mod difficulty;
pub mod document;
pub mod message;
pub mod question;
pub mod video;

pub use difficulty::Difficulty;
pub use document::{AnalyzedDocument, ChoiceQuestion, QuestionSet, UploadedFile, WrittenQuestion};
pub use message::{Author, Message};
pub use question::{Question, QuestionEdit, QuestionKind};
pub use test::{GeneratedTest, Test, TestStatus};
pub use video::{LengthFilter, VideoFilter, VideoRecommendation};

/// Timestamp type used by every record.
pub type Timestamp = time::OffsetDateTime;

/// Current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    time::OffsetDateTime::now_utc()
}
