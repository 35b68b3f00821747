//! EduLink: AI study tools for students and teachers.
//!
//! ARCHITECTURE
//! ============
//! Two dashboards compose independent feature panels. Each panel owns its
//! form, results, notices and one `SimulatedJob`; every "AI" call is a
//! collaborator trait object awaited under that job, so delay, timeout,
//! single-flight and cancellation behave the same everywhere.
//!
//! - `models`: display records (tests, questions, documents, videos, chat).
//! - `services`: collaborator traits and the canned implementations.
//! - `job`: the single-flight, cancellable job primitive.
//! - `panels`: the five feature panels.
//! - `dashboard`, `landing`, `session`: composition and static content.
//! - `config`, `error`, `notice`: ambient plumbing.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod job;
pub mod landing;
pub mod models;
pub mod notice;
pub mod panels;
pub mod services;
pub mod session;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::EdulinkConfig;
pub use dashboard::{StudentDashboard, TeacherDashboard};
pub use error::{ErrorCode, PanelError};
pub use services::{Collaborators, ServiceError};
pub use session::TeacherSession;
