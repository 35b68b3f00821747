//! Teacher session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The teacher dashboard greets the signed-in teacher and shows their
//! subject and school. Identity arrives as an opaque JSON blob from
//! whatever login flow sits in front of the dashboard; this crate never
//! validates it. Missing or malformed blobs fall back to placeholders.

use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_NAME: &str = "Professor";
pub const DEFAULT_SUBJECT: &str = "Subject";
pub const DEFAULT_SCHOOL: &str = "Institution";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherSession {
    pub name: String,
    pub subject: String,
    pub school: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawSession {
    name: Option<String>,
    subject: Option<String>,
    school: Option<String>,
}

impl Default for TeacherSession {
    fn default() -> Self {
        Self { name: DEFAULT_NAME.into(), subject: DEFAULT_SUBJECT.into(), school: DEFAULT_SCHOOL.into() }
    }
}

impl TeacherSession {
    /// Parse a session blob. Absent, malformed or blank fields take the
    /// placeholder values; unknown fields are ignored.
    #[must_use]
    pub fn from_json(blob: Option<&str>) -> Self {
        let raw = match blob.map(str::trim).filter(|b| !b.is_empty()) {
            None => RawSession::default(),
            Some(text) => serde_json::from_str::<RawSession>(text).unwrap_or_else(|e| {
                warn!(error = %e, "session: malformed teacher blob, using defaults");
                RawSession::default()
            }),
        };
        let or = |value: Option<String>, fallback: &str| {
            value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| fallback.to_string())
        };
        Self {
            name: or(raw.name, DEFAULT_NAME),
            subject: or(raw.subject, DEFAULT_SUBJECT),
            school: or(raw.school, DEFAULT_SCHOOL),
        }
    }

    #[must_use]
    pub fn greeting(&self) -> String {
        format!("Welcome back, {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_blob_uses_placeholders() {
        assert_eq!(TeacherSession::from_json(None), TeacherSession::default());
        assert_eq!(TeacherSession::from_json(Some("  ")), TeacherSession::default());
    }

    #[test]
    fn malformed_blob_uses_placeholders() {
        assert_eq!(TeacherSession::from_json(Some("{not json")), TeacherSession::default());
        assert_eq!(TeacherSession::from_json(Some("[1,2]")), TeacherSession::default());
    }

    #[test]
    fn partial_blob_fills_gaps() {
        let session = TeacherSession::from_json(Some(r#"{"name":"Dr. Rivera","school":"","extra":1}"#));
        assert_eq!(session.name, "Dr. Rivera");
        assert_eq!(session.subject, DEFAULT_SUBJECT);
        assert_eq!(session.school, DEFAULT_SCHOOL);
        assert_eq!(session.greeting(), "Welcome back, Dr. Rivera");
    }
}
