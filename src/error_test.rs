use super::*;
use crate::notice::Tone;

#[test]
fn missing_field_notice_uses_supplied_copy() {
    let err = PanelError::missing("topic", "Topic Required", "Please enter a topic for your test.");
    let notice = err.notice();
    assert_eq!(notice.title, "Topic Required");
    assert_eq!(notice.description, "Please enter a topic for your test.");
    assert_eq!(notice.tone, Tone::Destructive);
    assert_eq!(err.error_code(), "E_MISSING_FIELD");
    assert!(!err.retryable());
}

#[test]
fn invalid_file_type_notice_title() {
    let err = PanelError::InvalidFileType { mime: "image/png".into() };
    assert_eq!(err.notice().title, "Invalid File Type");
    assert_eq!(err.error_code(), "E_INVALID_FILE_TYPE");
    assert!(err.to_string().contains("image/png"));
}

#[test]
fn service_error_code_passes_through() {
    let err = PanelError::from(ServiceError::Timeout { after_ms: 500 });
    assert_eq!(err.error_code(), "E_SERVICE_TIMEOUT");
    assert!(err.retryable());
}

#[test]
fn service_error_malformed_not_retryable() {
    let err = PanelError::from(ServiceError::Malformed("bad".into()));
    assert!(!err.retryable());
}

#[test]
fn require_trims_value() {
    let out = require("  Photosynthesis \n", || PanelError::UnknownTest("x".into())).unwrap();
    assert_eq!(out, "Photosynthesis");
}

#[test]
fn require_rejects_whitespace() {
    let err = require("   ", || PanelError::missing("topic", "Topic Required", "d")).unwrap_err();
    assert!(matches!(err, PanelError::MissingField { field: "topic", .. }));
}
