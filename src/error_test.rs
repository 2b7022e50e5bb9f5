//! Tests for application error types.

use crate::error::AppError;

#[test]
fn missing_element_error_displays_correctly() {
    let err = AppError::MissingElement("appointments-data".to_string());
    assert_eq!(err.to_string(), "Element not found: #appointments-data");
}

#[test]
fn dom_error_displays_correctly() {
    let err = AppError::Dom("no window".to_string());
    assert_eq!(err.to_string(), "DOM unavailable: no window");
}

#[test]
fn parse_error_converts_from_serde_json() {
    fn parse(raw: &str) -> crate::Result<serde_json::Value> {
        Ok(serde_json::from_str(raw)?)
    }

    let err = parse("{not json").unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid JSON: "));
}
