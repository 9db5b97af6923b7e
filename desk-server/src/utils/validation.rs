//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so limits are
//! applied here before any write.

use super::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Person and entity names
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone, key tag codes, payment method, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Notes and descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Signature payloads (base64 PNG from the signature pad)
pub const MAX_SIGNATURE_LEN: usize = 1_000_000;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_required_text_rejects_empty() {
        let err = validate_required_text("", "first_name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let err = validate_required_text("   ", "first_name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_required_text_rejects_too_long() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "first_name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_required_text_accepts_normal() {
        assert!(validate_required_text("Jane", "first_name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "phone", MAX_SHORT_TEXT_LEN).is_ok());
        assert!(
            validate_optional_text(&Some("555-0101".into()), "phone", MAX_SHORT_TEXT_LEN).is_ok()
        );
        let long = Some("x".repeat(MAX_SHORT_TEXT_LEN + 1));
        assert!(validate_optional_text(&long, "phone", MAX_SHORT_TEXT_LEN).is_err());
    }
}
