//! Field validation helpers and HTML stripping for stored string inputs.
//! Mirrors the middleware contract: field-level 400 messages, and every
//! stored string except passwords has HTML tags removed.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::AppError;

fn html_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid regex"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"))
}

/// Strips HTML tags and trims surrounding whitespace.
pub fn sanitize(input: &str) -> String {
    html_tag_re().replace_all(input, "").trim().to_string()
}

/// Checks presence and length bounds, then sanitizes. For required string
/// fields that end up stored.
pub fn required_str(
    field: &str,
    value: Option<&str>,
    min_len: usize,
    max_len: usize,
) -> Result<String, AppError> {
    let value = value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))?;
    bounded_len(field, value, min_len, max_len)?;
    Ok(sanitize(value))
}

/// Length bounds for an optional field; `None` passes through.
pub fn optional_str(
    field: &str,
    value: Option<&str>,
    min_len: usize,
    max_len: usize,
) -> Result<Option<String>, AppError> {
    match value {
        None => Ok(None),
        Some(v) => {
            bounded_len(field, v, min_len, max_len)?;
            Ok(Some(sanitize(v)))
        }
    }
}

pub fn valid_email(field: &str, value: Option<&str>) -> Result<String, AppError> {
    let value = value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))?;
    if !email_re().is_match(value) {
        return Err(AppError::Validation(format!("{field} format is invalid")));
    }
    Ok(sanitize(value))
}

/// Presence and length check without sanitization. Passwords only.
pub fn required_password(
    field: &str,
    value: Option<&str>,
    min_len: usize,
    max_len: usize,
) -> Result<String, AppError> {
    let value = value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))?;
    bounded_len(field, value, min_len, max_len)?;
    Ok(value.to_string())
}

fn bounded_len(field: &str, value: &str, min_len: usize, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min_len {
        return Err(AppError::Validation(format!(
            "{field} must be at least {min_len} characters"
        )));
    }
    if len > max_len {
        return Err(AppError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_tags() {
        assert_eq!(
            sanitize("  <script>alert(1)</script>hello <b>world</b>  "),
            "alert(1)hello world"
        );
        assert_eq!(sanitize("plain text"), "plain text");
    }

    #[test]
    fn test_required_str_rejects_missing_and_short() {
        assert!(required_str("name", None, 2, 100).is_err());
        assert!(required_str("name", Some(""), 2, 100).is_err());
        assert!(required_str("name", Some("x"), 2, 100).is_err());
        assert_eq!(required_str("name", Some("Ada"), 2, 100).unwrap(), "Ada");
    }

    #[test]
    fn test_required_str_rejects_too_long() {
        let long = "x".repeat(101);
        assert!(required_str("name", Some(&long), 2, 100).is_err());
    }

    #[test]
    fn test_email_pattern() {
        assert!(valid_email("email", Some("user@example.com")).is_ok());
        assert!(valid_email("email", Some("not-an-email")).is_err());
        assert!(valid_email("email", Some("a b@c.com")).is_err());
        assert!(valid_email("email", None).is_err());
    }

    #[test]
    fn test_password_not_sanitized() {
        let pw = required_password("password", Some("<secret123>"), 8, 128).unwrap();
        assert_eq!(pw, "<secret123>");
    }

    #[test]
    fn test_optional_str_passes_none() {
        assert_eq!(optional_str("role", None, 0, 100).unwrap(), None);
        assert_eq!(
            optional_str("role", Some("<i>PM</i>"), 0, 100).unwrap(),
            Some("PM".to_string())
        );
    }
}
