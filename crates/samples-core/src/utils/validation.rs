/// Input validation utilities
use crate::error::SampleError;

/// Rejects a missing or blank required field
pub fn require_field<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, SampleError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SampleError::Validation(format!(
            "'{}' cannot be null or empty",
            field
        ))),
    }
}

/// Rejects a blank required field
pub fn require_non_blank(value: &str, field: &str) -> Result<(), SampleError> {
    require_field(Some(value), field).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field() {
        assert_eq!(require_field(Some("abc"), "id").unwrap(), "abc");
        assert!(require_field(Some("   "), "id").is_err());
        assert!(require_field(None, "id").is_err());
    }

    #[test]
    fn test_require_non_blank_message() {
        let err = require_non_blank("", "employee_id").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: 'employee_id' cannot be null or empty"
        );
    }
}
