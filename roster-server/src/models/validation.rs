//! Validation error types

use std::fmt;

/// Validation error for request shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent, empty, or zero
    Missing { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value doesn't have the expected shape
    InvalidFormat { field: &'static str, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Longest name the `VARCHAR(128)` columns are declared for
pub const MAX_NAME_LEN: usize = 128;

/// Treat an empty string as absent.
pub(crate) fn present_str(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Treat a zero id as absent.
pub(crate) fn present_id(value: Option<i64>) -> Option<i64> {
    value.filter(|&id| id != 0)
}

/// Check a name against the column width.
pub(crate) fn check_name(field: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 128,
        };
        assert_eq!(
            err.to_string(),
            "name exceeds maximum length of 128 characters"
        );
        assert_eq!(
            ValidationError::Missing { field: "cohort_id" }.to_string(),
            "cohort_id is required"
        );
    }

    #[test]
    fn falsy_values_are_absent() {
        assert_eq!(present_str(Some(String::new())), None);
        assert_eq!(present_str(Some("a".into())), Some("a".into()));
        assert_eq!(present_id(Some(0)), None);
        assert_eq!(present_id(Some(-3)), Some(-3));
    }

    #[test]
    fn name_length_counts_chars() {
        assert!(check_name("name", &"é".repeat(128)).is_ok());
        assert!(check_name("name", &"a".repeat(129)).is_err());
    }
}
