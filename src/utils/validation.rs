use crate::utils::error::{BatchError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks that a raw text field carries something other than whitespace.
pub fn require_text<'a>(field_name: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BatchError::MissingField {
            field: field_name.to_string(),
        });
    }
    Ok(trimmed)
}

/// Parses a raw text field as a strictly positive number.
pub fn parse_positive_number(field_name: &str, value: &str) -> Result<f64> {
    let trimmed = require_text(field_name, value)?;

    let parsed: f64 = trimmed.parse().map_err(|_| BatchError::NotANumber {
        field: field_name.to_string(),
    })?;

    if !parsed.is_finite() {
        return Err(BatchError::NotANumber {
            field: field_name.to_string(),
        });
    }

    if parsed <= 0.0 {
        return Err(BatchError::NotPositive {
            field: field_name.to_string(),
        });
    }

    Ok(parsed)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BatchError::ConfigError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BatchError::ConfigError {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BatchError::ConfigError {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("city", " Memphis ").unwrap(), "Memphis");
        assert!(require_text("city", "").is_err());
        assert!(require_text("city", "   ").is_err());
    }

    #[test]
    fn test_parse_positive_number() {
        assert_eq!(parse_positive_number("length", "11.2").unwrap(), 11.2);
        assert_eq!(parse_positive_number("weight", " 5.5 ").unwrap(), 5.5);

        assert!(matches!(
            parse_positive_number("length", "abc"),
            Err(BatchError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_positive_number("length", "0"),
            Err(BatchError::NotPositive { .. })
        ));
        assert!(matches!(
            parse_positive_number("length", "-3"),
            Err(BatchError::NotPositive { .. })
        ));
        assert!(matches!(
            parse_positive_number("length", ""),
            Err(BatchError::MissingField { .. })
        ));
        assert!(matches!(
            parse_positive_number("length", "inf"),
            Err(BatchError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.dir", "./manifests").is_ok());
        assert!(validate_path("output.dir", "").is_err());
        assert!(validate_path("output.dir", "bad\0path").is_err());
    }
}
