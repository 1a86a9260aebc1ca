use crate::utils::error::{DeviceError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Identifier parts surround the generated token, so they must be non-empty
/// and must not contain whitespace or the `-` separator.
pub fn validate_id_part(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DeviceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty".to_string(),
        });
    }

    if value.contains('-') {
        return Err(DeviceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot contain the '-' separator".to_string(),
        });
    }

    if value.chars().any(|c| c.is_whitespace()) {
        return Err(DeviceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot contain whitespace".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_identifier_parts() {
        assert!(validate_id_part("prefix", "SomePrefix").is_ok());
        assert!(validate_id_part("suffix", "S0meSuffix").is_ok());
    }

    #[test]
    fn test_rejects_empty_value() {
        let err = validate_id_part("prefix", "").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_rejects_separator() {
        let err = validate_id_part("prefix", "Some-Prefix").unwrap_err();
        assert!(err.to_string().contains("separator"));
    }

    #[test]
    fn test_rejects_whitespace() {
        let err = validate_id_part("suffix", "Some Suffix").unwrap_err();
        assert!(err.to_string().contains("whitespace"));
    }
}
