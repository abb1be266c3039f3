use crate::utils::error::{Result, WordCountError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(WordCountError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(WordCountError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(WordCountError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(WordCountError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// A query word is compared against whole lines, so it can never contain a line break.
pub fn validate_words(field_name: &str, words: &[String]) -> Result<()> {
    if words.is_empty() {
        return Err(WordCountError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for word in words {
        if word.contains('\n') || word.contains('\r') {
            return Err(WordCountError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: word.escape_debug().to_string(),
                reason: "Words cannot contain line breaks".to_string(),
            });
        }
    }
    Ok(())
}
