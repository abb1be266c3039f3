use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordCountError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Word list not found: {path}")]
    WordListNotFound { path: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WordCountError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WordCountError::IoError(_) | WordCountError::WordListNotFound { .. } => {
                ErrorCategory::Io
            }
            WordCountError::SerializationError(_) => ErrorCategory::Output,
            WordCountError::ConfigError { .. }
            | WordCountError::ConfigValidationError { .. }
            | WordCountError::InvalidConfigValueError { .. }
            | WordCountError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            WordCountError::WordListNotFound { .. } => ErrorSeverity::Medium,
            WordCountError::SerializationError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WordCountError::WordListNotFound { .. } => {
                "Place a words.txt next to the executable or pass --word-list <PATH>"
            }
            WordCountError::IoError(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                "The word list must be UTF-8 text with one word per line"
            }
            WordCountError::IoError(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                "Check that the word list is readable by the current user"
            }
            WordCountError::IoError(_) => "Check that the word list path points to a readable file",
            WordCountError::SerializationError(_) => "Retry with --format text",
            _ => "Check the command line arguments and the TOML configuration file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WordCountError::WordListNotFound { path } => {
                format!("Could not find the word list at '{}'", path)
            }
            WordCountError::IoError(e) => format!("Could not read the word list: {}", e),
            WordCountError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            WordCountError::MissingConfigError { field } => {
                format!("Missing setting '{}'", field)
            }
            other => other.to_string(),
        }
    }

    /// Maps an open failure on `path`, keeping `NotFound` distinct from other IO errors.
    pub fn from_open(path: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            WordCountError::WordListNotFound {
                path: path.to_string(),
            }
        } else {
            WordCountError::IoError(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, WordCountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_open_maps_not_found() {
        let err = WordCountError::from_open(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "nope"),
        );
        assert!(matches!(err, WordCountError::WordListNotFound { ref path } if path == "missing.txt"));
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_from_open_keeps_other_io_errors() {
        let err = WordCountError::from_open(
            "locked.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, WordCountError::IoError(_)));
        assert_eq!(
            err.recovery_suggestion(),
            "Check that the word list is readable by the current user"
        );
    }

    #[test]
    fn test_config_errors_are_configuration_category() {
        let err = WordCountError::MissingConfigError {
            field: "query.words".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.user_friendly_message(), "Missing setting 'query.words'");
    }
}
