use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("API returned status {status}")]
    HttpStatusError { status: u16 },

    #[error("Unexpected payload: {message}")]
    UnexpectedPayload { message: String },

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FinderError::ApiError(_)
            | FinderError::HttpStatusError { .. }
            | FinderError::Timeout { .. } => ErrorCategory::Network,
            FinderError::SerializationError(_) | FinderError::UnexpectedPayload { .. } => {
                ErrorCategory::Data
            }
            FinderError::UrlError(_)
            | FinderError::ConfigError { .. }
            | FinderError::InvalidConfigValueError { .. }
            | FinderError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            FinderError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FinderError::ApiError(_) | FinderError::HttpStatusError { .. } => {
                "Could not reach the doctor directory".to_string()
            }
            FinderError::Timeout { seconds } => {
                format!("The doctor directory did not answer within {}s", seconds)
            }
            FinderError::SerializationError(_) | FinderError::UnexpectedPayload { .. } => {
                "The doctor directory returned data in an unexpected format".to_string()
            }
            FinderError::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the network connection and the --api-endpoint value",
            ErrorCategory::Data => "Verify that the endpoint returns a JSON array of doctors",
            ErrorCategory::Configuration => "Review the command-line flags and the config file",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = FinderError::InvalidConfigValueError {
            field: "source.endpoint".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("source.endpoint"));
    }

    #[test]
    fn test_timeout_message() {
        let err = FinderError::Timeout { seconds: 3 };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.user_friendly_message().contains("3s"));
    }
}
