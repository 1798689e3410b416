use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoodCountError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("Count provider failed: {message}")]
    ProviderError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lambda runtime error: {message}")]
    RuntimeError { message: String },
}

/// Where an error sits in the failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Startup misconfiguration. Fatal, nothing is served.
    Configuration,
    /// Caller supplied bad input.
    Client,
    /// The count provider failed.
    Provider,
    /// Anything else that went wrong while building a response.
    Internal,
}

impl GoodCountError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::ProviderError {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorKind::Configuration
            }
            Self::BadRequest { .. } => ErrorKind::Client,
            Self::ProviderError { .. } | Self::HttpError(_) => ErrorKind::Provider,
            Self::SerializationError(_) | Self::IoError(_) | Self::RuntimeError { .. } => {
                ErrorKind::Internal
            }
        }
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Configuration | ErrorKind::Client => 1,
            ErrorKind::Provider | ErrorKind::Internal => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ConfigError { message } => format!("Cannot start: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Cannot start: --{} {}", field.replace('_', "-"), reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GoodCountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(GoodCountError::config("x").kind(), ErrorKind::Configuration);
        assert_eq!(GoodCountError::bad_request("x").kind(), ErrorKind::Client);
        assert_eq!(GoodCountError::provider("x").kind(), ErrorKind::Provider);

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(GoodCountError::from(io).kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(GoodCountError::config("x").exit_code(), 1);
        assert_eq!(GoodCountError::provider("x").exit_code(), 2);
    }

    #[test]
    fn test_bad_request_displays_bare_message() {
        let err = GoodCountError::bad_request("article_id is empty");
        assert_eq!(err.to_string(), "article_id is empty");
    }

    #[test]
    fn test_user_friendly_message_names_flag() {
        let err = GoodCountError::InvalidConfigValueError {
            field: "count_endpoint".to_string(),
            value: String::new(),
            reason: "URL cannot be empty".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Cannot start: --count-endpoint URL cannot be empty"
        );
    }
}
