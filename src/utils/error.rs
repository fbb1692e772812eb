use crate::utils::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Validation failed: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration '{field}'")]
    MissingConfigError { field: String },

    #[error("Server variable '{name}' rejected value '{value}': {reason}")]
    ServerVariableError {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Unknown model '{name}'")]
    UnknownModel { name: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    System,
}

impl SdkError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SdkError::ConfigValidationError { .. }
            | SdkError::InvalidConfigValueError { .. }
            | SdkError::MissingConfigError { .. }
            | SdkError::ServerVariableError { .. }
            | SdkError::UrlError(_) => ErrorCategory::Configuration,
            SdkError::HttpError(_) => ErrorCategory::Network,
            SdkError::SerializationError(_)
            | SdkError::ValidationError(_)
            | SdkError::UnknownModel { .. } => ErrorCategory::Data,
            SdkError::IoError(_) | SdkError::ServerError { .. } => ErrorCategory::System,
        }
    }

    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Data => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Configuration => 3,
            ErrorCategory::System => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SdkError::MissingConfigError { field } => {
                format!("設定檔缺少必要欄位 '{}'", field)
            }
            SdkError::HttpError(e) if e.is_connect() => {
                "無法連線到遠端 NF，請確認位址與網路設定".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Failure handed to a service's error mapping when a request cannot be
/// turned into a typed, valid record.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("malformed request body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request body: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid path parameter '{name}': {errors}")]
    PathParameter {
        name: &'static str,
        errors: ValidationErrors,
    },
}

pub type Result<T> = std::result::Result<T, SdkError>;
