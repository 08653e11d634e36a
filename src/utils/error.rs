use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Contract encoding error: {message}")]
    EncodingError { message: String },

    #[error("JSON-RPC error {code}: {message}")]
    RpcError { code: i64, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    Chain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AdapterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdapterError::ApiError(_) => ErrorCategory::Network,
            AdapterError::IoError(_) => ErrorCategory::Configuration,
            AdapterError::SerializationError(_) | AdapterError::EncodingError { .. } => {
                ErrorCategory::Data
            }
            AdapterError::UrlError(_)
            | AdapterError::ConfigError { .. }
            | AdapterError::MissingConfigError { .. }
            | AdapterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AdapterError::RpcError { .. } => ErrorCategory::Chain,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常可重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Chain => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AdapterError::ApiError(_) => "Check network connectivity and the upstream API status",
            AdapterError::IoError(_) => "Check that the file exists and is readable",
            AdapterError::SerializationError(_) => "Check that the payload is valid JSON",
            AdapterError::UrlError(_) => "Check the base URL and endpoint settings",
            AdapterError::ConfigError { .. }
            | AdapterError::MissingConfigError { .. }
            | AdapterError::InvalidConfigValueError { .. } => {
                "Review environment variables and the configuration file"
            }
            AdapterError::EncodingError { .. } => {
                "Check the TRUFFLE_CL_BOX_* values (address, payment, times)"
            }
            AdapterError::RpcError { .. } => {
                "Check that the node is reachable and the sending account is unlocked"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AdapterError::ApiError(e) if e.is_timeout() => {
                "The air quality API did not answer in time".to_string()
            }
            AdapterError::ApiError(_) => "Could not reach the air quality API".to_string(),
            AdapterError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            AdapterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
