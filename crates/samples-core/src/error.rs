/// Error types for the serverless samples
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method {method} not allowed! Only {allowed} allowed for this endpoint")]
    MethodNotAllowed { method: String, allowed: String },

    #[error("Operation timed out: {0}")]
    Timeout(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Queue error: {0}")]
    Queue(String),

    #[error("Event publishing error: {0}")]
    Events(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SampleError {
    /// HTTP status code an API handler answers with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Serialization(_) => 400,
            Self::NotFound(_) => 404,
            Self::MethodNotAllowed { .. } => 405,
            Self::Timeout(_) => 503,
            Self::Repository(_) => 500,
            Self::Storage(_) => 500,
            Self::Queue(_) => 500,
            Self::Events(_) => 500,
            Self::Http(_) => 500,
            Self::Config(_) => 500,
            Self::Internal(_) => 500,
        }
    }

    /// Short name reported in the `X-Amzn-ErrorType` header
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationException",
            Self::NotFound(_) => "NotFoundException",
            Self::MethodNotAllowed { .. } => "MethodNotAllowedException",
            Self::Timeout(_) => "TimeoutException",
            Self::Repository(_) => "RepositoryException",
            Self::Storage(_) => "StorageException",
            Self::Queue(_) => "QueueException",
            Self::Events(_) => "EventPublishingException",
            Self::Http(_) => "HttpException",
            Self::Config(_) => "ConfigurationException",
            Self::Serialization(_) => "SerializationException",
            Self::Internal(_) => "InternalServerException",
        }
    }

    /// Whether the failure was caused by the caller rather than a dependency
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl From<serde_json::Error> for SampleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::env::VarError> for SampleError {
    fn from(err: std::env::VarError) -> Self {
        Self::Config(err.to_string())
    }
}
