use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid health profile: {0}")]
    InvalidHealthProfile(String),
}
