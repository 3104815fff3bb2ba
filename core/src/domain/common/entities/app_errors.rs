use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("User has no medical conditions set. Please add medical conditions first.")]
    NoConditions,

    #[error("Recipe generation failed: {0}")]
    GenerationFailure(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Errors worth retrying against the same backend after a pause.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CoreError::RateLimited(_))
    }
}
