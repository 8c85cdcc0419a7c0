//! Error handling for the service layer.

use thiserror::Error;

/// Result type alias for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Service-level errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] lexidrill_core::Error),

    #[error("not found: {0}")]
    NotFound(String),

    /// No start marker (or walkthrough state) in the session store; the
    /// caller should restart the flow.
    #[error("session expired; start again")]
    SessionExpired,

    /// A session-store payload that no longer decodes.
    #[error("corrupt session payload: {0}")]
    Corrupt(String),
}
