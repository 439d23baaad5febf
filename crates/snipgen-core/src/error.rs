//! Unified error handling for Snipgen Core.
//!
//! The snippet transform itself is total and has no error kind; everything
//! here comes from orchestration, ports, or configuration.

use thiserror::Error;

use crate::application::ApplicationError;

/// Root error type for Snipgen Core operations.
#[derive(Debug, Error, Clone)]
pub enum SnipgenError {
    /// Errors from the application layer (ports, serialization).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SnipgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Snipgen".into(),
                "Please report this issue at: https://github.com/cosecruz/snipgen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Unavailable,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type SnipgenResult<T> = Result<T, SnipgenError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> SnipgenResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> SnipgenResult<T> {
        self.map_err(|e| SnipgenError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
