//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the external
//! collaborators behind the ports. The domain has no error type: the
//! transform is total.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The export entry could not be serialized.
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },

    /// No clipboard is reachable in this environment.
    #[error("Clipboard unavailable: {reason}")]
    ClipboardUnavailable { reason: String },

    /// The clipboard was reachable but refused the write.
    #[error("Clipboard write failed: {reason}")]
    ClipboardWriteFailed { reason: String },

    /// The body editor could not be launched or failed mid-edit.
    #[error("Editor failed: {reason}")]
    EditorFailed { reason: String },

    /// A form file was missing or malformed.
    #[error("Cannot load form from {path}: {reason}")]
    FormSource { path: PathBuf, reason: String },

    /// Adapter state lock was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ClipboardUnavailable { .. } => vec![
                "No clipboard is available (headless session?)".into(),
                "Use 'snipgen render --fragment' and copy the output manually".into(),
            ],
            Self::EditorFailed { .. } => vec![
                "Check that $VISUAL or $EDITOR points to an installed editor".into(),
                "Or pass the body directly with --body / --body-file".into(),
            ],
            Self::FormSource { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Form files must be .toml or .json".into(),
                "Fields: name, prefix, scope, body, description".into(),
            ],
            Self::LockPoisoned => vec!["Try again; a previous operation panicked".into()],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Serialization { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::ClipboardUnavailable { .. } | Self::ClipboardWriteFailed { .. } => {
                ErrorCategory::Unavailable
            }
            Self::EditorFailed { .. } => ErrorCategory::Unavailable,
            Self::FormSource { .. } => ErrorCategory::Validation,
        }
    }
}
