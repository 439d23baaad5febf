//! Application layer for Snipgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (FormSession, SnippetRenderer,
//!   CopyService, EditorSession)
//! - **Ports**: Interface definitions (traits) for external collaborators
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. The transform lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CopyOutcome, CopyService, DEFAULT_ACKNOWLEDGE, EditorSession, FieldUpdate, FormSession,
    SnippetRenderer,
};

pub use ports::{Clipboard, Clock, EditorHost};

pub use error::ApplicationError;
