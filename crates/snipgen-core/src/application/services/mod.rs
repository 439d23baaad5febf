//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "render the preview" or "copy the snippet".

pub mod copy_service;
pub mod editor_session;
pub mod form_session;
pub mod snippet_renderer;

pub use copy_service::{CopyOutcome, CopyService, DEFAULT_ACKNOWLEDGE};
pub use editor_session::EditorSession;
pub use form_session::{FieldUpdate, FormSession};
pub use snippet_renderer::SnippetRenderer;
