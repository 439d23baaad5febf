//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `snipgen-adapters` crate provides implementations.

use std::time::Instant;

use crate::error::SnipgenResult;

/// Port for the platform clipboard.
///
/// Implemented by:
/// - `snipgen_adapters::clipboard::SystemClipboard` (production)
/// - `snipgen_adapters::clipboard::MemoryClipboard` (testing)
///
/// A write may fail (no display server, permission denied); callers decide
/// what a failure means. `CopyService` swallows it.
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> SnipgenResult<()>;
}

/// Port for reading the current time.
///
/// Implemented by:
/// - `snipgen_adapters::SystemClock` (production)
/// - test clocks that advance manually
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Port for the editor that edits the snippet body.
///
/// The core only needs plain-text in, plain-text out, plus a language hint
/// for cosmetic highlighting. Tokenization is entirely the host's business.
pub trait EditorHost: Send + Sync {
    /// Make highlighting for `language` available.
    ///
    /// Called once per language per [`EditorSession`](crate::application::EditorSession).
    fn register_language(&self, language: &str) -> SnipgenResult<()>;

    /// Edit `body` with `language` as the highlighting hint.
    ///
    /// Returns `None` when the user aborted without saving.
    fn edit(&self, body: &str, language: &str) -> SnipgenResult<Option<String>>;
}
