//! Infrastructure adapters for Snipgen.
//!
//! This crate implements the ports defined in `snipgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod clipboard;
pub mod clock;
pub mod form_file;

// Re-export commonly used adapters
pub use clipboard::{MemoryClipboard, SystemClipboard};
pub use clock::SystemClock;
pub use form_file::{FormFormat, load_form, parse_form};
