//! Application ports (traits) for external collaborators.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `snipgen-adapters` (and the
//! interactive editor host in `snipgen-cli`) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Clipboard`: platform clipboard write
//!   - `Clock`: monotonic time for the copy acknowledgement
//!   - `EditorHost`: the editor that edits the snippet body

pub mod output;

pub use output::{Clipboard, Clock, EditorHost};
