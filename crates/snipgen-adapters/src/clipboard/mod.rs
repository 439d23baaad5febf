//! Clipboard adapters.

mod memory;
mod system;

pub use memory::MemoryClipboard;
pub use system::SystemClipboard;
