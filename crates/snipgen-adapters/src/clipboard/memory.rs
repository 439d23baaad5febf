//! In-memory clipboard adapter for testing.

use std::sync::{Arc, RwLock};

use snipgen_core::{
    application::{ApplicationError, ports::Clipboard},
    error::SnipgenResult,
};

/// In-memory clipboard that records every write.
///
/// Clones share the same contents, so a test can hand one clone to a
/// service and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    inner: Arc<RwLock<MemoryClipboardInner>>,
}

#[derive(Debug, Default)]
struct MemoryClipboardInner {
    writes: Vec<String>,
    failing: Option<String>,
}

impl MemoryClipboard {
    /// Create a new empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `reason`.
    pub fn fail_with(&self, reason: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing = Some(reason.into());
        }
    }

    /// Current clipboard text (the last successful write).
    pub fn contents(&self) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.writes.last().cloned()
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes.len()).unwrap_or(0)
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> SnipgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if let Some(reason) = &inner.failing {
            return Err(ApplicationError::ClipboardWriteFailed {
                reason: reason.clone(),
            }
            .into());
        }

        inner.writes.push(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_last_write() {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("one").unwrap();
        clipboard.write_text("two").unwrap();

        assert_eq!(clipboard.contents().as_deref(), Some("two"));
        assert_eq!(clipboard.write_count(), 2);
    }

    #[test]
    fn clones_share_contents() {
        let clipboard = MemoryClipboard::new();
        let handle = clipboard.clone();
        clipboard.write_text("shared").unwrap();
        assert_eq!(handle.contents().as_deref(), Some("shared"));
    }

    #[test]
    fn failing_clipboard_rejects_writes() {
        let clipboard = MemoryClipboard::new();
        clipboard.fail_with("Clipboard access denied");

        assert!(clipboard.write_text("x").is_err());
        assert_eq!(clipboard.contents(), None);
    }
}
