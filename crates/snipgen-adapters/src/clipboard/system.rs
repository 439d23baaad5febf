//! System clipboard adapter using `arboard`.
//!
//! On Linux the process owns the clipboard contents and serves them to other
//! applications only while an `arboard::Clipboard` handle is alive. The handle
//! is therefore opened once per thread and kept, and a short-lived process can
//! ask for a hold: the write then blocks until a clipboard manager or another
//! application takes ownership, or until the hold runs out.

use std::{cell::RefCell, time::Duration};

use snipgen_core::{
    application::{ApplicationError, ports::Clipboard},
    error::SnipgenResult,
};
use tracing::debug;

thread_local! {
    static HANDLE: RefCell<Option<arboard::Clipboard>> = const { RefCell::new(None) };
}

/// Production clipboard backed by the OS clipboard.
///
/// Constructing the adapter never fails, even on a headless machine; the
/// failure surfaces on `write_text`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard {
    hold: Option<Duration>,
}

impl SystemClipboard {
    /// Clipboard for long-running sessions; writes return immediately.
    pub fn new() -> Self {
        Self { hold: None }
    }

    /// Clipboard for one-shot commands that exit right after writing.
    ///
    /// A zero duration means no hold. Only Linux needs the hold; elsewhere
    /// the OS keeps the contents after the process exits.
    pub fn holding_for(hold: Duration) -> Self {
        Self {
            hold: (!hold.is_zero()).then_some(hold),
        }
    }

    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> SnipgenResult<()> {
        HANDLE.with_borrow_mut(|slot| -> SnipgenResult<()> {
            let clipboard = match slot.take() {
                Some(clipboard) => clipboard,
                None => arboard::Clipboard::new().map_err(|e| {
                    ApplicationError::ClipboardUnavailable {
                        reason: e.to_string(),
                    }
                })?,
            };
            let clipboard = slot.insert(clipboard);

            set_text(clipboard, text, self.hold).map_err(|e| {
                ApplicationError::ClipboardWriteFailed {
                    reason: e.to_string(),
                }
            })?;

            debug!(bytes = text.len(), hold = ?self.hold, "System clipboard updated");
            Ok(())
        })
    }
}

#[cfg(target_os = "linux")]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold: Option<Duration>,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux as _;
    use std::time::Instant;

    match hold {
        Some(hold) => clipboard
            .set()
            .wait_until(Instant::now() + hold)
            .text(text),
        None => clipboard.set_text(text),
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hold: Option<Duration>,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
