//! Copy Service - clipboard hand-off and the "copied" acknowledgement.
//!
//! The acknowledgement is a deadline owned by the service. A successful copy
//! sets it to `now + acknowledge_for`; a later copy replaces it rather than
//! queueing a second revert. Clipboard failures are swallowed: the state is
//! left alone and nothing is surfaced to the user.

use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::application::ports::{Clipboard, Clock};

/// How long the "copied" acknowledgement stays up.
pub const DEFAULT_ACKNOWLEDGE: Duration = Duration::from_millis(2500);

/// What happened to a copy request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The clipboard refused; the failure was discarded.
    Ignored,
}

/// Hands rendered text to the clipboard port.
pub struct CopyService {
    clipboard: Box<dyn Clipboard>,
    clock: Box<dyn Clock>,
    acknowledge_for: Duration,
    copied_until: Option<Instant>,
}

impl CopyService {
    pub fn new(clipboard: Box<dyn Clipboard>, clock: Box<dyn Clock>) -> Self {
        Self {
            clipboard,
            clock,
            acknowledge_for: DEFAULT_ACKNOWLEDGE,
            copied_until: None,
        }
    }

    pub fn with_acknowledgement(mut self, duration: Duration) -> Self {
        self.acknowledge_for = duration;
        self
    }

    /// Write `text` to the clipboard.
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub fn copy(&mut self, text: &str) -> CopyOutcome {
        match self.clipboard.write_text(text) {
            Ok(()) => {
                let deadline = self.clock.now() + self.acknowledge_for;
                if self.copied_until.replace(deadline).is_some() {
                    debug!("Acknowledgement re-armed");
                }
                debug!(ack_ms = self.acknowledge_for.as_millis() as u64, "Copied");
                CopyOutcome::Copied
            }
            Err(e) => {
                debug!(error = %e, "Clipboard write failed, ignoring");
                CopyOutcome::Ignored
            }
        }
    }

    /// `true` while the acknowledgement is showing.
    pub fn is_copied(&self) -> bool {
        self.copied_until
            .is_some_and(|deadline| self.clock.now() < deadline)
    }

    /// When the acknowledgement reverts, if one is pending.
    pub fn copied_until(&self) -> Option<Instant> {
        self.copied_until
    }
}
