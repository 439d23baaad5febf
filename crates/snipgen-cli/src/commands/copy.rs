//! `snipgen copy`: put the snippet fragment on the clipboard.
//!
//! A clipboard failure is not an error: nothing is printed and the exit
//! status stays 0. The process exits right after the write, so the clipboard
//! is held for `clipboard.hold_ms` where the OS needs a live owner.

use std::time::Duration;

use tracing::{info, instrument};

use snipgen_adapters::{SystemClipboard, SystemClock};
use snipgen_core::application::{CopyOutcome, CopyService};

use crate::{
    cli::{CopyArgs, OutputFormat},
    commands::input,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: CopyArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let session = input::build_session(args.snippet, &config, &output)?;
    let fragment = session.fragment()?;

    let clipboard = SystemClipboard::holding_for(Duration::from_millis(config.clipboard.hold_ms));
    let outcome = copy_service(&config, clipboard).copy(&fragment);
    info!(?outcome, "Copy finished");

    match (output.format(), outcome) {
        (OutputFormat::Json, outcome) => {
            let status = serde_json::json!({ "copied": outcome == CopyOutcome::Copied });
            output.data(&status.to_string())?;
        }
        (_, CopyOutcome::Copied) => output.success("Copied")?,
        (_, CopyOutcome::Ignored) => {}
    }
    Ok(())
}

/// A copy service on `clipboard` with the configured acknowledgement window.
pub fn copy_service(config: &AppConfig, clipboard: SystemClipboard) -> CopyService {
    CopyService::new(Box::new(clipboard), Box::new(SystemClock::new()))
        .with_acknowledgement(Duration::from_millis(config.clipboard.acknowledge_ms))
}
