//! `snipgen render`: print the snippet JSON.

use tracing::instrument;

use crate::{
    cli::RenderArgs, commands::input, config::AppConfig, error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(fragment = args.fragment))]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let session = input::build_session(args.snippet, &config, &output)?;

    let text = if args.fragment {
        session.fragment()?
    } else {
        session.preview()?
    };
    output.data(&text)?;
    Ok(())
}
