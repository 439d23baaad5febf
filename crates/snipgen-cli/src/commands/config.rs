//! `snipgen config`: inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&format!("{key} = {value}"))?;
        }
        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                let json = serde_json::to_string_pretty(&config).map_err(|e| {
                    CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    }
                })?;
                output.data(&json)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(&config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.data(serialised.trim_end())?;
            }
        }
        ConfigCommands::Path => {
            output.data(&AppConfig::active_path(config_file.as_ref()).display().to_string())?;
        }
    }
    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.scope" => Ok(config.defaults.scope.join(",")),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "clipboard.acknowledge_ms" => Ok(config.clipboard.acknowledge_ms.to_string()),
        "clipboard.hold_ms" => Ok(config.clipboard.hold_ms.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
