//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SNIPGEN__<SECTION>__<KEY>`, e.g.
//!    `SNIPGEN__DEFAULTS__SCOPE=javascript,typescript`
//! 3. Config file: `--config FILE`, or `./.snipgen.toml` layered over the
//!    platform config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name used by `snipgen init --local`.
pub const LOCAL_CONFIG: &str = ".snipgen.toml";

const ENV_PREFIX: &str = "SNIPGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values applied when the form leaves a field empty.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Clipboard settings.
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Scope used when neither the form nor `--scope` names one.
    pub scope: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; used when `--output-format` is auto.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// How long the "copied" acknowledgement stays up, in milliseconds.
    pub acknowledge_ms: u64,
    /// How long `snipgen copy` keeps serving the clipboard on Linux before
    /// exiting, in milliseconds. Returns early once another application or
    /// a clipboard manager takes the contents. `0` disables the hold.
    pub hold_ms: u64,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            acknowledge_ms: snipgen_core::application::DEFAULT_ACKNOWLEDGE.as_millis() as u64,
            hold_ms: 10_000,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and the environment over the defaults.
    ///
    /// `config_file` is the path passed via `--config`. When given it must
    /// exist and replaces both default locations.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        builder = match config_file {
            Some(path) => builder.add_source(toml_file(path, true)),
            None => builder
                .add_source(toml_file(&Self::config_path(), false))
                .add_source(toml_file(Path::new(LOCAL_CONFIG), false)),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("defaults.scope"),
            )
            .build()
            .context("Failed to read configuration")?;

        let config: Self = settings
            .try_deserialize()
            .context("Invalid configuration values")?;

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the platform configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.snipgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "snipgen", "snipgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }

    /// The file `config path` reports: the local file when present.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = config_file {
            return path.clone();
        }
        let local = PathBuf::from(LOCAL_CONFIG);
        if local.is_file() { local } else { Self::config_path() }
    }
}

fn toml_file(path: &Path, required: bool) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::new(&path.to_string_lossy(), config::FileFormat::Toml).required(required)
}
