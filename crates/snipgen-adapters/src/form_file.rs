//! Form files: a saved [`FormModel`] as TOML or JSON.
//!
//! Every field is optional; missing ones take their empty defaults.
//!
//! ```toml
//! name        = "log"
//! prefix      = ["log", "clg"]     # or a single string
//! scope       = ["javascript", "typescript"]
//! body        = """
//! console.log($1);
//! $0"""
//! description = "Log to the console"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use snipgen_core::{application::ApplicationError, domain::FormModel, error::SnipgenResult};

/// Supported on-disk encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFormat {
    Toml,
    Json,
}

impl FormFormat {
    /// Pick the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse form text in the given format.
pub fn parse_form(content: &str, format: FormFormat) -> Result<FormModel, String> {
    match format {
        FormFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        FormFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Read and parse a form file.
#[instrument(fields(path = %path.display()))]
pub fn load_form(path: &Path) -> SnipgenResult<FormModel> {
    let source_error = |reason: String| ApplicationError::FormSource {
        path: PathBuf::from(path),
        reason,
    };

    let format = FormFormat::from_path(path)
        .ok_or_else(|| source_error("unsupported extension (expected .toml or .json)".into()))?;

    let content = fs::read_to_string(path).map_err(|e| source_error(e.to_string()))?;
    let form = parse_form(&content, format).map_err(source_error)?;

    debug!(name = %form.name, ?format, "Form loaded");
    Ok(form)
}
