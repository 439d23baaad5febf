//! `$EDITOR` host for body editing.
//!
//! The body is written to a temporary file whose extension follows the
//! language hint, so the user's editor picks its own highlighting.
//! Languages that were never registered fall back to `.txt`.

use std::{collections::HashSet, sync::Mutex};

use tracing::debug;

use snipgen_core::{
    application::{ApplicationError, ports::EditorHost},
    error::{SnipgenError, SnipgenResult},
};

/// Launches `$VISUAL` / `$EDITOR` through `dialoguer::Editor`.
#[derive(Debug, Default)]
pub struct TerminalEditor {
    registered: Mutex<HashSet<String>>,
}

impl TerminalEditor {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_registered(&self, language: &str) -> SnipgenResult<bool> {
        let registered = self
            .registered
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        Ok(registered.contains(language))
    }
}

impl EditorHost for TerminalEditor {
    fn register_language(&self, language: &str) -> SnipgenResult<()> {
        self.registered
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .insert(language.to_owned());
        Ok(())
    }

    fn edit(&self, body: &str, language: &str) -> SnipgenResult<Option<String>> {
        let extension = if self.is_registered(language)? {
            extension_for(language)
        } else {
            ".txt"
        };
        debug!(language, extension, "Opening editor");

        dialoguer::Editor::new()
            .extension(extension)
            .edit(body)
            .map_err(|e| {
                SnipgenError::from(ApplicationError::EditorFailed {
                    reason: e.to_string(),
                })
            })
    }
}

/// File extension editors associate with `language`.
fn extension_for(language: &str) -> &'static str {
    match language {
        "abap" => ".abap",
        "bat" => ".bat",
        "c" => ".c",
        "clojure" => ".clj",
        "coffee" => ".coffee",
        "cpp" => ".cpp",
        "csharp" => ".cs",
        "css" => ".css",
        "dart" => ".dart",
        "dockerfile" => ".dockerfile",
        "elixir" => ".ex",
        "fsharp" => ".fs",
        "go" => ".go",
        "graphql" => ".graphql",
        "handlebars" => ".hbs",
        "html" => ".html",
        "ini" => ".ini",
        "java" => ".java",
        "javascript" => ".js",
        "json" => ".json",
        "julia" => ".jl",
        "kotlin" => ".kt",
        "less" => ".less",
        "lua" => ".lua",
        "markdown" => ".md",
        "objective-c" => ".m",
        "pascal" => ".pas",
        "perl" => ".pl",
        "php" => ".php",
        "powershell" => ".ps1",
        "pug" => ".pug",
        "python" => ".py",
        "r" => ".r",
        "razor" => ".cshtml",
        "ruby" => ".rb",
        "rust" => ".rs",
        "scss" => ".scss",
        "shell" => ".sh",
        "sql" => ".sql",
        "swift" => ".swift",
        "typescript" => ".ts",
        "vb" => ".vb",
        "xml" => ".xml",
        "yaml" => ".yaml",
        _ => ".txt",
    }
}
