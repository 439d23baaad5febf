//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "snipgen",
    bin_name = "snipgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2702} Author VSCode snippets from the terminal",
    long_about = "Snipgen turns a snippet form (name, prefix, scope, body, \
                  description) into VSCode snippet JSON, ready to paste \
                  into a .code-snippets file.",
    after_help = "EXAMPLES:\n\
        \x20 snipgen render -n log -p 'log, clg' -s javascript -b 'console.log($1);'\n\
        \x20 snipgen copy --from snippets/log.toml\n\
        \x20 snipgen render --fragment --body-file - < body.txt\n\
        \x20 snipgen scopes script",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the snippet JSON.
    #[command(
        visible_alias = "r",
        about = "Print the snippet JSON",
        after_help = "EXAMPLES:\n\
            \x20 snipgen render -n log -p log -s javascript -b 'console.log($1);'\n\
            \x20 snipgen render --from log.toml --fragment\n\
            \x20 snipgen render -i"
    )]
    Render(RenderArgs),

    /// Copy the snippet fragment to the clipboard.
    #[command(
        visible_alias = "cp",
        about = "Copy the snippet to the clipboard",
        after_help = "EXAMPLES:\n\
            \x20 snipgen copy --from log.toml\n\
            \x20 snipgen copy -n log -p log -s javascript --body-file body.js"
    )]
    Copy(CopyArgs),

    /// List the language identifiers accepted in a scope.
    #[command(
        visible_alias = "ls",
        about = "List scope languages",
        after_help = "EXAMPLES:\n\
            \x20 snipgen scopes\n\
            \x20 snipgen scopes type\n\
            \x20 snipgen scopes --format json"
    )]
    Scopes(ScopesArgs),

    /// Initialise a Snipgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 snipgen init           # platform config directory\n\
            \x20 snipgen init --local   # ./.snipgen.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 snipgen completions bash > ~/.local/share/bash-completion/completions/snipgen\n\
            \x20 snipgen completions zsh  > ~/.zfunc/_snipgen\n\
            \x20 snipgen completions fish > ~/.config/fish/completions/snipgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Snipgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 snipgen config get defaults.scope\n\
            \x20 snipgen config list\n\
            \x20 snipgen config path"
    )]
    Config(ConfigCommands),
}

// ── snippet input ─────────────────────────────────────────────────────────────

/// Form fields shared by `render` and `copy`.
///
/// Flags override whatever `--from` loaded.
#[derive(Debug, Default, Args)]
pub struct SnippetArgs {
    /// Load the form from a TOML or JSON file.
    #[arg(long = "from", value_name = "FILE", help = "Load the form from a .toml/.json file")]
    pub from: Option<PathBuf>,

    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Snippet name")]
    pub name: Option<String>,

    /// Raw prefix text; a comma makes it a list.
    #[arg(
        short = 'p',
        long = "prefix",
        value_name = "PREFIX",
        help = "Trigger word, or comma-separated trigger words"
    )]
    pub prefix: Option<String>,

    /// Scope language identifier; repeat for several.
    #[arg(
        short = 's',
        long = "scope",
        value_name = "ID",
        action = clap::ArgAction::Append,
        help = "Scope language id (repeatable)"
    )]
    pub scope: Vec<String>,

    #[arg(
        short = 'b',
        long = "body",
        value_name = "TEXT",
        conflicts_with = "body_file",
        help = "Snippet body"
    )]
    pub body: Option<String>,

    /// Read the body from a file; `-` reads standard input.
    #[arg(long = "body-file", value_name = "PATH", help = "Read the body from a file ('-' for stdin)")]
    pub body_file: Option<PathBuf>,

    #[arg(short = 'd', long = "description", value_name = "TEXT", help = "Snippet description")]
    pub description: Option<String>,

    /// Fill in the remaining fields with prompts and `$EDITOR`.
    #[arg(short = 'i', long = "interactive", help = "Edit the form interactively")]
    pub interactive: bool,
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `snipgen render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub snippet: SnippetArgs,

    /// Print the copy fragment (no enclosing braces).
    #[arg(long = "fragment", help = "Print the fragment that 'copy' would copy")]
    pub fragment: bool,
}

// ── copy ──────────────────────────────────────────────────────────────────────

/// Arguments for `snipgen copy`.
#[derive(Debug, Args)]
pub struct CopyArgs {
    #[command(flatten)]
    pub snippet: SnippetArgs,
}

// ── scopes ────────────────────────────────────────────────────────────────────

/// Arguments for `snipgen scopes`.
#[derive(Debug, Args)]
pub struct ScopesArgs {
    /// Case-insensitive filter on label or identifier.
    #[arg(value_name = "QUERY", help = "Filter by label or id")]
    pub query: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `scopes` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One identifier per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `snipgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.snipgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `snipgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `snipgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.scope`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_render_command() {
        let cli = Cli::parse_from([
            "snipgen", "render", "-n", "log", "-p", "log, clg", "-b", "console.log($1)",
        ]);
        let Commands::Render(args) = cli.command else {
            panic!("expected Render command");
        };
        assert_eq!(args.snippet.name.as_deref(), Some("log"));
        assert_eq!(args.snippet.prefix.as_deref(), Some("log, clg"));
        assert!(!args.fragment);
    }

    #[test]
    fn scope_is_repeatable_and_not_split() {
        let cli = Cli::parse_from([
            "snipgen", "copy", "-s", "javascript", "--scope", "jade, pug",
        ]);
        let Commands::Copy(args) = cli.command else {
            panic!("expected Copy command");
        };
        assert_eq!(args.snippet.scope, ["javascript", "jade, pug"]);
    }

    #[test]
    fn aliases() {
        let cli = Cli::parse_from(["snipgen", "r", "--fragment"]);
        assert!(matches!(cli.command, Commands::Render(RenderArgs { fragment: true, .. })));

        let cli = Cli::parse_from(["snipgen", "cp"]);
        assert!(matches!(cli.command, Commands::Copy(_)));

        let cli = Cli::parse_from(["snipgen", "ls", "py", "--format", "csv"]);
        let Commands::Scopes(args) = cli.command else {
            panic!("expected Scopes command");
        };
        assert_eq!(args.query.as_deref(), Some("py"));
        assert_eq!(args.format, ListFormat::Csv);
    }

    #[test]
    fn body_and_body_file_conflict() {
        let result =
            Cli::try_parse_from(["snipgen", "render", "-b", "x", "--body-file", "body.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["snipgen", "--quiet", "--verbose", "scopes"]);
        assert!(result.is_err());
    }
}
