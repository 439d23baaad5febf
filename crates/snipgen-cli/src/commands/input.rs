//! Builds the form session shared by `render` and `copy`.
//!
//! Precedence: `--from` file, then individual flags, then the configured
//! default scope for an empty scope, then the interactive session.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use snipgen_adapters::load_form;
use snipgen_core::{
    application::{FieldUpdate, FormSession},
    domain::{FormModel, scope_catalog},
};

use crate::{
    cli::SnippetArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Resolve every input source into one [`FormSession`].
#[instrument(skip_all)]
pub fn build_session(
    args: SnippetArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<FormSession> {
    let form = match &args.from {
        Some(path) => load_form(existing(path)?)?,
        None => FormModel::default(),
    };
    let mut session = FormSession::new(form);

    let interactive = args.interactive;
    for update in flag_updates(args)? {
        session.apply(update);
    }

    if session.form().scope.is_empty() && !config.defaults.scope.is_empty() {
        debug!(scope = ?config.defaults.scope, "Applying default scope");
        session.apply(FieldUpdate::Scope(config.defaults.scope.clone()));
    }

    if interactive {
        run_interactive(&mut session, config, output)?;
    }

    warn_unknown_scopes(&session, output)?;
    Ok(session)
}

/// One update per flag the user actually passed.
fn flag_updates(args: SnippetArgs) -> CliResult<Vec<FieldUpdate>> {
    let mut updates = Vec::new();

    if let Some(name) = args.name {
        updates.push(FieldUpdate::Name(name));
    }
    if let Some(prefix) = args.prefix {
        updates.push(FieldUpdate::PrefixInput(prefix));
    }
    if !args.scope.is_empty() {
        updates.push(FieldUpdate::Scope(args.scope));
    }
    if let Some(body) = args.body {
        updates.push(FieldUpdate::Body(body));
    } else if let Some(path) = args.body_file {
        updates.push(FieldUpdate::Body(read_body(&path)?));
    }
    if let Some(description) = args.description {
        updates.push(FieldUpdate::Description(description));
    }

    Ok(updates)
}

/// Read a body file, `-` meaning standard input. One final line ending is
/// dropped, the one editors and `echo` append.
fn read_body(path: &Path) -> CliResult<String> {
    let text = if path == Path::new("-") {
        io::read_to_string(io::stdin()).with_cli_context(|| "Failed to read body from stdin")?
    } else {
        fs::read_to_string(existing(path)?)
            .with_cli_context(|| format!("Failed to read body from '{}'", path.display()))?
    };
    Ok(strip_final_newline(text))
}

fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    } else if text.ends_with('\r') {
        text.pop();
    }
    text
}

fn existing(path: &Path) -> CliResult<&Path> {
    if path.exists() {
        Ok(path)
    } else {
        Err(CliError::FileNotFound {
            path: PathBuf::from(path),
        })
    }
}

fn warn_unknown_scopes(session: &FormSession, output: &OutputManager) -> CliResult<()> {
    for id in session.form().scope.iter() {
        if scope_catalog::find(id).is_none() {
            output.warning(&format!(
                "Unknown scope '{id}' (see 'snipgen scopes'); kept as given"
            ))?;
        }
    }
    Ok(())
}

#[cfg(feature = "interactive")]
fn run_interactive(
    session: &mut FormSession,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    use std::io::IsTerminal as _;

    if !io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "--interactive needs a terminal on standard input".into(),
            source: None,
        });
    }
    super::interactive::run(session, config, output)
}

#[cfg(not(feature = "interactive"))]
fn run_interactive(
    _session: &mut FormSession,
    _config: &AppConfig,
    _output: &OutputManager,
) -> CliResult<()> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};
    use snipgen_core::domain::Prefix;
    use tempfile::TempDir;

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn flags_fill_the_form() {
        let args = SnippetArgs {
            name: Some("log".into()),
            prefix: Some(" log , clg ".into()),
            scope: vec!["javascript".into(), "typescript".into()],
            body: Some("console.log($1);".into()),
            ..Default::default()
        };

        let session = build_session(args, &AppConfig::default(), &quiet_output()).unwrap();
        let form = session.form();
        assert_eq!(form.name, "log");
        assert_eq!(form.prefix, Prefix::Multiple(vec!["log".into(), "clg".into()]));
        assert_eq!(form.scope.joined(), "javascript,typescript");
        assert_eq!(session.entry().snippet.description, "log");
    }

    #[test]
    fn flags_override_form_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.toml");
        fs::write(&path, "name = \"from-file\"\nprefix = \"f\"\nbody = \"x\"\n").unwrap();

        let args = SnippetArgs {
            from: Some(path),
            prefix: Some("flag".into()),
            ..Default::default()
        };
        let session = build_session(args, &AppConfig::default(), &quiet_output()).unwrap();
        assert_eq!(session.form().name, "from-file");
        assert_eq!(session.form().prefix, Prefix::Single("flag".into()));
        assert_eq!(session.form().body, "x");
    }

    #[test]
    fn default_scope_only_fills_an_empty_scope() {
        let mut config = AppConfig::default();
        config.defaults.scope = vec!["rust".into()];

        let session =
            build_session(SnippetArgs::default(), &config, &quiet_output()).unwrap();
        assert_eq!(session.form().scope.joined(), "rust");

        let args = SnippetArgs {
            scope: vec!["python".into()],
            ..Default::default()
        };
        let session = build_session(args, &config, &quiet_output()).unwrap();
        assert_eq!(session.form().scope.joined(), "python");
    }

    #[test]
    fn unknown_scope_is_not_an_error() {
        let args = SnippetArgs {
            scope: vec!["not-a-language".into()],
            ..Default::default()
        };
        let session = build_session(args, &AppConfig::default(), &quiet_output()).unwrap();
        assert_eq!(session.form().scope.joined(), "not-a-language");
    }

    #[test]
    fn body_file_is_read_without_final_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("body.js");
        fs::write(&path, "console.log($1);\r\n$0\r\n").unwrap();

        let args = SnippetArgs {
            body_file: Some(path),
            ..Default::default()
        };
        let session = build_session(args, &AppConfig::default(), &quiet_output()).unwrap();
        assert_eq!(session.entry().snippet.body, ["console.log($1);", "$0"]);
    }

    #[test]
    fn missing_form_file_is_not_found() {
        let args = SnippetArgs {
            from: Some(PathBuf::from("/definitely/not/here.toml")),
            ..Default::default()
        };
        let err = build_session(args, &AppConfig::default(), &quiet_output()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn strip_final_newline_removes_one_terminator() {
        assert_eq!(strip_final_newline("a\n\n".into()), "a\n");
        assert_eq!(strip_final_newline("a\r\n".into()), "a");
        assert_eq!(strip_final_newline("a\r".into()), "a");
        assert_eq!(strip_final_newline("a".into()), "a");
        assert_eq!(strip_final_newline(String::new()), "");
    }
}
