//! Implementation of the `snipgen scopes` command.

use snipgen_core::domain::{ScopeOption, scope_catalog};

use crate::{
    cli::{ListFormat, ScopesArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ScopesArgs, output: OutputManager) -> CliResult<()> {
    let options: Vec<&ScopeOption> = match &args.query {
        Some(query) => scope_catalog::search(query),
        None => scope_catalog::all().iter().collect(),
    };

    if let Some(query) = args.query.as_ref().filter(|_| options.is_empty()) {
        return Err(CliError::ScopeNotFound {
            query: query.clone(),
        });
    }

    match args.format {
        ListFormat::Table => {
            output.header("Available scopes:")?;
            for o in &options {
                output.data(&format!(
                    "  {:<22} {:<18} {}",
                    o.label,
                    o.value,
                    o.editor_language()
                ))?;
            }
        }
        ListFormat::List => {
            for o in &options {
                output.data(o.value)?;
            }
        }
        ListFormat::Json => {
            let rows: serde_json::Value = options
                .iter()
                .map(|o| {
                    serde_json::json!({
                        "label": o.label,
                        "value": o.value,
                        "editor_language": o.editor_language(),
                    })
                })
                .collect();
            output.data(&format!("{rows:#}"))?;
        }
        ListFormat::Csv => {
            output.data("label,value,editor_language")?;
            for o in &options {
                output.data(&format!(
                    "{},{},{}",
                    csv_field(o.label),
                    csv_field(o.value),
                    o.editor_language()
                ))?;
            }
        }
    }
    Ok(())
}

/// Quote a field that contains a comma or a quote.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quotes_comma_values() {
        assert_eq!(csv_field("jade, pug"), "\"jade, pug\"");
        assert_eq!(csv_field("rust"), "rust");
        assert_eq!(csv_field("a\"b"), "\"a\"\"b\"");
    }
}
