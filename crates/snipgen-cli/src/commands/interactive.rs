//! Menu-driven form editing.
//!
//! Each menu entry edits one field, and the body opens in `$EDITOR`.
//! "Insert placeholder" puts a tab stop into the body at a line and column,
//! and the next insertion defaults to just after it. The "Copy" entry reads
//! "✓ Copied" until the acknowledgement expires.

use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};
use tracing::instrument;

use snipgen_adapters::SystemClipboard;
use snipgen_core::{
    application::{EditorSession, FieldUpdate, FormSession},
    domain::{FormModel, Prefix, next_tab_stop, offset_of, position_of, scope_catalog},
};

use crate::{
    commands::copy::copy_service,
    config::AppConfig,
    editor::TerminalEditor,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Name,
    Prefix,
    Scope,
    Body,
    Insert,
    Description,
    Preview,
    Copy,
    Done,
}

const ENTRIES: [Entry; 9] = [
    Entry::Name,
    Entry::Prefix,
    Entry::Scope,
    Entry::Body,
    Entry::Insert,
    Entry::Description,
    Entry::Preview,
    Entry::Copy,
    Entry::Done,
];

/// Run the menu until the user picks "Done". Escape cancels.
#[instrument(skip_all)]
pub fn run(
    session: &mut FormSession,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let theme = ColorfulTheme::default();
    let mut editor = EditorSession::new(Box::new(TerminalEditor::new()));
    let mut copier = copy_service(config, SystemClipboard::new());
    let mut cursor = 0;
    // byte offset in the body where the last insertion ended
    let mut caret: Option<usize> = None;

    loop {
        let form = session.form().clone();
        let language = editor.sync_language(&form.scope);
        let items: Vec<String> = ENTRIES
            .iter()
            .map(|entry| label(*entry, &form, language, copier.is_copied()))
            .collect();

        let Some(index) = Select::with_theme(&theme)
            .with_prompt("Edit snippet")
            .items(&items)
            .default(cursor)
            .interact_opt()?
        else {
            return Err(CliError::Cancelled);
        };
        cursor = index;

        match ENTRIES[index] {
            Entry::Name => {
                let name = prompt_text(&theme, "Name", &form.name)?;
                session.apply(FieldUpdate::Name(name));
            }
            Entry::Prefix => {
                let shown = prefix_input(&form.prefix);
                let raw = prompt_text(&theme, "Prefix (comma-separated for several)", &shown)?;
                if let Some(update) = prefix_update(&shown, raw) {
                    session.apply(update);
                }
            }
            Entry::Scope => {
                if let Some(ids) = pick_scope(&theme, &form)? {
                    session.apply(FieldUpdate::Scope(ids));
                }
            }
            Entry::Body => {
                if editor.edit_body(session)? {
                    caret = None;
                } else {
                    output.info("Body unchanged")?;
                }
            }
            Entry::Insert => {
                let (line, column) =
                    position_of(&form.body, caret.unwrap_or(form.body.len()));
                let text = prompt_text(
                    &theme,
                    "Insert",
                    &format!("${}", next_tab_stop(&form.body)),
                )?;
                let at = prompt_text(&theme, "At line:column", &format!("{line}:{column}"))?;

                match parse_position(&at) {
                    Some((line, column)) => {
                        let offset = offset_of(&form.body, line, column);
                        caret = Some(session.insert_into_body(offset, offset, &text));
                    }
                    None => output.warning(&format!("Expected line:column, got '{at}'"))?,
                }
            }
            Entry::Description => {
                let description = prompt_text(&theme, "Description", &form.description)?;
                session.apply(FieldUpdate::Description(description));
            }
            Entry::Preview => output.data(&session.preview()?)?,
            Entry::Copy => {
                copier.copy(&session.fragment()?);
            }
            Entry::Done => return Ok(()),
        }
    }
}

fn label(entry: Entry, form: &FormModel, language: &str, copied: bool) -> String {
    match entry {
        Entry::Name => format!("Name         {}", form.name),
        Entry::Prefix if form.prefix.is_multiple() => format!("Prefixes     {}", form.prefix),
        Entry::Prefix => format!("Prefix       {}", form.prefix),
        Entry::Scope => format!("Scope        {}", form.scope),
        Entry::Body => format!(
            "Body         {} line(s), edited as {}",
            form.body.lines().count().max(1),
            language
        ),
        Entry::Insert => "Insert placeholder".into(),
        Entry::Description => format!("Description  {}", form.description),
        Entry::Preview => "Preview".into(),
        Entry::Copy if copied => "\u{2713} Copied".into(),
        Entry::Copy => "Copy".into(),
        Entry::Done => "Done".into(),
    }
}

/// Prefix as shown in the prompt: its words joined with `", "`.
fn prefix_input(prefix: &Prefix) -> String {
    prefix.words().collect::<Vec<_>>().join(", ")
}

/// Only edited text goes through the normalizer. A `Single` holding a comma
/// or a one-word `Multiple` would change shape if re-normalized, so accepting
/// the prompt unchanged keeps the stored prefix.
fn prefix_update(shown: &str, raw: String) -> Option<FieldUpdate> {
    (raw != shown).then_some(FieldUpdate::PrefixInput(raw))
}

/// `"line:column"`, both 1-based.
fn parse_position(text: &str) -> Option<(usize, usize)> {
    let (line, column) = text.trim().split_once(':')?;
    let line = line.trim().parse().ok().filter(|&n| n > 0)?;
    let column = column.trim().parse().ok().filter(|&n| n > 0)?;
    Some((line, column))
}

fn prompt_text(theme: &ColorfulTheme, prompt: &str, current: &str) -> CliResult<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

/// Multi-select over the catalog. Ids already in the scope keep their
/// order so the first one, which drives the language hint, stays first.
/// Ids the catalog does not know are kept.
fn pick_scope(theme: &ColorfulTheme, form: &FormModel) -> CliResult<Option<Vec<String>>> {
    let options = scope_catalog::all();
    let labels: Vec<String> = options
        .iter()
        .map(|o| format!("{} ({})", o.label, o.value))
        .collect();
    let checked: Vec<bool> = options
        .iter()
        .map(|o| form.scope.iter().any(|id| id == o.value))
        .collect();

    let Some(picked) = MultiSelect::with_theme(theme)
        .with_prompt("Scope (space toggles, enter confirms)")
        .items(&labels)
        .defaults(&checked)
        .interact_opt()?
    else {
        return Ok(None);
    };

    let selected: Vec<&str> = picked.iter().map(|&i| options[i].value).collect();
    Ok(Some(merge_scope(form, &selected)))
}

fn merge_scope(form: &FormModel, selected: &[&str]) -> Vec<String> {
    let mut ids: Vec<String> = form
        .scope
        .iter()
        .filter(|id| scope_catalog::find(id).is_none() || selected.contains(id))
        .map(str::to_owned)
        .collect();
    for id in selected {
        if !ids.iter().any(|existing| existing == id) {
            ids.push((*id).to_owned());
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_input_round_trips_through_normalizer() {
        let multiple = Prefix::Multiple(vec!["log".into(), "clg".into()]);
        assert_eq!(Prefix::from_input(&prefix_input(&multiple)), multiple);

        let single = Prefix::Single(" spaced ".into());
        assert_eq!(Prefix::from_input(&prefix_input(&single)), single);
    }

    #[test]
    fn unchanged_prefix_keeps_its_shape() {
        for prefix in [
            Prefix::Single("a, b".into()),
            Prefix::Multiple(vec!["x".into()]),
        ] {
            let mut session = FormSession::new(FormModel::new("p").with_prefix(prefix.clone()));
            let shown = prefix_input(&prefix);
            if let Some(update) = prefix_update(&shown, shown.clone()) {
                session.apply(update);
            }
            assert_eq!(session.form().prefix, prefix);
        }
    }

    #[test]
    fn edited_prefix_is_normalized() {
        let shown = prefix_input(&Prefix::Multiple(vec!["x".into()]));
        assert_eq!(
            prefix_update(&shown, "x, y".into()),
            Some(FieldUpdate::PrefixInput("x, y".into()))
        );
    }

    #[test]
    fn parses_line_and_column() {
        assert_eq!(parse_position("2:5"), Some((2, 5)));
        assert_eq!(parse_position(" 1 : 1 "), Some((1, 1)));
        assert_eq!(parse_position("0:1"), None);
        assert_eq!(parse_position("3"), None);
        assert_eq!(parse_position("a:b"), None);
    }

    #[test]
    fn prefix_label_names_the_shape() {
        let form = FormModel::new("x").with_prefix(Prefix::Multiple(vec!["a".into(), "b".into()]));
        assert_eq!(label(Entry::Prefix, &form, "plaintext", false), "Prefixes     [a, b]");
    }

    #[test]
    fn merge_keeps_existing_order_then_appends() {
        let form = FormModel::new("x").with_scope(["typescript", "custom-id", "javascript"]);
        let merged = merge_scope(&form, &["javascript", "python", "typescript"]);
        assert_eq!(merged, ["typescript", "custom-id", "javascript", "python"]);
    }

    #[test]
    fn merge_drops_deselected_catalog_ids() {
        let form = FormModel::new("x").with_scope(["rust", "go"]);
        assert_eq!(merge_scope(&form, &["go"]), ["go"]);
    }

    #[test]
    fn copy_label_follows_acknowledgement() {
        let form = FormModel::default();
        assert_eq!(label(Entry::Copy, &form, "plaintext", false), "Copy");
        assert_eq!(label(Entry::Copy, &form, "plaintext", true), "\u{2713} Copied");
    }
}
