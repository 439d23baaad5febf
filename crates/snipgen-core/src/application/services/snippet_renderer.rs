//! Snippet Renderer - export entry to text.
//!
//! Two text forms exist: the full preview document (pretty JSON with one
//! top-level key) and the copy fragment, which is the same document without
//! its enclosing braces so it can be pasted into an existing snippets file.

use crate::{
    application::ApplicationError,
    domain::{FormModel, SnippetExportEntry, transform},
    error::SnipgenResult,
};

/// Stateless renderer for the preview and copy texts.
pub struct SnippetRenderer;

impl SnippetRenderer {
    /// Pretty JSON (2-space indent) of the transformed form.
    pub fn render(form: &FormModel) -> SnipgenResult<String> {
        Self::render_entry(&transform(form))
    }

    pub fn render_entry(entry: &SnippetExportEntry) -> SnipgenResult<String> {
        serde_json::to_string_pretty(entry).map_err(|e| {
            ApplicationError::Serialization {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// The `"name": { ... }` block only, as copied to the clipboard.
    pub fn fragment(form: &FormModel) -> SnipgenResult<String> {
        let document = Self::render(form)?;
        Ok(strip_outer_braces(&document).to_owned())
    }
}

/// Drop the first `{` and last `}` and trim what is left.
///
/// Inner indentation is left as rendered, so nested lines keep their
/// original depth.
fn strip_outer_braces(document: &str) -> &str {
    let inner = document.strip_prefix('{').unwrap_or(document);
    let inner = inner.strip_suffix('}').unwrap_or(inner);
    inner.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_form() -> FormModel {
        FormModel::new("test-snippet")
            .with_prefix("test")
            .with_scope(["javascript"])
            .with_body(r#"console.log("test")"#)
            .with_description("Test snippet description")
    }

    #[test]
    fn render_is_two_space_pretty_json() {
        let expected = r#"{
  "test-snippet": {
    "prefix": "test",
    "scope": "javascript",
    "body": [
      "console.log(\"test\")"
    ],
    "description": "Test snippet description"
  }
}"#;
        assert_eq!(SnippetRenderer::render(&mock_form()).unwrap(), expected);
    }

    #[test]
    fn fragment_strips_outer_object() {
        let expected = r#""test-snippet": {
    "prefix": "test",
    "scope": "javascript",
    "body": [
      "console.log(\"test\")"
    ],
    "description": "Test snippet description"
  }"#;
        assert_eq!(SnippetRenderer::fragment(&mock_form()).unwrap(), expected);
    }

    #[test]
    fn render_empty_form() {
        let text = SnippetRenderer::render(&FormModel::default()).unwrap();
        assert!(text.contains(r#""": {"#));
        assert!(text.contains(r#""scope": """#));
    }

    #[test]
    fn render_array_prefix() {
        let form = mock_form().with_prefix(vec!["prefix1".to_string(), "prefix2".into()]);
        let text = SnippetRenderer::render(&form).unwrap();
        assert!(text.contains("\"prefix\": [\n      \"prefix1\",\n      \"prefix2\"\n    ]"));
    }

    #[test]
    fn strip_handles_missing_braces() {
        assert_eq!(strip_outer_braces("  plain  "), "plain");
        assert_eq!(strip_outer_braces("{}"), "");
    }
}
