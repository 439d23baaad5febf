//! Form → export transform.
//!
//! Pure and total: every [`FormModel`] maps to exactly one
//! [`SnippetExportEntry`], and the same input always yields an equal output.

use crate::domain::entities::{FormModel, SnippetExportEntry, VscodeSnippet};

/// Convert the form into the canonical snippet export shape.
///
/// - `prefix` passes through with its shape intact
/// - `scope` is comma-joined
/// - `body` is split into lines (see [`split_lines`])
/// - an empty `description` falls back to `name`; whitespace is not empty
pub fn transform(form: &FormModel) -> SnippetExportEntry {
    let description = if form.description.is_empty() {
        form.name.clone()
    } else {
        form.description.clone()
    };

    SnippetExportEntry {
        name: form.name.clone(),
        snippet: VscodeSnippet {
            prefix: form.prefix.clone(),
            scope: form.scope.joined(),
            body: split_lines(&form.body),
            description,
        },
    }
}

/// Split on `\r\n`, `\n`, or a lone `\r`, scanning left to right.
///
/// Consecutive separators produce empty lines and a trailing separator
/// produces a trailing empty line, so the result is never empty.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some(idx) = rest.find(['\r', '\n']) {
        lines.push(rest[..idx].to_owned());
        let sep_len = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[idx + sep_len..];
    }
    lines.push(rest.to_owned());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_handles_each_line_ending() {
        assert_eq!(split_lines("line1\nline2"), ["line1", "line2"]);
        assert_eq!(split_lines("line1\r\nline2"), ["line1", "line2"]);
        assert_eq!(split_lines("line1\rline2"), ["line1", "line2"]);
        assert_eq!(split_lines("line1\n\nline2"), ["line1", "", "line2"]);
    }

    #[test]
    fn split_lone_cr_before_crlf() {
        // "\r" then "\r\n": two separators, one empty line between them
        assert_eq!(split_lines("a\r\r\nb"), ["a", "", "b"]);
        assert_eq!(split_lines("a\n\rb"), ["a", "", "b"]);
    }

    #[test]
    fn split_keeps_trailing_empty_line() {
        assert_eq!(split_lines("x\n"), ["x", ""]);
        assert_eq!(split_lines(""), [""]);
    }

    #[test]
    fn split_preserves_whitespace_lines() {
        assert_eq!(split_lines("   \n   \n   "), ["   ", "   ", "   "]);
    }

    #[test]
    fn description_whitespace_is_not_empty() {
        let form = FormModel::new("n").with_description(" ");
        assert_eq!(transform(&form).snippet.description, " ");
    }
}
