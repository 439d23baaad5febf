//! Core domain layer for Snipgen.
//!
//! Pure logic with no I/O. Clipboard access, editors and time are reached
//! through ports defined in the application layer.
//!
//! - **No I/O**: no filesystem, clipboard, or terminal calls
//! - **Total**: nothing in here returns an error; every form is valid
//! - **Value semantics**: all types are `Clone + PartialEq`

pub mod editing;
pub mod entities;
pub mod scope_catalog;
pub mod transform;
pub mod value_objects;

pub use editing::{Insertion, insert_at_cursor, next_tab_stop, offset_of, position_of};
pub use entities::{FormModel, SnippetExportEntry, VscodeSnippet};
pub use scope_catalog::ScopeOption;
pub use transform::{split_lines, transform};
pub use value_objects::{Prefix, Scope};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mock_form() -> FormModel {
        FormModel::new("test-snippet")
            .with_prefix("test")
            .with_scope(["javascript"])
            .with_body(r#"console.log("test")"#)
            .with_description("Test snippet description")
    }

    fn to_json(form: &FormModel) -> serde_json::Value {
        serde_json::to_value(transform(form)).unwrap()
    }

    // ========================================================================
    // Prefix Tests
    // ========================================================================

    #[test]
    fn prefix_without_comma_is_verbatim() {
        assert_eq!(
            Prefix::from_input("  single-prefix "),
            Prefix::Single("  single-prefix ".into())
        );
    }

    #[test]
    fn prefix_with_commas_is_split_and_trimmed() {
        assert_eq!(
            Prefix::from_input(" prefix1 ,  prefix2  , prefix3 "),
            Prefix::Multiple(vec!["prefix1".into(), "prefix2".into(), "prefix3".into()])
        );
    }

    #[test]
    fn prefix_keeps_empty_segments() {
        assert_eq!(
            Prefix::from_input("a,,b,"),
            Prefix::Multiple(vec!["a".into(), "".into(), "b".into(), "".into()])
        );
        assert_eq!(
            Prefix::from_input(","),
            Prefix::Multiple(vec!["".into(), "".into()])
        );
    }

    #[test]
    fn prefix_words_iterates_both_shapes() {
        assert_eq!(Prefix::from("x").words().collect::<Vec<_>>(), ["x"]);
        assert_eq!(
            Prefix::from_input("a, b").words().collect::<Vec<_>>(),
            ["a", "b"]
        );
    }

    #[test]
    fn prefix_serializes_untagged() {
        assert_eq!(serde_json::to_value(Prefix::from("t")).unwrap(), json!("t"));
        assert_eq!(
            serde_json::to_value(Prefix::from_input("a,b")).unwrap(),
            json!(["a", "b"])
        );
    }

    // ========================================================================
    // Transform Tests
    // ========================================================================

    #[test]
    fn transform_basic_form() {
        assert_eq!(
            to_json(&mock_form()),
            json!({
                "test-snippet": {
                    "prefix": "test",
                    "scope": "javascript",
                    "body": ["console.log(\"test\")"],
                    "description": "Test snippet description",
                }
            })
        );
    }

    #[test]
    fn transform_empty_form() {
        assert_eq!(
            to_json(&FormModel::default()),
            json!({ "": { "prefix": "", "scope": "", "body": [""], "description": "" } })
        );
    }

    #[test]
    fn transform_multi_line_body() {
        let form = FormModel::new("multi-line-snippet")
            .with_prefix("multi")
            .with_scope(["typescript"])
            .with_body("function test() {\n  console.log(\"line 1\");\n  console.log(\"line 2\");\n}")
            .with_description("Multi-line test snippet");

        assert_eq!(
            transform(&form).snippet.body,
            [
                "function test() {",
                "  console.log(\"line 1\");",
                "  console.log(\"line 2\");",
                "}",
            ]
        );
    }

    #[test]
    fn transform_preserves_array_prefix() {
        let form = FormModel::new("array-prefix-snippet")
            .with_prefix(vec!["prefix1".to_string(), "prefix2".into(), "prefix3".into()])
            .with_scope(["javascript", "typescript"])
            .with_body(r#"const test = "array prefix";"#)
            .with_description("Array prefix test snippet");

        assert_eq!(
            to_json(&form),
            json!({
                "array-prefix-snippet": {
                    "prefix": ["prefix1", "prefix2", "prefix3"],
                    "scope": "javascript,typescript",
                    "body": ["const test = \"array prefix\";"],
                    "description": "Array prefix test snippet",
                }
            })
        );
    }

    #[test]
    fn transform_preserves_string_prefix() {
        let form = mock_form().with_prefix("single-prefix");
        assert_eq!(
            transform(&form).snippet.prefix,
            Prefix::Single("single-prefix".into())
        );
    }

    #[test]
    fn transform_empty_scope_is_empty_string() {
        let mut form = mock_form();
        form.scope = Scope::default();
        assert_eq!(transform(&form).snippet.scope, "");
    }

    #[test]
    fn transform_joins_multiple_scopes_in_order() {
        let form = mock_form().with_scope([
            "javascript",
            "typescript",
            "javascriptreact",
            "typescriptreact",
        ]);
        assert_eq!(
            transform(&form).snippet.scope,
            "javascript,typescript,javascriptreact,typescriptreact"
        );
    }

    #[test]
    fn transform_scope_keeps_duplicates() {
        let form = mock_form().with_scope(["go", "go"]);
        assert_eq!(transform(&form).snippet.scope, "go,go");
    }

    #[test]
    fn transform_description_falls_back_to_name() {
        let form = mock_form().with_description("");
        assert_eq!(transform(&form).snippet.description, "test-snippet");
    }

    #[test]
    fn transform_keeps_special_chars_in_name() {
        let form = FormModel::new("test-snippet-with-special-chars_123");
        let value = to_json(&form);
        assert!(value.get("test-snippet-with-special-chars_123").is_some());
    }

    #[test]
    fn transform_empty_body_is_single_empty_line() {
        assert_eq!(transform(&mock_form().with_body("")).snippet.body, [""]);
    }

    #[test]
    fn transform_is_deterministic() {
        let form = mock_form().with_body("a\r\nb\rc\n");
        assert_eq!(transform(&form), transform(&form));
    }

    #[test]
    fn body_round_trips_with_normalized_endings() {
        let body = "one\r\ntwo\rthree\n\nfour\r\n";
        let lines = transform(&mock_form().with_body(body)).snippet.body;
        assert_eq!(lines.join("\n"), body.replace("\r\n", "\n").replace('\r', "\n"));
    }

    #[test]
    fn serialized_field_order_is_fixed() {
        let text = serde_json::to_string(&transform(&mock_form())).unwrap();
        let prefix = text.find("\"prefix\"").unwrap();
        let scope = text.find("\"scope\"").unwrap();
        let body = text.find("\"body\"").unwrap();
        let description = text.find("\"description\"").unwrap();
        assert!(prefix < scope && scope < body && body < description);
    }

    // ========================================================================
    // Form Deserialization Tests
    // ========================================================================

    #[test]
    fn form_deserializes_with_defaults() {
        let form: FormModel = serde_json::from_str(r#"{ "name": "x" }"#).unwrap();
        assert_eq!(form, FormModel::new("x"));
        assert_eq!(form.prefix, Prefix::Single(String::new()));
    }

    #[test]
    fn form_deserializes_both_prefix_shapes() {
        let single: FormModel = serde_json::from_str(r#"{ "prefix": "a, b" }"#).unwrap();
        assert_eq!(single.prefix, Prefix::Single("a, b".into()));

        let multiple: FormModel = serde_json::from_str(r#"{ "prefix": ["a", "b"] }"#).unwrap();
        assert!(multiple.prefix.is_multiple());
    }
}
