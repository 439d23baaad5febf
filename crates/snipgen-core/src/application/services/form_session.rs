//! Form Session - the owner of the form being edited.
//!
//! Every input change replaces exactly one field, and every read re-renders
//! the whole form. Nothing is cached between renders.

use tracing::debug;

use crate::{
    application::services::SnippetRenderer,
    domain::{
        FormModel, Insertion, Prefix, Scope, SnippetExportEntry, insert_at_cursor, transform,
    },
    error::SnipgenResult,
};

/// A single field change coming from an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    /// Raw prefix-field text; normalized with [`Prefix::from_input`].
    PrefixInput(String),
    /// An already-shaped prefix (form files, programmatic callers).
    Prefix(Prefix),
    Scope(Vec<String>),
    Body(String),
    Description(String),
}

impl FieldUpdate {
    fn field_name(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::PrefixInput(_) | Self::Prefix(_) => "prefix",
            Self::Scope(_) => "scope",
            Self::Body(_) => "body",
            Self::Description(_) => "description",
        }
    }
}

/// Owns one [`FormModel`] for the length of an editing session.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    form: FormModel,
}

impl FormSession {
    pub fn new(form: FormModel) -> Self {
        Self { form }
    }

    /// Apply one field change.
    pub fn apply(&mut self, update: FieldUpdate) {
        debug!(field = update.field_name(), "Form field updated");

        match update {
            FieldUpdate::Name(name) => self.form.name = name,
            FieldUpdate::PrefixInput(raw) => self.form.prefix = Prefix::from_input(&raw),
            FieldUpdate::Prefix(prefix) => self.form.prefix = prefix,
            FieldUpdate::Scope(ids) => self.form.scope = Scope::new(ids),
            FieldUpdate::Body(body) => self.form.body = body,
            FieldUpdate::Description(description) => self.form.description = description,
        }
    }

    /// Replace the body selection `[start, end)` with `text` and return the
    /// cursor position after it. Goes through [`FieldUpdate::Body`].
    pub fn insert_into_body(&mut self, start: usize, end: usize, text: &str) -> usize {
        let Insertion { value, cursor } = insert_at_cursor(&self.form.body, start, end, text);
        self.apply(FieldUpdate::Body(value));
        cursor
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn into_form(self) -> FormModel {
        self.form
    }

    pub fn entry(&self) -> SnippetExportEntry {
        transform(&self.form)
    }

    /// Full pretty JSON of the current form.
    pub fn preview(&self) -> SnipgenResult<String> {
        SnippetRenderer::render(&self.form)
    }

    /// Copy fragment of the current form.
    pub fn fragment(&self) -> SnipgenResult<String> {
        SnippetRenderer::fragment(&self.form)
    }
}
