//! The user-editable snippet form.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Prefix, Scope};

/// In-memory representation of the snippet being authored.
///
/// Every field has a safe empty default, so any combination of values is a
/// valid form. Deserialization fills missing fields with those defaults,
/// which lets a form file specify only what it cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormModel {
    /// Snippet identifier; the JSON key and the fallback description.
    pub name: String,
    pub prefix: Prefix,
    pub scope: Scope,
    /// Raw body text with whatever line endings the input produced.
    pub body: String,
    pub description: String,
}

impl FormModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<Prefix>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_scope<'a>(mut self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        self.scope = ids.into_iter().collect();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
