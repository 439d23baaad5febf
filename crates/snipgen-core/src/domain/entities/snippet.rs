//! The canonical VSCode snippet export shape.

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::domain::value_objects::Prefix;

/// The value object under the snippet's name.
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VscodeSnippet {
    pub prefix: Prefix,
    pub scope: String,
    pub body: Vec<String>,
    pub description: String,
}

/// `{ "<name>": { prefix, scope, body, description } }`.
///
/// Derived from a [`FormModel`](crate::domain::FormModel) on every render and
/// never stored. The name may be empty; that is still a valid key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetExportEntry {
    pub name: String,
    pub snippet: VscodeSnippet,
}

impl Serialize for SnippetExportEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.snippet)?;
        map.end()
    }
}
