//! Domain value objects: Prefix and Scope.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. The
//! prefix keeps the shape the user produced (one trigger word or a list of
//! them); nothing downstream is allowed to collapse one shape into the other.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Prefix ───────────────────────────────────────────────────────────────────

/// The trigger word(s) a user types to invoke a snippet.
///
/// Serialized untagged: `Single` is a JSON string, `Multiple` a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prefix {
    Single(String),
    Multiple(Vec<String>),
}

impl Prefix {
    /// Normalize raw prefix-field input.
    ///
    /// Input containing a comma is split on every comma and each segment is
    /// trimmed. Empty segments (from `a,,b` or a trailing comma) are kept.
    /// Input without a comma is stored verbatim, whitespace included.
    pub fn from_input(raw: &str) -> Self {
        if raw.contains(',') {
            Self::Multiple(raw.split(',').map(|s| s.trim().to_owned()).collect())
        } else {
            Self::Single(raw.to_owned())
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Trigger words in order. A `Single` yields exactly one item.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Single(word) => std::slice::from_ref(word),
            Self::Multiple(words) => words,
        };
        slice.iter().map(String::as_str)
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl From<&str> for Prefix {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<Vec<String>> for Prefix {
    fn from(value: Vec<String>) -> Self {
        Self::Multiple(value)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(word) => f.write_str(word),
            Self::Multiple(words) => write!(f, "[{}]", words.join(", ")),
        }
    }
}

// ── Scope ────────────────────────────────────────────────────────────────────

/// Ordered language identifiers a snippet applies to.
///
/// Empty means "all languages". Order is preserved and duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope(Vec<String>);

impl Scope {
    pub fn new(ids: Vec<String>) -> Self {
        Self(ids)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Comma-joined with no added spacing. Identifiers are not escaped.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }
}

impl From<Vec<String>> for Scope {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl<'a> FromIterator<&'a str> for Scope {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_owned).collect())
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}
