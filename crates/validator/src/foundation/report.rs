//! The path-keyed error report
//!
//! An [`ErrorReport`] maps a [`FieldPath`] to the ordered list of messages
//! produced for that path. Insertion order is preserved so identical input
//! and rules always produce the same report in the same order.
//!
//! The wire form, produced by [`ErrorReport::to_flat`] and by the `Serialize`
//! implementation, is a flat JSON object keyed by dotted paths:
//!
//! ```json
//! {
//!   "email": ["dev@example is not a valid email address."],
//!   "articles.0.title": ["This value should not be empty."]
//! }
//! ```

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::foundation::FieldPath;

/// Accumulated failure messages of one validation run, keyed by path.
///
/// Every present key maps to a non-empty list. An empty report means the
/// input passed every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    entries: IndexMap<FieldPath, Vec<String>>,
}

impl ErrorReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no path failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of messages across all paths.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Appends a message to the list kept for `path`.
    pub fn push(&mut self, path: FieldPath, message: impl Into<String>) {
        self.entries.entry(path).or_default().push(message.into());
    }

    /// Replaces the list kept for `path`, returning the previous one.
    ///
    /// An existing key keeps its position. Empty lists are ignored so the
    /// non-empty invariant holds.
    pub fn insert(&mut self, path: FieldPath, messages: Vec<String>) -> Option<Vec<String>> {
        if messages.is_empty() {
            return None;
        }
        self.entries.insert(path, messages)
    }

    /// Merges `other` into `self`; on a shared key the entry of `other` wins.
    pub fn merge(&mut self, other: ErrorReport) {
        for (path, messages) in other.entries {
            self.insert(path, messages);
        }
    }

    /// Re-keys every entry under `prefix`.
    #[must_use = "nest_under returns a new report"]
    pub fn nest_under(self, prefix: &FieldPath) -> ErrorReport {
        let mut nested = ErrorReport::new();
        for (path, messages) in self.entries {
            nested.insert(prefix.join(&path), messages);
        }
        nested
    }

    /// Messages recorded for `path`.
    #[must_use]
    pub fn get_path(&self, path: &FieldPath) -> Option<&[String]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    /// Messages recorded for the dotted key `key` (e.g. `"articles.0.title"`).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .rev()
            .find(|(path, _)| path.to_dotted() == key)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Returns true when the dotted key `key` failed.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over `(path, messages)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &[String])> {
        self.entries
            .iter()
            .map(|(path, messages)| (path, messages.as_slice()))
    }

    /// Iterates over the failing paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.entries.keys()
    }

    /// Dotted keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().map(FieldPath::to_dotted).collect()
    }

    /// Flattens the report into its dotted wire form.
    ///
    /// Two distinct paths that render to the same dotted key collapse into
    /// one entry; the later one wins.
    #[must_use]
    pub fn to_flat(&self) -> IndexMap<String, Vec<String>> {
        let mut flat = IndexMap::with_capacity(self.entries.len());
        for (path, messages) in &self.entries {
            flat.insert(path.to_dotted(), messages.clone());
        }
        flat
    }

    /// Converts the wire form into a JSON value.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .to_flat()
            .into_iter()
            .map(|(key, messages)| (key, serde_json::Value::from(messages)))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl IntoIterator for ErrorReport {
    type Item = (FieldPath, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<FieldPath, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(FieldPath, Vec<String>)> for ErrorReport {
    fn from_iter<I: IntoIterator<Item = (FieldPath, Vec<String>)>>(iter: I) -> Self {
        let mut report = ErrorReport::new();
        for (path, messages) in iter {
            report.insert(path, messages);
        }
        report
    }
}

impl Serialize for ErrorReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_flat().serialize(serializer)
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed for {} field(s):", self.entries.len())?;
        for (path, messages) in &self.entries {
            writeln!(f, "  {path}: {}", messages.join("; "))?;
        }
        Ok(())
    }
}
