use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The profile being edited: field key to free text.
///
/// Any key and any value are accepted, including keys the schema does not know.
/// An absent key and a key holding the empty string both mean "unset".
/// Keys keep the order in which they were first written; overwriting a key keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    values: IndexMap<String, String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, empty when unset.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn is_set(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder form of [`Document::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Overwrite with every key of `partial`, leaving all other keys untouched.
    pub fn merge(&mut self, partial: Document) {
        self.values.extend(partial.values);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Every stored entry, set or not, in enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries with a non-empty value, in enumeration order.
    pub fn set_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries().filter(|(_, v)| !v.is_empty())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of stored keys, including ones holding the empty string.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
