//! Attribute sets attached to nodes, edges and clusters.

use std::collections::BTreeMap;

use crate::dot::{attr_key, escape};

/// A set of DOT attributes.
///
/// Keys are kept sorted so output is the same on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: BTreeMap<String, String>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder form of [`Attrs::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn pairs(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", attr_key(k), escape(v)))
    }

    /// Space-separated `key="value"` pairs for use inside `[ ... ]`.
    ///
    /// An empty set formats as the empty string.
    pub fn format_inline(&self) -> String {
        self.pairs().collect::<Vec<_>>().join(" ")
    }

    /// One `key="value";` per line, as used in cluster bodies.
    ///
    /// An empty set formats as a lone `;`.
    pub fn format_block(&self) -> String {
        format!("{};", self.pairs().collect::<Vec<_>>().join(";\n"))
    }
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
