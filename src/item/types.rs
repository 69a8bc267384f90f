//! Core item data types.
//!
//! This module contains the record format shared by every operator in the
//! crate: [`Item`] — an identity string plus an ordered map of named string
//! metadata.
//!
//! Metadata names are compared case-insensitively for lookup, while the map
//! preserves insertion order for enumeration. `"Identity"` is a reserved
//! pseudo-metadata name: it always resolves to the item's identity string but
//! is never stored as a literal entry, and it never appears when custom
//! metadata is enumerated.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::item::execution::utils::StringComparator;

/// Reserved metadata name resolving to an item's identity string.
pub const IDENTITY_NAME: &str = "Identity";

/// Built-in names resolved by the reserved layer rather than the custom map.
const RESERVED_NAMES: &[&str] = &[IDENTITY_NAME];

/// Whether a metadata name is reserved (matched ignoring case).
pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES
        .iter()
        .any(|reserved| StringComparator::equals_ignore_case(reserved, name))
}

/// A named record: an identity string plus ordered custom metadata.
///
/// Constructed per invocation from caller-supplied input; operators never
/// mutate their inputs in place, they produce new collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    identity: String,
    #[serde(default)]
    metadata: IndexMap<String, String>,
}

impl Item {
    /// Create an item with no custom metadata.
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            metadata: IndexMap::new(),
        }
    }

    /// Create an item and populate its custom metadata in iteration order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use itemflow::Item;
    ///
    /// let item = Item::with_metadata("report.csv", [("Size", "1024"), ("Kind", "data")]);
    /// assert_eq!(item.metadata("size"), Some("1024"));
    /// ```
    pub fn with_metadata<N, V>(
        identity: impl Into<String>,
        metadata: impl IntoIterator<Item = (N, V)>,
    ) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let mut item = Self::new(identity);
        for (name, value) in metadata {
            item.set_metadata(name, value);
        }
        item
    }

    /// The item's identity string.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Look up a metadata value by name, ignoring case.
    ///
    /// Reserved names resolve through the built-in layer: `"Identity"` (any
    /// casing) returns the identity string even though it is not an entry in
    /// the metadata map.
    pub fn metadata(&self, name: &str) -> Option<&str> {
        if is_reserved_name(name) {
            return Some(&self.identity);
        }
        // Exact-match fast path before the case-insensitive scan
        if let Some(value) = self.metadata.get(name) {
            return Some(value);
        }
        self.metadata
            .iter()
            .find(|(stored, _)| StringComparator::equals_ignore_case(stored, name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the item carries metadata under `name` (reserved names always do).
    pub fn has_metadata(&self, name: &str) -> bool {
        self.metadata(name).is_some()
    }

    /// Set a custom metadata value.
    ///
    /// If an entry already exists under the name (ignoring case), its value is
    /// replaced in place: the entry keeps its position and its originally
    /// stored casing. Reserved names are resolved at lookup and never stored;
    /// passing one here is a no-op.
    pub fn set_metadata(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if is_reserved_name(&name) {
            return;
        }
        if let Some(existing) = self.metadata.get_mut(&name) {
            *existing = value.into();
            return;
        }
        let position = self
            .metadata
            .keys()
            .position(|stored| StringComparator::equals_ignore_case(stored, &name));
        match position {
            Some(index) => {
                if let Some((_, existing)) = self.metadata.get_index_mut(index) {
                    *existing = value.into();
                }
            }
            None => {
                self.metadata.insert(name, value.into());
            }
        }
    }

    /// Enumerate custom metadata as `(name, value)` pairs in insertion order.
    ///
    /// Reserved names are excluded; only the custom layer is walked.
    pub fn custom_metadata(&self) -> impl Iterator<Item = (&str, &str)> {
        self.metadata
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of custom metadata entries.
    pub fn custom_metadata_len(&self) -> usize {
        self.metadata.len()
    }
}

/// Items render as their identity string.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identity)
    }
}
