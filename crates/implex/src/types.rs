//! Fragment Types
//!
//! Rust structs matching the fragment JSON schema v1.0.0.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::FragmentError;

/// Fragment schema version
pub const FRAGMENT_VERSION: &str = "1.0.0";

/// Ordered mapping from library identifier to pre-rendered implementor markup.
///
/// Key order and per-key entry order are significant. Entries are opaque
/// markup blobs; duplicates are permitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplementorMap {
    entries: IndexMap<String, Vec<String>>,
}

impl ImplementorMap {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Set the entry list for a library, replacing any previous list.
    pub fn insert(&mut self, library: impl Into<String>, entries: Vec<String>) {
        self.entries.insert(library.into(), entries);
    }

    /// Entry list for a library, if present.
    pub fn entries(&self, library: &str) -> Option<&[String]> {
        self.entries.get(library).map(|v| v.as_slice())
    }

    /// Library identifiers in insertion order.
    pub fn libraries(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Iterate (library, entries) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn library_count(&self) -> usize {
        self.entries.len()
    }

    /// Total markup entries across all libraries.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append another map into this one.
    ///
    /// Entries for already-present libraries are appended after the existing
    /// ones; new libraries are appended in the other map's order.
    pub fn merge(&mut self, other: ImplementorMap) {
        for (library, entries) in other.entries {
            self.entries.entry(library).or_default().extend(entries);
        }
    }
}

impl FromIterator<(String, Vec<String>)> for ImplementorMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// One generated index fragment: the implementors of a single trait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    pub format_version: String,
    /// Path of the documented trait, e.g. "core::convert::From".
    pub trait_path: String,
    pub implementors: ImplementorMap,
}

impl Fragment {
    /// Validate fragment structure
    pub fn validate(&self) -> Result<(), FragmentError> {
        if self.format_version != FRAGMENT_VERSION {
            return Err(FragmentError::UnsupportedVersion {
                found: self.format_version.clone(),
                expected: FRAGMENT_VERSION,
            });
        }

        if self.trait_path.is_empty() {
            return Err(FragmentError::MissingTraitPath);
        }

        for library in self.implementors.libraries() {
            if !is_valid_library_name(library) {
                return Err(FragmentError::InvalidLibraryName(library.to_string()));
            }
        }

        Ok(())
    }

    /// Consume the fragment, keeping only the implementor map.
    pub fn into_map(self) -> ImplementorMap {
        self.implementors
    }
}

fn is_valid_library_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
