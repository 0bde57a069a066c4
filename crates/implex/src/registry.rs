//! Implementor Registry
//!
//! In-memory index of registered implementor maps with per-library lookup.
//! This is the production host behind the `RegisterImplementors` capability.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use crate::hub::RegisterImplementors;
use crate::types::ImplementorMap;

/// Accumulated implementor index, keyed by library identifier.
///
/// Maps delivered through the hub are appended per library, so fragments for
/// different traits contribute to the same library's entry list in delivery
/// order.
#[derive(Debug, Default, Serialize)]
pub struct ImplementorRegistry {
    implementors: IndexMap<String, Vec<String>>,
    #[serde(skip)]
    maps_registered: usize,
}

impl ImplementorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library identifiers in first-registration order.
    pub fn libraries(&self) -> impl Iterator<Item = &str> {
        self.implementors.keys().map(|k| k.as_str())
    }

    /// Rendered entries registered for a library.
    pub fn entries(&self, library: &str) -> Option<&[String]> {
        self.implementors.get(library).map(|v| v.as_slice())
    }

    pub fn library_count(&self) -> usize {
        self.implementors.len()
    }

    /// Total rendered entries across all libraries.
    pub fn entry_count(&self) -> usize {
        self.implementors.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.implementors.is_empty()
    }

    /// Number of maps delivered to this registry so far.
    pub fn maps_registered(&self) -> usize {
        self.maps_registered
    }
}

impl RegisterImplementors for ImplementorRegistry {
    fn register_implementors(&mut self, map: ImplementorMap) {
        let libraries = map.library_count();
        let entries = map.entry_count();

        for (library, rendered) in map.iter() {
            self.implementors
                .entry(library.to_string())
                .or_default()
                .extend(rendered.iter().cloned());
        }
        self.maps_registered += 1;

        info!(
            libraries,
            entries,
            total_libraries = self.library_count(),
            "Registered implementor map"
        );
    }
}
