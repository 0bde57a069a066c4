//! Pending Buffer
//!
//! Holds at most one implementor map staged before a host is attached.
//! Lifecycle: unset -> set -> consumed/cleared.

use tracing::{debug, warn};

use crate::types::ImplementorMap;

/// What `stage` does when the slot is already occupied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PendingPolicy {
    /// Overwrite the staged map, last writer wins. This matches the single
    /// process-wide slot of the generated index format, where only one
    /// fragment is expected to load before the host.
    #[default]
    Replace,
    /// Append the new map into the staged one so multi-fragment loads before
    /// host init are not lost.
    Merge,
}

/// Staging slot for an implementor map awaiting a host.
#[derive(Debug, Default)]
pub struct PendingSlot {
    map: Option<ImplementorMap>,
    policy: PendingPolicy,
}

impl PendingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PendingPolicy) -> Self {
        Self { map: None, policy }
    }

    pub fn policy(&self) -> PendingPolicy {
        self.policy
    }

    /// Stage a map for a host that has not initialized yet.
    pub fn stage(&mut self, map: ImplementorMap) {
        match (self.policy, self.map.take()) {
            (_, None) => {
                debug!(
                    libraries = map.library_count(),
                    "Staged implementor map in pending slot"
                );
                self.map = Some(map);
            }
            (PendingPolicy::Replace, Some(previous)) => {
                warn!(
                    dropped_libraries = previous.library_count(),
                    "Pending slot already occupied, dropping previously staged map"
                );
                self.map = Some(map);
            }
            (PendingPolicy::Merge, Some(mut staged)) => {
                staged.merge(map);
                self.map = Some(staged);
            }
        }
    }

    /// Consume the staged map, clearing the slot.
    pub fn take(&mut self) -> Option<ImplementorMap> {
        self.map.take()
    }

    pub fn peek(&self) -> Option<&ImplementorMap> {
        self.map.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_none()
    }
}
