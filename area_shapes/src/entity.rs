//! Entity handles supplied by the host.

use serde::{Deserialize, Serialize};

/// Opaque handle of a host entity.
///
/// The engine never interprets the value beyond equality, hashing, and
/// passing it back to the host's position provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub i32);

impl EntityId {
    /// The null handle. The host never hands this out for a live entity.
    pub const NONE: EntityId = EntityId(0);

    /// Wrap a raw host handle.
    pub fn from_raw(handle: i32) -> Self {
        Self(handle)
    }

    /// Get the raw host handle.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Whether this handle can refer to an entity at all.
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<i32> for EntityId {
    fn from(handle: i32) -> Self {
        Self(handle)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
