//! The set of active regions.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AreaError, Result};
use crate::region::{Region, RegionId};

#[derive(Default)]
struct RegistryInner {
    /// Insertion order, which is also sweep order.
    order: Vec<RegionId>,
    regions: HashMap<RegionId, Region>,
}

/// The regions the poller visits each tick.
///
/// A cheap-clone handle: create one at startup, hand clones to the poller
/// and to any observer that needs to add or remove regions. Membership is by
/// region identity. All operations are idempotent.
#[derive(Clone, Default)]
pub struct AreaRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl AreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `region`. Returns whether it was newly added.
    pub fn track(&self, region: &Region) -> bool {
        let mut inner = self.inner.lock();
        let id = region.id();
        if inner.regions.contains_key(&id) {
            return false;
        }
        inner.order.push(id);
        inner.regions.insert(id, region.clone());
        tracing::debug!(region = %id, shape = region.shape().kind(), "tracking region");
        true
    }

    /// Stop tracking `region`. Returns whether it was tracked.
    pub fn untrack(&self, region: &Region) -> bool {
        self.untrack_id(region.id()).is_some()
    }

    /// Stop tracking the region with `id`, handing it back if it was tracked.
    pub fn untrack_id(&self, id: RegionId) -> Option<Region> {
        let mut inner = self.inner.lock();
        let region = inner.regions.remove(&id)?;
        inner.order.retain(|entry| *entry != id);
        tracing::debug!(region = %id, "untracked region");
        Some(region)
    }

    pub fn is_tracked(&self, region: &Region) -> bool {
        self.inner.lock().regions.contains_key(&region.id())
    }

    pub fn get(&self, id: RegionId) -> Option<Region> {
        self.inner.lock().regions.get(&id).cloned()
    }

    /// Like [`get`](Self::get), for callers that hold an id they expect to be live.
    pub fn require(&self, id: RegionId) -> Result<Region> {
        self.get(id).ok_or(AreaError::UnknownRegion(id))
    }

    /// Snapshot of the tracked regions in sweep order.
    pub fn regions(&self) -> Vec<Region> {
        let inner = self.inner.lock();
        inner
            .order
            .iter()
            .filter_map(|id| inner.regions.get(id).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().regions.is_empty()
    }

    /// Drop every region.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.order.clear();
        inner.regions.clear();
    }
}

impl std::fmt::Debug for AreaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AreaRegistry")
            .field("regions", &self.len())
            .finish()
    }
}
