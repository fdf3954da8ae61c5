//! Observer lists - multi-subscriber callbacks per region event.

use area_shapes::EntityId;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::{AttributeChange, Region};

/// Handle returned when registering an observer, used to remove it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(u64);

impl ObserverId {
    /// Allocate an id unique for the lifetime of the process.
    pub(crate) fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Called when the player enters or leaves a region.
pub type PlayerObserver = dyn Fn(&Region) + Send + Sync;

/// Called when a tracked entity enters or leaves a region.
pub type EntityObserver = dyn Fn(&Region, EntityId) + Send + Sync;

/// Called when an existing attribute is overwritten.
pub type AttributeObserver = dyn Fn(&Region, &AttributeChange) + Send + Sync;

/// Ordered list of observers for one event kind.
pub struct ObserverList<F: ?Sized> {
    entries: Vec<(ObserverId, Arc<F>)>,
}

impl<F: ?Sized> ObserverList<F> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, id: ObserverId, observer: Arc<F>) {
        self.entries.push((id, observer));
    }

    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Clone the observers out, in registration order, so they can run
    /// without the list being borrowed.
    pub fn snapshot(&self) -> Vec<Arc<F>> {
        self.entries
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F: ?Sized> Default for ObserverList<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// All observer lists of one region.
#[derive(Default)]
pub(crate) struct RegionObservers {
    pub player_enter: ObserverList<PlayerObserver>,
    pub player_leave: ObserverList<PlayerObserver>,
    pub entity_enter: ObserverList<EntityObserver>,
    pub entity_leave: ObserverList<EntityObserver>,
    pub attribute_changed: ObserverList<AttributeObserver>,
}

impl RegionObservers {
    pub fn remove(&mut self, id: ObserverId) -> bool {
        self.player_enter.remove(id)
            || self.player_leave.remove(id)
            || self.entity_enter.remove(id)
            || self.entity_leave.remove(id)
            || self.attribute_changed.remove(id)
    }

    pub fn len(&self) -> usize {
        self.player_enter.len()
            + self.player_leave.len()
            + self.entity_enter.len()
            + self.entity_leave.len()
            + self.attribute_changed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    type Note = dyn Fn(&mut Vec<u32>) + Send + Sync;

    #[test]
    fn test_registration_order() {
        let mut list: ObserverList<Note> = ObserverList::new();
        list.push(ObserverId::next(), Arc::new(|log: &mut Vec<u32>| log.push(1)));
        list.push(ObserverId::next(), Arc::new(|log: &mut Vec<u32>| log.push(2)));
        list.push(ObserverId::next(), Arc::new(|log: &mut Vec<u32>| log.push(3)));

        let mut log = Vec::new();
        for observer in list.snapshot() {
            observer(&mut log);
        }
        assert_eq!(log, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut list: ObserverList<Note> = ObserverList::new();
        let first = ObserverId::next();
        let second = ObserverId::next();
        list.push(first, Arc::new(|log: &mut Vec<u32>| log.push(1)));
        list.push(second, Arc::new(|log: &mut Vec<u32>| log.push(2)));

        assert!(list.remove(first));
        assert!(!list.remove(first));
        assert_eq!(list.len(), 1);

        let mut log = Vec::new();
        for observer in list.snapshot() {
            observer(&mut log);
        }
        assert_eq!(log, vec![2]);
    }

    #[test]
    fn test_empty_list_is_noop() {
        let list: ObserverList<Note> = ObserverList::default();
        assert!(list.is_empty());
        assert!(list.snapshot().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(ObserverId::next()));
        }
    }
}
