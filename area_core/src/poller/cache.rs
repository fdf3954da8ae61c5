//! Tick-scoped memo of entity positions.

use area_shapes::{EntityId, Vec3};
use std::collections::HashMap;

use super::PositionProvider;

/// Remembers each entity's resolved position for the rest of the sweep, so
/// an entity tracked by several regions costs one host lookup per tick.
///
/// `None` entries record entities the host reported as gone.
#[derive(Debug, Default)]
pub struct PositionCache {
    positions: HashMap<EntityId, Option<Vec3>>,
    lookups: usize,
}

impl PositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of `entity` this tick, or `None` if it no longer exists.
    pub fn resolve<P>(&mut self, entity: EntityId, provider: &P) -> Option<Vec3>
    where
        P: PositionProvider + ?Sized,
    {
        if let Some(cached) = self.positions.get(&entity) {
            return *cached;
        }

        let position = if provider.entity_exists(entity) {
            self.lookups += 1;
            Some(provider.entity_position(entity))
        } else {
            None
        };
        self.positions.insert(entity, position);
        position
    }

    /// Number of host position lookups since the last clear.
    pub fn lookups(&self) -> usize {
        self.lookups
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.lookups = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poller::testing::ScriptedWorld;

    #[test]
    fn test_resolve_memoizes() {
        let world = ScriptedWorld::new(EntityId(1));
        world.place(EntityId(42), Vec3::new(1.0, 2.0, 3.0));
        let mut cache = PositionCache::new();

        assert_eq!(cache.resolve(EntityId(42), &world), Some(Vec3::new(1.0, 2.0, 3.0)));
        world.place(EntityId(42), Vec3::ZERO);
        assert_eq!(cache.resolve(EntityId(42), &world), Some(Vec3::new(1.0, 2.0, 3.0)));

        assert_eq!(world.position_queries(), 1);
        assert_eq!(world.exists_queries(), 1);
        assert_eq!(cache.lookups(), 1);
    }

    #[test]
    fn test_missing_entity_cached_as_gone() {
        let world = ScriptedWorld::new(EntityId(1));
        let mut cache = PositionCache::new();

        assert_eq!(cache.resolve(EntityId(7), &world), None);
        assert_eq!(cache.resolve(EntityId(7), &world), None);

        assert_eq!(world.exists_queries(), 1);
        assert_eq!(world.position_queries(), 0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_forgets_positions() {
        let world = ScriptedWorld::new(EntityId(1));
        world.place(EntityId(42), Vec3::ZERO);
        let mut cache = PositionCache::new();
        cache.resolve(EntityId(42), &world);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.lookups(), 0);

        world.place(EntityId(42), Vec3::ONE);
        assert_eq!(cache.resolve(EntityId(42), &world), Some(Vec3::ONE));
        assert_eq!(world.position_queries(), 2);
    }
}
