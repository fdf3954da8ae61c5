//! The host-side source of entity positions.

use area_shapes::{EntityId, Vec3};

/// Position queries the poller makes against the host once per sweep.
///
/// Calls are expected to be synchronous and cheap. The poller asks
/// [`entity_exists`](Self::entity_exists) before
/// [`entity_position`](Self::entity_position) and never asks for the
/// position of an entity reported as gone.
pub trait PositionProvider {
    /// The player's own entity handle.
    fn player_entity(&self) -> EntityId;

    fn player_position(&self) -> Vec3;

    fn entity_exists(&self, entity: EntityId) -> bool;

    /// Only meaningful while `entity_exists(entity)` is true.
    fn entity_position(&self, entity: EntityId) -> Vec3;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A hand-driven host: tests move things around between sweeps.
    pub struct ScriptedWorld {
        player: EntityId,
        player_position: Mutex<Vec3>,
        entities: Mutex<HashMap<EntityId, Vec3>>,
        position_queries: AtomicUsize,
        exists_queries: AtomicUsize,
    }

    impl ScriptedWorld {
        pub fn new(player: EntityId) -> Self {
            Self {
                player,
                player_position: Mutex::new(Vec3::new(1000.0, 1000.0, 1000.0)),
                entities: Mutex::new(HashMap::new()),
                position_queries: AtomicUsize::new(0),
                exists_queries: AtomicUsize::new(0),
            }
        }

        pub fn move_player(&self, position: Vec3) {
            *self.player_position.lock() = position;
        }

        pub fn place(&self, entity: EntityId, position: Vec3) {
            self.entities.lock().insert(entity, position);
        }

        pub fn despawn(&self, entity: EntityId) {
            self.entities.lock().remove(&entity);
        }

        pub fn position_queries(&self) -> usize {
            self.position_queries.load(Ordering::SeqCst)
        }

        pub fn exists_queries(&self) -> usize {
            self.exists_queries.load(Ordering::SeqCst)
        }
    }

    impl PositionProvider for ScriptedWorld {
        fn player_entity(&self) -> EntityId {
            self.player
        }

        fn player_position(&self) -> Vec3 {
            *self.player_position.lock()
        }

        fn entity_exists(&self, entity: EntityId) -> bool {
            self.exists_queries.fetch_add(1, Ordering::SeqCst);
            self.entities.lock().contains_key(&entity)
        }

        fn entity_position(&self, entity: EntityId) -> Vec3 {
            self.position_queries.fetch_add(1, Ordering::SeqCst);
            self.entities
                .lock()
                .get(&entity)
                .copied()
                .unwrap_or(Vec3::NAN)
        }
    }
}
