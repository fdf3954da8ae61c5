//! Regions - a shape plus the tracking state, attributes, and observers
//! attached to it.
//!
//! A [`Region`] is a cheap-clone handle; clones refer to the same region.
//! No internal lock is held while observers run, so observers may freely
//! call back into the region or the registry.

mod attributes;
mod observers;

pub use attributes::*;
pub use observers::*;

use area_shapes::{Containment, EntityId, Shape, Vec2, Vec3};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AreaError, Result};
use crate::poller::PositionProvider;

/// Unique identity of a region. Two regions with equal shapes are still
/// distinct regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId(pub Uuid);

impl RegionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for RegionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A containment state change detected by the poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    Entered,
    Left,
}

#[derive(Debug, Default)]
struct TrackingState {
    ignore_player: bool,
    player_inside: bool,
    tracked: HashSet<EntityId>,
    /// Always a subset of `tracked`.
    inside: HashSet<EntityId>,
}

struct RegionInner {
    id: RegionId,
    shape: Shape,
    state: Mutex<TrackingState>,
    attributes: Mutex<AttributeStore>,
    observers: Mutex<RegionObservers>,
}

/// A tracked geometric volume.
///
/// Becomes active only once added to an [`AreaRegistry`](crate::AreaRegistry).
#[derive(Clone)]
pub struct Region {
    inner: Arc<RegionInner>,
}

impl Region {
    /// Create a region around `shape`, not tracking anything, with no
    /// attributes and player tracking enabled.
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            inner: Arc::new(RegionInner {
                id: RegionId::new(),
                shape: shape.into(),
                state: Mutex::new(TrackingState::default()),
                attributes: Mutex::new(AttributeStore::new()),
                observers: Mutex::new(RegionObservers::default()),
            }),
        }
    }

    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::new(Shape::sphere(center, radius))
    }

    pub fn circle(center: Vec3, radius: f32) -> Self {
        Self::new(Shape::circle(center, radius))
    }

    pub fn box_2d(a: Vec2, b: Vec2) -> Self {
        Self::new(Shape::box_2d(a, b))
    }

    pub fn box_3d(a: Vec3, b: Vec3) -> Self {
        Self::new(Shape::box_3d(a, b))
    }

    pub fn id(&self) -> RegionId {
        self.inner.id
    }

    pub fn shape(&self) -> &Shape {
        &self.inner.shape
    }

    pub fn is_point_inside(&self, point: Vec3) -> bool {
        self.inner.shape.contains(point)
    }

    // --- Player ---

    /// Whether player enter/leave evaluation is skipped for this region.
    pub fn ignore_player(&self) -> bool {
        self.inner.state.lock().ignore_player
    }

    pub fn set_ignore_player(&self, ignore: bool) {
        self.inner.state.lock().ignore_player = ignore;
    }

    /// Last containment state the poller computed for the player.
    pub fn is_player_inside(&self) -> bool {
        self.inner.state.lock().player_inside
    }

    // --- Tracked entities ---

    /// Start tracking `entity` for this region.
    ///
    /// The player's own entity is silently ignored; it is covered by the
    /// player events already. Returns whether the entity was newly added.
    /// A new entity counts as outside until the next sweep evaluates it.
    pub fn track_entity<P>(&self, entity: EntityId, provider: &P) -> Result<bool>
    where
        P: PositionProvider + ?Sized,
    {
        if !entity.is_valid() {
            return Err(AreaError::InvalidEntity(entity));
        }
        if entity == provider.player_entity() {
            return Ok(false);
        }
        Ok(self.inner.state.lock().tracked.insert(entity))
    }

    /// Stop tracking `entity`. Returns whether it was tracked.
    pub fn untrack_entity(&self, entity: EntityId) -> Result<bool> {
        if !entity.is_valid() {
            return Err(AreaError::InvalidEntity(entity));
        }
        let mut state = self.inner.state.lock();
        state.inside.remove(&entity);
        Ok(state.tracked.remove(&entity))
    }

    pub fn is_entity_tracked(&self, entity: EntityId) -> bool {
        self.inner.state.lock().tracked.contains(&entity)
    }

    /// Snapshot of all tracked entities, in no particular order.
    pub fn tracked_entities(&self) -> Vec<EntityId> {
        self.inner.state.lock().tracked.iter().copied().collect()
    }

    /// Snapshot of tracked entities currently inside, in no particular order.
    pub fn entities_inside(&self) -> Vec<EntityId> {
        self.inner.state.lock().inside.iter().copied().collect()
    }

    // --- Attributes ---

    /// Typed read. `None` if the key is absent or holds another type.
    pub fn get_attribute<T: FromAttribute>(&self, key: &str) -> Option<T> {
        self.lookup_attribute(key).found()
    }

    /// Typed read that tells a missing key apart from a type mismatch.
    pub fn lookup_attribute<T: FromAttribute>(&self, key: &str) -> AttributeLookup<T> {
        self.inner.attributes.lock().lookup(key)
    }

    pub fn get_attribute_value(&self, key: &str) -> Option<AttributeValue> {
        self.inner.attributes.lock().get(key).cloned()
    }

    /// Insert or overwrite an attribute.
    ///
    /// Overwriting an existing key notifies attribute-changed observers
    /// after the store is updated, even when the value is unchanged. A first
    /// insertion notifies nobody.
    pub fn set_attribute(&self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        let key = key.into();
        let value = value.into();

        let previous = self
            .inner
            .attributes
            .lock()
            .insert(key.clone(), value.clone());

        if let Some(old) = previous {
            let change = AttributeChange {
                key,
                old,
                new: value,
            };
            let observers = self.inner.observers.lock().attribute_changed.snapshot();
            for observer in observers {
                observer(self, &change);
            }
        }
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.inner.attributes.lock().contains(key)
    }

    /// Snapshot of all attribute keys, in no particular order.
    pub fn attribute_keys(&self) -> Vec<String> {
        self.inner.attributes.lock().keys()
    }

    pub fn remove_attribute(&self, key: &str) -> Option<AttributeValue> {
        self.inner.attributes.lock().remove(key)
    }

    pub fn clear_attributes(&self) {
        self.inner.attributes.lock().clear();
    }

    // --- Observers ---

    pub fn on_player_enter<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&Region) + Send + Sync + 'static,
    {
        let id = ObserverId::next();
        self.inner.observers.lock().player_enter.push(id, Arc::new(observer));
        id
    }

    pub fn on_player_leave<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&Region) + Send + Sync + 'static,
    {
        let id = ObserverId::next();
        self.inner.observers.lock().player_leave.push(id, Arc::new(observer));
        id
    }

    pub fn on_entity_enter<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&Region, EntityId) + Send + Sync + 'static,
    {
        let id = ObserverId::next();
        self.inner.observers.lock().entity_enter.push(id, Arc::new(observer));
        id
    }

    pub fn on_entity_leave<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&Region, EntityId) + Send + Sync + 'static,
    {
        let id = ObserverId::next();
        self.inner.observers.lock().entity_leave.push(id, Arc::new(observer));
        id
    }

    pub fn on_attribute_changed<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&Region, &AttributeChange) + Send + Sync + 'static,
    {
        let id = ObserverId::next();
        self.inner
            .observers
            .lock()
            .attribute_changed
            .push(id, Arc::new(observer));
        id
    }

    /// Remove an observer from whichever list holds it.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        self.inner.observers.lock().remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.lock().len()
    }

    // --- Poller hooks ---

    /// Re-evaluate the player against this region and record the result.
    pub(crate) fn evaluate_player(&self, position: Vec3) -> Option<Transition> {
        let mut state = self.inner.state.lock();
        if state.ignore_player {
            return None;
        }

        let inside = self.inner.shape.contains(position);
        if inside == state.player_inside {
            return None;
        }
        state.player_inside = inside;
        Some(if inside {
            Transition::Entered
        } else {
            Transition::Left
        })
    }

    /// Re-evaluate one tracked entity. Entities untracked since the sweep
    /// started are skipped.
    pub(crate) fn evaluate_entity(&self, entity: EntityId, position: Vec3) -> Option<Transition> {
        let inside = self.inner.shape.contains(position);

        let mut state = self.inner.state.lock();
        if !state.tracked.contains(&entity) {
            return None;
        }

        if inside && state.inside.insert(entity) {
            Some(Transition::Entered)
        } else if !inside && state.inside.remove(&entity) {
            Some(Transition::Left)
        } else {
            None
        }
    }

    /// Drop entities that no longer exist from both tracked sets.
    pub(crate) fn prune_entities(&self, gone: &[EntityId]) {
        let mut state = self.inner.state.lock();
        for entity in gone {
            state.tracked.remove(entity);
        }
        let TrackingState { tracked, inside, .. } = &mut *state;
        inside.retain(|entity| tracked.contains(entity));
    }

    pub(crate) fn notify_player(&self, transition: Transition) {
        let observers = {
            let observers = self.inner.observers.lock();
            match transition {
                Transition::Entered => observers.player_enter.snapshot(),
                Transition::Left => observers.player_leave.snapshot(),
            }
        };
        for observer in observers {
            observer(self);
        }
    }

    pub(crate) fn notify_entity(&self, entity: EntityId, transition: Transition) {
        let observers = {
            let observers = self.inner.observers.lock();
            match transition {
                Transition::Entered => observers.entity_enter.snapshot(),
                Transition::Left => observers.entity_leave.snapshot(),
            }
        };
        for observer in observers {
            observer(self, entity);
        }
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Region {}

impl std::hash::Hash for Region {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl std::fmt::Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Region")
            .field("id", &self.inner.id)
            .field("shape", &self.inner.shape)
            .finish_non_exhaustive()
    }
}
