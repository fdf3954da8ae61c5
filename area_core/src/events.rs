//! Transition events produced by a sweep.

use area_shapes::EntityId;
use serde::{Deserialize, Serialize};

use crate::region::RegionId;

/// A boundary crossing detected by the poller.
///
/// Observers registered on the region are notified for each of these; the
/// same events are also collected into the sweep's [`SweepReport`](crate::SweepReport).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaEvent {
    PlayerEntered { region: RegionId },
    PlayerLeft { region: RegionId },
    EntityEntered { region: RegionId, entity: EntityId },
    EntityLeft { region: RegionId, entity: EntityId },
}

impl AreaEvent {
    /// The region whose boundary was crossed.
    pub fn region(&self) -> RegionId {
        match self {
            AreaEvent::PlayerEntered { region }
            | AreaEvent::PlayerLeft { region }
            | AreaEvent::EntityEntered { region, .. }
            | AreaEvent::EntityLeft { region, .. } => *region,
        }
    }

    /// The tracked entity involved, `None` for player events.
    pub fn entity(&self) -> Option<EntityId> {
        match self {
            AreaEvent::EntityEntered { entity, .. } | AreaEvent::EntityLeft { entity, .. } => {
                Some(*entity)
            }
            _ => None,
        }
    }

    pub fn is_enter(&self) -> bool {
        matches!(
            self,
            AreaEvent::PlayerEntered { .. } | AreaEvent::EntityEntered { .. }
        )
    }
}

impl std::fmt::Display for AreaEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AreaEvent::PlayerEntered { region } => write!(f, "player entered {}", region),
            AreaEvent::PlayerLeft { region } => write!(f, "player left {}", region),
            AreaEvent::EntityEntered { region, entity } => {
                write!(f, "entity {} entered {}", entity, region)
            }
            AreaEvent::EntityLeft { region, entity } => {
                write!(f, "entity {} left {}", entity, region)
            }
        }
    }
}
