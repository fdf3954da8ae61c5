//! Poller - the per-tick sweep that turns positions into enter/leave events.
//!
//! Each sweep:
//! 1. **Snapshot**: copy the registry's region list; regions added or removed
//!    by observers take effect from the next sweep
//! 2. **Player**: evaluate the player against every region that does not
//!    ignore it, firing enter/leave on state changes
//! 3. **Prune**: drop tracked entities the host reports as gone, with no
//!    leave event
//! 4. **Entities**: evaluate each surviving tracked entity, resolving its
//!    position at most once per sweep across all regions
//! 5. **Reset**: discard the position cache

mod cache;
mod provider;

pub use cache::*;
pub use provider::*;

#[cfg(test)]
pub(crate) use provider::testing;

use area_shapes::{EntityId, Vec3};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::TrackerConfig;
use crate::error::Result;
use crate::events::AreaEvent;
use crate::region::{Region, Transition};
use crate::registry::AreaRegistry;
use crate::schedule::TickScheduler;

/// What one sweep did.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub regions_visited: usize,
    /// Tracked entities dropped because the host reported them gone.
    pub entities_pruned: usize,
    /// Host position lookups performed (after memoization).
    pub position_lookups: usize,
    /// Events fired, in firing order.
    pub events: Vec<AreaEvent>,
}

impl SweepReport {
    /// Fold a later sweep's report into this one.
    pub fn merge(&mut self, other: SweepReport) {
        self.regions_visited += other.regions_visited;
        self.entities_pruned += other.entities_pruned;
        self.position_lookups += other.position_lookups;
        self.events.extend(other.events);
    }
}

/// Drives sweeps over an [`AreaRegistry`].
#[derive(Debug)]
pub struct AreaPoller {
    registry: AreaRegistry,
    cache: PositionCache,
    scheduler: TickScheduler,
    ticks: u64,
}

impl AreaPoller {
    /// Create a poller with the default 200 ms cadence.
    pub fn new(registry: AreaRegistry) -> Self {
        Self {
            registry,
            cache: PositionCache::new(),
            scheduler: TickScheduler::default(),
            ticks: 0,
        }
    }

    pub fn with_config(registry: AreaRegistry, config: &TrackerConfig) -> Result<Self> {
        let scheduler = TickScheduler::from_config(config)?;
        Ok(Self {
            scheduler,
            ..Self::new(registry)
        })
    }

    pub fn registry(&self) -> &AreaRegistry {
        &self.registry
    }

    /// Number of sweeps run so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Run one sweep over every tracked region.
    pub fn on_tick<P>(&mut self, provider: &P) -> SweepReport
    where
        P: PositionProvider + ?Sized,
    {
        let regions = self.registry.regions();
        let player_position = provider.player_position();
        let mut report = SweepReport::default();

        for region in &regions {
            report.regions_visited += 1;
            Self::sweep_player(region, player_position, &mut report);
            self.sweep_entities(region, provider, &mut report);
        }

        report.position_lookups = self.cache.lookups();
        self.cache.clear();
        self.ticks += 1;

        tracing::debug!(
            tick = self.ticks,
            regions = report.regions_visited,
            pruned = report.entities_pruned,
            lookups = report.position_lookups,
            events = report.events.len(),
            "area sweep complete"
        );
        report
    }

    /// Feed elapsed host time; runs however many sweeps are due.
    ///
    /// Returns `None` when no sweep was due, otherwise the merged report.
    pub fn update<P>(&mut self, elapsed: Duration, provider: &P) -> Option<SweepReport>
    where
        P: PositionProvider + ?Sized,
    {
        let due = self.scheduler.advance(elapsed);
        if due == 0 {
            return None;
        }

        let mut merged = SweepReport::default();
        for _ in 0..due {
            merged.merge(self.on_tick(provider));
        }
        Some(merged)
    }

    /// Drop every region and any cached state.
    pub fn shutdown(&mut self) {
        self.registry.clear();
        self.cache.clear();
        self.scheduler.reset();
        tracing::debug!(ticks = self.ticks, "area poller shut down");
    }

    fn sweep_player(region: &Region, position: Vec3, report: &mut SweepReport) {
        let Some(transition) = region.evaluate_player(position) else {
            return;
        };

        let event = match transition {
            Transition::Entered => AreaEvent::PlayerEntered {
                region: region.id(),
            },
            Transition::Left => AreaEvent::PlayerLeft {
                region: region.id(),
            },
        };
        tracing::trace!(%event, "player transition");
        report.events.push(event);
        region.notify_player(transition);
    }

    fn sweep_entities<P>(&mut self, region: &Region, provider: &P, report: &mut SweepReport)
    where
        P: PositionProvider + ?Sized,
    {
        let tracked = region.tracked_entities();
        if tracked.is_empty() {
            return;
        }

        let mut live: Vec<(EntityId, Vec3)> = Vec::with_capacity(tracked.len());
        let mut gone = Vec::new();
        for entity in tracked {
            match self.cache.resolve(entity, provider) {
                Some(position) => live.push((entity, position)),
                None => gone.push(entity),
            }
        }

        if !gone.is_empty() {
            region.prune_entities(&gone);
            report.entities_pruned += gone.len();
            tracing::debug!(region = %region.id(), pruned = ?gone, "pruned vanished entities");
        }

        for (entity, position) in live {
            let Some(transition) = region.evaluate_entity(entity, position) else {
                continue;
            };

            let event = match transition {
                Transition::Entered => AreaEvent::EntityEntered {
                    region: region.id(),
                    entity,
                },
                Transition::Left => AreaEvent::EntityLeft {
                    region: region.id(),
                    entity,
                },
            };
            tracing::trace!(%event, "entity transition");
            report.events.push(event);
            region.notify_entity(entity, transition);
        }
    }
}
