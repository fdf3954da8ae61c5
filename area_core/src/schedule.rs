//! Fixed-interval tick scheduling driven by host frame time.

use std::time::Duration;

use crate::config::TrackerConfig;
use crate::error::ConfigError;

/// Turns elapsed host time into a count of due sweeps.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    max_ticks_per_update: u32,
    accumulated: Duration,
}

impl TickScheduler {
    /// Create a scheduler. A zero interval is raised to one millisecond and
    /// a zero tick budget to one.
    pub fn new(interval: Duration, max_ticks_per_update: u32) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            max_ticks_per_update: max_ticks_per_update.max(1),
            accumulated: Duration::ZERO,
        }
    }

    pub fn from_config(config: &TrackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.tick_interval(), config.max_ticks_per_update))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Record `elapsed` host time and return how many sweeps are due now.
    ///
    /// Never returns more than the tick budget; backlog beyond it is dropped
    /// and only the sub-interval remainder carries over.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;

        let interval_nanos = self.interval.as_nanos();
        let accumulated_nanos = self.accumulated.as_nanos();
        let due = accumulated_nanos / interval_nanos;
        // The remainder is below the interval, so it fits in a u64.
        self.accumulated = Duration::from_nanos((accumulated_nanos % interval_nanos) as u64);

        due.min(self.max_ticks_per_update as u128) as u32
    }

    /// Time carried over towards the next sweep.
    pub fn pending(&self) -> Duration {
        self.accumulated
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        let config = TrackerConfig::default();
        Self::new(config.tick_interval(), config.max_ticks_per_update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval() {
        let scheduler = TickScheduler::default();
        assert_eq!(scheduler.interval(), Duration::from_millis(200));
    }

    #[test]
    fn test_accumulates_frames() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(200), 1);

        assert_eq!(scheduler.advance(Duration::from_millis(16)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(150)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(50)), 1);
        assert_eq!(scheduler.pending(), Duration::from_millis(16));
    }

    #[test]
    fn test_backlog_capped() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(200), 1);
        assert_eq!(scheduler.advance(Duration::from_millis(1050)), 1);
        assert_eq!(scheduler.pending(), Duration::from_millis(50));

        let mut generous = TickScheduler::new(Duration::from_millis(200), 3);
        assert_eq!(generous.advance(Duration::from_millis(1050)), 3);
        assert_eq!(generous.advance(Duration::from_millis(450)), 2);
    }

    #[test]
    fn test_zero_settings_clamped() {
        let mut scheduler = TickScheduler::new(Duration::ZERO, 0);
        assert_eq!(scheduler.interval(), Duration::from_millis(1));
        assert_eq!(scheduler.advance(Duration::from_millis(10)), 1);
    }

    #[test]
    fn test_from_config_validates() {
        let config = TrackerConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            TickScheduler::from_config(&config),
            Err(ConfigError::InvalidInterval)
        ));

        let config = TrackerConfig {
            tick_interval_ms: 50,
            ..Default::default()
        };
        let scheduler = TickScheduler::from_config(&config).unwrap();
        assert_eq!(scheduler.interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_reset() {
        let mut scheduler = TickScheduler::default();
        scheduler.advance(Duration::from_millis(150));
        scheduler.reset();
        assert_eq!(scheduler.pending(), Duration::ZERO);
    }
}
