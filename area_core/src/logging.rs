//! Log subscriber setup for hosts that do not install their own.
//!
//! The engine itself only emits `debug` and `trace` events through `tracing`.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TrackerConfig;

const DEFAULT_FILTER: &str = "info";

/// Install a console subscriber.
///
/// `RUST_LOG` wins over the config's `log_level`. Fails if a global
/// subscriber is already set.
pub fn init_logging(config: Option<&TrackerConfig>) -> Result<(), TryInitError> {
    let filter_str = match config {
        Some(config) if !config.log_level.is_empty() => config.log_level.as_str(),
        _ => DEFAULT_FILTER,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
}

/// The filter used when neither `RUST_LOG` nor a config sets one.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter = default_env_filter();
        assert!(format!("{}", filter).contains("info"));
    }

    #[test]
    fn test_engine_filter_directive() {
        let filter = EnvFilter::new("info,area_core=trace");
        let filter_str = format!("{}", filter);
        assert!(filter_str.contains("area_core=trace"));
    }
}
