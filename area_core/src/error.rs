//! Error types for the tracking engine and its configuration.

use area_shapes::EntityId;
use thiserror::Error;

use crate::region::RegionId;

/// Errors surfaced synchronously at the API boundary.
///
/// Stale entities are never errors; the poller prunes them silently.
#[derive(Debug, Error)]
pub enum AreaError {
    /// The null entity handle was passed where a live entity is required.
    #[error("invalid entity handle {0}")]
    InvalidEntity(EntityId),

    /// A region id was looked up that the registry does not hold.
    #[error("region {0} is not tracked")]
    UnknownRegion(RegionId),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can occur when loading, saving, or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to parse TOML content.
    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    /// Failed to serialize config to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),

    #[error("tick interval must be greater than zero")]
    InvalidInterval,

    #[error("max_ticks_per_update must be at least 1")]
    InvalidTickBudget,
}

pub type Result<T, E = AreaError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AreaError::InvalidEntity(EntityId::NONE);
        assert_eq!(err.to_string(), "invalid entity handle #0");

        let err: AreaError = ConfigError::InvalidInterval.into();
        assert_eq!(err.to_string(), "tick interval must be greater than zero");
        assert!(matches!(err, AreaError::Config(ConfigError::InvalidInterval)));
    }
}
