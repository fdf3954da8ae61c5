//! # Area Core
//!
//! Region tracking engine. Regions wrap a shape from `area_shapes`; the
//! poller checks the player and any tracked entities against every
//! registered region once per tick and notifies observers on boundary
//! crossings.
//!
//! ## Core Components
//!
//! - **region**: tracking state, attribute store, and observers of one region
//! - **registry**: the explicitly owned set of active regions
//! - **poller**: the per-tick sweep, position cache, and host provider trait
//! - **schedule**: fixed-interval tick timing from host frame deltas
//!
//! ## Threading
//!
//! Regions and the registry are internally locked handles, but the poller
//! expects a single sweep at a time. No lock is held while observers run.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod poller;
pub mod region;
pub mod registry;
pub mod schedule;

pub use config::*;
pub use error::{AreaError, ConfigError};
pub use events::*;
pub use logging::{default_env_filter, init_logging};
pub use poller::*;
pub use region::*;
pub use registry::*;
pub use schedule::*;

pub use area_shapes::{
    Box2D, Box3D, Circle, Containment, EntityId, Shape, Sphere, Vec2, Vec3,
};
