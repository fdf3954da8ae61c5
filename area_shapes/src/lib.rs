//! # Area Shapes
//!
//! Geometry and identifiers shared by the AreaLib engine.
//! This crate holds plain values only: shapes answer "is this point inside",
//! entity handles are opaque host integers. It carries no tracking state.

pub mod entity;
pub mod shapes;

pub use entity::*;
pub use shapes::*;

pub use glam::{Vec2, Vec3};
