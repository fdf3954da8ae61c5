//! Axis-aligned boxes.
//!
//! Both boxes accept their corners in any order and store the componentwise
//! minimum and maximum, so `Box3D::new(a, b) == Box3D::new(b, a)`.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::Containment;

/// Axis-aligned rectangle on the X/Y plane. Height is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Vec2; 2]", into = "[Vec2; 2]")]
pub struct Box2D {
    min: Vec2,
    max: Vec2,
}

impl Box2D {
    /// Create a rectangle from two opposite corners.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }
}

impl Containment for Box2D {
    fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

impl From<[Vec2; 2]> for Box2D {
    fn from([a, b]: [Vec2; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<Box2D> for [Vec2; 2] {
    fn from(rect: Box2D) -> Self {
        [rect.min, rect.max]
    }
}

/// Axis-aligned box on all three axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Vec3; 2]", into = "[Vec3; 2]")]
pub struct Box3D {
    min: Vec3,
    max: Vec3,
}

impl Box3D {
    /// Create a box from two opposite corners.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }
}

impl Containment for Box3D {
    fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

impl From<[Vec3; 2]> for Box3D {
    fn from([a, b]: [Vec3; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<Box3D> for [Vec3; 2] {
    fn from(rect: Box3D) -> Self {
        [rect.min, rect.max]
    }
}
