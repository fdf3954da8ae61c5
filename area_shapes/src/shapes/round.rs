//! Radius-based shapes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::Containment;

/// A ball around `center`. Points at exactly `radius` are inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere. The sign of `radius` is ignored.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Containment for Sphere {
    fn contains(&self, point: Vec3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

/// A sphere projected onto the X/Y plane: an infinitely tall cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: Vec3,
    radius: f32,
}

impl Circle {
    /// Create a new circle. Only the X/Y components of `center` matter.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Containment for Circle {
    fn contains(&self, point: Vec3) -> bool {
        self.center.truncate().distance_squared(point.truncate()) <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_boundary_inclusive() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0);

        assert!(sphere.contains(Vec3::new(2.0, 0.0, 0.0)));
        assert!(sphere.contains(Vec3::new(0.0, 0.0, -2.0)));
        assert!(!sphere.contains(Vec3::new(2.001, 0.0, 0.0)));
        assert!(!sphere.contains(Vec3::new(1.5, 1.5, 0.0)));
    }

    #[test]
    fn test_zero_radius_matches_center_only() {
        let center = Vec3::new(3.0, -4.0, 5.0);
        let sphere = Sphere::new(center, 0.0);
        let circle = Circle::new(center, 0.0);

        assert!(sphere.contains(center));
        assert!(!sphere.contains(center + Vec3::new(0.01, 0.0, 0.0)));

        assert!(circle.contains(center));
        assert!(circle.contains(Vec3::new(3.0, -4.0, 999.0)));
        assert!(!circle.contains(Vec3::new(3.01, -4.0, 5.0)));
    }

    #[test]
    fn test_circle_ignores_height() {
        let circle = Circle::new(Vec3::new(10.0, 10.0, 50.0), 1.0);

        assert!(circle.contains(Vec3::new(10.0, 11.0, -300.0)));
        assert!(!circle.contains(Vec3::new(10.0, 11.5, 50.0)));
    }

    #[test]
    fn test_negative_radius() {
        let sphere = Sphere::new(Vec3::ZERO, -3.0);
        assert_eq!(sphere.radius(), 3.0);
        assert!(sphere.contains(Vec3::new(0.0, 3.0, 0.0)));
    }
}
