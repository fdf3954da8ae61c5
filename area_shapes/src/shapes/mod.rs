//! Shapes - pure containment predicates owned by regions.
//!
//! Every shape answers one question: is a point inside it. Boundaries are
//! inclusive for all built-in shapes.

mod boxes;
mod round;

pub use boxes::*;
pub use round::*;

use glam::Vec3;
use std::sync::Arc;

/// A geometric volume that can test whether a point lies inside it.
///
/// Implement this for custom shapes and wrap them with [`Shape::custom`].
/// Implementations must be pure and cheap; the engine calls them for every
/// tracked entity on every tick.
pub trait Containment {
    /// Returns whether `point` lies inside this volume.
    fn contains(&self, point: Vec3) -> bool;
}

/// The shape of a region.
#[derive(Clone)]
pub enum Shape {
    /// Full 3D ball.
    Sphere(Sphere),
    /// Infinite vertical cylinder; the Z axis is ignored.
    Circle(Circle),
    /// Axis-aligned rectangle on the X/Y plane; the Z axis is ignored.
    Box2D(Box2D),
    /// Axis-aligned box on all three axes.
    Box3D(Box3D),
    /// User-defined containment test.
    Custom(Arc<dyn Containment + Send + Sync>),
}

impl Shape {
    /// Create a sphere shape.
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Shape::Sphere(Sphere::new(center, radius))
    }

    /// Create a circle shape (sphere projected onto the X/Y plane).
    pub fn circle(center: Vec3, radius: f32) -> Self {
        Shape::Circle(Circle::new(center, radius))
    }

    /// Create a two-axis box from any two opposite corners.
    pub fn box_2d(a: glam::Vec2, b: glam::Vec2) -> Self {
        Shape::Box2D(Box2D::new(a, b))
    }

    /// Create a three-axis box from any two opposite corners.
    pub fn box_3d(a: Vec3, b: Vec3) -> Self {
        Shape::Box3D(Box3D::new(a, b))
    }

    /// Wrap a user-defined containment test.
    pub fn custom(shape: impl Containment + Send + Sync + 'static) -> Self {
        Shape::Custom(Arc::new(shape))
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Circle(_) => "circle",
            Shape::Box2D(_) => "box2d",
            Shape::Box3D(_) => "box3d",
            Shape::Custom(_) => "custom",
        }
    }
}

impl Containment for Shape {
    fn contains(&self, point: Vec3) -> bool {
        match self {
            Shape::Sphere(s) => s.contains(point),
            Shape::Circle(c) => c.contains(point),
            Shape::Box2D(b) => b.contains(point),
            Shape::Box3D(b) => b.contains(point),
            Shape::Custom(custom) => custom.contains(point),
        }
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Sphere(s) => s.fmt(f),
            Shape::Circle(c) => c.fmt(f),
            Shape::Box2D(b) => b.fmt(f),
            Shape::Box3D(b) => b.fmt(f),
            Shape::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Box2D> for Shape {
    fn from(rect: Box2D) -> Self {
        Shape::Box2D(rect)
    }
}

impl From<Box3D> for Shape {
    fn from(rect: Box3D) -> Self {
        Shape::Box3D(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Everything above the water line.
    struct AboveSeaLevel;

    impl Containment for AboveSeaLevel {
        fn contains(&self, point: Vec3) -> bool {
            point.z > 0.0
        }
    }

    #[test]
    fn test_shape_dispatch() {
        let shapes = [
            Shape::sphere(Vec3::ZERO, 1.0),
            Shape::circle(Vec3::ZERO, 1.0),
            Shape::box_2d(glam::Vec2::splat(-1.0), glam::Vec2::splat(1.0)),
            Shape::box_3d(Vec3::splat(-1.0), Vec3::splat(1.0)),
        ];

        for shape in &shapes {
            assert!(shape.contains(Vec3::ZERO), "{} should contain origin", shape.kind());
            assert!(
                !shape.contains(Vec3::new(5.0, 0.0, 0.0)),
                "{} should exclude (5,0,0)",
                shape.kind()
            );
        }
    }

    #[test]
    fn test_vertical_axis_handling() {
        let high = Vec3::new(0.0, 0.0, 100.0);

        assert!(!Shape::sphere(Vec3::ZERO, 1.0).contains(high));
        assert!(Shape::circle(Vec3::ZERO, 1.0).contains(high));
        assert!(Shape::box_2d(glam::Vec2::splat(-1.0), glam::Vec2::splat(1.0)).contains(high));
        assert!(!Shape::box_3d(Vec3::splat(-1.0), Vec3::splat(1.0)).contains(high));
    }

    #[test]
    fn test_custom_shape() {
        let shape = Shape::custom(AboveSeaLevel);

        assert_eq!(shape.kind(), "custom");
        assert!(shape.contains(Vec3::new(0.0, 0.0, 1.0)));
        assert!(!shape.contains(Vec3::new(0.0, 0.0, -1.0)));
        assert_eq!(format!("{:?}", shape), "Custom(..)");
    }

    #[test]
    fn test_from_variants() {
        let shape: Shape = Sphere::new(Vec3::ZERO, 2.0).into();
        assert_eq!(shape.kind(), "sphere");

        let shape: Shape = Box3D::new(Vec3::ONE, Vec3::ZERO).into();
        assert_eq!(shape.kind(), "box3d");
    }
}
