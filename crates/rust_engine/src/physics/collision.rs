//! 2D collision primitives
//!
//! Narrow-phase tests for the circle-only worlds of arcade games.

use crate::foundation::math::Vec2;

/// A bounding circle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCircle {
    /// The center position of the circle in screen space
    pub center: Vec2,
    /// The radius of the circle
    pub radius: f32,
}

impl BoundingCircle {
    /// Creates a new bounding circle with the given center and radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this circle overlaps another.
    ///
    /// Strict: circles that only touch do not overlap.
    pub fn intersects(&self, other: &BoundingCircle) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared < radius_sum * radius_sum
    }
}

/// Axis-aligned rectangle, y-down screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner
    pub min: Vec2,
    /// Maximum corner
    pub max: Vec2,
}

impl Rect {
    /// Rectangle from the origin to `width` x `height`
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::zeros(),
            max: Vec2::new(width, height),
        }
    }

    /// Grow every side by `margin`
    pub fn expanded(&self, margin: f32) -> Self {
        let pad = Vec2::new(margin, margin);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Width
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Whether `circle` lies entirely outside this rectangle
    pub fn excludes(&self, circle: &BoundingCircle) -> bool {
        circle.center.x + circle.radius < self.min.x
            || circle.center.x - circle.radius > self.max.x
            || circle.center.y + circle.radius < self.min.y
            || circle.center.y - circle.radius > self.max.y
    }
}
