//! Math utilities and types
//!
//! Provides the 2D math types used by screen-space games.

pub use nalgebra::{Rotation2, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::*;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }
}

/// Extension trait for [`Vec2`] with screen-space helpers
pub trait Vec2Ext {
    /// Rotate the vector around the origin by `degrees`.
    ///
    /// Positive angles rotate counter-clockwise in math axes, which reads as
    /// clockwise on a y-down screen. Every caller shares this convention.
    fn rotated_deg(&self, degrees: f32) -> Vec2;

    /// Unit vector pointing along +Y rotated by `degrees`
    fn from_heading_deg(degrees: f32) -> Vec2;
}

impl Vec2Ext for Vec2 {
    fn rotated_deg(&self, degrees: f32) -> Vec2 {
        Rotation2::new(utils::deg_to_rad(degrees)) * self
    }

    fn from_heading_deg(degrees: f32) -> Vec2 {
        Vec2::new(0.0, 1.0).rotated_deg(degrees)
    }
}
