//! Physics module for collision detection
//!
//! Provides circle overlap tests and screen-bounds checks.

pub mod collision;

pub use collision::{BoundingCircle, Rect};
