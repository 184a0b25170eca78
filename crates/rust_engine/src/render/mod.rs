//! Rendering contract
//!
//! The renderer is a passive library: it accepts image handles, screen-space
//! positions and text, and knows nothing about entities, timing or input.
//! Concrete backends live in [`crate::backend`].

pub mod commands;

pub use commands::DrawCommand;

use crate::assets::ImageHandle;
use crate::foundation::math::Vec2;
use thiserror::Error;

/// RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque red
    pub const RED: Self = Self::rgb(1.0, 0.25, 0.25);
    /// Opaque yellow
    pub const YELLOW: Self = Self::rgb(1.0, 0.9, 0.2);
    /// Mid grey
    pub const GREY: Self = Self::rgb(0.6, 0.6, 0.6);

    /// Opaque color from RGB components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Renderer errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The backend could not present the frame
    #[error("Present failed: {0}")]
    PresentFailed(String),

    /// A draw referenced an image the backend does not know
    #[error("Unknown image handle")]
    UnknownImage,
}

/// Drawing surface consumed by games.
///
/// A frame is `clear`, any number of draws, then `present`.
pub trait Renderer {
    /// Screen size in pixels
    fn size(&self) -> (u32, u32);

    /// Fill the frame with `color`
    fn clear(&mut self, color: Color);

    /// Draw `image` centered on `center`, rotated counter-clockwise on
    /// screen by `rotation_degrees`, scaled so its longest side spans
    /// `extent` pixels
    fn draw_sprite(&mut self, image: ImageHandle, center: Vec2, rotation_degrees: f32, extent: f32);

    /// Draw `text` with its top-left corner at `position`
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color);

    /// Finish the frame
    fn present(&mut self) -> Result<(), RenderError>;
}
