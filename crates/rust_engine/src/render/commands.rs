//! Draw commands
//!
//! Value form of a [`Renderer`](super::Renderer) call, used by backends that
//! buffer a frame before presenting it.

use super::Color;
use crate::assets::ImageHandle;
use crate::foundation::math::Vec2;

/// A single recorded draw
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Frame clear
    Clear(Color),

    /// Sprite draw
    Sprite {
        /// Image to draw
        image: ImageHandle,
        /// Screen-space center
        center: Vec2,
        /// Rotation in degrees
        rotation_degrees: f32,
        /// Longest side in pixels
        extent: f32,
    },

    /// Text draw
    Text {
        /// Text content
        text: String,
        /// Top-left corner
        position: Vec2,
        /// Text color
        color: Color,
    },
}

impl DrawCommand {
    /// Text content if this is a text draw
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Whether this draw uses `image`
    pub fn uses_image(&self, image: ImageHandle) -> bool {
        matches!(self, Self::Sprite { image: drawn, .. } if *drawn == image)
    }
}
