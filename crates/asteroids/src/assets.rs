//! Game sprites
//!
//! Everything is loaded once at startup. A missing or unreadable file is an
//! error the caller treats as fatal.

use rust_engine::assets::{AssetError, AssetManager, ImageData, ImageHandle};

use crate::config::AssetPaths;

/// Shot sprite edge length; shots are drawn as a filled square scaled to
/// their diameter
const SHOT_SPRITE_SIZE: u32 = 4;

/// Image lookup used when drawing entities
pub trait SpriteLookup {
    /// Player ship
    fn ship(&self) -> ImageHandle;

    /// Asteroid sprite for `variant` in `1..=variants`
    fn asteroid(&self, variant: u32) -> ImageHandle;

    /// Shot
    fn shot(&self) -> ImageHandle;
}

/// Sprites loaded through the engine asset manager
#[derive(Debug, Clone)]
pub struct SpriteCatalog {
    ship: ImageHandle,
    asteroids: Vec<ImageHandle>,
    shot: ImageHandle,
}

impl SpriteCatalog {
    /// Load the ship and every asteroid variant
    pub fn load(assets: &mut AssetManager, paths: &AssetPaths) -> Result<Self, AssetError> {
        let ship = assets.load_image(&paths.ship)?;

        let asteroids = (1..=paths.asteroid_variants)
            .map(|variant| assets.load_image(&paths.asteroid_file(variant)))
            .collect::<Result<Vec<_>, _>>()?;

        let shot = assets.insert_image(ImageData::solid_color(
            SHOT_SPRITE_SIZE,
            SHOT_SPRITE_SIZE,
            [255, 255, 255, 255],
        ));

        log::info!("Loaded {} sprites", asteroids.len() + 2);

        Ok(Self { ship, asteroids, shot })
    }

    /// Number of asteroid variants
    pub fn asteroid_variants(&self) -> usize {
        self.asteroids.len()
    }
}

impl SpriteLookup for SpriteCatalog {
    fn ship(&self) -> ImageHandle {
        self.ship
    }

    fn asteroid(&self, variant: u32) -> ImageHandle {
        // Variants are 1-based; out of range ids wrap instead of panicking
        let index = variant.saturating_sub(1) as usize % self.asteroids.len().max(1);
        self.asteroids.get(index).copied().unwrap_or(self.ship)
    }

    fn shot(&self) -> ImageHandle {
        self.shot
    }
}
