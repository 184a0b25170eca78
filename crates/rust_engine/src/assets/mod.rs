//! Asset management system

pub mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;
use crate::engine::AssetConfig;
use crate::foundation::collections::{HandleMap, TypedHandle};
use std::path::PathBuf;

/// Handle to an image owned by the [`AssetManager`]
pub type ImageHandle = TypedHandle<ImageData>;

/// Asset management system
///
/// Resolves relative paths against the configured search paths and keeps
/// decoded images alive for the whole run.
pub struct AssetManager {
    images: HandleMap<ImageData>,
    config: AssetConfig,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new(config: &AssetConfig) -> Self {
        Self {
            images: HandleMap::new(),
            config: config.clone(),
        }
    }

    /// Find `path` in the search paths, falling back to `path` itself
    pub fn resolve(&self, path: &str) -> Result<PathBuf, AssetError> {
        let found = self
            .config
            .search_paths
            .iter()
            .map(|search_path| PathBuf::from(search_path).join(path))
            .find(|candidate| candidate.exists());

        let file_path = found.unwrap_or_else(|| PathBuf::from(path));
        if file_path.exists() {
            Ok(file_path)
        } else {
            Err(AssetError::NotFound(path.to_string()))
        }
    }

    /// Load an image from disk
    ///
    /// # Arguments
    /// * `path` - Path to the image file (relative to search paths)
    pub fn load_image(&mut self, path: &str) -> Result<ImageHandle, AssetError> {
        let file_path = self.resolve(path)?;
        let image = ImageData::from_file(&file_path)?;
        Ok(self.insert_image(image))
    }

    /// Register an image created at runtime
    pub fn insert_image(&mut self, image: ImageData) -> ImageHandle {
        ImageHandle::new(self.images.insert(image))
    }

    /// Get an image by handle
    pub fn image(&self, handle: ImageHandle) -> Option<&ImageData> {
        self.images.get(handle.key())
    }

    /// Number of loaded images
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),
}
