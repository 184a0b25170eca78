//! # Rust Engine
//!
//! A small engine layer for 2D arcade games.
//!
//! ## Features
//!
//! - **Frame Loop**: poll events, update, render, present, capped frame rate
//! - **Input**: held/pressed key tracking and typed text
//! - **Rendering Contract**: sprite and text drawing behind a trait
//! - **Asset Management**: image loading with search paths and typed handles
//! - **Configuration**: TOML/RON backed config files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_engine::prelude::*;
//! use rust_engine::backend::{HeadlessRenderer, ScriptedEvents};
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         // Initialize your game
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
//!         // Update game logic
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, engine: &mut Engine) {
//!         // Cleanup resources
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let renderer = Box::new(HeadlessRenderer::new(1280, 720));
//!     let events = Box::new(ScriptedEvents::new().close_at(600));
//!     Engine::run(config, renderer, events, &mut MyApp)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod assets;
pub mod backend;
pub mod config;
pub mod events;
pub mod input;
pub mod physics;
pub mod render;

mod application;
mod engine;

pub use application::{Application, AppError, AppEvent};
pub use engine::{Engine, EngineConfig, EngineError, AssetConfig, WindowConfig};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError, AppEvent,
        Engine, EngineConfig, EngineError,
        foundation::{
            math::{Vec2, Vec2Ext},
            time::{Countdown, Timer},
        },
        assets::{AssetManager, ImageHandle},
        events::EventSource,
        input::{InputManager, KeyCode},
        physics::{BoundingCircle, Rect},
        render::{Color, Renderer},
    };
}
