//! # Asteroids
//!
//! A small arcade asteroids game on top of `rust_engine`.
//!
//! The ship turns and thrusts around a fixed screen, shoots, and breaks
//! asteroids that drift in from the edges. Large asteroids split into two
//! smaller ones; the smallest are destroyed outright. Score and lives are
//! kept per game, and the best scores of a run go into a high-score table.
//!
//! ## Layout
//!
//! - [`components`]: entity types and their per-tick rules
//! - [`spawner`]: periodic asteroid generator
//! - [`session`]: live entity sets for one game
//! - [`collision`]: player and shot collision pass
//! - [`highscores`]: bounded score table
//! - [`game`]: screen state machine
//! - [`view`]: drawing
//! - [`app`]: engine integration

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss)]

pub mod app;
pub mod assets;
pub mod collision;
pub mod components;
pub mod config;
pub mod game;
pub mod highscores;
pub mod session;
pub mod spawner;
pub mod view;

pub use app::AsteroidsApp;
pub use config::GameConfig;
pub use game::{AsteroidsGame, GameState};
