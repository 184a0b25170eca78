//! Asteroids
//!
//! Runs the game on the headless backend with an attract-mode input script.

use asteroids::app::attract_script;
use asteroids::{AsteroidsApp, AsteroidsGame, GameConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_engine::backend::HeadlessRenderer;
use rust_engine::foundation::logging;
use rust_engine::{AssetConfig, Engine, EngineConfig, WindowConfig};

const CONFIG_FILE: &str = "asteroids.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    log::info!("Starting Asteroids...");

    let config = GameConfig::load(CONFIG_FILE).map_err(|e| {
        log::error!("Failed to load {}: {}", CONFIG_FILE, e);
        e
    })?;

    let width = config.screen.width as u32;
    let height = config.screen.height as u32;
    let engine_config = EngineConfig {
        window: WindowConfig {
            title: "Asteroids".to_string(),
            width,
            height,
        },
        assets: AssetConfig {
            search_paths: vec!["resources".to_string()],
        },
        target_fps: 60,
        max_frames: None,
    };

    let game = AsteroidsGame::new(config, StdRng::from_entropy());
    let mut app = AsteroidsApp::new(game);

    Engine::run(
        engine_config,
        Box::new(HeadlessRenderer::new(width, height)),
        Box::new(attract_script()),
        &mut app,
    )
    .map_err(|e| {
        log::error!("Asteroids failed: {}", e);
        e
    })?;

    log::info!("Asteroids exited cleanly");
    Ok(())
}
