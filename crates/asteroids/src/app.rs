//! Engine integration

use rust_engine::backend::ScriptedEvents;
use rust_engine::input::KeyCode;
use rust_engine::{AppError, Application, Engine};

use crate::assets::SpriteCatalog;
use crate::game::AsteroidsGame;
use crate::view;

/// Runs an [`AsteroidsGame`] inside the engine loop
pub struct AsteroidsApp {
    game: AsteroidsGame,
    sprites: Option<SpriteCatalog>,
}

impl AsteroidsApp {
    /// Wrap `game`; sprites are loaded in `initialize`
    pub fn new(game: AsteroidsGame) -> Self {
        Self { game, sprites: None }
    }

    /// The game being run
    pub fn game(&self) -> &AsteroidsGame {
        &self.game
    }
}

impl Application for AsteroidsApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let sprites = SpriteCatalog::load(engine.assets_mut(), &self.game.config().assets)?;
        self.sprites = Some(sprites);
        log::info!("Asteroids ready");
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        self.game.tick(engine.input(), delta_time);
        if self.game.quit_requested() {
            engine.quit();
        }
        Ok(())
    }

    fn render(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let sprites = self
            .sprites
            .as_ref()
            .ok_or_else(|| AppError::GameLogic("render called before initialize".to_string()))?;
        view::draw(&self.game, sprites, engine.renderer_mut());
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        let session = self.game.session();
        log::info!(
            "Last game: score {}, {:.1}s played",
            session.score,
            session.elapsed
        );
        for (rank, entry) in self.game.high_scores().entries().iter().enumerate() {
            log::info!("#{} {} {}", rank + 1, entry.name, entry.score);
        }
    }
}

/// Input timeline for unattended runs at 60 frames per second.
///
/// Starts a game, flies around firing, then types a name and presses quit.
/// The name only lands if the game has ended in a high score by then, and
/// quit only works from the menu; the final close request ends the run
/// either way.
pub fn attract_script() -> ScriptedEvents {
    let second = |s: u64| s * 60;

    ScriptedEvents::new()
        .tap(second(1), KeyCode::Num1)
        .hold(second(2), second(40), KeyCode::Space)
        .hold(second(2), second(4), KeyCode::D)
        .hold(second(4), second(6), KeyCode::W)
        .hold(second(7), second(10), KeyCode::A)
        .hold(second(10), second(11), KeyCode::S)
        .hold(second(12), second(20), KeyCode::Right)
        .hold(second(20), second(24), KeyCode::Up)
        .hold(second(25), second(35), KeyCode::Left)
        .type_text(second(42), "ATTRACT")
        .tap(second(44), KeyCode::Enter)
        .tap(second(46), KeyCode::Num3)
        .close_at(second(48))
}
