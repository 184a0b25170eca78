//! Game state machine
//!
//! Menu, play, high-score and name-entry screens. [`AsteroidsGame::tick`]
//! is called once per frame with the frame's input and elapsed time.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rust_engine::foundation::time::Countdown;
use rust_engine::input::{InputManager, KeyCode};

use crate::collision;
use crate::components::PlayerControls;
use crate::config::GameConfig;
use crate::highscores::HighScoreTable;
use crate::session::GameSession;

/// Shown when the last life is lost
pub const GAME_OVER_MESSAGE: &str = "GAME OVER";

/// Shown when a life is lost and some remain
pub const DEATH_MESSAGES: &[&str] = &[
    "Ouch! That rock had your name on it.",
    "Space is big. You still found the asteroid.",
    "Hull breach! Spare ship deployed.",
    "Try shooting them first.",
    "Insurance will not cover that.",
];

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Title menu
    Menu,
    /// A game in progress
    Playing,
    /// High-score listing
    HighScores,
    /// Typing a name for a new high score
    NameEntry,
}

/// The whole game: current screen, session and high scores
#[derive(Debug)]
pub struct AsteroidsGame {
    state: GameState,
    session: GameSession,
    high_scores: HighScoreTable,
    config: GameConfig,
    rng: StdRng,
    message: Option<&'static str>,
    message_timer: Countdown,
    game_over_timer: Countdown,
    name_buffer: String,
    quit_requested: bool,
}

impl AsteroidsGame {
    /// New game at the menu, drawing randomness from `rng`
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        Self {
            state: GameState::Menu,
            session: GameSession::new(&config),
            high_scores: HighScoreTable::new(config.rules.high_score_capacity),
            config,
            rng,
            message: None,
            message_timer: Countdown::idle(),
            game_over_timer: Countdown::idle(),
            name_buffer: String::new(),
            quit_requested: false,
        }
    }

    /// Deterministic game for a fixed seed
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Current screen
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Current (or last) session
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// High-score table
    pub fn high_scores(&self) -> &HighScoreTable {
        &self.high_scores
    }

    /// Configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Message overlaid on the play screen, if any
    pub fn message(&self) -> Option<&str> {
        self.message
    }

    /// Name typed so far on the name-entry screen
    pub fn name_buffer(&self) -> &str {
        &self.name_buffer
    }

    /// Whether the game over countdown is running
    pub fn is_game_over(&self) -> bool {
        self.game_over_timer.is_active()
    }

    /// Whether the player asked to quit
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &InputManager, dt: f32) {
        match self.state {
            GameState::Menu => self.tick_menu(input),
            GameState::HighScores => {
                if input.is_key_pressed(KeyCode::Escape) {
                    self.set_state(GameState::Menu);
                }
            }
            GameState::Playing => self.tick_playing(PlayerControls::from_input(input), dt),
            GameState::NameEntry => self.tick_name_entry(input),
        }
    }

    fn tick_menu(&mut self, input: &InputManager) {
        if input.is_key_pressed(KeyCode::Num1) {
            self.start_game();
        } else if input.is_key_pressed(KeyCode::Num2) {
            self.set_state(GameState::HighScores);
        } else if input.any_pressed(&[KeyCode::Num3, KeyCode::Escape]) {
            log::info!("Quit requested from menu");
            self.quit_requested = true;
        }
    }

    /// Begin a new game with a fresh session
    pub fn start_game(&mut self) {
        self.session = GameSession::new(&self.config);
        self.message = None;
        self.message_timer.cancel();
        self.game_over_timer.cancel();
        self.set_state(GameState::Playing);
    }

    fn tick_playing(&mut self, controls: PlayerControls, dt: f32) {
        if self.message_timer.tick(dt) {
            self.message = None;
        }

        if self.game_over_timer.is_active() {
            if self.game_over_timer.tick(dt) {
                self.finish_game();
            }
            return;
        }

        self.session.update(dt, controls, &mut self.rng);
        let report = collision::resolve(&mut self.session, &mut self.rng);
        if report.points > 0 {
            log::debug!("Score {} (+{})", self.session.score, report.points);
        }
        if report.player_hit {
            self.lose_life();
        }
    }

    fn lose_life(&mut self) {
        let rules = &self.config.rules;
        self.session.lives = self.session.lives.saturating_sub(1);
        self.session.respawn_player();
        self.session.clear_asteroids();

        if self.session.lives == 0 {
            log::info!("Game over with score {}", self.session.score);
            self.message = Some(GAME_OVER_MESSAGE);
            self.message_timer.cancel();
            self.game_over_timer.start(rules.game_over_seconds);
        } else {
            log::info!("Player hit, {} lives left", self.session.lives);
            self.message = DEATH_MESSAGES.choose(&mut self.rng).copied();
            self.message_timer.start(rules.death_message_seconds);
        }
    }

    fn finish_game(&mut self) {
        self.message = None;
        if self.high_scores.qualifies(self.session.score) {
            self.name_buffer.clear();
            self.set_state(GameState::NameEntry);
        } else {
            self.set_state(GameState::Menu);
        }
    }

    fn tick_name_entry(&mut self, input: &InputManager) {
        let max_len = self.config.rules.name_max_len;
        for &c in input.typed_chars() {
            if self.name_buffer.chars().count() < max_len {
                self.name_buffer.push(c);
            }
        }
        if input.is_key_pressed(KeyCode::Backspace) {
            self.name_buffer.pop();
        }

        if input.is_key_pressed(KeyCode::Enter) {
            let name = self.name_buffer.trim();
            if name.is_empty() {
                log::debug!("Empty name, score not recorded");
            } else {
                self.high_scores.insert(name, self.session.score);
            }
            self.name_buffer.clear();
            self.set_state(GameState::Menu);
        }
    }

    fn set_state(&mut self, state: GameState) {
        log::info!("{:?} -> {:?}", self.state, state);
        self.state = state;
    }
}
