//! Game configuration
//!
//! Every tunable lives here. Defaults match the classic arcade feel; a
//! `asteroids.toml` next to the binary can override any subset of them.

use rust_engine::config::{Config, ConfigError};
use serde::{Deserialize, Serialize};

/// Screen width in pixels
pub const SCREEN_WIDTH: f32 = 1280.0;
/// Screen height in pixels
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Player collision radius
pub const PLAYER_RADIUS: f32 = 20.0;
/// Player turn rate in degrees per second
pub const PLAYER_TURN_SPEED: f32 = 300.0;
/// Player thrust speed in pixels per second
pub const PLAYER_SPEED: f32 = 200.0;
/// Shot speed in pixels per second
pub const PLAYER_SHOOT_SPEED: f32 = 500.0;
/// Seconds between shots
pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.3;
/// Shot collision radius
pub const SHOT_RADIUS: f32 = 5.0;

/// Radius of the smallest asteroid, and the step between tiers
pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
/// Number of asteroid tiers
pub const ASTEROID_KINDS: u32 = 3;
/// Radius of the largest asteroid
pub const ASTEROID_MAX_RADIUS: f32 = ASTEROID_MIN_RADIUS * ASTEROID_KINDS as f32;
/// Seconds between spawns
pub const ASTEROID_SPAWN_RATE: f32 = 0.8;

/// Game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen settings
    pub screen: ScreenConfig,

    /// Player ship settings
    pub player: PlayerConfig,

    /// Asteroid field settings
    pub asteroids: AsteroidConfig,

    /// Scoring, lives and timers
    pub rules: RulesConfig,

    /// Sprite files
    pub assets: AssetPaths,
}

/// Screen configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Width in pixels
    pub width: f32,

    /// Height in pixels
    pub height: f32,
}

/// Player ship configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Collision radius
    pub radius: f32,

    /// Degrees per second
    pub turn_speed: f32,

    /// Pixels per second while thrusting
    pub speed: f32,

    /// Shot speed in pixels per second
    pub shoot_speed: f32,

    /// Seconds between shots
    pub shoot_cooldown: f32,

    /// Shot collision radius
    pub shot_radius: f32,
}

/// Asteroid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Radius of tier 1, and the radius lost per split
    pub min_radius: f32,

    /// Number of tiers; the largest asteroid has `min_radius * kinds`
    pub kinds: u32,

    /// Seconds between spawns
    pub spawn_rate: f32,

    /// Slowest spawn speed in pixels per second
    pub speed_min: f32,

    /// Fastest spawn speed in pixels per second
    pub speed_max: f32,

    /// Spawn heading deviates from the edge normal by up to this many degrees
    pub spawn_angle_spread: f32,

    /// Smallest split angle in degrees
    pub split_angle_min: f32,

    /// Largest split angle in degrees
    pub split_angle_max: f32,

    /// Child speed relative to the parent
    pub split_speed_factor: f32,

    /// Entities this far beyond the screen edge are culled
    pub despawn_margin: f32,
}

/// Scoring, lives and timer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Lives at the start of a game
    pub starting_lives: u32,

    /// Points per asteroid hit
    pub points_per_asteroid: u32,

    /// Seconds a death message stays up
    pub death_message_seconds: f32,

    /// Seconds the game-over screen holds before leaving play
    pub game_over_seconds: f32,

    /// Entries kept in the high-score table
    pub high_score_capacity: usize,

    /// Longest accepted player name
    pub name_max_len: usize,
}

/// Sprite file names, resolved against the engine search paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Player ship sprite
    pub ship: String,

    /// Asteroid sprite pattern; `{}` is replaced by the variant number
    pub asteroid_pattern: String,

    /// Number of asteroid sprite variants
    pub asteroid_variants: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: PLAYER_RADIUS,
            turn_speed: PLAYER_TURN_SPEED,
            speed: PLAYER_SPEED,
            shoot_speed: PLAYER_SHOOT_SPEED,
            shoot_cooldown: PLAYER_SHOOT_COOLDOWN,
            shot_radius: SHOT_RADIUS,
        }
    }
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            min_radius: ASTEROID_MIN_RADIUS,
            kinds: ASTEROID_KINDS,
            spawn_rate: ASTEROID_SPAWN_RATE,
            speed_min: 40.0,
            speed_max: 100.0,
            spawn_angle_spread: 30.0,
            split_angle_min: 20.0,
            split_angle_max: 50.0,
            split_speed_factor: 1.2,
            despawn_margin: ASTEROID_MAX_RADIUS * 2.0,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            points_per_asteroid: 5,
            death_message_seconds: 3.0,
            game_over_seconds: 3.0,
            high_score_capacity: 10,
            name_max_len: 20,
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            ship: "ship.png".to_string(),
            asteroid_pattern: "asteroid{}.png".to_string(),
            asteroid_variants: 10,
        }
    }
}

impl AsteroidConfig {
    /// Radius of the largest tier
    pub fn max_radius(&self) -> f32 {
        self.min_radius * self.kinds as f32
    }
}

impl AssetPaths {
    /// File name of asteroid sprite `variant`
    pub fn asteroid_file(&self, variant: u32) -> String {
        self.asteroid_pattern.replace("{}", &variant.to_string())
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load from `path` when it exists, otherwise defaults; then validate
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen.width", self.screen.width),
            ("screen.height", self.screen.height),
            ("player.radius", self.player.radius),
            ("player.shot_radius", self.player.shot_radius),
            ("player.shoot_speed", self.player.shoot_speed),
            ("asteroids.min_radius", self.asteroids.min_radius),
            ("asteroids.spawn_rate", self.asteroids.spawn_rate),
            ("asteroids.speed_min", self.asteroids.speed_min),
            ("asteroids.split_speed_factor", self.asteroids.split_speed_factor),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, value)| *value <= 0.0) {
            return Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)));
        }

        if self.asteroids.kinds == 0 {
            return Err(ConfigError::Invalid("asteroids.kinds must be at least 1".to_string()));
        }
        if self.asteroids.speed_max < self.asteroids.speed_min {
            return Err(ConfigError::Invalid("asteroids.speed_max is below speed_min".to_string()));
        }
        if self.asteroids.split_angle_max < self.asteroids.split_angle_min {
            return Err(ConfigError::Invalid("asteroids.split_angle_max is below split_angle_min".to_string()));
        }
        if self.asteroids.spawn_angle_spread < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "asteroids.spawn_angle_spread must not be negative, got {}",
                self.asteroids.spawn_angle_spread
            )));
        }
        if self.asteroids.despawn_margin < self.asteroids.max_radius() {
            return Err(ConfigError::Invalid(format!(
                "asteroids.despawn_margin must be at least the largest radius {}, got {}",
                self.asteroids.max_radius(),
                self.asteroids.despawn_margin
            )));
        }
        if self.rules.high_score_capacity == 0 {
            return Err(ConfigError::Invalid("rules.high_score_capacity must be at least 1".to_string()));
        }
        if self.assets.asteroid_variants == 0 {
            return Err(ConfigError::Invalid("assets.asteroid_variants must be at least 1".to_string()));
        }
        Ok(())
    }
}
