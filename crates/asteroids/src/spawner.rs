//! Asteroid field spawner
//!
//! Drops a new asteroid just outside a random screen edge at a fixed
//! interval, aimed roughly across the screen.

use rand::Rng;
use rust_engine::foundation::math::{Vec2, Vec2Ext};

use crate::components::Asteroid;
use crate::config::AsteroidConfig;

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// x = 0
    Left,
    /// x = width
    Right,
    /// y = 0
    Top,
    /// y = height
    Bottom,
}

impl Edge {
    /// All four edges
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Unit vector pointing into the screen
    pub fn inward(self) -> Vec2 {
        match self {
            Edge::Left => Vec2::new(1.0, 0.0),
            Edge::Right => Vec2::new(-1.0, 0.0),
            Edge::Top => Vec2::new(0.0, 1.0),
            Edge::Bottom => Vec2::new(0.0, -1.0),
        }
    }

    /// Point at fraction `t` along the edge, pushed `margin` pixels offscreen
    pub fn point(self, t: f32, width: f32, height: f32, margin: f32) -> Vec2 {
        match self {
            Edge::Left => Vec2::new(-margin, t * height),
            Edge::Right => Vec2::new(width + margin, t * height),
            Edge::Top => Vec2::new(t * width, -margin),
            Edge::Bottom => Vec2::new(t * width, height + margin),
        }
    }
}

/// Periodic asteroid generator
#[derive(Debug, Clone)]
pub struct AsteroidField {
    spawn_timer: f32,
    width: f32,
    height: f32,
    config: AsteroidConfig,
    sprite_variants: u32,
}

impl AsteroidField {
    /// Spawner for a `width` x `height` screen
    pub fn new(width: f32, height: f32, config: &AsteroidConfig, sprite_variants: u32) -> Self {
        Self {
            spawn_timer: 0.0,
            width,
            height,
            config: config.clone(),
            sprite_variants,
        }
    }

    /// Seconds accumulated toward the next spawn
    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    /// Advance by `dt`; returns the asteroid spawned this tick, if any
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> Option<Asteroid> {
        self.spawn_timer += dt;
        if self.spawn_timer <= self.config.spawn_rate {
            return None;
        }
        self.spawn_timer = 0.0;
        Some(self.spawn(rng))
    }

    /// Build one asteroid on a random edge
    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Asteroid {
        let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
        let speed = rng.gen_range(self.config.speed_min..=self.config.speed_max);
        let spread = self.config.spawn_angle_spread;
        let heading = rng.gen_range(-spread..=spread);
        let velocity = (edge.inward() * speed).rotated_deg(heading);

        let position = edge.point(rng.gen_range(0.0..=1.0), self.width, self.height, self.config.max_radius());
        let tier = rng.gen_range(1..=self.config.kinds);

        log::debug!("Spawning tier {} asteroid from {:?} at ({:.0}, {:.0})", tier, edge, position.x, position.y);

        Asteroid::new(position, velocity, tier, self.config.min_radius)
            .with_random_look(rng, self.sprite_variants)
    }
}
