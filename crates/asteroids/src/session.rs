//! Game session
//!
//! One round of play: the player, the live asteroid and shot sets, the
//! spawner, score and lives. Starting a new game replaces the session
//! wholesale.

use rand::Rng;
use rust_engine::foundation::collections::{new_key_type, SlotMap};
use rust_engine::foundation::math::Vec2;
use rust_engine::physics::Rect;

use crate::components::{Asteroid, Circular, Player, PlayerControls, Shot, Simulate};
use crate::config::GameConfig;
use crate::spawner::AsteroidField;

new_key_type! {
    /// Key into the live asteroid set
    pub struct AsteroidKey;

    /// Key into the live shot set
    pub struct ShotKey;
}

/// Live state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Points this game; never decreases while playing
    pub score: u32,

    /// Lives left
    pub lives: u32,

    /// Seconds of simulated play
    pub elapsed: f32,

    /// The player ship
    pub player: Player,

    asteroids: SlotMap<AsteroidKey, Asteroid>,
    shots: SlotMap<ShotKey, Shot>,
    field: AsteroidField,
    bounds: Rect,
    config: GameConfig,
}

impl GameSession {
    /// Fresh session: no asteroids or shots, player at the screen center
    pub fn new(config: &GameConfig) -> Self {
        let bounds = Rect::from_size(config.screen.width, config.screen.height);
        Self {
            score: 0,
            lives: config.rules.starting_lives,
            elapsed: 0.0,
            player: Player::new(bounds.center(), &config.player),
            asteroids: SlotMap::with_key(),
            shots: SlotMap::with_key(),
            field: AsteroidField::new(
                config.screen.width,
                config.screen.height,
                &config.asteroids,
                config.assets.asteroid_variants,
            ),
            bounds,
            config: config.clone(),
        }
    }

    /// Configuration this session was started with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Screen center, where the player (re)spawns
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    /// Live asteroids
    pub fn asteroids(&self) -> impl Iterator<Item = (AsteroidKey, &Asteroid)> {
        self.asteroids.iter()
    }

    /// Live asteroid by key
    pub fn asteroid(&self, key: AsteroidKey) -> Option<&Asteroid> {
        self.asteroids.get(key)
    }

    /// Number of live asteroids
    pub fn asteroid_count(&self) -> usize {
        self.asteroids.len()
    }

    /// Live shots
    pub fn shots(&self) -> impl Iterator<Item = (ShotKey, &Shot)> {
        self.shots.iter()
    }

    /// Live shot by key
    pub fn shot(&self, key: ShotKey) -> Option<&Shot> {
        self.shots.get(key)
    }

    /// Number of live shots
    pub fn shot_count(&self) -> usize {
        self.shots.len()
    }

    /// Add an asteroid to the live set
    pub fn add_asteroid(&mut self, asteroid: Asteroid) -> AsteroidKey {
        self.asteroids.insert(asteroid)
    }

    /// Add a shot to the live set
    pub fn add_shot(&mut self, shot: Shot) -> ShotKey {
        self.shots.insert(shot)
    }

    /// Remove a shot from the live set
    pub fn remove_shot(&mut self, key: ShotKey) -> Option<Shot> {
        self.shots.remove(key)
    }

    /// Award points
    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// One simulation step: player, asteroids, shots, spawner, then culling
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, controls: PlayerControls, rng: &mut R) {
        self.elapsed += dt;

        if let Some(shot) = self.player.update(dt, controls) {
            self.shots.insert(shot);
        }
        for asteroid in self.asteroids.values_mut() {
            asteroid.update(dt);
        }
        for shot in self.shots.values_mut() {
            shot.update(dt);
        }
        if let Some(asteroid) = self.field.update(dt, rng) {
            self.asteroids.insert(asteroid);
        }

        self.cull();
    }

    /// Drop shots and asteroids that have left the screen for good
    pub fn cull(&mut self) {
        let limit = self.bounds.expanded(self.config.asteroids.despawn_margin);

        let shots_before = self.shots.len();
        self.shots.retain(|_, shot| !limit.excludes(&shot.bounds()));
        let asteroids_before = self.asteroids.len();
        self.asteroids.retain(|_, asteroid| !limit.excludes(&asteroid.bounds()));

        let culled = shots_before - self.shots.len() + asteroids_before - self.asteroids.len();
        if culled > 0 {
            log::trace!("Culled {} offscreen entities", culled);
        }
    }

    /// Remove an asteroid and insert its fragments, if any.
    ///
    /// Returns the keys of the fragments; empty for the smallest tier or a
    /// key that is no longer live.
    pub fn split_asteroid<R: Rng + ?Sized>(&mut self, key: AsteroidKey, rng: &mut R) -> Vec<AsteroidKey> {
        let Some(parent) = self.asteroids.remove(key) else {
            return Vec::new();
        };

        match parent.split(&self.config.asteroids, self.config.assets.asteroid_variants, rng) {
            Some(children) => children.into_iter().map(|child| self.asteroids.insert(child)).collect(),
            None => Vec::new(),
        }
    }

    /// Destroy every live asteroid
    pub fn clear_asteroids(&mut self) {
        log::debug!("Clearing {} asteroids", self.asteroids.len());
        self.asteroids.clear();
    }

    /// Put the player back at the center with the default heading
    pub fn respawn_player(&mut self) {
        let center = self.center();
        self.player.respawn(center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> GameSession {
        GameSession::new(&GameConfig::default())
    }

    #[test]
    fn test_fresh_session() {
        let session = session();
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, 3);
        assert_eq!(session.asteroid_count(), 0);
        assert_eq!(session.shot_count(), 0);
        assert_eq!(session.player.position(), Vec2::new(640.0, 360.0));
        assert_eq!(session.player.rotation, 0.0);
    }

    #[test]
    fn test_no_asteroids_until_first_spawn() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(11);
        let idle = PlayerControls::default();

        // 0.75 s never exceeds the spawn interval
        for _ in 0..3 {
            session.update(0.25, idle, &mut rng);
        }
        assert_eq!(session.asteroid_count(), 0);

        session.update(0.25, idle, &mut rng);
        assert_eq!(session.asteroid_count(), 1);
        assert_relative_eq!(session.elapsed, 1.0);
    }

    #[test]
    fn test_fire_adds_shot() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(12);
        let fire = PlayerControls { fire: true, ..PlayerControls::default() };
        session.update(0.01, fire, &mut rng);
        assert_eq!(session.shot_count(), 1);
    }

    #[test]
    fn test_cull_drops_offscreen_shots() {
        let mut session = session();
        let margin = session.config().asteroids.despawn_margin;
        session.add_shot(Shot::new(Vec2::new(-margin - 10.0, 100.0), Vec2::zeros(), 5.0));
        session.add_shot(Shot::new(Vec2::new(-margin + 2.0, 100.0), Vec2::zeros(), 5.0));
        session.add_shot(Shot::new(Vec2::new(640.0, 360.0), Vec2::zeros(), 5.0));

        session.cull();
        assert_eq!(session.shot_count(), 2);
    }

    #[test]
    fn test_spawned_asteroids_survive_cull() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..200 {
            session.update(1.0 / 60.0, PlayerControls::default(), &mut rng);
        }
        assert!(session.asteroid_count() >= 3);
    }

    #[test]
    fn test_split_max_tier_inserts_two_fragments() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(14);
        let min_radius = session.config().asteroids.min_radius;
        let key = session.add_asteroid(Asteroid::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 0.0), 3, min_radius));

        let children = session.split_asteroid(key, &mut rng);
        assert_eq!(children.len(), 2);
        assert!(session.asteroid(key).is_none());
        assert_eq!(session.asteroid_count(), 2);
        for child in children {
            assert_relative_eq!(session.asteroid(child).unwrap().radius(), 40.0);
        }
    }

    #[test]
    fn test_split_min_tier_just_removes() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(15);
        let min_radius = session.config().asteroids.min_radius;
        let key = session.add_asteroid(Asteroid::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 0.0), 1, min_radius));

        assert!(session.split_asteroid(key, &mut rng).is_empty());
        assert_eq!(session.asteroid_count(), 0);
        assert!(session.split_asteroid(key, &mut rng).is_empty());
    }

    #[test]
    fn test_respawn_and_clear() {
        let mut session = session();
        let min_radius = session.config().asteroids.min_radius;
        session.add_asteroid(Asteroid::new(Vec2::new(10.0, 10.0), Vec2::zeros(), 2, min_radius));
        session.player.rotation = 90.0;

        session.clear_asteroids();
        session.respawn_player();
        assert_eq!(session.asteroid_count(), 0);
        assert_eq!(session.player.rotation, 0.0);
        assert_eq!(session.player.position(), session.center());
    }
}
