//! Collision pass
//!
//! Runs once per tick after the entity updates. The player is tested first,
//! then every shot against the asteroids that were alive when the pass began.

use rand::Rng;

use crate::components::Circular;
use crate::session::{AsteroidKey, GameSession, ShotKey};

/// What the collision pass found this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// The player touched an asteroid
    pub player_hit: bool,

    /// Asteroids hit by shots
    pub asteroids_hit: u32,

    /// Points awarded for those hits
    pub points: u32,
}

/// First asteroid overlapping the player, if any
pub fn player_collision(session: &GameSession) -> Option<AsteroidKey> {
    session
        .asteroids()
        .find(|(_, asteroid)| asteroid.overlaps(&session.player))
        .map(|(key, _)| key)
}

/// Shots against asteroids.
///
/// Every shot is tested against every asteroid alive when the pass began. A
/// shot overlapping several asteroids splits all of them and is removed once.
/// Fragments created here are not tested until the next tick.
pub fn resolve_shots<R: Rng + ?Sized>(session: &mut GameSession, rng: &mut R) -> u32 {
    let targets: Vec<AsteroidKey> = session.asteroids().map(|(key, _)| key).collect();
    let shots: Vec<ShotKey> = session.shots().map(|(key, _)| key).collect();
    let mut hits = 0;

    for shot_key in shots {
        let Some(shot) = session.shot(shot_key).map(Circular::bounds) else {
            continue;
        };

        let mut struck = false;
        for &target in &targets {
            let overlapping = session
                .asteroid(target)
                .is_some_and(|asteroid| asteroid.bounds().intersects(&shot));
            if !overlapping {
                continue;
            }

            let fragments = session.split_asteroid(target, rng);
            log::debug!("Shot hit asteroid, {} fragments", fragments.len());
            hits += 1;
            struck = true;
        }

        if struck {
            session.remove_shot(shot_key);
        }
    }

    hits
}

/// Full collision pass; applies score for shot hits
pub fn resolve<R: Rng + ?Sized>(session: &mut GameSession, rng: &mut R) -> CollisionReport {
    let player_hit = player_collision(session).is_some();

    let asteroids_hit = resolve_shots(session, rng);
    let points = asteroids_hit * session.config().rules.points_per_asteroid;
    session.add_points(points);

    CollisionReport {
        player_hit,
        asteroids_hit,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Asteroid, Shot};
    use crate::config::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_engine::foundation::math::Vec2;

    fn session() -> GameSession {
        GameSession::new(&GameConfig::default())
    }

    fn rock(session: &GameSession, position: Vec2, tier: u32) -> Asteroid {
        Asteroid::new(position, Vec2::new(30.0, 0.0), tier, session.config().asteroids.min_radius)
    }

    #[test]
    fn test_shot_splits_max_tier_asteroid() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(21);
        let big = rock(&session, Vec2::new(200.0, 200.0), 3);
        let key = session.add_asteroid(big);
        session.add_shot(Shot::new(Vec2::new(210.0, 200.0), Vec2::zeros(), 5.0));

        let report = resolve(&mut session, &mut rng);

        assert_eq!(report, CollisionReport { player_hit: false, asteroids_hit: 1, points: 5 });
        assert_eq!(session.score, 5);
        assert_eq!(session.shot_count(), 0);
        assert!(session.asteroid(key).is_none());
        assert_eq!(session.asteroid_count(), 2);
        assert!(session.asteroids().all(|(_, child)| child.radius() == 40.0));
    }

    #[test]
    fn test_shot_destroys_min_tier_asteroid() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(22);
        let small = rock(&session, Vec2::new(200.0, 200.0), 1);
        session.add_asteroid(small);
        session.add_shot(Shot::new(Vec2::new(200.0, 200.0), Vec2::zeros(), 5.0));

        let report = resolve(&mut session, &mut rng);
        assert_eq!(report.points, 5);
        assert_eq!(session.asteroid_count(), 0);
    }

    #[test]
    fn test_fragments_not_tested_until_next_tick() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(23);
        let big = rock(&session, Vec2::new(200.0, 200.0), 3);
        session.add_asteroid(big);
        // Both shots sit inside the parent; the fragments spawn on top of them
        session.add_shot(Shot::new(Vec2::new(200.0, 200.0), Vec2::zeros(), 5.0));
        session.add_shot(Shot::new(Vec2::new(201.0, 200.0), Vec2::zeros(), 5.0));

        let report = resolve(&mut session, &mut rng);
        assert_eq!(report.asteroids_hit, 1);
        assert_eq!(session.shot_count(), 1);
        assert_eq!(session.asteroid_count(), 2);

        // Both fragments sit on the remaining shot, which takes them together
        let report = resolve(&mut session, &mut rng);
        assert_eq!(report.asteroids_hit, 2);
        assert_eq!(session.shot_count(), 0);
        assert_eq!(session.asteroid_count(), 4);
        assert_eq!(session.score, 15);
    }

    #[test]
    fn test_each_shot_hits_separately() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(24);
        let a = rock(&session, Vec2::new(100.0, 100.0), 1);
        let b = rock(&session, Vec2::new(500.0, 100.0), 1);
        session.add_asteroid(a);
        session.add_asteroid(b);
        session.add_shot(Shot::new(Vec2::new(100.0, 100.0), Vec2::zeros(), 5.0));
        session.add_shot(Shot::new(Vec2::new(500.0, 100.0), Vec2::zeros(), 5.0));
        session.add_shot(Shot::new(Vec2::new(900.0, 100.0), Vec2::zeros(), 5.0));

        let report = resolve(&mut session, &mut rng);
        assert_eq!(report.asteroids_hit, 2);
        assert_eq!(report.points, 10);
        assert_eq!(session.shot_count(), 1);
        assert_eq!(session.asteroid_count(), 0);
    }

    #[test]
    fn test_player_hit_reported_once() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(25);
        let center = session.center();
        let a = rock(&session, center, 1);
        let b = rock(&session, center + Vec2::new(5.0, 0.0), 2);
        session.add_asteroid(a);
        session.add_asteroid(b);

        assert!(player_collision(&session).is_some());
        let report = resolve(&mut session, &mut rng);
        assert!(report.player_hit);
        assert_eq!(report.points, 0);
        // The pass only reports; the asteroids stay until the game reacts
        assert_eq!(session.asteroid_count(), 2);
    }

    #[test]
    fn test_one_shot_splits_every_overlapping_asteroid() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(27);
        let left = rock(&session, Vec2::new(200.0, 200.0), 1);
        let right = rock(&session, Vec2::new(230.0, 200.0), 1);
        session.add_asteroid(left);
        session.add_asteroid(right);
        session.add_shot(Shot::new(Vec2::new(215.0, 200.0), Vec2::zeros(), 5.0));

        let report = resolve(&mut session, &mut rng);

        assert_eq!(report, CollisionReport { player_hit: false, asteroids_hit: 2, points: 10 });
        assert_eq!(session.asteroid_count(), 0);
        assert_eq!(session.shot_count(), 0);
        assert_eq!(session.score, 10);
    }

    #[test]
    fn test_tangent_shot_misses() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(26);
        let small = rock(&session, Vec2::new(200.0, 200.0), 1);
        session.add_asteroid(small);
        session.add_shot(Shot::new(Vec2::new(225.0, 200.0), Vec2::zeros(), 5.0));

        assert_eq!(resolve(&mut session, &mut rng), CollisionReport::default());
        assert_eq!(session.shot_count(), 1);
    }
}
