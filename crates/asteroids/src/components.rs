//! Game entities
//!
//! Every entity is a moving circle. The shared [`CircleBody`] record carries
//! position, velocity and radius; the variants add their own state on top.

use rand::Rng;
use rust_engine::foundation::math::{Vec2, Vec2Ext};
use rust_engine::input::{InputManager, KeyCode};
use rust_engine::physics::BoundingCircle;

use crate::config::{AsteroidConfig, PlayerConfig};

/// Position, velocity and radius shared by every entity
#[derive(Debug, Clone, PartialEq)]
pub struct CircleBody {
    /// Center in screen space
    pub position: Vec2,

    /// Pixels per second
    pub velocity: Vec2,

    /// Collision radius, always positive
    pub radius: f32,
}

impl CircleBody {
    /// A body at rest
    pub fn new(position: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be positive");
        Self {
            position,
            velocity: Vec2::zeros(),
            radius,
        }
    }

    /// Straight-line motion
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

/// Anything with a collision circle
pub trait Circular {
    /// The underlying body
    fn body(&self) -> &CircleBody;

    /// Center in screen space
    fn position(&self) -> Vec2 {
        self.body().position
    }

    /// Collision radius
    fn radius(&self) -> f32 {
        self.body().radius
    }

    /// Collision circle
    fn bounds(&self) -> BoundingCircle {
        BoundingCircle::new(self.position(), self.radius())
    }

    /// Strict overlap: touching circles do not collide
    fn overlaps<C: Circular + ?Sized>(&self, other: &C) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}

/// Entities that move on their own each tick
pub trait Simulate {
    /// Advance by `dt` seconds
    fn update(&mut self, dt: f32);
}

/// Overlap test between any two circles
pub fn overlaps<A: Circular + ?Sized, B: Circular + ?Sized>(a: &A, b: &B) -> bool {
    a.overlaps(b)
}

/// Player controls sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerControls {
    /// Rotate counter-clockwise
    pub turn_left: bool,
    /// Rotate clockwise
    pub turn_right: bool,
    /// Thrust along the heading
    pub thrust_forward: bool,
    /// Thrust against the heading
    pub thrust_backward: bool,
    /// Fire a shot
    pub fire: bool,
}

impl PlayerControls {
    /// Read the control keys from the input state
    pub fn from_input(input: &InputManager) -> Self {
        Self {
            turn_left: input.any_held(&[KeyCode::A, KeyCode::Left]),
            turn_right: input.any_held(&[KeyCode::D, KeyCode::Right]),
            thrust_forward: input.any_held(&[KeyCode::W, KeyCode::Up]),
            thrust_backward: input.any_held(&[KeyCode::S, KeyCode::Down]),
            fire: input.is_key_held(KeyCode::Space),
        }
    }
}

/// Player ship
#[derive(Debug, Clone)]
pub struct Player {
    body: CircleBody,

    /// Heading in degrees; free running
    pub rotation: f32,

    /// Seconds until the next shot is allowed; may go negative
    pub shoot_timer: f32,

    tuning: PlayerConfig,
}

impl Circular for Player {
    fn body(&self) -> &CircleBody {
        &self.body
    }
}

impl Player {
    /// New ship at `position`, facing down the screen
    pub fn new(position: Vec2, tuning: &PlayerConfig) -> Self {
        Self {
            body: CircleBody::new(position, tuning.radius),
            rotation: 0.0,
            shoot_timer: 0.0,
            tuning: tuning.clone(),
        }
    }

    /// Unit vector along the heading
    pub fn forward(&self) -> Vec2 {
        Vec2::from_heading_deg(self.rotation)
    }

    /// Apply one tick of controls. Returns the shot fired this tick, if any.
    ///
    /// Every held control applies in the same tick.
    pub fn update(&mut self, dt: f32, controls: PlayerControls) -> Option<Shot> {
        self.shoot_timer -= dt;

        if controls.turn_left {
            self.rotate(-dt);
        }
        if controls.turn_right {
            self.rotate(dt);
        }
        if controls.thrust_forward {
            self.thrust(dt);
        }
        if controls.thrust_backward {
            self.thrust(-dt);
        }

        if controls.fire {
            self.shoot()
        } else {
            None
        }
    }

    fn rotate(&mut self, dt: f32) {
        self.rotation += self.tuning.turn_speed * dt;
    }

    fn thrust(&mut self, dt: f32) {
        self.body.position += self.forward() * self.tuning.speed * dt;
    }

    /// Fire if the cooldown has run out
    pub fn shoot(&mut self) -> Option<Shot> {
        if self.shoot_timer > 0.0 {
            return None;
        }
        self.shoot_timer = self.tuning.shoot_cooldown;
        Some(Shot::new(
            self.body.position,
            self.forward() * self.tuning.shoot_speed,
            self.tuning.shot_radius,
        ))
    }

    /// Back to `position` with the default heading
    pub fn respawn(&mut self, position: Vec2) {
        self.body.position = position;
        self.rotation = 0.0;
    }
}

/// Asteroid
#[derive(Debug, Clone)]
pub struct Asteroid {
    body: CircleBody,

    /// Sprite rotation in degrees; cosmetic
    pub rotation: f32,

    /// Degrees per second
    pub rotation_speed: f32,

    /// Size tier, 1 is the smallest
    pub tier: u32,

    /// Sprite variant id, used for the image lookup
    pub sprite_variant: u32,
}

impl Circular for Asteroid {
    fn body(&self) -> &CircleBody {
        &self.body
    }
}

impl Simulate for Asteroid {
    fn update(&mut self, dt: f32) {
        self.body.advance(dt);
        self.rotation += self.rotation_speed * dt;
    }
}

impl Asteroid {
    /// Asteroid of `tier` whose radius is `tier * min_radius`, without spin
    pub fn new(position: Vec2, velocity: Vec2, tier: u32, min_radius: f32) -> Self {
        let mut body = CircleBody::new(position, min_radius * tier as f32);
        body.velocity = velocity;
        Self {
            body,
            rotation: 0.0,
            rotation_speed: 0.0,
            tier,
            sprite_variant: 1,
        }
    }

    /// Random starting angle, spin and sprite variant in `1..=sprite_variants`
    #[must_use]
    pub fn with_random_look<R: Rng + ?Sized>(mut self, rng: &mut R, sprite_variants: u32) -> Self {
        self.rotation = rng.gen_range(0.0..360.0);
        self.rotation_speed = rng.gen_range(-100.0..=100.0);
        self.sprite_variant = rng.gen_range(1..=sprite_variants.max(1));
        self
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    /// Whether a hit destroys this asteroid outright
    pub fn is_terminal(&self, config: &AsteroidConfig) -> bool {
        self.body.radius <= config.min_radius
    }

    /// The two fragments produced by a hit, or `None` for the smallest tier.
    ///
    /// Fragments start at the parent's position one tier smaller. Their
    /// velocities are the parent's rotated by plus and minus one random angle
    /// and scaled by the split speed factor.
    pub fn split<R: Rng + ?Sized>(
        &self,
        config: &AsteroidConfig,
        sprite_variants: u32,
        rng: &mut R,
    ) -> Option<[Asteroid; 2]> {
        if self.is_terminal(config) {
            return None;
        }

        let angle = rng.gen_range(config.split_angle_min..=config.split_angle_max);
        let tier = self.tier.saturating_sub(1).max(1);
        let new_radius = self.body.radius - config.min_radius;

        let fragment = |degrees: f32, rng: &mut R| {
            let velocity = self.body.velocity.rotated_deg(degrees) * config.split_speed_factor;
            let mut child = Asteroid::new(self.body.position, velocity, tier, config.min_radius)
                .with_random_look(rng, sprite_variants);
            child.body.radius = new_radius;
            child
        };

        let a = fragment(angle, &mut *rng);
        let b = fragment(-angle, &mut *rng);
        Some([a, b])
    }
}

/// Projectile fired by the player
#[derive(Debug, Clone)]
pub struct Shot {
    body: CircleBody,
}

impl Circular for Shot {
    fn body(&self) -> &CircleBody {
        &self.body
    }
}

impl Simulate for Shot {
    fn update(&mut self, dt: f32) {
        self.body.advance(dt);
    }
}

impl Shot {
    /// Shot at `position` moving with `velocity`
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        let mut body = CircleBody::new(position, radius);
        body.velocity = velocity;
        Self { body }
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }
}
