//! Player Controller
//!
//! Turns the held keys into movement and attacks. An attack locks the
//! player in place and releases exactly one bullet when the attack
//! animation reaches the fire frame.

use std::sync::Arc;

use tracing::debug;

use crate::core::vec2::Vec2;
use crate::game::animation::AnimationSet;
use crate::game::config::{GameConfig, PlayerConfig};
use crate::game::entity::{ActorKind, Body};
use crate::game::input::InputFrame;
use crate::game::map::Obstacle;
use crate::game::projectile::SpawnRequest;
use crate::game::status::{Facing, Mode};

/// What happened to the player during one update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerStep {
    /// An attack started this frame
    pub attack_started: bool,
    /// A bullet was requested this frame
    pub fired: bool,
    /// Health ran out this frame
    pub died: bool,
}

/// The player character.
#[derive(Clone, Debug)]
pub struct Player {
    /// Shared actor state
    pub body: Body,
    /// Facing captured when the current attack started
    launch_facing: Facing,
    /// The current attack already released its bullet
    bullet_fired: bool,
    config: PlayerConfig,
}

impl Player {
    /// Create the player centered on `position`.
    pub fn new(position: Vec2, animations: Arc<AnimationSet>, config: &GameConfig) -> Self {
        let body = Body::new(
            ActorKind::Player,
            position,
            config.player.speed,
            config.player.health,
            animations,
            config,
        );
        Self {
            body,
            launch_facing: Facing::default(),
            bullet_fired: false,
            config: config.player.clone(),
        }
    }

    /// Direction the current (or last) attack fires in.
    #[inline]
    pub fn launch_direction(&self) -> Vec2 {
        self.launch_facing.unit_vector()
    }

    /// Run one frame: input, status, movement, animation (which may
    /// request a bullet), invulnerability, death.
    pub fn update(
        &mut self,
        dt: f32,
        input: &InputFrame,
        obstacles: &[Obstacle],
        spawns: &mut Vec<SpawnRequest>,
    ) -> PlayerStep {
        let mut step = PlayerStep::default();
        if !self.body.active {
            return step;
        }

        step.attack_started = self.read_input(input);
        self.update_status();
        self.body.move_and_collide(dt, obstacles);

        if self.body.animate(dt, Some(self.config.fire_frame)) && !self.bullet_fired {
            spawns.push(self.bullet_request());
            self.bullet_fired = true;
            step.fired = true;
        }

        self.body.invulnerability_tick(dt);
        step.died = self.body.check_death();
        step
    }

    /// Apply held keys. Ignored while an attack is playing.
    ///
    /// Returns true if an attack started.
    fn read_input(&mut self, input: &InputFrame) -> bool {
        if self.body.attacking {
            return false;
        }

        let intent = input.intent();
        self.body.direction = intent.direction;
        if let Some(facing) = intent.facing {
            self.body.status = self.body.status.with_facing(facing);
        }

        if input.attack() {
            self.body.direction = Vec2::ZERO;
            self.body.begin_attack();
            self.launch_facing = self.body.status.facing;
            self.bullet_fired = false;
            debug!("player attack toward {:?}", self.launch_facing);
            return true;
        }
        false
    }

    fn update_status(&mut self) {
        let mode = if self.body.attacking {
            Mode::Attack
        } else if self.body.direction.is_zero() {
            Mode::Idle
        } else {
            Mode::Walk
        };
        self.body.status = self.body.status.with_mode(mode);
    }

    /// Bullet spawn point: out from the sprite center along the launch
    /// direction, then nudged to line up with the gun.
    fn bullet_request(&self) -> SpawnRequest {
        let direction = self.launch_direction();
        let position = self.body.center()
            + direction * self.config.launch_offset
            + self.config.spawn_nudge.for_facing(self.launch_facing);
        SpawnRequest {
            position,
            direction,
            source: ActorKind::Player,
        }
    }
}
