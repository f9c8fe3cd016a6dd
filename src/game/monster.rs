//! Monster AI
//!
//! Both monster kinds share one behavior: look at the player when close
//! enough, walk toward it inside the approach band, attack inside attack
//! range. They differ only in what the attack does on its trigger frame:
//! a coffin strikes the player if still in reach, a cactus fires a bullet.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::vec2::{distance_and_direction, Vec2};
use crate::game::animation::AnimationSet;
use crate::game::config::{GameConfig, MonsterConfig};
use crate::game::entity::{ActorKind, Body};
use crate::game::map::Obstacle;
use crate::game::projectile::SpawnRequest;
use crate::game::status::{Facing, Mode};

/// Stable monster identifier, assigned in map placement order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monster variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    /// Melee
    Coffin,
    /// Ranged
    Cactus,
}

impl MonsterKind {
    /// Actor kind for this monster.
    pub fn actor_kind(self) -> ActorKind {
        match self {
            MonsterKind::Coffin => ActorKind::Coffin,
            MonsterKind::Cactus => ActorKind::Cactus,
        }
    }

    /// Monster kind for an actor kind, if it is one.
    pub fn from_actor_kind(kind: ActorKind) -> Option<Self> {
        match kind {
            ActorKind::Player => None,
            ActorKind::Coffin => Some(MonsterKind::Coffin),
            ActorKind::Cactus => Some(MonsterKind::Cactus),
        }
    }

    /// Tuning table for this kind.
    pub fn config(self, config: &GameConfig) -> &MonsterConfig {
        match self {
            MonsterKind::Coffin => &config.coffin,
            MonsterKind::Cactus => &config.cactus,
        }
    }
}

/// Read-only snapshot of the player, taken after the player's update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerView {
    /// Sprite center
    pub center: Vec2,
}

/// Distance and unit direction from a monster to the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perception {
    pub distance: f32,
    pub direction: Vec2,
}

/// What happened to a monster during one update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonsterStep {
    /// An attack started this frame
    pub attack_started: bool,
    /// The attack reached its trigger frame this frame
    pub triggered: bool,
    /// Melee strike landed in reach; the world applies the hit
    pub struck_player: bool,
    /// A bullet was requested this frame
    pub fired: bool,
    /// Health ran out this frame
    pub died: bool,
}

/// A monster.
#[derive(Clone, Debug)]
pub struct Monster {
    pub id: MonsterId,
    pub kind: MonsterKind,
    /// Shared actor state
    pub body: Body,
    /// The current attack already struck or fired
    acted: bool,
    config: MonsterConfig,
}

impl Monster {
    /// Create a monster centered on `position`.
    pub fn new(
        id: MonsterId,
        kind: MonsterKind,
        position: Vec2,
        animations: Arc<AnimationSet>,
        config: &GameConfig,
    ) -> Self {
        let tuning = kind.config(config).clone();
        let body = Body::new(
            kind.actor_kind(),
            position,
            tuning.speed,
            tuning.health,
            animations,
            config,
        );
        Self {
            id,
            kind,
            body,
            acted: false,
            config: tuning,
        }
    }

    /// Tuning in effect for this monster.
    #[inline]
    pub fn config(&self) -> &MonsterConfig {
        &self.config
    }

    /// Distance and direction to the player, from the live positions.
    pub fn perceive(&self, player: &PlayerView) -> Perception {
        let (distance, direction) = distance_and_direction(self.body.center(), player.center);
        Perception { distance, direction }
    }

    /// Turn toward the player when within notice range.
    ///
    /// Out of range the facing is kept; a finished attack drops back to idle.
    pub fn face_toward_player(&mut self, perception: &Perception) {
        if perception.distance < self.config.notice_radius {
            let facing = Facing::toward(perception.direction).unwrap_or(self.body.status.facing);
            self.body.status = self.body.status.with_facing(facing).with_mode(Mode::Idle);
        } else if !self.body.attacking && self.body.status.mode == Mode::Attack {
            self.body.status = self.body.status.with_mode(Mode::Idle);
        }
    }

    /// Walk toward the player inside the approach band, otherwise hold.
    pub fn approach_player(&mut self, perception: &Perception) {
        let band = self.config.attack_radius < perception.distance
            && perception.distance < self.config.walk_radius;
        if band {
            self.body.direction = perception.direction;
            self.body.status = self.body.status.with_mode(Mode::Walk);
        } else {
            self.body.direction = Vec2::ZERO;
        }
    }

    /// Start an attack when in range; keep attack mode while it plays.
    ///
    /// Returns true if an attack started.
    pub fn attack(&mut self, perception: &Perception) -> bool {
        let mut started = false;
        if perception.distance < self.config.attack_radius && !self.body.attacking {
            self.body.begin_attack();
            self.acted = false;
            started = true;
            debug!("{} {} attacks", self.kind.actor_kind(), self.id);
        }
        if self.body.attacking {
            self.body.status = self.body.status.with_mode(Mode::Attack);
        }
        started
    }

    /// Run one frame: face, approach, attack, move, animate (which may
    /// strike or fire), invulnerability, death.
    pub fn update(
        &mut self,
        dt: f32,
        player: Option<&PlayerView>,
        obstacles: &[Obstacle],
        spawns: &mut Vec<SpawnRequest>,
    ) -> MonsterStep {
        let mut step = MonsterStep::default();
        if !self.body.active {
            return step;
        }

        if let Some(player) = player {
            let perception = self.perceive(player);
            self.face_toward_player(&perception);
            self.approach_player(&perception);
            step.attack_started = self.attack(&perception);
        } else {
            self.body.direction = Vec2::ZERO;
        }

        self.body.move_and_collide(dt, obstacles);

        if self.body.animate(dt, Some(self.config.trigger_frame)) && !self.acted {
            self.acted = true;
            step.triggered = true;
            if let Some(player) = player {
                // Re-sample: the trigger acts on where the player is now.
                let perception = self.perceive(player);
                match self.kind {
                    MonsterKind::Coffin => {
                        step.struck_player = perception.distance < self.config.attack_radius;
                    }
                    MonsterKind::Cactus => {
                        spawns.push(SpawnRequest {
                            position: self.body.center() + perception.direction * self.config.muzzle_offset,
                            direction: perception.direction,
                            source: self.kind.actor_kind(),
                        });
                        step.fired = true;
                    }
                }
            }
        }

        self.body.invulnerability_tick(dt);
        step.died = self.body.check_death();
        step
    }
}
