//! Game Events
//!
//! Events generated during simulation. Audio cues, HUD flashes and logs
//! are driven from these; the simulation never calls out to them.

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::core::vec2::Vec2;
use crate::game::entity::ActorKind;
use crate::game::monster::{MonsterId, MonsterKind};
use crate::game::world::Phase;

/// Priority for event processing order within a tick.
///
/// Lower value = processed first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum EventPriority {
    /// Deaths first
    Destruction = 0,
    /// Then hits
    Damage = 1,
    /// Then attacks and shots
    Attack = 2,
    /// Then projectile bookkeeping
    Projectile = 3,
    /// Lowest priority
    Session = 255,
}

/// Reference to an actor in an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorRef {
    Player,
    Monster { id: MonsterId, kind: MonsterKind },
}

impl fmt::Display for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorRef::Player => f.write_str("player"),
            ActorRef::Monster { id, kind } => write!(f, "{} {}", kind.actor_kind(), id),
        }
    }
}

/// Game event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// An attack animation started
    AttackStarted { actor: ActorRef },

    /// A projectile entered the world
    ProjectileSpawned {
        source: ActorKind,
        position: Vec2,
        direction: Vec2,
    },

    /// Ranged monster fired (sound cue)
    ShotFired { monster: MonsterId },

    /// Melee monster reached its strike frame
    MeleeStrike { monster: MonsterId, in_reach: bool },

    /// Player lost health
    PlayerHit { health: i32 },

    /// Monster lost health
    MonsterHit { monster: MonsterId, health: i32 },

    /// Projectile stopped by an obstacle
    ProjectileBlocked { position: Vec2 },

    /// Actor removed from the world
    EntityDestroyed { actor: ActorRef },

    /// Session reached an outcome
    SessionEnded { outcome: Phase, duration_ticks: u32 },
}

impl GameEventData {
    /// Default priority for this kind of event.
    pub fn priority(&self) -> EventPriority {
        match self {
            GameEventData::EntityDestroyed { .. } => EventPriority::Destruction,
            GameEventData::PlayerHit { .. } | GameEventData::MonsterHit { .. } => EventPriority::Damage,
            GameEventData::AttackStarted { .. }
            | GameEventData::ShotFired { .. }
            | GameEventData::MeleeStrike { .. } => EventPriority::Attack,
            GameEventData::ProjectileSpawned { .. } | GameEventData::ProjectileBlocked { .. } => {
                EventPriority::Projectile
            }
            GameEventData::SessionEnded { .. } => EventPriority::Session,
        }
    }
}

/// A game event with timing and priority.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick when event occurred
    pub tick: u32,

    /// Processing priority
    pub priority: EventPriority,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event with the data's default priority.
    pub fn new(tick: u32, data: GameEventData) -> Self {
        Self {
            tick,
            priority: data.priority(),
            data,
        }
    }

    /// Create attack started event.
    pub fn attack_started(tick: u32, actor: ActorRef) -> Self {
        Self::new(tick, GameEventData::AttackStarted { actor })
    }

    /// Create projectile spawned event.
    pub fn projectile_spawned(tick: u32, source: ActorKind, position: Vec2, direction: Vec2) -> Self {
        Self::new(tick, GameEventData::ProjectileSpawned { source, position, direction })
    }

    /// Create entity destroyed event.
    pub fn entity_destroyed(tick: u32, actor: ActorRef) -> Self {
        Self::new(tick, GameEventData::EntityDestroyed { actor })
    }

    /// Create session ended event.
    pub fn session_ended(tick: u32, outcome: Phase) -> Self {
        Self::new(
            tick,
            GameEventData::SessionEnded {
                outcome,
                duration_ticks: tick,
            },
        )
    }

    /// Ordering key: tick, then priority. Stable sorts keep generation
    /// order for ties.
    #[inline]
    pub fn sort_key(&self) -> (u32, EventPriority) {
        (self.tick, self.priority)
    }
}
