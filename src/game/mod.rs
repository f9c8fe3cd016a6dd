//! Game Logic Module
//!
//! All game simulation code. Single-threaded, no I/O in the frame path.
//!
//! ## Module Structure
//!
//! - `input`: Held-key snapshot and movement intent
//! - `status`: Facing and mode
//! - `animation`: Frame sequences and the trigger-aware frame counter
//! - `entity`: Shared actor body (movement, damage, invulnerability)
//! - `player`: Player controller
//! - `monster`: Monster perception and behavior
//! - `projectile`: Bullets
//! - `collision`: Obstacle blocking and silhouette overlap
//! - `combat`: Per-frame projectile hit resolution
//! - `map`: Obstacles and placements
//! - `world`: Session ownership, frame order, outcome, replay
//! - `events`: Game events for audio/HUD/replay
//! - `config`, `error`: Tuning and load-time errors

pub mod input;
pub mod status;
pub mod animation;
pub mod entity;
pub mod player;
pub mod monster;
pub mod projectile;
pub mod collision;
pub mod combat;
pub mod map;
pub mod world;
pub mod events;
pub mod config;
pub mod error;

// Re-export key types
pub use input::InputFrame;
pub use status::{Facing, Mode, Status};
pub use animation::{AnimationSet, Frame};
pub use entity::{ActorKind, Body};
pub use player::Player;
pub use monster::{Monster, MonsterId, MonsterKind};
pub use projectile::Projectile;
pub use map::{MapLayout, Obstacle};
pub use world::{replay, Assets, Phase, SpriteView, TickResult, World};
pub use events::{GameEvent, GameEventData};
pub use config::GameConfig;
pub use error::{ConfigError, LoadError};
