//! # WildWest
//!
//! Simulation core for a top-down western shooter: one player, melee and
//! ranged monsters, straight-line bullets, pixel-accurate hits.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        WILDWEST                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Primitives                                │
//! │  ├── vec2.rs     - 2D float vector                           │
//! │  ├── rect.rs     - Pixel rectangles                          │
//! │  ├── mask.rs     - Per-pixel collision silhouettes           │
//! │  └── hash.rs     - State hashing for replay checks           │
//! │                                                              │
//! │  game/           - Simulation                                │
//! │  ├── entity.rs   - Shared actor body                         │
//! │  ├── player.rs   - Player controller                         │
//! │  ├── monster.rs  - Monster AI                                │
//! │  ├── combat.rs   - Projectile hit resolution                 │
//! │  └── world.rs    - Session and frame order                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering, audio, windowing and asset decoding live outside this
//! crate. They feed in an [`InputFrame`] per frame and read back
//! [`World::sprites`], HUD counters and [`GameEvent`]s.
//!
//! Given the same layout, config and input sequence the simulation
//! produces the same state hash on every run.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use core::vec2::Vec2;
pub use core::rect::Rect;
pub use core::mask::Mask;
pub use game::input::InputFrame;
pub use game::events::GameEvent;
pub use game::world::{replay, Assets, Phase, World};
pub use game::map::MapLayout;
pub use game::config::GameConfig;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed simulation rate used by the headless runner (Hz)
pub const TICK_RATE: u32 = 60;
