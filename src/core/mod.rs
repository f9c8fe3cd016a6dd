//! Core primitives.
//!
//! Pure geometry and hashing helpers with no game rules in them.

pub mod vec2;
pub mod rect;
pub mod mask;
pub mod hash;

// Re-export core types
pub use vec2::{Vec2, distance_and_direction};
pub use rect::Rect;
pub use mask::Mask;
pub use hash::{StateHash, StateHasher, compute_state_hash};
