//! State Hashing for Verification
//!
//! Provides hashing of simulation state for:
//! - Replay validation (same inputs must give the same state)
//! - Regression checks across refactors

use sha2::{Sha256, Digest};
use super::rect::Rect;
use super::vec2::Vec2;

/// Hash output type (256 bits / 32 bytes)
pub type StateHash = [u8; 32];

/// Hasher for simulation state.
///
/// Wraps SHA-256 with helpers for the simulation's value types.
/// Order of updates is significant.
pub struct StateHasher {
    hasher: Sha256,
}

impl StateHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for world state.
    pub fn for_world_state() -> Self {
        Self::new(b"WILDWEST_STATE_V1")
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an i32 value (little-endian).
    #[inline]
    pub fn update_i32(&mut self, value: i32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an f32 value (bit pattern, little-endian).
    #[inline]
    pub fn update_f32(&mut self, value: f32) {
        self.hasher.update(value.to_bits().to_le_bytes());
    }

    /// Update with a Vec2.
    #[inline]
    pub fn update_vec2(&mut self, value: Vec2) {
        self.update_f32(value.x);
        self.update_f32(value.y);
    }

    /// Update with a Rect.
    #[inline]
    pub fn update_rect(&mut self, rect: Rect) {
        self.update_i32(rect.x);
        self.update_i32(rect.y);
        self.update_i32(rect.w);
        self.update_i32(rect.h);
    }

    /// Update with a boolean.
    #[inline]
    pub fn update_bool(&mut self, value: bool) {
        self.update_u8(value as u8);
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> StateHash {
        self.hasher.finalize().into()
    }
}

/// Compute state hash for a world snapshot.
///
/// This function is called by `World::compute_hash()`.
/// The closure adds state-specific data after the tick counter.
pub fn compute_state_hash<F>(tick: u32, add_state: F) -> StateHash
where
    F: FnOnce(&mut StateHasher),
{
    let mut hasher = StateHasher::for_world_state();
    hasher.update_u32(tick);
    add_state(&mut hasher);
    hasher.finalize()
}

// =============================================================================
// TESTS
// =============================================================================
