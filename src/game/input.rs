//! Input Snapshot
//!
//! Which keys are held this frame, packed into one byte. The window/event
//! layer fills one of these per frame; the simulation only reads it.

use serde::{Serialize, Deserialize};

use crate::core::vec2::Vec2;
use crate::game::status::Facing;

/// Held-key state for a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputFrame {
    /// Key flags (packed bits):
    /// - Bit 0: Up
    /// - Bit 1: Down
    /// - Bit 2: Left
    /// - Bit 3: Right
    /// - Bit 4: Attack
    /// - Bit 5-7: Reserved
    pub flags: u8,
}

impl InputFrame {
    /// Up key bit
    pub const FLAG_UP: u8 = 0x01;

    /// Down key bit
    pub const FLAG_DOWN: u8 = 0x02;

    /// Left key bit
    pub const FLAG_LEFT: u8 = 0x04;

    /// Right key bit
    pub const FLAG_RIGHT: u8 = 0x08;

    /// Attack key bit
    pub const FLAG_ATTACK: u8 = 0x10;

    /// Create an empty frame (nothing held).
    pub const fn new() -> Self {
        Self { flags: 0 }
    }

    /// Create a frame from raw flags.
    pub const fn from_flags(flags: u8) -> Self {
        Self { flags }
    }

    /// Builder: hold an extra key.
    pub const fn with(self, flag: u8) -> Self {
        Self { flags: self.flags | flag }
    }

    #[inline]
    pub fn up(&self) -> bool {
        self.flags & Self::FLAG_UP != 0
    }

    #[inline]
    pub fn down(&self) -> bool {
        self.flags & Self::FLAG_DOWN != 0
    }

    #[inline]
    pub fn left(&self) -> bool {
        self.flags & Self::FLAG_LEFT != 0
    }

    #[inline]
    pub fn right(&self) -> bool {
        self.flags & Self::FLAG_RIGHT != 0
    }

    #[inline]
    pub fn attack(&self) -> bool {
        self.flags & Self::FLAG_ATTACK != 0
    }

    /// Set or clear a key.
    #[inline]
    pub fn set(&mut self, flag: u8, held: bool) {
        if held {
            self.flags |= flag;
        } else {
            self.flags &= !flag;
        }
    }

    /// Check if this is an idle frame (nothing held).
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.flags == 0
    }

    /// Map held direction keys to a movement intent.
    ///
    /// Axes are independent. On each axis one key wins when both are held:
    /// Down over Up, Left over Right. The facing follows the horizontal key
    /// when one is held, otherwise the vertical key.
    pub fn intent(&self) -> MoveIntent {
        let mut direction = Vec2::ZERO;
        let mut facing = None;

        if self.down() {
            direction.y = 1.0;
            facing = Some(Facing::Down);
        } else if self.up() {
            direction.y = -1.0;
            facing = Some(Facing::Up);
        }

        if self.left() {
            direction.x = -1.0;
            facing = Some(Facing::Left);
        } else if self.right() {
            direction.x = 1.0;
            facing = Some(Facing::Right);
        }

        MoveIntent { direction, facing }
    }
}

/// Movement requested by the held keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveIntent {
    /// Raw per-axis direction; not normalized.
    pub direction: Vec2,
    /// New facing, if any direction key is held.
    pub facing: Option<Facing>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let mut input = InputFrame::new();
        assert!(input.is_idle());

        input.set(InputFrame::FLAG_ATTACK, true);
        assert!(input.attack());
        assert!(!input.up());

        input.set(InputFrame::FLAG_ATTACK, false);
        assert!(input.is_idle());
    }

    #[test]
    fn test_intent_diagonal() {
        let input = InputFrame::new()
            .with(InputFrame::FLAG_UP)
            .with(InputFrame::FLAG_RIGHT);
        let intent = input.intent();
        assert_eq!(intent.direction, Vec2::new(1.0, -1.0));
        assert_eq!(intent.facing, Some(Facing::Right));
    }

    #[test]
    fn test_intent_opposing_keys() {
        let input = InputFrame::from_flags(
            InputFrame::FLAG_UP | InputFrame::FLAG_DOWN | InputFrame::FLAG_LEFT | InputFrame::FLAG_RIGHT,
        );
        let intent = input.intent();
        assert_eq!(intent.direction, Vec2::new(-1.0, 1.0));
        assert_eq!(intent.facing, Some(Facing::Left));
    }

    #[test]
    fn test_intent_idle() {
        let intent = InputFrame::new().intent();
        assert_eq!(intent.direction, Vec2::ZERO);
        assert_eq!(intent.facing, None);
    }
}
