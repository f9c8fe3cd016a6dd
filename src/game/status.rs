//! Actor Status
//!
//! An actor's status is a (facing, mode) pair. It selects the animation
//! sequence and drives behavior branching. The animation key is derived
//! from the pair, never parsed back out of a string.

use serde::{Serialize, Deserialize};

use crate::core::vec2::Vec2;

/// Direction an actor is facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
#[derive(Default)]
pub enum Facing {
    Up = 0,
    #[default]
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Facing {
    /// All facings, in key order.
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    /// Cardinal unit vector for this facing (screen space).
    #[inline]
    pub fn unit_vector(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::UP,
            Facing::Down => Vec2::DOWN,
            Facing::Left => Vec2::LEFT,
            Facing::Right => Vec2::RIGHT,
        }
    }

    /// Facing toward a direction, using the perception dead-zone.
    ///
    /// `-0.5 < y < 0.5` picks a horizontal facing, anything else picks a
    /// vertical one. Returns `None` when the deciding component is zero.
    pub fn toward(direction: Vec2) -> Option<Facing> {
        if -0.5 < direction.y && direction.y < 0.5 {
            if direction.x > 0.0 {
                Some(Facing::Right)
            } else if direction.x < 0.0 {
                Some(Facing::Left)
            } else {
                None
            }
        } else if direction.y < 0.0 {
            Some(Facing::Up)
        } else if direction.y > 0.0 {
            Some(Facing::Down)
        } else {
            None
        }
    }

    fn key(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// What the actor is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
#[derive(Default)]
pub enum Mode {
    #[default]
    Idle = 0,
    Walk = 1,
    Attack = 2,
}

impl Mode {
    /// All modes, in key order.
    pub const ALL: [Mode; 3] = [Mode::Idle, Mode::Walk, Mode::Attack];
}

/// Combined facing and mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Status {
    pub facing: Facing,
    pub mode: Mode,
}

impl Status {
    /// Create a status.
    pub const fn new(facing: Facing, mode: Mode) -> Self {
        Self { facing, mode }
    }

    /// Same facing, different mode.
    #[inline]
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { facing: self.facing, mode }
    }

    /// Same mode, different facing.
    #[inline]
    pub fn with_facing(self, facing: Facing) -> Self {
        Self { facing, mode: self.mode }
    }

    /// Every status an actor can enter.
    pub fn all() -> impl Iterator<Item = Status> {
        Facing::ALL
            .into_iter()
            .flat_map(|facing| Mode::ALL.into_iter().map(move |mode| Status::new(facing, mode)))
    }

    /// Animation key, e.g. `down_idle`, `right`, `up_attack`.
    ///
    /// Walking uses the bare facing name, matching the asset folder layout.
    pub fn animation_key(self) -> String {
        match self.mode {
            Mode::Idle => format!("{}_idle", self.facing.key()),
            Mode::Walk => self.facing.key().to_string(),
            Mode::Attack => format!("{}_attack", self.facing.key()),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.animation_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_keys() {
        assert_eq!(Status::new(Facing::Down, Mode::Idle).animation_key(), "down_idle");
        assert_eq!(Status::new(Facing::Right, Mode::Walk).animation_key(), "right");
        assert_eq!(Status::new(Facing::Up, Mode::Attack).animation_key(), "up_attack");
    }

    #[test]
    fn test_all_statuses() {
        let all: Vec<Status> = Status::all().collect();
        assert_eq!(all.len(), 12);
        assert!(all.contains(&Status::new(Facing::Left, Mode::Attack)));
    }

    #[test]
    fn test_default_status() {
        assert_eq!(Status::default().animation_key(), "down_idle");
    }

    #[test]
    fn test_facing_dead_zone() {
        // Mostly horizontal
        assert_eq!(Facing::toward(Vec2::new(0.9, 0.43)), Some(Facing::Right));
        assert_eq!(Facing::toward(Vec2::new(-0.9, -0.43)), Some(Facing::Left));
        // Boundary belongs to the vertical facings
        assert_eq!(Facing::toward(Vec2::new(0.866, 0.5)), Some(Facing::Down));
        assert_eq!(Facing::toward(Vec2::new(0.866, -0.5)), Some(Facing::Up));
        // Zero direction leaves facing unchanged
        assert_eq!(Facing::toward(Vec2::ZERO), None);
    }

    #[test]
    fn test_unit_vectors() {
        for facing in Facing::ALL {
            assert_eq!(facing.unit_vector().length(), 1.0);
        }
        assert_eq!(Facing::Up.unit_vector(), Vec2::new(0.0, -1.0));
    }
}
