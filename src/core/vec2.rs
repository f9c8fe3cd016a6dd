//! 2D Vector
//!
//! Floating-point vector used for sub-pixel positions and directions.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, Neg, Mul};
use serde::{Serialize, Deserialize};

/// 2D vector with `f32` components. Screen space: +X right, +Y down.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Unit vector pointing right (+X)
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };

    /// Unit vector pointing left (-X)
    pub const LEFT: Self = Self { x: -1.0, y: 0.0 };

    /// Unit vector pointing up (-Y, screen space)
    pub const UP: Self = Self { x: 0.0, y: -1.0 };

    /// Unit vector pointing down (+Y, screen space)
    pub const DOWN: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Add another vector.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtract another vector.
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Scale by a scalar.
    #[inline]
    pub fn scale(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }

    /// Squared length (avoids sqrt - prefer this for comparisons).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        self.sub(other).length()
    }

    /// Normalize to unit length.
    /// Returns ZERO if length is zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// True if both components are exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Negate both components.
    #[inline]
    pub fn negate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Euclidean distance and unit direction from `from` to `to`.
///
/// Coincident points yield a zero direction instead of dividing by zero.
pub fn distance_and_direction(from: Vec2, to: Vec2) -> (f32, Vec2) {
    let delta = to.sub(from);
    let distance = delta.length();
    if distance == 0.0 {
        return (0.0, Vec2::ZERO);
    }
    (distance, delta.scale(1.0 / distance))
}

// Operator overloads for ergonomics
impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vec2::add(self, rhs)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec2::add(*self, rhs);
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vec2::sub(self, rhs)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({:.3}, {:.3})", self.x, self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_vec2_constants() {
        assert_eq!(Vec2::ZERO.x, 0.0);
        assert_eq!(Vec2::RIGHT.x, 1.0);
        assert_eq!(Vec2::UP.y, -1.0);
        assert_eq!(Vec2::DOWN.y, 1.0);
    }

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, 2.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(a - b, Vec2::new(2.0, 2.0));
        assert_eq!(b * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-b, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_vec2_length() {
        // 3-4-5 triangle
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_vec2_normalize() {
        let norm = Vec2::new(3.0, 4.0).normalize();
        assert!((norm.length() - 1.0).abs() < 1e-6);

        // Zero vector normalizes to zero
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_distance_and_direction_coincident() {
        let p = Vec2::new(12.5, -7.0);
        let (distance, direction) = distance_and_direction(p, p);
        assert_eq!(distance, 0.0);
        assert_eq!(direction, Vec2::ZERO);
    }

    #[test]
    fn test_distance_and_direction() {
        let (distance, direction) =
            distance_and_direction(Vec2::new(0.0, 0.0), Vec2::new(0.0, -10.0));
        assert_eq!(distance, 10.0);
        assert_eq!(direction, Vec2::UP);
    }

    proptest! {
        #[test]
        fn test_direction_is_unit_for_distinct_points(
            ax in -5000.0f32..5000.0,
            ay in -5000.0f32..5000.0,
            bx in -5000.0f32..5000.0,
            by in -5000.0f32..5000.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assume!(a != b);
            let (_, direction) = distance_and_direction(a, b);
            prop_assert!((direction.normalize().length() - 1.0).abs() < 1e-4);
        }
    }
}
