//! Collision Detection
//!
//! Two kinds of collision:
//! - Movement blocking: hitbox vs obstacle hitbox, resolved one axis at a
//!   time by clamping the mover's leading edge.
//! - Combat overlap: silhouette masks placed at their sprite rects.

use crate::core::mask::Mask;
use crate::core::rect::Rect;
use crate::core::vec2::Vec2;
use crate::game::map::Obstacle;

/// Movement axis being resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Push `hitbox` out of every obstacle it overlaps along one axis.
///
/// The edge facing the direction of travel is clamped to the obstacle's
/// opposing edge (moving right clamps our right edge to its left edge).
/// A zero component on this axis leaves the box where it is.
/// Returns true if any obstacle was hit.
pub fn resolve_axis(hitbox: &mut Rect, direction: Vec2, axis: Axis, obstacles: &[Obstacle]) -> bool {
    let mut hit = false;

    for obstacle in obstacles {
        let other = obstacle.hitbox;
        if !other.intersects(hitbox) {
            continue;
        }
        hit = true;

        match axis {
            Axis::Horizontal => {
                if direction.x > 0.0 {
                    hitbox.set_right(other.left());
                }
                if direction.x < 0.0 {
                    hitbox.set_left(other.right());
                }
            }
            Axis::Vertical => {
                if direction.y > 0.0 {
                    hitbox.set_bottom(other.top());
                }
                if direction.y < 0.0 {
                    hitbox.set_top(other.bottom());
                }
            }
        }
    }

    hit
}

/// Silhouette overlap of two sprites.
///
/// Each mask is anchored at its sprite rect's top-left corner. Rectangles
/// that only meet through transparent pixels do not overlap.
pub fn sprites_overlap(a_rect: &Rect, a_mask: &Mask, b_rect: &Rect, b_mask: &Mask) -> bool {
    let a_bounds = Rect::new(a_rect.x, a_rect.y, a_mask.width() as i32, a_mask.height() as i32);
    let b_bounds = Rect::new(b_rect.x, b_rect.y, b_mask.width() as i32, b_mask.height() as i32);
    if !a_bounds.intersects(&b_bounds) {
        return false;
    }
    a_mask.overlap_at(b_mask, b_rect.x - a_rect.x, b_rect.y - a_rect.y)
}
