//! Projectiles
//!
//! Straight-line bullets. A projectile only moves and ages on its own;
//! hits are decided by the combat pass.

use crate::core::mask::Mask;
use crate::core::rect::Rect;
use crate::core::vec2::Vec2;
use crate::game::animation::Frame;
use crate::game::entity::ActorKind;

/// Request to create a projectile, collected during actor updates and
/// turned into projectiles once every actor has moved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRequest {
    /// Spawn point (sprite center)
    pub position: Vec2,
    /// Unit launch direction
    pub direction: Vec2,
    /// Who fired it
    pub source: ActorKind,
}

/// Why a projectile left the world on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expiry {
    /// Lifetime ran out
    Lifetime,
    /// Left the play area
    OutOfBounds,
}

/// A live projectile.
#[derive(Clone, Debug)]
pub struct Projectile {
    /// Sub-pixel center
    pub position: Vec2,
    /// Unit direction
    pub direction: Vec2,
    /// Pixels per second
    pub speed: f32,
    /// Sprite bounds (mask placement)
    pub rect: Rect,
    /// Seconds since spawn
    pub age: f32,
    /// Who fired it
    pub source: ActorKind,
    /// Cleared when destroyed; removed at end of frame
    pub active: bool,
    frame: Frame,
}

impl Projectile {
    /// Create a projectile centered on the request's spawn point.
    pub fn new(request: SpawnRequest, speed: f32, frame: Frame) -> Self {
        let rect = Rect::from_center(request.position, frame.width() as i32, frame.height() as i32);
        Self {
            position: request.position,
            direction: request.direction.normalize(),
            speed,
            rect,
            age: 0.0,
            source: request.source,
            active: true,
            frame,
        }
    }

    /// Collision silhouette.
    #[inline]
    pub fn mask(&self) -> &Mask {
        self.frame.mask()
    }

    /// Move one frame and age. Returns the reason if the projectile
    /// expired; it is then already marked inactive.
    pub fn update(&mut self, dt: f32, bounds: &Rect, lifetime: f32) -> Option<Expiry> {
        self.position += self.direction * (self.speed * dt);
        self.rect.set_center(self.position.x.round() as i32, self.position.y.round() as i32);
        self.age += dt;

        let expiry = if self.age >= lifetime {
            Some(Expiry::Lifetime)
        } else if !bounds.intersects(&self.rect) {
            Some(Expiry::OutOfBounds)
        } else {
            None
        };

        if expiry.is_some() {
            self.active = false;
        }
        expiry
    }
}
