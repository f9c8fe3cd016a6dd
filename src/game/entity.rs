//! Actor Body
//!
//! State shared by every movable actor: position and boxes, facing and
//! mode, health, the attack flag, the invulnerability window and the
//! animation counter. Player and monster logic sit on top of a `Body`.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::mask::Mask;
use crate::core::rect::Rect;
use crate::core::vec2::Vec2;
use crate::game::animation::{AnimationSet, Animator, Frame};
use crate::game::collision::{resolve_axis, Axis};
use crate::game::config::GameConfig;
use crate::game::map::Obstacle;
use crate::game::status::{Mode, Status};

/// Which kind of actor a body belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ActorKind {
    Player = 0,
    /// Melee monster
    Coffin = 1,
    /// Ranged monster
    Cactus = 2,
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActorKind::Player => "player",
            ActorKind::Coffin => "coffin",
            ActorKind::Cactus => "cactus",
        };
        f.write_str(name)
    }
}

/// Timing values every body needs each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyTiming {
    pub animation_speed: f32,
    pub invulnerability_secs: f32,
    pub blink_interval_secs: f32,
}

impl BodyTiming {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            animation_speed: config.animation_speed,
            invulnerability_secs: config.invulnerability_secs,
            blink_interval_secs: config.blink_interval_secs,
        }
    }
}

/// Shared actor state.
#[derive(Clone, Debug)]
pub struct Body {
    /// Actor kind
    pub kind: ActorKind,

    /// Authoritative sub-pixel position (sprite center)
    pub position: Vec2,

    /// Full sprite bounds, used for drawing and mask placement
    pub rect: Rect,

    /// Shrunk box used for blocking movement
    pub hitbox: Rect,

    /// Movement direction (unit or zero after `move_and_collide`)
    pub direction: Vec2,

    /// Movement speed (pixels per second)
    pub speed: f32,

    /// Facing and mode
    pub status: Status,

    /// Remaining health
    pub health: i32,

    /// An attack animation is playing
    pub attacking: bool,

    /// Still part of the world; cleared on death, removed at end of frame
    pub active: bool,

    animator: Animator,
    invulnerable: bool,
    invulnerable_remaining: f32,
    blink_elapsed: f32,
    visible: bool,
    timing: BodyTiming,
    animations: Arc<AnimationSet>,
}

impl Body {
    /// Create a body centered on `position`.
    ///
    /// The sprite rect takes the size of the first idle frame; the hitbox
    /// is that rect shrunk by the configured fractions.
    pub fn new(
        kind: ActorKind,
        position: Vec2,
        speed: f32,
        health: i32,
        animations: Arc<AnimationSet>,
        config: &GameConfig,
    ) -> Self {
        let (w, h) = animations
            .first_frame()
            .map(|frame| (frame.width() as i32, frame.height() as i32))
            .unwrap_or((0, 0));
        let rect = Rect::from_center(position, w, h);
        let hitbox = rect.inflate(
            -((w as f32 * config.hitbox.actor_shrink_x) as i32),
            -((h as f32 * config.hitbox.actor_shrink_y) as i32),
        );

        Self {
            kind,
            position: rect.center(),
            rect,
            hitbox,
            direction: Vec2::ZERO,
            speed,
            status: Status::default(),
            health,
            attacking: false,
            active: true,
            animator: Animator::default(),
            invulnerable: false,
            invulnerable_remaining: 0.0,
            blink_elapsed: 0.0,
            visible: true,
            timing: BodyTiming::from_config(config),
            animations,
        }
    }

    /// Sprite center.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Currently inside an invulnerability window.
    #[inline]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable
    }

    /// Blink state for rendering; false on the "off" half of a blink.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Fractional animation counter.
    #[inline]
    pub fn frame_index(&self) -> f32 {
        self.animator.frame_index()
    }

    /// Index of the frame to display, always within the current sequence.
    pub fn display_index(&self) -> usize {
        self.animator
            .display_index(self.animations.frame_count(self.status))
    }

    /// Frame to display for the current status.
    pub fn display_frame(&self) -> Option<&Frame> {
        self.animations.frames(self.status).get(self.display_index())
    }

    /// Collision silhouette of the displayed frame.
    pub fn mask(&self) -> Option<&Mask> {
        self.display_frame().map(Frame::mask)
    }

    /// Start an attack: restart the animation and switch to attack mode.
    pub fn begin_attack(&mut self) {
        self.attacking = true;
        self.animator.reset();
        self.status = self.status.with_mode(Mode::Attack);
    }

    /// Move along `direction` one axis at a time, resolving obstacle
    /// overlap after each axis.
    ///
    /// Horizontal is applied and resolved fully before vertical, so a
    /// diagonal step cannot slip through the corner between two obstacles.
    pub fn move_and_collide(&mut self, dt: f32, obstacles: &[Obstacle]) {
        if self.direction.is_zero() {
            return;
        }
        self.direction = self.direction.normalize();

        // Horizontal
        self.position.x += self.direction.x * self.speed * dt;
        self.hitbox.set_centerx(self.position.x.round() as i32);
        if resolve_axis(&mut self.hitbox, self.direction, Axis::Horizontal, obstacles) {
            self.position.x = self.hitbox.centerx() as f32;
        }
        self.rect.set_centerx(self.hitbox.centerx());

        // Vertical
        self.position.y += self.direction.y * self.speed * dt;
        self.hitbox.set_centery(self.position.y.round() as i32);
        if resolve_axis(&mut self.hitbox, self.direction, Axis::Vertical, obstacles) {
            self.position.y = self.hitbox.centery() as f32;
        }
        self.rect.set_centery(self.hitbox.centery());
    }

    /// Advance the animation counter.
    ///
    /// Returns true when an active attack passed `trigger_frame` during
    /// this update. Completing a sequence restarts it and ends any attack.
    pub fn animate(&mut self, dt: f32, trigger_frame: Option<u32>) -> bool {
        let len = self.animations.frame_count(self.status);
        let step = self.animator.advance(self.timing.animation_speed, dt, len);
        let triggered = self.attacking && trigger_frame.is_some_and(|frame| step.crossed(frame));

        if step.completed && self.attacking {
            self.attacking = false;
        }
        triggered
    }

    /// Take one hit.
    ///
    /// Ignored while invulnerable; otherwise costs one health and opens
    /// the invulnerability window. Returns true if the hit landed.
    pub fn take_damage(&mut self) -> bool {
        if self.invulnerable || !self.active {
            return false;
        }
        self.health -= 1;
        self.invulnerable = true;
        self.invulnerable_remaining = self.timing.invulnerability_secs;
        self.blink_elapsed = 0.0;
        self.visible = false;
        debug!("{} hit, health now {}", self.kind, self.health);
        true
    }

    /// Count down the invulnerability window and toggle the blink.
    pub fn invulnerability_tick(&mut self, dt: f32) {
        if !self.invulnerable {
            return;
        }

        self.invulnerable_remaining -= dt;
        self.blink_elapsed += dt;
        while self.blink_elapsed >= self.timing.blink_interval_secs {
            self.blink_elapsed -= self.timing.blink_interval_secs;
            self.visible = !self.visible;
        }

        if self.invulnerable_remaining <= 0.0 {
            self.invulnerable = false;
            self.invulnerable_remaining = 0.0;
            self.blink_elapsed = 0.0;
            self.visible = true;
        }
    }

    /// Mark the body destroyed once health runs out.
    ///
    /// Returns true on the update where the body dies.
    pub fn check_death(&mut self) -> bool {
        if self.active && self.health <= 0 {
            self.active = false;
            debug!("{} destroyed at {}", self.kind, self.position);
            return true;
        }
        false
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_animations() -> Arc<AnimationSet> {
        Arc::new(AnimationSet::uniform(Frame::solid(64, 64), 2, 4, 8))
    }

    pub(crate) fn test_body(kind: ActorKind, position: Vec2) -> Body {
        Body::new(kind, position, 200.0, 3, test_animations(), &GameConfig::default())
    }

    #[test]
    fn test_new_body_boxes() {
        let body = test_body(ActorKind::Player, Vec2::new(100.0, 100.0));
        assert_eq!(body.rect, Rect::new(68, 68, 64, 64));
        assert_eq!(body.hitbox.w, 32);
        assert_eq!(body.hitbox.h, 32);
        assert_eq!(body.hitbox.centerx(), 100);
        assert_eq!(body.position, Vec2::new(100.0, 100.0));
        assert_eq!(body.status.animation_key(), "down_idle");
    }

    #[test]
    fn test_damage_gated_by_invulnerability() {
        let mut body = test_body(ActorKind::Player, Vec2::ZERO);
        assert!(body.take_damage());
        assert!(!body.take_damage());
        assert_eq!(body.health, 2);
        assert!(body.is_invulnerable());
    }

    #[test]
    fn test_invulnerability_expires() {
        let mut body = test_body(ActorKind::Coffin, Vec2::ZERO);
        body.take_damage();

        body.invulnerability_tick(0.25);
        assert!(body.is_invulnerable());
        body.invulnerability_tick(0.2);
        assert!(!body.is_invulnerable());
        assert!(body.is_visible());

        assert!(body.take_damage());
        assert_eq!(body.health, 1);
    }

    #[test]
    fn test_blink_toggles_while_invulnerable() {
        let mut body = test_body(ActorKind::Coffin, Vec2::ZERO);
        body.take_damage();
        assert!(!body.is_visible());
        body.invulnerability_tick(0.1);
        assert!(body.is_visible());
        body.invulnerability_tick(0.1);
        assert!(!body.is_visible());
    }

    #[test]
    fn test_check_death() {
        let mut body = test_body(ActorKind::Cactus, Vec2::ZERO);
        body.health = 0;
        assert!(body.check_death());
        assert!(!body.active);
        assert!(!body.check_death());
        // Destroyed bodies ignore further hits
        assert!(!body.take_damage());
    }

    #[test]
    fn test_animate_ends_attack() {
        let mut body = test_body(ActorKind::Player, Vec2::ZERO);
        body.begin_attack();
        assert_eq!(body.status.mode, Mode::Attack);

        // 8 attack frames at 8 fps: one second
        let mut triggers = 0;
        for _ in 0..8 {
            if body.animate(0.125, Some(2)) {
                triggers += 1;
            }
        }
        assert!(!body.attacking);
        // Frame 2 is visible for two updates; callers keep their own fired flag.
        assert_eq!(triggers, 2);
    }

    #[test]
    fn test_move_normalizes_diagonal() {
        let mut body = test_body(ActorKind::Player, Vec2::new(500.0, 500.0));
        body.direction = Vec2::new(1.0, 1.0);
        body.move_and_collide(0.5, &[]);
        let travelled = body.position.distance(Vec2::new(500.0, 500.0));
        assert!((travelled - 100.0).abs() < 1e-3);
        assert!((body.direction.length() - 1.0).abs() < 1e-6);
    }

    fn wall(rect: Rect) -> Obstacle {
        Obstacle::with_hitbox(rect, rect, Frame::solid(rect.w as u32, rect.h as u32))
    }

    #[test]
    fn test_move_slides_along_wall() {
        // Hitbox starts at (84, 84, 32, 32), one pixel left of the wall
        let mut body = test_body(ActorKind::Player, Vec2::new(100.0, 100.0));
        let obstacles = [wall(Rect::new(117, 0, 20, 400))];

        for _ in 0..5 {
            body.direction = Vec2::new(1.0, 1.0);
            body.move_and_collide(0.1, &obstacles);
        }

        assert_eq!(body.hitbox.right(), 117);
        assert_eq!(body.position.x, body.hitbox.centerx() as f32);
        // The blocked axis does not cancel the free one
        assert!(body.position.y > 170.0);
        assert_eq!(body.hitbox.centery(), body.position.y.round() as i32);
        assert_eq!(body.rect.center(), Vec2::new(body.hitbox.centerx() as f32, body.hitbox.centery() as f32));
        assert!(!obstacles[0].hitbox.intersects(&body.hitbox));
    }

    #[test]
    fn test_move_into_corner_stays_outside() {
        let mut body = test_body(ActorKind::Player, Vec2::new(100.0, 100.0));
        let obstacles = [
            wall(Rect::new(117, 0, 20, 300)),
            wall(Rect::new(0, 117, 300, 20)),
        ];

        body.direction = Vec2::new(1.0, 1.0);
        for _ in 0..10 {
            body.move_and_collide(0.1, &obstacles);
        }

        assert_eq!(body.hitbox, Rect::new(85, 85, 32, 32));
        assert!(obstacles.iter().all(|o| !o.hitbox.intersects(&body.hitbox)));
    }
}
