//! Tuning Configuration
//!
//! All gameplay constants live here so they can be overridden from JSON.
//! Defaults reproduce the shipped game's feel.

use std::path::Path;

use serde::{Serialize, Deserialize};
use tracing::warn;

use crate::core::vec2::Vec2;
use crate::game::error::ConfigError;
use crate::game::status::Facing;

/// Top-level simulation tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Animation playback rate (frames per second)
    pub animation_speed: f32,
    /// Length of the post-hit invulnerability window (seconds)
    pub invulnerability_secs: f32,
    /// Blink toggle interval while invulnerable (seconds)
    pub blink_interval_secs: f32,
    /// Player tuning
    pub player: PlayerConfig,
    /// Melee monster tuning
    pub coffin: MonsterConfig,
    /// Ranged monster tuning
    pub cactus: MonsterConfig,
    /// Projectile tuning
    pub projectile: ProjectileConfig,
    /// Hitbox derivation
    pub hitbox: HitboxConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            animation_speed: 8.0,
            invulnerability_secs: 0.4,
            blink_interval_secs: 0.1,
            player: PlayerConfig::default(),
            coffin: MonsterConfig::coffin(),
            cactus: MonsterConfig::cactus(),
            projectile: ProjectileConfig::default(),
            hitbox: HitboxConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("animation_speed", self.animation_speed)?;
        non_negative("invulnerability_secs", self.invulnerability_secs)?;
        positive("blink_interval_secs", self.blink_interval_secs)?;

        positive("player.speed", self.player.speed)?;
        at_least_one("player.health", self.player.health)?;
        non_negative("player.launch_offset", self.player.launch_offset)?;

        self.coffin.validate("coffin")?;
        self.cactus.validate("cactus")?;

        positive("projectile.speed", self.projectile.speed)?;
        positive("projectile.lifetime_secs", self.projectile.lifetime_secs)?;

        for (field, value) in [
            ("hitbox.actor_shrink_x", self.hitbox.actor_shrink_x),
            ("hitbox.actor_shrink_y", self.hitbox.actor_shrink_y),
            ("hitbox.obstacle_shrink_y", self.hitbox.obstacle_shrink_y),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::OutOfRange { field: field.to_string(), value });
            }
        }

        Ok(())
    }
}

/// Player tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Movement speed (pixels per second)
    pub speed: f32,
    /// Starting health
    pub health: i32,
    /// Attack animation frame on which the bullet is released
    pub fire_frame: u32,
    /// Distance from the sprite center to the bullet spawn point
    pub launch_offset: f32,
    /// Per-direction sprite alignment nudges for the spawn point
    pub spawn_nudge: SpawnNudge,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 200.0,
            health: 3,
            fire_frame: 2,
            launch_offset: 70.0,
            spawn_nudge: SpawnNudge::default(),
        }
    }
}

/// Extra offset applied to the player's bullet spawn point, per facing.
///
/// The gun sits off-center in the vertical sprites, so the bullet is
/// shifted sideways to leave from the barrel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnNudge {
    pub up: Vec2,
    pub down: Vec2,
    pub left: Vec2,
    pub right: Vec2,
}

impl Default for SpawnNudge {
    fn default() -> Self {
        Self {
            up: Vec2::new(20.0, 0.0),
            down: Vec2::new(-14.0, 0.0),
            left: Vec2::ZERO,
            right: Vec2::ZERO,
        }
    }
}

impl SpawnNudge {
    /// Nudge for a launch facing.
    pub fn for_facing(&self, facing: Facing) -> Vec2 {
        match facing {
            Facing::Up => self.up,
            Facing::Down => self.down,
            Facing::Left => self.left,
            Facing::Right => self.right,
        }
    }
}

/// Monster tuning. One table per monster kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonsterConfig {
    /// Movement speed (pixels per second)
    pub speed: f32,
    /// Starting health
    pub health: i32,
    /// Within this distance the monster turns to face the player
    pub notice_radius: f32,
    /// Within this distance (and outside attack range) it walks toward the player
    pub walk_radius: f32,
    /// Within this distance it attacks
    pub attack_radius: f32,
    /// Attack animation frame on which the strike or shot happens
    pub trigger_frame: u32,
    /// Distance from the sprite center to the bullet spawn point (ranged only)
    #[serde(default)]
    pub muzzle_offset: f32,
}

impl MonsterConfig {
    /// Melee monster defaults.
    pub fn coffin() -> Self {
        Self {
            speed: 140.0,
            health: 3,
            notice_radius: 550.0,
            walk_radius: 400.0,
            attack_radius: 50.0,
            trigger_frame: 4,
            muzzle_offset: 0.0,
        }
    }

    /// Ranged monster defaults.
    pub fn cactus() -> Self {
        Self {
            speed: 95.0,
            health: 2,
            notice_radius: 600.0,
            walk_radius: 500.0,
            attack_radius: 350.0,
            trigger_frame: 6,
            muzzle_offset: 100.0,
        }
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        positive(&format!("{name}.speed"), self.speed)?;
        at_least_one(&format!("{name}.health"), self.health)?;
        non_negative(&format!("{name}.notice_radius"), self.notice_radius)?;
        non_negative(&format!("{name}.walk_radius"), self.walk_radius)?;
        non_negative(&format!("{name}.attack_radius"), self.attack_radius)?;
        non_negative(&format!("{name}.muzzle_offset"), self.muzzle_offset)?;

        // Allowed, but the monster will behave oddly.
        if !(self.notice_radius >= self.walk_radius && self.walk_radius >= self.attack_radius) {
            warn!(
                "{} radii are not ordered notice >= walk >= attack ({} / {} / {})",
                name, self.notice_radius, self.walk_radius, self.attack_radius
            );
        }
        Ok(())
    }
}

/// Projectile tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Travel speed (pixels per second)
    pub speed: f32,
    /// Time before an unobstructed projectile expires (seconds)
    pub lifetime_secs: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 600.0,
            lifetime_secs: 1.0,
        }
    }
}

/// How hitboxes are derived from sprite bounds.
///
/// Each value is the fraction of the sprite dimension removed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitboxConfig {
    pub actor_shrink_x: f32,
    pub actor_shrink_y: f32,
    pub obstacle_shrink_y: f32,
}

impl Default for HitboxConfig {
    fn default() -> Self {
        Self {
            actor_shrink_x: 0.5,
            actor_shrink_y: 0.5,
            obstacle_shrink_y: 1.0 / 3.0,
        }
    }
}

fn positive(field: &str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field: field.to_string(), value })
    }
}

fn non_negative(field: &str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative { field: field.to_string(), value })
    }
}

fn at_least_one(field: &str, value: i32) -> Result<(), ConfigError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(ConfigError::NoHealth { field: field.to_string(), value })
    }
}
