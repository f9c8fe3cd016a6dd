//! Map Layout
//!
//! Static obstacles and initial actor placements, as handed over by the
//! map-loading service. Fence tiles sit on a grid; free-standing objects
//! and actors use pixel coordinates.

use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::core::rect::Rect;
use crate::core::vec2::Vec2;
use crate::game::animation::Frame;
use crate::game::entity::ActorKind;
use crate::game::error::LoadError;

/// Default fence tile edge (pixels).
pub const DEFAULT_TILE_SIZE: u32 = 64;

/// Immovable obstacle. Never changes after the map is loaded.
#[derive(Clone, Debug)]
pub struct Obstacle {
    /// Sprite bounds (mask placement)
    pub rect: Rect,
    /// Movement-blocking box
    pub hitbox: Rect,
    /// Silhouette for stopping projectiles
    pub frame: Frame,
}

impl Obstacle {
    /// Obstacle at `top_left`, hitbox shrunk vertically by `shrink_y`
    /// of its height so actors can overlap its top edge a little.
    pub fn new(top_left: (i32, i32), frame: Frame, shrink_y: f32) -> Self {
        let rect = Rect::new(top_left.0, top_left.1, frame.width() as i32, frame.height() as i32);
        let hitbox = rect.inflate(0, -((rect.h as f32 * shrink_y) as i32));
        Self { rect, hitbox, frame }
    }

    /// Obstacle with an explicit hitbox.
    pub fn with_hitbox(rect: Rect, hitbox: Rect, frame: Frame) -> Self {
        Self { rect, hitbox, frame }
    }
}

/// Obstacle as placed in a layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObstaclePlacement {
    /// Fence tile at grid cell (col, row)
    Fence { col: i32, row: i32 },
    /// Free-standing object with its own size, pixel top-left
    Object { x: i32, y: i32, width: u32, height: u32 },
}

/// Actor as placed in a layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActorPlacement {
    pub kind: ActorKind,
    pub x: f32,
    pub y: f32,
}

impl ActorPlacement {
    pub fn new(kind: ActorKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Everything the map-loading service provides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapLayout {
    /// Play area width (pixels)
    pub width: u32,
    /// Play area height (pixels)
    pub height: u32,
    /// Fence grid size (pixels)
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
    /// Static obstacles
    #[serde(default)]
    pub obstacles: Vec<ObstaclePlacement>,
    /// Initial actors
    #[serde(default)]
    pub actors: Vec<ActorPlacement>,
}

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

impl MapLayout {
    /// Empty layout of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tile_size: DEFAULT_TILE_SIZE,
            obstacles: Vec::new(),
            actors: Vec::new(),
        }
    }

    /// Parse a JSON layout.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON layout file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Fenced arena with a few crates, three coffins and two cacti.
    pub fn demo() -> Self {
        Self::new(1600, 1280)
            .with_fence_border()
            .with_object(512, 384, 96, 64)
            .with_object(1024, 832, 64, 128)
            .with_actor(ActorKind::Player, 800.0, 640.0)
            .with_actor(ActorKind::Coffin, 1100.0, 640.0)
            .with_actor(ActorKind::Coffin, 500.0, 900.0)
            .with_actor(ActorKind::Coffin, 1300.0, 300.0)
            .with_actor(ActorKind::Cactus, 800.0, 300.0)
            .with_actor(ActorKind::Cactus, 300.0, 1100.0)
    }

    /// Play area in pixels.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Surround the play area with a ring of fence tiles.
    pub fn with_fence_border(mut self) -> Self {
        let tile = self.tile_size.max(1);
        let cols = (self.width / tile) as i32;
        let rows = (self.height / tile) as i32;
        for col in 0..cols {
            self.obstacles.push(ObstaclePlacement::Fence { col, row: 0 });
            self.obstacles.push(ObstaclePlacement::Fence { col, row: rows - 1 });
        }
        for row in 1..rows - 1 {
            self.obstacles.push(ObstaclePlacement::Fence { col: 0, row });
            self.obstacles.push(ObstaclePlacement::Fence { col: cols - 1, row });
        }
        self
    }

    /// Add an actor placement.
    pub fn with_actor(mut self, kind: ActorKind, x: f32, y: f32) -> Self {
        self.actors.push(ActorPlacement::new(kind, x, y));
        self
    }

    /// Add a free-standing object.
    pub fn with_object(mut self, x: i32, y: i32, width: u32, height: u32) -> Self {
        self.obstacles.push(ObstaclePlacement::Object { x, y, width, height });
        self
    }

    /// Build obstacles. Fences use `fence_frame`; objects get a solid
    /// frame of their own size.
    pub fn build_obstacles(&self, fence_frame: &Frame, shrink_y: f32) -> Vec<Obstacle> {
        let tile = self.tile_size as i32;
        self.obstacles
            .iter()
            .map(|placement| match placement {
                ObstaclePlacement::Fence { col, row } => {
                    Obstacle::new((col * tile, row * tile), fence_frame.clone(), shrink_y)
                }
                ObstaclePlacement::Object { x, y, width, height } => {
                    Obstacle::new((*x, *y), Frame::solid(*width, *height), shrink_y)
                }
            })
            .collect()
    }

    /// The single player placement.
    pub fn player_placement(&self) -> Result<ActorPlacement, LoadError> {
        let mut players = self.actors.iter().filter(|a| a.kind == ActorKind::Player);
        match (players.next(), players.next()) {
            (Some(player), None) => Ok(*player),
            _ => Err(LoadError::PlayerCount(
                self.actors.iter().filter(|a| a.kind == ActorKind::Player).count(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout() {
        let json = r#"{
            "width": 640,
            "height": 480,
            "obstacles": [
                { "type": "fence", "col": 2, "row": 3 },
                { "type": "object", "x": 100, "y": 120, "width": 48, "height": 96 }
            ],
            "actors": [
                { "kind": "Player", "x": 320.0, "y": 240.0 },
                { "kind": "Coffin", "x": 500.0, "y": 100.0 }
            ]
        }"#;
        let layout = MapLayout::from_json_str(json).unwrap();
        assert_eq!(layout.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(layout.obstacles.len(), 2);
        assert_eq!(layout.player_placement().unwrap().position(), Vec2::new(320.0, 240.0));

        let obstacles = layout.build_obstacles(&Frame::solid(64, 64), 1.0 / 3.0);
        assert_eq!(obstacles[0].rect, Rect::new(128, 192, 64, 64));
        assert_eq!(obstacles[1].rect, Rect::new(100, 120, 48, 96));
        assert_eq!(obstacles[1].hitbox.h, 64);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{ "width": 64, "height": 64, "actors": [ { "kind": "Dragon", "x": 0.0, "y": 0.0 } ] }"#;
        assert!(matches!(MapLayout::from_json_str(json), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_player_count() {
        let layout = MapLayout::new(640, 480);
        assert!(matches!(layout.player_placement(), Err(LoadError::PlayerCount(0))));

        let layout = layout
            .with_actor(ActorKind::Player, 10.0, 10.0)
            .with_actor(ActorKind::Player, 20.0, 20.0);
        assert!(matches!(layout.player_placement(), Err(LoadError::PlayerCount(2))));
    }

    #[test]
    fn test_fence_border() {
        let layout = MapLayout::new(640, 448).with_fence_border();
        // 10 columns x 7 rows: 2*10 + 2*5 tiles
        assert_eq!(layout.obstacles.len(), 30);
    }

    #[test]
    fn test_obstacle_hitbox_shrink() {
        let obstacle = Obstacle::new((0, 0), Frame::solid(64, 63), 1.0 / 3.0);
        assert_eq!(obstacle.hitbox.w, 64);
        assert_eq!(obstacle.hitbox.h, 42);
        assert_eq!(obstacle.hitbox.centery(), obstacle.rect.centery());
    }
}
