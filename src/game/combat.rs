//! Combat Resolution
//!
//! Runs once per frame after every actor has moved and every new
//! projectile has been placed. All tests are silhouette overlaps.
//!
//! Order:
//! 1. Projectiles touching an obstacle are destroyed.
//! 2. Projectiles touching the player are destroyed; the player takes one hit.
//! 3. Each remaining projectile touching monsters is destroyed; every
//!    monster it touches takes one hit.
//!
//! Destroyed projectiles are only marked inactive here; the world compacts
//! them at the end of the frame.

use crate::core::vec2::Vec2;
use crate::game::collision::sprites_overlap;
use crate::game::map::Obstacle;
use crate::game::monster::{Monster, MonsterId};
use crate::game::player::Player;
use crate::game::projectile::Projectile;

/// Outcome of one combat pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombatReport {
    /// Where projectiles were stopped by obstacles
    pub blocked: Vec<Vec2>,
    /// Projectiles that reached the player this frame
    pub player_contacts: usize,
    /// The player lost health
    pub player_hit: bool,
    /// Monsters that lost health, in hit order
    pub monster_hits: Vec<MonsterId>,
}

/// Resolve projectile collisions for one frame.
pub fn resolve_combat(
    player: &mut Player,
    monsters: &mut [Monster],
    projectiles: &mut [Projectile],
    obstacles: &[Obstacle],
) -> CombatReport {
    let mut report = CombatReport::default();

    // 1. Obstacles
    for projectile in projectiles.iter_mut().filter(|p| p.active) {
        let blocked = obstacles
            .iter()
            .any(|o| sprites_overlap(&o.rect, o.frame.mask(), &projectile.rect, projectile.mask()));
        if blocked {
            projectile.active = false;
            report.blocked.push(projectile.position);
        }
    }

    // 2. Player
    if player.body.active {
        let body = &player.body;
        if let Some(mask) = body.mask() {
            for projectile in projectiles.iter_mut().filter(|p| p.active) {
                if sprites_overlap(&body.rect, mask, &projectile.rect, projectile.mask()) {
                    projectile.active = false;
                    report.player_contacts += 1;
                }
            }
        }
        if report.player_contacts > 0 {
            report.player_hit = player.body.take_damage();
        }
    }

    // 3. Monsters
    for projectile in projectiles.iter_mut().filter(|p| p.active) {
        let mut touched = false;
        for monster in monsters.iter_mut().filter(|m| m.body.active) {
            let overlaps = monster
                .body
                .mask()
                .is_some_and(|mask| sprites_overlap(&monster.body.rect, mask, &projectile.rect, projectile.mask()));
            if overlaps {
                touched = true;
                if monster.body.take_damage() {
                    report.monster_hits.push(monster.id);
                }
            }
        }
        if touched {
            projectile.active = false;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mask::Mask;
    use crate::core::rect::Rect;
    use crate::game::animation::Frame;
    use crate::game::config::GameConfig;
    use crate::game::entity::tests::test_animations;
    use crate::game::entity::ActorKind;
    use crate::game::monster::MonsterKind;
    use crate::game::projectile::SpawnRequest;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), test_animations(), &GameConfig::default())
    }

    fn monster_at(id: u32, kind: MonsterKind, x: f32, y: f32) -> Monster {
        Monster::new(MonsterId(id), kind, Vec2::new(x, y), test_animations(), &GameConfig::default())
    }

    fn bullet_at(x: f32, y: f32) -> Projectile {
        let request = SpawnRequest {
            position: Vec2::new(x, y),
            direction: Vec2::RIGHT,
            source: ActorKind::Cactus,
        };
        Projectile::new(request, 600.0, Frame::solid(8, 8))
    }

    fn wall_at(x: i32, y: i32) -> Obstacle {
        let rect = Rect::new(x, y, 64, 64);
        Obstacle::with_hitbox(rect, rect, Frame::solid(64, 64))
    }

    #[test]
    fn test_obstacle_stops_projectile_before_player() {
        let mut player = player_at(100.0, 100.0);
        let mut projectiles = vec![bullet_at(100.0, 100.0)];
        let obstacles = [wall_at(80, 80)];

        let report = resolve_combat(&mut player, &mut [], &mut projectiles, &obstacles);
        assert_eq!(report.blocked.len(), 1);
        assert!(!report.player_hit);
        assert_eq!(player.body.health, 3);
        assert!(!projectiles[0].active);
    }

    #[test]
    fn test_player_hit_once_per_pass() {
        let mut player = player_at(100.0, 100.0);
        let mut projectiles = vec![bullet_at(95.0, 100.0), bullet_at(105.0, 100.0)];

        let report = resolve_combat(&mut player, &mut [], &mut projectiles, &[]);
        assert_eq!(report.player_contacts, 2);
        assert!(report.player_hit);
        assert_eq!(player.body.health, 2);
        assert!(projectiles.iter().all(|p| !p.active));
    }

    #[test]
    fn test_projectile_hits_every_overlapped_monster() {
        let mut player = player_at(1000.0, 1000.0);
        let mut monsters = vec![
            monster_at(0, MonsterKind::Coffin, 300.0, 300.0),
            monster_at(1, MonsterKind::Cactus, 340.0, 300.0),
            monster_at(2, MonsterKind::Cactus, 600.0, 300.0),
        ];
        let mut projectiles = vec![bullet_at(320.0, 300.0)];

        let report = resolve_combat(&mut player, &mut monsters, &mut projectiles, &[]);
        assert_eq!(report.monster_hits, vec![MonsterId(0), MonsterId(1)]);
        assert_eq!(monsters[0].body.health, 2);
        assert_eq!(monsters[1].body.health, 1);
        assert_eq!(monsters[2].body.health, 2);
        assert!(!projectiles[0].active);
    }

    #[test]
    fn test_transparent_overlap_is_not_a_hit() {
        let mut player = player_at(1000.0, 1000.0);
        let mut monsters = vec![monster_at(0, MonsterKind::Coffin, 300.0, 300.0)];
        // Disc bullet whose bounding box clips the monster's corner only
        let request = SpawnRequest {
            position: Vec2::new(262.0, 262.0),
            direction: Vec2::RIGHT,
            source: ActorKind::Player,
        };
        let mut projectiles = vec![Projectile::new(request, 600.0, Frame::new(Mask::disc(16, 16)))];
        assert!(projectiles[0].rect.intersects(&monsters[0].body.rect));

        let report = resolve_combat(&mut player, &mut monsters, &mut projectiles, &[]);
        assert!(report.monster_hits.is_empty());
        assert!(projectiles[0].active);
    }

    #[test]
    fn test_invulnerable_monster_still_absorbs_projectile() {
        let mut player = player_at(1000.0, 1000.0);
        let mut monsters = vec![monster_at(0, MonsterKind::Coffin, 300.0, 300.0)];
        monsters[0].body.take_damage();
        let mut projectiles = vec![bullet_at(300.0, 300.0)];

        let report = resolve_combat(&mut player, &mut monsters, &mut projectiles, &[]);
        assert!(report.monster_hits.is_empty());
        assert_eq!(monsters[0].body.health, 2);
        assert!(!projectiles[0].active);
    }
}
