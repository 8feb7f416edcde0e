//! Collision resolution.
//!
//! Three passes run in a fixed order each frame: enemy bodies against the
//! player, enemy shots against the player, and player shots against
//! enemies. All despawns are buffered and applied at the end of the frame
//! so a single pass never observes a half-updated world.

use hecs::{Entity, World};

use scrapline_core::components::{BossState, Enemy, EnemyShot, Player, PlayerShot};
use scrapline_core::constants::{BOSS_SCORE, WALKER_SCORE};
use scrapline_core::enums::EnemyKind;
use scrapline_core::events::SessionEvent;
use scrapline_core::types::{Hitbox, Position};

use crate::rounds::SessionStats;

pub fn run(
    world: &mut World,
    now_ms: f64,
    stats: &mut SessionStats,
    events: &mut Vec<SessionEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let Some((player_entity, player_pos, player_box)) = find_player(world) else {
        return;
    };

    let mut player_hits = 0u32;
    let mut score_gain = 0u32;

    // 1. Enemy bodies against the player. A touching walker is destroyed
    //    and costs a life; the boss persists and its contact damage is
    //    rate limited by its own cooldown.
    for (entity, (enemy, pos, hitbox, boss)) in
        world.query_mut::<(&Enemy, &Position, &Hitbox, Option<&mut BossState>)>()
    {
        if !player_pos.intersects(&player_box, pos, hitbox) {
            continue;
        }
        match enemy.kind {
            EnemyKind::Walker => {
                despawn_buffer.push(entity);
                player_hits += 1;
            }
            EnemyKind::Boss => {
                if let Some(boss) = boss {
                    if boss.contact.is_ready(now_ms) {
                        boss.contact.arm(now_ms);
                        player_hits += 1;
                    }
                }
            }
        }
    }

    // 2. Enemy shots against the player. Each overlapping shot costs one
    //    life and is spent.
    for (entity, (_, pos, hitbox)) in world.query_mut::<(&EnemyShot, &Position, &Hitbox)>() {
        if player_pos.intersects(&player_box, pos, hitbox) {
            despawn_buffer.push(entity);
            player_hits += 1;
        }
    }

    // 3. Player shots against enemies. A shot is spent on the first enemy
    //    it overlaps; enemies already destroyed this frame are skipped.
    let shots: Vec<(Entity, Position, Hitbox)> = world
        .query_mut::<(&PlayerShot, &Position, &Hitbox)>()
        .into_iter()
        .map(|(entity, (_, pos, hitbox))| (entity, *pos, *hitbox))
        .collect();
    let enemies: Vec<(Entity, Position, Hitbox, EnemyKind)> = world
        .query_mut::<(&Enemy, &Position, &Hitbox)>()
        .into_iter()
        .filter(|(entity, _)| !despawn_buffer.contains(entity))
        .map(|(entity, (enemy, pos, hitbox))| (entity, *pos, *hitbox, enemy.kind))
        .collect();

    for (shot_entity, shot_pos, shot_box) in shots {
        let hit = enemies.iter().find(|(enemy_entity, pos, hitbox, _)| {
            !despawn_buffer.contains(enemy_entity)
                && shot_pos.intersects(&shot_box, pos, hitbox)
        });
        let Some(&(enemy_entity, enemy_pos, _, kind)) = hit else {
            continue;
        };
        despawn_buffer.push(shot_entity);
        match kind {
            EnemyKind::Walker => {
                despawn_buffer.push(enemy_entity);
                stats.kills += 1;
                score_gain += WALKER_SCORE;
                events.push(SessionEvent::WalkerDown {
                    x: enemy_pos.x,
                    y: enemy_pos.y,
                });
            }
            EnemyKind::Boss => {
                if let Ok(mut enemy) = world.get::<&mut Enemy>(enemy_entity) {
                    enemy.hit_points = enemy.hit_points.saturating_sub(1);
                    events.push(SessionEvent::BossHit {
                        hit_points_left: enemy.hit_points,
                    });
                    if enemy.hit_points == 0 {
                        despawn_buffer.push(enemy_entity);
                        score_gain += BOSS_SCORE;
                        stats.boss_defeated = true;
                        events.push(SessionEvent::BossDown);
                    }
                }
            }
        }
    }

    if player_hits > 0 || score_gain > 0 {
        if let Ok(mut player) = world.get::<&mut Player>(player_entity) {
            for _ in 0..player_hits {
                player.lives = player.lives.saturating_sub(1);
                events.push(SessionEvent::PlayerHit {
                    lives_left: player.lives,
                });
            }
            player.score += score_gain;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn find_player(world: &mut World) -> Option<(Entity, Position, Hitbox)> {
    world
        .query_mut::<(&Player, &Position, &Hitbox)>()
        .into_iter()
        .next()
        .map(|(entity, (_, pos, hitbox))| (entity, *pos, *hitbox))
}
