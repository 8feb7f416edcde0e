//! Frame snapshot construction.
//!
//! Read-only over the world. View lists are sorted by entity id so the
//! same world always serializes to the same bytes.

use hecs::World;

use scrapline_core::components::{Enemy, Player, PlayerShot, Projectile, SpriteAnimation};
use scrapline_core::enums::{SessionPhase, ShotOwner};
use scrapline_core::events::SessionEvent;
use scrapline_core::state::{EnemyView, FrameSnapshot, HudView, PlayerView, ShotView};
use scrapline_core::types::{Hitbox, Position, SimTime};

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SessionPhase,
    scroll: f64,
    events: Vec<SessionEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        scroll,
        player: build_player(world),
        enemies: build_enemies(world),
        shots: build_shots(world),
        hud: build_hud(world),
        banner: banner_for(phase),
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position, &SpriteAnimation)>()
        .iter()
        .next()
        .map(|(_, (player, pos, anim))| PlayerView {
            position: *pos,
            facing: player.facing,
            grounded: player.grounded,
            sprite_frame: anim.frame as u32,
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Hitbox, &SpriteAnimation)>()
        .iter()
        .map(|(entity, (enemy, pos, hitbox, anim))| EnemyView {
            id: entity.id(),
            position: *pos,
            kind: enemy.kind,
            sprite_frame: anim.frame as u32,
            hit_points: enemy.hit_points,
            size: *hitbox,
        })
        .collect();
    enemies.sort_by_key(|view| view.id);
    enemies
}

fn build_shots(world: &World) -> Vec<ShotView> {
    let mut shots: Vec<ShotView> = world
        .query::<(&Projectile, &Position, Option<&PlayerShot>)>()
        .iter()
        .map(|(entity, (projectile, pos, player_shot))| ShotView {
            id: entity.id(),
            position: *pos,
            owner: if player_shot.is_some() {
                ShotOwner::Player
            } else {
                ShotOwner::Enemy
            },
            radius: projectile.radius,
        })
        .collect();
    shots.sort_by_key(|view| view.id);
    shots
}

fn build_hud(world: &World) -> HudView {
    world
        .query::<&Player>()
        .iter()
        .next()
        .map(|(_, player)| HudView {
            hearts: player.lives,
            score: player.score,
        })
        .unwrap_or_default()
}

fn banner_for(phase: SessionPhase) -> Option<String> {
    match phase {
        SessionPhase::Playing { .. } => None,
        SessionPhase::RoundBreak { next } => Some(format!(
            "Round {} is Starting! Press ENTER to continue",
            next.word()
        )),
        SessionPhase::Victory => Some("You Win!".to_string()),
        SessionPhase::GameOver => Some("Game Over".to_string()),
    }
}
