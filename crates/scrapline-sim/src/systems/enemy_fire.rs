//! Enemy firing. Enemies hold fire in round one; from round two on, every
//! enemy whose cooldown has elapsed shoots leftward from its muzzle.

use hecs::World;

use scrapline_core::components::Enemy;
use scrapline_core::enums::Round;
use scrapline_core::events::SessionEvent;
use scrapline_core::types::{Hitbox, Position};

use crate::world_setup;

pub fn run(world: &mut World, round: Round, now_ms: f64, events: &mut Vec<SessionEvent>) {
    if round < Round::Two {
        return;
    }

    let mut muzzles = Vec::new();
    for (_, (enemy, pos, hitbox)) in world.query_mut::<(&mut Enemy, &Position, &Hitbox)>() {
        if enemy.fire.is_ready(now_ms) {
            enemy.fire.arm(now_ms);
            muzzles.push((pos.x, pos.y + hitbox.height / 2.0));
        }
    }

    for (x, y) in muzzles {
        world_setup::spawn_enemy_shot(world, x, y);
        events.push(SessionEvent::EnemyFired);
    }
}
