//! Despawn entities that leave the playfield.

use hecs::{Entity, World};

use scrapline_core::components::{Enemy, Projectile};
use scrapline_core::constants::WINDOW_WIDTH;
use scrapline_core::enums::EnemyKind;
use scrapline_core::types::Position;

/// Cull shots that exit either edge and walkers that march off the left
/// edge. The boss is exempt: it holds station inside the playfield.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, _)) in world.query_mut::<(&Position, &Projectile)>() {
        if pos.x < 0.0 || pos.x > WINDOW_WIDTH {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, enemy)) in world.query_mut::<(&Position, &Enemy)>() {
        if enemy.kind == EnemyKind::Walker && pos.x < 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
