//! Velocity integration, the boss hold station, and sprite animation.

use hecs::World;

use scrapline_core::components::{BossState, SpriteAnimation};
use scrapline_core::types::{Position, Velocity};

/// Integrate velocities, park the boss at its hold station, and step
/// sprite animations.
pub fn run(world: &mut World) {
    for (_, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x;
        pos.y += vel.y;
    }

    // The boss marches in from the right and stops at its hold x.
    for (_, (pos, vel, boss)) in world.query_mut::<(&mut Position, &mut Velocity, &BossState)>() {
        if pos.x <= boss.hold_x {
            pos.x = boss.hold_x;
            vel.x = 0.0;
        }
    }

    for (_, anim) in world.query_mut::<&mut SpriteAnimation>() {
        anim.frame += anim.step;
        if anim.frame >= anim.frame_count as f64 {
            anim.frame = 0.0;
        }
    }
}
