//! Gravity and the ground line for the player.

use hecs::World;

use scrapline_core::components::Player;
use scrapline_core::constants::{GRAVITY, GROUND_LEVEL};
use scrapline_core::types::Position;

/// Apply gravity while airborne and land on the ground line. Gravity is
/// added before integration, so the first airborne frame already moves at
/// the impulse plus one gravity step.
pub fn run(world: &mut World) {
    for (_, (player, pos)) in world.query_mut::<(&mut Player, &mut Position)>() {
        if !player.grounded {
            player.vertical_speed += GRAVITY;
        }
        pos.y += player.vertical_speed;
        if pos.y >= GROUND_LEVEL {
            pos.y = GROUND_LEVEL;
            player.vertical_speed = 0.0;
            player.grounded = true;
        }
    }
}
