//! Player input handling: walking, jumping, and firing.

use hecs::World;

use scrapline_core::components::Player;
use scrapline_core::constants::{JUMP_IMPULSE, PLAYER_SPEED, WINDOW_WIDTH};
use scrapline_core::enums::Facing;
use scrapline_core::events::SessionEvent;
use scrapline_core::input::FrameInput;
use scrapline_core::types::{Hitbox, Position};

use crate::rounds::SessionStats;
use crate::world_setup;

/// Apply one frame of input to the player. Horizontal movement is clamped
/// to the playfield; a jump only starts from the ground; firing is gated
/// by the player's cooldown.
pub fn run(
    world: &mut World,
    input: FrameInput,
    now_ms: f64,
    stats: &mut SessionStats,
    events: &mut Vec<SessionEvent>,
) {
    let mut muzzle = None;
    for (_, (player, pos, hitbox)) in world.query_mut::<(&mut Player, &mut Position, &Hitbox)>() {
        if input.left {
            pos.x -= PLAYER_SPEED;
            player.facing = Facing::Left;
        }
        if input.right {
            pos.x += PLAYER_SPEED;
            player.facing = Facing::Right;
        }
        pos.x = pos.x.clamp(0.0, WINDOW_WIDTH - hitbox.width);

        if input.jump && player.grounded {
            player.vertical_speed = JUMP_IMPULSE;
            player.grounded = false;
        }

        if input.fire && player.fire.is_ready(now_ms) {
            player.fire.arm(now_ms);
            let muzzle_x = match player.facing {
                Facing::Right => pos.x + hitbox.width,
                Facing::Left => pos.x,
            };
            muzzle = Some((muzzle_x, pos.y + hitbox.height / 2.0, player.facing));
        }
    }

    if let Some((x, y, facing)) = muzzle {
        world_setup::spawn_player_shot(world, x, y, facing);
        stats.shots_fired += 1;
        events.push(SessionEvent::PlayerFired);
    }
}
