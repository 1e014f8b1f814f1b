use crate::{Config, Paddle, Side};
use hecs::World;

/// Map a pointer Y position onto the player paddle.
///
/// The pointer tracks the paddle's vertical center; the stored position is
/// top-left. Out-of-range positions are clamped, never rejected.
pub fn move_player(world: &mut World, config: &Config, pointer_y: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.y = config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0);
        }
    }
}
