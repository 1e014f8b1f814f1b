use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Opponent controller: track the ball with a fixed dead-zone.
///
/// The paddle only moves when the ball is more than `opponent_deadzone`
/// units from the paddle center, and then by at most `opponent_speed` per
/// tick. The resulting reaction lag is what keeps the opponent beatable.
pub fn move_opponent(world: &mut World, config: &Config) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => ball.pos.y,
            None => return,
        }
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }

        let paddle_center = paddle.y + config.paddle_height / 2.0;
        if paddle_center < ball_y - config.opponent_deadzone {
            paddle.y += config.opponent_speed;
        } else if paddle_center > ball_y + config.opponent_deadzone {
            paddle.y -= config.opponent_speed;
        }

        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
