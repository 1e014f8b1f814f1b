use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Resolve ball collisions with the top/bottom walls and both paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return,
    };

    // Wall bounce: reaching or passing the top/bottom edge flips the
    // vertical direction. Position is left as-is, matching the field rule.
    if ball_pos.y <= 0.0 || ball_pos.y >= config.field_height {
        ball_vel.y = -ball_vel.y;
        events.ball_hit_wall = true;
    }

    // Paddle hit: point-in-rectangle test of the ball center, boundary
    // inclusive. Contact alone registers; no approach-direction check.
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    for (side, paddle_y) in paddles {
        let paddle_x = config.paddle_x(side);
        let inside = ball_pos.x >= paddle_x
            && ball_pos.x <= paddle_x + config.paddle_width
            && ball_pos.y >= paddle_y
            && ball_pos.y <= paddle_y + config.paddle_height;

        if inside {
            // Horizontal: previous magnitude times the speed-up factor,
            // directed away from the struck paddle. There is no cap; long
            // volleys keep getting faster.
            let sped_up = ball_vel.x.abs() * config.ball_speedup;
            ball_vel.x = match side {
                Side::Left => sped_up,
                Side::Right => -sped_up,
            };

            // Vertical: deflection steepens with the strike offset from the
            // paddle center, as a signed fraction of half the paddle height.
            let half_height = config.paddle_height / 2.0;
            let offset = (paddle_y + half_height - ball_pos.y) / half_height;
            ball_vel.y = -offset * config.ball_speed;

            events.ball_hit_paddle = true;
            break;
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = ball_vel;
    }
}
