use crate::{Ball, Config, Events, GameRng, Score};
use hecs::World;

/// Check whether the ball left the field and award the point.
///
/// The two exits are an exclusive branch, so a single tick can never
/// increment both counters. Scoring resets the ball to center with a
/// re-randomized serve.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            score.increment_opponent();
            events.opponent_scored = true;
            ball.reset(config.field_center(), config.ball_speed, rng);
        } else if ball.pos.x > config.field_width {
            score.increment_player();
            events.player_scored = true;
            ball.reset(config.field_center(), config.ball_speed, rng);
        }
    }
}
