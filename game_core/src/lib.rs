pub mod components;
pub mod config;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation.
///
/// Order matters: the ball moves, collisions respond, exits score, and only
/// then does the opponent react, so its view of the ball is one tick fresh.
/// Rendering happens after this returns, from a [`session::Frame`] snapshot.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    events.clear();

    move_ball(world);
    check_collisions(world, config, events);
    check_scoring(world, config, score, events, rng);
    move_opponent(world, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
