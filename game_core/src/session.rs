//! Game lifecycle: one explicit state object and a two-state activity
//! machine driving the tick loop.

use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, GameRng, Paddle, Score, Side,
};
use glam::Vec2;
use hecs::World;

/// Whether the tick loop should be running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Inactive,
    Active,
}

/// Positions the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub ball_pos: Vec2,
    pub player_y: f32,
    pub opponent_y: f32,
}

/// Everything a running game owns: entity world, tuning, score, per-tick
/// events, RNG, and the activity mode. Passed around by reference; there
/// are no globals in the core.
pub struct GameSession {
    world: World,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    mode: Mode,
}

impl GameSession {
    pub fn new(seed: u64) -> Self {
        let config = Config::new();
        let mut world = World::new();

        let spawn_y = config.paddle_spawn_y();
        create_paddle(&mut world, Side::Left, spawn_y);
        create_paddle(&mut world, Side::Right, spawn_y);

        // The ball sits at center with a placeholder serve until the first
        // start re-randomizes it.
        let speed = config.ball_speed;
        create_ball(&mut world, config.field_center(), Vec2::new(speed, speed));

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            mode: Mode::Inactive,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn events(&self) -> Events {
        self.events
    }

    /// The single start/reset trigger.
    ///
    /// Inactive accepts start; active accepts reset. Returns the new mode
    /// so the shell can start or stop its ticker and relabel the button.
    pub fn toggle(&mut self) -> Mode {
        match self.mode {
            Mode::Inactive => self.start(),
            Mode::Active => self.reset(),
        }
        self.mode
    }

    fn start(&mut self) {
        self.score.reset();
        self.reset_ball();
        self.mode = Mode::Active;
    }

    fn reset(&mut self) {
        self.mode = Mode::Inactive;
        self.score.reset();
        self.reset_ball();

        let spawn_y = self.config.paddle_spawn_y();
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = spawn_y;
        }
    }

    fn reset_ball(&mut self) {
        let center = self.config.field_center();
        let speed = self.config.ball_speed;
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(center, speed, &mut self.rng);
        }
    }

    /// Input adapter entry point: applied immediately on the pointer
    /// callback, even while inactive.
    pub fn pointer_moved(&mut self, y: f32) {
        crate::systems::move_player(&mut self.world, &self.config, y);
    }

    /// Advance the simulation by one tick. A no-op while inactive.
    pub fn tick(&mut self) {
        if self.mode != Mode::Active {
            return;
        }

        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    /// Snapshot of everything the renderer paints
    pub fn frame(&self) -> Frame {
        let mut frame = Frame {
            ball_pos: self.config.field_center(),
            player_y: self.config.paddle_spawn_y(),
            opponent_y: self.config.paddle_spawn_y(),
        };

        for (_e, ball) in self.world.query::<&Ball>().iter() {
            frame.ball_pos = ball.pos;
        }
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => frame.player_y = paddle.y,
                Side::Right => frame.opponent_y = paddle.y,
            }
        }

        frame
    }
}
