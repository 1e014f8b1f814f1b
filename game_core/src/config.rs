use crate::Side;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_INSET: f32 = 50.0; // Distance from field edge

    // Opponent controller
    pub const OPPONENT_SPEED: f32 = 5.0; // units per tick
    pub const OPPONENT_DEADZONE: f32 = 35.0; // Reaction lag, keeps the opponent beatable

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 5.0; // units per tick
    pub const BALL_SPEEDUP: f32 = 1.1; // Multiply horizontal speed on paddle hit, uncapped

    // Loop
    pub const TICK_MS: i32 = 16; // ~60 Hz
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub opponent_speed: f32,
    pub opponent_deadzone: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_speedup: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            opponent_speed: Params::OPPONENT_SPEED,
            opponent_deadzone: Params::OPPONENT_DEADZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_speedup: Params::BALL_SPEEDUP,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the X position of a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.field_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Clamp a paddle's top-left Y into field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.field_height - self.paddle_height)
    }

    /// Vertical center for a freshly spawned paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    /// Field center, where the ball serves from
    pub fn field_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}
