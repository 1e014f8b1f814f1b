use glam::Vec2;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Mouse-controlled player paddle
    Left,
    /// Reactive opponent paddle
    Right,
}

/// Paddle component
///
/// `y` is the top-left corner of the paddle rectangle, kept within
/// `[0, field_height - paddle_height]`.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component - position and per-tick velocity
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Recenter the ball and serve toward a random side.
    ///
    /// Horizontal speed is always the full base speed so the serve never
    /// stalls; vertical speed is uniform in [-speed, speed).
    pub fn reset(&mut self, center: Vec2, speed: f32, rng: &mut crate::GameRng) {
        use rand::Rng;

        self.pos = center;
        self.vel.x = if rng.0.gen_bool(0.5) { speed } else { -speed };
        self.vel.y = speed * rng.0.gen_range(-1.0..1.0);
    }
}
