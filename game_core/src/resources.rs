/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_opponent(&mut self) {
        self.opponent += 1;
    }

    pub fn reset(&mut self) {
        self.player = 0;
        self.opponent = 0;
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when either score counter changed this tick
    pub fn score_changed(&self) -> bool {
        self.player_scored || self.opponent_scored
    }
}

/// Random number generator for serve directions
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
