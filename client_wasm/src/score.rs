//! Score display sink: two DOM elements whose text tracks the counters.

use game_core::Score;
use web_sys::Element;

pub struct ScoreDisplay {
    player: Element,
    opponent: Element,
}

impl ScoreDisplay {
    pub fn new(player: Element, opponent: Element) -> Self {
        Self { player, opponent }
    }

    /// Idempotent: called whenever either counter changed, and on
    /// start/reset to show the zeroes.
    pub fn set(&self, score: Score) {
        self.player.set_text_content(Some(&score.player.to_string()));
        self.opponent
            .set_text_content(Some(&score.opponent.to_string()));
    }
}
