//! Score and combo accumulation
//!
//! Pure accumulation logic, owned by the game state and independent of the
//! entity modules.

use serde::{Deserialize, Serialize};

use crate::consts::COMBO_BONUS_FRACTION;

/// Score plus combo counter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreKeeper {
    score: u64,
    combo: u32,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// Add points with the combo bonus applied
    ///
    /// Each successful add increments the combo counter, then awards
    /// `points + floor(points * combo * 0.1)`. Negative input is rejected as
    /// a logged no-op; the score never decreases. Returns the total awarded
    /// (0 on rejection).
    pub fn add(&mut self, points: i64) -> u64 {
        if points < 0 {
            log::warn!("rejected invalid score delta: {points}");
            return 0;
        }
        self.combo += 1;
        let bonus = (points as f64 * (self.combo as f64 * COMBO_BONUS_FRACTION)).floor() as u64;
        let awarded = points as u64 + bonus;
        self.score += awarded;
        log::debug!(
            "score +{awarded} ({points} base, {bonus} combo bonus at x{})",
            self.combo
        );
        awarded
    }

    /// Zero the score (explicit game restart only)
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Zero the combo counter (game over and game restart)
    pub fn reset_combo(&mut self) {
        self.combo = 0;
    }
}
