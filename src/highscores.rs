//! Score keeping
//!
//! The high score outlives individual sessions but not the process. It is a
//! plain value handed to each new session and handed back when it ends.

use serde::{Deserialize, Serialize};

/// Best score seen during this process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    /// Create an empty high score (zero)
    pub fn new() -> Self {
        Self { best: 0 }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Record a score; returns true if it beat the previous best
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}

/// Score of the running session plus the high score it feeds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    score: u64,
    high: HighScore,
}

impl Scoreboard {
    pub fn new(high: HighScore) -> Self {
        Self { score: 0, high }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> HighScore {
        self.high
    }

    /// Add points and return the new session score
    pub fn add(&mut self, points: u64) -> u64 {
        self.score = self.score.saturating_add(points);
        self.high.record(self.score);
        self.score
    }

    /// Start a fresh session score, keeping the high score
    pub fn reset(&mut self) {
        self.score = 0;
    }
}
