//! Score tracking and win condition

use serde::{Deserialize, Serialize};

use super::state::Side;
use crate::consts::DEFAULT_WINNING_SCORE;

/// Final outcome of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Left,
    Right,
    /// Both sides at the same score. The loop stops on the first winning point, so this
    /// should not happen in play.
    Draw,
}

impl Winner {
    /// End-of-game banner
    pub fn message(&self) -> &'static str {
        match self {
            Winner::Left => "Left Player Wins!",
            Winner::Right => "Right Player Wins!",
            Winner::Draw => "Draw!",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoreboard {
    pub left_score: u32,
    pub right_score: u32,
    winning_score: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(DEFAULT_WINNING_SCORE)
    }
}

impl Scoreboard {
    pub fn new(winning_score: u32) -> Self {
        Self {
            left_score: 0,
            right_score: 0,
            winning_score,
        }
    }

    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    pub fn award_left_point(&mut self) {
        self.left_score += 1;
    }

    pub fn award_right_point(&mut self) {
        self.right_score += 1;
    }

    /// Award a point to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.award_left_point(),
            Side::Right => self.award_right_point(),
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    /// True once either side reaches the winning score
    pub fn has_winner(&self) -> bool {
        self.left_score >= self.winning_score || self.right_score >= self.winning_score
    }

    pub fn determine_winner(&self) -> Winner {
        match self.left_score.cmp(&self.right_score) {
            std::cmp::Ordering::Greater => Winner::Left,
            std::cmp::Ordering::Less => Winner::Right,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }

    /// Text shown above each half of the court
    pub fn score_text(&self, side: Side) -> String {
        self.score(side).to_string()
    }
}
