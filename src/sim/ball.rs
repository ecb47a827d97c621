//! The ball

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{
    BALL_RESET_MOVE_SPEED, BALL_START_MOVE, BALL_START_MOVE_SPEED, BOUNCE_SPEED_FACTOR,
};

/// Ball entity. Walls are the loop's business; the ball itself never clamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// `(x_move, y_move)` per tick; components only ever change sign
    pub vel: Vec2,
    /// Secondary speed scalar, scaled on every horizontal bounce. Does not feed `vel`.
    pub move_speed: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::splat(BALL_START_MOVE),
            move_speed: BALL_START_MOVE_SPEED,
        }
    }

    pub fn tick(&mut self) {
        self.pos += self.vel;
    }

    /// Top/bottom wall
    pub fn bounce_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Paddle contact
    pub fn bounce_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
        self.move_speed *= BOUNCE_SPEED_FACTOR;
    }

    /// Recentre after a point and serve back the other way.
    ///
    /// Goes through `bounce_horizontal`, so `move_speed` ends at `0.05 * 0.9`.
    pub fn reset_after_score(&mut self) {
        self.pos = Vec2::ZERO;
        self.move_speed = BALL_RESET_MOVE_SPEED;
        self.bounce_horizontal();
    }
}
