//! Vertical-only paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PADDLE_LIMIT, PADDLE_SPEED};

/// Requested paddle motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Stop,
}

/// A paddle: fixed x, y moved by a discrete velocity each tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    /// One of `-speed`, `0`, `+speed`
    pub velocity_y: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
            velocity_y: 0.0,
            speed: PADDLE_SPEED,
        }
    }

    pub fn set_velocity(&mut self, dir: Direction) {
        self.velocity_y = match dir {
            Direction::Up => self.speed,
            Direction::Down => -self.speed,
            Direction::Stop => 0.0,
        };
    }

    /// Advance one tick. A move that would leave the open band is dropped.
    pub fn tick(&mut self) {
        let candidate = self.pos.y + self.velocity_y;
        if candidate > -PADDLE_LIMIT && candidate < PADDLE_LIMIT {
            self.pos.y = candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_velocity() {
        let mut paddle = Paddle::new(-350.0);
        paddle.set_velocity(Direction::Up);
        assert_eq!(paddle.velocity_y, 18.0);
        paddle.set_velocity(Direction::Up);
        assert_eq!(paddle.velocity_y, 18.0);
        paddle.set_velocity(Direction::Down);
        assert_eq!(paddle.velocity_y, -18.0);
        paddle.set_velocity(Direction::Stop);
        assert_eq!(paddle.velocity_y, 0.0);
    }

    #[test]
    fn test_blocked_at_top() {
        let mut paddle = Paddle::new(350.0);
        paddle.pos.y = 259.0;
        paddle.set_velocity(Direction::Up);
        paddle.tick();
        assert_eq!(paddle.pos.y, 259.0);

        // Still free to move back down
        paddle.set_velocity(Direction::Down);
        paddle.tick();
        assert_eq!(paddle.pos.y, 241.0);
    }

    #[test]
    fn test_stops_short_of_bound() {
        let mut paddle = Paddle::new(-350.0);
        paddle.set_velocity(Direction::Up);
        for _ in 0..100 {
            paddle.tick();
        }
        // 14 * 18 = 252; 270 would cross the bound
        assert_eq!(paddle.pos.y, 252.0);

        paddle.set_velocity(Direction::Down);
        for _ in 0..100 {
            paddle.tick();
        }
        assert_eq!(paddle.pos.y, -252.0);
    }

    #[test]
    fn test_x_never_changes() {
        let mut paddle = Paddle::new(350.0);
        paddle.set_velocity(Direction::Down);
        paddle.tick();
        assert_eq!(paddle.pos.x, 350.0);
    }

    proptest! {
        #[test]
        fn test_y_stays_in_band(start in -259.0f32..259.0, moves in prop::collection::vec(0u8..3, 0..200)) {
            let mut paddle = Paddle::new(-350.0);
            paddle.pos.y = start;
            for m in moves {
                let before = paddle.pos.y;
                paddle.set_velocity(match m {
                    0 => Direction::Up,
                    1 => Direction::Down,
                    _ => Direction::Stop,
                });
                paddle.tick();
                prop_assert!(paddle.pos.y >= -PADDLE_LIMIT && paddle.pos.y <= PADDLE_LIMIT);
                prop_assert!(paddle.pos.y == before || paddle.pos.y == before + paddle.velocity_y);
            }
        }
    }
}
