//! Reactive paddle controller
//!
//! Pure dead-zone tracking with no smoothing. The paddle follows the ball's y
//! only while the ball is on its half and heading its way.

use super::ball::Ball;
use super::paddle::{Direction, Paddle};
use super::state::Side;
use crate::consts::{AI_ACTIVE_X, AI_TOLERANCE, WALL_Y};

/// Controller constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiTuning {
    /// Vertical dead zone
    pub tolerance: f32,
    /// Distance from the centre line the ball must pass before the AI reacts
    pub active_x: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            tolerance: AI_TOLERANCE,
            active_x: AI_ACTIVE_X,
        }
    }
}

/// True when the ball is moving toward `side` and already past the activation line
pub fn engaged(ball: &Ball, side: Side, tuning: &AiTuning) -> bool {
    match side {
        Side::Right => ball.vel.x > 0.0 && ball.pos.x > tuning.active_x,
        Side::Left => ball.vel.x < 0.0 && ball.pos.x < -tuning.active_x,
    }
}

/// Direction the paddle on `side` should take this tick
pub fn steer(ball: &Ball, paddle: &Paddle, side: Side, tuning: &AiTuning) -> Direction {
    if !engaged(ball, side, tuning) {
        return Direction::Stop;
    }

    if ball.pos.y > paddle.pos.y + tuning.tolerance {
        Direction::Up
    } else if ball.pos.y < paddle.pos.y - tuning.tolerance {
        Direction::Down
    } else {
        Direction::Stop
    }
}

/// Height at which the ball will cross the vertical line `x`, folding its path off the
/// walls. `None` if the ball is not heading toward that line.
pub fn crossing_y(ball: &Ball, x: f32) -> Option<f32> {
    let t = (x - ball.pos.x) / ball.vel.x;
    if !t.is_finite() || t < 0.0 {
        return None;
    }

    let span = 2.0 * WALL_Y;
    let unfolded = (ball.pos.y + ball.vel.y * t + WALL_Y).rem_euclid(2.0 * span);
    let folded = if unfolded > span {
        2.0 * span - unfolded
    } else {
        unfolded
    };
    Some(folded - WALL_Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, x_move: f32) -> Ball {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(x, y);
        ball.vel.x = x_move;
        ball
    }

    #[test]
    fn test_tracks_ball_above() {
        let paddle = Paddle::new(350.0);
        let ball = ball_at(10.0, 50.0, 1.0);
        let dir = steer(&ball, &paddle, Side::Right, &AiTuning::default());
        assert_eq!(dir, Direction::Up);

        let mut paddle = paddle;
        paddle.set_velocity(dir);
        assert_eq!(paddle.velocity_y, paddle.speed);
    }

    #[test]
    fn test_tracks_ball_below() {
        let paddle = Paddle::new(350.0);
        let ball = ball_at(200.0, -21.0, 4.0);
        assert_eq!(
            steer(&ball, &paddle, Side::Right, &AiTuning::default()),
            Direction::Down
        );
    }

    #[test]
    fn test_holds_in_dead_zone() {
        let mut paddle = Paddle::new(350.0);
        paddle.pos.y = 100.0;
        let tuning = AiTuning::default();
        for y in [80.0, 100.0, 120.0] {
            let ball = ball_at(200.0, y, 4.0);
            assert_eq!(steer(&ball, &paddle, Side::Right, &tuning), Direction::Stop);
        }
    }

    #[test]
    fn test_ignores_ball_on_far_half() {
        let paddle = Paddle::new(350.0);
        let ball = ball_at(-10.0, 200.0, 4.0);
        assert_eq!(
            steer(&ball, &paddle, Side::Right, &AiTuning::default()),
            Direction::Stop
        );
    }

    #[test]
    fn test_mirrored_for_left() {
        let paddle = Paddle::new(-350.0);
        let tuning = AiTuning::default();
        assert_eq!(
            steer(&ball_at(-50.0, 100.0, -4.0), &paddle, Side::Left, &tuning),
            Direction::Up
        );
        assert_eq!(
            steer(&ball_at(-50.0, 100.0, 4.0), &paddle, Side::Left, &tuning),
            Direction::Stop
        );
    }

    #[test]
    fn test_crossing_y() {
        let mut ball = ball_at(0.0, 0.0, -4.0);
        assert_eq!(crossing_y(&ball, -100.0), Some(100.0));
        // Up to the top wall at x = -280, then 70 back down
        assert_eq!(crossing_y(&ball, -350.0), Some(210.0));
        assert_eq!(crossing_y(&ball, 350.0), None);

        ball.vel = Vec2::new(4.0, -4.0);
        assert_eq!(crossing_y(&ball, 350.0), Some(-210.0));
    }

    proptest! {
        #[test]
        fn test_idle_when_ball_moves_away(
            x in -400.0f32..400.0,
            y in -300.0f32..300.0,
            x_move in -10.0f32..=0.0,
            paddle_y in -259.0f32..259.0,
        ) {
            let mut paddle = Paddle::new(350.0);
            paddle.pos.y = paddle_y;
            let ball = ball_at(x, y, x_move);
            prop_assert_eq!(
                steer(&ball, &paddle, Side::Right, &AiTuning::default()),
                Direction::Stop
            );
        }
    }
}
