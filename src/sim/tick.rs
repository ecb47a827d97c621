//! Fixed timestep simulation tick
//!
//! Advances a running session by one step and reports what happened.

use super::ai::{self, AiTuning};
use super::state::{GameEvent, Mode, Phase, Session, Side};
use crate::consts::*;

/// Advance the session by one tick, appending events to `events`.
///
/// Only a running session changes; in any other phase the tick is consumed as-is.
pub fn tick(session: &mut Session, events: &mut Vec<GameEvent>) {
    if session.phase() != Phase::Running {
        return;
    }
    let Some(mode) = session.mode() else {
        return;
    };

    session.ticks += 1;

    // Left paddle is always the player
    session.left.tick();

    // Right paddle: second player or AI
    if mode == Mode::Pve {
        let dir = ai::steer(&session.ball, &session.right, Side::Right, &AiTuning::default());
        session.right.set_velocity(dir);
    }
    session.right.tick();

    session.ball.tick();

    // Top and bottom walls
    if session.ball.pos.y > WALL_Y || session.ball.pos.y < -WALL_Y {
        session.ball.bounce_vertical();
        log::trace!("Wall bounce at {:?}", session.ball.pos);
        events.push(GameEvent::WallBounce);
    }

    // Paddles, checked independently
    if session.ball.pos.distance(session.right.pos) < PADDLE_CONTACT_DIST
        && session.ball.pos.x > PADDLE_CONTACT_X
    {
        session.ball.bounce_horizontal();
        log::trace!("Right paddle hit at {:?}", session.ball.pos);
        events.push(GameEvent::PaddleHit(Side::Right));
    }
    if session.ball.pos.distance(session.left.pos) < PADDLE_CONTACT_DIST
        && session.ball.pos.x < -PADDLE_CONTACT_X
    {
        session.ball.bounce_horizontal();
        log::trace!("Left paddle hit at {:?}", session.ball.pos);
        events.push(GameEvent::PaddleHit(Side::Left));
    }

    // Out past a goal line
    let scorer = if session.ball.pos.x > GOAL_X {
        Some(Side::Left)
    } else if session.ball.pos.x < -GOAL_X {
        Some(Side::Right)
    } else {
        None
    };
    if let Some(side) = scorer {
        session.scoreboard.award(side);
        session.ball.reset_after_score();
        log::info!(
            "{:?} scores ({} - {})",
            side,
            session.scoreboard.left_score,
            session.scoreboard.right_score
        );
        events.push(GameEvent::Scored(side));
    }

    if session.scoreboard.has_winner() {
        let winner = session.scoreboard.determine_winner();
        log::info!("Game over after {} ticks: {}", session.ticks, winner.message());
        events.push(GameEvent::Finished(winner));
    }
}
