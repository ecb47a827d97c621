//! Session state and core simulation types

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Direction, Paddle};
use super::scoreboard::{Scoreboard, Winner};
use crate::audio::Tone;
use crate::consts::*;

/// Which half of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Who drives the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Player vs player
    Pvp,
    /// Player vs AI
    Pve,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Pvp => "1 vs 1",
            Mode::Pve => "1 vs AI",
        }
    }
}

/// Current phase of the session, derived from the flags and the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a mode to be picked
    NotStarted,
    Running,
    Paused,
    /// A side reached the winning score
    Finished,
}

/// Something a tick produced that the host may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    PaddleHit(Side),
    /// The named side scored
    Scored(Side),
    Finished(Winner),
}

impl GameEvent {
    /// Tone to play for this event, if any
    pub fn tone(&self) -> Option<Tone> {
        match self {
            GameEvent::WallBounce => Some(Tone::WALL),
            GameEvent::PaddleHit(_) => Some(Tone::PADDLE),
            GameEvent::Scored(_) => Some(Tone::SCORE),
            GameEvent::Finished(_) => None,
        }
    }
}

/// One match: two paddles, a ball, a scoreboard and the session flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub scoreboard: Scoreboard,
    /// `None` until a mode is selected; set once
    mode: Option<Mode>,
    started: bool,
    paused: bool,
    exit_requested: bool,
    /// Ticks that advanced the simulation
    pub ticks: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_WINNING_SCORE)
    }
}

impl Session {
    pub fn new(winning_score: u32) -> Self {
        Self {
            left: Paddle::new(-PADDLE_X),
            right: Paddle::new(PADDLE_X),
            ball: Ball::new(),
            scoreboard: Scoreboard::new(winning_score),
            mode: None,
            started: false,
            paused: false,
            exit_requested: false,
            ticks: 0,
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::NotStarted
        } else if self.scoreboard.has_winner() {
            Phase::Finished
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    /// Pick the mode and start. Ignored once started.
    pub fn select_mode(&mut self, mode: Mode) -> bool {
        if self.started {
            return false;
        }
        self.mode = Some(mode);
        self.started = true;
        log::info!("Game started: {}", mode.as_str());
        true
    }

    /// Toggle pause. Ignored before start.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started {
            return false;
        }
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
        true
    }

    /// Final confirmation once the match is over
    pub fn confirm(&mut self) -> bool {
        if self.phase() != Phase::Finished {
            return false;
        }
        self.exit_requested = true;
        true
    }

    pub fn should_exit(&self) -> bool {
        self.exit_requested
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn steer(&mut self, side: Side, dir: Direction) {
        self.paddle_mut(side).set_velocity(dir);
    }

    /// Winner, once the match is over
    pub fn winner(&self) -> Option<Winner> {
        (self.phase() == Phase::Finished).then(|| self.scoreboard.determine_winner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let session = Session::default();
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.mode(), None);
        assert_eq!(session.left.pos.x, -350.0);
        assert_eq!(session.right.pos.x, 350.0);
        assert_eq!(session.scoreboard.winning_score(), 5);
    }

    #[test]
    fn test_mode_is_set_once() {
        let mut session = Session::default();
        assert!(session.select_mode(Mode::Pve));
        assert!(!session.select_mode(Mode::Pvp));
        assert_eq!(session.mode(), Some(Mode::Pve));
        assert_eq!(session.phase(), Phase::Running);
    }

    #[test]
    fn test_pause_needs_start() {
        let mut session = Session::default();
        assert!(!session.toggle_pause());
        assert_eq!(session.phase(), Phase::NotStarted);

        session.select_mode(Mode::Pvp);
        assert!(session.toggle_pause());
        assert_eq!(session.phase(), Phase::Paused);
        assert!(session.toggle_pause());
        assert_eq!(session.phase(), Phase::Running);
    }

    #[test]
    fn test_confirm_only_when_finished() {
        let mut session = Session::new(1);
        session.select_mode(Mode::Pvp);
        assert!(!session.confirm());
        assert!(!session.should_exit());

        session.scoreboard.award_right_point();
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.winner(), Some(Winner::Right));
        assert!(session.confirm());
        assert!(session.should_exit());
    }

    #[test]
    fn test_event_tones() {
        assert_eq!(GameEvent::WallBounce.tone(), Some(Tone::WALL));
        assert_eq!(GameEvent::PaddleHit(Side::Left).tone(), Some(Tone::PADDLE));
        assert_eq!(GameEvent::Scored(Side::Right).tone(), Some(Tone::SCORE));
        assert_eq!(GameEvent::Finished(Winner::Left).tone(), None);
    }
}
