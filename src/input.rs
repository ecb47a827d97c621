//! Keyboard bindings and the between-tick command queue
//!
//! Key handlers run whenever the platform delivers an event. They only decode the key into
//! a [`Command`] and push it here; the loop applies queued commands before the next tick,
//! so a tick never sees half an input.

use std::collections::VecDeque;

use crate::sim::{Direction, Mode, Session, Side};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    One,
    Two,
    P,
    /// Click / Enter / Escape once the match is over
    Confirm,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" => Some(Key::W),
            "s" | "S" => Some(Key::S),
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            "1" => Some(Key::One),
            "2" => Some(Key::Two),
            "p" | "P" => Some(Key::P),
            "Enter" | "Escape" => Some(Key::Confirm),
            _ => None,
        }
    }
}

/// Raw key transition from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

/// Decoded input, applied to the session between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Side, Direction),
    SelectMode(Mode),
    TogglePause,
    Confirm,
}

impl Command {
    /// Binding table. Releasing either movement key of a paddle stops it.
    pub fn from_key_event(event: KeyEvent) -> Option<Self> {
        match event {
            KeyEvent::Down(key) => match key {
                Key::W => Some(Command::Steer(Side::Left, Direction::Up)),
                Key::S => Some(Command::Steer(Side::Left, Direction::Down)),
                Key::Up => Some(Command::Steer(Side::Right, Direction::Up)),
                Key::Down => Some(Command::Steer(Side::Right, Direction::Down)),
                Key::One => Some(Command::SelectMode(Mode::Pvp)),
                Key::Two => Some(Command::SelectMode(Mode::Pve)),
                Key::P => Some(Command::TogglePause),
                Key::Confirm => Some(Command::Confirm),
            },
            KeyEvent::Up(key) => match key {
                Key::W | Key::S => Some(Command::Steer(Side::Left, Direction::Stop)),
                Key::Up | Key::Down => Some(Command::Steer(Side::Right, Direction::Stop)),
                _ => None,
            },
        }
    }

    /// Apply to the session. Returns false when the command was a no-op in this phase.
    pub fn apply(self, session: &mut Session) -> bool {
        match self {
            Command::Steer(side, dir) => {
                session.steer(side, dir);
                true
            }
            Command::SelectMode(mode) => session.select_mode(mode),
            Command::TogglePause => session.toggle_pause(),
            Command::Confirm => session.confirm(),
        }
    }
}

/// FIFO of commands waiting for the next tick boundary
#[derive(Debug, Default, Clone)]
pub struct InputQueue {
    pending: VecDeque<Command>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// Decode and enqueue a key event; unbound keys are dropped
    pub fn push_key(&mut self, event: KeyEvent) -> bool {
        match Command::from_key_event(event) {
            Some(command) => {
                self.push(command);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply every pending command in arrival order
    pub fn drain_into(&mut self, session: &mut Session) {
        while let Some(command) = self.pending.pop_front() {
            if !command.apply(session) {
                log::debug!("Ignored {:?} in {:?}", command, session.phase());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Phase;

    #[test]
    fn test_dom_keys() {
        assert_eq!(Key::from_dom_key("w"), Some(Key::W));
        assert_eq!(Key::from_dom_key("S"), Some(Key::S));
        assert_eq!(Key::from_dom_key("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_dom_key("ArrowDown"), Some(Key::Down));
        assert_eq!(Key::from_dom_key("2"), Some(Key::Two));
        assert_eq!(Key::from_dom_key("Escape"), Some(Key::Confirm));
        assert_eq!(Key::from_dom_key("x"), None);
    }

    #[test]
    fn test_release_either_key_stops() {
        let mut session = Session::default();
        let mut queue = InputQueue::new();

        queue.push_key(KeyEvent::Down(Key::W));
        queue.drain_into(&mut session);
        assert_eq!(session.left.velocity_y, 18.0);

        // Releasing S while W was the last press still halts the paddle
        queue.push_key(KeyEvent::Up(Key::S));
        queue.drain_into(&mut session);
        assert_eq!(session.left.velocity_y, 0.0);

        queue.push_key(KeyEvent::Down(Key::Down));
        queue.push_key(KeyEvent::Up(Key::Up));
        queue.drain_into(&mut session);
        assert_eq!(session.right.velocity_y, 0.0);
    }

    #[test]
    fn test_commands_apply_in_order() {
        let mut session = Session::default();
        let mut queue = InputQueue::new();
        queue.push_key(KeyEvent::Down(Key::P)); // ignored, not started
        queue.push_key(KeyEvent::Down(Key::Two));
        queue.push_key(KeyEvent::Down(Key::One)); // ignored, already started
        queue.push_key(KeyEvent::Down(Key::P));
        assert_eq!(queue.len(), 4);

        queue.drain_into(&mut session);
        assert!(queue.is_empty());
        assert_eq!(session.mode(), Some(Mode::Pve));
        assert_eq!(session.phase(), Phase::Paused);
    }

    #[test]
    fn test_unbound_release_dropped() {
        let mut queue = InputQueue::new();
        assert!(!queue.push_key(KeyEvent::Up(Key::P)));
        assert!(!queue.push_key(KeyEvent::Up(Key::One)));
        assert!(queue.is_empty());
    }
}
