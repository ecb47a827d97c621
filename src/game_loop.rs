//! Frame driver
//!
//! Converts variable frame times into fixed simulation ticks, applies queued input at each
//! tick boundary and forwards tick events to the audio sink.

use crate::audio::AudioSink;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::input::{InputQueue, KeyEvent};
use crate::renderer::{RenderSurface, draw_session};
use crate::settings::Settings;
use crate::sim::{GameEvent, Session, tick};

/// A session plus everything needed to run it in real time
pub struct GameLoop<A: AudioSink> {
    pub session: Session,
    pub input: InputQueue,
    audio: A,
    accumulator: f32,
    sim_dt: f32,
    /// Events from the latest tick
    events: Vec<GameEvent>,
}

impl<A: AudioSink> GameLoop<A> {
    pub fn new(settings: &Settings, audio: A) -> Self {
        Self {
            session: Session::new(settings.winning_score),
            input: InputQueue::new(),
            audio,
            accumulator: 0.0,
            sim_dt: settings.sim_dt(),
            events: Vec::new(),
        }
    }

    pub fn sim_dt(&self) -> f32 {
        self.sim_dt
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    /// Queue a key transition for the next tick
    pub fn push_key(&mut self, event: KeyEvent) {
        self.input.push_key(event);
    }

    /// Apply pending input, run one tick and play its tones
    pub fn step(&mut self) -> &[GameEvent] {
        self.events.clear();
        self.input.drain_into(&mut self.session);
        tick(&mut self.session, &mut self.events);

        for event in &self.events {
            if let Some(tone) = event.tone() {
                self.audio.play_tone(tone);
            }
        }
        &self.events
    }

    /// Advance by a frame delta (seconds). Returns the number of ticks run.
    pub fn update(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.sim_dt && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= self.sim_dt;
            substeps += 1;
        }

        // Drop the backlog rather than chase it next frame
        if substeps == MAX_SUBSTEPS && self.accumulator >= self.sim_dt {
            log::trace!("Dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        substeps
    }

    pub fn render(&self, surface: &mut dyn RenderSurface) {
        draw_session(&self.session, surface);
    }

    pub fn should_exit(&self) -> bool {
        self.session.should_exit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Tone;
    use crate::consts::BALL_SIZE;
    use crate::input::Key;
    use crate::renderer::{Color, DrawCommand, DrawList, ShapeKind};
    use crate::sim::{Mode, Phase, Side};
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder(Vec<Tone>);

    impl AudioSink for Recorder {
        fn play_tone(&mut self, tone: Tone) {
            self.0.push(tone);
        }
    }

    fn new_loop() -> GameLoop<Recorder> {
        GameLoop::new(&Settings::default(), Recorder::default())
    }

    #[test]
    fn test_substep_cap() {
        let mut game = new_loop();
        assert_eq!(game.update(0.5), MAX_SUBSTEPS);
        assert_eq!(game.update(0.1), MAX_SUBSTEPS);
        assert_eq!(game.update(0.001), 0);
    }

    #[test]
    fn test_accumulates_short_frames() {
        let mut game = new_loop();
        assert_eq!(game.update(0.006), 0);
        assert_eq!(game.update(0.006), 1);
    }

    #[test]
    fn test_mode_key_starts_play() {
        let mut game = new_loop();
        game.update(0.1);
        assert_eq!(game.session.phase(), Phase::NotStarted);
        assert_eq!(game.session.ball.pos, Vec2::ZERO);

        game.push_key(KeyEvent::Down(Key::Two));
        let ticks = game.update(0.1);
        assert_eq!(game.session.mode(), Some(Mode::Pve));
        assert_eq!(game.session.ticks, ticks as u64);
        assert_eq!(game.session.ball.pos, Vec2::splat(4.0 * ticks as f32));
    }

    #[test]
    fn test_one_draw_per_frame() {
        let mut game = new_loop();
        game.push_key(KeyEvent::Down(Key::One));
        let mut list = DrawList::new();

        // Eight ticks, one picture of where they ended
        assert_eq!(game.update(0.1), MAX_SUBSTEPS);
        game.render(&mut list);
        assert_eq!(list.frames(), 1);
        assert_eq!(list.shape_count(), 3);
        assert_eq!(
            list.commands()[3],
            DrawCommand::Shape {
                kind: ShapeKind::Circle,
                position: Vec2::splat(32.0),
                color: Color::WHITE,
                size: Vec2::splat(BALL_SIZE),
            }
        );
    }

    #[test]
    fn test_held_key_moves_until_release() {
        let mut game = new_loop();
        game.push_key(KeyEvent::Down(Key::One));
        game.push_key(KeyEvent::Down(Key::W));
        game.step();
        game.step();
        assert_eq!(game.session.left.pos.y, 36.0);

        game.push_key(KeyEvent::Up(Key::W));
        game.step();
        assert_eq!(game.session.left.pos.y, 36.0);
    }

    #[test]
    fn test_events_play_tones() {
        let mut game = new_loop();
        game.push_key(KeyEvent::Down(Key::One));
        game.step();
        game.session.ball.pos = Vec2::new(378.0, 278.0);

        let events = game.step().to_vec();
        assert_eq!(
            events,
            vec![GameEvent::WallBounce, GameEvent::Scored(Side::Left)]
        );
        assert_eq!(game.audio().0, vec![Tone::WALL, Tone::SCORE]);
    }

    #[test]
    fn test_confirm_after_finish() {
        let settings = Settings {
            winning_score: 1,
            ..Default::default()
        };
        let mut game = GameLoop::new(&settings, Recorder::default());
        game.push_key(KeyEvent::Down(Key::Confirm));
        game.push_key(KeyEvent::Down(Key::One));
        game.step();
        assert!(!game.should_exit());

        game.session.ball.pos = Vec2::new(-378.0, 100.0);
        game.session.ball.vel.x = -4.0;
        game.step();
        assert_eq!(game.session.phase(), Phase::Finished);

        game.push_key(KeyEvent::Down(Key::Confirm));
        game.step();
        assert!(game.should_exit());

        let mut list = DrawList::new();
        game.render(&mut list);
        assert_eq!(list.texts().last().copied(), Some("Right Player Wins!"));
    }
}
