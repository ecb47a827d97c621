//! Pong Classic entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use pong_classic::audio::WebAudio;
    use pong_classic::consts::{HALF_HEIGHT, HALF_WIDTH, SIM_DT};
    use pong_classic::input::{Key, KeyEvent};
    use pong_classic::renderer::CanvasSurface;
    use pong_classic::{GameLoop, Settings};

    /// Game instance holding all state
    struct Game {
        driver: GameLoop<WebAudio>,
        surface: CanvasSurface,
        last_time: f64,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            return;
        }

        log::info!("Pong Classic starting...");

        let Some(window) = web_sys::window() else {
            log::error!("no window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("no document");
            return;
        };
        document.set_title("Pong - 1v1 / 1vAI");

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("no #canvas element");
            return;
        };
        canvas.set_width((HALF_WIDTH * 2.0) as u32);
        canvas.set_height((HALF_HEIGHT * 2.0) as u32);

        let Some(surface) = CanvasSurface::new(&canvas) else {
            log::error!("canvas has no 2d context");
            return;
        };

        let settings = Settings::load();
        let audio = WebAudio::new(settings.master_volume, settings.muted);
        let game = Rc::new(RefCell::new(Game {
            driver: GameLoop::new(&settings, audio),
            surface,
            last_time: 0.0,
        }));

        log::info!("Session ready, first to {}", settings.winning_score);

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down: one command per physical press, auto-repeat ignored
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                let Some(key) = Key::from_dom_key(&event.key()) else {
                    return;
                };
                if matches!(key, Key::Up | Key::Down) {
                    event.prevent_default();
                }
                let mut g = game.borrow_mut();
                g.driver.audio().resume();
                g.driver.push_key(KeyEvent::Down(key));
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().driver.push_key(KeyEvent::Up(key));
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click: exit confirmation once the match is over
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.driver.audio().resume();
                g.driver.push_key(KeyEvent::Down(Key::Confirm));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-up events are lost, so let go of both paddles
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.driver.push_key(KeyEvent::Up(Key::W));
                g.driver.push_key(KeyEvent::Up(Key::Up));
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut guard = game.borrow_mut();
            let g = &mut *guard;

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.driver.update(dt);
            g.driver.render(&mut g.surface);

            if g.driver.should_exit() {
                log::info!("Exit confirmed, stopping game loop");
                return;
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    web_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use pong_classic::audio::LogAudio;
    use pong_classic::consts::PADDLE_X;
    use pong_classic::input::{Key, KeyEvent};
    use pong_classic::renderer::DrawList;
    use pong_classic::sim::{Direction, Phase, Session, Side, ai};
    use pong_classic::{GameLoop, Settings};

    /// Simulated frame rate of the headless demo
    pub const DEMO_FPS: f32 = 60.0;
    /// Ten simulated minutes
    pub const DEMO_MAX_FRAMES: u64 = 60 * 60 * 10;
    /// The scripted left player re-reads the ball every this many frames
    const DEMO_REACTION_FRAMES: u64 = 4;
    /// Returns the scripted player makes in a rally before it lets the ball through
    const DEMO_RALLY_RETURNS: u32 = 3;

    /// Left-hand player driven through the same key path as a human.
    ///
    /// Tracks the ball like the AI for a few returns, then runs to the edge away from where
    /// the ball will arrive so every rally ends in a point.
    struct ScriptedPlayer {
        tuning: ai::AiTuning,
        held: Direction,
        returns: u32,
        points: u32,
        last_x_move: f32,
    }

    impl ScriptedPlayer {
        fn new() -> Self {
            Self {
                tuning: ai::AiTuning::default(),
                held: Direction::Stop,
                returns: 0,
                points: 0,
                last_x_move: 0.0,
            }
        }

        fn want(&self, session: &Session) -> Direction {
            let ball = &session.ball;
            if self.returns < DEMO_RALLY_RETURNS {
                return ai::steer(ball, &session.left, Side::Left, &self.tuning);
            }
            match ai::crossing_y(ball, -PADDLE_X) {
                Some(y) if y >= 0.0 => Direction::Down,
                Some(_) => Direction::Up,
                None => Direction::Stop,
            }
        }

        /// Press and release keys to move from the held direction to `want`
        fn press(&mut self, game: &mut GameLoop<LogAudio>, want: Direction) {
            if want == self.held {
                return;
            }
            match self.held {
                Direction::Up => game.push_key(KeyEvent::Up(Key::W)),
                Direction::Down => game.push_key(KeyEvent::Up(Key::S)),
                Direction::Stop => {}
            }
            match want {
                Direction::Up => game.push_key(KeyEvent::Down(Key::W)),
                Direction::Down => game.push_key(KeyEvent::Down(Key::S)),
                Direction::Stop => {}
            }
            self.held = want;
        }

        /// Count left returns after a frame; a point starts a new rally
        fn observe(&mut self, session: &Session) {
            let board = &session.scoreboard;
            let points = board.left_score + board.right_score;
            let ball = &session.ball;

            if points != self.points {
                self.points = points;
                self.returns = 0;
            } else if self.last_x_move < 0.0 && ball.vel.x > 0.0 && ball.pos.x < 0.0 {
                self.returns += 1;
            }
            self.last_x_move = ball.vel.x;
        }
    }

    pub struct DemoOutcome {
        pub game: GameLoop<LogAudio>,
        pub frame: DrawList,
        pub frames: u64,
    }

    /// Play a 1 vs AI match until it finishes or the frame limit runs out
    pub fn run(settings: &Settings) -> DemoOutcome {
        let mut game = GameLoop::new(settings, LogAudio::new(settings.muted));
        let mut frame = DrawList::new();
        let mut player = ScriptedPlayer::new();

        game.push_key(KeyEvent::Down(Key::Two));

        let mut frames = 0u64;
        while game.session.phase() != Phase::Finished && frames < DEMO_MAX_FRAMES {
            if frames % DEMO_REACTION_FRAMES == 0 {
                let want = player.want(&game.session);
                player.press(&mut game, want);
            }

            game.update(1.0 / DEMO_FPS);
            player.observe(&game.session);
            game.render(&mut frame);
            frames += 1;
        }

        DemoOutcome {
            game,
            frame,
            frames,
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pong_classic::Settings;
    use pong_classic::input::{Key, KeyEvent};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pong Classic (native) starting...");
    log::info!("Native mode runs a headless 1 vs AI demo - build for wasm32 to play");

    let settings = Settings::load();
    let demo::DemoOutcome {
        mut game,
        frame,
        frames,
    } = demo::run(&settings);

    let board = &game.session.scoreboard;
    match game.session.winner() {
        Some(winner) => println!("{}", winner.message()),
        None => log::warn!("Demo stopped after {} frames without a winner", frames),
    }
    println!("Final Score: {} - {}", board.left_score, board.right_score);
    log::info!(
        "{} ticks, {} frames, {} tones",
        game.session.ticks,
        frame.frames(),
        game.audio().played()
    );

    if let Ok(json) = serde_json::to_string(&game.session) {
        log::debug!("Final session: {}", json);
    }

    game.push_key(KeyEvent::Down(Key::Confirm));
    game.step();
    if game.should_exit() {
        log::info!("Exit confirmed");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
