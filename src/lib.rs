//! Pong Classic - two paddles, one ball, first to the winning score
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (paddles, ball, scoreboard, AI, tick)
//! - `input`: Key bindings and the between-tick command queue
//! - `game_loop`: Accumulator-driven driver tying input, sim, audio and rendering together
//! - `renderer`: Render surface abstraction (draw list, Canvas 2D on web)
//! - `audio`: Tone sink abstraction (logging on native, Web Audio on web)
//! - `settings`: Session configuration and persistence

pub mod audio;
pub mod game_loop;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::GameLoop;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Target tick rate (ticks per second)
    pub const TICK_HZ: u32 = 100;
    /// Fixed simulation timestep (10 ms)
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the driver will accumulate (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Screen half-extents (world units, origin at centre, y up)
    pub const HALF_WIDTH: f32 = 400.0;
    pub const HALF_HEIGHT: f32 = 300.0;

    /// Paddle defaults
    pub const PADDLE_X: f32 = 350.0;
    pub const PADDLE_SPEED: f32 = 18.0;
    /// Paddle centre must stay strictly inside (-PADDLE_LIMIT, PADDLE_LIMIT)
    pub const PADDLE_LIMIT: f32 = 260.0;
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Ball defaults
    pub const BALL_START_MOVE: f32 = 4.0;
    pub const BALL_START_MOVE_SPEED: f32 = 0.025;
    pub const BALL_RESET_MOVE_SPEED: f32 = 0.05;
    /// Applied to `move_speed` on every horizontal bounce
    pub const BOUNCE_SPEED_FACTOR: f32 = 0.9;
    pub const BALL_SIZE: f32 = 20.0;

    /// Ball y beyond which it bounces off the top/bottom wall
    pub const WALL_Y: f32 = 280.0;
    /// Ball x beyond which a nearby paddle can return it
    pub const PADDLE_CONTACT_X: f32 = 320.0;
    /// Ball-to-paddle centre distance that counts as contact
    pub const PADDLE_CONTACT_DIST: f32 = 50.0;
    /// Ball x beyond which a point is scored
    pub const GOAL_X: f32 = 380.0;

    /// AI dead zone (higher = easier)
    pub const AI_TOLERANCE: f32 = 20.0;
    /// AI only follows the ball past this x
    pub const AI_ACTIVE_X: f32 = 0.0;

    /// Default score needed to win
    pub const DEFAULT_WINNING_SCORE: u32 = 5;
}
