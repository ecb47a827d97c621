//! Fixed-step simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only, one `tick` per step
//! - Input arrives as committed paddle velocities, never mid-tick
//! - No rendering or platform dependencies

pub mod ai;
pub mod ball;
pub mod paddle;
pub mod scoreboard;
pub mod state;
pub mod tick;

pub use ai::AiTuning;
pub use ball::Ball;
pub use paddle::{Direction, Paddle};
pub use scoreboard::{Scoreboard, Winner};
pub use state::{GameEvent, Mode, Phase, Session, Side};
pub use tick::tick;
