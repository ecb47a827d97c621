//! Rendering module
//!
//! The simulation never draws. Each frame the host hands a [`RenderSurface`] to
//! [`draw_session`], which issues one shape per actor plus the score text.
//! World coordinates are y-up with the origin at the screen centre.

pub mod draw_list;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use draw_list::{DrawCommand, DrawList};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::consts::{BALL_SIZE, PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::sim::{Phase, Session, Side};

/// Primitive shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Axis-aligned rectangle, `size` is full width/height
    Square,
    /// `size.x` is the diameter
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Text style; text is always centred on its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    pub family: &'static str,
    pub size: u32,
    pub weight: FontWeight,
    pub color: Color,
}

impl FontSpec {
    pub const fn courier(size: u32, weight: FontWeight) -> Self {
        Self {
            family: "Courier",
            size,
            weight,
            color: Color::WHITE,
        }
    }

    /// CSS font shorthand, e.g. `bold 30px Courier`
    pub fn to_css(&self) -> String {
        let weight = match self.weight {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        };
        format!("{} {}px {}", weight, self.size, self.family)
    }
}

pub const SCORE_FONT: FontSpec = FontSpec::courier(40, FontWeight::Normal);
pub const MENU_FONT: FontSpec = FontSpec::courier(16, FontWeight::Normal);
pub const PAUSE_FONT: FontSpec = FontSpec::courier(24, FontWeight::Normal);
pub const WINNER_FONT: FontSpec = FontSpec::courier(30, FontWeight::Bold);

pub const START_MESSAGE: &str = "PONG\n\n\
Press 1 -> 1 vs 1\n\
Press 2 -> 1 vs AI\n\n\
Left: W / S   |   Right: Up / Down\n\
P to pause";

/// Score text anchors
pub const LEFT_SCORE_POS: Vec2 = Vec2::new(-100.0, 200.0);
pub const RIGHT_SCORE_POS: Vec2 = Vec2::new(100.0, 200.0);

/// A place to draw. Calls are fire-and-forget; implementations swallow their own failures.
pub trait RenderSurface {
    fn clear_layer(&mut self);
    fn draw_shape(&mut self, kind: ShapeKind, position: Vec2, color: Color, size: Vec2);
    fn draw_text(&mut self, text: &str, position: Vec2, font: &FontSpec);
}

/// Draw one frame of `session`
///
/// Hosts call this once per display frame, after that frame's ticks. Several ticks may run
/// between draws, and each draw shows the latest state.
pub fn draw_session(session: &Session, surface: &mut dyn RenderSurface) {
    surface.clear_layer();

    let paddle_size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
    for side in [Side::Left, Side::Right] {
        surface.draw_shape(
            ShapeKind::Square,
            session.paddle(side).pos,
            Color::WHITE,
            paddle_size,
        );
    }

    surface.draw_shape(
        ShapeKind::Circle,
        session.ball.pos,
        Color::WHITE,
        Vec2::splat(BALL_SIZE),
    );

    let board = &session.scoreboard;
    surface.draw_text(&board.score_text(Side::Left), LEFT_SCORE_POS, &SCORE_FONT);
    surface.draw_text(&board.score_text(Side::Right), RIGHT_SCORE_POS, &SCORE_FONT);

    match session.phase() {
        Phase::NotStarted => surface.draw_text(START_MESSAGE, Vec2::ZERO, &MENU_FONT),
        Phase::Paused => surface.draw_text("PAUSED", Vec2::ZERO, &PAUSE_FONT),
        Phase::Finished => {
            let winner = board.determine_winner();
            surface.draw_text(winner.message(), Vec2::ZERO, &WINNER_FONT);
        }
        Phase::Running => {}
    }
}
