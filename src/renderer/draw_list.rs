//! Recording surface
//!
//! Keeps the commands of the latest frame. Used by the headless host and in tests.

use glam::Vec2;

use super::{Color, FontSpec, RenderSurface, ShapeKind};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Shape {
        kind: ShapeKind,
        position: Vec2,
        color: Color,
        size: Vec2,
    },
    Text {
        text: String,
        position: Vec2,
        font: FontSpec,
    },
}

#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames started (clears seen)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn shape_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Shape { .. }))
            .count()
    }

    /// Text of every text command, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for DrawList {
    fn clear_layer(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn draw_shape(&mut self, kind: ShapeKind, position: Vec2, color: Color, size: Vec2) {
        self.commands.push(DrawCommand::Shape {
            kind,
            position,
            color,
            size,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, font: &FontSpec) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            font: *font,
        });
    }
}
