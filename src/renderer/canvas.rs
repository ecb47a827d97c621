//! Canvas 2D surface for the browser host

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, FontSpec, RenderSurface, ShapeKind};
use crate::consts::{HALF_HEIGHT, HALF_WIDTH};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Wrap a canvas; `None` if it has no 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    fn scale(&self) -> (f64, f64) {
        (
            self.width / (2.0 * HALF_WIDTH as f64),
            self.height / (2.0 * HALF_HEIGHT as f64),
        )
    }

    /// World (y up, centred) to canvas pixels
    fn to_screen(&self, p: Vec2) -> (f64, f64) {
        let (sx, sy) = self.scale();
        (
            self.width / 2.0 + p.x as f64 * sx,
            self.height / 2.0 - p.y as f64 * sy,
        )
    }
}

impl RenderSurface for CanvasSurface {
    fn clear_layer(&mut self) {
        self.ctx.set_fill_style_str(&Color::BLACK.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_shape(&mut self, kind: ShapeKind, position: Vec2, color: Color, size: Vec2) {
        let (x, y) = self.to_screen(position);
        let (sx, sy) = self.scale();
        let w = size.x as f64 * sx;
        let h = size.y as f64 * sy;

        self.ctx.set_fill_style_str(&color.to_css());
        match kind {
            ShapeKind::Square => self.ctx.fill_rect(x - w / 2.0, y - h / 2.0, w, h),
            ShapeKind::Circle => {
                self.ctx.begin_path();
                if self
                    .ctx
                    .arc(x, y, w / 2.0, 0.0, std::f64::consts::TAU)
                    .is_ok()
                {
                    self.ctx.fill();
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, position: Vec2, font: &FontSpec) {
        let (x, y) = self.to_screen(position);
        let (_, sy) = self.scale();
        let line_height = font.size as f64 * 1.2 * sy;

        self.ctx.set_font(&font.to_css());
        self.ctx.set_fill_style_str(&font.color.to_css());
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");

        // Canvas has no multi-line text; centre the block on `position`
        let lines: Vec<&str> = text.lines().collect();
        let top = y - line_height * (lines.len().saturating_sub(1)) as f64 / 2.0;
        for (i, line) in lines.iter().enumerate() {
            self.ctx
                .fill_text(line, x, top + i as f64 * line_height)
                .ok();
        }
    }
}
