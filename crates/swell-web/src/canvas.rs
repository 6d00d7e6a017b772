use crate::constants::DEPTH_FONT_FAMILY;
use glam::Vec2;
use std::f64::consts::TAU;
use swell_core::color::Rgba;
use swell_core::{LinearGradient, Painter, Path, PathCmd, Rect, Stroke};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`Painter`] backed by a Canvas 2D context. Every primitive runs inside
/// `save`/`restore` so style state never leaks between passes.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
        Ok(Self { ctx })
    }

    fn trace(&self, path: &Path) {
        self.ctx.begin_path();
        for cmd in &path.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathCmd::LineTo(p) => self.ctx.line_to(p.x as f64, p.y as f64),
                PathCmd::QuadTo { ctrl, to } => self.ctx.quadratic_curve_to(
                    ctrl.x as f64,
                    ctrl.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathCmd::Close => self.ctx.close_path(),
            }
        }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect_gradient(&mut self, rect: Rect, gradient: &LinearGradient) {
        let grad = self.ctx.create_linear_gradient(
            gradient.from.x as f64,
            gradient.from.y as f64,
            gradient.to.x as f64,
            gradient.to.y as f64,
        );
        for (offset, color) in &gradient.stops {
            _ = grad.add_color_stop(*offset, &color.css());
        }
        self.ctx.save();
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx.fill_rect(
            rect.origin.x as f64,
            rect.origin.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
        self.ctx.restore();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, alpha: f32) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
        self.ctx.restore();
    }

    fn fill_path(&mut self, path: &Path, color: Rgba) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&color.css());
        self.trace(path);
        self.ctx.fill();
        self.ctx.restore();
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.ctx.save();
        self.ctx.set_stroke_style_str(&stroke.color.css());
        self.ctx.set_line_width(stroke.width as f64);
        if let Some([on, off]) = stroke.dash {
            let pattern = js_sys::Array::of2(
                &JsValue::from_f64(on as f64),
                &JsValue::from_f64(off as f64),
            );
            _ = self.ctx.set_line_dash(&pattern);
        }
        self.trace(path);
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font_px: f32, color: Rgba) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.set_font(&format!("{}px {}", font_px, DEPTH_FONT_FAMILY));
        self.ctx.set_text_align("left");
        _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
        self.ctx.restore();
    }
}
