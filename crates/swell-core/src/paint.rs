//! Backend-agnostic drawing commands.
//!
//! The scene code emits everything through [`Painter`], so the same frame can
//! be rasterized by a Canvas 2D context in the browser or captured by a
//! recording painter on the host.

use crate::color::Rgba;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// Linear gradient between two points with `(offset, color)` stops.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: Vec2,
    pub to: Vec2,
    pub stops: Vec<(f32, Rgba)>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub cmds: Vec<PathCmd>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.cmds.push(PathCmd::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.cmds.push(PathCmd::LineTo(p));
        self
    }

    pub fn quad_to(&mut self, ctrl: Vec2, to: Vec2) -> &mut Self {
        self.cmds.push(PathCmd::QuadTo { ctrl, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
    pub dash: Option<[f32; 2]>,
}

pub trait Painter {
    /// Reset the whole surface to transparent.
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect_gradient(&mut self, rect: Rect, gradient: &LinearGradient);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, alpha: f32);
    fn fill_path(&mut self, path: &Path, color: Rgba);
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);
    /// Left-aligned text with its baseline at `at`.
    fn fill_text(&mut self, text: &str, at: Vec2, font_px: f32, color: Rgba);
}
