//! Per-frame drawing. Each pass is a free function over a [`Painter`] and
//! the state it reads, so passes can be exercised one at a time.

use crate::color::{self, BACKGROUND_STOPS, FOAM, RAY_STOPS};
use crate::constants::*;
use crate::paint::{LinearGradient, Painter, Path, Rect, Stroke};
use crate::params::WaveParameters;
use crate::particles::ParticleField;
use crate::surface::SurfaceConfig;
use crate::waves::{self, WAVE_LAYERS};
use glam::Vec2;

/// Left edge of light-ray band `index` at `time`.
#[inline]
pub fn ray_x(surface: &SurfaceConfig, index: usize, time: f64) -> f32 {
    let n = surface.ray_count() as f32;
    let sway = (time + index as f64).sin() as f32;
    surface.width / (n + 1.0) * (index as f32 + 1.0) + sway * RAY_SWAY
}

/// `(label, y)` for each depth guide.
pub fn depth_markers(surface: &SurfaceConfig) -> Vec<(String, f32)> {
    let spacing = surface.height / (DEPTH_MARKERS_M.len() as f32 + 2.0);
    DEPTH_MARKERS_M
        .iter()
        .enumerate()
        .map(|(i, d)| (format!("{d}m"), spacing * (i as f32 + 1.0)))
        .collect()
}

pub fn draw_background(p: &mut impl Painter, surface: &SurfaceConfig, time: f64) {
    let (w, h) = (surface.width, surface.height);
    let sky = LinearGradient {
        from: Vec2::ZERO,
        to: Vec2::new(0.0, h),
        stops: BACKGROUND_STOPS.to_vec(),
    };
    p.fill_rect_gradient(Rect::new(0.0, 0.0, w, h), &sky);

    for i in 0..surface.ray_count() {
        let x = ray_x(surface, i, time);
        let ray = LinearGradient {
            from: Vec2::new(x, 0.0),
            to: Vec2::new(x + RAY_WIDTH, h),
            stops: RAY_STOPS.to_vec(),
        };
        p.fill_rect_gradient(Rect::new(x, 0.0, RAY_WIDTH, h), &ray);
    }
}

/// Advance every particle one tick and draw it.
pub fn step_and_draw_particles(
    p: &mut impl Painter,
    particles: &mut ParticleField,
    surface: &SurfaceConfig,
    time: f64,
) {
    particles.step(time, surface.width, surface.height);
    for pt in particles.iter() {
        p.fill_circle(pt.position, pt.size, FOAM, pt.opacity);
    }
}

pub fn draw_waves(
    p: &mut impl Painter,
    params: &WaveParameters,
    surface: &SurfaceConfig,
    time: f64,
) {
    for (i, layer) in WAVE_LAYERS.iter().enumerate() {
        let pts = waves::sample_layer(time, params, i, surface);
        if pts.is_empty() {
            continue;
        }
        p.fill_path(&waves::fill_path(&pts, surface), layer.color);
        let stroke = Stroke {
            color: layer.stroke_color(),
            width: WAVE_STROKE_WIDTH,
            dash: None,
        };
        p.stroke_path(&waves::curve_path(&pts), &stroke);
    }
}

pub fn draw_depth_markers(p: &mut impl Painter, surface: &SurfaceConfig) {
    let font_px = surface.depth_font_px();
    let guide = Stroke {
        color: color::DEPTH_LINE,
        width: 1.0,
        dash: Some(DEPTH_DASH),
    };
    for (label, y) in depth_markers(surface) {
        p.fill_text(&label, Vec2::new(DEPTH_LABEL_X, y), font_px, color::DEPTH_LABEL);
        let line_y = y - DEPTH_LINE_RAISE;
        let mut path = Path::new();
        path.move_to(Vec2::new(DEPTH_LINE_START_X, line_y))
            .line_to(Vec2::new(surface.width - DEPTH_LINE_END_INSET, line_y));
        p.stroke_path(&path, &guide);
    }
}
