use crate::color::Rgba;
use crate::constants::*;
use crate::paint::Path;
use crate::params::WaveParameters;
use crate::surface::SurfaceConfig;
use glam::Vec2;
use std::f32::consts::PI;

/// One of the fixed sinusoids composited into the sea surface. Amplitude and
/// frequency are multipliers on the slider values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveLayer {
    pub color: Rgba,
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
}

impl WaveLayer {
    /// Outline color: the fill color at a fixed stronger alpha.
    #[inline]
    pub fn stroke_color(&self) -> Rgba {
        self.color.with_alpha(WAVE_STROKE_ALPHA)
    }
}

/// Drawn in this order, back to front.
pub const WAVE_LAYERS: [WaveLayer; WAVE_LAYER_COUNT] = [
    WaveLayer {
        color: Rgba::new(0, 116, 217, 0.55),
        amplitude: 1.0,
        frequency: 1.0,
        phase: 0.0,
    },
    WaveLayer {
        color: Rgba::new(57, 204, 204, 0.40),
        amplitude: 0.7,
        frequency: 1.2,
        phase: PI / 3.0,
    },
    WaveLayer {
        color: Rgba::new(127, 219, 255, 0.28),
        amplitude: 0.5,
        frequency: 0.8,
        phase: PI / 2.0,
    },
];

/// Resting height of layer `index`.
#[inline]
pub fn baseline(index: usize, height: f32) -> f32 {
    height * WAVE_BASELINE_FRACTION + index as f32 * (height * WAVE_LAYER_SPACING)
}

/// Vertical displacement of `layer` at column `x`. Pure in all arguments.
/// The phase is summed in f64 so late clock values still move the wave.
#[inline]
pub fn sample_offset(
    time: f64,
    x: f32,
    params: &WaveParameters,
    layer: &WaveLayer,
    height: f32,
) -> f32 {
    let phase = (x * params.frequency * layer.frequency * WAVE_X_SCALE) as f64
        + time * (params.speed * WAVE_TIME_SCALE) as f64
        + layer.phase as f64;
    phase.sin() as f32 * params.amplitude * layer.amplitude * (height / WAVE_HEIGHT_DIVISOR)
}

/// Sample the curve of layer `index` left to right, overscanning past the
/// right edge so the smoothed path reaches it.
pub fn sample_layer(
    time: f64,
    params: &WaveParameters,
    index: usize,
    surface: &SurfaceConfig,
) -> Vec<Vec2> {
    let layer = &WAVE_LAYERS[index];
    let base_y = baseline(index, surface.height);
    let step = surface.wave_step();
    let limit = surface.width + WAVE_OVERSCAN;
    let count = (limit / step).floor() as usize + 1;
    (0..count)
        .map(|i| {
            let x = i as f32 * step;
            Vec2::new(x, base_y + sample_offset(time, x, params, layer, surface.height))
        })
        .collect()
}

/// Open curve through `pts`: quadratic segments using each interior sample as
/// the control point and the midpoint to its successor as the end point.
/// The final sample is never used; the one before it only supplies the last
/// segment's midpoint.
pub fn curve_path(pts: &[Vec2]) -> Path {
    let mut path = Path::new();
    let Some(first) = pts.first() else {
        return path;
    };
    path.move_to(*first);
    for i in 1..pts.len().saturating_sub(2) {
        let mid = (pts[i] + pts[i + 1]) * 0.5;
        path.quad_to(pts[i], mid);
    }
    path
}

/// The curve closed along the bottom edge of the surface, for filling.
pub fn fill_path(pts: &[Vec2], surface: &SurfaceConfig) -> Path {
    let mut path = curve_path(pts);
    if path.is_empty() {
        return path;
    }
    path.line_to(Vec2::new(surface.width, surface.height))
        .line_to(Vec2::new(0.0, surface.height))
        .close();
    path
}
