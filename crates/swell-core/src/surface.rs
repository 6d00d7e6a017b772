use crate::constants::*;

/// Pixel dimensions of the drawing target and the counts derived from them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceConfig {
    pub width: f32,
    pub height: f32,
    pub wave_count: usize,
    pub particle_count: usize,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl SurfaceConfig {
    pub fn new(width: f32, height: f32) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        Self {
            width,
            height,
            wave_count: WAVE_LAYER_COUNT,
            particle_count: particle_count_for_width(width),
        }
    }

    /// Size the surface to its container: full container width minus padding,
    /// height capped both absolutely and by a fraction of the viewport.
    pub fn fit(container_width: f32, viewport_height: f32) -> Self {
        let width = (container_width - CONTAINER_PADDING).floor();
        let height = MAX_HEIGHT.min(viewport_height * VIEWPORT_HEIGHT_FRACTION).floor();
        Self::new(width, height)
    }

    /// Number of light-ray bands drawn over the background.
    #[inline]
    pub fn ray_count(&self) -> usize {
        MIN_RAYS.max((self.width / RAY_SPACING).floor() as usize)
    }

    /// Horizontal distance between wave samples.
    #[inline]
    pub fn wave_step(&self) -> f32 {
        WAVE_MIN_STEP.max((self.width / WAVE_STEP_DIVISOR).floor())
    }

    #[inline]
    pub fn depth_font_px(&self) -> f32 {
        DEPTH_FONT_MIN_PX.max((self.width / DEPTH_FONT_DIVISOR).floor())
    }
}

/// `max(20, floor(50 * width / 800))`
#[inline]
pub fn particle_count_for_width(width: f32) -> usize {
    let scaled = (BASE_PARTICLES as f32 * (width / REFERENCE_WIDTH)).floor();
    MIN_PARTICLES.max(scaled.max(0.0) as usize)
}
