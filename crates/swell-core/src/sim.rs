use crate::constants::TIME_STEP;
use crate::meter::DisplayState;
use crate::paint::Painter;
use crate::params::{Control, WaveParameters};
use crate::particles::ParticleField;
use crate::scene;
use crate::surface::SurfaceConfig;
use rand::rngs::StdRng;

/// Monotonic simulated clock; one fixed step per frame, independent of wall time.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct SimTime(f64);

impl SimTime {
    #[inline]
    pub fn from_seconds(t: f64) -> Self {
        Self(t)
    }

    #[inline]
    pub fn seconds(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn advance(&mut self) {
        self.0 += TIME_STEP;
    }
}

/// Owns all render-loop state: slider parameters, surface geometry, the
/// particle population and the clock.
pub struct Simulation {
    pub params: WaveParameters,
    surface: SurfaceConfig,
    particles: ParticleField,
    time: SimTime,
}

impl Simulation {
    pub fn new(surface: SurfaceConfig, rng: StdRng) -> Self {
        Self {
            params: WaveParameters::default(),
            particles: ParticleField::new(&surface, rng),
            surface,
            time: SimTime::default(),
        }
    }

    pub fn with_seed(surface: SurfaceConfig, seed: u64) -> Self {
        Self::new(surface, rand::SeedableRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn surface(&self) -> &SurfaceConfig {
        &self.surface
    }

    #[inline]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    #[inline]
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Adopt new surface geometry; the particle set is rebuilt when the
    /// derived count changes. Returns whether it was rebuilt.
    pub fn resize(&mut self, surface: SurfaceConfig) -> bool {
        if surface != self.surface {
            log::info!(
                "[surface] {}x{} -> {}x{} ({} particles)",
                self.surface.width,
                self.surface.height,
                surface.width,
                surface.height,
                surface.particle_count
            );
        }
        self.surface = surface;
        self.particles.sync_count(&self.surface)
    }

    /// Store a slider value and return its readout text.
    pub fn set_control(&mut self, control: Control, value: f32) -> String {
        self.params.set(control, value);
        control.format(value)
    }

    pub fn display_state(&self) -> DisplayState {
        DisplayState::from_energy(self.params.energy())
    }

    /// Draw one frame, advance the clock, and return the gauge snapshot for it.
    pub fn frame(&mut self, painter: &mut impl Painter) -> DisplayState {
        let t = self.time.seconds();
        let surface = self.surface;
        painter.clear(surface.width, surface.height);
        scene::draw_background(painter, &surface, t);
        scene::step_and_draw_particles(painter, &mut self.particles, &surface, t);
        scene::draw_waves(painter, &self.params, &surface, t);
        scene::draw_depth_markers(painter, &surface);
        let display = self.display_state();
        self.time.advance();
        display
    }
}
