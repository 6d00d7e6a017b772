use crate::constants::*;
use crate::surface::SurfaceConfig;
use glam::Vec2;
use rand::prelude::*;

/// A drifting point of light suspended in the water.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn random(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            size: rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_SIZE_BASE,
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_X_SPAN,
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_Y_SPAN,
            ),
            opacity: rng.gen::<f32>() * PARTICLE_OPACITY_SPAN + PARTICLE_OPACITY_BASE,
        }
    }

    /// Integrate one tick: move by velocity plus a sinusoidal vertical drift,
    /// reflect the velocity component of any axis that left `[0, extent]`, then
    /// clamp the position back inside.
    pub fn step(&mut self, time: f64, width: f32, height: f32) {
        self.position.x += self.velocity.x;
        let drift = (time + (self.position.x * PARTICLE_DRIFT_FREQ) as f64).sin() as f32;
        self.position.y += self.velocity.y + drift * PARTICLE_DRIFT_AMP;

        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > height {
            self.velocity.y = -self.velocity.y;
        }
        self.position.x = self.position.x.clamp(0.0, width);
        self.position.y = self.position.y.clamp(0.0, height);
    }
}

/// Fixed-size particle population. Never grown or shrunk in place: a size
/// change regenerates every particle.
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(surface: &SurfaceConfig, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            rng,
        };
        field.regenerate(surface);
        field
    }

    pub fn with_seed(surface: &SurfaceConfig, seed: u64) -> Self {
        Self::new(surface, StdRng::seed_from_u64(seed))
    }

    /// Replace the whole population with `surface.particle_count` fresh particles.
    pub fn regenerate(&mut self, surface: &SurfaceConfig) {
        let rng = &mut self.rng;
        self.particles = (0..surface.particle_count)
            .map(|_| Particle::random(&mut *rng, surface.width, surface.height))
            .collect();
        log::debug!(
            "[particles] regenerated {} for {}x{}",
            self.particles.len(),
            surface.width,
            surface.height
        );
    }

    /// Regenerate only if the surface asks for a different count.
    /// Returns whether the population was rebuilt.
    pub fn sync_count(&mut self, surface: &SurfaceConfig) -> bool {
        if self.particles.len() == surface.particle_count {
            return false;
        }
        self.regenerate(surface);
        true
    }

    pub fn step(&mut self, time: f64, width: f32, height: f32) {
        for p in &mut self.particles {
            p.step(time, width, height);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }
}
