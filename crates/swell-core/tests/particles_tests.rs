// Host-side tests for particle integration and population sizing.

use glam::Vec2;
use swell_core::surface::particle_count_for_width;
use swell_core::{Particle, ParticleField, Simulation, SurfaceConfig};

fn particle_at(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
    Particle {
        position: Vec2::new(x, y),
        velocity: Vec2::new(vx, vy),
        size: 2.0,
        opacity: 0.5,
    }
}

#[test]
fn particle_reflects_and_clamps_at_right_edge() {
    let mut p = particle_at(800.0, 260.0, 0.2, 0.0);
    p.step(0.0, 800.0, 520.0);
    assert!(p.velocity.x < 0.0, "speed x should flip");
    assert_eq!(p.position.x, 800.0);
}

#[test]
fn particle_reflects_and_clamps_at_left_edge() {
    let mut p = particle_at(0.0, 260.0, -0.2, 0.0);
    p.step(0.0, 800.0, 520.0);
    assert!(p.velocity.x > 0.0);
    assert_eq!(p.position.x, 0.0);
}

#[test]
fn particle_reflects_vertically() {
    let mut p = particle_at(400.0, 520.0, 0.0, 0.3);
    p.step(0.0, 800.0, 520.0);
    assert!(p.velocity.y < 0.0);
    assert!(p.position.y <= 520.0);
}

#[test]
fn interior_particle_keeps_velocity_and_drifts() {
    let mut p = particle_at(100.0, 100.0, 0.1, 0.05);
    let t = 1.0_f32;
    p.step(t as f64, 800.0, 520.0);
    assert_eq!(p.velocity, Vec2::new(0.1, 0.05));
    let expected_y = 100.0 + 0.05 + (t + 100.1 * 0.01_f32).sin() * 0.2;
    assert!((p.position.y - expected_y).abs() < 1e-4);
    assert!((p.position.x - 100.1).abs() < 1e-4);
}

#[test]
fn particles_stay_in_bounds_over_many_steps() {
    let surface = SurfaceConfig::new(640.0, 400.0);
    let mut field = ParticleField::with_seed(&surface, 3);
    for frame in 0..2000 {
        field.step(frame as f64 * 0.02, surface.width, surface.height);
    }
    for p in field.iter() {
        assert!((0.0..=surface.width).contains(&p.position.x));
        assert!((0.0..=surface.height).contains(&p.position.y));
    }
}

#[test]
fn spawned_particles_fall_in_configured_ranges() {
    let surface = SurfaceConfig::default();
    let field = ParticleField::with_seed(&surface, 11);
    assert_eq!(field.len(), 50);
    for p in field.iter() {
        assert!((1.0..4.0).contains(&p.size));
        assert!((0.2..0.7).contains(&p.opacity));
        assert!(p.velocity.x.abs() <= 0.25);
        assert!(p.velocity.y.abs() <= 0.15);
    }
}

#[test]
fn particle_count_follows_width() {
    assert_eq!(particle_count_for_width(800.0), 50);
    assert_eq!(particle_count_for_width(1600.0), 100);
    assert_eq!(particle_count_for_width(810.0), 50);
    assert_eq!(particle_count_for_width(200.0), 20);
    assert_eq!(particle_count_for_width(0.0), 20);
}

#[test]
fn resize_regenerates_exactly_the_new_count() {
    let mut sim = Simulation::with_seed(SurfaceConfig::new(800.0, 520.0), 42);
    assert_eq!(sim.particles().len(), 50);

    let before: Vec<Particle> = sim.particles().as_slice().to_vec();
    assert!(sim.resize(SurfaceConfig::new(1600.0, 300.0)));
    assert_eq!(sim.particles().len(), 100);
    assert_ne!(&before[..], &sim.particles().as_slice()[..50]);
    for p in sim.particles().iter() {
        assert!(p.position.x <= 1600.0 && p.position.y <= 300.0);
    }

    assert!(sim.resize(SurfaceConfig::new(300.0, 300.0)));
    assert_eq!(sim.particles().len(), 20);
}

#[test]
fn resize_with_same_count_keeps_particles() {
    let mut sim = Simulation::with_seed(SurfaceConfig::new(800.0, 520.0), 42);
    let before: Vec<Particle> = sim.particles().as_slice().to_vec();
    assert!(!sim.resize(SurfaceConfig::new(810.0, 500.0)));
    assert_eq!(sim.particles().as_slice(), &before[..]);
    assert_eq!(sim.surface().width, 810.0);
}
