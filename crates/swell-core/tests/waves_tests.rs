// Host-side tests for wave sampling and curve construction.

use glam::Vec2;
use swell_core::waves::*;
use swell_core::{PathCmd, SurfaceConfig, WaveParameters};

#[test]
fn sampling_is_deterministic() {
    let params = WaveParameters::default();
    for layer in WAVE_LAYERS.iter() {
        for &(t, x) in &[(0.0, 0.0), (1.3, 17.0), (42.0, 799.0)] {
            let a = sample_offset(t, x, &params, layer, 520.0);
            let b = sample_offset(t, x, &params, layer, 520.0);
            assert_eq!(a, b);
        }
    }
    let surface = SurfaceConfig::default();
    assert_eq!(
        sample_layer(3.7, &params, 1, &surface),
        sample_layer(3.7, &params, 1, &surface)
    );
}

#[test]
fn offset_is_bounded_by_scaled_amplitude() {
    let params = WaveParameters::default();
    let height = 520.0;
    for (i, layer) in WAVE_LAYERS.iter().enumerate() {
        let bound = params.amplitude * layer.amplitude * height / 52.0;
        for k in 0..500 {
            let y = sample_offset(k as f64 * 0.1, k as f32 * 3.0, &params, layer, height);
            assert!(y.abs() <= bound + 1e-4, "layer {i} exceeded bound");
        }
    }
}

#[test]
fn zero_amplitude_is_flat_at_baseline() {
    let params = WaveParameters {
        amplitude: 0.0,
        ..WaveParameters::default()
    };
    let surface = SurfaceConfig::default();
    for i in 0..WAVE_LAYERS.len() {
        let base = baseline(i, surface.height);
        for p in sample_layer(5.0, &params, i, &surface) {
            assert_eq!(p.y, base);
        }
    }
}

#[test]
fn baselines_step_down_the_surface() {
    assert!((baseline(0, 500.0) - 150.0).abs() < 1e-3);
    assert!((baseline(1, 500.0) - 225.0).abs() < 1e-3);
    assert!((baseline(2, 500.0) - 300.0).abs() < 1e-3);
}

#[test]
fn samples_cover_width_plus_overscan() {
    let params = WaveParameters::default();
    let surface = SurfaceConfig::new(800.0, 520.0);
    assert_eq!(surface.wave_step(), 5.0);
    let pts = sample_layer(0.0, &params, 0, &surface);
    assert_eq!(pts.len(), 165);
    assert_eq!(pts[0].x, 0.0);
    assert_eq!(pts.last().map(|p| p.x), Some(820.0));

    let narrow = SurfaceConfig::new(300.0, 400.0);
    assert_eq!(narrow.wave_step(), 3.0);
    assert_eq!(sample_layer(0.0, &params, 0, &narrow).len(), 107);
}

#[test]
fn curve_uses_midpoints_and_skips_last_two_samples() {
    let pts = [
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(20.0, 0.0),
        Vec2::new(30.0, 10.0),
        Vec2::new(40.0, 0.0),
    ];
    let path = curve_path(&pts);
    assert_eq!(
        path.cmds,
        vec![
            PathCmd::MoveTo(Vec2::new(0.0, 0.0)),
            PathCmd::QuadTo {
                ctrl: Vec2::new(10.0, 10.0),
                to: Vec2::new(15.0, 5.0)
            },
            PathCmd::QuadTo {
                ctrl: Vec2::new(20.0, 0.0),
                to: Vec2::new(25.0, 5.0)
            },
        ]
    );
}

#[test]
fn fill_path_closes_along_bottom_edge() {
    let surface = SurfaceConfig::new(400.0, 300.0);
    let pts = [Vec2::new(0.0, 90.0), Vec2::new(5.0, 91.0), Vec2::new(10.0, 92.0)];
    let path = fill_path(&pts, &surface);
    let n = path.cmds.len();
    assert_eq!(path.cmds[n - 3], PathCmd::LineTo(Vec2::new(400.0, 300.0)));
    assert_eq!(path.cmds[n - 2], PathCmd::LineTo(Vec2::new(0.0, 300.0)));
    assert_eq!(path.cmds[n - 1], PathCmd::Close);

    assert!(fill_path(&[], &surface).is_empty());
}

#[test]
fn stroke_color_replaces_alpha() {
    for layer in WAVE_LAYERS.iter() {
        let s = layer.stroke_color();
        assert_eq!((s.r, s.g, s.b), (layer.color.r, layer.color.g, layer.color.b));
        assert_eq!(s.a, 0.8);
    }
    assert_eq!(WAVE_LAYERS[0].color.css(), "rgba(0,116,217,0.55)");
}
