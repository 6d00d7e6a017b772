// Host-side tests for the per-frame draw sequence, using a painter that
// records commands instead of rasterizing them.

use glam::Vec2;
use swell_core::color::Rgba;
use swell_core::constants::TIME_STEP;
use swell_core::scene;
use swell_core::{
    LinearGradient, Painter, Path, PowerLevel, Rect, Simulation, Stroke, SurfaceConfig,
};

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Clear,
    Gradient(Rect),
    Circle { alpha: f32 },
    Fill(Rgba),
    Stroke { dashed: bool },
    Text(String),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Recorder {
    fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Painter for Recorder {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.ops.push(Op::Clear);
    }
    fn fill_rect_gradient(&mut self, rect: Rect, _gradient: &LinearGradient) {
        self.ops.push(Op::Gradient(rect));
    }
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba, alpha: f32) {
        self.ops.push(Op::Circle { alpha });
    }
    fn fill_path(&mut self, _path: &Path, color: Rgba) {
        self.ops.push(Op::Fill(color));
    }
    fn stroke_path(&mut self, _path: &Path, stroke: &Stroke) {
        self.ops.push(Op::Stroke {
            dashed: stroke.dash.is_some(),
        });
    }
    fn fill_text(&mut self, text: &str, _at: Vec2, _font_px: f32, _color: Rgba) {
        self.ops.push(Op::Text(text.to_string()));
    }
}

#[test]
fn frame_draws_passes_in_order() {
    let mut sim = Simulation::with_seed(SurfaceConfig::new(800.0, 520.0), 1);
    let mut rec = Recorder::default();
    sim.frame(&mut rec);

    assert_eq!(rec.ops[0], Op::Clear);
    // background + 2 rays at 800px
    assert_eq!(rec.count(|op| matches!(op, Op::Gradient(_))), 3);
    assert_eq!(rec.count(|op| matches!(op, Op::Circle { .. })), 50);
    assert_eq!(rec.count(|op| matches!(op, Op::Fill(_))), 3);
    assert_eq!(rec.count(|op| matches!(op, Op::Stroke { dashed: false })), 3);
    assert_eq!(rec.count(|op| matches!(op, Op::Stroke { dashed: true })), 3);

    let first_circle = rec.ops.iter().position(|op| matches!(op, Op::Circle { .. }));
    let first_fill = rec.ops.iter().position(|op| matches!(op, Op::Fill(_)));
    let first_text = rec.ops.iter().position(|op| matches!(op, Op::Text(_)));
    assert!(first_circle < first_fill);
    assert!(first_fill < first_text);

    let labels: Vec<&Op> = rec.ops.iter().filter(|op| matches!(op, Op::Text(_))).collect();
    assert_eq!(
        labels,
        vec![
            &Op::Text("10m".into()),
            &Op::Text("20m".into()),
            &Op::Text("30m".into())
        ]
    );
}

#[test]
fn wave_layers_fill_in_declared_order() {
    let mut sim = Simulation::with_seed(SurfaceConfig::default(), 1);
    let mut rec = Recorder::default();
    sim.frame(&mut rec);
    let fills: Vec<Rgba> = rec
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Fill(c) => Some(*c),
            _ => None,
        })
        .collect();
    let declared: Vec<Rgba> = swell_core::WAVE_LAYERS.iter().map(|l| l.color).collect();
    assert_eq!(fills, declared);
}

#[test]
fn frame_advances_time_and_reports_energy() {
    let mut sim = Simulation::with_seed(SurfaceConfig::default(), 1);
    let mut rec = Recorder::default();
    let d = sim.frame(&mut rec);
    assert!((sim.time().seconds() - TIME_STEP).abs() < 1e-6);
    assert!((d.energy - 4800.0).abs() < 1e-2);
    assert_eq!(d.level, PowerLevel::Low);

    sim.set_control(swell_core::Control::Amplitude, 5.0);
    let d = sim.frame(&mut rec);
    // 0.5 * 1000 * 25 * 0.8 * 3 = 30000 -> clamped
    assert_eq!(d.pct, 100.0);
    assert_eq!(d.level, PowerLevel::Maximum);
    assert!((sim.time().seconds() - 2.0 * TIME_STEP).abs() < 1e-6);
}

#[test]
fn ray_count_and_positions() {
    let narrow = SurfaceConfig::new(400.0, 300.0);
    assert_eq!(narrow.ray_count(), 2);
    let wide = SurfaceConfig::new(1500.0, 300.0);
    assert_eq!(wide.ray_count(), 5);

    // At time 0 band i sits at width/(n+1)*(i+1) + sin(i)*20
    let x0 = scene::ray_x(&narrow, 0, 0.0);
    assert!((x0 - 400.0 / 3.0).abs() < 1e-3);
    let x1 = scene::ray_x(&narrow, 1, 0.0);
    assert!((x1 - (800.0 / 3.0 + 1.0_f32.sin() * 20.0)).abs() < 1e-3);
}

#[test]
fn depth_markers_are_evenly_spaced() {
    let surface = SurfaceConfig::new(800.0, 500.0);
    let markers = scene::depth_markers(&surface);
    let ys: Vec<f32> = markers.iter().map(|(_, y)| *y).collect();
    assert_eq!(ys, vec![100.0, 200.0, 300.0]);
    assert_eq!(markers[2].0, "30m");
    assert_eq!(surface.depth_font_px(), 16.0);
    assert_eq!(SurfaceConfig::new(300.0, 500.0).depth_font_px(), 12.0);
}

#[test]
fn surface_fits_container_and_viewport() {
    let s = SurfaceConfig::fit(860.0, 1000.0);
    assert_eq!((s.width, s.height), (800.0, 520.0));
    let s = SurfaceConfig::fit(460.0, 700.0);
    assert_eq!((s.width, s.height), (400.0, 420.0));
    assert_eq!(s.particle_count, 25);
    assert_eq!(s.wave_count, 3);
}
