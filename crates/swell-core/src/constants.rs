// Scene, timing and gauge tuning constants.
//
// Geometry values are in canvas pixels unless noted otherwise; time is the
// dimensionless simulated clock fed to every `sin` sample.

// Simulated clock advance per animation tick. The clock itself is f64 so it
// keeps advancing on pages left open for days.
pub const TIME_STEP: f64 = 0.02;

// Surface sizing
pub const DEFAULT_WIDTH: f32 = 800.0;
pub const DEFAULT_HEIGHT: f32 = 520.0;
pub const MAX_HEIGHT: f32 = 520.0;
pub const VIEWPORT_HEIGHT_FRACTION: f32 = 0.6;
pub const CONTAINER_PADDING: f32 = 60.0;
pub const WAVE_LAYER_COUNT: usize = 3;

// Particle population scales with width relative to the reference width
pub const BASE_PARTICLES: usize = 50;
pub const MIN_PARTICLES: usize = 20;
pub const REFERENCE_WIDTH: f32 = 800.0;

// Particle spawn ranges: value = random * span + base
pub const PARTICLE_SIZE_BASE: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 3.0;
pub const PARTICLE_SPEED_X_SPAN: f32 = 0.5;
pub const PARTICLE_SPEED_Y_SPAN: f32 = 0.3;
pub const PARTICLE_OPACITY_BASE: f32 = 0.2;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;

// Vertical drift: sin(time + x * FREQ) * AMP
pub const PARTICLE_DRIFT_FREQ: f32 = 0.01;
pub const PARTICLE_DRIFT_AMP: f32 = 0.2;

// Light rays
pub const RAY_SPACING: f32 = 300.0; // one band per this many px of width
pub const MIN_RAYS: usize = 2;
pub const RAY_WIDTH: f32 = 50.0;
pub const RAY_SWAY: f32 = 20.0;

// Wave sampling
pub const WAVE_STEP_DIVISOR: f32 = 150.0;
pub const WAVE_MIN_STEP: f32 = 3.0;
pub const WAVE_OVERSCAN: f32 = 20.0; // sample past the right edge
pub const WAVE_X_SCALE: f32 = 0.01;
pub const WAVE_TIME_SCALE: f32 = 0.5;
pub const WAVE_HEIGHT_DIVISOR: f32 = 52.0; // amplitude 1.0 == height / 52 px
pub const WAVE_BASELINE_FRACTION: f32 = 0.3;
pub const WAVE_LAYER_SPACING: f32 = 0.15;
pub const WAVE_STROKE_WIDTH: f32 = 2.0;
pub const WAVE_STROKE_ALPHA: f32 = 0.8;

// Depth guides
pub const DEPTH_MARKERS_M: [u32; 3] = [10, 20, 30];
pub const DEPTH_LABEL_X: f32 = 20.0;
pub const DEPTH_LINE_START_X: f32 = 60.0;
pub const DEPTH_LINE_END_INSET: f32 = 20.0;
pub const DEPTH_LINE_RAISE: f32 = 5.0;
pub const DEPTH_DASH: [f32; 2] = [5.0, 5.0];
pub const DEPTH_FONT_MIN_PX: f32 = 12.0;
pub const DEPTH_FONT_DIVISOR: f32 = 50.0;

// Energy and gauges
pub const WATER_DENSITY: f32 = 1000.0;
pub const MAX_ENERGY: f32 = 25_000.0;
pub const MAX_POWER_KW: f32 = 50.0;
pub const NEEDLE_TRACK_INSET: f32 = 70.0; // needle width + track padding
pub const CORE_SCALE_DIVISOR: f32 = 180.0;
pub const CORE_GLOW_BASE_PX: f32 = 5.0;
pub const CORE_GLOW_DIVISOR: f32 = 6.0;
pub const BEAM_OPACITY_BASE: f32 = 0.2;
pub const BEAM_OPACITY_DIVISOR: f32 = 350.0;

// Default slider positions
pub const DEFAULT_AMPLITUDE: f32 = 2.0;
pub const DEFAULT_FREQUENCY: f32 = 0.8;
pub const DEFAULT_SPEED: f32 = 3.0;
