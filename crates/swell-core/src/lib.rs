pub mod color;
pub mod constants;
pub mod meter;
pub mod paint;
pub mod panel;
pub mod params;
pub mod particles;
pub mod scene;
pub mod schedule;
pub mod sim;
pub mod surface;
pub mod waves;

pub use meter::{BeamIntensity, DisplayCache, DisplaySink, DisplayState, PowerLevel};
pub use paint::{LinearGradient, Painter, Path, PathCmd, Rect, Stroke};
pub use panel::PanelState;
pub use params::{Control, WaveParameters};
pub use particles::{Particle, ParticleField};
pub use schedule::CancelToken;
pub use sim::{SimTime, Simulation};
pub use surface::SurfaceConfig;
pub use waves::{WaveLayer, WAVE_LAYERS};
