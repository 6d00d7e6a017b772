use crate::constants::{DEFAULT_AMPLITUDE, DEFAULT_FREQUENCY, DEFAULT_SPEED, WATER_DENSITY};
use anyhow::{bail, Context};

/// Slider-driven wave parameters read by every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParameters {
    /// Wave height in meters.
    pub amplitude: f32,
    /// Hz.
    pub frequency: f32,
    /// m/s.
    pub speed: f32,
    /// Never changed by the UI.
    pub density: f32,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY,
            speed: DEFAULT_SPEED,
            density: WATER_DENSITY,
        }
    }
}

impl WaveParameters {
    /// Decorative energy scalar: `0.5 * density * amplitude^2 * frequency * speed`.
    #[inline]
    pub fn energy(&self) -> f32 {
        0.5 * self.density * self.amplitude * self.amplitude * self.frequency * self.speed
    }

    pub fn get(&self, control: Control) -> f32 {
        match control {
            Control::Amplitude => self.amplitude,
            Control::Frequency => self.frequency,
            Control::Speed => self.speed,
        }
    }

    pub fn set(&mut self, control: Control, value: f32) {
        match control {
            Control::Amplitude => self.amplitude = value,
            Control::Frequency => self.frequency = value,
            Control::Speed => self.speed = value,
        }
    }
}

/// The three user-adjustable sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Amplitude,
    Frequency,
    Speed,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Amplitude, Control::Frequency, Control::Speed];

    /// Element id of the range input.
    pub fn slider_id(self) -> &'static str {
        match self {
            Control::Amplitude => "amplitudeSlider",
            Control::Frequency => "frequencySlider",
            Control::Speed => "speedSlider",
        }
    }

    /// Element id of the paired readout label.
    pub fn label_id(self) -> &'static str {
        match self {
            Control::Amplitude => "amplitudeValue",
            Control::Frequency => "frequencyValue",
            Control::Speed => "speedValue",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Control::Amplitude => "m",
            Control::Frequency => "Hz",
            Control::Speed => "m/s",
        }
    }

    /// Readout text, e.g. `"2.0 m"`.
    pub fn format(self, value: f32) -> String {
        format!("{:.1} {}", value, self.unit())
    }

    /// Parse a raw slider value. Range limits belong to the input widget;
    /// only non-numeric and negative values are rejected here.
    pub fn parse(self, raw: &str) -> anyhow::Result<f32> {
        let v: f32 = raw
            .trim()
            .parse()
            .with_context(|| format!("{:?} slider value {:?}", self, raw))?;
        if !v.is_finite() || v < 0.0 {
            bail!("{:?} slider value out of domain: {}", self, v);
        }
        Ok(v)
    }
}
