//! Maps the energy scalar onto the gauge widgets.
//!
//! Everything here is a pure function of the energy value and the fixed
//! references in [`crate::constants`]; how the result reaches the page is up
//! to a [`DisplaySink`].

use crate::constants::*;

/// Harpoon gauge tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PowerLevel {
    Low,
    Medium,
    High,
    Maximum,
}

impl PowerLevel {
    /// Lower bounds are inclusive.
    pub fn from_pct(pct: f32) -> Self {
        if pct >= 75.0 {
            PowerLevel::Maximum
        } else if pct >= 50.0 {
            PowerLevel::High
        } else if pct >= 25.0 {
            PowerLevel::Medium
        } else {
            PowerLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PowerLevel::Low => "Bajo",
            PowerLevel::Medium => "Medio",
            PowerLevel::High => "Alto",
            PowerLevel::Maximum => "MÁXIMO",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            PowerLevel::Low => "#39CCCC",
            PowerLevel::Medium => "#7FDBFF",
            PowerLevel::High => "#FFD700",
            PowerLevel::Maximum => "#FF6B6B",
        }
    }

    /// CSS animation for the needle; only the top tier shakes.
    pub fn needle_animation(self) -> &'static str {
        match self {
            PowerLevel::Maximum => "harpoonVibrate 0.1s infinite",
            _ => "none",
        }
    }
}

/// Lighthouse beam tier. Shares the upper thresholds with [`PowerLevel`]
/// but starts its middle tier at 30%.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum BeamIntensity {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl BeamIntensity {
    pub fn from_pct(pct: f32) -> Self {
        if pct >= 75.0 {
            BeamIntensity::VeryHigh
        } else if pct >= 50.0 {
            BeamIntensity::High
        } else if pct >= 30.0 {
            BeamIntensity::Medium
        } else {
            BeamIntensity::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BeamIntensity::Low => "Baja",
            BeamIntensity::Medium => "Media",
            BeamIntensity::High => "Alta",
            BeamIntensity::VeryHigh => "Muy Alta",
        }
    }
}

/// `min(energy / MAX_ENERGY * 100, 100)`, floored at 0.
#[inline]
pub fn energy_pct(energy: f32) -> f32 {
    (energy / MAX_ENERGY * 100.0).clamp(0.0, 100.0)
}

/// Lighthouse output in kW for a gauge percentage.
#[inline]
pub fn power_kw(pct: f32) -> f32 {
    MAX_POWER_KW * (pct / 100.0)
}

/// Snapshot of every gauge value for one energy reading.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    pub energy: f32,
    pub pct: f32,
    pub power_kw: f32,
    pub level: PowerLevel,
    pub intensity: BeamIntensity,
}

impl DisplayState {
    pub fn from_energy(energy: f32) -> Self {
        let pct = energy_pct(energy);
        Self {
            energy,
            pct,
            power_kw: power_kw(pct),
            level: PowerLevel::from_pct(pct),
            intensity: BeamIntensity::from_pct(pct),
        }
    }

    /// Rounded energy with `,` thousands separators.
    pub fn energy_text(&self) -> String {
        format_thousands(self.energy.round().max(0.0) as u64)
    }

    /// Needle `left` in px along a track of `track_width` px.
    #[inline]
    pub fn needle_offset_px(&self, track_width: f32) -> f32 {
        (self.pct / 100.0) * (track_width - NEEDLE_TRACK_INSET)
    }

    /// Width for the glow and power fill bars, e.g. `"19.2%"`.
    pub fn fill_width(&self) -> String {
        format!("{}%", self.pct)
    }

    pub fn power_text(&self) -> String {
        format!("{:.2}", self.power_kw)
    }

    pub fn core_scale(&self) -> f32 {
        1.0 + self.pct / CORE_SCALE_DIVISOR
    }

    pub fn core_transform(&self) -> String {
        format!("translate(-50%,-50%) scale({})", self.core_scale())
    }

    pub fn core_filter(&self) -> String {
        format!(
            "drop-shadow(0 0 {}px rgba(200,240,255,0.8))",
            CORE_GLOW_BASE_PX + self.pct / CORE_GLOW_DIVISOR
        )
    }

    pub fn beam_opacity(&self) -> f32 {
        BEAM_OPACITY_BASE + self.pct / BEAM_OPACITY_DIVISOR
    }

    pub fn beam_opacity_text(&self) -> String {
        format!("{:.3}", self.beam_opacity())
    }
}

/// Receives gauge snapshots; implemented once per UI target.
pub trait DisplaySink {
    fn apply(&mut self, state: &DisplayState);
}

pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Remembers the last snapshot written to a page together with the needle
/// track width it was laid out against, so unchanged frames can be skipped
/// while a resized track still moves the needle.
#[derive(Clone, Debug, Default)]
pub struct DisplayCache {
    last: Option<(DisplayState, f32)>,
}

impl DisplayCache {
    /// Record `(state, track_width)` and report whether it differs from the
    /// previous one.
    pub fn update(&mut self, state: &DisplayState, track_width: f32) -> bool {
        if let Some((prev, prev_width)) = &self.last {
            if prev == state && *prev_width == track_width {
                return false;
            }
        }
        self.last = Some((state.clone(), track_width));
        true
    }
}
