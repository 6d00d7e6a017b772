use std::fmt;

/// 8-bit RGB color with a float alpha, formatted as a CSS `rgba(...)` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

// Palette
pub const FOAM: Rgba = Rgba::opaque(127, 219, 255); // #7FDBFF
pub const DEPTH_LABEL: Rgba = FOAM.with_alpha(0.65);
pub const DEPTH_LINE: Rgba = FOAM.with_alpha(0.25);

pub const BACKGROUND_STOPS: [(f32, Rgba); 4] = [
    (0.0, Rgba::new(0, 26, 51, 0.5)),
    (0.3, Rgba::new(0, 61, 102, 0.4)),
    (0.7, Rgba::new(0, 102, 204, 0.35)),
    (1.0, Rgba::new(0, 133, 255, 0.3)),
];

pub const RAY_STOPS: [(f32, Rgba); 3] = [
    (0.0, FOAM.with_alpha(0.08)),
    (0.5, FOAM.with_alpha(0.04)),
    (1.0, FOAM.with_alpha(0.0)),
];

