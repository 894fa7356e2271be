/// Straight RGB color with sRGB-encoded channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Returns the color as a `0xRRGGBB` literal.
    pub fn to_hex(self) -> u32 {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (q(self.r) << 16) | (q(self.g) << 8) | q(self.b)
    }
}

/// Colors cycled through by the color button, in order.
pub const PALETTE: [Rgb; 6] = [
    Rgb::from_hex(0x00ff00), // green
    Rgb::from_hex(0xff0000), // red
    Rgb::from_hex(0x0000ff), // blue
    Rgb::from_hex(0xff00ff), // magenta
    Rgb::from_hex(0xffff00), // yellow
    Rgb::from_hex(0x00ffff), // cyan
];

/// Cursor into [`PALETTE`].
///
/// Invariant: `index < PALETTE.len()`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Palette {
    index: usize,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn current(&self) -> Rgb {
        PALETTE[self.index]
    }

    /// Steps to the next color, wrapping after the last one.
    pub fn advance(&mut self) -> Rgb {
        self.index = (self.index + 1) % PALETTE.len();
        self.current()
    }
}
