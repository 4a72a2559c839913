use std::fmt;

use rand::Rng;
use ratatui::style::Color;

/// Grid background for cells no drop is passing through.
pub const BACKGROUND: Color = Color::Rgb(0x22, 0x22, 0x22);

/// Number of shades in a set, which is also the length of a drop's trail.
pub const SHADE_COUNT: usize = 6;

const DEFAULT_BASE: &str = "blue";
const FALLBACK: Rgb = Rgb::new(0x00, 0x00, 0xFF);

const PALETTE: [(&str, Rgb); 7] = [
    ("blue", Rgb::new(0x09, 0x09, 0xFF)),
    ("green", Rgb::new(0x2C, 0xF1, 0x3B)),
    ("pink", Rgb::new(0xFF, 0x00, 0x7F)),
    ("red", Rgb::new(0xF6, 0x28, 0x17)),
    ("purple", Rgb::new(0xF4, 0x33, 0xFF)),
    ("yellow", Rgb::new(0xFF, 0xFF, 0x0A)),
    ("orange", Rgb::new(0xFF, 0xA6, 0x00)),
];

// Orange stays out of the random rotation.
const ROTATION: [&str; 6] = ["blue", "green", "pink", "red", "purple", "yellow"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Raises every channel by `percent` of the full range, saturating at 255.
    fn lighten(self, percent: u8) -> Self {
        let amount = (2.55 * percent as f32).round() as u16;
        let up = |channel: u8| (channel as u16 + amount).min(255) as u8;
        Self::new(up(self.r), up(self.g), up(self.b))
    }

    pub fn color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Trail gradient for the current base color, darkest to lightest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSet {
    shades: [Rgb; SHADE_COUNT],
}

impl ColorSet {
    /// Generates the shade sequence for a named base color. Lookup is
    /// case-insensitive; unknown names fall back to plain blue.
    pub fn generate(name: &str) -> Self {
        let base = PALETTE
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map_or(FALLBACK, |(_, rgb)| *rgb);
        let mut shades = [base; SHADE_COUNT];
        for (i, shade) in shades.iter_mut().enumerate() {
            *shade = base.lighten(i as u8 * 10);
        }
        Self { shades }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::generate(ROTATION[rng.random_range(0..ROTATION.len())])
    }

    pub fn shade(&self, index: usize) -> Rgb {
        self.shades[index]
    }

    pub fn lightest(&self) -> Rgb {
        self.shades[SHADE_COUNT - 1]
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::generate(DEFAULT_BASE)
    }
}
