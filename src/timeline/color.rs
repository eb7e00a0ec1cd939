//! Pity Color Scale
//!
//! A continuous color ramp over the clamped pity domain [1, 90], built from
//! two linear RGB segments meeting at pity 45:
//!
//! - `[1, 45]`: green `#57bb8a` to gold `#ffd666`, `t = (pity - 1) / 44`
//! - `(45, 90]`: gold `#ffd666` to red `#e67c73`, `t = (pity - 45) / 45`
//!
//! Channels are interpolated independently and rounded to the nearest
//! integer. The stored pity value itself is never clamped; only its color is.

use serde::Serialize;

/// Lowest pity shown on the scale
pub const PITY_MIN: u32 = 1;
/// Segment boundary, inclusive on the low segment
pub const PITY_BREAK: u32 = 45;
/// Highest pity shown on the scale
pub const PITY_MAX: u32 = 90;

const EARLY: Rgb = Rgb::new(0x57, 0xbb, 0x8a);
const SOFT: Rgb = Rgb::new(0xff, 0xd6, 0x66);
const LATE: Rgb = Rgb::new(0xe6, 0x7c, 0x73);

/// An RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#57bb8a`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Color for a pity value, clamped to [`PITY_MIN`]..=[`PITY_MAX`].
pub fn pity_color(pity: u32) -> Rgb {
    let pity = pity.clamp(PITY_MIN, PITY_MAX);
    if pity <= PITY_BREAK {
        lerp(EARLY, SOFT, f64::from(pity - PITY_MIN) / 44.0)
    } else {
        lerp(SOFT, LATE, f64::from(pity - PITY_BREAK) / 45.0)
    }
}

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp_channel(a.r, b.r, t),
        lerp_channel(a.g, b.g, t),
        lerp_channel(a.b, b.b, t),
    )
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
}
