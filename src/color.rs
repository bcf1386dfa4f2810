//! Color value types for floem-ring.
//!
//! [`Argb`] is the packed 32-bit color that goes in and out of the picker.
//! [`Hsv`] and [`Hsl`] are the two cylindrical spaces the wheel moves between.

use std::fmt;

use crate::math;

/// Packed `0xAARRGGBB` color.
///
/// Alpha is carried along but every conversion treats the color as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    pub const GREY: Self = Self(0xFF80_8080);
    pub const RED: Self = Self(0xFFFF_0000);
    pub const GREEN: Self = Self(0xFF00_FF00);
    pub const BLUE: Self = Self(0xFF00_00FF);
    pub const CYAN: Self = Self(0xFF00_FFFF);
    pub const MAGENTA: Self = Self(0xFFFF_00FF);
    pub const YELLOW: Self = Self(0xFFFF_FF00);

    /// Opaque color from 0–255 channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Convert to 0–255 RGB tuple.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// Same RGB with alpha forced to 0xFF.
    pub const fn opaque(self) -> Self {
        Self(self.0 | 0xFF00_0000)
    }

    /// Create from HSV (hue in degrees), fully opaque.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let (r, g, b) = math::hsv_to_rgb(hsv.h, hsv.s, hsv.v);
        Self::from_rgb(
            math::channel_to_u8(r),
            math::channel_to_u8(g),
            math::channel_to_u8(b),
        )
    }

    /// Convert to HSV (hue in degrees). Alpha is ignored.
    pub fn to_hsv(self) -> Hsv {
        let (h, s, v) = math::rgb_to_hsv(
            f64::from(self.red()) / 255.0,
            f64::from(self.green()) / 255.0,
            f64::from(self.blue()) / 255.0,
        );
        Hsv { h, s, v }
    }

    /// Create from HSL through HSV, fully opaque.
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_hsv(hsl.to_hsv())
    }

    /// Convert to HSL through HSV. Alpha is ignored.
    pub fn to_hsl(self) -> Hsl {
        self.to_hsv().to_hsl()
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&stripped[range], 16).ok();
        match stripped.len() {
            3 => {
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Some(Self::from_rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::from_argb(
                channel(6..8)?,
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
            )),
            _ => None,
        }
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) for opaque colors, 8 chars (RRGGBBAA) otherwise.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb();
        if self.alpha() == 0xFF {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, self.alpha())
        }
    }
}

impl Default for Argb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Hue (degrees, 0.0–360.0), saturation and value (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Hue passes through unchanged.
    pub fn to_hsl(self) -> Hsl {
        let (s, l) = math::hsv_to_hsl(self.s, self.v);
        Hsl { h: self.h, s, l }
    }
}

/// Hue (degrees, 0.0–360.0), saturation and lightness (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Hue passes through unchanged.
    pub fn to_hsv(self) -> Hsv {
        let (s, v) = math::hsl_to_hsv(self.s, self.l);
        Hsv { h: self.h, s, v }
    }
}

impl From<Hsl> for Hsv {
    fn from(hsl: Hsl) -> Self {
        hsl.to_hsv()
    }
}

impl From<Hsv> for Hsl {
    fn from(hsv: Hsv) -> Self {
        hsv.to_hsl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack() {
        let c = Argb(0x80_12_34_56);
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.to_rgb(), (0x12, 0x34, 0x56));
        assert_eq!(c.opaque(), Argb(0xFF12_3456));
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Argb::from_hex("#3B82F6"), Some(Argb(0xFF3B_82F6)));
        assert_eq!(Argb::from_hex("f0a"), Some(Argb(0xFFFF_00AA)));
        assert_eq!(Argb::from_hex("11223344"), Some(Argb(0x4411_2233)));
        assert_eq!(Argb::from_hex("12345"), None);
        assert_eq!(Argb::from_hex("GG0000"), None);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Argb::RED.to_hex(), "FF0000");
        assert_eq!(Argb(0x4411_2233).to_hex(), "11223344");
        assert_eq!(Argb::WHITE.to_string(), "#FFFFFF");
    }

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Argb::default(), Argb(0xFF00_0000));
    }

    #[test]
    fn hsv_packs_with_rounding() {
        assert_eq!(Argb::from_hsv(Hsv::new(0.0, 1.0, 1.0)), Argb::RED);
        assert_eq!(Argb::from_hsv(Hsv::new(300.0, 1.0, 1.0)), Argb::MAGENTA);
        assert_eq!(Argb::from_hsv(Hsv::new(0.0, 0.0, 0.5)), Argb(0xFF80_8080));
    }

    #[test]
    fn to_hsv_ignores_alpha() {
        let hsv = Argb(0x0000_FF00).to_hsv();
        assert!((hsv.h - 120.0).abs() < 1e-9);
        assert!((hsv.s - 1.0).abs() < 1e-9);
        assert!((hsv.v - 1.0).abs() < 1e-9);
    }

    #[test]
    fn hsl_of_pure_blue() {
        let hsl = Argb::BLUE.to_hsl();
        assert!((hsl.h - 240.0).abs() < 1e-9);
        assert!((hsl.s - 1.0).abs() < 1e-9);
        assert!((hsl.l - 0.5).abs() < 1e-9);
    }

    #[test]
    fn from_hsl_packs_through_hsv() {
        assert_eq!(Argb::from_hsl(Hsl::new(0.0, 1.0, 0.5)), Argb::RED);
        assert_eq!(Argb::from_hsl(Hsl::new(120.0, 0.5, 0.5)), Argb::from_rgb(64, 191, 64));
        assert_eq!(Argb::from_hsl(Hsl::new(200.0, 0.0, 1.0)), Argb::WHITE);
    }

    #[test]
    fn hsl_to_hsv_passes_hue_through() {
        let hsv = Hsl::new(120.0, 0.5, 0.5).to_hsv();
        assert_eq!(hsv.h, 120.0);
        assert!((hsv.s - 2.0 / 3.0).abs() < 1e-9);
        assert!((hsv.v - 0.75).abs() < 1e-9);
    }
}
