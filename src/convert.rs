//! Wheel angles ↔ colors.
//!
//! The picker stores three angles, one per control, as `atan2(y, x)` radians
//! with `y` pointing down. Everything shown on screen is derived from them:
//!
//! - the outer ring maps its angle to a hue, swept backwards,
//! - the lower half of the inner ring maps to HSL saturation,
//! - the upper half of the inner ring maps to HSL lightness.
//!
//! [`seed_angles_from_color`] goes the other way, once, when the picker is
//! handed an existing color.

use std::f64::consts::TAU;

use crate::color::{Argb, Hsl, Hsv};
use crate::math;

/// Outer ring angle → hue in degrees.
///
/// Increasing angle sweeps hue backwards to match the painted wheel.
pub fn angle_to_hue_degrees(angle: f64) -> f64 {
    let mut degrees = angle.to_degrees();
    if degrees < 0.0 {
        degrees += 360.0;
    }
    360.0 - degrees
}

/// Saturation arc angle → HSL saturation.
///
/// The arc covers half a circle, so a half turn spans the full range.
pub fn angle_to_saturation(angle: f64) -> f64 {
    let turns = angle / TAU;
    1.0 - turns * 2.0
}

/// Lightness arc angle → HSL lightness.
pub fn angle_to_lightness(angle: f64) -> f64 {
    let turns = math::angle_to_turns(angle);
    (turns - 0.5) * 2.0
}

/// The three control angles of the wheel, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelAngles {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl WheelAngles {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Angles that reproduce `color` on the wheel.
    pub fn from_color(color: Argb) -> Self {
        seed_angles_from_color(color)
    }

    pub fn to_hsl(&self) -> Hsl {
        Hsl::new(
            angle_to_hue_degrees(self.hue),
            angle_to_saturation(self.saturation),
            angle_to_lightness(self.lightness),
        )
    }

    pub fn to_hsv(&self) -> Hsv {
        self.to_hsl().to_hsv()
    }

    /// The opaque color selected by these angles.
    pub fn picked_color(&self) -> Argb {
        Argb::from_hsv(self.to_hsv())
    }

    /// Position of the hue angle along the hue ring, 0.0–1.0.
    pub fn hue_turns(&self) -> f64 {
        math::angle_to_turns(self.hue)
    }

    /// Position of the saturation angle along its arc, 0.0–1.0.
    pub fn saturation_turns(&self) -> f64 {
        math::angle_to_turns(self.saturation)
    }

    /// Position of the lightness angle along its arc, 0.0–1.0.
    pub fn lightness_turns(&self) -> f64 {
        math::angle_to_turns(self.lightness)
    }
}

/// Angles that make the wheel show `color`. Alpha is ignored.
///
/// Grey, black and white carry no hue, so their hue angle is 0.
pub fn seed_angles_from_color(color: Argb) -> WheelAngles {
    let hsl = color.to_hsv().to_hsl();
    WheelAngles {
        hue: (-hsl.h).to_radians(),
        saturation: TAU * (1.0 - hsl.s) / 2.0,
        lightness: TAU * (0.5 + hsl.l / 2.0),
    }
}

/// Complement of the RGB channels, fully opaque.
///
/// Used to tint icons so they stay visible on any background.
pub fn invert_color(color: Argb) -> Argb {
    Argb(!color.0 | 0xFF00_0000)
}

/// Opposite hue at full value.
pub fn invert_hue_brightened(color: Argb) -> Argb {
    let hsv = color.to_hsv();
    Argb::from_hsv(Hsv::new(opposite_hue(hsv.h), hsv.s, 1.0))
}

/// Opposite hue, same saturation and value.
pub fn invert_hue(color: Argb) -> Argb {
    let hsv = color.to_hsv();
    Argb::from_hsv(Hsv::new(opposite_hue(hsv.h), hsv.s, hsv.v))
}

fn opposite_hue(h: f64) -> f64 {
    (h + 180.0) % 360.0
}

/// Distance between two angles on the circle, 0.0–π.
pub fn angle_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn hue_sweeps_backwards() {
        assert!((angle_to_hue_degrees(0.0) - 360.0).abs() < EPS);
        assert!((angle_to_hue_degrees(FRAC_PI_2) - 270.0).abs() < EPS);
        assert!((angle_to_hue_degrees(-FRAC_PI_2) - 90.0).abs() < EPS);
        assert!((angle_to_hue_degrees(PI) - 180.0).abs() < EPS);
    }

    #[test]
    fn saturation_is_full_at_arc_start() {
        assert!((angle_to_saturation(0.0) - 1.0).abs() < EPS);
        assert!((angle_to_saturation(FRAC_PI_2) - 0.5).abs() < EPS);
        assert!(angle_to_saturation(PI).abs() < EPS);
    }

    #[test]
    fn lightness_spans_upper_half() {
        assert!(angle_to_lightness(PI).abs() < EPS);
        assert!((angle_to_lightness(-FRAC_PI_2) - 0.5).abs() < EPS);
        assert!((angle_to_lightness(-1e-12) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn black_seeds_default_angles() {
        let angles = seed_angles_from_color(Argb(0xFF00_0000));
        assert!(angles.hue.abs() < EPS);
        assert!((angles.saturation - PI).abs() < EPS);
        assert!((angles.lightness - PI).abs() < EPS);

        assert!(angle_to_saturation(angles.saturation).abs() < EPS);
        assert!(angle_to_lightness(angles.lightness).abs() < EPS);
        assert_eq!(angles.picked_color(), Argb::BLACK);
    }

    #[test]
    fn red_round_trips_through_angles() {
        let angles = seed_angles_from_color(Argb::RED);
        assert_eq!(angles.picked_color(), Argb::RED);
    }

    #[test]
    fn seeded_colors_reproduce_themselves() {
        for color in [
            Argb::BLUE,
            Argb::GREEN,
            Argb::WHITE,
            Argb(0xFF3B_82F6),
            Argb(0xFF80_4020),
        ] {
            let angles = WheelAngles::from_color(color);
            let picked = angles.picked_color();
            let (r, g, b) = picked.to_rgb();
            let (er, eg, eb) = color.to_rgb();
            assert!((i16::from(r) - i16::from(er)).abs() <= 1, "{color} -> {picked}");
            assert!((i16::from(g) - i16::from(eg)).abs() <= 1, "{color} -> {picked}");
            assert!((i16::from(b) - i16::from(eb)).abs() <= 1, "{color} -> {picked}");
        }
    }

    #[test]
    fn seeding_ignores_alpha() {
        assert_eq!(
            seed_angles_from_color(Argb(0x0012_3456)),
            seed_angles_from_color(Argb(0xFF12_3456))
        );
    }

    #[test]
    fn invert_forces_opacity() {
        assert_eq!(invert_color(Argb(0x0000_0000)), Argb::WHITE);
        assert_eq!(invert_color(Argb::RED), Argb::CYAN);
        assert_eq!(invert_color(Argb(0x8012_3456)), Argb(0xFFED_CBA9));
    }

    #[test]
    fn brightened_inversion_of_dark_red_is_cyan() {
        assert_eq!(invert_hue_brightened(Argb::from_rgb(128, 0, 0)), Argb::CYAN);
    }

    #[test]
    fn hue_inversion_keeps_value() {
        assert_eq!(invert_hue(Argb::from_rgb(128, 0, 0)), Argb::from_rgb(0, 128, 128));
        assert_eq!(invert_hue(Argb::GREY), Argb::GREY);
    }

    #[test]
    fn turns_are_normalized() {
        let angles = WheelAngles::new(-FRAC_PI_2, FRAC_PI_2, PI);
        assert!((angles.hue_turns() - 0.75).abs() < EPS);
        assert!((angles.saturation_turns() - 0.25).abs() < EPS);
        assert!((angles.lightness_turns() - 0.5).abs() < EPS);
    }

    #[test]
    fn angle_distance_wraps() {
        assert!((angle_distance(-PI + 0.1, PI - 0.1) - 0.2).abs() < 1e-9);
        assert!((angle_distance(0.0, TAU) - 0.0).abs() < 1e-9);
    }
}
