//! Color math: direct conversions without external dependencies.
//!
//! Hue is in degrees (0.0–360.0), everything else is normalized 0.0–1.0.
//! Angles are radians as returned by `atan2`.

use std::f64::consts::TAU;

/// HSV → RGB. Hue in degrees, the rest 0.0–1.0.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h / 60.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSV. Returns hue in degrees, the rest 0.0–1.0.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (h * 60.0, s, v)
}

/// HSL → HSV saturation and value.
pub(crate) fn hsl_to_hsv(s_hsl: f64, l: f64) -> (f64, f64) {
    let l2 = l * 2.0;
    let s = if l2 <= 1.0 {
        s_hsl * l2
    } else {
        s_hsl * (2.0 - l2)
    };
    let denominator = l2 + s;
    let s_hsv = if denominator == 0.0 {
        0.0
    } else {
        (2.0 * s) / denominator
    };
    (s_hsv, denominator / 2.0)
}

/// HSV → HSL saturation and lightness.
///
/// Black (`l == 0`) and white (`l == 2` before halving) have no saturation.
pub(crate) fn hsv_to_hsl(s_hsv: f64, v: f64) -> (f64, f64) {
    let l = (2.0 - s_hsv) * v;
    let s = s_hsv * v;
    let s_hsl = if l == 0.0 || l == 2.0 {
        0.0
    } else if l <= 1.0 {
        s / l
    } else {
        s / (2.0 - l)
    };
    (s_hsl, l / 2.0)
}

/// Fraction of a full circle, normalized into 0.0–1.0.
pub(crate) fn angle_to_turns(angle: f64) -> f64 {
    let turns = angle / TAU;
    if turns < 0.0 {
        turns + 1.0
    } else {
        turns
    }
}

/// Pack a 0.0–1.0 channel into 8 bits, rounding to nearest.
pub(crate) fn channel_to_u8(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// `a + round(factor * (b - a))`, rounding halves up.
pub(crate) fn lerp_channel(a: u8, b: u8, factor: f64) -> u8 {
    let delta = f64::from(b) - f64::from(a);
    let step = (factor * delta + 0.5).floor();
    (f64::from(a) + step).clamp(0.0, 255.0) as u8
}
