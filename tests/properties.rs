use std::f64::consts::{PI, TAU};

use floem_ring::convert::{angle_distance, invert_color, seed_angles_from_color};
use floem_ring::{color_on_gradient, Argb, Hsl, PickerEvent, PickerState, WheelAngles};
use proptest::prelude::*;

fn opaque_color() -> impl Strategy<Value = Argb> {
    any::<u32>().prop_map(|raw| Argb(raw | 0xFF00_0000))
}

fn gradient_colors() -> impl Strategy<Value = Vec<Argb>> {
    prop::collection::vec(opaque_color(), 2..8)
}

#[test]
fn colors_without_hue_seed_fixed_angles() {
    // Greys carry no hue or saturation, black and white no saturation either
    for color in [Argb::BLACK, Argb::GREY, Argb::WHITE] {
        let angles = seed_angles_from_color(color);
        assert_eq!(angles.hue, 0.0);
        assert_eq!(angles.saturation, PI);
    }
    assert_eq!(seed_angles_from_color(Argb::WHITE).lightness, TAU);
}

proptest! {
    #[test]
    fn hsl_hsv_round_trip(
        h in 0.0_f64..360.0,
        s in 0.0_f64..=1.0,
        l in 0.001_f64..0.999,
    ) {
        let hsl = Hsl::new(h, s, l);
        let back = hsl.to_hsv().to_hsl();
        prop_assert_eq!(back.h, h);
        prop_assert!((back.s - s).abs() < 1e-6, "s: {} vs {}", back.s, s);
        prop_assert!((back.l - l).abs() < 1e-6, "l: {} vs {}", back.l, l);
    }

    #[test]
    fn angles_survive_packed_color(
        h in 0.0_f64..360.0,
        s in 0.2_f64..=1.0,
        l in 0.05_f64..=0.95,
    ) {
        let angles = WheelAngles::new(
            (-h).to_radians(),
            TAU * (1.0 - s) / 2.0,
            TAU * (0.5 + l / 2.0),
        );
        let seeded = seed_angles_from_color(angles.picked_color());

        // Packing to 8 bits moves each channel by up to half a step, which
        // shifts hue by more as chroma shrinks and saturation by more as
        // lightness nears black or white.
        let span = 1.0 - (2.0 * l - 1.0).abs();
        let chroma = s * span;
        prop_assert!(angle_distance(seeded.hue, angles.hue) < 0.015 / chroma,
            "hue: {} vs {}", seeded.hue, angles.hue);
        prop_assert!(angle_distance(seeded.saturation, angles.saturation) < 0.03 / span,
            "saturation: {} vs {}", seeded.saturation, angles.saturation);
        prop_assert!(angle_distance(seeded.lightness, angles.lightness) < 0.01,
            "lightness: {} vs {}", seeded.lightness, angles.lightness);
    }

    #[test]
    fn gradient_ends_clamp(colors in gradient_colors(), overshoot in 0.0_f64..10.0) {
        let last = *colors.last().unwrap();
        prop_assert_eq!(color_on_gradient(-overshoot, &colors, None), colors[0]);
        prop_assert_eq!(color_on_gradient(1.0 + overshoot, &colors, None), last);
    }

    #[test]
    fn uniform_gradient_hits_each_color(colors in gradient_colors()) {
        let segments = (colors.len() - 1) as f64;
        for (i, &expected) in colors.iter().enumerate() {
            prop_assert_eq!(color_on_gradient(i as f64 / segments, &colors, None), expected);
        }
    }

    #[test]
    fn explicit_stops_hit_each_color(
        colors in gradient_colors(),
        start in 0.0_f64..0.2,
    ) {
        let n = colors.len();
        let stops: Vec<f64> = (0..n)
            .map(|i| start + (1.0 - start) * i as f64 / (n - 1) as f64)
            .collect();
        for (i, &expected) in colors.iter().enumerate() {
            prop_assert_eq!(color_on_gradient(stops[i], &colors, Some(&stops)), expected);
        }
    }

    #[test]
    fn inverting_twice_is_identity(color in opaque_color()) {
        prop_assert_eq!(invert_color(invert_color(color)), color);
    }

    #[test]
    fn black_seeds_fixed_angles(alpha in any::<u8>()) {
        let angles = seed_angles_from_color(Argb::from_argb(alpha, 0, 0, 0));
        prop_assert_eq!(angles.hue, 0.0);
        prop_assert_eq!(angles.saturation, PI);
        prop_assert_eq!(angles.lightness, PI);
    }

    #[test]
    fn pressing_the_hue_ring_follows_the_pointer(angle in -PI..PI) {
        let mut state = PickerState::default();
        state.resize(200.0);
        let response = state.pointer_down(90.0 * angle.cos(), 90.0 * angle.sin());
        prop_assert!(response.consumed);
        prop_assert!(angle_distance(state.angles().hue, angle) < 1e-9);
        prop_assert_eq!(response.event, Some(PickerEvent::Updated(state.picked_color())));
    }
}
