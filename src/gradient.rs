//! Colors along multi-stop gradients.
//!
//! One evaluator serves every ring of the picker: the hue ring is a uniform
//! seven-color sweep, the saturation and lightness arcs are small tables with
//! explicit stop positions that only cover their half of the circle.

use crate::color::Argb;
use crate::error::GradientError;
use crate::math;

/// The hue ring, red → magenta → blue → cyan → green → yellow → red.
pub const HUE_COLORS: [Argb; 7] = [
    Argb::RED,
    Argb::MAGENTA,
    Argb::BLUE,
    Argb::CYAN,
    Argb::GREEN,
    Argb::YELLOW,
    Argb::RED,
];

/// Saturation arc stops: the hue color at 0, grey at half a turn.
pub const SATURATION_POSITIONS: [f64; 2] = [0.0, 0.5];

/// Lightness arc stops: black at half a turn, the hue color at 3/4, white at a full turn.
pub const LIGHTNESS_POSITIONS: [f64; 3] = [0.5, 0.75, 1.0];

/// Color at `position` (0.0–1.0) along `colors`.
///
/// Without `stops` the colors are evenly spaced. With `stops`, positions
/// before the first stop take the first color and positions after the last
/// stop take the last color. The result is always opaque.
///
/// # Panics
///
/// If `colors` has fewer than 2 entries, or `stops` does not hold one
/// strictly increasing position in 0.0–1.0 per color. Use [`Gradient::new`]
/// to validate a table up front.
pub fn color_on_gradient(position: f64, colors: &[Argb], stops: Option<&[f64]>) -> Argb {
    assert!(
        colors.len() >= 2,
        "a gradient needs at least 2 colors, got {}",
        colors.len()
    );
    if let Some(stops) = stops {
        assert_eq!(
            stops.len(),
            colors.len(),
            "every gradient color needs exactly one stop"
        );
        for (index, &value) in stops.iter().enumerate() {
            assert!(
                (0.0..=1.0).contains(&value),
                "gradient stop {index} is {value}, outside 0.0..=1.0"
            );
            assert!(
                index == 0 || value > stops[index - 1],
                "gradient stop {index} ({value}) does not come after the previous stop"
            );
        }
    }

    let last = colors.len() - 1;
    if position <= 0.0 {
        return colors[0].opaque();
    }
    if position >= 1.0 {
        return colors[last].opaque();
    }

    let (index, factor) = match stops {
        None => {
            let span = position * last as f64;
            // `span < last` here, but guard against rounding at the top end
            let index = (span.floor() as usize).min(last - 1);
            (index, span - index as f64)
        }
        Some(stops) => {
            if position <= stops[0] {
                return colors[0].opaque();
            }
            if position >= stops[last] {
                return colors[last].opaque();
            }
            let index = stops
                .windows(2)
                .position(|pair| position <= pair[1])
                .unwrap_or(last - 1);
            let (start, end) = (stops[index], stops[index + 1]);
            (index, (position - start) / (end - start))
        }
    };

    let a = colors[index];
    let b = colors[index + 1];
    Argb::from_rgb(
        math::lerp_channel(a.red(), b.red(), factor),
        math::lerp_channel(a.green(), b.green(), factor),
        math::lerp_channel(a.blue(), b.blue(), factor),
    )
}

/// A validated gradient table.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    colors: Vec<Argb>,
    stops: Option<Vec<f64>>,
}

impl Gradient {
    /// Validate `colors` and the optional `stops`.
    ///
    /// Stops must match the colors one to one, lie in 0.0–1.0 and strictly
    /// increase.
    pub fn new(colors: Vec<Argb>, stops: Option<Vec<f64>>) -> Result<Self, GradientError> {
        if colors.len() < 2 {
            return Err(GradientError::TooFewColors {
                count: colors.len(),
            });
        }
        if let Some(stops) = &stops {
            if stops.len() != colors.len() {
                return Err(GradientError::StopCountMismatch {
                    colors: colors.len(),
                    stops: stops.len(),
                });
            }
            for (index, &value) in stops.iter().enumerate() {
                if !(0.0..=1.0).contains(&value) {
                    return Err(GradientError::StopOutOfRange { index, value });
                }
                if index > 0 && value <= stops[index - 1] {
                    return Err(GradientError::UnorderedStops { index, value });
                }
            }
        }
        Ok(Self { colors, stops })
    }

    /// Evenly spaced colors.
    pub fn uniform(colors: Vec<Argb>) -> Result<Self, GradientError> {
        Self::new(colors, None)
    }

    pub fn colors(&self) -> &[Argb] {
        &self.colors
    }

    pub fn stops(&self) -> Option<&[f64]> {
        self.stops.as_deref()
    }

    /// Color at `position`, see [`color_on_gradient`].
    pub fn color_at(&self, position: f64) -> Argb {
        color_on_gradient(position, &self.colors, self.stops())
    }
}

/// The hue ring as a gradient.
pub fn hue_gradient() -> Gradient {
    Gradient {
        colors: HUE_COLORS.to_vec(),
        stops: None,
    }
}

/// Saturation arc for the given hue color: full color down to grey.
pub fn saturation_gradient(hue_color: Argb) -> Gradient {
    Gradient {
        colors: vec![hue_color.opaque(), Argb::GREY],
        stops: Some(SATURATION_POSITIONS.to_vec()),
    }
}

/// Lightness arc for the given hue color: black, through the color, to white.
pub fn lightness_gradient(hue_color: Argb) -> Gradient {
    Gradient {
        colors: vec![Argb::BLACK, hue_color.opaque(), Argb::WHITE],
        stops: Some(LIGHTNESS_POSITIONS.to_vec()),
    }
}

/// Color of the hue ring under `angle`.
pub fn hue_color(angle: f64) -> Argb {
    color_on_gradient(math::angle_to_turns(angle), &HUE_COLORS, None)
}
