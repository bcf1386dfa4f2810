//! Picker configuration.

use crate::constants;

/// Where the cancel half-disc takes the lightness that picks its pressed overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CancelShading {
    /// Lightness is taken as 0, so the overlay always lightens.
    #[default]
    AlwaysLighter,
    /// Lightness of the old color, the same rule as the confirm half-disc.
    FromOldColor,
}

/// Dimensions and behavior of the ring picker, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RingConfig {
    /// Width of both rings.
    pub stroke_width: f64,
    /// Gap between the rings and around the center discs.
    pub spacer: f64,
    /// Line width of the indicator dots.
    pub indicator_stroke_width: f64,
    /// Lightness above which a pressed half-disc darkens.
    pub pressed_lightness_threshold: f64,
    pub cancel_shading: CancelShading,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            stroke_width: constants::STROKE_WIDTH,
            spacer: constants::SPACER,
            indicator_stroke_width: constants::INDICATOR_STROKE_WIDTH,
            pressed_lightness_threshold: constants::PRESSED_LIGHTNESS_THRESHOLD,
            cancel_shading: CancelShading::default(),
        }
    }
}

impl RingConfig {
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_spacer(mut self, spacer: f64) -> Self {
        self.spacer = spacer;
        self
    }

    pub fn with_pressed_lightness_threshold(mut self, threshold: f64) -> Self {
        self.pressed_lightness_threshold = threshold;
        self
    }

    pub fn with_cancel_shading(mut self, shading: CancelShading) -> Self {
        self.cancel_shading = shading;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::RingGeometry;

    #[test]
    fn builders_reshape_the_rings() {
        let config = RingConfig::default()
            .with_stroke_width(10.0)
            .with_spacer(2.0);
        assert_eq!(config.indicator_stroke_width, constants::INDICATOR_STROKE_WIDTH);

        let geometry = RingGeometry::new(200.0, &config);
        assert_eq!(geometry.hue_radius, 95.0);
        assert_eq!(geometry.arc_radius, 83.0);
        assert_eq!(geometry.center_radius, 76.0);
    }
}
