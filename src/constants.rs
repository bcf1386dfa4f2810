//! Sizing, color, and styling constants for the picker.

use crate::color::Argb;

/// Width of the hue ring and of the saturation/lightness ring
pub const STROKE_WIDTH: f64 = 20.0;

/// Gap between the rings and around the center discs
pub const SPACER: f64 = 4.0;

/// Line width of the indicator dots
pub const INDICATOR_STROKE_WIDTH: f64 = 3.0;

/// Smallest side the widget lays out to
pub const MIN_SIDE: f64 = 120.0;

/// Pressed confirm/cancel overlay on light colors
pub const PRESSED_DARKER: Argb = Argb(0x2200_0000);

/// Pressed confirm/cancel overlay on everything else
pub const PRESSED_LIGHTER: Argb = Argb(0x44FF_FFFF);

/// Lightness above which the pressed overlay darkens instead of lightening
pub const PRESSED_LIGHTNESS_THRESHOLD: f64 = 0.9;

/// Icon stroke width relative to the ring stroke
pub const ICON_STROKE_RATIO: f64 = 0.15;

/// Feather width in raster pixels for anti-aliasing the ring edges.
pub const FEATHER: f64 = 1.5;
