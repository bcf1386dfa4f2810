//! Fixed-grid palettes for list-style pickers.
//!
//! A palette is a sequence of rows of [`VALUE_COUNT`] colors. The rainbow
//! palette has one grey row followed by [`HUE_COUNT`] hues, each at
//! [`SATURATION_COUNT`] saturations; every row runs from dark to bright.
//! Lists built on it scroll endlessly, so rows wrap.

use crate::color::{Argb, Hsv};
use crate::error::PaletteError;

pub const HUE_COUNT: usize = 36;
pub const SATURATION_COUNT: usize = 3;
/// Colors per row.
pub const VALUE_COUNT: usize = 4;
/// Darkest value of a non-grey row.
pub const VALUE_MIN: f64 = 0.15;
/// Rainbow rows, including the grey row.
pub const RAINBOW_ROWS: usize = HUE_COUNT * SATURATION_COUNT + 1;

/// Row and column of a color in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PalettePosition {
    pub row: usize,
    pub column: usize,
}

impl PalettePosition {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    Rainbow,
    /// Caller-supplied colors, [`VALUE_COUNT`] per row.
    Custom(Vec<Argb>),
}

impl Palette {
    /// A palette of caller-supplied colors.
    pub fn custom(colors: Vec<Argb>) -> Result<Self, PaletteError> {
        if colors.len() < VALUE_COUNT || colors.len() % VALUE_COUNT != 0 {
            return Err(PaletteError::InvalidLength {
                len: colors.len(),
                row_len: VALUE_COUNT,
            });
        }
        Ok(Self::Custom(colors))
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::Rainbow => RAINBOW_ROWS,
            Self::Custom(colors) => colors.len() / VALUE_COUNT,
        }
    }

    /// Color at `row` (wrapped) and `column` (0..[`VALUE_COUNT`]).
    ///
    /// # Panics
    ///
    /// If `column` is not below [`VALUE_COUNT`].
    pub fn color_at(&self, row: usize, column: usize) -> Argb {
        assert!(column < VALUE_COUNT, "palette column {column} out of range");
        let row = row % self.row_count();
        match self {
            Self::Rainbow => rainbow_color(row, column),
            Self::Custom(colors) => colors[row * VALUE_COUNT + column],
        }
    }

    /// Where `color` sits in the palette.
    ///
    /// Rainbow palettes return the closest entry. Custom palettes return the
    /// exact entry, or the first one if `color` is not in the palette.
    pub fn locate(&self, color: Argb) -> PalettePosition {
        match self {
            Self::Rainbow => rainbow_position(color),
            Self::Custom(colors) => colors
                .iter()
                .position(|&c| c == color)
                .map(|index| PalettePosition::new(index / VALUE_COUNT, index % VALUE_COUNT))
                .unwrap_or_default(),
        }
    }

    /// First row of an endless list: near the middle of the `i32` range and
    /// aligned to the palette so it shows row 0.
    pub fn start_row(&self) -> usize {
        let middle = i32::MAX as usize / 2;
        middle - middle % self.row_count()
    }
}

/// Hue (degrees) and saturation of a rainbow row.
fn row_hue_saturation(row: usize) -> (f64, f64) {
    if row == 0 {
        return (0.0, 0.0);
    }
    let hue = ((row - 1) / SATURATION_COUNT) as f64 / HUE_COUNT as f64 * 360.0;
    let saturation = ((row - 1) % SATURATION_COUNT + 1) as f64 / SATURATION_COUNT as f64;
    (hue, saturation)
}

fn rainbow_color(row: usize, column: usize) -> Argb {
    let (h, s) = row_hue_saturation(row);
    let step = column as f64 / (VALUE_COUNT - 1) as f64;
    // The grey row goes all the way down to black
    let v = if row == 0 {
        step
    } else {
        VALUE_MIN + step * (1.0 - VALUE_MIN)
    };
    Argb::from_hsv(Hsv::new(h, s, v))
}

/// Rough row estimate; can overshoot the last row by a few.
fn estimate_row(hsv: Hsv) -> i64 {
    let saturation_step = (hsv.s * SATURATION_COUNT as f64).ceil() as i64;
    if saturation_step == 0 {
        return 0;
    }
    let hue_step = (hsv.h / 360.0 * HUE_COUNT as f64).ceil() as i64;
    hue_step * SATURATION_COUNT as i64 + saturation_step
}

/// Closest non-grey row around the estimate, by distance in the hue/saturation disc.
fn nearest_row(hsv: Hsv) -> usize {
    let estimate = estimate_row(hsv);
    if estimate == 0 {
        return 0;
    }
    let colored_rows = (HUE_COUNT * SATURATION_COUNT) as i64;
    let reach = 2 * SATURATION_COUNT as i64;

    let mut nearest = estimate;
    let mut min_distance = f64::INFINITY;
    for offset in -reach..=reach {
        // Skip over the grey row when wrapping
        let candidate = match estimate + offset {
            r if r <= 0 => r + colored_rows,
            r if r > colored_rows => r - colored_rows,
            r => r,
        };
        let (h, s) = row_hue_saturation(candidate as usize);
        let gamma = (hsv.h - h).to_radians();
        // Law of cosines
        let distance = hsv.s * hsv.s + s * s - 2.0 * hsv.s * s * gamma.cos();
        if distance < min_distance {
            nearest = candidate;
            min_distance = distance;
        }
    }
    nearest as usize
}

fn rainbow_position(color: Argb) -> PalettePosition {
    let hsv = color.to_hsv();
    let row = nearest_row(hsv);
    let last = (VALUE_COUNT - 1) as f64;
    let column = if row == 0 {
        (hsv.v * last).ceil()
    } else {
        ((hsv.v - VALUE_MIN) / (1.0 - VALUE_MIN) * last).trunc()
    };
    PalettePosition::new(row, column.clamp(0.0, last) as usize)
}
