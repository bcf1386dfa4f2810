//! # floem-ring
//!
//! A circular HSL color picker for [Floem](https://github.com/lapce/floem).
//!
//! The outer ring picks the hue. The inner ring is split in two: the lower
//! half picks saturation, the upper half picks lightness. Pressing the upper
//! center half-disc confirms the picked color and the lower one, painted in
//! the starting color, cancels.
//!
//! The color math, gradients and picker state machine do not depend on
//! Floem and can drive a picker in any toolkit through [`PickerState`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_ring::{ring_picker, Argb, PickerEvent};
//!
//! let color = RwSignal::new(Argb::from_hex("3B82F6").unwrap());
//! let picker = ring_picker(color, move |event| {
//!     if let PickerEvent::Confirmed(picked) = event {
//!         color.set(picked);
//!     }
//! });
//! // Use `picker` in your Floem view tree.
//! ```

mod color;
mod config;
mod constants;
pub mod convert;
mod error;
pub mod gradient;
mod math;
#[cfg(feature = "palette")]
pub mod palette;
mod picker;
mod ring_wheel;

pub use color::{Argb, Hsl, Hsv};
pub use config::{CancelShading, RingConfig};
pub use convert::WheelAngles;
pub use error::{GradientError, PaletteError};
pub use gradient::{color_on_gradient, Gradient};
pub use picker::{
    pressed_overlay, Control, PickerEvent, PickerState, PointerResponse, Region, RingFrame,
    RingGeometry,
};
pub use ring_wheel::RingWheel;

use floem::reactive::RwSignal;

/// Creates a ring picker with the default [`RingConfig`].
///
/// The picker starts from `old_color` and shows it on the cancel half-disc.
/// Any external change to the signal re-seeds it. The picker never writes
/// the signal; `on_event` decides what to do with each [`PickerEvent`].
pub fn ring_picker(
    old_color: RwSignal<Argb>,
    on_event: impl Fn(PickerEvent) + 'static,
) -> RingWheel {
    ring_wheel::ring_wheel(old_color, RingConfig::default(), on_event)
}

/// Like [`ring_picker`], with custom ring dimensions and shading.
pub fn ring_picker_with_config(
    old_color: RwSignal<Argb>,
    config: RingConfig,
    on_event: impl Fn(PickerEvent) + 'static,
) -> RingWheel {
    ring_wheel::ring_wheel(old_color, config, on_event)
}
