//! Toolkit-independent picker state: ring geometry, hit-testing, pointer
//! handling and the per-frame render model.
//!
//! The host toolkit owns the event loop. It feeds pointer positions, relative
//! to the center of the wheel, into [`PickerState`] and gets back a
//! [`PointerResponse`] saying whether the event was consumed, whether to
//! repaint, and which [`PickerEvent`] (if any) to report. Painting reads a
//! [`RingFrame`], recomputed from the angles on demand.

use crate::color::{Argb, Hsl};
use crate::config::{CancelShading, RingConfig};
use crate::constants;
use crate::convert::{self, WheelAngles};
use crate::gradient::{self, Gradient};

/// Part of the wheel under a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    HueRing,
    /// Lower half of the inner ring.
    SaturationArc,
    /// Upper half of the inner ring.
    LightnessArc,
    /// Upper center half-disc.
    Confirm,
    /// Lower center half-disc.
    Cancel,
    Outside,
}

/// The control a pointer is currently holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Hue,
    Saturation,
    Lightness,
    Confirm,
    Cancel,
}

/// What the picker reports back to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickerEvent {
    /// The picked color changed while dragging a ring.
    Updated(Argb),
    /// The confirm half-disc was released with this color.
    Confirmed(Argb),
    /// The cancel half-disc was released.
    Cancelled,
}

/// Outcome of one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerResponse {
    /// The picker handled the event; stop propagating it.
    pub consumed: bool,
    /// Picker visuals changed.
    pub repaint: bool,
    pub event: Option<PickerEvent>,
}

impl PointerResponse {
    fn ignored() -> Self {
        Self::default()
    }

    fn handled() -> Self {
        Self {
            consumed: true,
            repaint: true,
            event: None,
        }
    }

    fn with_event(event: PickerEvent) -> Self {
        Self {
            consumed: true,
            repaint: true,
            event: Some(event),
        }
    }
}

/// Radii of the concentric rings for a square of side `side`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub side: f64,
    pub stroke_width: f64,
    pub spacer: f64,
    /// Center line of the hue ring.
    pub hue_radius: f64,
    /// Center line of the saturation/lightness ring.
    pub arc_radius: f64,
    /// Radius of the confirm/cancel discs.
    pub center_radius: f64,
}

impl RingGeometry {
    pub fn new(side: f64, config: &RingConfig) -> Self {
        let stroke = config.stroke_width;
        let hue_radius = (side - stroke) / 2.0;
        let arc_radius = hue_radius - config.spacer - stroke;
        let center_radius = arc_radius - config.spacer - stroke / 2.0;
        Self {
            side,
            stroke_width: stroke,
            spacer: config.spacer,
            hue_radius,
            arc_radius,
            center_radius,
        }
    }

    /// Region under `(x, y)`, relative to the wheel center, `y` pointing down.
    pub fn hit_test(&self, x: f64, y: f64) -> Region {
        let distance = (x * x + y * y).sqrt();
        let half = self.stroke_width / 2.0;
        if distance >= self.hue_radius - half && distance < self.hue_radius + half {
            Region::HueRing
        } else if distance >= self.arc_radius - half && distance < self.arc_radius + half {
            if y >= 0.0 {
                Region::SaturationArc
            } else {
                Region::LightnessArc
            }
        } else if distance < self.arc_radius - half {
            if y >= 0.0 {
                Region::Cancel
            } else {
                Region::Confirm
            }
        } else {
            Region::Outside
        }
    }

    /// Center of the hue indicator dot for `angle`.
    pub fn hue_indicator(&self, angle: f64) -> (f64, f64) {
        (self.hue_radius * angle.cos(), self.hue_radius * angle.sin())
    }

    /// Center of a saturation or lightness indicator dot for `angle`.
    pub fn arc_indicator(&self, angle: f64) -> (f64, f64) {
        (self.arc_radius * angle.cos(), self.arc_radius * angle.sin())
    }

    pub fn indicator_radius(&self) -> f64 {
        self.stroke_width / 3.0
    }
}

/// Overlay painted over a pressed half-disc whose color has `lightness`.
pub fn pressed_overlay(lightness: f64, threshold: f64) -> Argb {
    if lightness > threshold {
        constants::PRESSED_DARKER
    } else {
        constants::PRESSED_LIGHTER
    }
}

/// Everything a renderer needs to paint one frame of the picker.
#[derive(Debug, Clone, PartialEq)]
pub struct RingFrame {
    pub angles: WheelAngles,
    /// Hue ring color under the hue indicator.
    pub hue_color: Argb,
    pub picked: Argb,
    pub picked_hsl: Hsl,
    pub old_color: Argb,
    pub saturation: Gradient,
    pub lightness: Gradient,
    pub hue_indicator: Argb,
    pub saturation_indicator: Argb,
    pub lightness_indicator: Argb,
    /// Tint of the confirm icon.
    pub confirm_icon: Argb,
    /// Tint of the cancel icon.
    pub cancel_icon: Argb,
    pub confirm_overlay: Option<Argb>,
    pub cancel_overlay: Option<Argb>,
}

/// Angles, engaged control and old color of one picker.
///
/// The angles are the single source of truth: the picked color is always
/// derived from them and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    angles: WheelAngles,
    engaged: Option<Control>,
    old_color: Argb,
    config: RingConfig,
    geometry: RingGeometry,
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new(RingConfig::default())
    }
}

impl PickerState {
    /// A picker seeded from opaque black, with zero size until [`Self::resize`].
    pub fn new(config: RingConfig) -> Self {
        let old_color = Argb::BLACK;
        Self {
            angles: WheelAngles::from_color(old_color),
            engaged: None,
            old_color,
            geometry: RingGeometry::new(0.0, &config),
            config,
        }
    }

    pub fn with_old_color(mut self, old_color: Argb) -> Self {
        self.set_old_color(old_color);
        self
    }

    /// Show `old_color` on the cancel half-disc and start picking from it.
    pub fn set_old_color(&mut self, old_color: Argb) {
        log::debug!("ring picker seeded from {old_color}");
        self.old_color = old_color;
        self.angles = WheelAngles::from_color(old_color);
    }

    pub fn old_color(&self) -> Argb {
        self.old_color
    }

    pub fn angles(&self) -> WheelAngles {
        self.angles
    }

    pub fn set_angles(&mut self, angles: WheelAngles) {
        self.angles = angles;
    }

    pub fn engaged(&self) -> Option<Control> {
        self.engaged
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    /// Lay the rings out in a square of side `side`.
    pub fn resize(&mut self, side: f64) {
        self.geometry = RingGeometry::new(side, &self.config);
    }

    pub fn picked_color(&self) -> Argb {
        self.angles.picked_color()
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> PointerResponse {
        let angle = y.atan2(x);
        match self.geometry.hit_test(x, y) {
            Region::HueRing => {
                self.engaged = Some(Control::Hue);
                self.angles.hue = angle;
            }
            Region::SaturationArc => {
                self.engaged = Some(Control::Saturation);
                self.angles.saturation = angle;
            }
            Region::LightnessArc => {
                self.engaged = Some(Control::Lightness);
                self.angles.lightness = angle;
            }
            Region::Confirm => {
                self.engaged = Some(Control::Confirm);
                return PointerResponse::handled();
            }
            Region::Cancel => {
                self.engaged = Some(Control::Cancel);
                return PointerResponse::handled();
            }
            Region::Outside => return PointerResponse::ignored(),
        }
        log::trace!("ring picker engaged {:?}", self.engaged);
        PointerResponse::with_event(PickerEvent::Updated(self.picked_color()))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> PointerResponse {
        let angle = y.atan2(x);
        match self.engaged {
            Some(Control::Hue) => self.angles.hue = angle,
            // Dragging off an arc leaves its angle where it was
            Some(Control::Saturation) if y < 0.0 => return PointerResponse::ignored(),
            Some(Control::Saturation) => self.angles.saturation = angle,
            Some(Control::Lightness) if y >= 0.0 => return PointerResponse::ignored(),
            Some(Control::Lightness) => self.angles.lightness = angle,
            Some(Control::Confirm) => return self.leave_half_disc(x, y, Region::Confirm),
            Some(Control::Cancel) => return self.leave_half_disc(x, y, Region::Cancel),
            None => return PointerResponse::ignored(),
        }
        PointerResponse::with_event(PickerEvent::Updated(self.picked_color()))
    }

    pub fn pointer_up(&mut self) -> PointerResponse {
        let event = match self.engaged.take() {
            Some(Control::Confirm) => {
                let picked = self.picked_color();
                log::debug!("ring picker confirmed {picked}");
                Some(PickerEvent::Confirmed(picked))
            }
            Some(Control::Cancel) => {
                log::debug!("ring picker cancelled");
                Some(PickerEvent::Cancelled)
            }
            _ => None,
        };
        PointerResponse {
            consumed: true,
            repaint: true,
            event,
        }
    }

    /// Drop the engaged control without reporting anything.
    pub fn release(&mut self) {
        self.engaged = None;
    }

    fn leave_half_disc(&mut self, x: f64, y: f64, region: Region) -> PointerResponse {
        if self.geometry.hit_test(x, y) != region {
            self.engaged = None;
            return PointerResponse::handled();
        }
        PointerResponse {
            consumed: true,
            repaint: false,
            event: None,
        }
    }

    /// Derive every color needed to paint the current state.
    pub fn frame(&self) -> RingFrame {
        let angles = self.angles;
        let hue_color = gradient::hue_color(angles.hue);
        let picked_hsl = angles.to_hsl();
        let picked = Argb::from_hsv(picked_hsl.to_hsv());

        let saturation = gradient::saturation_gradient(hue_color);
        let lightness = gradient::lightness_gradient(hue_color);
        let under_saturation = saturation.color_at(angles.saturation_turns());
        // Uniform black, hue, white table at the mirrored lightness
        let across_lightness = gradient::color_on_gradient(
            1.0 - picked_hsl.l,
            &[Argb::BLACK, hue_color, Argb::WHITE],
            None,
        );

        let threshold = self.config.pressed_lightness_threshold;
        let confirm_overlay = (self.engaged == Some(Control::Confirm))
            .then(|| pressed_overlay(picked_hsl.l, threshold));
        let cancel_overlay = (self.engaged == Some(Control::Cancel)).then(|| {
            let lightness = match self.config.cancel_shading {
                CancelShading::AlwaysLighter => 0.0,
                CancelShading::FromOldColor => self.old_color.to_hsl().l,
            };
            pressed_overlay(lightness, threshold)
        });

        RingFrame {
            angles,
            hue_color,
            picked,
            picked_hsl,
            old_color: self.old_color,
            hue_indicator: convert::invert_color(hue_color),
            saturation_indicator: convert::invert_hue_brightened(under_saturation),
            lightness_indicator: convert::invert_hue(across_lightness),
            confirm_icon: convert::invert_color(picked),
            cancel_icon: convert::invert_color(self.old_color),
            saturation,
            lightness,
            confirm_overlay,
            cancel_overlay,
        }
    }
}
