//! Ring picker view.
//!
//! The hue ring and the saturation/lightness ring are rasterized together
//! into one RGBA8 image, cached until the hue or the physical size changes.
//! The center half-discs, icons and indicators are cheap vector shapes and
//! are drawn every frame from a [`RingFrame`].

use std::f64::consts::PI;
use std::sync::Arc;

use floem::kurbo::{BezPath, Circle, Line, Point, Rect, Stroke};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{RwSignal, SignalGet, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::color::Argb;
use crate::config::RingConfig;
use crate::constants;
use crate::gradient::{self, Gradient, HUE_COLORS};
use crate::math;
use crate::picker::{PickerEvent, PickerState, PointerResponse, RingFrame, RingGeometry};

fn to_color(color: Argb) -> Color {
    Color::rgba8(color.red(), color.green(), color.blue(), color.alpha())
}

/// Half of a disc as a closed `BezPath` of line segments, sweeping half a
/// turn clockwise from `start`.
fn half_disc_path(center: Point, radius: f64, start: f64) -> BezPath {
    const SEGMENTS: usize = 32;
    let mut path = BezPath::new();
    path.move_to(center);
    for i in 0..=SEGMENTS {
        let angle = start + PI * i as f64 / SEGMENTS as f64;
        path.line_to(Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        ));
    }
    path.close_path();
    path
}

/// Coverage of a band of half-width `half` around `radius` at `dist`, all
/// in physical pixels.
fn band_alpha(dist: f64, radius: f64, half: f64) -> f64 {
    let inside = half - (dist - radius).abs();
    (inside / constants::FEATHER + 0.5).clamp(0.0, 1.0)
}

/// Rasterize both rings to a `side`×`side` RGBA8 buffer.
///
/// `geometry` is in logical pixels and `scale` maps it to the buffer. The
/// saturation arc fills the lower half of the inner ring, the lightness arc
/// the upper half.
fn rasterize_rings(
    side: u32,
    geometry: &RingGeometry,
    scale: f64,
    saturation: &Gradient,
    lightness: &Gradient,
) -> Vec<u8> {
    let center = side as f64 / 2.0;
    let half = geometry.stroke_width * scale / 2.0;
    let hue_radius = geometry.hue_radius * scale;
    let arc_radius = geometry.arc_radius * scale;
    let reach = constants::FEATHER;

    let mut buf = vec![0u8; (side * side * 4) as usize];

    for py in 0..side {
        let dy = py as f64 + 0.5 - center;
        let row_offset = (py * side * 4) as usize;

        for px in 0..side {
            let dx = px as f64 + 0.5 - center;
            let dist = (dx * dx + dy * dy).sqrt();
            let turns = math::angle_to_turns(dy.atan2(dx));

            let (color, alpha) = if (dist - hue_radius).abs() < half + reach {
                (
                    gradient::color_on_gradient(turns, &HUE_COLORS, None),
                    band_alpha(dist, hue_radius, half),
                )
            } else if (dist - arc_radius).abs() < half + reach {
                let color = if dy >= 0.0 {
                    saturation.color_at(turns)
                } else {
                    lightness.color_at(turns)
                };
                (color, band_alpha(dist, arc_radius, half))
            } else {
                continue;
            };

            let offset = row_offset + (px * 4) as usize;
            buf[offset] = color.red();
            buf[offset + 1] = color.green();
            buf[offset + 2] = color.blue();
            buf[offset + 3] = math::channel_to_u8(alpha);
        }
    }

    buf
}

enum RingUpdate {
    OldColor(Argb),
}

pub struct RingWheel {
    id: ViewId,
    state: PickerState,
    size: floem::taffy::prelude::Size<f32>,
    on_event: Option<Box<dyn Fn(PickerEvent)>>,
    /// Both rings for the cached hue and raster size.
    ring_img: Option<peniko::Image>,
    ring_hash: Vec<u8>,
    cached_hue: Argb,
    cached_side: u32,
}

/// Creates a ring picker that starts from, and shows, `old_color`.
///
/// Setting the signal later re-seeds the picker. `on_event` receives every
/// [`PickerEvent`].
pub(crate) fn ring_wheel(
    old_color: RwSignal<Argb>,
    config: RingConfig,
    on_event: impl Fn(PickerEvent) + 'static,
) -> RingWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        let color = old_color.get();
        id.update_state(RingUpdate::OldColor(color));
    });

    RingWheel {
        id,
        state: PickerState::new(config).with_old_color(old_color.get_untracked()),
        size: Default::default(),
        on_event: Some(Box::new(on_event)),
        ring_img: None,
        ring_hash: Vec::new(),
        cached_hue: Argb::default(),
        cached_side: 0,
    }
    .style(|s| {
        s.flex_grow(1.0)
            .aspect_ratio(1.0)
            .min_height(constants::MIN_SIDE)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl RingWheel {
    pub fn state(&self) -> &PickerState {
        &self.state
    }

    fn side(&self) -> f64 {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        w.min(h)
    }

    fn center(&self) -> Point {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        Point::new(w / 2.0, h / 2.0)
    }

    fn wheel_rect(&self) -> Rect {
        let center = self.center();
        let r = self.side() / 2.0;
        Rect::new(center.x - r, center.y - r, center.x + r, center.y + r)
    }

    /// Pointer position relative to the wheel center.
    fn local(&self, pos: Point) -> (f64, f64) {
        let center = self.center();
        (pos.x - center.x, pos.y - center.y)
    }

    fn respond(&mut self, response: PointerResponse) -> EventPropagation {
        if let Some(event) = response.event {
            if let Some(cb) = &self.on_event {
                cb(event);
            }
        }
        if response.repaint {
            self.id.request_layout();
        }
        if response.consumed {
            EventPropagation::Stop
        } else {
            EventPropagation::Continue
        }
    }

    fn ensure_ring_image(&mut self, frame: &RingFrame, scale: f64) {
        let geometry = *self.state.geometry();
        let side = (geometry.side * scale).round() as u32;
        if side == 0 {
            return;
        }
        if self.ring_img.is_some() && self.cached_side == side && self.cached_hue == frame.hue_color
        {
            return;
        }

        log::trace!("rasterizing rings at {side}px for {}", frame.hue_color);
        let pixels = rasterize_rings(side, &geometry, scale, &frame.saturation, &frame.lightness);
        let blob = Blob::new(Arc::new(pixels));
        self.ring_hash = blob.id().to_le_bytes().to_vec();
        self.ring_img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, side, side));
        self.cached_side = side;
        self.cached_hue = frame.hue_color;
    }
}

fn paint_check(cx: &mut PaintCx, center: Point, size: f64, color: Color, width: f64) {
    let mut path = BezPath::new();
    path.move_to(Point::new(center.x - size * 0.5, center.y));
    path.line_to(Point::new(center.x - size * 0.15, center.y + size * 0.35));
    path.line_to(Point::new(center.x + size * 0.5, center.y - size * 0.35));
    cx.stroke(&path, color, &Stroke::new(width));
}

fn paint_cross(cx: &mut PaintCx, center: Point, size: f64, color: Color, width: f64) {
    let d = size * 0.4;
    let stroke = Stroke::new(width);
    cx.stroke(
        &Line::new((center.x - d, center.y - d), (center.x + d, center.y + d)),
        color,
        &stroke,
    );
    cx.stroke(
        &Line::new((center.x - d, center.y + d), (center.x + d, center.y - d)),
        color,
        &stroke,
    );
}

impl View for RingWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<RingUpdate>() {
            match *update {
                RingUpdate::OldColor(color) => self.state.set_old_color(color),
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                let (x, y) = self.local(e.pos);
                let response = self.state.pointer_down(x, y);
                if response.consumed {
                    cx.update_active(self.id());
                }
                self.respond(response)
            }
            Event::PointerMove(e) => {
                let (x, y) = self.local(e.pos);
                let response = self.state.pointer_move(x, y);
                self.respond(response)
            }
            Event::PointerUp(_) => {
                if self.state.engaged().is_none() {
                    return EventPropagation::Continue;
                }
                let response = self.state.pointer_up();
                self.respond(response)
            }
            Event::FocusLost => {
                self.state.release();
                self.id.request_layout();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        let side = self.side();
        if side != self.state.geometry().side {
            self.state.resize(side);
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        let center = self.center();
        let geometry = *self.state.geometry();
        let frame = self.state.frame();

        cx.fill(&Circle::new(center, geometry.side / 2.0), Color::BLACK, 0.0);

        self.ensure_ring_image(&frame, cx.scale());
        if let Some(ref img) = self.ring_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.ring_hash,
                },
                self.wheel_rect(),
            );
        }

        // Confirm on top, cancel below
        let confirm = half_disc_path(center, geometry.center_radius, PI);
        cx.fill(&confirm, to_color(frame.picked), 0.0);
        if let Some(overlay) = frame.confirm_overlay {
            cx.fill(&confirm, to_color(overlay), 0.0);
        }
        let cancel = half_disc_path(center, geometry.center_radius, 0.0);
        cx.fill(&cancel, to_color(frame.old_color), 0.0);
        if let Some(overlay) = frame.cancel_overlay {
            cx.fill(&cancel, to_color(overlay), 0.0);
        }

        let icon_size = geometry.center_radius * 0.5;
        let icon_width = geometry.stroke_width * constants::ICON_STROKE_RATIO;
        let icon_offset = geometry.center_radius / 2.0;
        paint_check(
            cx,
            Point::new(center.x, center.y - icon_offset),
            icon_size,
            to_color(frame.confirm_icon),
            icon_width,
        );
        paint_cross(
            cx,
            Point::new(center.x, center.y + icon_offset),
            icon_size,
            to_color(frame.cancel_icon),
            icon_width,
        );

        // Split the inner ring and the center discs
        let reach = geometry.side / 2.0 - geometry.stroke_width;
        cx.stroke(
            &Line::new((center.x - reach, center.y), (center.x + reach, center.y)),
            Color::BLACK,
            &Stroke::new(geometry.spacer),
        );

        let indicator = Stroke::new(self.state.config().indicator_stroke_width);
        let radius = geometry.indicator_radius();
        let angles = frame.angles;
        let dots = [
            (geometry.hue_indicator(angles.hue), frame.hue_indicator),
            (
                geometry.arc_indicator(angles.saturation),
                frame.saturation_indicator,
            ),
            (
                geometry.arc_indicator(angles.lightness),
                frame.lightness_indicator,
            ),
        ];
        for ((x, y), color) in dots {
            let dot = Circle::new(Point::new(center.x + x, center.y + y), radius);
            cx.stroke(&dot, to_color(color), &indicator);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], side: u32, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * side + x) * 4) as usize;
        [buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]]
    }

    #[test]
    fn rings_rasterize_with_their_gradients() {
        let geometry = RingGeometry::new(200.0, &RingConfig::default());
        let saturation = gradient::saturation_gradient(Argb::RED);
        let lightness = gradient::lightness_gradient(Argb::RED);
        let buf = rasterize_rings(200, &geometry, 1.0, &saturation, &lightness);

        // Right edge of the hue ring is red, a hair toward magenta
        let right = pixel(&buf, 200, 190, 100);
        assert_eq!([right[0], right[1], right[3]], [255, 0, 255]);
        assert!(right[2] <= 2);
        // Center stays transparent for the half-discs
        assert_eq!(pixel(&buf, 200, 100, 100)[3], 0);
        // Corner is outside every ring
        assert_eq!(pixel(&buf, 200, 0, 0)[3], 0);
        // Straight down the inner ring sits at a quarter turn on the saturation arc
        let below = pixel(&buf, 200, 100, 166);
        assert_eq!(below[3], 255);
        let expected = saturation.color_at(0.25);
        assert!((below[0] as i32 - expected.red() as i32).abs() <= 2);
        // Straight up the inner ring sits at three quarters on the lightness arc: pure hue
        let above = pixel(&buf, 200, 100, 33);
        assert_eq!(above[3], 255);
        assert!(above[0] >= 250 && above[1] <= 5 && above[2] <= 5);
    }

    #[test]
    fn band_edges_are_feathered() {
        assert_eq!(band_alpha(50.0, 50.0, 10.0), 1.0);
        assert_eq!(band_alpha(70.0, 50.0, 10.0), 0.0);
        let edge = band_alpha(60.0, 50.0, 10.0);
        assert!(edge > 0.0 && edge < 1.0);
    }

    #[test]
    fn half_disc_stays_on_its_side() {
        let path = half_disc_path(Point::ZERO, 10.0, PI);
        for el in path.elements() {
            if let floem::kurbo::PathEl::LineTo(p) = el {
                assert!(p.y <= 1e-9);
            }
        }
    }
}
