// src/views/hotspot_marker.rs
//
// One mounted hotspot marker. Pairs the scene definition with its animation
// facade; mounting subscribes to the shared clock, dropping unsubscribes.

use nannou::prelude::*;

use crate::animation::{AnimationClock, HotspotAnimation, HotspotShape};
use crate::config::StyleConfig;
use crate::models::HotspotDef;

const LABEL_GAP: f32 = 14.0;

pub struct HotspotMarker {
    def: HotspotDef,
    animation: HotspotAnimation,
}

impl HotspotMarker {
    pub fn new(def: HotspotDef, clock: &AnimationClock, style: &StyleConfig) -> Self {
        let animation = HotspotAnimation::new(
            clock,
            def.shape(),
            style.highlight_from_color(),
            style.highlight_to_color(),
        );

        Self { def, animation }
    }

    pub fn id(&self) -> &str {
        &self.def.id
    }

    pub fn def(&self) -> &HotspotDef {
        &self.def
    }

    pub fn set_highlighted(&mut self, on: bool) {
        self.animation.set_target(on);
    }

    pub fn is_highlighted(&self) -> bool {
        self.animation.is_target()
    }

    pub fn set_overlay_active(&mut self, on: bool) {
        self.animation.set_overlay_active(on);
    }

    pub fn is_overlay_active(&self) -> bool {
        self.animation.is_overlay_active()
    }

    // Scene coordinates are normalized [0,1] with the origin at the top
    // left; the window rect is centered on (0,0) with y up.
    pub fn position(&self, window: Rect) -> Point2 {
        pt2(
            window.left() + self.def.x * window.w(),
            window.top() - self.def.y * window.h(),
        )
    }

    fn area_radius(&self, window: Rect) -> f32 {
        self.def.radius_or_default() * window.w().min(window.h())
    }

    pub fn draw(&self, draw: &Draw, window: Rect, style: &StyleConfig) {
        let center = self.position(window);
        let color = self.animation.target_color();
        let dot_radius = style.marker_radius * self.animation.pulse_scale();

        draw.ellipse()
            .x_y(center.x, center.y)
            .radius(dot_radius)
            .color(color);

        if self.def.shape() == HotspotShape::Area {
            draw.ellipse()
                .x_y(center.x, center.y)
                .radius(self.area_radius(window) * self.animation.ring_scale())
                .no_fill()
                .stroke(color)
                .stroke_weight(style.default_stroke_weight);
        }

        if self.animation.is_target() {
            draw.text(&self.def.label)
                .x_y(center.x, center.y + dot_radius + LABEL_GAP)
                .color(WHITESMOKE)
                .font_size(style.label_font_size);
        }
    }

    /// True when the point falls inside the marker's clickable region.
    pub fn hit_test(&self, window: Rect, point: Point2, style: &StyleConfig) -> bool {
        let center = self.position(window);
        let radius = match self.def.shape() {
            HotspotShape::Area => self.area_radius(window),
            _ => style.marker_radius,
        };
        center.distance(point) <= radius
    }
}
