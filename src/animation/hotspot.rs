// src/animation/hotspot.rs
//
// Per-marker animation facade. Each mounted hotspot owns one of these; it
// subscribes to the shared clock, caches the latest bundle, and gates each
// channel by the marker's own configuration. It never owns a timer.

use nannou::prelude::*;

use std::cell::Cell;
use std::rc::Rc;

use super::clock::{AnimationClock, SharedAnimationValues, Subscription};

const NEUTRAL_PULSE_SCALE: f32 = 1.0;
const NEUTRAL_COLOR_PHASE: f32 = 0.0;
const NEUTRAL_RING_SCALE: f32 = 1.0;

/// Visual family of a hotspot marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotShape {
    Point,
    Area,
    // Scene files may carry shape kinds this build doesn't know. Those
    // markers still draw, they just never ring.
    Unknown,
}

impl Default for HotspotShape {
    fn default() -> Self {
        HotspotShape::Point
    }
}

pub struct HotspotAnimation {
    shape: HotspotShape,
    is_target: bool,
    overlay_active: bool,
    color_from: Rgb<u8>,
    color_to: Rgb<u8>,
    latest: Rc<Cell<SharedAnimationValues>>,
    _subscription: Subscription,
}

impl HotspotAnimation {
    pub fn new(
        clock: &AnimationClock,
        shape: HotspotShape,
        color_from: Rgb<u8>,
        color_to: Rgb<u8>,
    ) -> Self {
        let latest = Rc::new(Cell::new(clock.get_current_values()));
        let writer = latest.clone();
        let (snapshot, subscription) = clock.subscribe(move |values| writer.set(values));
        latest.set(snapshot);

        Self {
            shape,
            is_target: false,
            overlay_active: false,
            color_from,
            color_to,
            latest,
            _subscription: subscription,
        }
    }

    pub fn set_target(&mut self, is_target: bool) {
        self.is_target = is_target;
    }

    pub fn set_overlay_active(&mut self, overlay_active: bool) {
        self.overlay_active = overlay_active;
    }

    pub fn is_target(&self) -> bool {
        self.is_target
    }

    pub fn is_overlay_active(&self) -> bool {
        self.overlay_active
    }

    pub fn shape(&self) -> HotspotShape {
        self.shape
    }

    // Gated reads. Each is recomputed from the cached bundle on every call,
    // so a marker whose configuration just changed picks up the right
    // channels without waiting for another tick.

    /// Breathing scale for the marker dot. Only the highlighted target
    /// pulses.
    pub fn pulse_scale(&self) -> f32 {
        if self.is_target {
            self.latest.get().pulse_scale
        } else {
            NEUTRAL_PULSE_SCALE
        }
    }

    /// Progress through the highlight color cycle. Phase 0 is the base
    /// color, so suppressed markers sit at the bottom of the ramp.
    pub fn color_phase(&self) -> f32 {
        if self.is_target {
            self.latest.get().color_phase
        } else {
            NEUTRAL_COLOR_PHASE
        }
    }

    /// Ring scale for area markers. Suppressed while an overlay owns the
    /// marker's presentation, and for every non-area shape.
    pub fn ring_scale(&self) -> f32 {
        if self.shape == HotspotShape::Area && !self.overlay_active {
            self.latest.get().area_ring_scale
        } else {
            NEUTRAL_RING_SCALE
        }
    }

    /// Current fill color, interpolated between the two reference colors by
    /// the gated color phase. Derived on demand, never stored.
    pub fn target_color(&self) -> Rgb<u8> {
        lerp_color8(self.color_from, self.color_to, self.color_phase())
    }
}

fn lerp_color8(start: Rgb<u8>, end: Rgb<u8>, phase: f32) -> Rgb<u8> {
    let t = phase.clamp(0.0, 1.0);
    rgb8(
        lerp_channel(start.red, end.red, t),
        lerp_channel(start.green, end.green, t),
        lerp_channel(start.blue, end.blue, t),
    )
}

fn lerp_channel(start: u8, end: u8, t: f32) -> u8 {
    (start as f32 + (end as f32 - start as f32) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationConfig;

    fn base_color() -> Rgb<u8> {
        rgb8(12, 53, 89)
    }

    fn highlight_color() -> Rgb<u8> {
        rgb8(56, 135, 166)
    }

    fn adapter(clock: &AnimationClock, shape: HotspotShape) -> HotspotAnimation {
        HotspotAnimation::new(clock, shape, base_color(), highlight_color())
    }

    fn clock() -> AnimationClock {
        AnimationClock::new(AnimationConfig::default())
    }

    // First tick anchors the run origin, second one lands mid-cycle so each
    // channel sits away from its neutral value.
    fn tick_mid_cycle(clock: &AnimationClock) {
        clock.update(0.0);
        clock.update(0.37);
    }

    #[test]
    fn test_non_target_reads_neutral() {
        let clock = clock();
        let hotspot = adapter(&clock, HotspotShape::Point);
        tick_mid_cycle(&clock);

        assert_eq!(hotspot.pulse_scale(), 1.0);
        assert_eq!(hotspot.color_phase(), 0.0);
        assert_ne!(clock.get_current_values().pulse_scale, 1.0);
    }

    #[test]
    fn test_target_tracks_clock_exactly() {
        let clock = clock();
        let mut hotspot = adapter(&clock, HotspotShape::Point);
        hotspot.set_target(true);

        for t in [0.1, 0.52, 1.3, 2.61] {
            clock.update(t);
            let shared = clock.get_current_values();
            assert_eq!(hotspot.pulse_scale(), shared.pulse_scale);
            assert_eq!(hotspot.color_phase(), shared.color_phase);
        }
    }

    #[test]
    fn test_ring_follows_clock_for_plain_area() {
        let clock = clock();
        let hotspot = adapter(&clock, HotspotShape::Area);
        tick_mid_cycle(&clock);

        assert_eq!(
            hotspot.ring_scale(),
            clock.get_current_values().area_ring_scale
        );
        assert_ne!(hotspot.ring_scale(), 1.0);
    }

    #[test]
    fn test_overlay_suppresses_ring() {
        let clock = clock();
        let mut hotspot = adapter(&clock, HotspotShape::Area);
        hotspot.set_overlay_active(true);
        tick_mid_cycle(&clock);

        assert_eq!(hotspot.ring_scale(), 1.0);
    }

    #[test]
    fn test_point_never_rings() {
        let clock = clock();
        let mut hotspot = adapter(&clock, HotspotShape::Point);
        tick_mid_cycle(&clock);
        assert_eq!(hotspot.ring_scale(), 1.0);

        hotspot.set_overlay_active(true);
        assert_eq!(hotspot.ring_scale(), 1.0);
    }

    #[test]
    fn test_unknown_shape_falls_back_to_no_ring() {
        let clock = clock();
        let hotspot = adapter(&clock, HotspotShape::Unknown);
        tick_mid_cycle(&clock);

        assert_eq!(hotspot.ring_scale(), 1.0);
    }

    #[test]
    fn test_color_endpoints_are_exact() {
        assert_eq!(
            lerp_color8(base_color(), highlight_color(), 0.0),
            base_color()
        );
        assert_eq!(
            lerp_color8(base_color(), highlight_color(), 1.0),
            highlight_color()
        );
    }

    #[test]
    fn test_color_midpoint_rounds_per_channel() {
        // (12,53,89) to (56,135,166): blue lands on 127.5 and rounds up
        assert_eq!(
            lerp_color8(base_color(), highlight_color(), 0.5),
            rgb8(34, 94, 128)
        );
    }

    #[test]
    fn test_color_phase_clamps_out_of_range() {
        assert_eq!(
            lerp_color8(base_color(), highlight_color(), -3.0),
            base_color()
        );
        assert_eq!(
            lerp_color8(base_color(), highlight_color(), 7.5),
            highlight_color()
        );
    }

    #[test]
    fn test_non_target_color_is_base() {
        let clock = clock();
        let hotspot = adapter(&clock, HotspotShape::Point);
        clock.update(0.0);
        clock.update(1.9);

        assert_eq!(hotspot.target_color(), base_color());
    }

    #[test]
    fn test_target_color_moves_with_phase() {
        let cfg = AnimationConfig::default();
        let clock = AnimationClock::new(cfg.clone());
        let mut hotspot = adapter(&clock, HotspotShape::Point);
        hotspot.set_target(true);

        // half a color cycle in, the fill sits at the channel midpoints
        clock.update(0.0);
        clock.update(cfg.color_cycle.period / 2.0);
        assert_eq!(hotspot.target_color(), rgb8(34, 94, 128));
    }

    #[test]
    fn test_adapter_drop_releases_subscription() {
        let clock = AnimationClock::new(AnimationConfig::default());
        let hotspot = adapter(&clock, HotspotShape::Point);
        assert_eq!(clock.subscriber_count(), 1);
        assert!(clock.is_running());

        drop(hotspot);
        assert_eq!(clock.subscriber_count(), 0);
        assert!(!clock.is_running());
    }
}
