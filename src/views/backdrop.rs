// src/views/backdrop.rs
//
// Ambient background wash, the layer's sibling consumer on the shared
// clock. While enabled it subscribes and breathes between two dark tones;
// disabled it drops its subscription and holds the base color.

use nannou::prelude::*;

use std::cell::Cell;
use std::rc::Rc;

use crate::animation::{AnimationClock, SharedAnimationValues, Subscription};

pub struct Backdrop {
    latest: Rc<Cell<SharedAnimationValues>>,
    // present while enabled; dropping it is the unsubscribe
    subscription: Option<Subscription>,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

impl Backdrop {
    pub fn new() -> Self {
        Self {
            latest: Rc::new(Cell::new(SharedAnimationValues {
                pulse_scale: 1.0,
                color_phase: 0.0,
                area_ring_scale: 1.0,
            })),
            subscription: None,
        }
    }

    pub fn toggle(&mut self, clock: &AnimationClock) {
        if self.subscription.is_some() {
            self.subscription = None;
        } else {
            let writer = self.latest.clone();
            let (snapshot, subscription) = clock.subscribe(move |values| writer.set(values));
            self.latest.set(snapshot);
            self.subscription = Some(subscription);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn draw(&self, draw: &Draw) {
        draw.background().color(self.current_color());
    }

    // The color phase runs 0..1 and wraps, so folding it into a ping-pong
    // keeps the wash from snapping back to base at the wrap point.
    pub fn current_color(&self) -> Rgb {
        if self.subscription.is_none() {
            return base_color();
        }
        let phase = self.latest.get().color_phase;
        let t = 1.0 - (2.0 * phase - 1.0).abs();
        lerp_color(base_color(), wash_color(), t)
    }
}

fn base_color() -> Rgb {
    rgb(0.02, 0.05, 0.09)
}

fn wash_color() -> Rgb {
    rgb(0.07, 0.13, 0.2)
}

fn lerp_color(start: Rgb<f32>, end: Rgb<f32>, time: f32) -> Rgb<f32> {
    rgb(
        start.red + (end.red - start.red) * time,
        start.green + (end.green - start.green) * time,
        start.blue + (end.blue - start.blue) * time,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationConfig;

    #[test]
    fn test_toggle_drives_subscription() {
        let clock = AnimationClock::new(AnimationConfig::default());
        let mut backdrop = Backdrop::new();
        assert_eq!(clock.subscriber_count(), 0);

        backdrop.toggle(&clock);
        assert!(backdrop.is_enabled());
        assert_eq!(clock.subscriber_count(), 1);
        assert!(clock.is_running());

        backdrop.toggle(&clock);
        assert!(!backdrop.is_enabled());
        assert_eq!(clock.subscriber_count(), 0);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_disabled_backdrop_holds_base_color() {
        let clock = AnimationClock::new(AnimationConfig::default());
        let backdrop = Backdrop::new();
        clock.update(1.0);

        let color = backdrop.current_color();
        assert!((color.red - 0.02).abs() < 1e-6);
        assert!((color.green - 0.05).abs() < 1e-6);
        assert!((color.blue - 0.09).abs() < 1e-6);
    }

    #[test]
    fn test_wash_peaks_mid_cycle() {
        let cfg = AnimationConfig::default();
        let clock = AnimationClock::new(cfg.clone());
        let mut backdrop = Backdrop::new();
        backdrop.toggle(&clock);

        // phase 0 sits on the base tone
        let start = backdrop.current_color();
        assert!((start.red - 0.02).abs() < 1e-6);

        // half a color cycle reaches the wash tone
        clock.update(0.0);
        clock.update(cfg.color_cycle.period / 2.0);
        let peak = backdrop.current_color();
        assert!((peak.red - 0.07).abs() < 1e-5);
        assert!((peak.green - 0.13).abs() < 1e-5);
        assert!((peak.blue - 0.2).abs() < 1e-5);
    }
}
