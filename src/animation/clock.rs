// src/animation/clock.rs
//
// The shared animation clock.
// Every mounted marker used to be a candidate for its own timer; instead one
// frame-driven loop computes each periodic channel exactly once per tick and
// fans the same bundle out to every subscriber. The loop only runs while
// somebody is subscribed.

use crate::config::{AnimationConfig, WaveConfig};
use std::cell::RefCell;
use std::f32::consts::TAU;
use std::rc::{Rc, Weak};

/// One immutable snapshot of every shared channel at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharedAnimationValues {
    pub pulse_scale: f32,
    pub color_phase: f32,
    pub area_ring_scale: f32,
}

impl SharedAnimationValues {
    // Channels are pure functions of elapsed seconds, so any two reads at the
    // same elapsed time agree bit for bit.
    pub fn at(timing: &AnimationConfig, elapsed: f32) -> Self {
        Self {
            pulse_scale: wave(&timing.pulse, elapsed),
            color_phase: (elapsed / timing.color_cycle.period) % 1.0,
            area_ring_scale: wave(&timing.area_ring, elapsed),
        }
    }
}

fn wave(params: &WaveConfig, elapsed: f32) -> f32 {
    params.baseline + params.amplitude * (TAU * elapsed / params.period).sin()
}

// Seam to the host's frame source. The clock arms it when the first
// subscriber arrives and releases it when the last one leaves.
pub trait FrameScheduler {
    fn start(&self);
    fn stop(&self);
}

// nannou's update loop runs whether or not anything is subscribed, so the
// production scheduler has nothing to arm. Tests swap in a counting one.
pub struct PassiveScheduler;

impl FrameScheduler for PassiveScheduler {
    fn start(&self) {}
    fn stop(&self) {}
}

type Listener = Rc<dyn Fn(SharedAnimationValues)>;

struct Subscriber {
    id: u64,
    listener: Listener,
}

struct ClockState {
    timing: AnimationConfig,
    scheduler: Rc<dyn FrameScheduler>,
    subscribers: Vec<Subscriber>,
    next_id: u64,
    values: SharedAnimationValues,
    origin: Option<f32>,
    running: bool,
    ticks: u64,
}

/// Cheap-to-clone handle on the one shared clock for a screen.
#[derive(Clone)]
pub struct AnimationClock {
    state: Rc<RefCell<ClockState>>,
}

impl AnimationClock {
    pub fn new(timing: AnimationConfig) -> Self {
        Self::with_scheduler(timing, Rc::new(PassiveScheduler))
    }

    pub fn with_scheduler(timing: AnimationConfig, scheduler: Rc<dyn FrameScheduler>) -> Self {
        let values = SharedAnimationValues::at(&timing, 0.0);
        Self {
            state: Rc::new(RefCell::new(ClockState {
                timing,
                scheduler,
                subscribers: Vec::new(),
                next_id: 0,
                values,
                origin: None,
                running: false,
                ticks: 0,
            })),
        }
    }

    // Registers a listener and hands back the latest snapshot right away, so
    // a marker mounted between ticks never renders one frame of garbage.
    // The first subscriber starts a fresh run: elapsed time restarts at zero
    // on the next tick.
    pub fn subscribe<F>(&self, listener: F) -> (SharedAnimationValues, Subscription)
    where
        F: Fn(SharedAnimationValues) + 'static,
    {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.subscribers.push(Subscriber {
            id,
            listener: Rc::new(listener),
        });

        let starting = !state.running;
        if starting {
            state.running = true;
            state.origin = None;
            state.values = SharedAnimationValues::at(&state.timing, 0.0);
        }
        let snapshot = state.values;
        let scheduler = state.scheduler.clone();
        drop(state);

        // Outside the borrow: a scheduler impl may want to read the clock.
        if starting {
            scheduler.start();
        }

        (
            snapshot,
            Subscription {
                state: Rc::downgrade(&self.state),
                id,
            },
        )
    }

    /// Latest computed bundle. Valid before the first tick (elapsed zero) and
    /// after the last subscriber left (frozen at the final tick).
    pub fn get_current_values(&self) -> SharedAnimationValues {
        self.state.borrow().values
    }

    // The host tick. nannou calls this once per update with app.time; any
    // frame source with monotonic timestamps works the same way. Does
    // nothing while stopped.
    pub fn update(&self, now: f32) {
        let mut state = self.state.borrow_mut();
        if !state.running {
            return;
        }

        let origin = *state.origin.get_or_insert(now);
        let elapsed = (now - origin).max(0.0);
        state.values = SharedAnimationValues::at(&state.timing, elapsed);
        state.ticks += 1;

        let values = state.values;
        let pending: Vec<(u64, Listener)> = state
            .subscribers
            .iter()
            .map(|s| (s.id, s.listener.clone()))
            .collect();
        drop(state);

        // Listeners may subscribe or unsubscribe mid-fanout. Anyone already
        // unsubscribed by the time we reach them is skipped; anyone new waits
        // for the next tick (they got a snapshot from subscribe).
        for (id, listener) in pending {
            let live = self
                .state
                .borrow()
                .subscribers
                .iter()
                .any(|s| s.id == id);
            if live {
                listener(values);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    pub fn tick_count(&self) -> u64 {
        self.state.borrow().ticks
    }
}

/// Deregistration handle returned by subscribe. Dropping it unsubscribes, so
/// a marker that unmounts can never receive another notification.
pub struct Subscription {
    state: Weak<RefCell<ClockState>>,
    id: u64,
}

impl Subscription {
    // Idempotent: a second call, or a drop after an explicit call, is a no-op.
    pub fn unsubscribe(&mut self) {
        let state_rc = match self.state.upgrade() {
            Some(rc) => rc,
            None => return, // clock itself is gone
        };

        let mut state = state_rc.borrow_mut();
        let before = state.subscribers.len();
        state.subscribers.retain(|s| s.id != self.id);
        let removed = state.subscribers.len() != before;

        let stopping = removed && state.running && state.subscribers.is_empty();
        if stopping {
            state.running = false;
            state.origin = None;
        }
        let scheduler = state.scheduler.clone();
        drop(state);

        if stopping {
            scheduler.stop();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
