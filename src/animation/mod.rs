pub mod clock;
pub mod hotspot;

pub use clock::{
    AnimationClock, FrameScheduler, PassiveScheduler, SharedAnimationValues, Subscription,
};
pub use hotspot::{HotspotAnimation, HotspotShape};
