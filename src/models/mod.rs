pub mod scene;

pub use scene::{HotspotDef, Scene, DEFAULT_AREA_RADIUS};
