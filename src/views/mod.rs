// src/views/mod.rs

pub mod backdrop;
pub mod hotspot_layer;
pub mod hotspot_marker;

pub use backdrop::Backdrop;
pub use hotspot_layer::HotspotLayer;
pub use hotspot_marker::HotspotMarker;
