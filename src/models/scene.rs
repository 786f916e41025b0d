// src/models/scene.rs
// the JSON-based scene data model

use serde::{Deserialize, Serialize};

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::animation::HotspotShape;

// Area markers without an explicit radius get this one (normalized units).
pub const DEFAULT_AREA_RADIUS: f32 = 0.06;

#[derive(Debug, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    pub hotspots: Vec<HotspotDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotDef {
    pub id: String,
    pub label: String,
    // normalized [0,1] position over the window
    pub x: f32,
    pub y: f32,
    #[serde(rename = "shapeKind")]
    pub shape_kind: String,
    pub radius: Option<f32>,
}

impl Scene {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let scene: Scene = serde_json::from_str(&content)?;
        Ok(scene)
    }

    pub fn get_hotspot(&self, id: &str) -> Option<&HotspotDef> {
        self.hotspots.iter().find(|h| h.id == id)
    }

    pub fn has_hotspot(&self, id: &str) -> bool {
        self.get_hotspot(id).is_some()
    }
}

impl HotspotDef {
    /// parse a shapeKind string into the shape enum
    /// anything unrecognized keeps drawing but never rings
    pub fn parse_shape_kind(kind: &str) -> HotspotShape {
        match kind {
            "point" => HotspotShape::Point,
            "area" => HotspotShape::Area,
            _ => HotspotShape::Unknown,
        }
    }

    pub fn shape(&self) -> HotspotShape {
        Self::parse_shape_kind(&self.shape_kind)
    }

    pub fn radius_or_default(&self) -> f32 {
        self.radius.unwrap_or(DEFAULT_AREA_RADIUS)
    }
}
