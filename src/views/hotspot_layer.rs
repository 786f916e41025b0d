// src/views/hotspot_layer.rs
//
// Manages the set of mounted hotspot markers. Holds the scene definitions as
// the source of truth so the layer can be hidden (every marker unmounted,
// which releases every clock subscription) and shown again with highlight
// and overlay state intact.

use nannou::prelude::*;

use std::collections::{HashMap, HashSet};

use crate::animation::AnimationClock;
use crate::config::StyleConfig;
use crate::models::{HotspotDef, Scene};
use crate::views::HotspotMarker;

pub struct HotspotLayer {
    defs: Vec<HotspotDef>,
    markers: HashMap<String, HotspotMarker>,
    highlighted: Option<String>,
    overlays: HashSet<String>,
    visible: bool,
}

impl Default for HotspotLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl HotspotLayer {
    pub fn new() -> Self {
        Self {
            defs: Vec::new(),
            markers: HashMap::new(),
            highlighted: None,
            overlays: HashSet::new(),
            visible: true,
        }
    }

    /// Replaces the layer contents with the scene's hotspots and mounts
    /// them. Duplicate ids collapse to the last definition.
    pub fn mount_scene(&mut self, scene: &Scene, clock: &AnimationClock, style: &StyleConfig) {
        self.defs = Vec::new();
        for def in &scene.hotspots {
            self.defs.retain(|d| d.id != def.id);
            self.defs.push(def.clone());
        }
        self.markers.clear();
        self.highlighted = None;
        self.overlays.clear();
        self.visible = true;
        self.remount(clock, style);
    }

    fn remount(&mut self, clock: &AnimationClock, style: &StyleConfig) {
        self.markers.clear();
        for def in &self.defs {
            let mut marker = HotspotMarker::new(def.clone(), clock, style);
            marker.set_highlighted(self.highlighted.as_deref() == Some(def.id.as_str()));
            marker.set_overlay_active(self.overlays.contains(&def.id));
            self.markers.insert(def.id.clone(), marker);
        }
    }

    /// Mounts one more hotspot at runtime. An existing definition with the
    /// same id is replaced.
    pub fn add_hotspot(&mut self, def: HotspotDef, clock: &AnimationClock, style: &StyleConfig) {
        self.defs.retain(|d| d.id != def.id);
        if self.visible {
            let mut marker = HotspotMarker::new(def.clone(), clock, style);
            marker.set_highlighted(self.highlighted.as_deref() == Some(def.id.as_str()));
            marker.set_overlay_active(self.overlays.contains(&def.id));
            self.markers.insert(def.id.clone(), marker);
        }
        self.defs.push(def);
    }

    /// Unmounts a hotspot and forgets its remembered state.
    pub fn remove_hotspot(&mut self, id: &str) {
        self.defs.retain(|d| d.id != id);
        self.markers.remove(id);
        self.overlays.remove(id);
        if self.highlighted.as_deref() == Some(id) {
            self.highlighted = None;
        }
    }

    /// Single-target policy: highlighting one marker clears the rest.
    /// Unknown ids leave the current target alone.
    pub fn set_highlight(&mut self, id: &str, on: bool) {
        if on {
            if !self.defs.iter().any(|d| d.id == id) {
                println!("Unknown hotspot id: {}", id);
                return;
            }
            self.highlighted = Some(id.to_string());
        } else {
            if self.highlighted.as_deref() != Some(id) {
                return;
            }
            self.highlighted = None;
        }

        for marker in self.markers.values_mut() {
            let is_target = self.highlighted.as_deref() == Some(marker.id());
            marker.set_highlighted(is_target);
        }
    }

    pub fn clear_highlights(&mut self) {
        self.highlighted = None;
        for marker in self.markers.values_mut() {
            marker.set_highlighted(false);
        }
    }

    pub fn set_overlay(&mut self, id: &str, on: bool) {
        if on {
            self.overlays.insert(id.to_string());
        } else {
            self.overlays.remove(id);
        }
        if let Some(marker) = self.markers.get_mut(id) {
            marker.set_overlay_active(on);
        }
    }

    /// Hiding drops every marker, and with them every clock subscription.
    /// Showing again remounts from the definitions and restores highlight
    /// and overlay state.
    pub fn toggle_visibility(&mut self, clock: &AnimationClock, style: &StyleConfig) {
        if self.visible {
            self.visible = false;
            self.markers.clear();
        } else {
            self.visible = true;
            self.remount(clock, style);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn highlighted_id(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted.as_deref() == Some(id)
    }

    pub fn is_overlay_active(&self, id: &str) -> bool {
        self.overlays.contains(id)
    }

    pub fn has_hotspot(&self, id: &str) -> bool {
        self.defs.iter().any(|d| d.id == id)
    }

    pub fn hotspot_ids(&self) -> Vec<String> {
        self.defs.iter().map(|d| d.id.clone()).collect()
    }

    // Definition order is mount order, so drawing follows it and hit-testing
    // walks it backwards to find the topmost marker first.

    pub fn draw(&self, draw: &Draw, window: Rect, style: &StyleConfig) {
        if !self.visible {
            return;
        }
        for def in &self.defs {
            if let Some(marker) = self.markers.get(&def.id) {
                marker.draw(draw, window, style);
            }
        }
    }

    pub fn hit_test(&self, window: Rect, point: Point2, style: &StyleConfig) -> Option<String> {
        if !self.visible {
            return None;
        }
        for def in self.defs.iter().rev() {
            if let Some(marker) = self.markers.get(&def.id) {
                if marker.hit_test(window, point, style) {
                    return Some(def.id.clone());
                }
            }
        }
        None
    }
}
