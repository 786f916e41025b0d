// src/config/config_types.rs
//
// Config types for the app

use nannou::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct OscConfig {
    pub rx_port: u16,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub scene_file: String,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub default_stroke_weight: f32,
    pub marker_radius: f32,
    pub label_font_size: u32,
    pub highlight_from: [u8; 3],
    pub highlight_to: [u8; 3],
}

impl StyleConfig {
    pub fn highlight_from_color(&self) -> Rgb<u8> {
        let [r, g, b] = self.highlight_from;
        rgb8(r, g, b)
    }

    pub fn highlight_to_color(&self) -> Rgb<u8> {
        let [r, g, b] = self.highlight_to;
        rgb8(r, g, b)
    }
}

#[derive(Debug, Deserialize)]
pub struct AttractConfig {
    pub enabled: bool,
    pub dwell: f32, // seconds a highlight stays before attract mode moves on
}

/************************* Animation Configs ********************/

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    pub pulse: WaveConfig,
    pub color_cycle: ColorCycleConfig,
    pub area_ring: WaveConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WaveConfig {
    pub period: f32,    // seconds per full oscillation
    pub amplitude: f32, // swing around the baseline
    pub baseline: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColorCycleConfig {
    pub period: f32,
}

// The design constants. config.toml normally carries these; the defaults
// keep the clock usable without one.
impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            pulse: WaveConfig {
                period: 1.6,
                amplitude: 0.06,
                baseline: 1.0,
            },
            color_cycle: ColorCycleConfig { period: 2.4 },
            area_ring: WaveConfig {
                period: 2.0,
                amplitude: 0.15,
                baseline: 1.2,
            },
        }
    }
}
