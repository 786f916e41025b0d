// src/config/config_load.rs
//
// loading to config.toml

use super::config_types::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub osc: OscConfig,
    pub paths: PathConfig,
    pub style: StyleConfig,
    pub animation: AnimationConfig,
    pub attract: AttractConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }

    // Same two-step lookup as the config file itself: a copy next to the
    // executable wins, otherwise the path is taken relative to the working
    // directory.
    pub fn resolve_scene_path(&self) -> PathBuf {
        if Path::new(&self.paths.scene_file).is_absolute() {
            return PathBuf::from(&self.paths.scene_file);
        }

        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        {
            let candidate = exe_dir.join(&self.paths.scene_file);
            if candidate.exists() {
                return candidate;
            }
        }

        PathBuf::from(&self.paths.scene_file)
    }
}
