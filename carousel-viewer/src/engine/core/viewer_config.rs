use bevy::prelude::*;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

/// Settings file read from the working directory on native targets.
pub const CONFIG_PATH: &str = "viewer_settings.json";

/// Startup configuration for the viewer. Every field has a default, so a
/// partial settings file only overrides what it names.
#[derive(Debug, Clone, Deserialize, Resource)]
#[serde(default)]
pub struct ViewerConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub vsync: bool,
    /// Fixed seed for the scene randomizer. Leave unset for a fresh scene
    /// on every launch.
    pub seed: Option<u64>,
    pub sky_texture: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_title: "Carousel".to_string(),
            window_width: 1280.0,
            window_height: 720.0,
            vsync: true,
            seed: None,
            sky_texture: "textures/skydome.png".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "could not read settings: {err}"),
            ConfigError::Parse(err) => write!(f, "could not parse settings: {err}"),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl ViewerConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Reads `CONFIG_PATH` if present, falling back to defaults on a
    /// missing or broken file. Runs before the app exists, so messages go
    /// straight to stdout/stderr.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        if !path.exists() {
            println!("No {CONFIG_PATH} found, using default settings");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                println!("Loaded settings from {CONFIG_PATH}");
                config
            }
            Err(err) => {
                eprintln!("{err}, using default settings");
                Self::default()
            }
        }
    }

    // The browser has no working directory to read from.
    #[cfg(target_arch = "wasm32")]
    pub fn load_or_default() -> Self {
        Self::default()
    }
}
