use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SimError};
use crate::physics::PhotocellParams;

/// Startup configuration. Read once, never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Frames per second the driver aims for
    pub fps: u32,
    /// Simulated seconds per real second
    pub timescale: f64,
    pub window_width: u32,
    pub window_height: u32,
    /// Directory holding optional sprite images
    pub asset_dir: String,
    /// Initial photocell parameters
    pub photocell: PhotocellParams,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            fps: 60,
            timescale: 2e-5,
            window_width: 1000,
            window_height: 800,
            asset_dir: "img".to_string(),
            photocell: PhotocellParams::default(),
        }
    }
}

impl AppSettings {
    const SETTINGS_FILE: &'static str = "settings.toml";

    /// Loads settings from the settings file, or returns default settings if the file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(Self::SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("no {}, using default settings", path.display());
            return Ok(Self::default());
        }
        let config_error = |source: Box<dyn std::error::Error + Send + Sync>| SimError::Config {
            path: path.display().to_string(),
            source,
        };
        let contents = fs::read_to_string(path).map_err(|e| config_error(Box::new(e)))?;
        toml::from_str(&contents).map_err(|e| config_error(Box::new(e)))
    }

    /// Simulated seconds advanced per frame.
    pub fn time_step(&self) -> f64 {
        self.timescale / f64::from(self.fps.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings: AppSettings = toml::from_str(
            r#"
            fps = 30

            [photocell]
            cathode = "Cs"
            "#,
        )
        .unwrap();
        assert_eq!(settings.fps, 30);
        assert_eq!(settings.timescale, 2e-5);
        assert_eq!(settings.photocell.cathode, "Cs");
        assert_eq!(settings.photocell.wave_length, 515.0);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let settings = AppSettings::load_from(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(settings.fps, 60);
        assert!((settings.time_step() - 2e-5 / 60.0).abs() < 1e-20);
    }
}
