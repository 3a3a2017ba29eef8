//! Application settings and RON persistence.
//!
//! Settings live in a RON file next to the executable. Missing fields
//! fall back to their defaults, so old files keep working as fields
//! are added.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domino3d::placement::{DEFAULT_TOPPLE_POWER, MIN_DOMINO_SPACING};

/// User-tunable settings for the windowed app.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Minimum planar spacing between dominoes.
    #[serde(default = "default_min_spacing")]
    pub min_spacing: f32,

    /// Impulse magnitude applied to the first domino on topple.
    #[serde(default = "default_topple_power")]
    pub topple_power: f32,

    #[serde(default = "default_window_width")]
    pub window_width: f32,

    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_min_spacing() -> f32 {
    MIN_DOMINO_SPACING
}
fn default_topple_power() -> f32 {
    DEFAULT_TOPPLE_POWER
}
fn default_window_width() -> f32 {
    1280.0
}
fn default_window_height() -> f32 {
    720.0
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            min_spacing: default_min_spacing(),
            topple_power: default_topple_power(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppSettings {
    pub fn from_ron(text: &str) -> Result<Self, String> {
        ron::from_str(text).map_err(|e| format!("invalid settings file: {e}"))
    }

    pub fn to_ron(&self) -> Result<String, String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| format!("could not serialize settings: {e}"))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("could not read {}: {e}", path.display()))?;
        Self::from_ron(&text)
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let text = self.to_ron()?;
        fs::write(path, text).map_err(|e| format!("could not write {}: {e}", path.display()))
    }

    /// Load settings from `path`; on a missing or broken file, report
    /// to stderr, fall back to defaults, and try to seed the file so
    /// the next run finds it.
    pub fn load_or_init(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("Warning: {err}; using default settings");
                let defaults = Self::default();
                if let Err(err) = defaults.save(path) {
                    eprintln!("Warning: {err}");
                }
                defaults
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_placement_constants() {
        let settings = AppSettings::default();
        assert_eq!(settings.min_spacing, MIN_DOMINO_SPACING);
        assert_eq!(settings.topple_power, DEFAULT_TOPPLE_POWER);
    }

    #[test]
    fn test_ron_round_trip() {
        let settings = AppSettings {
            min_spacing: 0.05,
            topple_power: 1.2,
            window_width: 1600.0,
            window_height: 900.0,
        };
        let text = settings.to_ron().unwrap();
        assert_eq!(AppSettings::from_ron(&text).unwrap(), settings);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed = AppSettings::from_ron("(topple_power: 2.0)").unwrap();
        assert_eq!(parsed.topple_power, 2.0);
        assert_eq!(parsed.min_spacing, MIN_DOMINO_SPACING);
        assert_eq!(parsed.window_width, 1280.0);
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(AppSettings::from_ron("not ron at all {{{").is_err());
    }
}
