use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Window and export settings read at startup.
///
/// The selected field, coloring and zoom are never stored here; every session
/// starts from the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppPreferences {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// File name suggested by the export dialog.
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
    /// Open the written PNG with the system viewer after exporting.
    #[serde(default = "default_true")]
    pub open_after_export: bool,
}

fn default_window_width() -> f32 {
    800.0
}
fn default_window_height() -> f32 {
    800.0
}
fn default_export_file_name() -> String {
    "drawing.png".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            export_file_name: default_export_file_name(),
            open_after_export: true,
        }
    }
}

impl AppPreferences {
    /// Load preferences from next to the executable, falling back to defaults.
    /// A missing file is created with the defaults so it can be edited.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            debug!("No preferences file at {}", path.display());
            let prefs = Self::default();
            prefs.save_to(&path);
            return prefs;
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<AppPreferences>(&json) {
                Ok(prefs) => {
                    info!("Loaded preferences from {}", path.display());
                    return prefs;
                }
                Err(e) => {
                    error!("Failed to parse preferences: {e}");
                }
            },
            Err(e) => {
                error!("Failed to read preferences file: {e}");
            }
        }
        Self::default()
    }

    /// Persist preferences to `path`.
    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences to {}", path.display());
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }
}

fn config_path() -> PathBuf {
    crate::app_dir::exe_directory().join("preferences.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let prefs = AppPreferences::default();
        assert_eq!(prefs.window_width, 800.0);
        assert_eq!(prefs.window_height, 800.0);
        assert_eq!(prefs.export_file_name, "drawing.png");
        assert!(prefs.open_after_export);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let prefs: AppPreferences = serde_json::from_str(r#"{ "window_width": 640.0 }"#).unwrap();
        assert_eq!(prefs.window_width, 640.0);
        assert_eq!(prefs.window_height, 800.0);
        assert_eq!(prefs.export_file_name, "drawing.png");
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("drawings_test_prefs");
        let path = dir.join("preferences.json");
        let prefs = AppPreferences {
            open_after_export: false,
            export_file_name: "pattern.png".into(),
            ..AppPreferences::default()
        };
        prefs.save_to(&path);
        assert_eq!(AppPreferences::load_from(&path), prefs);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join("drawings_test_prefs_corrupt");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppPreferences::load_from(&path), AppPreferences::default());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
