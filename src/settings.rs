//! Game tuning
//!
//! Defaults reproduce the stock game. Overrides come from JSON: a file on
//! native, LocalStorage in the browser.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a settings document is rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Timer interval (ms)
    pub step_ms: u32,

    // === Physics ===
    /// Disc mass per unit area
    pub disc_density: f32,
    /// Milli-g to force conversion
    pub accel_ratio: f32,
    /// Disc radius
    pub initial_radius: f32,

    // === Scoring ===
    /// Per-axis change counted as a shake (milli-g)
    pub shake_threshold: i32,

    // === Screen ===
    pub frame_width: u32,
    pub frame_height: u32,

    // === Feedback ===
    /// Vibrate on game over
    pub vibrate: bool,
    /// Keep the backlight on while the app is open
    pub backlight: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            step_ms: ACCEL_STEP_MS,

            disc_density: DISC_DENSITY,
            accel_ratio: ACCEL_RATIO,
            initial_radius: INITIAL_RADIUS,

            shake_threshold: SHAKE_THRESHOLD,

            frame_width: SCREEN_WIDTH,
            frame_height: SCREEN_HEIGHT,

            vibrate: true,
            backlight: true,
        }
    }
}

fn positive(value: f32, field: &'static str) -> Result<(), SettingsError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SettingsError::Invalid {
            field,
            reason: "must be finite and > 0",
        });
    }
    Ok(())
}

impl Settings {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.step_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "step_ms",
                reason: "must be > 0",
            });
        }
        positive(self.disc_density, "disc_density")?;
        positive(self.accel_ratio, "accel_ratio")?;
        positive(self.initial_radius, "initial_radius")?;
        if self.shake_threshold <= 0 {
            return Err(SettingsError::Invalid {
                field: "shake_threshold",
                reason: "must be > 0",
            });
        }
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(SettingsError::Invalid {
                field: "frame",
                reason: "width and height must be > 0",
            });
        }
        if self.frame_width > Self::MAX_FRAME_SIDE || self.frame_height > Self::MAX_FRAME_SIDE {
            return Err(SettingsError::Invalid {
                field: "frame",
                reason: "width and height must be <= 4096",
            });
        }
        // The first disc must fit inside the frame
        let min_side = self.frame_width.min(self.frame_height) as f32;
        if self.initial_radius * 2.0 >= min_side {
            return Err(SettingsError::Invalid {
                field: "initial_radius",
                reason: "disc does not fit in the frame",
            });
        }
        Ok(())
    }

    /// Environment variable naming a settings file (native only)
    pub const PATH_ENV: &'static str = "TIGHT_ROPE_SETTINGS";

    /// Largest accepted frame side (pixels)
    pub const MAX_FRAME_SIDE: u32 = 4096;

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "tight_rope_settings";

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from the file named by `TIGHT_ROPE_SETTINGS`, falling
    /// back to defaults when unset or invalid
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::PATH_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {path}");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings at {path}: {e}");
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.step_ms, 50);
        assert_eq!(settings.frame_width, 144);
        assert_eq!(settings.frame_height, 168);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "accel_ratio": 0.1, "vibrate": false }"#).unwrap();
        assert_eq!(settings.accel_ratio, 0.1);
        assert!(!settings.vibrate);
        assert_eq!(settings.disc_density, DISC_DENSITY);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            shake_threshold: 250,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_json(r#"{ "disc_density": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "disc_density", .. }));

        let err = Settings::from_json(r#"{ "step_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "step_ms", .. }));

        let err = Settings::from_json(r#"{ "initial_radius": 90.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "initial_radius", .. }));
    }

    #[test]
    fn test_rejects_oversized_frame() {
        let err = Settings::from_json(r#"{ "frame_width": 100000, "frame_height": 100000 }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "frame", .. }));

        let err = Settings::from_json(r#"{ "frame_height": 4097 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "frame", .. }));

        let largest = Settings::from_json(r#"{ "frame_width": 4096, "frame_height": 4096 }"#);
        assert!(largest.is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            Settings::load_file("/nonexistent/tight-rope.json"),
            Err(SettingsError::Io(_))
        ));
    }
}
