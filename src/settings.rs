//! Gameplay settings
//!
//! Persisted in LocalStorage on web. Grid size is fixed and lives in `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tick interval at the start of a run (ms)
    pub initial_interval_ms: u32,
    /// Accelerations available per run
    pub speed_boost_budget: u32,

    // === Food ===
    pub regular_food_score: u64,
    pub premium_food_score: u64,
    /// Premium food appears only when the score is a multiple of this
    pub premium_score_multiple: u64,
    /// Premium food lifetime in ticks
    pub premium_max_age: u32,
    /// Remove premium food once it exceeds its lifetime
    pub premium_expires: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_interval_ms: INITIAL_INTERVAL_MS,
            speed_boost_budget: SPEED_BOOST_BUDGET,
            regular_food_score: REGULAR_FOOD_SCORE,
            premium_food_score: PREMIUM_FOOD_SCORE,
            premium_score_multiple: PREMIUM_SCORE_MULTIPLE,
            premium_max_age: PREMIUM_MAX_AGE,
            premium_expires: true,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "canvas_snake_settings";

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Shortest tick interval reachable with this budget
    pub fn min_interval_ms(&self) -> u32 {
        let total: u32 = (1..=self.speed_boost_budget).sum();
        self.initial_interval_ms.saturating_sub(total)
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
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.initial_interval_ms, 500);
        assert_eq!(s.speed_boost_budget, 25);
        assert_eq!(s.premium_score_multiple, 50);
        assert_eq!(s.premium_max_age, 16);
        assert!(s.premium_expires);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"initial_interval_ms": 300}"#).unwrap();
        assert_eq!(s.initial_interval_ms, 300);
        assert_eq!(s.regular_food_score, 10);
        assert_eq!(s.premium_food_score, 20);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{"premium_max_age": "soon"}"#).is_err());
    }

    #[test]
    fn test_min_interval() {
        assert_eq!(Settings::default().min_interval_ms(), 175);
        let fast = Settings {
            initial_interval_ms: 100,
            ..Settings::default()
        };
        assert_eq!(fast.min_interval_ms(), 0);
    }
}
