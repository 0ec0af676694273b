//! Game configuration
//!
//! Tuning values live in `assets/config/game.json`. Every field has a default,
//! so the file may be partial or missing entirely.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.json";

/// Upper bound for `swarm.max_decoys`
pub const MAX_DECOYS: u32 = 100_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub round: RoundConfig,
    pub swarm: SwarmConfig,
    pub assets: AssetConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width in pixels (all game coordinates use this space)
    pub width: u32,
    /// Logical height in pixels
    pub height: u32,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Find Baldo".to_string(),
            width: 960,
            height: 540,
            target_fps: 60,
        }
    }
}

/// Timer rules for a single round on the play field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub duration_secs: f32,
    pub small_bonus_secs: f32,
    pub large_bonus_secs: f32,
    pub decoy_penalty_secs: f32,
    /// Remaining-time band that triggers the one-shot countdown cue
    pub cue_band_low: f32,
    pub cue_band_high: f32,
    /// Sprite scale for every entity on the field
    pub entity_scale: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        RoundConfig {
            duration_secs: 30.0,
            small_bonus_secs: 10.0,
            large_bonus_secs: 15.0,
            decoy_penalty_secs: 5.0,
            cue_band_low: 67.0,
            cue_band_high: 69.0,
            entity_scale: 2,
        }
    }
}

/// Placement rules for the randomized "swarm" layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    pub min_decoys: u32,
    pub max_decoys: u32,
    pub small_bonus_count: u32,
    /// Inclusive placement bounds for an entity's top-left corner
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        SwarmConfig {
            min_decoys: 120,
            max_decoys: 1800,
            small_bonus_count: 5,
            min_x: 0,
            max_x: 950,
            min_y: 3,
            max_y: 539,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub sprite_dir: String,
    pub sound_dir: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            sprite_dir: "assets/sprites".to_string(),
            sound_dir: "assets/sounds".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GameError::AssetLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Loads the config file, falling back to defaults when it does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("No config at {}, using defaults", path.display());
            return Ok(GameConfig::default());
        }
        Self::load_from_file(path)
    }

    fn validate(&self) -> Result<(), GameError> {
        if self.swarm.min_decoys > self.swarm.max_decoys {
            return Err(GameError::Config(format!(
                "swarm.min_decoys ({}) exceeds swarm.max_decoys ({})",
                self.swarm.min_decoys, self.swarm.max_decoys
            )));
        }
        if self.swarm.max_decoys > MAX_DECOYS {
            return Err(GameError::Config(format!(
                "swarm.max_decoys ({}) exceeds {}",
                self.swarm.max_decoys, MAX_DECOYS
            )));
        }
        if self.swarm.min_x > self.swarm.max_x || self.swarm.min_y > self.swarm.max_y {
            return Err(GameError::Config("swarm placement bounds are inverted".to_string()));
        }
        if self.round.cue_band_low > self.round.cue_band_high {
            return Err(GameError::Config("round cue band is inverted".to_string()));
        }
        if self.window.target_fps == 0 {
            return Err(GameError::Config("window.target_fps must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.window.width, 960);
        assert_eq!(config.window.height, 540);
        assert_eq!(config.round.duration_secs, 30.0);
        assert_eq!(config.swarm.min_decoys, 120);
        assert_eq!(config.swarm.max_decoys, 1800);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "round": { "duration_secs": 45.0 } }"#).unwrap();
        assert_eq!(config.round.duration_secs, 45.0);
        assert_eq!(config.round.small_bonus_secs, 10.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_inverted_decoy_range_rejected() {
        let result = GameConfig::from_json(r#"{ "swarm": { "min_decoys": 10, "max_decoys": 5 } }"#);
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_huge_decoy_count_rejected() {
        let result = GameConfig::from_json(r#"{ "swarm": { "max_decoys": 4294967295 } }"#);
        assert!(matches!(result, Err(GameError::Config(_))));

        let at_limit = GameConfig::from_json(r#"{ "swarm": { "max_decoys": 100000 } }"#).unwrap();
        assert_eq!(at_limit.swarm.max_decoys, MAX_DECOYS);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        assert!(matches!(GameConfig::from_json("{ nope"), Err(GameError::Config(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GameConfig::load_or_default("does/not/exist.json").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = GameConfig::from_json(include_str!("../assets/config/game.json")).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
