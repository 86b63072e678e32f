//! Game settings with persistence
//!
//! Settings are saved to `~/.config/capstone/settings.toml`

use std::fs;
use std::path::PathBuf;

use capstone_core::TimeConfig;
use capstone_game::CharacterConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All game settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub time: TimeConfig,
    pub character: CharacterConfig,
}

impl GameSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("capstone"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse_or_default(&content),
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Parse settings text, keeping defaults for anything unparsable or invalid
    pub fn parse_or_default(content: &str) -> Self {
        let mut settings: Self = match toml::from_str(content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to parse settings: {}, using defaults", e);
                return Self::default();
            }
        };

        if let Err(e) = settings.time.validate() {
            warn!("Invalid time settings: {}, using defaults", e);
            settings.time = TimeConfig::default();
        }

        if let Err(e) = settings.character.validate() {
            warn!("Invalid character settings: {}, using defaults", e);
            settings.character = CharacterConfig::default();
        }

        settings
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("settings.toml");

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstone_core::GameTime;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings = GameSettings::parse_or_default(
            r#"
            [character]
            enable_look = true

            [character.movement]
            max_walk_speed = 650.0

            [character.follow_camera.projection]
            mode = "perspective"
            fov_degrees = 90.0
            "#,
        );

        assert!(settings.character.enable_look);
        assert_eq!(settings.character.movement.max_walk_speed, 650.0);
        assert_eq!(settings.character.movement.jump_z_velocity, 700.0);
        assert!(!settings.character.follow_camera.projection.is_orthographic());
        assert_eq!(settings.character.capsule.radius, 42.0);
        assert!(!settings.character.mapping_context.mappings.is_empty());
    }

    #[test]
    fn test_invalid_character_falls_back() {
        let settings = GameSettings::parse_or_default(
            r#"
            [time]
            time_scale = 0.5

            [character.capsule]
            radius = -3.0
            "#,
        );
        assert_eq!(settings.time.time_scale, 0.5);
        assert_eq!(settings.character.capsule.radius, 42.0);
    }

    #[test]
    fn test_garbage_falls_back() {
        let settings = GameSettings::parse_or_default("this is = = not toml");
        assert_eq!(settings.time.time_scale, 1.0);
    }

    #[test]
    fn test_invalid_time_falls_back() {
        let settings = GameSettings::parse_or_default(
            r#"
            [time]
            max_delta_time = -1.0

            [character]
            enable_look = true
            "#,
        );
        assert_eq!(settings.time.max_delta_time, TimeConfig::default().max_delta_time);
        assert!(settings.character.enable_look);

        let mut time = GameTime::new(settings.time);
        time.update(1.0 / 60.0);
        assert!(time.delta_time > 0.0);
    }
}
