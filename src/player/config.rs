//! Controller tuning loaded from an external RON file.
//!
//! Allows tweaking movement feel without recompilation. Missing or
//! malformed files fall back to defaults with a logged warning.

use bevy::prelude::*;
use bevy_rapier3d::prelude::Group;
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/// Collision group for the player's capsule.
pub const PLAYER_GROUP: Group = Group::GROUP_1;

/// Collision group for surfaces that count as ground for the probe.
pub const GROUND_GROUP: Group = Group::GROUP_2;

const CONFIG_PATH: &str = "assets/data/player/controller.ron";

/// Errors that can occur when loading the controller tuning file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}

/// Movement tuning loaded from assets/data/player/controller.ron.
///
/// Immutable at runtime: set once at startup, read every tick.
#[derive(Resource, Clone, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Continuous movement force magnitude, and the horizontal speed cap
    pub movement_speed: f32,
    /// Upward impulse magnitude on jump
    pub jump_force: f32,
    /// Seconds before the jump gate reopens
    pub jump_cooldown: f32,
    /// Movement force scale while sliding
    pub slide_multiplier: f32,
    /// Linear damping while sliding
    pub slide_drag: f32,
    /// Linear damping while walking
    pub ground_drag: f32,
    /// Capsule height used to size the downward ground probe
    pub player_height: f32,
    /// Mouse look sensitivity multiplier
    pub mouse_sensitivity: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            movement_speed: 25.0,
            jump_force: 12.0,
            jump_cooldown: 0.4,
            slide_multiplier: 2.0,
            slide_drag: 1.0,
            ground_drag: 4.0,
            player_height: 2.0,
            mouse_sensitivity: 1.5,
        }
    }
}

impl ControllerConfig {
    /// Load controller tuning from the RON file, falling back to defaults.
    pub fn load() -> Self {
        match Self::read_from(CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded controller config from {}", CONFIG_PATH);
                config
            }
            Err(e) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    fn read_from(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        ron::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })
    }
}

/// System to load controller tuning at startup.
pub fn load_controller_config(mut commands: Commands) {
    commands.insert_resource(ControllerConfig::load());
}

/// Key bindings and the ground-probe collision filter.
///
/// Kept out of the tuning file so bindings stay plain `KeyCode`s; scene
/// setup can overwrite the resource before the first frame.
#[derive(Resource, Clone)]
pub struct ControllerBindings {
    pub walk_key: KeyCode,
    pub slide_key: KeyCode,
    pub jump_key: KeyCode,
    /// Which collision groups the ground probe may hit
    pub ground_filter: Group,
}

impl Default for ControllerBindings {
    fn default() -> Self {
        Self {
            walk_key: KeyCode::KeyW,
            slide_key: KeyCode::KeyC,
            jump_key: KeyCode::Space,
            ground_filter: GROUND_GROUP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_tuning_file() {
        let source = r#"(
            movement_speed: 30.0,
            jump_force: 15.0,
            jump_cooldown: 0.25,
            slide_multiplier: 3.0,
            slide_drag: 0.5,
            ground_drag: 5.0,
            player_height: 1.8,
            mouse_sensitivity: 2.0,
        )"#;

        let config: ControllerConfig = ron::from_str(source).unwrap();
        assert_eq!(config.movement_speed, 30.0);
        assert_eq!(config.jump_cooldown, 0.25);
        assert_eq!(config.slide_multiplier, 3.0);
        assert_eq!(config.player_height, 1.8);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ControllerConfig = ron::from_str("(movement_speed: 10.0)").unwrap();
        assert_eq!(config.movement_speed, 10.0);
        assert_eq!(config.jump_cooldown, ControllerConfig::default().jump_cooldown);
        assert_eq!(config.ground_drag, ControllerConfig::default().ground_drag);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let result = ron::from_str::<ControllerConfig>("(movement_speed: )");
        assert!(result.is_err());
    }
}
