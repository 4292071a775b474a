//! Player module - input sampling, force-based movement, and camera control.

mod components;
mod config;
mod governor;
mod input;
mod movement;
mod plugin;

pub use components::*;
pub use config::{ControllerBindings, ControllerConfig, GROUND_GROUP, PLAYER_GROUP};
pub use movement::{spawn_player, PlayerCamera};
pub use plugin::PlayerPlugin;
