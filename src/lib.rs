//! Slipstream - a first-person momentum movement sandbox in Bevy.
//!
//! The player is a dynamic rigid body pushed around by forces: walking
//! applies a continuous force along the camera-relative input direction,
//! sliding multiplies that force while lowering drag, and jumping zeroes
//! vertical velocity before firing an upward impulse so every jump has
//! the same height.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states and pause flow
//! - **Player**: Input sampling, force-based movement, speed limiting, camera
//! - **World**: The test arena (ground, ramps, obstacles)

pub mod core;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct SlipstreamPlugin;

impl Plugin for SlipstreamPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // World systems
            .add_plugins(world::WorldPlugin);
    }
}
