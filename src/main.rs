//! Slipstream - Entry Point
//!
//! A first-person momentum movement sandbox.
//!
//! Controls:
//! - WASD: Move
//! - Mouse: Look around
//! - C: Slide
//! - Space: Jump (hold)
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Slipstream".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics stepped in the fixed schedule so movement forces are
        // applied at a fixed rate, independent of the render framerate
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())

        // Our game plugin
        .add_plugins(slipstream::SlipstreamPlugin)

        .run();
}
