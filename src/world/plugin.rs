//! World plugin - arena setup and player placement.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_8;

use crate::core::GameState;
use crate::player::{spawn_player, ControllerConfig};

use super::arena::{spawn_ground_box, spawn_light};

/// World plugin - builds the arena once the sandbox leaves Loading.
///
/// Built on leaving Loading rather than on entering InGame, so pausing
/// and unpausing never touches the arena or the player.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnExit(GameState::Loading), setup_arena);
    }
}

/// Build the arena and drop the player into it.
fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ControllerConfig>,
) {
    info!("Building arena");

    let ground_color = Color::srgb(0.25, 0.28, 0.32);
    let ramp_color = Color::srgb(0.35, 0.30, 0.25);
    let block_color = Color::srgb(0.30, 0.35, 0.28);

    // Ground slab
    spawn_ground_box(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(120.0, 1.0, 120.0),
        Quat::IDENTITY,
        ground_color,
    );

    // Ramps to build speed on
    spawn_ground_box(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(20.0, 2.0, 0.0),
        Vec3::new(16.0, 1.0, 12.0),
        Quat::from_rotation_z(FRAC_PI_8),
        ramp_color,
    );
    spawn_ground_box(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(-15.0, 3.0, -25.0),
        Vec3::new(20.0, 1.0, 14.0),
        Quat::from_rotation_x(-FRAC_PI_8),
        ramp_color,
    );

    // Blocks to jump between
    spawn_ground_box(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(0.0, 1.0, 30.0),
        Vec3::new(6.0, 2.0, 6.0),
        Quat::IDENTITY,
        block_color,
    );
    spawn_ground_box(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(10.0, 2.0, 38.0),
        Vec3::new(6.0, 4.0, 6.0),
        Quat::IDENTITY,
        block_color,
    );

    spawn_light(
        &mut commands,
        Vec3::new(0.0, 25.0, 0.0),
        2_000_000.0,
        true,
        (1.0, 0.95, 0.9),
        150.0,
    );

    spawn_player(&mut commands, Vec3::new(0.0, 2.0, 0.0), &config);
}
