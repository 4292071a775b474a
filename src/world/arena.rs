//! Arena construction - static geometry with ground-group colliders.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::player::GROUND_GROUP;

/// Marker for static arena geometry.
#[derive(Component)]
pub struct ArenaGeometry;

/// Spawn a static cuboid that counts as ground for the player's probe.
pub fn spawn_ground_box(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
    size: Vec3,
    rotation: Quat,
    color: Color,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_translation(position).with_rotation(rotation),
        Collider::cuboid(size.x / 2.0, size.y / 2.0, size.z / 2.0),
        RigidBody::Fixed,
        CollisionGroups::new(GROUND_GROUP, Group::ALL),
        ArenaGeometry,
    ));
}

/// Spawn a point light over the arena.
pub fn spawn_light(
    commands: &mut Commands,
    position: Vec3,
    intensity: f32,
    shadows: bool,
    color: (f32, f32, f32),
    range: f32,
) {
    commands.spawn((
        PointLight {
            color: Color::srgb(color.0, color.1, color.2),
            intensity,
            range,
            shadows_enabled: shadows,
            ..default()
        },
        Transform::from_translation(position),
        ArenaGeometry,
    ));
}
