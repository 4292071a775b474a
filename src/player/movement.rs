//! Force-based player movement and camera control.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::config::{ControllerConfig, PLAYER_GROUP};

/// Extra probe length below the capsule so small ground gaps still count.
const GROUND_SKIN: f32 = 0.2;

/// Marker component for the player's camera.
#[derive(Component)]
pub struct PlayerCamera {
    /// Current pitch angle in radians (looking up/down)
    pub pitch: f32,
}

impl Default for PlayerCamera {
    fn default() -> Self {
        Self { pitch: 0.0 }
    }
}

/// Grab and hide cursor when entering gameplay.
pub fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release cursor when leaving gameplay.
pub fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// Handle mouse movement for looking around.
///
/// Yaw rotates the orientation transform under the player, pitch rotates
/// the camera. The rigid body itself never rotates, so movement direction
/// comes entirely from the orientation transform.
pub fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    config: Res<ControllerConfig>,
    mut orientation_query: Query<&mut Transform, With<Orientation>>,
    mut camera_query: Query<(&mut Transform, &mut PlayerCamera), (With<Camera3d>, Without<Orientation>)>,
) {
    // Accumulate mouse movement
    let mut delta = Vec2::ZERO;
    for event in mouse_motion.read() {
        delta += event.delta;
    }

    if delta == Vec2::ZERO {
        return;
    }

    let Ok(mut orientation_transform) = orientation_query.get_single_mut() else {
        return;
    };
    let Ok((mut camera_transform, mut camera)) = camera_query.get_single_mut() else {
        return;
    };

    let sensitivity = config.mouse_sensitivity * 0.001;

    // Rotate orientation horizontally (yaw)
    orientation_transform.rotate_y(-delta.x * sensitivity);

    // Rotate camera vertically (pitch), clamped to prevent flipping
    camera.pitch -= delta.y * sensitivity;
    camera.pitch = camera.pitch.clamp(-1.4, 1.4); // About 80 degrees

    camera_transform.rotation = Quat::from_rotation_x(camera.pitch);
}

/// Apply the continuous movement force, every physics step.
///
/// The force points along the orientation-relative input direction and is
/// scaled by base speed, times the slide multiplier while sliding. The
/// speed cap never scales with the multiplier, so sliding trades top
/// speed for acceleration and lower drag.
pub fn apply_movement_force(
    config: Res<ControllerConfig>,
    orientation_query: Query<&Transform, With<Orientation>>,
    mut player_query: Query<(&MoveInput, &MovementMode, &mut ExternalForce), With<Player>>,
) {
    let Ok(orientation) = orientation_query.get_single() else {
        return;
    };
    let Ok((input, mode, mut force)) = player_query.get_single_mut() else {
        return;
    };

    let direction = movement_direction(
        *orientation.forward(),
        *orientation.right(),
        input.horizontal,
        input.vertical,
    );

    force.force = direction * config.movement_speed * mode.force_multiplier(config.slide_multiplier);
}

/// Drop the movement force and sampled axes when gameplay stops.
///
/// The force component is persistent, so without this a pause taken
/// while a movement key is held would leave the last force applied
/// every physics step.
pub fn halt_movement(mut player_query: Query<(&mut MoveInput, &mut ExternalForce), With<Player>>) {
    let Ok((mut input, mut force)) = player_query.get_single_mut() else {
        return;
    };

    *input = MoveInput::default();
    force.force = Vec3::ZERO;
}

/// Project 2D input onto the orientation's horizontal basis.
///
/// Returns a unit vector, or zero when both axes are zero.
pub fn movement_direction(forward: Vec3, right: Vec3, horizontal: f32, vertical: f32) -> Vec3 {
    (forward * vertical + right * horizontal).normalize_or_zero()
}

/// Downward ground probe from the player origin.
///
/// Ray length is half the capsule height plus a small skin margin,
/// filtered to the configured ground group and ignoring the player's
/// own collider.
pub fn probe_ground(
    context: &RapierContext,
    player: Entity,
    origin: Vec3,
    config: &ControllerConfig,
    ground_filter: Group,
) -> bool {
    let max_dist = config.player_height * 0.5 + GROUND_SKIN;

    context
        .cast_ray(
            origin,
            Vec3::NEG_Y,
            max_dist,
            true,
            QueryFilter::default()
                .exclude_collider(player)
                .groups(CollisionGroups::new(Group::ALL, ground_filter)),
        )
        .is_some()
}

/// Spawn the player rigid body with its orientation rig and camera.
pub fn spawn_player(commands: &mut Commands, position: Vec3, config: &ControllerConfig) -> Entity {
    let half_height = config.player_height * 0.5;

    // Spawn player body
    let player = commands
        .spawn((
            Player,
            MoveInput::default(),
            MovementMode::default(),
            MovementState::default(),
            JumpGate::default(),
            // Transform
            Transform::from_translation(position),
            GlobalTransform::default(),
            Visibility::default(),
            // Rapier physics components (nested tuple: Bundle is only
            // implemented for tuples of up to 15 elements)
            (
                RigidBody::Dynamic,
                Collider::capsule_y(half_height - 0.5, 0.5),
                LockedAxes::ROTATION_LOCKED,
                Velocity::zero(),
                Damping {
                    linear_damping: config.ground_drag,
                    angular_damping: 0.0,
                },
                ExternalForce::default(),
                ExternalImpulse::default(),
                CollisionGroups::new(PLAYER_GROUP, Group::ALL),
            ),
        ))
        .id();

    // Orientation rig carries yaw; camera underneath carries pitch
    commands.entity(player).with_children(|parent| {
        parent
            .spawn((
                Orientation,
                Transform::default(),
                Visibility::default(),
            ))
            .with_children(|rig| {
                rig.spawn((
                    Camera3d::default(),
                    PlayerCamera::default(),
                    // Eye level, just below the top of the capsule
                    Transform::from_xyz(0.0, half_height - 0.3, 0.0),
                ));
            });
    });

    player
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn basis(yaw: f32) -> (Vec3, Vec3) {
        let transform = Transform::from_rotation(Quat::from_rotation_y(yaw));
        (*transform.forward(), *transform.right())
    }

    #[test]
    fn direction_is_unit_length_for_any_nonzero_input() {
        let (forward, right) = basis(0.0);
        for (h, v) in [(1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)] {
            let dir = movement_direction(forward, right, h, v);
            assert!((dir.length() - 1.0).abs() < 1e-5, "h={h} v={v}");
        }
    }

    #[test]
    fn zero_input_yields_zero_direction() {
        let (forward, right) = basis(0.7);
        assert_eq!(movement_direction(forward, right, 0.0, 0.0), Vec3::ZERO);
    }

    #[test]
    fn forward_input_follows_orientation() {
        // Unrotated Bevy forward is -Z.
        let (forward, right) = basis(0.0);
        let dir = movement_direction(forward, right, 0.0, 1.0);
        assert!(dir.abs_diff_eq(Vec3::NEG_Z, 1e-5));

        // Yawed a quarter turn, forward becomes -X.
        let (forward, right) = basis(FRAC_PI_2);
        let dir = movement_direction(forward, right, 0.0, 1.0);
        assert!(dir.abs_diff_eq(Vec3::NEG_X, 1e-5));
    }

    #[test]
    fn walking_force_magnitude_is_base_speed() {
        let config = ControllerConfig::default();
        let (forward, right) = basis(0.3);
        let dir = movement_direction(forward, right, 0.0, 1.0);

        let force = dir * config.movement_speed * MovementMode::Walking.force_multiplier(config.slide_multiplier);
        assert!((force.length() - 25.0).abs() < 1e-4);
    }

    #[test]
    fn sliding_force_magnitude_is_boosted() {
        let config = ControllerConfig::default();
        let (forward, right) = basis(0.3);
        let dir = movement_direction(forward, right, 0.0, 1.0);

        let force = dir * config.movement_speed * MovementMode::Sliding.force_multiplier(config.slide_multiplier);
        assert!((force.length() - 50.0).abs() < 1e-4);
    }

    #[test]
    fn diagonal_input_is_not_faster() {
        let (forward, right) = basis(0.0);
        let straight = movement_direction(forward, right, 0.0, 1.0);
        let diagonal = movement_direction(forward, right, 1.0, 1.0);
        assert!((straight.length() - diagonal.length()).abs() < 1e-5);
    }
}
