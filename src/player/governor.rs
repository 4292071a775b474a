//! Drag assignment and the horizontal speed cap.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::config::ControllerConfig;

/// Keep the rigid body inside the speed envelope, every visual frame.
///
/// Drag follows the movement mode; the horizontal speed cap is always
/// base speed, even while sliding, so the slide multiplier only buys
/// acceleration up to the same ceiling.
pub fn govern_speed(
    config: Res<ControllerConfig>,
    mut player_query: Query<(&MovementMode, &mut Velocity, &mut Damping), With<Player>>,
) {
    let Ok((mode, mut velocity, mut damping)) = player_query.get_single_mut() else {
        return;
    };

    damping.linear_damping = if mode.is_sliding() {
        config.slide_drag
    } else {
        config.ground_drag
    };

    if let Some(limited) = limit_horizontal_speed(velocity.linvel, config.movement_speed) {
        velocity.linvel = limited;
    }
}

/// Clamp the horizontal (x, z) velocity to `max_speed`.
///
/// The vertical component is left untouched. Returns `None` when the
/// velocity is already within the cap.
pub fn limit_horizontal_speed(linvel: Vec3, max_speed: f32) -> Option<Vec3> {
    let flat = Vec3::new(linvel.x, 0.0, linvel.z);
    if flat.length() <= max_speed {
        return None;
    }

    let limited = flat.normalize() * max_speed;
    Some(Vec3::new(limited.x, linvel.y, limited.z))
}
