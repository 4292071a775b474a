//! Input sampling - axes, mode switches, and the jump trigger.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::config::{ControllerBindings, ControllerConfig};
use super::movement::probe_ground;

/// Sample input once per visual frame.
///
/// Reads the raw movement axes, refreshes the grounded flag, and walks
/// the else-if chain in which mode keys take priority over jumping: a
/// mode switch and a jump press in the same frame drops the jump.
pub fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<ControllerConfig>,
    bindings: Res<ControllerBindings>,
    rapier_context: Query<&RapierContext>,
    mut player_query: Query<
        (
            Entity,
            &Transform,
            &mut MoveInput,
            &mut MovementMode,
            &mut MovementState,
            &mut JumpGate,
            &mut Velocity,
            &mut ExternalImpulse,
        ),
        With<Player>,
    >,
) {
    let Ok((entity, transform, mut input, mut mode, mut state, mut gate, mut velocity, mut impulse)) =
        player_query.get_single_mut()
    else {
        return;
    };

    // Raw axes, no smoothing
    input.horizontal = key_axis(&keyboard, KeyCode::KeyD, KeyCode::KeyA);
    input.vertical = key_axis(&keyboard, KeyCode::KeyW, KeyCode::KeyS);

    state.is_grounded = if let Ok(context) = rapier_context.get_single() {
        probe_ground(
            context,
            entity,
            transform.translation,
            &config,
            bindings.ground_filter,
        )
    } else {
        false
    };

    gate.tick(time.delta());

    match resolve_mode_switch(
        keyboard.just_pressed(bindings.slide_key),
        keyboard.just_pressed(bindings.walk_key),
    ) {
        Some(new_mode) => {
            *mode = new_mode;
            debug!("Movement mode: {:?}", new_mode);
        }
        None => {
            if let Some((linvel, jump_impulse)) = try_jump(
                &mut gate,
                keyboard.pressed(bindings.jump_key),
                state.is_grounded,
                config.jump_cooldown,
                velocity.linvel,
                *transform.up(),
                config.jump_force,
            ) {
                velocity.linvel = linvel;
                impulse.impulse = jump_impulse;
            }
        }
    }
}

/// Resolve a jump attempt: held key, open gate, ground under foot.
///
/// When the jump fires, the gate closes for `cooldown_secs` and the
/// returned velocity has its vertical component zeroed so every jump
/// reaches the same height regardless of fall speed at trigger time.
/// Returns the new linear velocity and the impulse to apply, or `None`
/// when the jump does not fire (the gate is left untouched).
pub(super) fn try_jump(
    gate: &mut JumpGate,
    jump_held: bool,
    grounded: bool,
    cooldown_secs: f32,
    linvel: Vec3,
    up: Vec3,
    jump_force: f32,
) -> Option<(Vec3, Vec3)> {
    if !(jump_held && gate.is_ready() && grounded) {
        return None;
    }

    gate.fire(cooldown_secs);
    let reset = Vec3::new(linvel.x, 0.0, linvel.z);
    Some((reset, up * jump_force))
}

/// Two keys folded into one raw axis in {-1, 0, 1}.
fn key_axis(keyboard: &ButtonInput<KeyCode>, positive: KeyCode, negative: KeyCode) -> f32 {
    let mut value = 0.0;
    if keyboard.pressed(positive) {
        value += 1.0;
    }
    if keyboard.pressed(negative) {
        value -= 1.0;
    }
    value
}
