//! Player plugin - movement, camera, and player-related systems.

use bevy::prelude::*;

use crate::core::GameState;

use super::config::{load_controller_config, ControllerBindings};
use super::governor::govern_speed;
use super::input::sample_input;
use super::movement::{
    apply_movement_force, grab_cursor, halt_movement, mouse_look, release_cursor,
};

/// Player plugin - handles player input, movement forces, and camera.
///
/// Visual-frame systems (input sampling, drag, speed cap) run in Update;
/// the movement force is applied in FixedUpdate alongside the physics
/// step. Leaving InGame clears the force so nothing keeps pushing the
/// body while the controller systems are gated off.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<ControllerBindings>()
            .add_systems(Startup, load_controller_config)
            .add_systems(OnEnter(GameState::InGame), grab_cursor)
            .add_systems(OnExit(GameState::InGame), (release_cursor, halt_movement))
            .add_systems(
                Update,
                (mouse_look, sample_input, govern_speed)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                FixedUpdate,
                apply_movement_force.run_if(in_state(GameState::InGame)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::input::InputPlugin;
    use bevy::state::app::StatesPlugin;
    use bevy_rapier3d::prelude::{Damping, ExternalForce, ExternalImpulse, Velocity};

    use crate::core::CorePlugin;
    use crate::player::{JumpGate, MoveInput, MovementMode, MovementState, Player};

    #[test]
    fn pausing_clears_the_movement_force() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin, InputPlugin));
        app.add_plugins((CorePlugin, PlayerPlugin));

        let player = app
            .world_mut()
            .spawn((
                Player,
                MoveInput::default(),
                MovementMode::Walking,
                MovementState::default(),
                JumpGate::default(),
                Transform::default(),
                Velocity::zero(),
                Damping {
                    linear_damping: 4.0,
                    angular_damping: 0.0,
                },
                ExternalForce {
                    force: Vec3::new(0.0, 0.0, -25.0),
                    torque: Vec3::ZERO,
                },
                ExternalImpulse::default(),
            ))
            .id();

        app.update(); // enter Loading, queue InGame
        app.update(); // apply InGame

        // No orientation rig spawned, so nothing recomputes the force;
        // it stays as set until the pause clears it.
        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::Paused);
        app.update();

        let force = app.world().get::<ExternalForce>(player).unwrap();
        assert_eq!(force.force, Vec3::ZERO);
        let input = app.world().get::<MoveInput>(player).unwrap();
        assert_eq!(input.horizontal, 0.0);
        assert_eq!(input.vertical, 0.0);
    }
}
