//! Core plugin that sets up game states and the pause flow.

use bevy::prelude::*;
use bevy_rapier3d::prelude::RapierConfiguration;

use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // No assets to wait on - go straight into the sandbox
            .add_systems(OnEnter(GameState::Loading), transition_to_in_game)

            // Pause/unpause with Escape key
            .add_systems(
                Update,
                handle_pause_input
                    .run_if(in_state(GameState::InGame).or(in_state(GameState::Paused))),
            )

            // Physics keeps stepping in the fixed schedule regardless of
            // state, so pausing must halt the pipeline itself
            .add_systems(OnEnter(GameState::Paused), freeze_physics)
            .add_systems(OnExit(GameState::Paused), resume_physics);
    }
}

/// Immediately transition from Loading to InGame.
fn transition_to_in_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            GameState::InGame => next_state.set(GameState::Paused),
            GameState::Paused => next_state.set(GameState::InGame),
            _ => {}
        }
    }
}

/// Stop the physics pipeline while paused.
fn freeze_physics(mut rapier_config: Query<&mut RapierConfiguration>) {
    if let Ok(mut config) = rapier_config.get_single_mut() {
        config.physics_pipeline_active = false;
    }
}

/// Resume the physics pipeline when leaving Paused.
fn resume_physics(mut rapier_config: Query<&mut RapierConfiguration>) {
    if let Ok(mut config) = rapier_config.get_single_mut() {
        config.physics_pipeline_active = true;
    }
}
