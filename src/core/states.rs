//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Player movement
//! only runs in the InGame state, so pausing freezes the controller
//! without tearing anything down.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The sandbox has no menu: it starts in `Loading`, transitions to
/// `InGame` immediately, and toggles `Paused` with Escape.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - config and arena setup
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// Game is paused (overlay on gameplay)
    Paused,
}
