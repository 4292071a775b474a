//! Player-related components.

use std::time::Duration;

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Marker for the yaw-only orientation transform under the player.
///
/// Mouse look rotates this transform around Y; its forward/right vectors
/// project 2D movement input into world space. The rigid body itself
/// never rotates (rotation is locked at spawn).
#[derive(Component)]
pub struct Orientation;

/// How movement forces are currently applied.
///
/// Sliding multiplies the movement force and lowers drag; the horizontal
/// speed cap stays the same in both modes.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementMode {
    #[default]
    Walking,
    Sliding,
}

impl MovementMode {
    /// Force scale for the current mode.
    pub fn force_multiplier(self, slide_multiplier: f32) -> f32 {
        match self {
            Self::Walking => 1.0,
            Self::Sliding => slide_multiplier,
        }
    }

    pub fn is_sliding(self) -> bool {
        self == Self::Sliding
    }
}

/// Resolve a mode switch from this frame's key-press edges.
///
/// Single else-if chain: the slide key wins when both mode keys are
/// pressed in the same frame. Returns `None` when neither key was
/// pressed, which is the only case where the jump check may run.
pub fn resolve_mode_switch(slide_pressed: bool, walk_pressed: bool) -> Option<MovementMode> {
    if slide_pressed {
        Some(MovementMode::Sliding)
    } else if walk_pressed {
        Some(MovementMode::Walking)
    } else {
        None
    }
}

/// Raw movement axes sampled once per visual frame.
///
/// Each axis is in [-1, 1] with no smoothing; the fixed-step force
/// integration reads whatever was sampled most recently.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MoveInput {
    pub horizontal: f32,
    pub vertical: f32,
}

/// Tracks whether the ground probe hit anything this frame.
#[derive(Component)]
pub struct MovementState {
    pub is_grounded: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self { is_grounded: false }
    }
}

/// Gates the jump impulse behind a cooldown.
///
/// The gate closes when a jump fires and reopens once the cooldown
/// timer elapses. The timer is ticked explicitly every visual frame
/// rather than relying on a scheduled callback, so there is no hidden
/// re-entrancy: a held jump key simply finds the gate closed.
#[derive(Component)]
pub struct JumpGate {
    ready: bool,
    cooldown: Timer,
}

impl Default for JumpGate {
    fn default() -> Self {
        Self {
            ready: true,
            cooldown: Timer::from_seconds(0.0, TimerMode::Once),
        }
    }
}

impl JumpGate {
    /// Whether a jump may fire this frame (grounding is checked separately).
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Close the gate and start the reopen cooldown.
    pub fn fire(&mut self, cooldown_secs: f32) {
        self.ready = false;
        self.cooldown = Timer::from_seconds(cooldown_secs, TimerMode::Once);
    }

    /// Advance the cooldown; reopens the gate once it elapses.
    pub fn tick(&mut self, delta: Duration) {
        if !self.ready {
            self.cooldown.tick(delta);
            if self.cooldown.finished() {
                self.ready = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_key_switches_to_sliding() {
        assert_eq!(
            resolve_mode_switch(true, false),
            Some(MovementMode::Sliding)
        );
    }

    #[test]
    fn walk_key_switches_to_walking() {
        assert_eq!(
            resolve_mode_switch(false, true),
            Some(MovementMode::Walking)
        );
    }

    #[test]
    fn both_mode_keys_same_frame_resolve_to_sliding() {
        // The slide check is the first branch of the else-if chain.
        assert_eq!(resolve_mode_switch(true, true), Some(MovementMode::Sliding));
    }

    #[test]
    fn no_mode_keys_leave_mode_unchanged() {
        assert_eq!(resolve_mode_switch(false, false), None);
    }

    #[test]
    fn force_multiplier_only_boosts_while_sliding() {
        assert_eq!(MovementMode::Walking.force_multiplier(2.0), 1.0);
        assert_eq!(MovementMode::Sliding.force_multiplier(2.0), 2.0);
    }

    #[test]
    fn jump_gate_blocks_until_cooldown_elapses() {
        let mut gate = JumpGate::default();
        assert!(gate.is_ready());

        gate.fire(0.4);
        assert!(!gate.is_ready());

        // Holding the key for less than the cooldown changes nothing.
        gate.tick(Duration::from_millis(200));
        assert!(!gate.is_ready());

        gate.tick(Duration::from_millis(250));
        assert!(gate.is_ready());
    }

    #[test]
    fn jump_gate_can_fire_again_after_reopening() {
        let mut gate = JumpGate::default();
        gate.fire(0.1);
        gate.tick(Duration::from_millis(150));
        assert!(gate.is_ready());

        gate.fire(0.1);
        assert!(!gate.is_ready());
    }
}
