//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::Serialize;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Enemy characters and training dummies
    Enemy,
    /// Crystal clones the player can stand on
    Clone,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Locomotion state owned by the movement chain.
///
/// Velocity itself lives in avian's `LinearVelocity`; everything here is the
/// decision state layered on top of it. Other domains read it through
/// [`MovementState::snapshot`].
#[derive(Component, Debug, Clone)]
pub struct MovementState {
    pub grounded: bool,
    pub jumping: bool,
    pub wall_sliding: bool,
    pub dashing: bool,
    pub can_double_jump: bool,
    /// -1 wall on the left, 1 wall on the right, 0 none.
    pub wall_direction: i8,
    pub facing: Facing,
    pub gravity_scale: f32,
    /// Set on every jump, cleared when the early-release cut is applied.
    pub(crate) jump_cut_armed: bool,
    pub(crate) dash_direction: f32,
    pub(crate) pre_dash_velocity_y: f32,
    pub(crate) last_axis: Vec2,

    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
    pub dash_timer: f32,
    pub dash_cooldown_timer: f32,
    pub wall_jump_lock_timer: f32,
    pub dash_recovery_timer: f32,
    pub knockback_timer: f32,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            grounded: false,
            jumping: false,
            wall_sliding: false,
            dashing: false,
            can_double_jump: true,
            wall_direction: 0,
            facing: Facing::Right,
            gravity_scale: 1.0,
            jump_cut_armed: false,
            dash_direction: 1.0,
            pre_dash_velocity_y: 0.0,
            last_axis: Vec2::ZERO,
            coyote_timer: 0.0,
            jump_buffer_timer: 0.0,
            dash_timer: 0.0,
            dash_cooldown_timer: 0.0,
            wall_jump_lock_timer: 0.0,
            dash_recovery_timer: 0.0,
            knockback_timer: 0.0,
        }
    }
}

/// Read-only projection of an actor's locomotion, handed to combat and
/// animation collaborators.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MovementSnapshot {
    pub grounded: bool,
    pub jumping: bool,
    pub falling: bool,
    pub wall_sliding: bool,
    pub dashing: bool,
    pub can_double_jump: bool,
    pub knocked_back: bool,
    pub wall_direction: i8,
    pub facing: Facing,
    pub velocity: [f32; 2],
    pub input: [f32; 2],
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Count a timer down toward zero without ever going negative.
pub fn tick_down(timer: &mut f32, dt: f32) {
    *timer = (*timer - dt).max(0.0);
}
