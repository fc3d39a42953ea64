//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Box used by a surface probe, in world units relative to the body center.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ProbeBox {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    /// How far the box is swept along the probe direction.
    pub distance: f32,
}

impl ProbeBox {
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    // Ground locomotion
    pub max_speed: f32,
    pub accel: f32,
    /// Rate used when braking toward zero with no input.
    pub decel: f32,
    /// Rate used when the input opposes the current velocity.
    pub turn_accel: f32,
    /// Multiplier on every horizontal rate while airborne.
    pub air_control: f32,
    pub input_deadzone: f32,

    // Jumping
    pub jump_velocity: f32,
    /// Applied once to upward velocity when jump is released early.
    pub jump_cut_multiplier: f32,
    pub double_jump_multiplier: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,

    // Gravity
    pub gravity: f32,
    pub fall_gravity_multiplier: f32,
    pub apex_gravity_multiplier: f32,
    pub ascend_gravity_multiplier: f32,
    /// Upward speed below which the body counts as near the apex.
    pub apex_threshold: f32,
    pub max_fall_speed: f32,

    // Walls
    pub wall_slide_speed: f32,
    pub wall_jump_horizontal: f32,
    pub wall_jump_vertical: f32,
    pub wall_jump_lock_time: f32,

    // Dash
    pub dash_speed: f32,
    pub dash_time: f32,
    pub dash_cooldown: f32,
    pub ground_only_dash: bool,
    pub preserve_dash_momentum: bool,
    /// Fraction of the pre-dash vertical velocity restored when the dash ends.
    pub dash_end_vertical_momentum: f32,
    pub dash_recovery_time: f32,

    // Sensing
    pub ground_probe: ProbeBox,
    pub wall_probe: ProbeBox,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 320.0,
            accel: 3000.0,
            decel: 4200.0,
            turn_accel: 6400.0,
            air_control: 0.75,
            input_deadzone: 0.1,
            jump_velocity: 680.0,
            jump_cut_multiplier: 0.4,
            double_jump_multiplier: 0.8,
            coyote_time: 0.12,
            jump_buffer_time: 0.12,
            gravity: 1800.0,
            fall_gravity_multiplier: 1.8,
            apex_gravity_multiplier: 0.6,
            ascend_gravity_multiplier: 0.9,
            apex_threshold: 80.0,
            max_fall_speed: 900.0,
            wall_slide_speed: 100.0,
            wall_jump_horizontal: 400.0,
            wall_jump_vertical: 600.0,
            wall_jump_lock_time: 0.15,
            dash_speed: 900.0,
            dash_time: 0.16,
            dash_cooldown: 0.35,
            ground_only_dash: false,
            preserve_dash_momentum: true,
            dash_end_vertical_momentum: 0.5,
            dash_recovery_time: 0.1,
            ground_probe: ProbeBox {
                width: 20.0,
                height: 4.0,
                offset_x: 0.0,
                offset_y: -22.0,
                distance: 4.0,
            },
            wall_probe: ProbeBox {
                width: 4.0,
                height: 40.0,
                offset_x: 10.0,
                offset_y: 0.0,
                distance: 4.0,
            },
        }
    }
}

/// Intents sampled from the keyboard every frame and consumed by the fixed tick.
///
/// Edge flags latch until the movement chain consumes them, so a press that
/// lands between two fixed steps still fires exactly once.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub dash_pressed: bool,
}

impl MovementInput {
    pub fn intent(&self) -> MoveIntent {
        MoveIntent {
            axis: self.axis,
            jump_pressed: self.jump_pressed,
            jump_held: self.jump_held,
            dash_pressed: self.dash_pressed,
        }
    }

    pub fn consume_edges(&mut self) {
        self.jump_pressed = false;
        self.dash_pressed = false;
    }
}

/// One fixed step's worth of normalized input.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveIntent {
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub dash_pressed: bool,
}
