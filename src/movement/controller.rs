//! Movement domain: the locomotion state machine.
//!
//! Each fixed step runs, in order: [`MovementState::tick_timers`],
//! [`MovementState::sense`], [`MovementState::handle_jump`],
//! [`MovementState::handle_dash`], [`MovementState::apply_horizontal`] and
//! [`MovementState::apply_gravity`]. The systems in `systems::movement` call
//! exactly this sequence; the methods only touch the state and the velocity
//! they are handed, so they run the same under test.

use bevy::prelude::*;

use crate::movement::components::tick_down;
use crate::movement::{Contacts, Facing, MoveIntent, MovementSnapshot, MovementState, MovementTuning};

/// Which jump fired, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Wall,
    Double,
}

impl MovementState {
    pub fn snapshot(&self, velocity: Vec2) -> MovementSnapshot {
        MovementSnapshot {
            grounded: self.grounded,
            jumping: self.jumping,
            falling: velocity.y < -0.1 && !self.grounded,
            wall_sliding: self.wall_sliding,
            dashing: self.dashing,
            can_double_jump: self.can_double_jump,
            knocked_back: self.knockback_timer > 0.0,
            wall_direction: self.wall_direction,
            facing: self.facing,
            velocity: velocity.to_array(),
            input: self.last_axis.to_array(),
        }
    }

    pub fn tick_timers(&mut self, dt: f32) {
        tick_down(&mut self.dash_cooldown_timer, dt);
        tick_down(&mut self.wall_jump_lock_timer, dt);
        tick_down(&mut self.dash_recovery_timer, dt);
        tick_down(&mut self.knockback_timer, dt);
        if !self.grounded {
            tick_down(&mut self.coyote_timer, dt);
        }
    }

    /// Fold this step's contacts into the grounded/wall flags, then let a
    /// buffered jump fire if we just became able to jump.
    pub fn sense(
        &mut self,
        contacts: Contacts,
        axis: Vec2,
        velocity: &mut Vec2,
        tuning: &MovementTuning,
        dt: f32,
    ) {
        self.last_axis = axis;

        let was_grounded = self.grounded;
        // The probe still touches the floor on the first steps of a jump.
        let rising_from_jump = self.jumping && velocity.y > 0.0;
        self.grounded = contacts.ground && !rising_from_jump;

        if was_grounded && !self.grounded && !self.jumping {
            self.coyote_timer = tuning.coyote_time;
        }

        if self.grounded {
            if !was_grounded {
                debug!("Landed: vy={:.1}", velocity.y);
            }
            self.can_double_jump = true;
            self.jumping = false;
            self.jump_cut_armed = false;
        }

        self.wall_sliding = false;
        self.wall_direction = 0;
        if !self.dashing && !self.grounded && velocity.y < 0.0 {
            if contacts.wall_right && axis.x > tuning.input_deadzone {
                self.wall_sliding = true;
                self.wall_direction = 1;
            } else if contacts.wall_left && axis.x < -tuning.input_deadzone {
                self.wall_sliding = true;
                self.wall_direction = -1;
            }
        }

        if self.wall_sliding {
            velocity.y = velocity.y.max(-tuning.wall_slide_speed);
        }

        if self.jump_buffer_timer > 0.0 {
            tick_down(&mut self.jump_buffer_timer, dt);
            if self.jump_buffer_timer > 0.0 && (self.grounded || self.wall_sliding) {
                self.try_jump(velocity, tuning);
            }
        }
    }

    /// React to this step's jump input: a press buffers and tries to jump,
    /// a release while ascending cuts the jump short.
    pub fn handle_jump(&mut self, intent: &MoveIntent, velocity: &mut Vec2, tuning: &MovementTuning) {
        if self.dashing {
            return;
        }

        if intent.jump_pressed {
            self.jump_buffer_timer = tuning.jump_buffer_time;
            self.try_jump(velocity, tuning);
        } else if !intent.jump_held {
            self.release_jump(velocity, tuning);
        }
    }

    /// Resolve a jump request by priority: ground/coyote, wall, double.
    /// Any jump that fires clears the buffer.
    pub fn try_jump(&mut self, velocity: &mut Vec2, tuning: &MovementTuning) -> Option<JumpKind> {
        let kind = if self.grounded || self.coyote_timer > 0.0 {
            velocity.y = tuning.jump_velocity;
            self.can_double_jump = true;
            JumpKind::Ground
        } else if self.wall_sliding {
            let away = -f32::from(self.wall_direction);
            velocity.x = away * tuning.wall_jump_horizontal;
            velocity.y = tuning.wall_jump_vertical;
            self.wall_jump_lock_timer = tuning.wall_jump_lock_time;
            self.wall_sliding = false;
            self.wall_direction = 0;
            self.facing = if away > 0.0 { Facing::Right } else { Facing::Left };
            JumpKind::Wall
        } else if self.can_double_jump {
            velocity.y = tuning.jump_velocity * tuning.double_jump_multiplier;
            self.can_double_jump = false;
            JumpKind::Double
        } else {
            return None;
        };

        self.jumping = true;
        self.grounded = false;
        self.jump_cut_armed = true;
        self.coyote_timer = 0.0;
        self.jump_buffer_timer = 0.0;
        debug!(
            "{:?} jump: vy={:.1}, can_double_jump={}",
            kind, velocity.y, self.can_double_jump
        );
        Some(kind)
    }

    /// Variable jump height. Only the first release after a jump counts.
    pub fn release_jump(&mut self, velocity: &mut Vec2, tuning: &MovementTuning) {
        if !self.jump_cut_armed {
            return;
        }
        self.jump_cut_armed = false;
        if velocity.y > 0.0 {
            velocity.y *= tuning.jump_cut_multiplier;
        }
    }

    pub fn handle_dash(
        &mut self,
        intent: &MoveIntent,
        velocity: &mut Vec2,
        tuning: &MovementTuning,
        dt: f32,
    ) {
        let can_start = intent.dash_pressed
            && !self.dashing
            && self.dash_cooldown_timer <= 0.0
            && self.knockback_timer <= 0.0
            && (!tuning.ground_only_dash || self.grounded);

        if can_start {
            self.start_dash(intent.axis, velocity, tuning);
        } else if self.dashing {
            tick_down(&mut self.dash_timer, dt);
            if self.dash_timer <= 0.0 {
                self.end_dash(velocity, tuning);
                return;
            }
        }

        if self.dashing {
            velocity.x = self.dash_direction * tuning.dash_speed;
            velocity.y = 0.0;
            self.gravity_scale = 0.0;
        }
    }

    fn start_dash(&mut self, axis: Vec2, velocity: &mut Vec2, tuning: &MovementTuning) {
        self.dash_direction = if axis.x.abs() > tuning.input_deadzone {
            axis.x.signum()
        } else {
            self.facing.sign()
        };
        self.dashing = true;
        self.wall_sliding = false;
        self.wall_direction = 0;
        self.dash_timer = tuning.dash_time;
        self.dash_cooldown_timer = tuning.dash_cooldown;
        self.dash_recovery_timer = 0.0;
        self.pre_dash_velocity_y = velocity.y;
        debug!("Dash started: direction={}", self.dash_direction);
    }

    fn end_dash(&mut self, velocity: &mut Vec2, tuning: &MovementTuning) {
        self.dashing = false;
        self.gravity_scale = 1.0;
        if tuning.preserve_dash_momentum {
            velocity.x = self.dash_direction * tuning.dash_speed;
            velocity.y = self.pre_dash_velocity_y * tuning.dash_end_vertical_momentum;
            self.dash_recovery_timer = tuning.dash_recovery_time;
        } else {
            *velocity = Vec2::ZERO;
        }
        debug!("Dash ended: velocity={:?}", velocity);
    }

    /// Approach the input's target speed with separate accelerate, brake and
    /// turn rates.
    pub fn apply_horizontal(
        &mut self,
        axis: Vec2,
        velocity: &mut Vec2,
        tuning: &MovementTuning,
        dt: f32,
    ) {
        if self.dashing || self.wall_jump_lock_timer > 0.0 || self.knockback_timer > 0.0 {
            return;
        }

        if axis.x > tuning.input_deadzone {
            self.facing = Facing::Right;
        } else if axis.x < -tuning.input_deadzone {
            self.facing = Facing::Left;
        }

        let input = if axis.x.abs() > tuning.input_deadzone {
            axis.x.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        let target = input * tuning.max_speed;

        let rate = if target == 0.0 {
            tuning.decel
        } else if velocity.x != 0.0 && target.signum() != velocity.x.signum() {
            tuning.turn_accel
        } else {
            tuning.accel
        };

        let mut authority = if self.grounded { 1.0 } else { tuning.air_control };
        let recovering = self.dash_recovery_timer > 0.0 && tuning.dash_recovery_time > 0.0;
        if recovering {
            authority *= 1.0 - self.dash_recovery_timer / tuning.dash_recovery_time;
        }

        // Carry-over above the cap is braked at the current rate, not snapped.
        let over_cap = velocity.x.abs() > tuning.max_speed;
        velocity.x = move_towards(velocity.x, target, rate * authority * dt);
        if !over_cap {
            velocity.x = velocity.x.clamp(-tuning.max_speed, tuning.max_speed);
        }
    }

    /// Gravity multiplier for the current vertical velocity band.
    pub fn gravity_band(vy: f32, tuning: &MovementTuning) -> f32 {
        if vy < 0.0 {
            tuning.fall_gravity_multiplier
        } else if vy > 0.0 && vy < tuning.apex_threshold {
            tuning.apex_gravity_multiplier
        } else if vy > 0.0 {
            tuning.ascend_gravity_multiplier
        } else {
            1.0
        }
    }

    pub fn apply_gravity(&mut self, velocity: &mut Vec2, tuning: &MovementTuning, dt: f32) {
        if self.dashing {
            self.gravity_scale = 0.0;
            return;
        }

        self.gravity_scale = Self::gravity_band(velocity.y, tuning);
        velocity.y -= tuning.gravity * self.gravity_scale * dt;
        velocity.y = velocity.y.max(-tuning.max_fall_speed);
        if self.wall_sliding {
            velocity.y = velocity.y.max(-tuning.wall_slide_speed);
        }
    }

    /// Force `impulse` onto the body and take away horizontal control for
    /// `duration`. Returns false if a knockback is already running.
    pub fn apply_knockback(&mut self, velocity: &mut Vec2, impulse: Vec2, duration: f32) -> bool {
        if self.knockback_timer > 0.0 || impulse == Vec2::ZERO {
            return false;
        }
        *velocity = impulse;
        self.knockback_timer = duration;
        self.wall_sliding = false;
        true
    }
}

fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}
