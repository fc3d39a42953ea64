//! Combat domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AttackTuning {
    pub attack_duration: f32,
    pub attack_cooldown: f32,
    pub attack_damage: f32,
    pub knockback_force: f32,
    pub knockback_duration: f32,
    /// Squared input magnitude above which the input picks the attack axis.
    pub direction_threshold: f32,
    pub horizontal_hitbox_width: f32,
    pub horizontal_hitbox_height: f32,
    pub vertical_hitbox_width: f32,
    pub vertical_hitbox_height: f32,
    pub hitbox_offset: f32,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            attack_duration: 0.25,
            attack_cooldown: 0.2,
            attack_damage: 10.0,
            knockback_force: 320.0,
            knockback_duration: 0.2,
            direction_threshold: 0.1,
            horizontal_hitbox_width: 60.0,
            horizontal_hitbox_height: 40.0,
            vertical_hitbox_width: 40.0,
            vertical_hitbox_height: 60.0,
            hitbox_offset: 36.0,
        }
    }
}

impl AttackTuning {
    pub fn horizontal_hitbox(&self) -> Vec2 {
        Vec2::new(self.horizontal_hitbox_width, self.horizontal_hitbox_height)
    }

    pub fn vertical_hitbox(&self) -> Vec2 {
        Vec2::new(self.vertical_hitbox_width, self.vertical_hitbox_height)
    }
}

#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub attack_pressed: bool,
    /// Direction keys sampled on the same frame as the press.
    pub axis: Vec2,
}
