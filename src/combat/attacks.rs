//! Combat domain: attack direction resolution and hitbox geometry.

use bevy::prelude::*;
use serde::Serialize;

use crate::combat::AttackTuning;
use crate::movement::Facing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AttackKind {
    #[default]
    None,
    Horizontal,
    Up,
    Down,
}

impl AttackKind {
    pub fn is_vertical(self) -> bool {
        matches!(self, AttackKind::Up | AttackKind::Down)
    }
}

/// A resolved attack: its kind and the unit axis it points along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attack {
    pub kind: AttackKind,
    pub direction: Vec2,
}

impl Attack {
    /// Classify the movement input by its dominant axis. Input below the
    /// threshold falls back to a horizontal attack along `facing`.
    pub fn resolve(input: Vec2, facing: Facing, threshold: f32) -> Self {
        if input.length_squared() > threshold {
            if input.y.abs() > input.x.abs() {
                if input.y > 0.0 {
                    return Self {
                        kind: AttackKind::Up,
                        direction: Vec2::Y,
                    };
                }
                return Self {
                    kind: AttackKind::Down,
                    direction: Vec2::NEG_Y,
                };
            }
            return Self {
                kind: AttackKind::Horizontal,
                direction: Vec2::new(input.x.signum(), 0.0),
            };
        }

        Self {
            kind: AttackKind::Horizontal,
            direction: Vec2::new(facing.sign(), 0.0),
        }
    }

    pub fn hitbox(&self, origin: Vec2, tuning: &AttackTuning) -> AttackHitbox {
        let size = if self.kind.is_vertical() {
            tuning.vertical_hitbox()
        } else {
            tuning.horizontal_hitbox()
        };
        AttackHitbox {
            center: origin + self.direction * tuning.hitbox_offset,
            half_extents: size * 0.5,
        }
    }

    /// Vertical attacks push along their axis; horizontal ones push from the
    /// attacker toward the target, or along `facing` when they overlap.
    pub fn knockback_direction(&self, attacker: Vec2, target: Vec2, facing: Facing) -> Vec2 {
        if self.kind.is_vertical() {
            return self.direction;
        }
        let away = (target - attacker).normalize_or_zero();
        if away == Vec2::ZERO {
            Vec2::new(facing.sign(), 0.0)
        } else {
            away
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackHitbox {
    pub center: Vec2,
    pub half_extents: Vec2,
}
