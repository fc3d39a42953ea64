//! Combat domain: per-actor attack state.

use bevy::prelude::*;
use serde::Serialize;

use crate::combat::{Attack, AttackKind, AttackRules, AttackTuning};
use crate::movement::{MovementSnapshot, tick_down};

/// Marks an entity player attacks can hit. Overlaps without it are ignored.
#[derive(Component, Debug)]
pub struct Hurtbox;

#[derive(Component, Debug, Clone, Default)]
pub struct CombatState {
    pub attacking: bool,
    pub attack_kind: AttackKind,
    pub attack_direction: Vec2,
    pub attack_timer: f32,
    pub cooldown_timer: f32,
}

/// Read-only view of [`CombatState`] for animation and UI collaborators.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CombatSnapshot {
    pub attacking: bool,
    pub attack_kind: AttackKind,
    pub cooldown_remaining: f32,
}

impl CombatState {
    pub fn snapshot(&self) -> CombatSnapshot {
        CombatSnapshot {
            attacking: self.attacking,
            attack_kind: if self.attacking {
                self.attack_kind
            } else {
                AttackKind::None
            },
            cooldown_remaining: self.cooldown_timer,
        }
    }

    pub fn can_attack(&self) -> bool {
        !self.attacking && self.cooldown_timer <= 0.0
    }

    /// Start an attack if one was requested and every gate passes.
    pub fn try_attack(
        &mut self,
        move_direction: Vec2,
        attack_requested: bool,
        movement: &MovementSnapshot,
        rules: &AttackRules,
        tuning: &AttackTuning,
    ) -> Option<Attack> {
        if !attack_requested || !self.can_attack() {
            return None;
        }

        let attack = Attack::resolve(move_direction, movement.facing, tuning.direction_threshold);
        if !rules.allows(attack.kind, movement) {
            debug!("Attack {:?} rejected by validator", attack.kind);
            return None;
        }

        self.attacking = true;
        self.attack_kind = attack.kind;
        self.attack_direction = attack.direction;
        self.attack_timer = tuning.attack_duration;
        self.cooldown_timer = tuning.attack_cooldown;
        Some(attack)
    }

    /// Attacks end on their own once the duration runs out.
    pub fn tick(&mut self, dt: f32) {
        tick_down(&mut self.cooldown_timer, dt);
        if self.attacking {
            tick_down(&mut self.attack_timer, dt);
            if self.attack_timer <= 0.0 {
                self.attacking = false;
                self.attack_kind = AttackKind::None;
            }
        }
    }
}
