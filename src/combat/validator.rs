//! Combat domain: pluggable rules deciding whether an attack may start.

use bevy::prelude::*;

use crate::combat::AttackKind;
use crate::movement::MovementSnapshot;

pub trait AttackValidator: Send + Sync + 'static {
    fn can_attack(&self, kind: AttackKind, movement: &MovementSnapshot) -> bool;
}

/// No downward strikes from the ground, and nothing mid-dash.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultAttackValidator;

impl AttackValidator for DefaultAttackValidator {
    fn can_attack(&self, kind: AttackKind, movement: &MovementSnapshot) -> bool {
        if kind == AttackKind::Down && movement.grounded {
            return false;
        }
        !movement.dashing
    }
}

/// The validator an actor attacks under, chosen when it is spawned.
#[derive(Component)]
pub struct AttackRules {
    validator: Box<dyn AttackValidator>,
}

impl AttackRules {
    pub fn new(validator: impl AttackValidator) -> Self {
        Self {
            validator: Box::new(validator),
        }
    }

    pub fn allows(&self, kind: AttackKind, movement: &MovementSnapshot) -> bool {
        self.validator.can_attack(kind, movement)
    }
}

impl Default for AttackRules {
    fn default() -> Self {
        Self::new(DefaultAttackValidator)
    }
}
