//! Combat domain: melee attacks, hit detection and the take-damage path.

mod attacks;
mod components;
mod damage;
mod events;
mod resources;
mod systems;
mod validator;


pub use attacks::{Attack, AttackHitbox, AttackKind};
pub use components::{CombatSnapshot, CombatState, Hurtbox};
pub use damage::{
    ActorTarget, AvianHurtboxes, Damageable, HurtboxQuery, HurtboxTargets, hurtbox_position,
    sweep_attack,
};
pub use events::{DamageEvent, DeathEvent};
pub use resources::{AttackTuning, CombatInput};
pub use validator::{AttackRules, AttackValidator, DefaultAttackValidator};

use bevy::prelude::*;

use crate::combat::systems::{
    apply_damage, handle_death, process_player_attacks, read_combat_input, tick_combat_state,
};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatInput>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_systems(
                Update,
                (
                    read_combat_input,
                    tick_combat_state,
                    process_player_attacks,
                    apply_damage,
                    handle_death,
                )
                    .chain()
                    .run_if(resource_exists::<AttackTuning>),
            );
    }
}
