//! Combat domain: combat systems for input, attacks, damage, and death.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::damage::{
    ActorTarget, AvianHurtboxes, Damageable, HurtboxTargets, hurtbox_position, sweep_attack,
};
use crate::combat::{AttackRules, AttackTuning, CombatInput, CombatState, DamageEvent, DeathEvent};
use crate::movement::{MovementState, Player, keyboard_axis};
use crate::stats::{DamageOutcome, Defeated, Health};

pub(crate) fn read_combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<CombatInput>,
) {
    input.attack_pressed =
        keyboard.just_pressed(KeyCode::KeyZ) || keyboard.just_pressed(KeyCode::KeyU);
    input.axis = keyboard_axis(&keyboard);
}

pub(crate) fn tick_combat_state(time: Res<Time>, mut query: Query<&mut CombatState>) {
    let dt = time.delta_secs();
    for mut combat in &mut query {
        combat.tick(dt);
    }
}

pub(crate) fn process_player_attacks(
    mut input: ResMut<CombatInput>,
    tuning: Res<AttackTuning>,
    spatial_query: SpatialQuery,
    targets: HurtboxTargets,
    mut player_query: Query<
        (
            Entity,
            &Transform,
            &MovementState,
            &LinearVelocity,
            &mut CombatState,
            &AttackRules,
        ),
        (With<Player>, Without<Defeated>),
    >,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    let requested = std::mem::take(&mut input.attack_pressed);
    if !requested {
        return;
    }

    let hurtboxes = AvianHurtboxes {
        spatial_query: &spatial_query,
        position_of: |entity| hurtbox_position(&targets, entity),
    };

    for (entity, transform, movement, velocity, mut combat, rules) in &mut player_query {
        let snapshot = movement.snapshot(velocity.0);
        let Some(attack) =
            combat.try_attack(input.axis, requested, &snapshot, rules, &tuning)
        else {
            continue;
        };

        let origin = transform.translation.truncate();
        let hits = sweep_attack(&attack, entity, origin, snapshot.facing, &hurtboxes, &tuning);
        info!("Attack {:?}: {} hit(s)", attack.kind, hits.len());

        for hit in hits {
            damage_events.write(hit);
        }
    }
}

pub(crate) fn apply_damage(
    mut commands: Commands,
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut query: Query<
        (
            &mut Health,
            Option<&mut MovementState>,
            Option<&mut LinearVelocity>,
        ),
        Without<Defeated>,
    >,
) {
    for hit in damage_events.read() {
        let Ok((mut health, mut state, mut velocity)) = query.get_mut(hit.target) else {
            continue;
        };

        let motion = match (state.as_mut(), velocity.as_mut()) {
            (Some(state), Some(velocity)) => Some((&mut **state, &mut velocity.0)),
            _ => None,
        };
        let mut target = ActorTarget {
            health: &mut health,
            motion,
        };

        let outcome = target.take_hit(hit);
        match outcome {
            DamageOutcome::Ignored => {
                debug!("Hit on {:?} ignored", hit.target);
            }
            DamageOutcome::Damaged { remaining } => {
                debug!(
                    "{:?} took {:.1} damage, {:.1} left ({:.0}%)",
                    hit.target,
                    hit.amount,
                    remaining,
                    health.pool.percent() * 100.0
                );
            }
            DamageOutcome::Killed => {
                commands.entity(hit.target).insert(Defeated);
                death_events.write(DeathEvent { entity: hit.target });
            }
        }
    }
}

/// Defeated dummies and enemies are removed; a defeated player stays in the
/// world with its controller switched off.
pub(crate) fn handle_death(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut players: Query<&mut LinearVelocity, With<Player>>,
) {
    for death in death_events.read() {
        if let Ok(mut velocity) = players.get_mut(death.entity) {
            velocity.0 = Vec2::ZERO;
            info!("Player defeated");
        } else {
            info!("Entity {:?} defeated", death.entity);
            commands.entity(death.entity).despawn();
        }
    }
}
