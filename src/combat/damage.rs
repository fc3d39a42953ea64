//! Combat domain: hit sweeps and the shared take-damage path.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{Attack, AttackHitbox, AttackTuning, DamageEvent, Hurtbox};
use crate::movement::{Facing, GameLayer, MovementState};
use crate::stats::{DamageOutcome, Defeated, Health};

/// Anything that can be hit.
pub trait Damageable {
    fn take_hit(&mut self, hit: &DamageEvent) -> DamageOutcome;
}

impl Damageable for Health {
    fn take_hit(&mut self, hit: &DamageEvent) -> DamageOutcome {
        self.take_damage(hit.amount)
    }
}

/// An actor's health plus, if it moves, the locomotion a knockback overrides.
pub struct ActorTarget<'a> {
    pub health: &'a mut Health,
    pub motion: Option<(&'a mut MovementState, &'a mut Vec2)>,
}

impl Damageable for ActorTarget<'_> {
    fn take_hit(&mut self, hit: &DamageEvent) -> DamageOutcome {
        let outcome = self.health.take_damage(hit.amount);
        if let DamageOutcome::Damaged { .. } = outcome {
            if let Some((state, velocity)) = self.motion.as_mut() {
                state.apply_knockback(velocity, hit.knockback, hit.knockback_duration);
            }
        }
        outcome
    }
}

/// Finds damageable entities overlapping a hitbox.
pub trait HurtboxQuery {
    /// Every entity touched by `hitbox`, with its position.
    fn overlapping(&self, hitbox: &AttackHitbox) -> Vec<(Entity, Vec2)>;
}

/// Living entities player attacks can hit.
pub type HurtboxTargets<'w, 's> =
    Query<'w, 's, &'static Transform, (With<Hurtbox>, Without<Defeated>)>;

pub fn hurtbox_position(targets: &HurtboxTargets, entity: Entity) -> Option<Vec2> {
    targets
        .get(entity)
        .ok()
        .map(|transform| transform.translation.truncate())
}

/// `HurtboxQuery` backed by the physics world, limited to the Enemy layer.
/// `position_of` resolves a touched entity to its world position, or `None`
/// for entities that cannot be hit.
pub struct AvianHurtboxes<'a, 'w, 's, F> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub position_of: F,
}

impl<F> HurtboxQuery for AvianHurtboxes<'_, '_, '_, F>
where
    F: Fn(Entity) -> Option<Vec2>,
{
    fn overlapping(&self, hitbox: &AttackHitbox) -> Vec<(Entity, Vec2)> {
        let shape = Collider::rectangle(hitbox.half_extents.x * 2.0, hitbox.half_extents.y * 2.0);
        let filter = SpatialQueryFilter::from_mask(GameLayer::Enemy);

        self.spatial_query
            .shape_intersections(&shape, hitbox.center, 0.0, &filter)
            .into_iter()
            .filter_map(|entity| (self.position_of)(entity).map(|position| (entity, position)))
            .collect()
    }
}

/// Sweep an attack's hitbox and build one hit per target it touches.
pub fn sweep_attack<Q: HurtboxQuery + ?Sized>(
    attack: &Attack,
    attacker: Entity,
    origin: Vec2,
    facing: Facing,
    hurtboxes: &Q,
    tuning: &AttackTuning,
) -> Vec<DamageEvent> {
    let hitbox = attack.hitbox(origin, tuning);

    hurtboxes
        .overlapping(&hitbox)
        .into_iter()
        .filter(|(target, _)| *target != attacker)
        .map(|(target, position)| DamageEvent {
            source: attacker,
            target,
            amount: tuning.attack_damage,
            knockback: attack.knockback_direction(origin, position, facing)
                * tuning.knockback_force,
            knockback_duration: tuning.knockback_duration,
        })
        .collect()
}
