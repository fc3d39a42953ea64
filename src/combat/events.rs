//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A single hit delivered from an attacker to a damageable target.
#[derive(Debug, Clone)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
    pub knockback: Vec2,
    pub knockback_duration: f32,
}

impl Message for DamageEvent {}

#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}
