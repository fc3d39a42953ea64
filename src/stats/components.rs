//! Stats domain: clamped resource pools and the actors' Health and Energy.

use bevy::prelude::*;
use serde::Serialize;

use crate::movement::tick_down;

/// A numeric resource that always stays within `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatPool {
    current: f32,
    max: f32,
}

impl StatPool {
    /// Pools start full.
    pub fn new(max: f32) -> Self {
        let max = max.max(0.0);
        Self { current: max, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    pub fn percent(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }

    /// Add `amount` (negative to drain) and return the change actually applied.
    pub fn modify(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = (self.current + amount).clamp(0.0, self.max);
        self.current - before
    }
}

/// Result of routing damage through a [`Health`] pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// Invulnerable or already dead; nothing changed.
    Ignored,
    Damaged { remaining: f32 },
    Killed,
}

#[derive(Component, Debug, Clone)]
pub struct Health {
    pub pool: StatPool,
    invulnerability_time: f32,
    invulnerable_timer: f32,
}

impl Health {
    pub fn new(max: f32, invulnerability_time: f32) -> Self {
        Self {
            pool: StatPool::new(max),
            invulnerability_time,
            invulnerable_timer: 0.0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_timer > 0.0
    }

    /// Subtract `amount` unless invulnerable. Surviving a hit opens the
    /// invulnerability window.
    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.is_invulnerable() || self.is_dead() {
            return DamageOutcome::Ignored;
        }

        self.pool.modify(-amount.max(0.0));
        if self.pool.is_empty() {
            DamageOutcome::Killed
        } else {
            self.invulnerable_timer = self.invulnerability_time;
            DamageOutcome::Damaged {
                remaining: self.pool.current(),
            }
        }
    }

    pub fn tick(&mut self, dt: f32) {
        tick_down(&mut self.invulnerable_timer, dt);
    }
}

#[derive(Component, Debug, Clone)]
pub struct Energy {
    pub pool: StatPool,
    regen_rate: f32,
    regen_delay: f32,
    time_since_last_use: f32,
}

impl Energy {
    pub fn new(max: f32, regen_rate: f32, regen_delay: f32) -> Self {
        Self {
            pool: StatPool::new(max),
            regen_rate,
            regen_delay,
            time_since_last_use: regen_delay,
        }
    }

    pub fn current(&self) -> f32 {
        self.pool.current()
    }

    pub fn can_regenerate(&self) -> bool {
        self.time_since_last_use >= self.regen_delay
    }

    /// Spending restarts the regeneration delay.
    pub fn modify(&mut self, amount: f32) -> f32 {
        if amount < 0.0 {
            self.time_since_last_use = 0.0;
        }
        self.pool.modify(amount)
    }

    /// Deduct `cost` only if the whole amount is available.
    pub fn try_consume(&mut self, cost: f32) -> bool {
        if self.pool.current() < cost {
            return false;
        }
        self.modify(-cost);
        true
    }

    pub fn tick(&mut self, dt: f32) {
        self.time_since_last_use += dt;
        if self.can_regenerate() && !self.pool.is_full() {
            self.pool.modify(self.regen_rate * dt);
        }
    }
}

/// Added when an actor's health runs out. Controllers skip defeated actors.
#[derive(Component, Debug)]
pub struct Defeated;
