//! Clones domain: teleporting the player onto a clone.

use bevy::prelude::*;

use crate::clones::{CloneHandle, CloneManager};
use crate::movement::tick_down;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeleportOutcome {
    pub target: CloneHandle,
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Component, Debug, Clone, Default)]
pub struct TeleportController {
    pub cooldown_timer: f32,
    nearest: Option<CloneHandle>,
}

impl TeleportController {
    /// The clone a teleport would go to right now, if any.
    pub fn nearest(&self) -> Option<CloneHandle> {
        self.nearest
    }

    pub fn tick(&mut self, dt: f32) {
        tick_down(&mut self.cooldown_timer, dt);
    }

    /// Closest clone within teleport range that is old enough to land on.
    pub fn find_nearest(manager: &CloneManager, position: Vec2) -> Option<(CloneHandle, Vec2)> {
        let tuning = manager.tuning();
        manager
            .clones()
            .filter(|(_, clone)| clone.age >= tuning.teleport_delay)
            .map(|(handle, clone)| (handle, clone.position, clone.position.distance(position)))
            .filter(|(_, _, distance)| *distance <= tuning.max_teleport_distance)
            .min_by(|a, b| a.2.total_cmp(&b.2))
            .map(|(handle, clone_position, _)| (handle, clone_position))
    }

    pub fn refresh(&mut self, manager: &CloneManager, position: Vec2) {
        self.nearest = Self::find_nearest(manager, position).map(|(handle, _)| handle);
    }

    /// Move the player onto the nearest clone. With momentum preservation
    /// off the player arrives at rest.
    pub fn try_teleport(
        &mut self,
        requested: bool,
        manager: &CloneManager,
        position: &mut Vec2,
        velocity: &mut Vec2,
    ) -> Option<TeleportOutcome> {
        self.refresh(manager, *position);
        if !requested || self.cooldown_timer > 0.0 {
            return None;
        }

        let target = self.nearest?;
        let to = manager.get(target)?.position;
        let from = *position;

        *position = to;
        if !manager.tuning().preserve_momentum {
            *velocity = Vec2::ZERO;
        }
        self.cooldown_timer = manager.tuning().teleport_cooldown;

        Some(TeleportOutcome { target, from, to })
    }
}
