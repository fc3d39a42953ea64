//! Clones domain: the per-player clone manager.
//!
//! Owns the clone arena and the bridge graph built over it. Every membership
//! change (create, remove, expiry) goes through this type so the graph is
//! rebuilt exactly when the live set changes.

use bevy::prelude::*;

use crate::clones::{BridgeGraph, CloneArena, CloneHandle, CloneTuning, CrystalClone};
use crate::stats::Energy;

#[derive(Component, Debug, Clone)]
pub struct CloneManager {
    tuning: CloneTuning,
    arena: CloneArena,
    bridges: BridgeGraph,
}

impl CloneManager {
    pub fn new(tuning: CloneTuning) -> Self {
        Self {
            arena: CloneArena::new(tuning.pool_capacity()),
            bridges: BridgeGraph::default(),
            tuning,
        }
    }

    pub fn tuning(&self) -> &CloneTuning {
        &self.tuning
    }

    pub fn active_count(&self) -> usize {
        self.arena.live_count()
    }

    pub fn clones(&self) -> impl Iterator<Item = (CloneHandle, &CrystalClone)> {
        self.arena.iter()
    }

    pub fn get(&self, handle: CloneHandle) -> Option<&CrystalClone> {
        self.arena.get(handle)
    }

    pub fn bridges(&self) -> &BridgeGraph {
        &self.bridges
    }

    pub fn arena(&self) -> &CloneArena {
        &self.arena
    }

    pub fn is_too_close(&self, position: Vec2) -> bool {
        self.arena
            .iter()
            .any(|(_, clone)| clone.position.distance(position) < self.tuning.min_spacing)
    }

    pub fn can_create(&self, position: Vec2, energy: &Energy, grounded: bool) -> bool {
        self.active_count() < self.tuning.max_clones
            && energy.current() >= self.tuning.energy_cost
            && !self.is_too_close(position)
            && (self.tuning.allow_mid_air || grounded)
    }

    /// Leave a clone at `position`, paying its energy cost. Nothing is spent
    /// and no slot is held if any step fails.
    pub fn create(
        &mut self,
        position: Vec2,
        energy: &mut Energy,
        grounded: bool,
    ) -> Option<CloneHandle> {
        if !self.can_create(position, energy, grounded) {
            return None;
        }

        let Some(handle) = self.arena.acquire() else {
            debug!("Clone pool exhausted ({} slots)", self.arena.allocated());
            return None;
        };
        if !energy.try_consume(self.tuning.energy_cost) {
            self.arena.release(handle);
            return None;
        }

        self.arena.activate(handle, position, self.tuning.duration);
        self.recompute_bridges();
        info!(
            "Clone created at ({:.0}, {:.0}), {} active, energy {:.0}/{:.0}",
            position.x,
            position.y,
            self.active_count(),
            energy.current(),
            energy.pool.max()
        );
        Some(handle)
    }

    /// Stale or unknown handles are ignored.
    pub fn remove(&mut self, handle: CloneHandle) -> bool {
        if self.arena.get(handle).is_none() {
            return false;
        }
        let dropped = self
            .bridges
            .edges()
            .iter()
            .filter(|edge| edge.connects(handle))
            .count();
        self.arena.release(handle);
        self.recompute_bridges();
        debug!("Clone {:?} removed, {} bridge(s) dropped", handle, dropped);
        true
    }

    /// Age every clone and remove the ones that ran out. Returns their
    /// handles, already stale.
    pub fn tick(&mut self, dt: f32) -> Vec<CloneHandle> {
        let expired: Vec<CloneHandle> = self
            .arena
            .iter_mut()
            .filter_map(|(handle, clone)| clone.age_by(dt).then_some(handle))
            .collect();

        for &handle in &expired {
            self.remove(handle);
        }
        expired
    }

    pub fn is_point_near_bridge(&self, point: Vec2) -> bool {
        self.bridges.is_point_near_bridge(point, self.tuning.bridge_tolerance)
    }

    fn recompute_bridges(&mut self) {
        let live: Vec<(CloneHandle, Vec2)> = self
            .arena
            .iter()
            .map(|(handle, clone)| (handle, clone.position))
            .collect();
        self.bridges.recompute(&live, self.tuning.max_bridge_distance);
    }
}
