//! Clones domain: fixed-capacity generational arena of clone slots.

use bevy::prelude::*;
use serde::Serialize;

/// Addresses one clone slot. A handle whose generation no longer matches its
/// slot is stale and resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CloneHandle {
    index: u32,
    generation: u32,
}

impl CloneHandle {
    pub fn index(self) -> usize {
        self.index as usize
    }
}

/// A crystal clone left behind by the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrystalClone {
    pub position: Vec2,
    pub remaining: f32,
    pub duration: f32,
    pub age: f32,
    pub alpha: f32,
    pub active: bool,
}

impl CrystalClone {
    pub const MIN_ALPHA: f32 = 0.2;
    pub const MAX_ALPHA: f32 = 0.8;

    const HIDDEN: Self = Self {
        position: Vec2::ZERO,
        remaining: 0.0,
        duration: 0.0,
        age: 0.0,
        alpha: 0.0,
        active: false,
    };

    /// Fraction of the lifetime still left, in `[0, 1]`.
    pub fn remaining_fraction(&self) -> f32 {
        if self.duration <= 0.0 {
            0.0
        } else {
            (self.remaining / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Whether a body centered at `point` is inside the clone. `reach` is the
    /// sum of both boxes' half extents.
    pub fn overlaps(&self, point: Vec2, reach: Vec2) -> bool {
        let delta = (point - self.position).abs();
        delta.x < reach.x && delta.y < reach.y
    }

    /// Count the clone's life down by `dt` and fade it with what is left.
    /// Returns true once it has run out.
    pub fn age_by(&mut self, dt: f32) -> bool {
        self.age += dt;
        self.remaining = (self.remaining - dt).max(0.0);
        self.alpha = Self::MIN_ALPHA + (Self::MAX_ALPHA - Self::MIN_ALPHA) * self.remaining_fraction();
        self.remaining <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    Free,
    /// Acquired but not yet initialized; hidden from iteration.
    Reserved,
    Live,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    state: SlotState,
    clone: CrystalClone,
}

#[derive(Debug, Clone)]
pub struct CloneArena {
    slots: Vec<Slot>,
    capacity: usize,
}

impl CloneArena {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Slots allocated so far, free or not.
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    pub fn live_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.state == SlotState::Live)
            .count()
    }

    /// Reserve a slot, reusing a freed one before growing. `None` once every
    /// slot up to capacity is in use.
    pub fn acquire(&mut self) -> Option<CloneHandle> {
        let index = match self
            .slots
            .iter()
            .position(|slot| slot.state == SlotState::Free)
        {
            Some(index) => index,
            None if self.slots.len() < self.capacity => {
                self.slots.push(Slot {
                    generation: 0,
                    state: SlotState::Free,
                    clone: CrystalClone::HIDDEN,
                });
                self.slots.len() - 1
            }
            None => return None,
        };

        let slot = &mut self.slots[index];
        slot.state = SlotState::Reserved;
        slot.clone = CrystalClone::HIDDEN;
        Some(CloneHandle {
            index: index as u32,
            generation: slot.generation,
        })
    }

    /// Initialize a reserved slot and mark it live.
    pub fn activate(&mut self, handle: CloneHandle, position: Vec2, duration: f32) -> bool {
        let Some(slot) = self.slot_mut(handle) else {
            return false;
        };
        if slot.state != SlotState::Reserved {
            return false;
        }
        slot.clone = CrystalClone {
            position,
            remaining: duration,
            duration,
            age: 0.0,
            alpha: CrystalClone::MAX_ALPHA,
            active: true,
        };
        slot.state = SlotState::Live;
        true
    }

    /// Return a reserved or live slot to the pool. The active flag is
    /// cleared and the generation bumped so outstanding handles go stale.
    pub fn release(&mut self, handle: CloneHandle) -> bool {
        let Some(slot) = self.slot_mut(handle) else {
            return false;
        };
        if slot.state == SlotState::Free {
            return false;
        }
        slot.clone.active = false;
        slot.state = SlotState::Free;
        slot.generation = slot.generation.wrapping_add(1);
        true
    }

    pub fn get(&self, handle: CloneHandle) -> Option<&CrystalClone> {
        self.slots
            .get(handle.index())
            .filter(|slot| slot.generation == handle.generation && slot.state == SlotState::Live)
            .map(|slot| &slot.clone)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CloneHandle, &CrystalClone)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.state == SlotState::Live)
            .map(|(index, slot)| {
                (
                    CloneHandle {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    &slot.clone,
                )
            })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CloneHandle, &mut CrystalClone)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, slot)| slot.state == SlotState::Live)
            .map(|(index, slot)| {
                (
                    CloneHandle {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    &mut slot.clone,
                )
            })
    }

    fn slot_mut(&mut self, handle: CloneHandle) -> Option<&mut Slot> {
        self.slots
            .get_mut(handle.index())
            .filter(|slot| slot.generation == handle.generation)
    }
}
