//! Clones domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CloneTuning {
    /// Seconds each clone lasts.
    pub duration: f32,
    pub energy_cost: f32,
    pub max_clones: usize,
    /// No new clone closer than this to a live one.
    pub min_spacing: f32,
    pub max_bridge_distance: f32,
    /// Keep the player's velocity through a teleport.
    pub preserve_momentum: bool,
    pub allow_mid_air: bool,
    /// Minimum clone age before it can be teleported to.
    pub teleport_delay: f32,
    pub teleport_cooldown: f32,
    pub max_teleport_distance: f32,
    pub bridge_tolerance: f32,
}

impl Default for CloneTuning {
    fn default() -> Self {
        Self {
            duration: 30.0,
            energy_cost: 20.0,
            max_clones: 3,
            min_spacing: 40.0,
            max_bridge_distance: 320.0,
            preserve_momentum: true,
            allow_mid_air: true,
            teleport_delay: 0.1,
            teleport_cooldown: 0.2,
            max_teleport_distance: 400.0,
            bridge_tolerance: 20.0,
        }
    }
}

impl CloneTuning {
    /// Pool slots kept per manager.
    pub fn pool_capacity(&self) -> usize {
        self.max_clones * 2
    }
}

#[derive(Resource, Debug, Default)]
pub struct CloneInput {
    pub create_pressed: bool,
    pub teleport_pressed: bool,
}
