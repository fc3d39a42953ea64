//! Stats domain: tuning resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::stats::{Energy, Health};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StatTuning {
    pub max_health: f32,
    pub invulnerability_time: f32,
    pub max_energy: f32,
    /// Energy per second once the regen delay has passed.
    pub energy_regen_rate: f32,
    pub energy_regen_delay: f32,
}

impl Default for StatTuning {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            invulnerability_time: 0.5,
            max_energy: 100.0,
            energy_regen_rate: 10.0,
            energy_regen_delay: 1.0,
        }
    }
}

impl StatTuning {
    pub fn health(&self) -> Health {
        Health::new(self.max_health, self.invulnerability_time)
    }

    pub fn energy(&self) -> Energy {
        Energy::new(self.max_energy, self.energy_regen_rate, self.energy_regen_delay)
    }
}
