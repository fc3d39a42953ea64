//! Stats domain: health and energy pools shared by every actor.

mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{DamageOutcome, Defeated, Energy, Health, StatPool};
pub use resources::StatTuning;

use bevy::prelude::*;

use crate::stats::systems::{regenerate_energy, tick_invulnerability};

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (tick_invulnerability, regenerate_energy));
    }
}
