//! Stats domain: frame-clock timers.

use bevy::prelude::*;

use crate::stats::{Defeated, Energy, Health};

pub(crate) fn tick_invulnerability(time: Res<Time>, mut query: Query<&mut Health>) {
    let dt = time.delta_secs();
    for mut health in &mut query {
        if health.is_invulnerable() {
            health.tick(dt);
        }
    }
}

pub(crate) fn regenerate_energy(
    time: Res<Time>,
    mut query: Query<&mut Energy, Without<Defeated>>,
) {
    let dt = time.delta_secs();
    for mut energy in &mut query {
        energy.tick(dt);
    }
}
