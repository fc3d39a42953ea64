//! Movement domain: ground and wall sensing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{AvianProbe, Contacts, MovementInput, MovementState, MovementTuning, Player};
use crate::stats::Defeated;

pub(crate) fn sense_surfaces(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    input: Res<MovementInput>,
    mut query: Query<
        (&Transform, &mut MovementState, &mut LinearVelocity),
        (With<Player>, Without<Defeated>),
    >,
) {
    let dt = time.delta_secs();
    let probe = AvianProbe {
        query: &spatial_query,
    };

    for (transform, mut state, mut velocity) in &mut query {
        state.tick_timers(dt);

        let contacts = Contacts::probe(&probe, transform.translation.truncate(), &tuning);
        state.sense(contacts, input.axis, &mut velocity.0, &tuning, dt);
    }
}
