//! Movement domain: jump, dash, locomotion and gravity systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};
use crate::stats::Defeated;

type ActorQuery<'w, 's> = Query<
    'w,
    's,
    (&'static mut MovementState, &'static mut LinearVelocity),
    (With<Player>, Without<Defeated>),
>;

pub(crate) fn resolve_jump(input: Res<MovementInput>, tuning: Res<MovementTuning>, mut query: ActorQuery) {
    let intent = input.intent();
    for (mut state, mut velocity) in &mut query {
        state.handle_jump(&intent, &mut velocity.0, &tuning);
    }
}

pub(crate) fn resolve_dash(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: ActorQuery,
) {
    let dt = time.delta_secs();
    let intent = input.intent();
    for (mut state, mut velocity) in &mut query {
        state.handle_dash(&intent, &mut velocity.0, &tuning, dt);
    }
}

pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: ActorQuery,
) {
    let dt = time.delta_secs();
    for (mut state, mut velocity) in &mut query {
        state.apply_horizontal(input.axis, &mut velocity.0, &tuning, dt);
    }
}

pub(crate) fn apply_gravity(time: Res<Time>, tuning: Res<MovementTuning>, mut query: ActorQuery) {
    let dt = time.delta_secs();
    for (mut state, mut velocity) in &mut query {
        state.apply_gravity(&mut velocity.0, &tuning, dt);
    }
}
