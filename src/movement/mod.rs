//! Movement domain: locomotion state machine, plugin wiring and exports.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod probe;
mod resources;
mod systems;


pub use components::{
    Facing, GameLayer, Ground, MovementSnapshot, MovementState, Player, Wall, tick_down,
};
pub use controller::JumpKind;
pub use probe::{AvianProbe, Contacts, SurfaceProbe};
pub use resources::{MoveIntent, MovementInput, MovementTuning, ProbeBox};
pub(crate) use systems::keyboard_axis;

use bevy::prelude::*;

use crate::clones::CloneTuning;
use crate::combat::AttackTuning;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_gravity, apply_horizontal_movement, consume_movement_input, read_input, resolve_dash,
    resolve_jump, sense_surfaces,
};
use crate::stats::StatTuning;

/// Movement runs on the fixed clock so jump arcs do not depend on frame rate.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(
                Startup,
                spawn_player.run_if(
                    resource_exists::<MovementTuning>
                        .and(resource_exists::<AttackTuning>)
                        .and(resource_exists::<StatTuning>)
                        .and(resource_exists::<CloneTuning>),
                ),
            )
            .add_systems(Update, read_input)
            .add_systems(
                FixedUpdate,
                (
                    sense_surfaces,
                    resolve_jump,
                    resolve_dash,
                    apply_horizontal_movement,
                    apply_gravity,
                    consume_movement_input,
                )
                    .chain()
                    .in_set(MovementSet)
                    .run_if(resource_exists::<MovementTuning>),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room).add_systems(
            Update,
            dev::dump_player_snapshot.run_if(resource_exists::<MovementTuning>),
        );
    }
}
