//! Clones domain: crystal clones, the light bridges between them, and
//! teleporting onto them.

mod bridges;
mod events;
mod manager;
mod pool;
mod resources;
mod systems;
mod teleport;

#[cfg(test)]
mod tests;

pub use bridges::{BridgeEdge, BridgeGraph};
pub use events::{CloneCreated, CloneExpired, Teleported};
pub use manager::CloneManager;
pub use pool::{CloneArena, CloneHandle, CrystalClone};
pub use resources::{CloneInput, CloneTuning};
pub use systems::CloneVisual;
pub use teleport::{TeleportController, TeleportOutcome};

use bevy::prelude::*;

use crate::clones::systems::{
    create_clones, read_clone_input, sync_clone_visuals, teleport_to_clones, tick_clones,
    update_clone_solidity,
};

pub struct ClonesPlugin;

impl Plugin for ClonesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CloneInput>()
            .add_message::<CloneCreated>()
            .add_message::<CloneExpired>()
            .add_message::<Teleported>()
            .add_systems(
                Update,
                (
                    read_clone_input,
                    create_clones,
                    tick_clones,
                    teleport_to_clones,
                    sync_clone_visuals,
                    update_clone_solidity,
                )
                    .chain()
                    .run_if(resource_exists::<CloneTuning>),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, systems::draw_bridges);
    }
}
