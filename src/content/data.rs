//! Content domain: the controller configuration file's schema.

use serde::{Deserialize, Serialize};

use crate::clones::CloneTuning;
use crate::combat::AttackTuning;
use crate::movement::MovementTuning;
use crate::stats::StatTuning;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Every tunable number of the controller, as read from
/// `assets/data/controller.ron`. Sections left out of the file keep their
/// defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub attack: AttackTuning,
    pub stats: StatTuning,
    pub clones: CloneTuning,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            movement: MovementTuning::default(),
            attack: AttackTuning::default(),
            stats: StatTuning::default(),
            clones: CloneTuning::default(),
        }
    }
}
