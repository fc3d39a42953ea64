//! Content domain: loads and validates the controller configuration.

mod data;
mod loader;
mod validation;


pub use data::{CURRENT_SCHEMA_VERSION, ControllerConfig};
pub use loader::{ContentLoadError, load_config, parse_config};
pub use validation::{ConfigError, validate_config};

use bevy::prelude::*;
use std::path::Path;

pub const CONFIG_PATH: &str = "assets/data/controller.ron";

/// Reads the configuration while the app is being built. A file that fails
/// to load or validate leaves every tuning resource absent, so no gameplay
/// system runs and the player is never spawned.
pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let config = match load_config(Path::new(CONFIG_PATH)) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };

        let errors = validate_config(&config);
        if !errors.is_empty() {
            for err in &errors {
                error!("Invalid controller config: {}", err);
            }
            error!(
                "{} configuration error(s), controller disabled",
                errors.len()
            );
            return;
        }

        info!(
            "Loaded controller config (schema v{}) from {}",
            config.schema_version, CONFIG_PATH
        );
        app.insert_resource(config.movement)
            .insert_resource(config.attack)
            .insert_resource(config.stats)
            .insert_resource(config.clones);
    }
}
