//! Validation of loaded configuration values.

use thiserror::Error;

use super::data::{CURRENT_SCHEMA_VERSION, ControllerConfig};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unsupported schema_version {found}, expected {expected}")]
    SchemaVersion { found: u32, expected: u32 },
    #[error("{section}.{field} must be positive, got {value}")]
    NotPositive {
        section: &'static str,
        field: &'static str,
        value: f32,
    },
    #[error("{section}.{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        section: &'static str,
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("clones.max_clones must be at least 1")]
    NoCloneCapacity,
}

/// Push a `NotPositive` error for every listed field that is not above zero.
macro_rules! check_positive {
    ($errors:expr, $section:expr, $tuning:expr, [$($field:ident),+ $(,)?]) => {
        $(
            if !($tuning.$field > 0.0) {
                $errors.push(ConfigError::NotPositive {
                    section: $section,
                    field: stringify!($field),
                    value: $tuning.$field,
                });
            }
        )+
    };
}

/// Push an `OutOfRange` error for every listed field outside `[min, max]`.
macro_rules! check_range {
    ($errors:expr, $section:expr, $tuning:expr, $min:expr, $max:expr, [$($field:ident),+ $(,)?]) => {
        $(
            if !($tuning.$field >= $min && $tuning.$field <= $max) {
                $errors.push(ConfigError::OutOfRange {
                    section: $section,
                    field: stringify!($field),
                    value: $tuning.$field,
                    min: $min,
                    max: $max,
                });
            }
        )+
    };
}

/// Validate every section. Returns all problems found, empty if the
/// configuration is usable.
pub fn validate_config(config: &ControllerConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.schema_version != CURRENT_SCHEMA_VERSION {
        errors.push(ConfigError::SchemaVersion {
            found: config.schema_version,
            expected: CURRENT_SCHEMA_VERSION,
        });
    }

    let movement = &config.movement;
    check_positive!(
        errors,
        "movement",
        movement,
        [
            max_speed,
            accel,
            decel,
            turn_accel,
            jump_velocity,
            gravity,
            max_fall_speed,
            wall_slide_speed,
            dash_speed,
            dash_time,
            apex_threshold,
            wall_jump_horizontal,
            wall_jump_vertical,
        ]
    );
    check_positive!(
        errors,
        "movement.ground_probe",
        movement.ground_probe,
        [width, height, distance]
    );
    check_positive!(
        errors,
        "movement.wall_probe",
        movement.wall_probe,
        [width, height, distance]
    );
    check_range!(
        errors,
        "movement",
        movement,
        0.0,
        1.0,
        [
            air_control,
            input_deadzone,
            jump_cut_multiplier,
            dash_end_vertical_momentum,
        ]
    );
    check_range!(
        errors,
        "movement",
        movement,
        0.0,
        2.0,
        [double_jump_multiplier]
    );
    check_range!(
        errors,
        "movement",
        movement,
        0.0,
        10.0,
        [
            fall_gravity_multiplier,
            apex_gravity_multiplier,
            ascend_gravity_multiplier,
        ]
    );
    check_range!(
        errors,
        "movement",
        movement,
        0.0,
        5.0,
        [
            coyote_time,
            jump_buffer_time,
            wall_jump_lock_time,
            dash_cooldown,
            dash_recovery_time,
        ]
    );

    let attack = &config.attack;
    check_positive!(
        errors,
        "attack",
        attack,
        [
            attack_duration,
            horizontal_hitbox_width,
            horizontal_hitbox_height,
            vertical_hitbox_width,
            vertical_hitbox_height,
        ]
    );
    check_range!(
        errors,
        "attack",
        attack,
        0.0,
        f32::MAX,
        [
            attack_cooldown,
            attack_damage,
            knockback_force,
            knockback_duration,
            hitbox_offset,
        ]
    );
    check_range!(errors, "attack", attack, 0.0, 1.0, [direction_threshold]);

    let stats = &config.stats;
    check_positive!(errors, "stats", stats, [max_health, max_energy]);
    check_range!(
        errors,
        "stats",
        stats,
        0.0,
        f32::MAX,
        [invulnerability_time, energy_regen_rate, energy_regen_delay]
    );

    let clones = &config.clones;
    if clones.max_clones == 0 {
        errors.push(ConfigError::NoCloneCapacity);
    }
    check_positive!(errors, "clones", clones, [duration, max_teleport_distance]);
    check_range!(
        errors,
        "clones",
        clones,
        0.0,
        f32::MAX,
        [
            energy_cost,
            min_spacing,
            max_bridge_distance,
            teleport_delay,
            teleport_cooldown,
            bridge_tolerance,
        ]
    );

    errors
}
