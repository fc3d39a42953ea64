//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::sense_surfaces;
pub(crate) use input::{consume_movement_input, keyboard_axis, read_input};
pub(crate) use movement::{apply_gravity, apply_horizontal_movement, resolve_dash, resolve_jump};
