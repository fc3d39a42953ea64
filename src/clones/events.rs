//! Clones domain: clone lifecycle and teleport events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::clones::CloneHandle;

#[derive(Debug, Clone)]
pub struct CloneCreated {
    pub owner: Entity,
    pub handle: CloneHandle,
    pub position: Vec2,
}

impl Message for CloneCreated {}

#[derive(Debug, Clone)]
pub struct CloneExpired {
    pub owner: Entity,
    pub handle: CloneHandle,
}

impl Message for CloneExpired {}

#[derive(Debug, Clone)]
pub struct Teleported {
    pub entity: Entity,
    pub from: Vec2,
    pub to: Vec2,
}

impl Message for Teleported {}
