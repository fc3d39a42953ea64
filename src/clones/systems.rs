//! Clones domain: input, lifecycle, teleport and sprite sync systems.

use std::collections::HashSet;

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::clones::{
    CloneCreated, CloneExpired, CloneHandle, CloneInput, CloneManager, TeleportController,
    Teleported,
};
use crate::movement::{GameLayer, MovementState, Player};
use crate::stats::{Defeated, Energy};

const CLONE_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Sprite mirroring one live clone of `owner`.
#[derive(Component, Debug)]
pub struct CloneVisual {
    pub owner: Entity,
    pub handle: CloneHandle,
}

pub(crate) fn read_clone_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<CloneInput>) {
    input.create_pressed =
        keyboard.just_pressed(KeyCode::KeyC) || keyboard.just_pressed(KeyCode::KeyO);
    input.teleport_pressed =
        keyboard.just_pressed(KeyCode::KeyV) || keyboard.just_pressed(KeyCode::KeyP);
}

pub(crate) fn create_clones(
    mut input: ResMut<CloneInput>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &MovementState,
            &mut Energy,
            &mut CloneManager,
        ),
        (With<Player>, Without<Defeated>),
    >,
    mut created: MessageWriter<CloneCreated>,
) {
    if !std::mem::take(&mut input.create_pressed) {
        return;
    }

    for (entity, transform, movement, mut energy, mut manager) in &mut query {
        let position = transform.translation.truncate();
        match manager.create(position, &mut energy, movement.grounded) {
            Some(handle) => {
                created.write(CloneCreated {
                    owner: entity,
                    handle,
                    position,
                });
            }
            None => debug!("Clone request at {:?} rejected", position),
        }
    }
}

pub(crate) fn tick_clones(
    time: Res<Time>,
    mut query: Query<(Entity, &mut CloneManager)>,
    mut expired: MessageWriter<CloneExpired>,
) {
    let dt = time.delta_secs();
    for (entity, mut manager) in &mut query {
        for handle in manager.tick(dt) {
            debug!("Clone {:?} expired", handle);
            expired.write(CloneExpired {
                owner: entity,
                handle,
            });
        }
    }
}

pub(crate) fn teleport_to_clones(
    time: Res<Time>,
    mut input: ResMut<CloneInput>,
    mut query: Query<
        (
            Entity,
            &mut Transform,
            &mut LinearVelocity,
            &mut TeleportController,
            &CloneManager,
        ),
        (With<Player>, Without<Defeated>),
    >,
    mut teleported: MessageWriter<Teleported>,
) {
    let dt = time.delta_secs();
    let requested = std::mem::take(&mut input.teleport_pressed);

    for (entity, mut transform, mut velocity, mut controller, manager) in &mut query {
        controller.tick(dt);

        let mut position = transform.translation.truncate();
        let Some(outcome) =
            controller.try_teleport(requested, manager, &mut position, &mut velocity.0)
        else {
            if requested {
                debug!("Teleport requested with no clone in range");
            }
            continue;
        };

        transform.translation.x = position.x;
        transform.translation.y = position.y;
        info!(
            "Teleported to clone {:?}: ({:.0}, {:.0}) -> ({:.0}, {:.0})",
            outcome.target, outcome.from.x, outcome.from.y, outcome.to.x, outcome.to.y
        );
        teleported.write(Teleported {
            entity,
            from: outcome.from,
            to: outcome.to,
        });
    }
}

fn clone_color(alpha: f32, targeted: bool) -> Color {
    if targeted {
        Color::srgba(0.85, 0.95, 1.0, alpha)
    } else {
        Color::srgba(0.5, 0.6, 1.0, alpha)
    }
}

/// Solid clones block the player only; non-solid ones are invisible to
/// physics and to the surface probes.
fn clone_layers(solid: bool) -> CollisionLayers {
    if solid {
        CollisionLayers::new(GameLayer::Clone, [GameLayer::Player])
    } else {
        CollisionLayers::NONE
    }
}

/// Spawn, fade and despawn clone bodies so they match each manager's arena.
/// The clone a teleport would pick is tinted brighter.
pub(crate) fn sync_clone_visuals(
    mut commands: Commands,
    managers: Query<(Entity, &CloneManager, Option<&TeleportController>)>,
    mut visuals: Query<(Entity, &CloneVisual, &mut Sprite)>,
) {
    let mut shown: HashSet<(Entity, CloneHandle)> = HashSet::new();

    for (entity, visual, mut sprite) in &mut visuals {
        let Ok((_, manager, controller)) = managers.get(visual.owner) else {
            commands.entity(entity).despawn();
            continue;
        };
        match manager.get(visual.handle) {
            Some(clone) => {
                let targeted =
                    controller.and_then(TeleportController::nearest) == Some(visual.handle);
                sprite.color = clone_color(clone.alpha, targeted);
                shown.insert((visual.owner, visual.handle));
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for (owner, manager, _) in &managers {
        for (handle, clone) in manager.clones() {
            if shown.contains(&(owner, handle)) {
                continue;
            }
            commands.spawn((
                CloneVisual { owner, handle },
                Sprite {
                    color: clone_color(clone.alpha, false),
                    custom_size: Some(CLONE_SIZE),
                    ..default()
                },
                Transform::from_xyz(clone.position.x, clone.position.y, -1.0),
                RigidBody::Static,
                Collider::rectangle(CLONE_SIZE.x, CLONE_SIZE.y),
                clone_layers(false),
            ));
        }
    }
}

/// A clone turns solid once its owner has stepped out of it, and goes
/// non-solid again while the owner is inside (after a teleport onto it).
pub(crate) fn update_clone_solidity(
    managers: Query<(&Transform, &CloneManager), Without<CloneVisual>>,
    mut visuals: Query<(&CloneVisual, &mut CollisionLayers)>,
) {
    for (visual, mut layers) in &mut visuals {
        let Ok((transform, manager)) = managers.get(visual.owner) else {
            continue;
        };
        let Some(clone) = manager.get(visual.handle) else {
            continue;
        };
        // Clones share the player's box, so the combined reach is one full size.
        let solid = !clone.overlaps(transform.translation.truncate(), CLONE_SIZE);
        layers.set_if_neq(clone_layers(solid));
    }
}

/// Bridges light up while their owner stands on one.
#[cfg(feature = "dev-tools")]
pub(crate) fn draw_bridges(mut gizmos: Gizmos, managers: Query<(&Transform, &CloneManager)>) {
    for (transform, manager) in &managers {
        if manager.bridges().is_empty() {
            continue;
        }
        let alpha = if manager.is_point_near_bridge(transform.translation.truncate()) {
            1.0
        } else {
            0.6
        };
        let color = Color::srgba(0.5, 0.6, 1.0, alpha);
        for edge in manager.bridges().edges() {
            let (start, end) = edge.segment();
            gizmos.line_2d(start, end, color);
        }
    }
}
