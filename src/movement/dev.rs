//! Movement domain: debug-only test room, training dummies and state dump.

use avian2d::prelude::*;
use bevy::prelude::*;

use serde::Serialize;

use crate::clones::{BridgeEdge, CloneManager};
use crate::combat::{CombatSnapshot, CombatState, Hurtbox};
use crate::movement::{GameLayer, Ground, MovementSnapshot, MovementState, Player, Wall};
use crate::stats::{Energy, Health, StatPool};

/// Seconds between controller snapshot dumps.
const DUMP_INTERVAL: f32 = 1.0;

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Enemy]);

    let mut solid = |marker_is_wall: bool, size: Vec2, at: Vec2, color: Color| {
        let mut entity = commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(at.x, at.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ));
        if marker_is_wall {
            entity.insert((Wall, wall_layers));
        } else {
            entity.insert((Ground, ground_layers));
        }
    };

    // Floor and outer walls
    solid(false, Vec2::new(800.0, 40.0), Vec2::new(0.0, -200.0), ground_color);
    solid(true, Vec2::new(40.0, 500.0), Vec2::new(-420.0, 50.0), wall_color);
    solid(true, Vec2::new(40.0, 500.0), Vec2::new(420.0, 50.0), wall_color);

    // Platforms, rising left to right then center
    solid(false, Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0), platform_color);
    solid(false, Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0), platform_color);
    solid(false, Vec2::new(120.0, 20.0), Vec2::new(0.0, 150.0), platform_color);

    // Pillar for wall jumping practice
    solid(true, Vec2::new(30.0, 200.0), Vec2::new(-100.0, -80.0), wall_color);

    // Training dummies
    for x in [150.0, 300.0] {
        commands.spawn((
            Hurtbox,
            Health::new(30.0, 0.2),
            Sprite {
                color: Color::srgb(0.8, 0.3, 0.3),
                custom_size: Some(Vec2::new(28.0, 44.0)),
                ..default()
            },
            Transform::from_xyz(x, -158.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(28.0, 44.0),
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player]),
        ));
    }
}

#[derive(Serialize)]
struct PlayerDump<'a> {
    movement: MovementSnapshot,
    combat: CombatSnapshot,
    health: StatPool,
    energy: StatPool,
    clones: usize,
    clone_slots: usize,
    bridges: &'a [BridgeEdge],
}

/// Periodically log the player's controller state as JSON.
pub(crate) fn dump_player_snapshot(
    time: Res<Time>,
    mut elapsed: Local<f32>,
    query: Query<
        (
            &MovementState,
            &LinearVelocity,
            &CombatState,
            &Health,
            &Energy,
            &CloneManager,
        ),
        With<Player>,
    >,
) {
    *elapsed += time.delta_secs();
    if *elapsed < DUMP_INTERVAL {
        return;
    }
    *elapsed = 0.0;

    for (movement, velocity, combat, health, energy, clones) in &query {
        let dump = PlayerDump {
            movement: movement.snapshot(velocity.0),
            combat: combat.snapshot(),
            health: health.pool,
            energy: energy.pool,
            clones: clones.active_count(),
            clone_slots: clones.arena().allocated(),
            bridges: clones.bridges().edges(),
        };
        match serde_json::to_string(&dump) {
            Ok(json) => debug!("player: {}", json),
            Err(e) => warn!("Failed to serialize player snapshot: {}", e),
        }
    }
}
