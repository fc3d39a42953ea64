//! Movement domain: player bootstrap from loaded configuration.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::clones::{CloneManager, CloneTuning, TeleportController};
use crate::combat::{AttackRules, CombatState};
use crate::movement::{GameLayer, MovementState, Player};
use crate::stats::StatTuning;

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player with every controller component. Runs once the
/// configuration resources exist.
pub(crate) fn spawn_player(
    mut commands: Commands,
    stats: Res<StatTuning>,
    clones: Res<CloneTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    info!(
        "Spawning player: health={}, energy={}, max_clones={}",
        stats.max_health, stats.max_energy, clones.max_clones
    );

    commands.spawn((
        // Identity & Movement
        (Player, MovementState::default()),
        // Stats & Combat
        (
            stats.health(),
            stats.energy(),
            CombatState::default(),
            AttackRules::default(),
        ),
        // Clones
        (
            CloneManager::new(clones.clone()),
            TeleportController::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // gravity is applied by the movement chain
            Friction::new(0.0),
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Enemy,
                    GameLayer::Clone,
                ],
            ),
        ),
    ));
}
