//! Clones domain: tests for the arena, manager, bridges, and teleport.

use bevy::prelude::Vec2;

use super::{BridgeGraph, CloneArena, CloneManager, CloneTuning, CrystalClone, TeleportController};
use crate::stats::Energy;

const EPSILON: f32 = 0.001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn full_energy() -> Energy {
    Energy::new(100.0, 10.0, 1.0)
}

fn manager() -> CloneManager {
    CloneManager::new(CloneTuning::default())
}

/// Positions far enough apart for spacing, close enough to bridge.
fn spots() -> [Vec2; 4] {
    [
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(200.0, 0.0),
        Vec2::new(300.0, 0.0),
    ]
}

// -----------------------------------------------------------------------------
// Arena tests
// -----------------------------------------------------------------------------

#[test]
fn test_arena_reuses_freed_slots_before_growing() {
    let mut arena = CloneArena::new(2);
    let first = arena.acquire().expect("slot");
    arena.release(first);

    let second = arena.acquire().expect("slot");
    assert_eq!(second.index(), first.index());
    assert_eq!(arena.allocated(), 1);
}

#[test]
fn test_arena_exhaustion_returns_none() {
    let mut arena = CloneArena::new(2);
    assert!(arena.acquire().is_some());
    assert!(arena.acquire().is_some());
    assert!(arena.acquire().is_none());
}

#[test]
fn test_reserved_slot_is_hidden_until_activated() {
    let mut arena = CloneArena::new(2);
    let handle = arena.acquire().expect("slot");
    assert!(arena.get(handle).is_none());
    assert_eq!(arena.live_count(), 0);

    assert!(arena.activate(handle, Vec2::ONE, 5.0));
    assert!(arena.get(handle).is_some_and(|clone| clone.active));
    assert_eq!(arena.live_count(), 1);
}

#[test]
fn test_stale_handle_is_rejected_after_reuse() {
    let mut arena = CloneArena::new(1);
    let old = arena.acquire().expect("slot");
    arena.activate(old, Vec2::ZERO, 5.0);
    arena.release(old);

    let new = arena.acquire().expect("slot");
    arena.activate(new, Vec2::X, 5.0);

    assert_eq!(old.index(), new.index());
    assert_ne!(old, new);
    assert!(arena.get(old).is_none());
    assert!(!arena.release(old));
    assert!(arena.get(new).is_some());
}

#[test]
fn test_clone_fades_with_remaining_time() {
    let mut clone = CrystalClone {
        position: Vec2::ZERO,
        remaining: 10.0,
        duration: 10.0,
        age: 0.0,
        alpha: CrystalClone::MAX_ALPHA,
        active: true,
    };
    assert!(!clone.age_by(5.0));
    assert!(approx_eq(clone.alpha, 0.5));
    assert!(clone.age_by(5.0));
    assert!(approx_eq(clone.alpha, CrystalClone::MIN_ALPHA));
}

#[test]
fn test_clone_is_solid_only_once_the_body_is_clear_of_it() {
    let mut manager = manager();
    let mut energy = full_energy();
    let handle = manager.create(Vec2::ZERO, &mut energy, true).expect("clone");
    let clone = manager.get(handle).expect("live clone");
    let reach = Vec2::new(24.0, 48.0);

    // Just left behind, or landed on by a teleport.
    assert!(clone.overlaps(Vec2::ZERO, reach));
    assert!(clone.overlaps(Vec2::new(10.0, 20.0), reach));
    // Standing on top, or beside it.
    assert!(!clone.overlaps(Vec2::new(0.0, 48.0), reach));
    assert!(!clone.overlaps(Vec2::new(30.0, 0.0), reach));
}

// -----------------------------------------------------------------------------
// CloneManager tests
// -----------------------------------------------------------------------------

#[test]
fn test_three_clones_spend_sixty_energy_and_fourth_is_rejected() {
    let mut manager = manager();
    let mut energy = full_energy();
    let [a, b, c, d] = spots();

    for position in [a, b, c] {
        assert!(manager.create(position, &mut energy, true).is_some());
    }
    assert!(approx_eq(energy.current(), 40.0));
    assert_eq!(manager.active_count(), 3);

    assert!(!manager.can_create(d, &energy, true));
    assert!(manager.create(d, &mut energy, true).is_none());
    assert!(approx_eq(energy.current(), 40.0));
}

#[test]
fn test_insufficient_energy_deducts_nothing() {
    let mut manager = manager();
    let mut energy = Energy::new(100.0, 10.0, 1.0);
    energy.try_consume(90.0);

    assert!(manager.create(Vec2::ZERO, &mut energy, true).is_none());
    assert!(approx_eq(energy.current(), 10.0));
    assert_eq!(manager.active_count(), 0);
    assert_eq!(manager.arena().allocated(), 0);
}

#[test]
fn test_spacing_blocks_nearby_clone() {
    let mut manager = manager();
    let mut energy = full_energy();
    manager.create(Vec2::ZERO, &mut energy, true);

    let spacing = manager.tuning().min_spacing;
    assert!(!manager.can_create(Vec2::new(spacing * 0.5, 0.0), &energy, true));
    assert!(manager.can_create(Vec2::new(spacing, 0.0), &energy, true));
}

#[test]
fn test_mid_air_creation_follows_policy() {
    let energy = full_energy();
    let grounded_only = CloneManager::new(CloneTuning {
        allow_mid_air: false,
        ..CloneTuning::default()
    });
    assert!(!grounded_only.can_create(Vec2::ZERO, &energy, false));
    assert!(grounded_only.can_create(Vec2::ZERO, &energy, true));
    assert!(manager().can_create(Vec2::ZERO, &energy, false));
}

#[test]
fn test_remove_ignores_stale_handle() {
    let mut manager = manager();
    let mut energy = full_energy();
    let handle = manager.create(Vec2::ZERO, &mut energy, true).expect("clone");

    assert!(manager.remove(handle));
    assert!(!manager.remove(handle));
    assert_eq!(manager.active_count(), 0);
}

#[test]
fn test_expired_clones_are_removed_through_tick() {
    let mut manager = CloneManager::new(CloneTuning {
        duration: 1.0,
        ..CloneTuning::default()
    });
    let mut energy = full_energy();
    let [a, b, ..] = spots();
    let first = manager.create(a, &mut energy, true).expect("clone");
    manager.create(b, &mut energy, true).expect("clone");
    assert_eq!(manager.bridges().edges().len(), 1);

    assert!(manager.tick(0.5).is_empty());
    let expired = manager.tick(0.6);

    assert_eq!(expired.len(), 2);
    assert!(expired.contains(&first));
    assert_eq!(manager.active_count(), 0);
    assert!(manager.bridges().is_empty());
}

// -----------------------------------------------------------------------------
// Bridge tests
// -----------------------------------------------------------------------------

#[test]
fn test_bridge_boundary_is_inclusive() {
    let mut manager = manager();
    let mut energy = full_energy();
    let max = manager.tuning().max_bridge_distance;

    manager.create(Vec2::ZERO, &mut energy, true);
    manager.create(Vec2::new(max, 0.0), &mut energy, true);
    assert_eq!(manager.bridges().edges().len(), 1);

    manager.create(Vec2::new(max * 2.0 + 1.0, 0.0), &mut energy, true);
    assert_eq!(manager.bridges().edges().len(), 1);
}

#[test]
fn test_no_edges_with_fewer_than_two_clones() {
    let mut graph = BridgeGraph::default();
    graph.recompute(&[], 100.0);
    assert!(graph.is_empty());

    let mut manager = manager();
    let mut energy = full_energy();
    manager.create(Vec2::ZERO, &mut energy, true);
    assert!(manager.bridges().is_empty());
}

#[test]
fn test_removing_a_clone_drops_its_edges() {
    let mut manager = manager();
    let mut energy = full_energy();
    let [a, b, c, _] = spots();
    let first = manager.create(a, &mut energy, true).expect("clone");
    manager.create(b, &mut energy, true).expect("clone");
    manager.create(c, &mut energy, true).expect("clone");
    assert_eq!(manager.bridges().edges().len(), 3);

    manager.remove(first);

    let edges = manager.bridges().edges();
    assert_eq!(edges.len(), 1);
    assert!(edges.iter().all(|edge| !edge.connects(first)));
}

#[test]
fn test_point_near_bridge_uses_segment_distance() {
    let mut manager = manager();
    let mut energy = full_energy();
    manager.create(Vec2::ZERO, &mut energy, true);
    manager.create(Vec2::new(200.0, 0.0), &mut energy, true);
    let tolerance = manager.tuning().bridge_tolerance;

    assert!(manager.is_point_near_bridge(Vec2::new(100.0, tolerance * 0.5)));
    assert!(!manager.is_point_near_bridge(Vec2::new(100.0, tolerance)));
    assert!(!manager.is_point_near_bridge(Vec2::new(260.0, 0.0)));
}

// -----------------------------------------------------------------------------
// Teleport tests
// -----------------------------------------------------------------------------

fn aged_manager(positions: &[Vec2], tuning: CloneTuning) -> CloneManager {
    let mut manager = CloneManager::new(tuning);
    let mut energy = full_energy();
    for &position in positions {
        manager.create(position, &mut energy, true);
    }
    manager.tick(0.5);
    manager
}

#[test]
fn test_teleport_picks_nearest_clone_in_range() {
    let manager = aged_manager(
        &[Vec2::new(300.0, 0.0), Vec2::new(-120.0, 0.0), Vec2::new(150.0, 0.0)],
        CloneTuning::default(),
    );
    let mut controller = TeleportController::default();
    let mut position = Vec2::ZERO;
    let mut velocity = Vec2::new(50.0, 0.0);

    let outcome = controller
        .try_teleport(true, &manager, &mut position, &mut velocity)
        .expect("teleport");

    assert_eq!(position, Vec2::new(-120.0, 0.0));
    assert_eq!(outcome.to, position);
    assert_eq!(velocity, Vec2::new(50.0, 0.0));
    assert!(controller.cooldown_timer > 0.0);
}

#[test]
fn test_teleport_without_clone_in_range_leaves_player() {
    let manager = aged_manager(&[Vec2::new(1000.0, 0.0)], CloneTuning::default());
    let mut controller = TeleportController::default();
    let mut position = Vec2::ZERO;
    let mut velocity = Vec2::ZERO;

    assert!(
        controller
            .try_teleport(true, &manager, &mut position, &mut velocity)
            .is_none()
    );
    assert_eq!(position, Vec2::ZERO);
    assert!(controller.nearest().is_none());
}

#[test]
fn test_teleport_ignores_fresh_clones() {
    let mut manager = manager();
    let mut energy = full_energy();
    manager.create(Vec2::new(50.0, 0.0), &mut energy, true);

    let mut controller = TeleportController::default();
    let mut position = Vec2::ZERO;
    let mut velocity = Vec2::ZERO;
    assert!(
        controller
            .try_teleport(true, &manager, &mut position, &mut velocity)
            .is_none()
    );
}

#[test]
fn test_teleport_cooldown_and_momentum_policy() {
    let manager = aged_manager(
        &[Vec2::new(100.0, 0.0), Vec2::new(-100.0, 0.0)],
        CloneTuning {
            preserve_momentum: false,
            ..CloneTuning::default()
        },
    );
    let mut controller = TeleportController::default();
    let mut position = Vec2::new(80.0, 0.0);
    let mut velocity = Vec2::new(200.0, -100.0);

    assert!(
        controller
            .try_teleport(true, &manager, &mut position, &mut velocity)
            .is_some()
    );
    assert_eq!(velocity, Vec2::ZERO);

    position = Vec2::new(-80.0, 0.0);
    assert!(
        controller
            .try_teleport(true, &manager, &mut position, &mut velocity)
            .is_none()
    );
    assert_eq!(position, Vec2::new(-80.0, 0.0));

    controller.tick(manager.tuning().teleport_cooldown);
    assert!(
        controller
            .try_teleport(true, &manager, &mut position, &mut velocity)
            .is_some()
    );
    assert_eq!(position, Vec2::new(-100.0, 0.0));
}
