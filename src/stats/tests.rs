//! Stats domain: tests for pools, health and energy.

use super::{DamageOutcome, Energy, Health, StatPool, StatTuning};

const EPSILON: f32 = 0.001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// -----------------------------------------------------------------------------
// StatPool tests
// -----------------------------------------------------------------------------

#[test]
fn test_pool_starts_full() {
    let pool = StatPool::new(50.0);
    assert!(approx_eq(pool.current(), 50.0));
    assert!(pool.is_full());
    assert!(!pool.is_empty());
}

#[test]
fn test_pool_clamps_on_every_modification() {
    let mut pool = StatPool::new(100.0);
    for amount in [-30.0, 500.0, -250.0, 12.5, -0.5, 1e6, -1e6, 40.0] {
        pool.modify(amount);
        assert!(pool.current() >= 0.0 && pool.current() <= pool.max());
    }
}

#[test]
fn test_pool_modify_reports_applied_delta() {
    let mut pool = StatPool::new(100.0);
    assert!(approx_eq(pool.modify(-30.0), -30.0));
    assert!(approx_eq(pool.modify(50.0), 30.0));
    assert!(approx_eq(pool.modify(-500.0), -100.0));
    assert!(pool.is_empty());
}

#[test]
fn test_pool_negative_max_is_treated_as_zero() {
    let pool = StatPool::new(-5.0);
    assert!(approx_eq(pool.max(), 0.0));
    assert!(approx_eq(pool.percent(), 0.0));
}

// -----------------------------------------------------------------------------
// Health tests
// -----------------------------------------------------------------------------

#[test]
fn test_health_invulnerability_window_scenario() {
    let mut health = Health::new(100.0, 0.5);

    assert_eq!(
        health.take_damage(30.0),
        DamageOutcome::Damaged { remaining: 70.0 }
    );
    assert!(health.is_invulnerable());

    health.tick(0.2);
    assert_eq!(health.take_damage(30.0), DamageOutcome::Ignored);
    assert!(approx_eq(health.pool.current(), 70.0));

    health.tick(0.4);
    assert!(!health.is_invulnerable());
    health.take_damage(30.0);
    assert!(approx_eq(health.pool.current(), 40.0));
}

#[test]
fn test_health_killed_does_not_start_invulnerability() {
    let mut health = Health::new(20.0, 0.5);
    assert_eq!(health.take_damage(25.0), DamageOutcome::Killed);
    assert!(health.is_dead());
    assert!(!health.is_invulnerable());
    assert!(approx_eq(health.pool.current(), 0.0));
}

#[test]
fn test_health_ignores_damage_once_dead() {
    let mut health = Health::new(10.0, 0.0);
    health.take_damage(10.0);
    assert_eq!(health.take_damage(5.0), DamageOutcome::Ignored);
}

// -----------------------------------------------------------------------------
// Energy tests
// -----------------------------------------------------------------------------

#[test]
fn test_energy_try_consume_is_all_or_nothing() {
    let mut energy = Energy::new(100.0, 10.0, 1.0);
    assert!(energy.try_consume(60.0));
    assert!(!energy.try_consume(60.0));
    assert!(approx_eq(energy.current(), 40.0));
}

#[test]
fn test_energy_regen_waits_for_delay() {
    let mut energy = Energy::new(100.0, 10.0, 1.0);
    energy.try_consume(50.0);
    assert!(!energy.can_regenerate());

    energy.tick(0.5);
    assert!(approx_eq(energy.current(), 50.0));

    energy.tick(0.5);
    assert!(energy.can_regenerate());
    assert!(approx_eq(energy.current(), 55.0));

    energy.tick(1.0);
    assert!(approx_eq(energy.current(), 65.0));
}

#[test]
fn test_energy_regen_never_exceeds_max() {
    let mut energy = Energy::new(100.0, 1000.0, 0.0);
    energy.try_consume(5.0);
    for _ in 0..10 {
        energy.tick(0.1);
        assert!(energy.current() <= 100.0);
    }
    assert!(energy.pool.is_full());
}

#[test]
fn test_stat_tuning_builds_full_pools() {
    let tuning = StatTuning::default();
    let health = tuning.health();
    let energy = tuning.energy();
    assert!(approx_eq(health.pool.current(), tuning.max_health));
    assert!(approx_eq(energy.current(), tuning.max_energy));
    assert!(energy.can_regenerate());
}
