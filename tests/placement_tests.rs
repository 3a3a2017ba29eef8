//! End-to-end behavior of the placement session through the public API.

use bevy::prelude::*;
use dominorun::domino3d::{
    facing_yaw, planar_distance, NoDominoesError, PlacementSession, DEFAULT_TOPPLE_POWER,
    DOMINO_LIFT, MIN_DOMINO_SPACING,
};

/// Drive a full drag: feed every sample, spawn a handle for each
/// placement, and commit it, the way the scene systems do.
fn run_drag(session: &mut PlacementSession, world: &mut World, samples: &[Vec3]) {
    for &sample in samples {
        if let Some(placement) = session.try_place(sample) {
            let body = world.spawn_empty().id();
            session.commit(placement, body);
        }
    }
}

#[test]
fn test_three_samples_place_two_dominoes() {
    // 0.05 and then 0.06 of planar travel, both over the threshold;
    // the first sample only anchors.
    let mut world = World::new();
    let mut session = PlacementSession::new(MIN_DOMINO_SPACING);
    run_drag(
        &mut session,
        &mut world,
        &[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.05),
            Vec3::new(0.0, 0.0, 0.11),
        ],
    );

    assert_eq!(session.len(), 2);
    let placed = session.dominoes();
    assert_eq!(placed[0].position, Vec3::new(0.0, DOMINO_LIFT, 0.05));
    assert_eq!(placed[1].position, Vec3::new(0.0, DOMINO_LIFT, 0.11));
}

#[test]
fn test_consecutive_dominoes_respect_spacing() {
    // A jittery path with lots of sub-threshold noise still produces a
    // trail whose consecutive dominoes are at least the threshold apart.
    let mut world = World::new();
    let mut session = PlacementSession::new(MIN_DOMINO_SPACING);
    let samples: Vec<Vec3> = (0..200)
        .map(|i| {
            let t = i as f32 * 0.004;
            Vec3::new(t, 0.0, (i as f32 * 0.7).sin() * 0.002)
        })
        .collect();
    run_drag(&mut session, &mut world, &samples);

    assert!(session.len() > 1);
    for pair in session.dominoes().windows(2) {
        let d = planar_distance(pair[0].position, pair[1].position);
        assert!(d >= MIN_DOMINO_SPACING - 1e-6, "spacing violated: {d}");
    }
}

#[test]
fn test_first_sample_never_places() {
    let mut session = PlacementSession::new(MIN_DOMINO_SPACING);
    assert!(session.try_place(Vec3::new(3.0, 0.0, -2.0)).is_none());
    assert!(session.is_empty());
}

#[test]
fn test_clear_then_drag_restarts_the_path() {
    let mut world = World::new();
    let mut session = PlacementSession::new(MIN_DOMINO_SPACING);
    run_drag(
        &mut session,
        &mut world,
        &[Vec3::ZERO, Vec3::new(0.1, 0.0, 0.0)],
    );
    assert_eq!(session.len(), 1);

    let handles = session.clear();
    assert_eq!(handles.len(), 1);
    assert!(session.clear().is_empty());

    // Far from any earlier anchor: still only anchors, never places.
    assert!(session.try_place(Vec3::new(9.0, 0.0, 9.0)).is_none());
    assert!(session.is_empty());
}

#[test]
fn test_topple_on_empty_trail_is_an_error() {
    let session = PlacementSession::new(MIN_DOMINO_SPACING);
    assert_eq!(session.first().err(), Some(NoDominoesError));
}

#[test]
fn test_first_domino_faces_positive_x() {
    let mut world = World::new();
    let mut session = PlacementSession::new(MIN_DOMINO_SPACING);
    run_drag(
        &mut session,
        &mut world,
        &[Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)],
    );

    let first = session.first().unwrap();
    let impulse = first.facing() * DEFAULT_TOPPLE_POWER;
    assert!((impulse - Vec3::new(DEFAULT_TOPPLE_POWER, 0.0, 0.0)).length() < 1e-5);
}

#[test]
fn test_facing_yaw_convention() {
    // Travel along +x is yaw zero; travel along +z turns clockwise
    // when seen from above.
    assert!(facing_yaw(Vec3::ZERO, Vec3::X).abs() < 1e-6);
    assert!((facing_yaw(Vec3::ZERO, Vec3::Z) + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}
