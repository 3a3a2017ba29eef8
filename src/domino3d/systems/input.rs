//! Input handling systems
//!
//! The drag path is hit-tested against tracked planes and fed to the
//! placement session; Space topples the trail, C clears it.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::domino3d::hit_test::hit_test;
use crate::domino3d::placement::{NoDominoesError, PlacementSession};
use crate::domino3d::types::*;

/// While the left button is held, sample the cursor once per frame,
/// project it onto a tracked plane, and offer the point to the
/// session. Samples that miss every plane are dropped; they are not
/// errors, just no placement this frame.
pub fn handle_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    tracker: Res<PlaneTracker>,
    mut session: ResMut<PlacementSession>,
    mut placed: MessageWriter<DominoPlaced>,
) {
    if !mouse.pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_position) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_position) else {
        return;
    };

    let Some(point) = hit_test(ray, &tracker.anchors()) else {
        return;
    };

    if let Some(placement) = session.try_place(point) {
        let mut rng = rand::thread_rng();
        placed.write(DominoPlaced {
            placement,
            color: random_domino_color(&mut rng),
        });
    }
}

/// Space applies a one-shot impulse to the first domino of the trail,
/// along its facing direction. With nothing placed the key does
/// nothing visible.
pub fn handle_topple(
    keyboard: Res<ButtonInput<KeyCode>>,
    session: Res<PlacementSession>,
    settings: Res<AppSettings>,
    mut commands: Commands,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }

    match session.first() {
        Ok(first) => {
            commands.entity(first.body).insert(ExternalImpulse {
                impulse: first.facing() * settings.topple_power,
                torque_impulse: Vec3::ZERO,
            });
            info!(
                "toppling {} dominoes with power {:.2}",
                session.len(),
                settings.topple_power
            );
        }
        Err(NoDominoesError) => {
            debug!("topple requested with no dominoes placed");
        }
    }
}

/// C removes every placed domino and resets the path anchor, so the
/// next drag starts a fresh trail.
pub fn handle_clear(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<PlacementSession>,
    mut commands: Commands,
) {
    if !keyboard.just_pressed(KeyCode::KeyC) {
        return;
    }

    for body in session.clear() {
        commands.entity(body).despawn();
    }
}
