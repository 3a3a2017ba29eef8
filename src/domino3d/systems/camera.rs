//! Camera control systems.

use bevy::prelude::*;

use crate::domino3d::types::MainCamera;

/// Orbit with Left/Right, zoom with Up/Down. The camera always looks
/// at the table center.
pub fn orbit_camera(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let rotation_speed = 1.0;
    let zoom_speed = 0.8;

    for mut transform in camera_query.iter_mut() {
        let mut angle = 0.0;
        if keyboard.pressed(KeyCode::ArrowLeft) {
            angle += rotation_speed * time.delta_secs();
        }
        if keyboard.pressed(KeyCode::ArrowRight) {
            angle -= rotation_speed * time.delta_secs();
        }
        if angle != 0.0 {
            transform.translation = Quat::from_rotation_y(angle) * transform.translation;
        }

        let mut zoom = 0.0;
        if keyboard.pressed(KeyCode::ArrowUp) {
            zoom -= zoom_speed * time.delta_secs();
        }
        if keyboard.pressed(KeyCode::ArrowDown) {
            zoom += zoom_speed * time.delta_secs();
        }
        if zoom != 0.0 {
            let distance = (transform.translation.length() * (1.0 + zoom)).clamp(0.4, 5.0);
            transform.translation = transform.translation.normalize() * distance;
        }

        if angle != 0.0 || zoom != 0.0 {
            *transform = transform.looking_at(Vec3::ZERO, Vec3::Y);
        }
    }
}
