//! Domino spawning and the status overlay.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::domino3d::placement::{
    DominoPlacement, PlacementSession, DOMINO_EXTENTS, DOMINO_FRICTION, DOMINO_MASS,
};
use crate::domino3d::types::*;

/// Consume placement messages: spawn the body and visual for each one
/// and commit the handle back to the session.
pub fn spawn_placed_dominoes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut session: ResMut<PlacementSession>,
    mut placed: MessageReader<DominoPlaced>,
) {
    for event in placed.read() {
        let body = spawn_domino(
            &mut commands,
            &mut meshes,
            &mut materials,
            &event.placement,
            event.color,
        );
        session.commit(event.placement, body);
    }
}

/// Spawn mesh, material, and dynamic rigid body for one placement.
/// Returns the body handle the session keeps.
pub fn spawn_domino(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    placement: &DominoPlacement,
    color: Color,
) -> Entity {
    let half = DOMINO_EXTENTS * 0.5;
    commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(
                DOMINO_EXTENTS.x,
                DOMINO_EXTENTS.y,
                DOMINO_EXTENTS.z,
            ))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                ..default()
            })),
            Transform::from_translation(placement.position)
                .with_rotation(Quat::from_rotation_y(placement.yaw)),
            RigidBody::Dynamic,
            Collider::cuboid(half.x, half.y, half.z),
            ColliderMassProperties::Mass(DOMINO_MASS),
            Friction::coefficient(DOMINO_FRICTION),
            // Thin fast-moving boxes tunnel at the default timestep.
            Ccd::enabled(),
            Domino,
        ))
        .id()
}

/// Keep the overlay text in sync with tracker and trail state.
pub fn update_status_text(
    session: Res<PlacementSession>,
    tracker: Res<PlaneTracker>,
    settings: Res<AppSettings>,
    mut text_query: Query<&mut Text, With<StatusText>>,
) {
    for mut text in text_query.iter_mut() {
        let planes = tracker.anchors().len();
        let header = if planes == 0 {
            String::from("Scanning for surfaces...")
        } else {
            format!("Tracked planes: {planes}")
        };
        text.0 = format!(
            "{header}\nDominoes: {}\n\nDrag: lay a trail | Space: topple (power {:.2}) | C: clear\nArrows: orbit and zoom",
            session.len(),
            settings.topple_power
        );
    }
}
