//! Plane tracking systems
//!
//! `track_planes` advances the scripted tracker and publishes anchor
//! added/updated messages; `sync_plane_anchors` keeps one entity per
//! anchor: a translucent overlay quad plus a static collider, both
//! rebuilt whenever the anchor grows.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::domino3d::placement::DOMINO_FRICTION;
use crate::domino3d::types::*;

/// Raise overlays slightly above the surface they represent so they
/// don't z-fight with the room floor.
const PLANE_VISUAL_LIFT: f32 = 0.001;

/// Half-thickness of a plane's static collider.
const PLANE_COLLIDER_HALF_HEIGHT: f32 = 0.0005;

pub fn track_planes(
    time: Res<Time>,
    mut tracker: ResMut<PlaneTracker>,
    mut added: MessageWriter<PlaneAnchorAdded>,
    mut updated: MessageWriter<PlaneAnchorUpdated>,
) {
    let delta = tracker.tick(time.delta_secs());

    for anchor in delta.added {
        info!(
            "detected plane {} at ({:.2}, {:.2}, {:.2})",
            anchor.id, anchor.center.x, anchor.center.y, anchor.center.z
        );
        added.write(PlaneAnchorAdded(anchor));
    }
    for anchor in delta.updated {
        updated.write(PlaneAnchorUpdated(anchor));
    }
}

pub fn sync_plane_anchors(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut detected: ResMut<DetectedPlanes>,
    mut added: MessageReader<PlaneAnchorAdded>,
    mut updated: MessageReader<PlaneAnchorUpdated>,
) {
    for PlaneAnchorAdded(anchor) in added.read() {
        let entity = commands
            .spawn((
                Mesh3d(meshes.add(
                    Plane3d::default()
                        .mesh()
                        .size(anchor.extent.x, anchor.extent.y),
                )),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgba(0.3, 0.6, 0.9, 0.25),
                    alpha_mode: AlphaMode::Blend,
                    unlit: true,
                    ..default()
                })),
                Transform::from_translation(anchor.center + Vec3::Y * PLANE_VISUAL_LIFT),
                RigidBody::Fixed,
                Collider::cuboid(
                    anchor.extent.x / 2.0,
                    PLANE_COLLIDER_HALF_HEIGHT,
                    anchor.extent.y / 2.0,
                ),
                Friction::coefficient(DOMINO_FRICTION),
            ))
            .id();
        detected.nodes.insert(anchor.id, entity);
    }

    for PlaneAnchorUpdated(anchor) in updated.read() {
        let Some(&entity) = detected.nodes.get(&anchor.id) else {
            continue;
        };
        // Rebuild quad and collider at the new extent, same protocol
        // as an anchor-updated callback from a real tracker.
        commands.entity(entity).insert((
            Mesh3d(meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(anchor.extent.x, anchor.extent.y),
            )),
            Transform::from_translation(anchor.center + Vec3::Y * PLANE_VISUAL_LIFT),
            Collider::cuboid(
                anchor.extent.x / 2.0,
                PLANE_COLLIDER_HALF_HEIGHT,
                anchor.extent.y / 2.0,
            ),
        ));
    }
}
