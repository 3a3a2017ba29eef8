//! Scene setup system
//!
//! Camera, lighting, the room floor the tabletop sits in, and the
//! status text overlay. Detected planes and dominoes are spawned later
//! by their own systems.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::domino3d::types::*;

pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.1, 1.4).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(2.0, 4.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    // Room floor, just below the detected surfaces so the trail has
    // something to sit in visually and anything that tips off a plane
    // edge still lands somewhere.
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(6.0, 0.1, 6.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.18, 0.18, 0.2),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.06, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(3.0, 0.05, 3.0),
        Friction::coefficient(0.8),
    ));

    commands.spawn((
        Text::new("Scanning for surfaces..."),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        StatusText,
    ));
}
