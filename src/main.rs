// Hide console window on Windows for release builds (GUI app).
// In debug builds, keep the console so panics/backtraces are visible.
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use dominorun::domino3d::{
    handle_clear, handle_drag, handle_topple, orbit_camera, setup, spawn_placed_dominoes,
    sync_plane_anchors, track_planes, update_status_text, AppSettings, DetectedPlanes,
    DominoPlaced, PlacementSession, PlaneAnchorAdded, PlaneAnchorUpdated, PlaneTracker,
};

/// Domino Run - lay a trail of dominoes and topple it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Impulse strength applied to the first domino on topple
    #[arg(short, long)]
    power: Option<f32>,

    /// Minimum spacing between dominoes, in meters
    #[arg(long)]
    spacing: Option<f32>,

    /// Settings file path
    #[arg(long, default_value = "dominorun_settings.ron")]
    settings: PathBuf,
}

fn main() {
    let args = Args::parse();

    let mut settings = AppSettings::load_or_init(&args.settings);
    if let Some(power) = args.power {
        settings.topple_power = power;
    }
    if let Some(spacing) = args.spacing {
        settings.min_spacing = spacing;
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Domino Run".to_string(),
                resolution: (settings.window_width, settings.window_height).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .insert_resource(PlacementSession::new(settings.min_spacing))
        .insert_resource(PlaneTracker::default())
        .insert_resource(DetectedPlanes::default())
        .insert_resource(settings)
        .add_message::<DominoPlaced>()
        .add_message::<PlaneAnchorAdded>()
        .add_message::<PlaneAnchorUpdated>()
        .add_systems(Startup, setup)
        // Deterministic order within the frame: tracker ticks first,
        // then placement, spawning, and the trail-level keys.
        .add_systems(
            Update,
            (
                track_planes,
                sync_plane_anchors,
                handle_drag,
                spawn_placed_dominoes,
                handle_topple,
                handle_clear,
            )
                .chain(),
        )
        .add_systems(Update, (orbit_camera, update_status_text))
        .run();
}
