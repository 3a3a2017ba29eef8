//! Domino components, markers, palette, and messages.

use bevy::prelude::*;
use rand::Rng;

use crate::domino3d::placement::DominoPlacement;

/// Marker component for every placed domino entity.
#[derive(Component)]
pub struct Domino;

/// Marker component for the main 3D camera.
#[derive(Component)]
pub struct MainCamera;

/// Marker component for the status text overlay.
#[derive(Component)]
pub struct StatusText;

/// The fixed eight-color domino palette. Placement picks from it
/// uniformly at random; the choice is purely cosmetic.
pub const DOMINO_COLORS: [Color; 8] = [
    Color::srgb(0.9, 0.15, 0.15), // red
    Color::srgb(0.2, 0.3, 0.9),   // blue
    Color::srgb(0.15, 0.8, 0.25), // green
    Color::srgb(0.95, 0.9, 0.2),  // yellow
    Color::srgb(0.95, 0.55, 0.1), // orange
    Color::srgb(0.15, 0.85, 0.9), // cyan
    Color::srgb(0.9, 0.2, 0.85),  // magenta
    Color::srgb(0.55, 0.2, 0.75), // purple
];

/// Uniform random pick from [`DOMINO_COLORS`].
pub fn random_domino_color(rng: &mut impl Rng) -> Color {
    DOMINO_COLORS[rng.gen_range(0..DOMINO_COLORS.len())]
}

/// Emitted by the placement controller when a drag sample crosses the
/// spacing threshold. The scene side spawns the body and visual, then
/// commits the handle back to the session.
#[derive(Message, Clone, Copy, Debug)]
pub struct DominoPlaced {
    pub placement: DominoPlacement,
    pub color: Color,
}
