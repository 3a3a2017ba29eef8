//! Domino placement session
//!
//! Tracks the trail of dominoes laid along a dragged path: the spacing
//! rule between neighbours, the facing derived from the path
//! direction, and the handles of the rigid bodies the physics world
//! owns for each placed domino.

use bevy::prelude::*;
use std::error::Error;
use std::fmt;

/// Minimum planar (x,z) distance between two consecutive dominoes.
/// Drag samples closer than this to the previous anchor are dropped.
pub const MIN_DOMINO_SPACING: f32 = 0.03;

/// Vertical offset applied to each placement so the body spawns on top
/// of the surface instead of intersecting it.
pub const DOMINO_LIFT: f32 = 0.03;

/// Full extents of the domino box shape: width, height, depth.
pub const DOMINO_EXTENTS: Vec3 = Vec3::new(0.007, 0.06, 0.03);

/// Mass of a single domino body.
pub const DOMINO_MASS: f32 = 2.0;

/// Friction coefficient of a domino body.
pub const DOMINO_FRICTION: f32 = 0.8;

/// Default impulse magnitude used to topple the first domino.
pub const DEFAULT_TOPPLE_POWER: f32 = 0.7;

/// Error returned when a topple is requested and no dominoes exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoDominoesError;

impl fmt::Display for NoDominoesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no dominoes have been placed")
    }
}

impl Error for NoDominoesError {}

/// A planned domino transform: where to spawn it and which way it
/// faces. Produced by [`PlacementSession::try_place`], consumed by the
/// scene side that spawns the actual body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DominoPlacement {
    pub position: Vec3,
    /// Rotation around +Y, in radians.
    pub yaw: f32,
}

impl DominoPlacement {
    /// World-space direction of the domino's local +X axis: the
    /// direction the trail was travelling when this domino was placed.
    pub fn facing(&self) -> Vec3 {
        yaw_facing(self.yaw)
    }
}

/// A committed domino: its placement plus the handle of the rigid body
/// the physics world owns for it.
#[derive(Clone, Copy, Debug)]
pub struct PlacedDomino {
    pub position: Vec3,
    pub yaw: f32,
    pub body: Entity,
}

impl PlacedDomino {
    /// Direction a topple impulse pushes this domino.
    pub fn facing(&self) -> Vec3 {
        yaw_facing(self.yaw)
    }
}

/// Ordered state of the current trail.
///
/// Holds plain data only: bodies and visuals belong to the ECS, the
/// session keeps their handles and hands them back on [`clear`] so the
/// caller can release them.
///
/// [`clear`]: PlacementSession::clear
#[derive(Resource, Debug)]
pub struct PlacementSession {
    min_spacing: f32,
    last_anchor: Option<Vec3>,
    dominoes: Vec<PlacedDomino>,
}

impl Default for PlacementSession {
    fn default() -> Self {
        Self::new(MIN_DOMINO_SPACING)
    }
}

impl PlacementSession {
    pub fn new(min_spacing: f32) -> Self {
        Self {
            min_spacing,
            last_anchor: None,
            dominoes: Vec::new(),
        }
    }

    /// Feed one hit-tested drag sample.
    ///
    /// The first sample after construction or a clear only anchors the
    /// path and never places anything. Later samples place a domino
    /// when they have moved at least `min_spacing` from the previous
    /// anchor in the (x,z) plane; closer samples are dropped without
    /// touching any state.
    pub fn try_place(&mut self, raw: Vec3) -> Option<DominoPlacement> {
        let Some(last) = self.last_anchor else {
            self.last_anchor = Some(raw);
            return None;
        };

        if planar_distance(last, raw) < self.min_spacing {
            return None;
        }

        self.last_anchor = Some(raw);
        Some(DominoPlacement {
            position: raw + Vec3::Y * DOMINO_LIFT,
            yaw: facing_yaw(last, raw),
        })
    }

    /// Record the spawned body for a placement returned by
    /// [`try_place`](Self::try_place).
    pub fn commit(&mut self, placement: DominoPlacement, body: Entity) {
        self.dominoes.push(PlacedDomino {
            position: placement.position,
            yaw: placement.yaw,
            body,
        });
    }

    /// Drop the whole trail, handing back every body handle so the
    /// caller can despawn them. Safe on an empty trail, and the next
    /// sample afterwards anchors a fresh path.
    pub fn clear(&mut self) -> Vec<Entity> {
        self.last_anchor = None;
        self.dominoes.drain(..).map(|d| d.body).collect()
    }

    /// The first domino of the trail, the one a topple impulse goes to.
    pub fn first(&self) -> Result<&PlacedDomino, NoDominoesError> {
        self.dominoes.first().ok_or(NoDominoesError)
    }

    pub fn dominoes(&self) -> &[PlacedDomino] {
        &self.dominoes
    }

    pub fn len(&self) -> usize {
        self.dominoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dominoes.is_empty()
    }

    pub fn last_anchor(&self) -> Option<Vec3> {
        self.last_anchor
    }
}

/// Planar (x,z) distance between two world points. Height is ignored:
/// placement is constrained to a horizontal surface.
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    (b.x - a.x).hypot(b.z - a.z)
}

/// Yaw that turns a domino's local +X toward the travel direction from
/// `previous` to `current`, projected onto the (x,z) plane.
pub fn facing_yaw(previous: Vec3, current: Vec3) -> f32 {
    -(current.z - previous.z).atan2(current.x - previous.x)
}

fn yaw_facing(yaw: f32) -> Vec3 {
    // Quat::from_rotation_y(yaw) * Vec3::X, without the quaternion.
    Vec3::new(yaw.cos(), 0.0, -yaw.sin())
}
