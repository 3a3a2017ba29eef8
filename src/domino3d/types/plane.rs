//! Plane anchor types and the scripted tracker.
//!
//! Desktop stand-in for a platform plane tracker: horizontal surfaces
//! are "discovered" on a schedule and their extents grow over a few
//! seconds, delivered through the same added/updated message protocol
//! a real tracker would drive.

use bevy::prelude::*;
use std::collections::HashMap;

/// A tracked horizontal surface: persistent id, world-space center,
/// and (x,z) extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneAnchor {
    pub id: u32,
    pub center: Vec3,
    pub extent: Vec2,
}

/// Sent once when a new plane anchor is first detected.
#[derive(Message, Clone, Copy, Debug)]
pub struct PlaneAnchorAdded(pub PlaneAnchor);

/// Sent whenever a tracked anchor's extent changes.
#[derive(Message, Clone, Copy, Debug)]
pub struct PlaneAnchorUpdated(pub PlaneAnchor);

/// One surface the tracker will eventually discover.
#[derive(Clone, Copy, Debug)]
pub struct ScriptedPlane {
    pub center: Vec3,
    pub initial_extent: Vec2,
    pub target_extent: Vec2,
    /// Seconds after startup before the plane is announced.
    pub detect_after: f32,
    /// Extent growth in units per second once detected.
    pub growth_rate: f32,
}

#[derive(Clone, Copy, Debug)]
struct TrackedPlane {
    anchor: PlaneAnchor,
    target_extent: Vec2,
    growth_rate: f32,
}

/// Anchors reported by one tracker tick.
#[derive(Debug, Default)]
pub struct PlaneTrackerDelta {
    pub added: Vec<PlaneAnchor>,
    pub updated: Vec<PlaneAnchor>,
}

/// Scripted plane tracker. Configured once at startup; [`tick`] moves
/// time forward and reports which anchors appeared or changed.
///
/// [`tick`]: PlaneTracker::tick
#[derive(Resource, Debug)]
pub struct PlaneTracker {
    elapsed: f32,
    pending: Vec<ScriptedPlane>,
    tracked: Vec<TrackedPlane>,
    next_id: u32,
}

impl Default for PlaneTracker {
    /// The tabletop scene: the main floor plane is found quickly and
    /// grows out, a low bench off to the side shows up later.
    fn default() -> Self {
        Self::new(vec![
            ScriptedPlane {
                center: Vec3::ZERO,
                initial_extent: Vec2::new(0.4, 0.4),
                target_extent: Vec2::new(1.6, 1.2),
                detect_after: 0.5,
                growth_rate: 0.25,
            },
            ScriptedPlane {
                center: Vec3::new(1.1, 0.25, -0.3),
                initial_extent: Vec2::new(0.2, 0.2),
                target_extent: Vec2::new(0.5, 0.4),
                detect_after: 4.0,
                growth_rate: 0.15,
            },
        ])
    }
}

impl PlaneTracker {
    pub fn new(script: Vec<ScriptedPlane>) -> Self {
        Self {
            elapsed: 0.0,
            pending: script,
            tracked: Vec::new(),
            next_id: 0,
        }
    }

    /// Anchors currently being tracked, in detection order.
    pub fn anchors(&self) -> Vec<PlaneAnchor> {
        self.tracked.iter().map(|p| p.anchor).collect()
    }

    /// Advance the tracker by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> PlaneTrackerDelta {
        self.elapsed += dt;
        let mut delta = PlaneTrackerDelta::default();

        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].detect_after <= self.elapsed {
                let plan = self.pending.remove(i);
                let anchor = PlaneAnchor {
                    id: self.next_id,
                    center: plan.center,
                    extent: plan.initial_extent,
                };
                self.next_id += 1;
                self.tracked.push(TrackedPlane {
                    anchor,
                    target_extent: plan.target_extent,
                    growth_rate: plan.growth_rate,
                });
                delta.added.push(anchor);
            } else {
                i += 1;
            }
        }

        for plane in &mut self.tracked {
            if plane.anchor.extent != plane.target_extent {
                let step = plane.growth_rate * dt;
                let extent = plane.anchor.extent;
                plane.anchor.extent = Vec2::new(
                    (extent.x + step).min(plane.target_extent.x),
                    (extent.y + step).min(plane.target_extent.y),
                );
                delta.updated.push(plane.anchor);
            }
        }

        delta
    }
}

/// Map from anchor id to the entity visualizing it, the scene-side
/// bookkeeping for add/update messages.
#[derive(Resource, Debug, Default)]
pub struct DetectedPlanes {
    pub nodes: HashMap<u32, Entity>,
}
