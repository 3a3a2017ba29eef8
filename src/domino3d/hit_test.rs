//! Cursor-ray hit-testing against tracked planes.
//!
//! The scene casts a ray from the camera through the cursor; this
//! module finds where that ray lands on a detected horizontal surface.
//! A miss is not an error, it just means no placement this frame.

use bevy::prelude::*;

use crate::domino3d::types::PlaneAnchor;

/// Nearest intersection of `ray` with any tracked plane rectangle, in
/// world coordinates. `None` when the ray misses every plane.
pub fn hit_test(ray: Ray3d, planes: &[PlaneAnchor]) -> Option<Vec3> {
    let mut best: Option<(f32, Vec3)> = None;

    for plane in planes {
        // Rays grazing parallel to the surface never land on it.
        if ray.direction.y.abs() < 1e-4 {
            continue;
        }

        let t = (plane.center.y - ray.origin.y) / ray.direction.y;
        if t < 0.0 {
            continue;
        }

        let point = ray.get_point(t);
        let half = plane.extent * 0.5;
        if (point.x - plane.center.x).abs() > half.x
            || (point.z - plane.center.z).abs() > half.y
        {
            continue;
        }

        if best.map_or(true, |(best_t, _)| t < best_t) {
            best = Some((t, point));
        }
    }

    best.map(|(_, point)| point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor(extent: Vec2) -> PlaneAnchor {
        PlaneAnchor {
            id: 0,
            center: Vec3::ZERO,
            extent,
        }
    }

    #[test]
    fn test_straight_down_hit() {
        let ray = Ray3d { origin: Vec3::new(0.2, 1.0, -0.1), direction: Dir3::NEG_Y };
        let hit = hit_test(ray, &[floor(Vec2::new(1.0, 1.0))]).unwrap();
        assert!((hit - Vec3::new(0.2, 0.0, -0.1)).length() < 1e-5);
    }

    #[test]
    fn test_miss_outside_extent() {
        let ray = Ray3d { origin: Vec3::new(2.0, 1.0, 0.0), direction: Dir3::NEG_Y };
        assert_eq!(hit_test(ray, &[floor(Vec2::new(1.0, 1.0))]), None);
    }

    #[test]
    fn test_miss_behind_ray() {
        // Plane above the origin, ray pointing down: t would be negative.
        let plane = PlaneAnchor {
            id: 0,
            center: Vec3::new(0.0, 2.0, 0.0),
            extent: Vec2::new(1.0, 1.0),
        };
        let ray = Ray3d { origin: Vec3::new(0.0, 1.0, 0.0), direction: Dir3::NEG_Y };
        assert_eq!(hit_test(ray, &[plane]), None);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let ray = Ray3d { origin: Vec3::new(0.0, 1.0, 0.0), direction: Dir3::X };
        assert_eq!(hit_test(ray, &[floor(Vec2::new(10.0, 10.0))]), None);
    }

    #[test]
    fn test_nearest_plane_wins() {
        let low = floor(Vec2::new(4.0, 4.0));
        let high = PlaneAnchor {
            id: 1,
            center: Vec3::new(0.0, 0.5, 0.0),
            extent: Vec2::new(4.0, 4.0),
        };
        let ray = Ray3d { origin: Vec3::new(0.0, 1.0, 0.0), direction: Dir3::NEG_Y };
        let hit = hit_test(ray, &[low, high]).unwrap();
        assert!((hit.y - 0.5).abs() < 1e-5);
    }
}
