use nalgebra as na;
use rapier3d::parry::query::{Ray, RayCast};

use super::types::{Collidable, Vec3};
use crate::config::SurfaceProbe;

/// Keep the camera at or above the ground plane.
///
/// Returns true when the position was below `ground_level`, or exactly on
/// it without rising; the position is placed on the plane and vertical
/// velocity is zeroed.
#[inline]
pub fn clamp_to_ground(position: &mut Vec3, velocity: &mut Vec3, ground_level: f32) -> bool {
    let resting = position.y == ground_level && velocity.y <= 0.0;
    if position.y < ground_level || resting {
        position.y = ground_level;
        velocity.y = 0.0;
        return true;
    }
    false
}

/// A top face found under the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHit {
    /// Index of the supporting collidable, in iteration order.
    pub index: usize,
    /// World height of the top face.
    pub surface_y: f32,
    /// Distance travelled by the probe ray before hitting.
    pub distance: f32,
}

/// Find the top face the player's feet would rest on at `tentative`.
///
/// Every collidable whose XZ extent touches the player's footprint is
/// probed with a ray straight down, cast from the footprint point nearest
/// the box. The ray starts at the higher of `old.y` and `tentative.y` (plus
/// `probe.origin_lift`) and stops `probe.reach` below the tentative feet.
/// Boxes whose top is above the ray origin are skipped: being inside a box
/// is not standing on it. The highest top wins; ties go to the earlier
/// collidable.
pub fn probe_surface<I>(
    old: Vec3,
    tentative: Vec3,
    half_extents: Vec3,
    probe: &SurfaceProbe,
    collidables: I,
) -> Option<SurfaceHit>
where
    I: IntoIterator,
    I::Item: Collidable,
{
    let origin_y = old.y.max(tentative.y) + probe.origin_lift.max(0.0);
    let lowest = tentative.y - half_extents.y - probe.reach.max(0.0);
    let max_toi = origin_y - lowest;
    if max_toi <= 0.0 {
        return None;
    }

    collidables
        .into_iter()
        .enumerate()
        .filter_map(|(index, c)| {
            let aabb = c.world_aabb();
            if aabb.maxs.y > origin_y {
                return None;
            }
            let x = tentative.x.clamp(aabb.mins.x, aabb.maxs.x);
            let z = tentative.z.clamp(aabb.mins.z, aabb.maxs.z);
            if (x - tentative.x).abs() > half_extents.x || (z - tentative.z).abs() > half_extents.z
            {
                return None;
            }

            let ray = Ray::new(na::Point3::new(x, origin_y, z), -Vec3::y());
            aabb.cast_local_ray(&ray, max_toi, true)
                .map(|toi| SurfaceHit {
                    index,
                    surface_y: origin_y - toi,
                    distance: toi,
                })
        })
        .fold(None, |best: Option<SurfaceHit>, hit| match best {
            Some(b) if b.surface_y >= hit.surface_y => Some(b),
            _ => Some(hit),
        })
}
