use nalgebra as na;
use rapier3d::parry::{
    bounding_volume::{Aabb, BoundingVolume},
    shape as pshape,
};

use super::types::{Collidable, StaticShape, Transform, Vec3};

impl Collidable for StaticShape {
    fn world_aabb(&self) -> Aabb {
        match *self {
            StaticShape::Cuboid {
                half_extents,
                transform,
            } => cuboid_aabb_world(half_extents, transform),
            StaticShape::Sphere { radius, transform } => sphere_aabb_world(radius, transform),
            StaticShape::Capsule {
                radius,
                half_height,
                transform,
            } => capsule_aabb_world(radius, half_height, transform),
        }
    }
}

/// Compute the AABB for a world-space cuboid.
fn cuboid_aabb_world(half_extents: Vec3, transform: Transform) -> Aabb {
    let cuboid = pshape::Cuboid::new(half_extents.abs());
    cuboid.aabb(&transform.iso())
}

fn sphere_aabb_world(radius: f32, transform: Transform) -> Aabb {
    let ball = pshape::Ball::new(radius.abs());
    let iso = Transform::from_translation(transform.translation).iso();
    ball.aabb(&iso)
}

fn capsule_aabb_world(radius: f32, half_height: f32, transform: Transform) -> Aabb {
    let capsule = pshape::Capsule::new_y(half_height.abs(), radius.abs());
    capsule.aabb(&transform.iso())
}

/// The player's box: fixed half-extents centered on the camera position.
#[inline]
pub fn player_volume(center: Vec3, half_extents: Vec3) -> Aabb {
    Aabb::from_half_extents(na::Point3::from(center), half_extents)
}

/// Index of the first collidable, in iteration order, whose box intersects
/// `volume`. Touching faces count as intersecting.
///
/// With a `floor`, boxes whose top is at or below it are underfoot rather
/// than in the way and are ignored.
pub fn first_overlap<I>(volume: &Aabb, collidables: I, floor: Option<f32>) -> Option<usize>
where
    I: IntoIterator,
    I::Item: Collidable,
{
    collidables
        .into_iter()
        .map(|c| c.world_aabb())
        .enumerate()
        .filter(|(_, aabb)| floor.is_none_or(|y| aabb.maxs.y > y))
        .find(|(_, aabb)| aabb.intersects(volume))
        .map(|(i, _)| i)
}
