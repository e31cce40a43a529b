/*!
Data types shared by the collision submodules.

No algorithms live here beyond trivial constructors. Anything that can hand
out a world-space axis-aligned box participates in collision through
[`Collidable`]; the resolver never looks at what the box came from.
*/

use nalgebra as na;
use rapier3d::parry::bounding_volume::Aabb;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;
pub type Iso = na::Isometry3<f32>;

/// Anything with a static world-space bounding box.
///
/// Boxes are queried every frame, so implementations may derive them from
/// the current pose of a scene object.
pub trait Collidable {
    fn world_aabb(&self) -> Aabb;
}

impl Collidable for Aabb {
    #[inline]
    fn world_aabb(&self) -> Aabb {
        *self
    }
}

impl<T: Collidable + ?Sized> Collidable for &T {
    #[inline]
    fn world_aabb(&self) -> Aabb {
        (**self).world_aabb()
    }
}

impl<T: Collidable + ?Sized> Collidable for Box<T> {
    #[inline]
    fn world_aabb(&self) -> Aabb {
        (**self).world_aabb()
    }
}

/// A rigid transform (isometry) in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Transform {
    #[inline]
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::identity())
    }

    /// Convert to nalgebra `Isometry3` for parry queries.
    #[inline]
    pub fn iso(&self) -> Iso {
        Iso::from_parts(na::Translation3::from(self.translation), self.rotation)
    }
}

/// Posed static scene shapes.
///
/// Collision only ever uses their world AABB, so a rotated cuboid blocks
/// the whole box that encloses it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StaticShape {
    Cuboid {
        /// Local-space half-extents (hx, hy, hz).
        half_extents: Vec3,
        transform: Transform,
    },
    Sphere {
        radius: f32,
        /// Translation used; rotation ignored.
        transform: Transform,
    },
    Capsule {
        radius: f32,
        /// Half of the cylinder length along the local +Y axis.
        half_height: f32,
        transform: Transform,
    },
}

/// Convenience: an axis-aligned cuboid, the common case for scenery boxes.
#[inline]
pub fn cuboid_at(center: Vec3, half_extents: Vec3) -> StaticShape {
    StaticShape::Cuboid {
        half_extents,
        transform: Transform::from_translation(center),
    }
}

/// Convenience: a cuboid with an arbitrary pose.
#[inline]
pub fn cuboid_from_pose(half_extents: Vec3, translation: Vec3, rotation: Quat) -> StaticShape {
    StaticShape::Cuboid {
        half_extents,
        transform: Transform::new(translation, rotation),
    }
}
