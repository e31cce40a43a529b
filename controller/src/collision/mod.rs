/*!
Collision root module.

Validates the integrator's tentative move against the ground plane and a
list of static axis-aligned boxes, using parry (through rapier3d) for the
box and ray queries. The code is split for clarity:

- types:    math aliases, posed static shapes, the `Collidable` capability
- broad:    world AABBs for shapes, the player volume, overlap search
- ground:   ground-plane clamp and the downward standing-surface probe
- resolver: the per-frame resolve combining the above under a policy
*/

pub mod broad;
pub mod ground;
pub mod resolver;
pub mod types;

// Re-export commonly used types and functions.
pub use broad::{first_overlap, player_volume};
pub use ground::{SurfaceHit, clamp_to_ground, probe_surface};
pub use resolver::{CollisionResolver, Contact, Resolution};
pub use types::{
    Collidable, Iso, Quat, StaticShape, Transform, Vec3, cuboid_at, cuboid_from_pose,
};

pub use rapier3d::parry::bounding_volume::Aabb;
