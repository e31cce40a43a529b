use super::{
    broad::{first_overlap, player_volume},
    ground::{clamp_to_ground, probe_surface},
    types::{Collidable, Vec3},
};
use crate::{
    config::{CollisionPolicy, MovementConfig, SurfaceProbe},
    constants::DIST_EPS,
};

/// What decided the outcome of a resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// Landed on or rested against the ground plane.
    Ground,
    /// Standing on the top face of collidable `index`.
    Surface { index: usize },
    /// The move was reverted because the player overlapped collidable `index`.
    Blocked { index: usize },
}

/// Result of validating one tentative move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    /// Authoritative camera position for this frame.
    pub position: Vec3,
    /// Velocity after contact adjustments.
    pub velocity: Vec3,
    /// Resting on the ground plane or a collidable top; jumping is allowed.
    pub grounded: bool,
    pub contact: Option<Contact>,
}

/// Validates tentative moves against the ground plane and static scenery.
///
/// Order of checks:
/// 1. Ground plane: below `ground_level` (or resting on it) is clamped onto it, vertical
///    velocity zeroed.
/// 2. Standing surfaces (ray policies, only while not rising): the highest
///    top the downward probe reaches under the player's footprint supports
///    the player. Feet are placed on it and vertical velocity is clamped to
///    `>= 0`.
/// 3. Obstruction (overlap policies): if the player volume intersects a
///    collidable that rises above the supported feet, the whole move is
///    reverted to `old` and both horizontal velocity components are zeroed.
///    No sliding, no axis separation, first hit wins.
#[derive(Clone, Copy, Debug)]
pub struct CollisionResolver {
    pub policy: CollisionPolicy,
    pub player_half_extents: Vec3,
    pub probe: SurfaceProbe,
}

impl CollisionResolver {
    pub fn new(policy: CollisionPolicy, player_half_extents: Vec3, probe: SurfaceProbe) -> Self {
        Self {
            policy,
            player_half_extents,
            probe,
        }
    }

    pub fn from_config(config: &MovementConfig) -> Self {
        Self::new(config.policy, config.player_half_extents, config.probe)
    }

    /// Resolve one frame. Total: an empty or odd collidable list just means
    /// free movement.
    pub fn resolve<I>(
        &self,
        old: Vec3,
        tentative: Vec3,
        velocity: Vec3,
        collidables: I,
        ground_level: f32,
    ) -> Resolution
    where
        I: IntoIterator,
        I::IntoIter: Clone,
        I::Item: Collidable,
    {
        let collidables = collidables.into_iter();
        let mut position = tentative;
        let mut velocity = velocity;
        let mut contact = None;

        let mut grounded = clamp_to_ground(&mut position, &mut velocity, ground_level);
        if grounded {
            contact = Some(Contact::Ground);
        }

        let half_height = self.player_half_extents.y;
        let mut floor = None;
        if self.policy.probes_surfaces() && velocity.y <= 0.0 {
            if let Some(hit) = probe_surface(
                old,
                position,
                self.player_half_extents,
                &self.probe,
                collidables.clone(),
            ) {
                position.y =
                    (hit.surface_y + half_height + self.probe.hover_height).max(ground_level);
                velocity.y = velocity.y.max(0.0);
                grounded = true;
                floor = Some(position.y - half_height + DIST_EPS);
                contact = Some(Contact::Surface { index: hit.index });
            }
        }

        if self.policy.reverts_on_overlap() {
            let volume = player_volume(position, self.player_half_extents);
            if let Some(index) = first_overlap(&volume, collidables, floor) {
                log::debug!("move blocked by collidable {index}, reverting");
                position = old;
                position.y = position.y.max(ground_level);
                velocity.x = 0.0;
                velocity.z = 0.0;
                contact = Some(Contact::Blocked { index });
            }
        }

        Resolution {
            position,
            velocity,
            grounded,
            contact,
        }
    }
}
