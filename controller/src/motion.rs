use nalgebra as na;

use crate::{
    collision::{Quat, Vec3},
    config::MovementConfig,
    input::InputSnapshot,
};

/// Output of a single `advance()` step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Advance {
    /// Candidate camera position before collision (world space).
    pub tentative: Vec3,
    /// Velocity after damping, gravity, input and jump, in the look frame.
    pub velocity: Vec3,
}

/// Owns the player's velocity and turns held keys plus elapsed time into a
/// tentative displacement.
///
/// Velocity lives in the look frame: `x` is rightward, `y` is up, `z` is
/// forward along the current yaw. It persists across frames; the collision
/// resolver may zero components and hands the result back through
/// [`MotionIntegrator::set_velocity`].
#[derive(Clone, Copy, Debug)]
pub struct MotionIntegrator {
    velocity: Vec3,
    damping: f32,
    gravity: f32,
    acceleration: f32,
    jump_impulse: f32,
}

impl MotionIntegrator {
    pub fn new(damping: f32, gravity: f32, acceleration: f32, jump_impulse: f32) -> Self {
        Self {
            velocity: Vec3::zeros(),
            damping,
            gravity,
            acceleration,
            jump_impulse,
        }
    }

    pub fn from_config(config: &MovementConfig) -> Self {
        Self::new(
            config.damping,
            config.gravity,
            config.acceleration,
            config.jump_impulse,
        )
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Integrate one frame.
    ///
    /// Behavior
    /// - Horizontal damping: `v -= v * damping * dt` per component. The
    ///   decay is capped at 100% so a long frame stops the player instead of
    ///   reversing them. Velocity glides towards zero and is never snapped.
    /// - Gravity: `v.y -= gravity * dt`, always. Contact code cancels it.
    /// - Input: the normalized key direction accelerates only the axes with
    ///   a non-neutral key pair.
    /// - Jump: `jump` adds the impulse to `v.y` once. Eligibility is the
    ///   caller's business.
    /// - Tentative position: `position + look(yaw) * v * dt`.
    pub fn advance(
        &mut self,
        input: &InputSnapshot,
        dt_seconds: f32,
        jump: bool,
        position: Vec3,
        yaw: f32,
    ) -> Advance {
        let dt = dt_seconds.max(0.0);
        let v = &mut self.velocity;

        let decay = (self.damping * dt).min(1.0);
        v.x -= v.x * decay;
        v.z -= v.z * decay;

        v.y -= self.gravity * dt;

        let dir = input.direction();
        if dir.x != 0.0 {
            v.x += dir.x * self.acceleration * dt;
        }
        if dir.y != 0.0 {
            v.z += dir.y * self.acceleration * dt;
        }

        if jump {
            v.y += self.jump_impulse;
            log::debug!("jump: vertical velocity now {:.1}", v.y);
        }

        Advance {
            tentative: position + look_to_world(*v, yaw) * dt,
            velocity: *v,
        }
    }
}

/// Yaw-only rotation about +Y. Yaw 0 looks down -Z.
#[inline]
pub fn look_rotation(yaw: f32) -> Quat {
    na::UnitQuaternion::from_axis_angle(&na::Vector3::y_axis(), yaw)
}

/// Rotate a look-frame vector (`x` right, `y` up, `z` forward) into world
/// space.
#[inline]
pub fn look_to_world(local: Vec3, yaw: f32) -> Vec3 {
    look_rotation(yaw) * Vec3::new(local.x, local.y, -local.z)
}
