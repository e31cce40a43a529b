/*!
Runtime tuning for the movement core.

[`MovementConfig::default`] is the combined policy used by the room demo
with a standing probe on top. The two named presets reproduce the two
shipped variants, which only differ in collision policy and ground height.
*/

use crate::{
    collision::Vec3,
    constants::{
        DAMPING_PER_SECOND, GRAVITY, GROUND_LEVEL, JUMP_IMPULSE, MAX_FRAME_DELTA,
        MOVE_ACCELERATION, PLAYER_HALF_HEIGHT, PLAYER_HALF_WIDTH, SURFACE_PROBE_REACH,
    },
    error::ConfigError,
};

/// How static collidables constrain a tentative move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollisionPolicy {
    /// Revert the whole frame's displacement when the player volume overlaps
    /// any collidable. No sliding, no standing on tops.
    OverlapRevert,
    /// Stand on collidable tops found by a downward ray. Never blocks
    /// horizontal motion.
    SurfaceRay,
    /// Ray for standing surfaces, overlap revert for everything else.
    #[default]
    Combined,
}

impl CollisionPolicy {
    #[inline]
    pub fn reverts_on_overlap(self) -> bool {
        matches!(self, Self::OverlapRevert | Self::Combined)
    }

    #[inline]
    pub fn probes_surfaces(self) -> bool {
        matches!(self, Self::SurfaceRay | Self::Combined)
    }
}

/// Downward ray used to find standing surfaces.
///
/// The ray starts `origin_lift` above the higher of the old and tentative
/// camera positions, so a fast fall cannot skip a top face between frames,
/// and ends `reach` below the tentative feet.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceProbe {
    pub origin_lift: f32,
    pub reach: f32,
    /// Gap kept between the feet and a surface after snapping onto it.
    pub hover_height: f32,
}

impl Default for SurfaceProbe {
    fn default() -> Self {
        Self {
            origin_lift: 0.0,
            reach: SURFACE_PROBE_REACH,
            hover_height: 0.0,
        }
    }
}

/// All tunables of the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementConfig {
    /// Horizontal damping rate (1/s).
    pub damping: f32,
    /// Gravity magnitude (units/s²).
    pub gravity: f32,
    /// Acceleration from held movement keys (units/s²).
    pub acceleration: f32,
    /// Vertical velocity added by a jump (units/s).
    pub jump_impulse: f32,
    /// Lowest camera height; the ground plane.
    pub ground_level: f32,
    /// Half-extents of the player volume, centered on the camera.
    pub player_half_extents: Vec3,
    /// Frame deltas above this are capped (seconds).
    pub max_frame_delta: f32,
    pub policy: CollisionPolicy,
    pub probe: SurfaceProbe,
    /// Initial camera position.
    pub spawn: Vec3,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            damping: DAMPING_PER_SECOND,
            gravity: GRAVITY,
            acceleration: MOVE_ACCELERATION,
            jump_impulse: JUMP_IMPULSE,
            ground_level: GROUND_LEVEL,
            player_half_extents: Vec3::new(PLAYER_HALF_WIDTH, PLAYER_HALF_HEIGHT, PLAYER_HALF_WIDTH),
            max_frame_delta: MAX_FRAME_DELTA,
            policy: CollisionPolicy::default(),
            probe: SurfaceProbe::default(),
            spawn: Vec3::new(0.0, GROUND_LEVEL, 0.0),
        }
    }
}

impl MovementConfig {
    /// Closed room with solid obstacles: ground at 20, any overlap reverts.
    pub fn walled_room() -> Self {
        Self {
            policy: CollisionPolicy::OverlapRevert,
            ..Default::default()
        }
    }

    /// Open floor with boxes to climb on: ground at 0, ray standing only.
    pub fn open_floor() -> Self {
        Self {
            ground_level: 0.0,
            policy: CollisionPolicy::SurfaceRay,
            spawn: Vec3::zeros(),
            ..Default::default()
        }
    }

    /// Same tuning, different ground plane. The spawn height follows.
    pub fn with_ground_level(mut self, ground_level: f32) -> Self {
        self.ground_level = ground_level;
        self.spawn.y = ground_level;
        self
    }

    pub fn with_policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check every field; the first offending one is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("damping", self.damping)?;
        non_negative("gravity", self.gravity)?;
        non_negative("acceleration", self.acceleration)?;
        non_negative("jump_impulse", self.jump_impulse)?;
        finite("ground_level", self.ground_level)?;
        positive("player_half_extents.x", self.player_half_extents.x)?;
        positive("player_half_extents.y", self.player_half_extents.y)?;
        positive("player_half_extents.z", self.player_half_extents.z)?;
        positive("max_frame_delta", self.max_frame_delta)?;
        non_negative("probe.origin_lift", self.probe.origin_lift)?;
        positive("probe.reach", self.probe.reach)?;
        non_negative("probe.hover_height", self.probe.hover_height)?;
        finite("spawn.x", self.spawn.x)?;
        finite("spawn.y", self.spawn.y)?;
        finite("spawn.z", self.spawn.z)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite(field))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if finite(field, value)? < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(value)
}

fn positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if finite(field, value)? <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(MovementConfig::default().validate(), Ok(()));
        assert_eq!(MovementConfig::walled_room().validate(), Ok(()));
        assert_eq!(MovementConfig::open_floor().validate(), Ok(()));
    }

    #[test]
    fn presets_differ_only_in_policy_and_ground() {
        let room = MovementConfig::walled_room();
        let floor = MovementConfig::open_floor();

        assert_eq!(room.ground_level, 20.0);
        assert_eq!(floor.ground_level, 0.0);
        assert!(room.policy.reverts_on_overlap() && !room.policy.probes_surfaces());
        assert!(floor.policy.probes_surfaces() && !floor.policy.reverts_on_overlap());
        assert_eq!(room.jump_impulse, floor.jump_impulse);
        assert_eq!(room.gravity, floor.gravity);
    }

    #[test]
    fn combined_policy_does_both() {
        let p = CollisionPolicy::Combined;
        assert!(p.reverts_on_overlap());
        assert!(p.probes_surfaces());
    }

    #[test]
    fn with_ground_level_moves_spawn() {
        let config = MovementConfig::default().with_ground_level(2.0);
        assert_eq!(config.ground_level, 2.0);
        assert_eq!(config.spawn.y, 2.0);
    }

    #[test]
    fn rejects_negative_gravity() {
        let config = MovementConfig {
            gravity: -9.8,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "gravity",
                value: -9.8
            })
        );
    }

    #[test]
    fn rejects_zero_frame_cap_and_flat_player() {
        let config = MovementConfig {
            max_frame_delta: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "max_frame_delta",
                ..
            })
        ));

        let mut config = MovementConfig::default();
        config.player_half_extents.y = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "player_half_extents.y",
                ..
            })
        ));
    }

    #[test]
    fn rejects_nan() {
        let config = MovementConfig {
            damping: f32::NAN,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NotFinite("damping")));
    }
}
