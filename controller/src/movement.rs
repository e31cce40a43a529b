use std::time::Duration;

use crate::{
    clock::{FrameClock, FrameDelta},
    collision::{Collidable, CollisionResolver, Contact, Vec3},
    config::MovementConfig,
    constants::DIST_EPS,
    error::ConfigError,
    input::{InputState, KeyEdge},
    motion::MotionIntegrator,
};

/// Vertical state of the player. There is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalState {
    Grounded,
    Airborne,
}

/// Camera position plus the yaw supplied by the external look component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    /// Radians about +Y; 0 looks down -Z.
    pub yaw: f32,
}

/// What one `tick` produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub pose: Pose,
    pub velocity: Vec3,
    pub grounded: bool,
    pub state: VerticalState,
    pub contact: Option<Contact>,
    pub delta: FrameDelta,
    /// The input gate was closed; nothing moved.
    pub paused: bool,
}

/// First-person movement core: input snapshot → integrate → resolve → pose.
///
/// The host feeds key edges as they arrive, opens or closes the input gate
/// (pointer lock), reports the yaw, and calls [`tick`](Self::tick) once per
/// rendered frame with a monotonically increasing timestamp and the frame's
/// collidables. The controller has no loop or timer of its own.
#[derive(Clone, Debug)]
pub struct MovementController {
    config: MovementConfig,
    input: InputState,
    integrator: MotionIntegrator,
    resolver: CollisionResolver,
    clock: FrameClock,
    pose: Pose,
    state: VerticalState,
    last_contact: Option<Contact>,
    input_active: bool,
}

impl MovementController {
    /// Build a controller at `config.spawn`. The input gate starts closed.
    pub fn new(config: MovementConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    pub fn with_defaults() -> Self {
        Self::build(MovementConfig::default())
    }

    fn build(config: MovementConfig) -> Self {
        let grounded = config.spawn.y <= config.ground_level + DIST_EPS;
        let spawn = Vec3::new(
            config.spawn.x,
            config.spawn.y.max(config.ground_level),
            config.spawn.z,
        );

        Self {
            input: InputState {
                can_jump: grounded,
                ..Default::default()
            },
            integrator: MotionIntegrator::from_config(&config),
            resolver: CollisionResolver::from_config(&config),
            clock: FrameClock::new(config.max_frame_delta),
            pose: Pose {
                position: spawn,
                yaw: 0.0,
            },
            state: if grounded {
                VerticalState::Grounded
            } else {
                VerticalState::Airborne
            },
            last_contact: None,
            input_active: false,
            config,
        }
    }

    pub fn apply_key(&mut self, edge: KeyEdge) {
        self.input.apply(edge);
    }

    /// Apply a raw key code (`"KeyW"`, `"Space"`, ...). Unknown codes are
    /// ignored and return false.
    pub fn apply_key_code(&mut self, code: &str, pressed: bool) -> bool {
        self.input.apply_code(code, pressed)
    }

    /// Open or close the input gate. While closed, frames are skipped
    /// entirely; velocity and any pending jump press are kept for when it
    /// reopens.
    pub fn set_input_active(&mut self, active: bool) {
        if self.input_active != active {
            log::debug!(
                "input gate {}",
                if active { "opened" } else { "closed" }
            );
        }
        self.input_active = active;
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.pose.yaw = yaw;
    }

    /// Move the player without physics and stop all motion, e.g. to
    /// respawn. The position is kept at or above the ground plane; the
    /// next frame decides whether it is grounded.
    pub fn teleport(&mut self, position: Vec3) {
        self.pose.position = Vec3::new(
            position.x,
            position.y.max(self.config.ground_level),
            position.z,
        );
        self.integrator.set_velocity(Vec3::zeros());
    }

    /// Run one frame.
    pub fn tick<I>(&mut self, timestamp: Duration, collidables: I) -> FrameOutput
    where
        I: IntoIterator,
        I::IntoIter: Clone,
        I::Item: Collidable,
    {
        let delta = self.clock.advance(timestamp);
        if !self.input_active {
            return self.output(delta, true);
        }

        let snapshot = self.input.snapshot();
        let jump = snapshot.jump && self.input.can_jump;
        if jump {
            self.input.can_jump = false;
        } else if snapshot.jump {
            log::debug!("jump ignored: not grounded");
        }

        let old = self.pose.position;
        let advance =
            self.integrator
                .advance(&snapshot, delta.seconds, jump, old, self.pose.yaw);

        let resolution = self.resolver.resolve(
            old,
            advance.tentative,
            advance.velocity,
            collidables,
            self.config.ground_level,
        );

        log::trace!(
            "resolved {:?} -> {:?} ({:?})",
            advance.tentative,
            resolution.position,
            resolution.contact
        );
        self.integrator.set_velocity(resolution.velocity);
        self.pose.position = resolution.position;
        self.input.can_jump = resolution.grounded;
        self.last_contact = resolution.contact;

        let state = if resolution.grounded {
            VerticalState::Grounded
        } else {
            VerticalState::Airborne
        };
        if state != self.state {
            log::debug!(
                "{:?} -> {:?} at y = {:.2}",
                self.state,
                state,
                resolution.position.y
            );
            self.state = state;
        }

        self.output(delta, false)
    }

    fn output(&self, delta: FrameDelta, paused: bool) -> FrameOutput {
        FrameOutput {
            pose: self.pose,
            velocity: self.integrator.velocity(),
            grounded: self.state == VerticalState::Grounded,
            state: self.state,
            contact: if paused { None } else { self.last_contact },
            delta,
            paused,
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.integrator.velocity()
    }

    pub fn state(&self) -> VerticalState {
        self.state
    }

    pub fn can_jump(&self) -> bool {
        self.input.can_jump
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_active(&self) -> bool {
        self.input_active
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }
}
