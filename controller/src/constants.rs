/*!
Default tuning for the movement core.

Units are scene units (the demo rooms use roughly centimetre-scale boxes),
time is in seconds. Everything here can be overridden through
[`MovementConfig`](crate::MovementConfig).
*/

/// Exponential decay rate of horizontal velocity (1/s).
///
/// Applied as `v -= v * DAMPING_PER_SECOND * dt`.
pub const DAMPING_PER_SECOND: f32 = 10.0;

/// Downward acceleration (units/s², positive magnitude).
pub const GRAVITY: f32 = 980.0;

/// Horizontal acceleration from held movement keys (units/s²).
pub const MOVE_ACCELERATION: f32 = 400.0;

/// Vertical velocity added by a jump (units/s).
pub const JUMP_IMPULSE: f32 = 350.0;

/// Height of the ground plane, measured at the camera, not the feet.
pub const GROUND_LEVEL: f32 = 20.0;

/// Half-width of the player volume on X and Z.
pub const PLAYER_HALF_WIDTH: f32 = 0.5;

/// Half-height of the player volume. The camera sits at the volume's center.
pub const PLAYER_HALF_HEIGHT: f32 = 2.0;

/// Largest frame delta the integrator will ever see (seconds).
///
/// Six frames at 60 Hz. A stalled host frame is capped to this instead of
/// producing one huge step through the floor or a wall.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// How far below the feet the surface probe still counts as standing.
pub const SURFACE_PROBE_REACH: f32 = 0.25;

/// Practical small distance for comparisons.
pub const DIST_EPS: f32 = 1.0e-5;
