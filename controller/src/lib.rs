/*!
Minimal first-person movement core.

Converts held keys and elapsed frame time into a moving camera position,
with gravity, a ground plane, jumping, and coarse axis-aligned collision
against static scenery. Rendering, scene setup and pointer-lock wiring
belong to the host; the host drives [`MovementController::tick`] once per
frame.

```no_run
use std::time::Duration;
use controller::{MovementController, MovementConfig, cuboid_at, Vec3};

let mut player = MovementController::new(MovementConfig::default())?;
let scenery = [cuboid_at(Vec3::new(0.0, 2.5, -10.0), Vec3::repeat(2.5))];

player.set_input_active(true);
player.apply_key_code("KeyW", true);
let frame = player.tick(Duration::from_millis(16), &scenery);
println!("camera at {:?}", frame.pose.position);
# Ok::<(), controller::ConfigError>(())
```
*/

pub mod clock;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod motion;
pub mod movement;

pub use clock::{FrameClock, FrameDelta};
pub use collision::{
    Aabb, Collidable, CollisionResolver, Contact, Resolution, StaticShape, Transform, Vec3,
    cuboid_at, cuboid_from_pose,
};
pub use config::{CollisionPolicy, MovementConfig, SurfaceProbe};
pub use error::ConfigError;
pub use input::{InputSnapshot, InputState, KeyEdge, LogicalKey};
pub use motion::{Advance, MotionIntegrator, look_rotation, look_to_world};
pub use movement::{FrameOutput, MovementController, Pose, VerticalState};
