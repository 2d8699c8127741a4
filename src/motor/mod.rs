// Motor layer of the omnidirectional platform
//
// Provides:
// - Static per-motor configuration (mounting geometry, speed ranges)
// - Generic speed control over an injectable raw backend
// - Omniwheel inverse kinematics (platform heading/speed -> wheel speeds)
// - An in-memory backend for running without hardware

mod controller;
mod info;
pub mod kinematics;
pub mod sim;
#[cfg(test)]
pub(crate) mod testing;

pub use controller::{Initialize, MotorBackend, MotorController, Port, SpeedController};
pub use info::{MotorInfo, Speed, SpeedRange};
pub use kinematics::{calculate_motor_linear_speed, calculate_platform_linear_speeds};
pub use sim::{SimError, SimulatedMotor};
