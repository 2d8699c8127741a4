// Omnidirectional platform motor control
//
// Maps a platform heading + speed onto per-wheel motor commands, honoring
// each motor's mounting angle, wheel radius and native speed range.

pub mod config;
pub mod error;
pub mod math;
pub mod messages;
pub mod motor;
pub mod platform;
pub mod runtime;

pub use error::{Error, ErrorKind, Result};
pub use platform::Platform;
