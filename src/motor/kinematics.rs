// Omniwheel inverse kinematics for an arbitrary wheel layout
// Converts a platform heading + speed into per-wheel speeds, using each
// motor's mounting angle, wheel radius and how many motors share its axis.

use super::info::{MotorInfo, Speed};
use crate::error::{Error, Result};
use crate::math::{cos_degrees, deg_to_rad};

fn check_wheel(info: &MotorInfo) -> Result<()> {
    if info.wheel_radius_m == 0.0 {
        return Err(Error::ZeroDivision(format!(
            "wheel radius of motor at {}° is zero",
            info.angle_deg
        )));
    }
    Ok(())
}

/// Wheel speed one motor needs to contribute for the platform to move at
/// `speed` towards `angle_deg`
///
/// The projection of the platform velocity onto the wheel axis is shared
/// between every motor on that axis, then turned into wheel angular speed
/// through the wheel radius.
///
/// # Errors
/// * `InvalidArgument` - `info.parallel_axes` is zero
/// * `OutOfRange` - `speed` is outside `info.interface_speed_range`
/// * `ZeroDivision` - `info.wheel_radius_m` is zero
pub fn calculate_motor_linear_speed(info: &MotorInfo, angle_deg: f64, speed: Speed) -> Result<Speed> {
    if info.parallel_axes == 0 {
        return Err(Error::invalid_argument(
            "amount of motors with parallel movement axes cannot be zero in motor config",
        ));
    }

    if !info.interface_speed_range.contains(speed) {
        return Err(Error::OutOfRange(format!(
            "speed {} is not in the motor interface speed range [{}, {}]",
            speed, info.interface_speed_range.lowest, info.interface_speed_range.highest
        )));
    }

    check_wheel(info)?;

    Ok(cos_degrees(angle_deg - info.angle_deg) * speed
        / info.parallel_axes as f64
        / info.wheel_radius_m)
}

/// `calculate_motor_linear_speed` for every motor, in config order
///
/// The first motor that fails aborts the whole calculation.
pub fn calculate_platform_linear_speeds(
    config: &[MotorInfo],
    angle_deg: f64,
    speed: Speed,
) -> Result<Vec<Speed>> {
    config
        .iter()
        .map(|info| calculate_motor_linear_speed(info, angle_deg, speed))
        .collect()
}

/// Wheel speed one motor needs for the platform to spin in place at
/// `omega_deg_s` (positive = counter-clockwise)
pub fn calculate_motor_rotation_speed(info: &MotorInfo, omega_deg_s: f64) -> Result<Speed> {
    check_wheel(info)?;
    Ok(deg_to_rad(omega_deg_s) * info.distance_m / info.wheel_radius_m)
}

pub fn calculate_platform_rotation_speeds(config: &[MotorInfo], omega_deg_s: f64) -> Result<Vec<Speed>> {
    config
        .iter()
        .map(|info| calculate_motor_rotation_speed(info, omega_deg_s))
        .collect()
}
