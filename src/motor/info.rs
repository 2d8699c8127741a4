// Static per-motor configuration

use serde::{Deserialize, Serialize};

use crate::math::Range;

/// Speed in either native or interface units, depending on context
pub type Speed = f64;

pub type SpeedRange = Range<Speed>;

fn one() -> usize {
    1
}

/// Mounting geometry and speed ranges of one wheel motor
///
/// `speed_range` is what the motor controller natively accepts (PWM duty,
/// RPM, ...); `interface_speed_range` is the unit the platform API speaks.
/// Both must be given in consistent units by whoever builds the config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorInfo {
    /// Mounting angle around the platform center (degrees)
    pub angle_deg: f64,
    /// Distance from platform center (meters)
    pub distance_m: f64,
    /// Wheel radius (meters)
    pub wheel_radius_m: f64,
    pub speed_range: SpeedRange,
    pub interface_speed_range: SpeedRange,
    #[serde(default)]
    pub reversed: bool,
    /// Number of motors driving along this motor's axis, itself included.
    /// Filled in by the platform's axis grouping.
    #[serde(default = "one")]
    pub parallel_axes: usize,
}

impl MotorInfo {
    pub fn new(
        angle_deg: f64,
        distance_m: f64,
        wheel_radius_m: f64,
        speed_range: SpeedRange,
        interface_speed_range: SpeedRange,
    ) -> Self {
        Self {
            angle_deg,
            distance_m,
            wheel_radius_m,
            speed_range,
            interface_speed_range,
            reversed: false,
            parallel_axes: 1,
        }
    }

    /// Same motor, mounted with its drive direction flipped
    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    /// Map `speed` from an arbitrary source range into the native speed range
    pub fn fit_speed(&self, speed: Speed, range: &SpeedRange) -> Speed {
        self.speed_range.map_value_from_range(speed, range)
    }
}

impl Default for MotorInfo {
    fn default() -> Self {
        Self::new(
            0.0,
            1.0,
            1.0,
            SpeedRange::default(),
            SpeedRange::default(),
        )
    }
}
