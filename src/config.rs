// Loop timing, port limits, platform configuration
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::math::Range;
use crate::motor::{MotorInfo, Port};

// Runtime loop frequency
pub const LOOP_HZ: u64 = 10;
pub const MIN_LOOP_PERIOD: Duration = Duration::from_micros(1);

// Connectors available on the motor shield
pub const DEFAULT_PORT_RANGE: Range<Port> = Range::new(1, 12);

// Decimal digits of mounting angle used when grouping parallel axes
pub const DEFAULT_AXIS_PRECISION: u32 = 0;

// Speed sweep (interface units)
pub const DEFAULT_SWEEP_LIMIT: f64 = 1500.0;
pub const DEFAULT_SWEEP_STEP: f64 = 10.0;

// Never zero: tokio's interval rejects a zero period
pub fn loop_period(hz: u64) -> Duration {
    Duration::from_secs_f64(1.0 / hz.max(1) as f64).max(MIN_LOOP_PERIOD)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read the configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot parse the configuration file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything needed to build and start a platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub precision: u32,
    /// Port of each motor, index-aligned with `motors`
    pub ports: Vec<Port>,
    pub motors: Vec<MotorInfo>,
}

impl PlatformConfig {
    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.motors.is_empty() {
            return Err(ConfigError::Invalid("no motors configured".to_string()));
        }
        if self.ports.len() != self.motors.len() {
            return Err(ConfigError::Invalid(format!(
                "{} ports given for {} motors",
                self.ports.len(),
                self.motors.len()
            )));
        }
        for (i, motor) in self.motors.iter().enumerate() {
            if motor.wheel_radius_m <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "motor {} has non-positive wheel radius {}",
                    i, motor.wheel_radius_m
                )));
            }
            if !motor.speed_range.is_ordered() || !motor.interface_speed_range.is_ordered() {
                return Err(ConfigError::Invalid(format!(
                    "motor {} has a speed range with lowest above highest",
                    i
                )));
            }
        }
        Ok(())
    }
}

impl Default for PlatformConfig {
    /// Four-wheel X drive on shield ports 1-4
    fn default() -> Self {
        let native = Range::new(-1500.0, 1500.0);
        let interface = Range::new(-1500.0, 1500.0);
        let motor = |angle| MotorInfo::new(angle, 0.15, 0.03, native, interface);

        Self {
            precision: DEFAULT_AXIS_PRECISION,
            ports: vec![1, 2, 3, 4],
            motors: vec![motor(-90.0), motor(0.0), motor(90.0).reversed(), motor(180.0)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PlatformConfig::default();
        config.validate().unwrap();
        assert_eq!(config.motors.len(), 4);
        assert!(config.motors[2].reversed);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "precision": 1,
            "ports": [1, 5],
            "motors": [
                {
                    "angle_deg": 0.0, "distance_m": 0.1, "wheel_radius_m": 0.03,
                    "speed_range": { "lowest": -255.0, "highest": 255.0 },
                    "interface_speed_range": { "lowest": -1.0, "highest": 1.0 }
                },
                {
                    "angle_deg": 180.0, "distance_m": 0.1, "wheel_radius_m": 0.03,
                    "speed_range": { "lowest": -255.0, "highest": 255.0 },
                    "interface_speed_range": { "lowest": -1.0, "highest": 1.0 },
                    "reversed": true
                }
            ]
        }"#;
        let config = PlatformConfig::from_json(json).unwrap();
        assert_eq!(config.precision, 1);
        assert_eq!(config.ports, vec![1, 5]);
        assert!(!config.motors[0].reversed);
        assert!(config.motors[1].reversed);
    }

    #[test]
    fn test_rejects_misaligned_ports() {
        let mut config = PlatformConfig::default();
        config.ports.pop();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let mut config = PlatformConfig::default();
        config.motors[1].wheel_radius_m = 0.0;
        assert!(config.validate().is_err());

        let mut config = PlatformConfig::default();
        config.motors[0].speed_range = Range::new(10.0, -10.0);
        assert!(config.validate().is_err());

        let empty = PlatformConfig {
            precision: 0,
            ports: vec![],
            motors: vec![],
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            PlatformConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            PlatformConfig::load("/nonexistent/platform.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_loop_period() {
        assert_eq!(loop_period(10), Duration::from_millis(100));
        assert_eq!(loop_period(0), Duration::from_millis(1000));
        assert_eq!(loop_period(2000), Duration::from_micros(500));
        assert_eq!(loop_period(u64::MAX), MIN_LOOP_PERIOD);
    }
}
