// Message types for the drive loop

use serde::{Deserialize, Serialize};

use crate::motor::Speed;

// Platform-level motion request: heading + speed in interface units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DriveCommand {
    pub angle_deg: f64,
    pub speed: Speed,
}

/// Health status reported each tick
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PlatformHealth {
    Ok,
    Faulted,
}

// Snapshot of one loop tick, logged as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformStatus {
    pub command: DriveCommand,
    pub health: PlatformHealth,
    /// Read-back motor speeds; empty if they could not be read
    pub speeds: Vec<Speed>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&PlatformHealth::Ok).unwrap(), "\"ok\"");
        assert_eq!(
            serde_json::to_string(&PlatformHealth::Faulted).unwrap(),
            "\"faulted\""
        );
    }

    #[test]
    fn test_status_json_shape() {
        let status = PlatformStatus {
            command: DriveCommand {
                angle_deg: 90.0,
                speed: 10.0,
            },
            health: PlatformHealth::Ok,
            speeds: vec![1.0, -1.0],
        };
        let json: serde_json::Value = serde_json::to_value(&status).unwrap();
        assert_eq!(json["command"]["angle_deg"], 90.0);
        assert_eq!(json["health"], "ok");
        assert_eq!(json["speeds"][1], -1.0);
    }
}
