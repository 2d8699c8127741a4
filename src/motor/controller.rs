// Generic speed control on top of a raw motor backend
//
// Backends only move raw native-unit values. Clamping, reversal and the
// interface <-> native remapping happen here, once, for every backend.

use tracing::debug;

use super::info::{MotorInfo, Speed, SpeedRange};
use crate::config::DEFAULT_PORT_RANGE;
use crate::error::{Error, Result};
use crate::math::Range;

/// Physical connector a motor is plugged into
pub type Port = u8;

/// Raw hardware access for a single motor
///
/// These three calls are the only points that touch hardware.
pub trait MotorBackend {
    type Error: std::fmt::Display;

    /// Connectors this backend's hardware exposes
    const PORTS: Range<Port> = DEFAULT_PORT_RANGE;

    fn begin(&mut self, port: Port) -> std::result::Result<(), Self::Error>;

    fn set_speed_raw(&mut self, raw: Speed) -> std::result::Result<(), Self::Error>;

    fn speed_raw(&self) -> std::result::Result<Speed, Self::Error>;
}

/// Anything that can be commanded in interface speed units
pub trait SpeedController {
    fn info(&self) -> &MotorInfo;

    /// Command a speed in interface units, clamped to the interface range
    fn set_speed(&mut self, speed: Speed) -> Result<()>;

    /// Current speed in interface units
    fn speed(&self) -> Result<Speed>;

    fn in_speed_range(&self, speed: Speed) -> bool {
        self.info().interface_speed_range.contains(speed)
    }

    /// Command a speed expressed as a point in `range`
    ///
    /// Fails with `InvalidArgument` if `speed` is not inside `range`.
    fn set_speed_in_range(&mut self, speed: Speed, range: &SpeedRange) -> Result<()> {
        if !range.contains(speed) {
            return Err(Error::invalid_argument(format!(
                "speed {} is not in its source range [{}, {}]",
                speed, range.lowest, range.highest
            )));
        }
        let interface = self
            .info()
            .interface_speed_range
            .map_value_from_range(speed, range);
        self.set_speed(interface)
    }

    fn stop(&mut self) -> Result<()> {
        self.set_speed(0.0)
    }
}

/// Anything that must be bound to a port before use
pub trait Initialize<P> {
    fn init(&mut self, port: P) -> Result<()>;
}

/// A motor's static configuration paired with its backend
#[derive(Debug, Clone)]
pub struct MotorController<B> {
    info: MotorInfo,
    backend: B,
}

impl<B: MotorBackend> MotorController<B> {
    pub fn new(info: MotorInfo, backend: B) -> Self {
        Self { info, backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

fn connection_error(err: impl std::fmt::Display) -> Error {
    Error::FailedConnection(err.to_string())
}

impl<B: MotorBackend> SpeedController for MotorController<B> {
    fn info(&self) -> &MotorInfo {
        &self.info
    }

    fn set_speed(&mut self, speed: Speed) -> Result<()> {
        if !speed.is_finite() {
            return Err(Error::invalid_argument(format!("speed {} is not a finite number", speed)));
        }
        let interface = &self.info.interface_speed_range;
        let mut speed = interface.restrict(speed);
        if self.info.reversed {
            speed = -speed;
        }
        let raw = interface.map_value_to_range(speed, &self.info.speed_range);
        self.backend.set_speed_raw(raw).map_err(connection_error)
    }

    fn speed(&self) -> Result<Speed> {
        let raw = self.backend.speed_raw().map_err(connection_error)?;
        let speed = self
            .info
            .speed_range
            .map_value_to_range(raw, &self.info.interface_speed_range);
        Ok(if self.info.reversed { -speed } else { speed })
    }
}

impl<B: MotorBackend> Initialize<Port> for MotorController<B> {
    fn init(&mut self, port: Port) -> Result<()> {
        if !B::PORTS.contains(port) {
            return Err(Error::invalid_argument(format!(
                "cannot initialize motor on port {} outside [{}, {}]",
                port,
                B::PORTS.lowest,
                B::PORTS.highest
            )));
        }
        self.backend.begin(port).map_err(connection_error)?;
        debug!("Motor at {}° bound to port {}", self.info.angle_deg, port);
        Ok(())
    }
}
