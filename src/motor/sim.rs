// In-memory motor backend
//
// Stands in for the motor shield when no hardware is attached. Behaves like
// the real thing in the ways that matter to callers: nothing moves before
// `begin`, and a faulted motor refuses every call.

use tracing::debug;

use super::controller::{MotorBackend, Port};
use super::info::Speed;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("motor was not started")]
    NotStarted,

    #[error("motor fault: {0}")]
    Fault(String),
}

#[derive(Debug, Clone, Default)]
pub struct SimulatedMotor {
    port: Option<Port>,
    raw: Speed,
    fault: Option<String>,
}

impl SimulatedMotor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Port passed to the last successful `begin`
    pub fn port(&self) -> Option<Port> {
        self.port
    }

    /// Last raw value written
    pub fn raw(&self) -> Speed {
        self.raw
    }

    /// Make every following call fail until `clear_fault`
    pub fn inject_fault(&mut self, reason: impl Into<String>) {
        self.fault = Some(reason.into());
    }

    pub fn clear_fault(&mut self) {
        self.fault = None;
    }

    fn ready(&self) -> Result<(), SimError> {
        if let Some(reason) = &self.fault {
            return Err(SimError::Fault(reason.clone()));
        }
        if self.port.is_none() {
            return Err(SimError::NotStarted);
        }
        Ok(())
    }
}

impl MotorBackend for SimulatedMotor {
    type Error = SimError;

    fn begin(&mut self, port: Port) -> Result<(), SimError> {
        if let Some(reason) = &self.fault {
            return Err(SimError::Fault(reason.clone()));
        }
        self.port = Some(port);
        self.raw = 0.0;
        Ok(())
    }

    fn set_speed_raw(&mut self, raw: Speed) -> Result<(), SimError> {
        self.ready()?;
        debug!("Simulated motor on port {:?}: raw={}", self.port, raw);
        self.raw = raw;
        Ok(())
    }

    fn speed_raw(&self) -> Result<Speed, SimError> {
        self.ready()?;
        Ok(self.raw)
    }
}
