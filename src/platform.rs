// Platform: the full set of wheel motors of one chassis
//
// Owns one controller per configured motor, index-aligned with the
// configuration it was built from. Batch operations walk the controllers
// in order and stop at the first failure; motors already updated keep
// their new state.

use std::fmt::Display;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::motor::kinematics::{calculate_platform_linear_speeds, calculate_platform_rotation_speeds};
use crate::motor::{Initialize, MotorBackend, MotorController, MotorInfo, Speed, SpeedController, SpeedRange};

/// True if two mounting angles drive along the same axis, in either direction,
/// once rounded to `precision` decimal digits
fn shares_axis(a_deg: f64, b_deg: f64, precision: u32) -> bool {
    let scale = 10f64.powi(precision as i32);
    let diff = ((a_deg - b_deg).abs().rem_euclid(180.0) * scale).round();
    diff == 0.0 || diff == (180.0 * scale).round()
}

/// Set `parallel_axes` of every motor to the number of motors sharing its
/// drive axis, itself included
pub fn update_parallel_axes(config: &mut [MotorInfo], precision: u32) {
    let counts: Vec<usize> = config
        .iter()
        .enumerate()
        .map(|(i, motor)| {
            1 + config
                .iter()
                .enumerate()
                .filter(|&(j, other)| i != j && shares_axis(motor.angle_deg, other.angle_deg, precision))
                .count()
        })
        .collect();

    for (motor, count) in config.iter_mut().zip(counts) {
        motor.parallel_axes = count;
    }
}

fn check_len(what: &str, got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(Error::invalid_argument(format!(
            "cannot apply {} {} to {} motor controllers",
            got, what, expected
        )));
    }
    Ok(())
}

pub struct Platform<C> {
    config: Vec<MotorInfo>,
    controllers: Vec<C>,
}

impl<C> Platform<C> {
    /// Group parallel axes, then build one controller per motor with `build`
    pub fn new<F>(mut config: Vec<MotorInfo>, precision: u32, mut build: F) -> Self
    where
        F: FnMut(usize, MotorInfo) -> C,
    {
        update_parallel_axes(&mut config, precision);
        info!(
            "Platform with {} motors, parallel axes {:?}",
            config.len(),
            config.iter().map(|m| m.parallel_axes).collect::<Vec<_>>()
        );

        let controllers = config
            .iter()
            .enumerate()
            .map(|(i, &motor)| build(i, motor))
            .collect();

        Self {
            config,
            controllers,
        }
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Motor configuration with parallel axes filled in
    pub fn config(&self) -> &[MotorInfo] {
        &self.config
    }

    pub fn controllers(&self) -> &[C] {
        &self.controllers
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if self.controllers.is_empty() {
            return Err(Error::EmptyArray);
        }
        if index >= self.controllers.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.controllers.len(),
            });
        }
        Ok(())
    }

    pub fn controller(&self, index: usize) -> Result<&C> {
        self.check_index(index)?;
        Ok(&self.controllers[index])
    }

    pub fn controller_mut(&mut self, index: usize) -> Result<&mut C> {
        self.check_index(index)?;
        Ok(&mut self.controllers[index])
    }

    /// Bind every controller to its port, in order
    ///
    /// Aborts on the first failure; earlier motors stay initialized.
    pub fn init<P>(&mut self, ports: &[P]) -> Result<()>
    where
        P: Copy + Display,
        C: Initialize<P>,
    {
        check_len("ports", ports.len(), self.controllers.len())?;

        for (index, (controller, &port)) in self.controllers.iter_mut().zip(ports).enumerate() {
            if let Err(e) = controller.init(port) {
                warn!("Initialization aborted at motor {}: {}", index, e);
                return Err(Error::MotorInit {
                    index,
                    port: port.to_string(),
                    source: Box::new(e),
                });
            }
        }

        info!("Initialized {} motors", self.controllers.len());
        Ok(())
    }
}

impl<B: MotorBackend> Platform<MotorController<B>> {
    /// Build a platform of `MotorController`s, taking each motor's backend from `backend`
    pub fn with_backends<F>(config: Vec<MotorInfo>, precision: u32, mut backend: F) -> Self
    where
        F: FnMut(usize) -> B,
    {
        Self::new(config, precision, |i, info| MotorController::new(info, backend(i)))
    }
}

impl<C: SpeedController> Platform<C> {
    /// Send one interface-unit speed to each motor, in order
    pub fn set_speeds(&mut self, speeds: &[Speed]) -> Result<()> {
        check_len("speeds", speeds.len(), self.controllers.len())?;
        debug!("Setting speeds: {:?}", speeds);

        for (index, (controller, &speed)) in self.controllers.iter_mut().zip(speeds).enumerate() {
            if let Err(e) = controller.set_speed(speed) {
                warn!("Speed dispatch aborted at motor {}: {}", index, e);
                return Err(Error::SpeedRejected {
                    index,
                    speed,
                    source: Box::new(e),
                });
            }
        }
        Ok(())
    }

    /// Like `set_speeds`, with each speed given as a point in its own source range
    pub fn set_speeds_in_ranges(&mut self, speeds: &[Speed], ranges: &[SpeedRange]) -> Result<()> {
        check_len("speeds", speeds.len(), self.controllers.len())?;
        check_len("speed ranges", ranges.len(), self.controllers.len())?;

        let commands = speeds.iter().zip(ranges);
        for (index, (controller, (&speed, range))) in self.controllers.iter_mut().zip(commands).enumerate() {
            if let Err(e) = controller.set_speed_in_range(speed, range) {
                warn!("Ranged speed dispatch aborted at motor {}: {}", index, e);
                return Err(Error::SpeedRejected {
                    index,
                    speed,
                    source: Box::new(e),
                });
            }
        }
        Ok(())
    }

    /// Zero every motor
    pub fn stop(&mut self) -> Result<()> {
        info!("Stopping all motors");
        let zeros = vec![0.0; self.controllers.len()];
        self.set_speeds(&zeros)
    }

    /// Current speed of every motor, in interface units
    pub fn speeds(&self) -> Result<Vec<Speed>> {
        self.controllers
            .iter()
            .enumerate()
            .map(|(index, controller)| {
                controller.speed().map_err(|e| Error::SpeedUnavailable {
                    index,
                    source: Box::new(e),
                })
            })
            .collect()
    }

    /// Move the platform at `speed` towards `angle_deg`
    pub fn drive(&mut self, angle_deg: f64, speed: Speed) -> Result<()> {
        let speeds = calculate_platform_linear_speeds(&self.config, angle_deg, speed)?;
        self.set_speeds(&speeds)
    }

    /// Spin the platform in place at `omega_deg_s`
    pub fn rotate(&mut self, omega_deg_s: f64) -> Result<()> {
        let speeds = calculate_platform_rotation_speeds(&self.config, omega_deg_s)?;
        self.set_speeds(&speeds)
    }
}
