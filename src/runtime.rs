// Fixed-rate drive loop
// Sweeps the requested platform speed from -limit to +limit and back along
// one heading, pushing every step through the kinematics and the platform.
// A failed tick stops all motors; the next successful tick clears the fault.

use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::config::{loop_period, PlatformConfig, DEFAULT_SWEEP_LIMIT, DEFAULT_SWEEP_STEP, LOOP_HZ};
use crate::messages::{DriveCommand, PlatformHealth, PlatformStatus};
use crate::motor::{SimulatedMotor, Speed, SpeedController};
use crate::platform::Platform;

/// Triangle wave between `-limit` and `limit`
#[derive(Debug, Clone)]
pub struct Sweep {
    limit: Speed,
    step: Speed,
    current: Speed,
    rising: bool,
}

impl Sweep {
    pub fn new(limit: Speed, step: Speed) -> Self {
        let limit = limit.abs();
        Self {
            limit,
            step: step.abs(),
            current: -limit,
            rising: true,
        }
    }

    /// Current value, then advance; bounces at both ends
    pub fn next_speed(&mut self) -> Speed {
        let value = self.current;
        if self.step == 0.0 {
            return value;
        }

        let next = if self.rising {
            self.current + self.step
        } else {
            self.current - self.step
        };
        if next > self.limit || next < -self.limit {
            self.rising = !self.rising;
            self.current = if self.rising {
                (self.current + self.step).min(self.limit)
            } else {
                (self.current - self.step).max(-self.limit)
            };
        } else {
            self.current = next;
        }
        value
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub hz: u64,
    pub heading_deg: f64,
    pub limit: Speed,
    pub step: Speed,
    /// Stop after this many ticks; run until Ctrl+C if `None`
    pub cycles: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            hz: LOOP_HZ,
            heading_deg: 0.0,
            limit: DEFAULT_SWEEP_LIMIT,
            step: DEFAULT_SWEEP_STEP,
            cycles: None,
        }
    }
}

pub struct Runtime<C> {
    platform: Platform<C>,
    heading_deg: f64,
    sweep: Sweep,
    health: PlatformHealth,
}

impl<C: SpeedController> Runtime<C> {
    pub fn new(platform: Platform<C>, heading_deg: f64, sweep: Sweep) -> Self {
        Self {
            platform,
            heading_deg,
            sweep,
            health: PlatformHealth::Ok,
        }
    }

    pub fn health(&self) -> PlatformHealth {
        self.health
    }

    pub fn platform(&self) -> &Platform<C> {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut Platform<C> {
        &mut self.platform
    }

    /// Dispatch the next sweep step and report the outcome
    pub fn tick(&mut self) -> PlatformStatus {
        let command = DriveCommand {
            angle_deg: self.heading_deg,
            speed: self.sweep.next_speed(),
        };

        match self.platform.drive(command.angle_deg, command.speed) {
            Ok(()) => {
                if self.health != PlatformHealth::Ok {
                    info!("Platform recovered");
                }
                self.health = PlatformHealth::Ok;
            }
            Err(e) => {
                if self.health != PlatformHealth::Faulted {
                    warn!("Drive command {:?} failed, stopping platform: {}", command, e);
                }
                self.health = PlatformHealth::Faulted;
                if let Err(e) = self.platform.stop() {
                    warn!("Failed to stop motors: {}", e);
                }
            }
        }

        let speeds = match self.platform.speeds() {
            Ok(speeds) => speeds,
            Err(e) => {
                debug!("Speed read-back failed: {}", e);
                Vec::new()
            }
        };

        PlatformStatus {
            command,
            health: self.health,
            speeds,
        }
    }
}

pub async fn run(
    config: PlatformConfig,
    options: RunOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    config.validate()?;

    info!("Building platform with {} simulated motors...", config.motors.len());
    let mut platform = Platform::with_backends(config.motors, config.precision, |_| SimulatedMotor::new());
    platform.init(&config.ports)?;

    let mut runtime = Runtime::new(
        platform,
        options.heading_deg,
        Sweep::new(options.limit, options.step),
    );
    let mut tick = interval(loop_period(options.hz));

    info!(
        "Runtime started: {}Hz loop, heading {}°, sweep ±{} step {}",
        options.hz, options.heading_deg, options.limit, options.step
    );

    let mut ticks = 0u64;
    loop {
        if options.cycles.is_some_and(|n| ticks >= n) {
            break;
        }

        tokio::select! {
            _ = tick.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }

        let status = runtime.tick();
        debug!("{}", serde_json::to_string(&status)?);
        ticks += 1;
    }

    runtime.platform_mut().stop()?;
    info!("Runtime finished after {} ticks", ticks);
    Ok(())
}
