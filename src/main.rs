use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use omni_platform::config::{PlatformConfig, DEFAULT_SWEEP_LIMIT, DEFAULT_SWEEP_STEP, LOOP_HZ};
use omni_platform::runtime::{self, RunOptions};

/// Sweep an omni-wheel platform back and forth along one heading
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON platform configuration; built-in four-wheel X drive if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Heading to drive along (degrees)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    heading: f64,

    /// Sweep amplitude (interface speed units)
    #[arg(long, default_value_t = DEFAULT_SWEEP_LIMIT)]
    limit: f64,

    /// Sweep increment per tick
    #[arg(long, default_value_t = DEFAULT_SWEEP_STEP)]
    step: f64,

    /// Loop frequency
    #[arg(long, default_value_t = LOOP_HZ)]
    hz: u64,

    /// Stop after this many ticks
    #[arg(long)]
    cycles: Option<u64>,
}

#[tokio::main]
async fn main() {
    // Setup logging (set RUST_LOG=info or debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading platform configuration from {}", path.display());
            match PlatformConfig::load(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Configuration error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => PlatformConfig::default(),
    };

    let options = RunOptions {
        hz: args.hz,
        heading_deg: args.heading,
        limit: args.limit,
        step: args.step,
        cycles: args.cycles,
    };

    if let Err(e) = runtime::run(config, options).await {
        eprintln!("Runtime error: {}", e);
        std::process::exit(1);
    }
}
