// cli.rs - Command-line interface configuration
use anyhow::{ensure, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "pipe-tunnel")]
#[command(about = "Headless endless pipe tunnel simulation", long_about = None)]
pub struct Cli {
    /// JSON configuration file; missing fields use defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for pipe shapes and twists
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    pub ticks: u64,

    /// Tick rate for fixed-step runs
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Override the configured travel velocity
    #[arg(long)]
    pub velocity: Option<f32>,

    /// Override the configured number of pipes in the chain
    #[arg(long)]
    pub pipes: Option<usize>,

    /// Pace ticks with the wall clock instead of a fixed step
    #[arg(long, default_value = "false")]
    pub realtime: bool,

    /// Print the run summary as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Disable progress output
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Time between ticks at `--fps`. Rejects rates with no finite interval.
    pub fn frame_interval(&self) -> Result<Duration> {
        ensure!(self.fps > 0.0, "--fps must be positive, got {}", self.fps);
        Duration::try_from_secs_f32(1.0 / self.fps)
            .context(format!("--fps {} gives no representable frame interval", self.fps))
    }
}
