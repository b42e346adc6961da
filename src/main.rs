use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::time::Duration;

use pipe_tunnel::cli::Cli;
use pipe_tunnel::core::{FixedStep, WallClock};
use pipe_tunnel::traits::{RandomSource, RngSource, TickSource};
use pipe_tunnel::{RunSummary, Tunnel, TunnelConfig};

fn load_config(cli: &Cli) -> Result<TunnelConfig> {
    let mut config = match &cli.config {
        Some(path) => TunnelConfig::from_json_file(path)
            .context(format!("Failed to load config file: {:?}", path))?,
        None => TunnelConfig::default(),
    };

    if let Some(velocity) = cli.velocity {
        config.player.velocity = velocity;
    }
    if let Some(pipes) = cli.pipes {
        config.pipe_count = pipes;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn run<R: RandomSource, C: TickSource>(
    tunnel: &mut Tunnel<R>,
    clock: &mut C,
    cli: &Cli,
    pace: Option<Duration>,
) {
    let verbose = !cli.quiet && !cli.json;

    for frame in tunnel.frames(clock).take(cli.ticks as usize) {
        if frame.crossed_boundary && verbose {
            println!(
                "[{}] tick {:>6}  t={:>8.3}s  entered pipe {}",
                chrono::Local::now().format("%H:%M:%S"),
                frame.number,
                frame.time,
                frame.active_pipe
            );
        }
        if let Some(pace) = pace {
            std::thread::sleep(pace);
        }
    }
}

fn print_summary(summary: &RunSummary) {
    println!("Run complete:");
    println!("  Ticks: {} ({:.3}s simulated)", summary.ticks, summary.elapsed);
    println!("  Distance traveled: {:.3}", summary.distance_traveled);
    println!("  Pipes passed: {}", summary.pipes_passed);
    println!(
        "  Active pipe: {} at {:.2} degrees",
        summary.active_pipe, summary.system_rotation
    );
    println!(
        "  Chain: {} pipes, {} vertices, {} indices",
        summary.chain.len(),
        summary.total_vertices(),
        summary.total_indices()
    );
    for pipe in &summary.chain {
        println!(
            "    pipe {:>3}: radius {:>6.2}, {:>2} rings, {:>6.2} degrees",
            pipe.id, pipe.curve_radius, pipe.ring_count, pipe.curve_angle
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let interval = cli.frame_interval()?;

    let config = load_config(&cli)?;
    let mut tunnel = Tunnel::new(&config, RngSource::seeded(cli.seed))?;

    info!(
        "simulating {} ticks at {} Hz (seed {}, {} pipes, velocity {})",
        cli.ticks, cli.fps, cli.seed, config.pipe_count, config.player.velocity
    );

    if cli.realtime {
        run(&mut tunnel, &mut WallClock::new(), &cli, Some(interval));
    } else {
        run(&mut tunnel, &mut FixedStep::from_hz(cli.fps), &cli, None);
    }

    let summary = tunnel.summary();
    info!(
        "finished after {} ticks, {} pipes passed",
        summary.ticks, summary.pipes_passed
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if !cli.quiet {
        print_summary(&summary);
    }

    Ok(())
}
