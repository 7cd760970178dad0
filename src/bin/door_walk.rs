//! Door Walk
//!
//! Run with: `cargo run --bin door_walk -- [--config scene.json] [--two-doors]`
//!
//! Headless run of a door scene. A scripted observer walks from the spawn
//! point through the first doorway, out past it and back, at a fixed tick
//! rate. Door events, sound cues and hinge angles are logged to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glam::Vec2;
use log::LevelFilter;

use door_scene_engine::door::DoorEvent;
use door_scene_engine::game::{DoorId, DoorScene, SceneConfig, SceneConfigError, WalkPath};

// ============================================================================
// CLI
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "door_walk", about = "Walk an observer through a door scene")]
struct Args {
    /// Scene description (JSON); defaults to the single-door room
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the two-door room instead of the default scene
    #[arg(long, conflicts_with = "config")]
    two_doors: bool,

    /// Walking speed in meters per second (must be positive)
    #[arg(long, default_value_t = 6.0, value_parser = parse_speed)]
    speed: f32,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 60)]
    tick_rate: u32,

    /// How far past the doorway to walk before turning back (meters)
    #[arg(long, default_value_t = 6.0)]
    overshoot: f32,

    /// Log every door transition and per-second angles
    #[arg(short, long)]
    verbose: bool,

    /// Print the scene configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

/// A walk at zero or negative speed never reaches its last waypoint.
fn parse_speed(s: &str) -> Result<f32, String> {
    let speed: f32 = s.parse().map_err(|e| format!("invalid speed '{s}': {e}"))?;
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(format!("speed must be a positive number of meters per second, got {s}"))
    }
}

// ============================================================================
// LOGGING
// ============================================================================

struct StdoutLogger;

static LOGGER: StdoutLogger = StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            println!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn load_config(args: &Args) -> Result<SceneConfig, SceneConfigError> {
    if let Some(path) = &args.config {
        log::info!("loading scene from {}", path.display());
        let config = SceneConfig::load(path)?;
        config.validate()?;
        Ok(config)
    } else if args.two_doors {
        Ok(SceneConfig::two_doors())
    } else {
        Ok(SceneConfig::default())
    }
}

fn run(args: &Args) -> Result<(), SceneConfigError> {
    let config = load_config(args)?;

    if args.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let mut scene = DoorScene::new(&config)?;

    let Some(first) = config.doors.first() else {
        log::warn!("scene has no doors, nothing to walk through");
        return Ok(());
    };

    let facing = first.facing.try_normalize().unwrap_or(Vec2::Y);
    let beyond = first.center - facing * args.overshoot;
    let mut walk =
        WalkPath::through_doorway(config.observer_start, first.center, beyond, args.speed);

    let tick_rate = args.tick_rate.max(1);
    let dt = 1.0 / tick_rate as f32;
    let mut tick: u64 = 0;

    while !walk.is_finished() {
        let position = walk.advance(dt);
        let frame = scene.tick(position, dt);

        for door in &frame.doors {
            let name = scene.doors().name(door.id).unwrap_or("?");
            match door.event {
                Some(DoorEvent::Opened(swing)) => log::info!(
                    "t={:.2}s {name} opened {:?} (observer at {:.2}, {:.2})",
                    tick as f32 * dt,
                    swing,
                    position.x,
                    position.z
                ),
                Some(DoorEvent::Closed) => log::info!("t={:.2}s {name} closing", tick as f32 * dt),
                None => {}
            }
        }

        for _ in 0..scene.drain_cues() {
            log::info!("door cue");
        }

        if tick % tick_rate as u64 == 0 {
            let angles: Vec<String> = frame
                .doors
                .iter()
                .map(|d| format!("{:.3}", d.angle))
                .collect();
            log::debug!(
                "t={:.2}s angles [{}] hint {}",
                tick as f32 * dt,
                angles.join(", "),
                if frame.hint_visible { "on" } else { "off" }
            );
        }

        tick += 1;
    }

    if let Some(door) = scene.doors().get(DoorId(0)) {
        log::info!(
            "walk finished after {tick} ticks, {} is {:?} at {:.3} rad",
            first.name,
            door.state(),
            door.current_angle()
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
