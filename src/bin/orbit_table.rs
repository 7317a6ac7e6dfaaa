use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use planetarium::cli::OrbitModelArg;
use planetarium::consts::REFERENCE_FPS;
use planetarium::model::{default_system, read_descriptors, MotionConfig, SolarSystem};

/// Prints how each body moves, without opening a window.
#[derive(Debug, Parser)]
struct Args {
    /// JSON file of body descriptors; the built-in system is used if omitted
    bodies: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OrbitModelArg::Shared)]
    orbit_model: OrbitModelArg,
}

fn main() -> ExitCode {
    planetarium::logging::init();
    let args = Args::parse();

    let descriptors = match &args.bodies {
        Some(path) => match read_descriptors(path) {
            Ok(descriptors) => descriptors,
            Err(err) => {
                tracing::error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => default_system(),
    };

    let config = MotionConfig {
        orbit_model: args.orbit_model.into(),
        ..MotionConfig::default()
    };
    let system = match SolarSystem::new(descriptors, config) {
        Ok(system) => system,
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{:<12} {:>8} {:>10} {:>14} {:>16} {:>12}",
        "Body", "Radius", "Orbit", "Spin (°/frame)", "Frames per orbit", "At 60 fps"
    );
    for body in system.bodies() {
        let (frames, seconds) = match body.frames_per_revolution() {
            // The central body stays put whatever the orbit model says
            Some(frames) if body.id.0 != 0 => (
                format!("{:.0}", frames),
                format!("{:.1} s", frames / REFERENCE_FPS),
            ),
            _ => (String::from("-"), String::from("-")),
        };
        println!(
            "{:<12} {:>8.2} {:>10.1} {:>14.4} {:>16} {:>12}",
            body.name(),
            body.radius(),
            body.orbit_radius(),
            body.spin_per_frame().to_degrees(),
            frames,
            seconds,
        );
    }

    ExitCode::SUCCESS
}
