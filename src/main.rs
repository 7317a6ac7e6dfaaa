use std::process::ExitCode;

use clap::Parser;

use planetarium::assets::load_textures;
use planetarium::cli::ViewerArgs;
use planetarium::gui::{open_window, Planetarium, SceneState};
use planetarium::model::{default_system, read_descriptors};

fn main() -> ExitCode {
    planetarium::logging::init();
    let args = ViewerArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &ViewerArgs) -> planetarium::Result<()> {
    let config = args.scene_config();

    let descriptors = match &args.bodies {
        Some(path) => read_descriptors(path)?,
        None => default_system(),
    };

    // Textures come first, so a missing one stops us before a window opens
    let textures = match &args.assets {
        Some(dir) => load_textures(dir, &descriptors, config.load_strategy)?,
        None => vec![None; descriptors.len()],
    };

    let mut window = open_window(&config)?;
    let scene = SceneState::initialize(&mut window, &config, descriptors, textures)?;

    window.render_loop(Planetarium::new(scene, &config));
    Ok(())
}
