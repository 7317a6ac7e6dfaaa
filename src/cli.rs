//! Command-line arguments shared by the binaries.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::assets::LoadStrategy;
use crate::config::SceneConfig;
use crate::consts::REFERENCE_FPS;
use crate::model::{OrbitModel, Pacing, StarColoring};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PacingArg {
    /// One step per rendered frame, whatever the frame rate
    Frame,
    /// Steps follow elapsed time
    WallClock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrbitModelArg {
    /// Every planet revolves at the same angular speed
    Shared,
    /// Farther planets revolve slower
    Keplerian,
}

impl From<OrbitModelArg> for OrbitModel {
    fn from(arg: OrbitModelArg) -> Self {
        match arg {
            OrbitModelArg::Shared => OrbitModel::Shared,
            OrbitModelArg::Keplerian => OrbitModel::Keplerian,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StarColorsArg {
    /// All stars black
    Constant,
    /// Rainbow across the star index
    Hsl,
}

#[derive(Debug, Parser)]
#[command(name = "planetarium", about = "A small solar system in a window")]
pub struct ViewerArgs {
    /// JSON file of body descriptors; the built-in system is used if omitted
    pub bodies: Option<PathBuf>,

    /// Directory that texture references are resolved against. Without it,
    /// bodies are drawn in flat colors.
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Decode all textures at once instead of one after the other
    #[arg(long)]
    pub parallel_textures: bool,

    #[arg(long, value_enum, default_value_t = PacingArg::WallClock)]
    pub pacing: PacingArg,

    #[arg(long, value_enum, default_value_t = OrbitModelArg::Shared)]
    pub orbit_model: OrbitModelArg,

    /// Number of background stars
    #[arg(long)]
    pub stars: Option<usize>,

    #[arg(long, value_enum, default_value_t = StarColorsArg::Constant)]
    pub star_colors: StarColorsArg,

    /// Spin the central star as well
    #[arg(long)]
    pub spin_star: bool,

    #[arg(long)]
    pub no_labels: bool,

    /// Draw orbit paths from the start (toggle with O)
    #[arg(long)]
    pub orbits: bool,
}

impl ViewerArgs {
    pub fn scene_config(&self) -> SceneConfig {
        let mut config = SceneConfig::default();

        config.pacing = match self.pacing {
            PacingArg::Frame => Pacing::FrameLocked,
            PacingArg::WallClock => Pacing::WallClock {
                reference_fps: REFERENCE_FPS,
            },
        };
        config.motion.orbit_model = self.orbit_model.into();
        config.motion.spin_central = self.spin_star;

        if let Some(count) = self.stars {
            config.starfield.count = count;
        }
        if self.star_colors == StarColorsArg::Hsl {
            config.starfield.coloring = StarColoring::HslRamp;
        }

        config.show_labels = !self.no_labels;
        config.show_orbits = self.orbits;
        if self.parallel_textures {
            config.load_strategy = LoadStrategy::Concurrent;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = ViewerArgs::try_parse_from(["planetarium"]).unwrap();
        let config = args.scene_config();

        assert_eq!(args.bodies, None);
        assert_eq!(config.pacing, Pacing::default());
        assert_eq!(config.motion.orbit_model, OrbitModel::Shared);
        assert!(!config.motion.spin_central);
        assert!(config.show_labels);
        assert_eq!(config.starfield.coloring, StarColoring::default());
        assert_eq!(config.load_strategy, LoadStrategy::Sequential);
    }

    #[test]
    fn test_overrides() {
        let args = ViewerArgs::try_parse_from([
            "planetarium",
            "planets.json",
            "--pacing",
            "frame",
            "--orbit-model",
            "keplerian",
            "--stars",
            "10",
            "--star-colors",
            "hsl",
            "--no-labels",
            "--parallel-textures",
        ])
        .unwrap();
        let config = args.scene_config();

        assert_eq!(args.bodies, Some(PathBuf::from("planets.json")));
        assert_eq!(config.pacing, Pacing::FrameLocked);
        assert_eq!(config.motion.orbit_model, OrbitModel::Keplerian);
        assert_eq!(config.starfield.count, 10);
        assert_eq!(config.starfield.coloring, StarColoring::HslRamp);
        assert!(!config.show_labels);
        assert_eq!(config.load_strategy, LoadStrategy::Concurrent);
    }

    #[test]
    fn test_rejects_unknown_pacing() {
        assert!(ViewerArgs::try_parse_from(["planetarium", "--pacing", "sometimes"]).is_err());
    }
}
