//! Runtime knobs for a scene. Defaults come from the constants in `consts`.

use nalgebra::Point3;

use crate::assets::LoadStrategy;
use crate::consts::{AXES_LENGTH, BACKGROUND_COLOR};
use crate::gui::CameraConfig;
use crate::model::{color_from_hex, MotionConfig, Pacing, StarfieldConfig};

#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub title: String,
    pub window_size: (u32, u32),
    pub background: Point3<f32>,
    pub motion: MotionConfig,
    pub pacing: Pacing,
    pub camera: CameraConfig,
    pub starfield: StarfieldConfig,
    /// Length of the axes helper at the origin; zero hides it
    pub axes_length: f32,
    pub show_labels: bool,
    pub show_orbits: bool,
    pub load_strategy: LoadStrategy,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            title: String::from("Planetarium"),
            window_size: (1280, 800),
            background: color_from_hex(BACKGROUND_COLOR),
            motion: MotionConfig::default(),
            pacing: Pacing::default(),
            camera: CameraConfig::default(),
            starfield: StarfieldConfig::default(),
            axes_length: AXES_LENGTH,
            show_labels: true,
            show_orbits: false,
            load_strategy: LoadStrategy::default(),
        }
    }
}
