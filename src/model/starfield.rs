//! A static cloud of background stars, generated once when the scene is built.

use nalgebra::Point3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::consts::{STARFIELD_COUNT, STARFIELD_POINT_SIZE, STARFIELD_SEED, STARFIELD_SPREAD};

/// How stars get their color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StarColoring {
    /// Every star gets the same color. Black, by default, since that's what
    /// the ramp was always overwritten with.
    Constant(Point3<f32>),
    /// Hue sweeps once around the color wheel across the star index.
    HslRamp,
}

impl Default for StarColoring {
    fn default() -> Self {
        StarColoring::Constant(Point3::origin())
    }
}

#[derive(Debug, Clone)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Stars are sampled from the cube [-spread, spread]^3
    pub spread: f32,
    pub point_size: f32,
    pub coloring: StarColoring,
    pub seed: u64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        StarfieldConfig {
            count: STARFIELD_COUNT,
            spread: STARFIELD_SPREAD,
            point_size: STARFIELD_POINT_SIZE,
            coloring: StarColoring::default(),
            seed: STARFIELD_SEED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Starfield {
    pub positions: Vec<Point3<f32>>,
    pub colors: Vec<Point3<f32>>,
    pub point_size: f32,
}

impl Starfield {
    pub fn generate(config: &StarfieldConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        build_starfield(config, &mut rng)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (Point3<f32>, Point3<f32>)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.colors.iter().copied())
    }
}

pub fn build_starfield<R: Rng>(config: &StarfieldConfig, rng: &mut R) -> Starfield {
    let spread = config.spread.abs();
    let mut positions = Vec::with_capacity(config.count);
    let mut colors = Vec::with_capacity(config.count);

    for i in 0..config.count {
        let position = Point3::new(
            rng.random_range(-spread..=spread),
            rng.random_range(-spread..=spread),
            rng.random_range(-spread..=spread),
        );
        positions.push(position);

        let color = match config.coloring {
            StarColoring::Constant(color) => color,
            StarColoring::HslRamp => hsl_to_rgb(i as f32 / config.count as f32, 1.0, 0.5),
        };
        colors.push(color);
    }

    Starfield {
        positions,
        colors,
        point_size: config.point_size,
    }
}

/// Converts hue, saturation and lightness (all in [0, 1]) to RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Point3<f32> {
    if s == 0.0 {
        return Point3::new(l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        }
    }

    Point3::new(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}
