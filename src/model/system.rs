use super::body::{BodyID, CelestialBody, OrbitModel, SceneUnits};
use super::descriptor::CelestialBodyDescriptor;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
pub struct MotionConfig {
    pub units: SceneUnits,
    pub orbit_model: OrbitModel,
    /// Whether the central star gets spun. It never gets moved.
    pub spin_central: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            units: SceneUnits::default(),
            orbit_model: OrbitModel::Shared,
            spin_central: false,
        }
    }
}

/// The ordered list of bodies in a scene.
///
/// Index 0 is the central star. The order never changes after construction,
/// and it's the order bodies are updated and drawn in.
#[derive(Debug, Clone)]
pub struct SolarSystem {
    bodies: Vec<CelestialBody>,
    config: MotionConfig,
    frames: f64,
}

impl SolarSystem {
    pub fn new(descriptors: Vec<CelestialBodyDescriptor>, config: MotionConfig) -> Result<Self> {
        if descriptors.is_empty() {
            return Err(Error::EmptySystem);
        }
        for descriptor in descriptors.iter() {
            descriptor.validate()?;
        }

        let bodies: Vec<_> = descriptors
            .into_iter()
            .enumerate()
            .map(|(idx, descriptor)| {
                CelestialBody::new(BodyID(idx), descriptor, config.units, config.orbit_model)
            })
            .collect();

        for body in bodies.iter().skip(1) {
            if body.descriptor.is_stationary() {
                tracing::warn!(
                    "{} has distance 0 but isn't the central body; it will sit inside the star",
                    body.name()
                );
            }
        }

        Ok(SolarSystem {
            bodies,
            config,
            frames: 0.0,
        })
    }

    pub fn bodies(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get_body(&self, id: BodyID) -> &CelestialBody {
        &self.bodies[id.0]
    }

    pub fn central_body(&self) -> &CelestialBody {
        &self.bodies[0]
    }

    /// Total frames simulated so far, including fractional ones
    pub fn elapsed_frames(&self) -> f64 {
        self.frames
    }

    /// Advances every planet by one frame: orbit first, then spin.
    pub fn update(&mut self) {
        self.advance(1.0);
    }

    /// Advances by a possibly fractional number of frames.
    pub fn advance(&mut self, frames: f64) {
        if frames == 0.0 {
            return;
        }
        self.frames += frames;

        let (central, planets) = match self.bodies.split_first_mut() {
            Some(split) => split,
            None => return,
        };
        if self.config.spin_central {
            central.advance_spin(frames);
        }
        for body in planets.iter_mut() {
            body.advance_orbit(frames);
            body.advance_spin(frames);
        }
    }
}
