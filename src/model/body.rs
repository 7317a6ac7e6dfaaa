use std::f64::consts::TAU;

use nalgebra::Point3;

use super::descriptor::CelestialBodyDescriptor;
use crate::consts::{FRAME_STEP, ORBITAL_SPEED, PHASE_STEP};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

/// Converts unitless descriptor factors into scene-space lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneUnits {
    pub size_unit: f64,
    pub distance_unit: f64,
}

impl Default for SceneUnits {
    fn default() -> Self {
        SceneUnits {
            size_unit: crate::consts::SIZE_UNIT,
            distance_unit: crate::consts::DISTANCE_UNIT,
        }
    }
}

/// How fast a planet goes around its orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitModel {
    /// Every planet uses the same angular speed, wherever it sits.
    Shared,
    /// Angular speed falls off as distance^-1.5, normalized so that a planet
    /// at distance 1 moves at the shared speed.
    Keplerian,
}

impl OrbitModel {
    pub fn speed_factor(self, distance: f64) -> f64 {
        match self {
            OrbitModel::Shared => ORBITAL_SPEED,
            OrbitModel::Keplerian if distance > 0.0 => ORBITAL_SPEED * distance.powf(-1.5),
            // Nothing to revolve around
            OrbitModel::Keplerian => 0.0,
        }
    }
}

/// A star or planet and its motion state.
///
/// Orbits are circles in the xz-plane around the origin, and spin is about the
/// y-axis. The phase only ever grows; sin and cos take care of wrapping.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub id: BodyID,
    pub descriptor: CelestialBodyDescriptor,
    radius: f64,
    orbit_radius: f64,
    speed_factor: f64,
    spin_per_frame: f64,
    // -- mutated every frame --
    phase: f64,
    position: Point3<f64>,
    rotation_y: f64,
}

impl CelestialBody {
    pub fn new(
        id: BodyID,
        descriptor: CelestialBodyDescriptor,
        units: SceneUnits,
        orbit_model: OrbitModel,
    ) -> Self {
        let radius = units.size_unit * descriptor.radius;
        let orbit_radius = units.distance_unit * descriptor.distance;

        // Bodies start off diagonally, at (r, 0, r). The first position update
        // snaps them onto their circle.
        let position = Point3::new(orbit_radius, 0.0, orbit_radius);

        CelestialBody {
            id,
            radius,
            orbit_radius,
            speed_factor: orbit_model.speed_factor(descriptor.distance),
            spin_per_frame: TAU / descriptor.rotation_time * FRAME_STEP,
            phase: 0.0,
            position,
            rotation_y: 0.0,
            descriptor,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Radius in scene units
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance from the origin once on the orbit, in scene units
    pub fn orbit_radius(&self) -> f64 {
        self.orbit_radius
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    pub fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    /// Angle swept around the orbit per rendered frame
    pub fn orbit_angle_per_frame(&self) -> f64 {
        PHASE_STEP * self.speed_factor
    }

    /// Spin around the y-axis per rendered frame
    pub fn spin_per_frame(&self) -> f64 {
        self.spin_per_frame
    }

    /// Frames needed to go once around the orbit, if the body moves at all
    pub fn frames_per_revolution(&self) -> Option<f64> {
        if self.speed_factor == 0.0 {
            None
        } else {
            Some(TAU / self.orbit_angle_per_frame())
        }
    }

    /// Advances one frame around the orbit.
    pub fn update_position(&mut self) {
        self.advance_orbit(1.0);
    }

    /// Advances one frame of spin.
    pub fn update_rotation(&mut self) {
        self.advance_spin(1.0);
    }

    /// Advances the orbit by some number of frames, which may be fractional.
    pub fn advance_orbit(&mut self, frames: f64) {
        self.phase += PHASE_STEP * frames;
        let angle = self.phase * self.speed_factor;
        self.position = Point3::new(
            angle.sin() * self.orbit_radius,
            0.0,
            angle.cos() * self.orbit_radius,
        );
    }

    pub fn advance_spin(&mut self, frames: f64) {
        self.rotation_y += self.spin_per_frame * frames;
    }
}
