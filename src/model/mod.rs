//! The engine-independent core: what the bodies are and how they move.

mod body;
mod clock;
mod descriptor;
mod starfield;
mod system;

pub use body::{BodyID, CelestialBody, OrbitModel, SceneUnits};
pub use clock::{FrameClock, Pacing};
pub use descriptor::{
    color_from_hex, default_system, parse_color, parse_descriptors, read_descriptors,
    CelestialBodyDescriptor,
};
pub use starfield::{build_starfield, hsl_to_rgb, StarColoring, Starfield, StarfieldConfig};
pub use system::{MotionConfig, SolarSystem};
