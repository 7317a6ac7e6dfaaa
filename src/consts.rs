use std::f64::consts::PI;

// Scene scale. Descriptor radii and distances are unitless factors of these.
pub const SIZE_UNIT: f64 = 1.0;
pub const DISTANCE_UNIT: f64 = 100.0;

// Orbital phase advanced per rendered frame, in radians (one degree)
pub const PHASE_STEP: f64 = PI / 180.0;
// Shared revolution speed; phase is multiplied by this before projecting
pub const ORBITAL_SPEED: f64 = 0.1;
// Simulated seconds that one rendered frame stands for when spinning a body
pub const FRAME_STEP: f64 = 30.0;

// Seconds per full spin when a descriptor doesn't say
pub const DEFAULT_ROTATION_TIME: f64 = 86344.0;

// Frame rate that wall-clock pacing treats as "one frame per frame"
pub const REFERENCE_FPS: f64 = 60.0;

// -- camera --
pub const CAMERA_FOVY_DEGREES: f32 = 40.0;
pub const CAMERA_Z_NEAR: f32 = 0.1;
pub const CAMERA_Z_FAR: f32 = 20_000.0;
pub const CAMERA_START_DIRECTION: [f32; 3] = [10.0, 5.0, 20.0];
pub const CAMERA_START_DISTANCE: f32 = 450.0;
pub const CAMERA_MIN_DISTANCE: f32 = 25.0;
pub const CAMERA_MAX_DISTANCE: f32 = 5_000.0;
pub const CAMERA_DAMPING: f32 = 0.1;

// -- scene dressing --
pub const BACKGROUND_COLOR: u32 = 0x001230;
pub const AXES_LENGTH: f32 = 5.0;

// -- starfield --
pub const STARFIELD_COUNT: usize = 5000;
pub const STARFIELD_SPREAD: f32 = 6_000.0;
pub const STARFIELD_POINT_SIZE: f32 = 2.0;
pub const STARFIELD_SEED: u64 = 0x5eed_5ca1_ab1e;
