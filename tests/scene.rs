use std::f64::consts::PI;
use std::fs;
use std::time::Duration;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::Point3;
use planetarium::consts::FRAME_STEP;
use planetarium::gui::{CameraConfig, OrbitCamera};
use planetarium::model::{
    default_system, parse_descriptors, read_descriptors, BodyID, MotionConfig, OrbitModel,
    Pacing, SolarSystem, StarColoring, Starfield, StarfieldConfig,
};
use planetarium::Error;

const STAR_AND_EARTH: &str = r#"[
    { "name": "Sun", "radius": 20, "distance": 0 },
    { "name": "Earth", "radius": 1, "distance": 1, "rotationTime": 86344 }
]"#;

fn star_and_earth() -> SolarSystem {
    let descriptors = parse_descriptors(STAR_AND_EARTH).unwrap();
    SolarSystem::new(descriptors, MotionConfig::default()).unwrap()
}

#[test]
fn test_star_and_earth_scenario() {
    let mut system = star_and_earth();
    assert_eq!(system.len(), 2);

    let earth = system.get_body(BodyID(1));
    assert_eq!(earth.position(), Point3::new(100.0, 0.0, 100.0));
    assert_eq!(system.get_body(BodyID(0)).radius(), 20.0);

    system.update();
    let earth = system.get_body(BodyID(1));
    let angle = PI / 1800.0;
    assert_relative_eq!(earth.position().x, angle.sin() * 100.0, epsilon = 1e-9);
    assert_relative_eq!(earth.position().z, angle.cos() * 100.0, epsilon = 1e-9);
    assert_relative_eq!(earth.rotation_y(), 2.0 * PI / 86344.0 * FRAME_STEP);
}

#[test]
fn test_every_planet_stays_on_its_circle() {
    for orbit_model in [OrbitModel::Shared, OrbitModel::Keplerian] {
        let config = MotionConfig {
            orbit_model,
            ..MotionConfig::default()
        };
        let mut system = SolarSystem::new(default_system(), config).unwrap();

        for _ in 0..2000 {
            system.update();
            for body in system.bodies().skip(1) {
                let p = body.position();
                let r = body.orbit_radius();
                assert_relative_eq!(p.x * p.x + p.z * p.z, r * r, max_relative = 1e-10);
            }
            assert_eq!(system.central_body().position(), Point3::origin());
        }
    }
}

#[test]
fn test_shared_speed_ignores_distance() {
    let mut system = SolarSystem::new(default_system(), MotionConfig::default()).unwrap();
    system.advance(900.0);

    // Everyone is a quarter of the way around, regardless of distance
    for body in system.bodies().skip(1) {
        let p = body.position();
        assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p.x, body.orbit_radius(), max_relative = 1e-12);
    }
}

#[test]
fn test_keplerian_outer_planets_lag() {
    let config = MotionConfig {
        orbit_model: OrbitModel::Keplerian,
        ..MotionConfig::default()
    };
    let mut system = SolarSystem::new(default_system(), config).unwrap();
    system.advance(100.0);

    let angle = |id: usize| {
        let p = system.get_body(BodyID(id)).position();
        p.x.atan2(p.z)
    };
    // Mercury, Earth, Neptune
    assert!(angle(1) > angle(3));
    assert!(angle(3) > angle(8));
}

#[test]
fn test_wall_clock_matches_frame_locked_at_reference_rate() {
    let mut locked = star_and_earth();
    let mut timed = star_and_earth();
    let pacing = Pacing::WallClock {
        reference_fps: 60.0,
    };

    // 60 frames at 60 fps, against 30 frames at 30 fps: the same second of time
    for _ in 0..60 {
        locked.advance(Pacing::FrameLocked.frames_for(Duration::from_millis(16)));
    }
    for _ in 0..30 {
        timed.advance(pacing.frames_for(Duration::from_secs_f64(1.0 / 30.0)));
    }

    let a = locked.get_body(BodyID(1));
    let b = timed.get_body(BodyID(1));
    // 1/30 s isn't a whole number of nanoseconds, so the timed run drifts slightly
    assert_relative_eq!(a.phase(), b.phase(), max_relative = 1e-6);
    assert_relative_eq!(a.position(), b.position(), epsilon = 1e-4);
    assert_relative_eq!(a.rotation_y(), b.rotation_y(), max_relative = 1e-6);
}

#[test]
fn test_read_descriptor_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bodies.json");
    fs::write(&path, STAR_AND_EARTH).unwrap();

    let descriptors = read_descriptors(&path).unwrap();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[1].name, "Earth");

    match read_descriptors(&dir.path().join("missing.json")) {
        Err(Error::Io { path, .. }) => assert!(path.ends_with("missing.json")),
        other => panic!("Expected an IO error, got {:?}", other),
    }
}

#[test]
fn test_bundled_data_matches_builtin_table() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/planets.json");
    let from_file = read_descriptors(&path).unwrap();
    assert_eq!(from_file, default_system());
}

#[test]
fn test_starfield_properties() {
    let config = StarfieldConfig {
        count: 5000,
        spread: 300.0,
        ..StarfieldConfig::default()
    };
    let stars = Starfield::generate(&config);

    assert_eq!(stars.len(), 5000);
    assert!(stars
        .positions
        .iter()
        .all(|p| p.iter().all(|c| c.abs() <= 300.0)));
    assert!(stars.colors.iter().all(|c| *c == Point3::origin()));

    let fixed = StarfieldConfig {
        coloring: StarColoring::HslRamp,
        ..config
    };
    let colorful = Starfield::generate(&fixed);
    assert!(colorful.colors.iter().any(|c| *c != Point3::origin()));
}

#[test]
fn test_resize_sets_aspect() {
    let mut camera = OrbitCamera::new(&CameraConfig::default(), 1920, 1080);
    camera.resize(800, 600);
    assert_eq!(camera.aspect(), 800.0 / 600.0);
    assert_eq!(camera.width(), 800);
    assert_eq!(camera.height(), 600);
}
