use std::fs;
use std::path::Path;

use nalgebra::Point3;
use serde::Deserialize;

use crate::consts::DEFAULT_ROTATION_TIME;
use crate::error::{Error, Result};

/// The immutable description of a star or planet, as read from a data file.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBodyDescriptor {
    pub name: String,
    /// Asset reference, resolved against the asset directory
    pub texture: Option<String>,
    /// Multiple of the size unit
    pub radius: f64,
    /// Multiple of the distance unit. Zero pins the body at the origin.
    pub distance: f64,
    /// Simulated seconds per full spin
    pub rotation_time: f64,
    /// Material color used when there's no texture
    pub color: Point3<f32>,
}

// What's actually in the file. Turned into a descriptor after validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawDescriptor {
    name: String,
    #[serde(default)]
    texture: Option<String>,
    radius: f64,
    distance: f64,
    #[serde(default = "default_rotation_time")]
    rotation_time: f64,
    #[serde(default)]
    color: Option<String>,
}

fn default_rotation_time() -> f64 {
    DEFAULT_ROTATION_TIME
}

impl TryFrom<RawDescriptor> for CelestialBodyDescriptor {
    type Error = Error;

    fn try_from(raw: RawDescriptor) -> Result<Self> {
        let color = match &raw.color {
            Some(s) => parse_color(s)?,
            None => Point3::new(1.0, 1.0, 1.0),
        };

        let descriptor = CelestialBodyDescriptor {
            name: raw.name,
            texture: raw.texture,
            radius: raw.radius,
            distance: raw.distance,
            rotation_time: raw.rotation_time,
            color,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}

impl CelestialBodyDescriptor {
    pub fn new(name: &str, radius: f64, distance: f64) -> Self {
        CelestialBodyDescriptor {
            name: name.to_owned(),
            texture: None,
            radius,
            distance,
            rotation_time: DEFAULT_ROTATION_TIME,
            color: Point3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn with_rotation_time(mut self, rotation_time: f64) -> Self {
        self.rotation_time = rotation_time;
        self
    }

    pub fn with_texture(mut self, texture: &str) -> Self {
        self.texture = Some(texture.to_owned());
        self
    }

    pub fn with_color(mut self, color: Point3<f32>) -> Self {
        self.color = color;
        self
    }

    /// Checks the bounds every descriptor has to satisfy, however it was built.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| -> Result<()> {
            Err(Error::InvalidDescriptor {
                name: self.name.clone(),
                reason: reason.to_owned(),
            })
        };

        // NaN fails every one of these comparisons, so it gets rejected too
        if !(self.radius >= 0.0) || self.radius.is_infinite() {
            return invalid("radius must be finite and non-negative");
        }
        if !(self.distance >= 0.0) || self.distance.is_infinite() {
            return invalid("distance must be finite and non-negative");
        }
        if !(self.rotation_time > 0.0) || self.rotation_time.is_infinite() {
            return invalid("rotationTime must be a positive number of seconds");
        }
        Ok(())
    }

    pub fn is_stationary(&self) -> bool {
        self.distance == 0.0
    }
}

/// Parses an ordered JSON array of descriptors.
pub fn parse_descriptors(json: &str) -> Result<Vec<CelestialBodyDescriptor>> {
    let raw: Vec<RawDescriptor> = serde_json::from_str(json)?;
    if raw.is_empty() {
        return Err(Error::EmptySystem);
    }
    raw.into_iter()
        .map(CelestialBodyDescriptor::try_from)
        .collect()
}

pub fn read_descriptors(path: &Path) -> Result<Vec<CelestialBodyDescriptor>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    let descriptors = parse_descriptors(&contents)?;
    tracing::info!(
        "Loaded {} body descriptors from {}",
        descriptors.len(),
        path.display()
    );
    Ok(descriptors)
}

/// Parses a color written as six hex digits, e.g. `ffcc33`. A leading `#` is allowed.
pub fn parse_color(s: &str) -> Result<Point3<f32>> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(Error::InvalidColor(s.to_owned()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidColor(s.to_owned()))
    };
    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;

    Ok(Point3::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}

pub fn color_from_hex(rgb: u32) -> Point3<f32> {
    let r = (rgb >> 16) & 0xff;
    let g = (rgb >> 8) & 0xff;
    let b = rgb & 0xff;
    Point3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

/// The table used when no data file is given: the Sun followed by the eight planets.
///
/// Distances and radii are display scales, not astronomical ratios.
pub fn default_system() -> Vec<CelestialBodyDescriptor> {
    // name, texture, radius, distance, rotation time (s), color
    let table: [(&str, &str, f64, f64, f64, u32); 9] = [
        ("Sun", "sun.jpg", 20.0, 0.0, 2_192_832.0, 0xffcc33),
        ("Mercury", "mercury.jpg", 0.38, 0.4, 5_067_000.0, 0x9e9e9e),
        ("Venus", "venus.jpg", 0.95, 0.7, 20_997_360.0, 0xe8cda2),
        ("Earth", "earth.jpg", 1.0, 1.0, DEFAULT_ROTATION_TIME, 0x2f6fdc),
        ("Mars", "mars.jpg", 0.53, 1.5, 88_643.0, 0xc1440e),
        ("Jupiter", "jupiter.jpg", 6.0, 2.6, 35_730.0, 0xd8ca9d),
        ("Saturn", "saturn.jpg", 5.0, 3.4, 38_362.0, 0xead6b8),
        ("Uranus", "uranus.jpg", 2.5, 4.2, 62_064.0, 0xd1e7e7),
        ("Neptune", "neptune.jpg", 2.4, 5.0, 57_996.0, 0x5b5ddf),
    ];

    table
        .iter()
        .map(|&(name, texture, radius, distance, rotation_time, color)| {
            CelestialBodyDescriptor::new(name, radius, distance)
                .with_texture(texture)
                .with_rotation_time(rotation_time)
                .with_color(color_from_hex(color))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn test_parse_minimal() {
        let json = r#"[
            { "name": "Sun", "radius": 20, "distance": 0 },
            { "name": "Earth", "texture": "earth.jpg", "radius": 1, "distance": 1 }
        ]"#;
        let descriptors = parse_descriptors(json).unwrap();

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].name, "Sun");
        assert!(descriptors[0].is_stationary());
        assert_eq!(descriptors[0].texture, None);
        assert_eq!(descriptors[1].texture.as_deref(), Some("earth.jpg"));
        assert_eq!(descriptors[1].rotation_time, DEFAULT_ROTATION_TIME);
    }

    #[test]
    fn test_parse_rotation_time_and_color() {
        let json = r##"[{ "name": "Mars", "radius": 0.5, "distance": 1.5,
                          "rotationTime": 88643, "color": "#ff0000" }]"##;
        let descriptors = parse_descriptors(json).unwrap();

        assert_eq!(descriptors[0].rotation_time, 88643.0);
        assert_relative_eq!(descriptors[0].color, Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases = [
            r#"[{ "name": "A", "radius": -1, "distance": 1 }]"#,
            r#"[{ "name": "B", "radius": 1, "distance": -0.5 }]"#,
            r#"[{ "name": "C", "radius": 1, "distance": 1, "rotationTime": 0 }]"#,
        ];
        for json in cases.iter() {
            match parse_descriptors(json) {
                Err(Error::InvalidDescriptor { .. }) => {}
                other => panic!("Expected invalid descriptor for {}, got {:?}", json, other),
            }
        }
    }

    #[test]
    fn test_validate_builder_values() {
        assert!(CelestialBodyDescriptor::new("Ok", 1.0, 2.0).validate().is_ok());
        assert!(CelestialBodyDescriptor::new("Star", 20.0, 0.0).validate().is_ok());

        let bad = [
            CelestialBodyDescriptor::new("A", -1.0, 1.0),
            CelestialBodyDescriptor::new("B", 1.0, -0.5),
            CelestialBodyDescriptor::new("C", 1.0, 1.0).with_rotation_time(0.0),
            CelestialBodyDescriptor::new("D", 1.0, 1.0).with_rotation_time(-5.0),
            CelestialBodyDescriptor::new("E", f64::NAN, 1.0),
            CelestialBodyDescriptor::new("F", 1.0, 1.0).with_rotation_time(f64::INFINITY),
        ];
        for descriptor in bad.iter() {
            match descriptor.validate() {
                Err(Error::InvalidDescriptor { name, .. }) => assert_eq!(name, descriptor.name),
                other => panic!("Expected {} to be invalid, got {:?}", descriptor.name, other),
            }
        }
    }

    #[test]
    fn test_rejects_empty_and_malformed() {
        assert!(matches!(parse_descriptors("[]"), Err(Error::EmptySystem)));
        assert!(matches!(
            parse_descriptors(r#"[{ "name": "X" }]"#),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            parse_descriptors(r#"[{ "name": "X", "radius": 1, "distance": 1, "mass": 5 }]"#),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_parse_color() {
        assert_relative_eq!(
            parse_color("00ff80").unwrap(),
            Point3::new(0.0, 1.0, 128.0 / 255.0)
        );
        assert!(parse_color("fff").is_err());
        assert!(parse_color("gg0000").is_err());
        assert_relative_eq!(color_from_hex(0x0000ff), Point3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_default_system_starts_with_star() {
        let system = default_system();
        assert_eq!(system.len(), 9);
        assert!(system[0].is_stationary());
        assert!(system[1..].iter().all(|d| d.distance > 0.0));
        assert!(system.iter().all(|d| d.rotation_time > 0.0));
    }
}
