//! Errors produced while loading descriptor data, textures, or opening the window.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A data file could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Descriptor data wasn't valid JSON, or had the wrong shape.
    #[error("failed to parse body descriptors: {0}")]
    Parse(#[from] serde_json::Error),

    /// A descriptor parsed fine but its values are out of range.
    #[error("invalid descriptor for {name}: {reason}")]
    InvalidDescriptor { name: String, reason: String },

    #[error("invalid color {0:?}, expected six hex digits")]
    InvalidColor(String),

    #[error("no bodies to build a scene from")]
    EmptySystem,

    /// A texture was missing or couldn't be decoded. Fatal to scene construction.
    #[error("failed to load texture {path} for {body}: {source}")]
    Texture {
        body: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// No window could be opened to render into.
    #[error("could not attach a rendering surface: {0}")]
    Surface(String),
}
