//! Texture loading.
//!
//! Textures are read and decoded off the GPU here, so that a missing or
//! corrupt file shows up as an error before any scene object exists. The
//! encoded bytes are kept around and handed to the engine's texture manager
//! when the body is built.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use crate::error::{Error, Result};
use crate::model::CelestialBodyDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// One texture at a time, in body order. Stops at the first failure.
    Sequential,
    /// All textures at once on scoped threads, joined before returning.
    Concurrent,
}

impl Default for LoadStrategy {
    fn default() -> Self {
        LoadStrategy::Sequential
    }
}

#[derive(Debug, Clone)]
pub struct LoadedTexture {
    /// The asset reference, also used as the engine-side texture name
    pub name: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub fn resolve_texture_path(asset_dir: &Path, texture: &str) -> PathBuf {
    asset_dir.join(texture)
}

/// Reads and decodes one texture.
pub fn load_texture(asset_dir: &Path, body_name: &str, texture: &str) -> Result<LoadedTexture> {
    let path = resolve_texture_path(asset_dir, texture);
    let to_error = |source| Error::Texture {
        body: body_name.to_owned(),
        path: path.clone(),
        source,
    };

    let bytes = fs::read(&path).map_err(|e| to_error(image::ImageError::IoError(e)))?;
    let decoded = image::load_from_memory(&bytes).map_err(to_error)?;

    Ok(LoadedTexture {
        name: texture.to_owned(),
        width: decoded.width(),
        height: decoded.height(),
        path,
        bytes,
    })
}

/// Loads the texture of every descriptor that names one.
///
/// The result lines up with `descriptors`; bodies without a texture get `None`.
pub fn load_textures(
    asset_dir: &Path,
    descriptors: &[CelestialBodyDescriptor],
    strategy: LoadStrategy,
) -> Result<Vec<Option<LoadedTexture>>> {
    let load_one = |descriptor: &CelestialBodyDescriptor| -> Result<Option<LoadedTexture>> {
        match &descriptor.texture {
            None => Ok(None),
            Some(texture) => {
                let loaded = load_texture(asset_dir, &descriptor.name, texture)?;
                tracing::info!(
                    "Loaded texture {} ({}x{}) for {}",
                    loaded.path.display(),
                    loaded.width,
                    loaded.height,
                    descriptor.name
                );
                Ok(Some(loaded))
            }
        }
    };

    match strategy {
        LoadStrategy::Sequential => descriptors.iter().map(load_one).collect(),
        LoadStrategy::Concurrent => {
            let results: Vec<Result<Option<LoadedTexture>>> = thread::scope(|scope| {
                let handles: Vec<_> = descriptors
                    .iter()
                    .map(|descriptor| scope.spawn(move || load_one(descriptor)))
                    .collect();

                handles
                    .into_iter()
                    .map(|handle| match handle.join() {
                        Ok(result) => result,
                        Err(panic) => std::panic::resume_unwind(panic),
                    })
                    .collect()
            });
            // Collecting keeps body order, so the reported error is the
            // first failing body, not the first thread to fail.
            results.into_iter().collect()
        }
    }
}
