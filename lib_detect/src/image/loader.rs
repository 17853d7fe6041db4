use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError};
use log::{error, info};
use thiserror::Error;

use super::format::LoadedImage;
use super::resize::ResizeError;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("could not decode image data: {0}")]
    DecodeBytes(#[source] ImageError),
    #[error("image cannot be displayed")]
    Resize(#[from] ResizeError),
}

/// Decodes the file at `path` and fits it to a canvas of `canvas` pixels.
pub fn load_image(path: &Path, canvas: (u32, u32)) -> Result<LoadedImage, LoadError> {
    let decoded = image::open(path).map_err(|source| {
        error!("Failed to decode {}: {}", path.display(), source);
        LoadError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let loaded = LoadedImage::new(decoded.into_rgb8(), canvas)?.with_path(path);
    info!(
        "Loaded {} ({}x{}), displayed at {:?}",
        path.display(),
        loaded.original_size().0,
        loaded.original_size().1,
        loaded.geometry()
    );
    Ok(loaded)
}

/// Same as [`load_image`] for an in-memory encoded image.
pub fn load_image_from_bytes(bytes: &[u8], canvas: (u32, u32)) -> Result<LoadedImage, LoadError> {
    let decoded: DynamicImage = image::load_from_memory(bytes).map_err(|source| {
        error!("Failed to decode {} bytes: {}", bytes.len(), source);
        LoadError::DecodeBytes(source)
    })?;

    Ok(LoadedImage::new(decoded.into_rgb8(), canvas)?)
}
