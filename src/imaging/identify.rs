//! Source image identification.

use super::calculations::Dimensions;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to read dimensions of {path}: {source}")]
    Image {
        path: String,
        source: image::ImageError,
    },
}

/// Read image dimensions from the file header, without a full decode.
pub fn identify(path: &Path) -> Result<Dimensions, ImagingError> {
    if !path.exists() {
        return Err(ImagingError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        )));
    }
    let (width, height) = image::image_dimensions(path).map_err(|source| ImagingError::Image {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), width, height, "identified image");
    Ok(Dimensions { width, height })
}
