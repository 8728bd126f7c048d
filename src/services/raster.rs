//! Raster collaborators: file size, header probe and full decode.
//!
//! The advisor only talks to the [`FileMetadata`] and [`RasterDecoder`]
//! traits, so tests can substitute in-memory images and injected failures.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::error::AdvisorError;

/// Byte size of a file on disk.
pub trait FileMetadata {
    fn byte_size(&self, path: &Path) -> Result<u64, AdvisorError>;
}

/// Decodes raster images.
pub trait RasterDecoder {
    /// Pixel dimensions `(width, height)`. Implementations should avoid a full
    /// decode when the format header is enough.
    fn dimensions(&self, path: &Path) -> Result<(u32, u32), AdvisorError>;

    /// Decode the whole image into 8-bit RGBA.
    fn decode(&self, path: &Path) -> Result<RgbaImage, AdvisorError>;
}

/// Filesystem and `image` crate backed implementation of both collaborators.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec;

impl ImageCodec {
    pub fn new() -> Self {
        Self
    }
}

fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>, AdvisorError> {
    let io_error = |source| AdvisorError::Io {
        path: path.to_path_buf(),
        source,
    };

    // Format from the extension, overridden by the magic bytes when recognised
    ImageReader::open(path)
        .map_err(io_error)?
        .with_guessed_format()
        .map_err(io_error)
}

fn decode_error(path: &Path, source: image::ImageError) -> AdvisorError {
    AdvisorError::Decode {
        path: path.to_path_buf(),
        source,
    }
}

impl FileMetadata for ImageCodec {
    fn byte_size(&self, path: &Path) -> Result<u64, AdvisorError> {
        std::fs::metadata(path)
            .map(|meta| meta.len())
            .map_err(|source| AdvisorError::Io {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl RasterDecoder for ImageCodec {
    fn dimensions(&self, path: &Path) -> Result<(u32, u32), AdvisorError> {
        open_reader(path)?
            .into_dimensions()
            .map_err(|e| decode_error(path, e))
    }

    fn decode(&self, path: &Path) -> Result<RgbaImage, AdvisorError> {
        let image = open_reader(path)?
            .decode()
            .map_err(|e| decode_error(path, e))?;
        tracing::trace!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Decoded image"
        );
        Ok(image.into_rgba8())
    }
}
