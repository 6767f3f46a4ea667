//! Error type shared by buffer construction and font loading.

use thiserror::Error;

/// Errors reported by `vector-raster`.
///
/// Rasterization itself has no failure modes: bad geometry produces
/// well-defined (if visually wrong) coverage. Errors only arise when sizing
/// buffers or loading fonts.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested buffer does not fit in addressable memory.
    #[error("buffer dimensions {width}x{height} overflow the addressable size")]
    DimensionsTooLarge { width: usize, height: usize },

    /// The font data could not be parsed.
    #[cfg(feature = "font")]
    #[error("failed to parse font face: {0}")]
    FontParse(#[from] ttf_parser::FaceParsingError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Number of elements needed for a `width × height` buffer with `channels`
/// elements per pixel.
pub(crate) fn buffer_len(width: usize, height: usize, channels: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(Error::DimensionsTooLarge { width, height })
}
