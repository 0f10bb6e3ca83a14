use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by canvas engine operations.
///
/// Every failure is reported to the caller as a value; none is fatal to the
/// process, and a failed open or save leaves the canvas in its previous
/// valid state.
#[derive(Debug, Error)]
pub enum PaintError {
    /// A surface cannot be created or rescaled to these dimensions.
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// The encoded bytes are not a decodable image.
    #[error("failed to decode image data: {source}")]
    Decode {
        #[source]
        source: image::ImageError,
    },

    /// Encoding the pixel buffer for `path` failed.
    #[error("failed to encode image to {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Reading or writing `path` failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PaintError>;
