//! Error type shared by the image pipeline, the matcher and the render sinks.
use std::path::PathBuf;

/// Reasons why loading, partitioning, matching or writing may fail.
#[derive(Clone, Debug, PartialEq)]
pub enum AsciiArtError {
    /// The image file could not be read or decoded.
    Decode { path: PathBuf, reason: String },
    /// An image or HTML page could not be written.
    Encode { path: PathBuf, reason: String },
    /// Resolution is zero or does not evenly divide the image width.
    InvalidResolution { resolution: usize, width: usize },
    /// The square tile size does not evenly divide the image height.
    UnevenHeight { height: usize, sub_size: usize },
    /// Resolution lies outside `max(1, w/h) ..= w`.
    ResolutionOutOfBounds {
        resolution: usize,
        min: usize,
        max: usize,
    },
    /// Lookup was attempted while the live charset is empty.
    EmptyCharset,
    /// Lookup brightness was NaN or infinite.
    NonFiniteBrightness(f64),
    /// Font data could not be read or parsed.
    Font(String),
}

impl std::fmt::Display for AsciiArtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AsciiArtError::Decode { path, reason } => {
                write!(f, "failed to decode {}: {reason}", path.display())
            }
            AsciiArtError::Encode { path, reason } => {
                write!(f, "failed to write {}: {reason}", path.display())
            }
            AsciiArtError::InvalidResolution { resolution, width } => write!(
                f,
                "resolution {resolution} does not evenly divide image width {width}"
            ),
            AsciiArtError::UnevenHeight { height, sub_size } => write!(
                f,
                "tile size {sub_size} does not evenly divide image height {height}"
            ),
            AsciiArtError::ResolutionOutOfBounds {
                resolution,
                min,
                max,
            } => write!(f, "resolution {resolution} outside [{min}, {max}]"),
            AsciiArtError::EmptyCharset => write!(f, "charset is empty"),
            AsciiArtError::NonFiniteBrightness(value) => {
                write!(f, "brightness {value} is not finite")
            }
            AsciiArtError::Font(reason) => write!(f, "font error: {reason}"),
        }
    }
}

impl std::error::Error for AsciiArtError {}

pub type Result<T> = std::result::Result<T, AsciiArtError>;
