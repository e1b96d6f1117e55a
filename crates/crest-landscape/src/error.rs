//! Error types for landscape construction and loading.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors from constructing a [`Landscape`](crate::Landscape) grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LandscapeError {
    /// One of the dimensions is zero.
    Empty {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// `width * height` does not fit in `usize`.
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The value buffer does not hold exactly `width * height` cells.
    DataLengthMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}

impl fmt::Display for LandscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { width, height } => {
                write!(f, "landscape must have at least one cell, got {width}x{height}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "landscape of {width}x{height} cells is too large")
            }
            Self::DataLengthMismatch { expected, actual } => {
                write!(f, "expected {expected} values, got {actual}")
            }
        }
    }
}

impl Error for LandscapeError {}

/// Errors detected by [`LoadConfig::validate`](crate::LoadConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `downscale_factor` is NaN, infinite, not positive, or above 1.
    InvalidDownscaleFactor {
        /// The invalid value.
        value: f64,
    },
    /// `blur_kernel_size` is zero or even.
    InvalidKernelSize {
        /// The invalid value.
        value: u32,
    },
    /// `blur_sigma` is NaN, infinite, or not positive.
    InvalidSigma {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDownscaleFactor { value } => {
                write!(f, "downscale_factor must be in (0, 1], got {value}")
            }
            Self::InvalidKernelSize { value } => {
                write!(f, "blur_kernel_size must be odd and at least 1, got {value}")
            }
            Self::InvalidSigma { value } => {
                write!(f, "blur_sigma must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from [`load_landscape`](crate::load_landscape).
///
/// All load failures are fatal and surface immediately; nothing is retried.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file was read but is not a decodable image.
    Decode {
        /// Path that was requested.
        path: PathBuf,
        /// The underlying decoder error.
        source: image::ImageError,
    },
    /// The image, before or after downscaling, has a zero dimension.
    Empty {
        /// Width at the failing stage.
        width: u32,
        /// Height at the failing stage.
        height: u32,
    },
    /// The load configuration is invalid.
    Config(ConfigError),
    /// The preprocessed image was rejected as a landscape grid.
    Landscape(LandscapeError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "failed to decode {}: {source}", path.display())
            }
            Self::Empty { width, height } => {
                write!(f, "image is empty ({width}x{height})")
            }
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Landscape(e) => write!(f, "landscape: {e}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Config(e) => Some(e),
            Self::Landscape(e) => Some(e),
            Self::Empty { .. } => None,
        }
    }
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<LandscapeError> for LoadError {
    fn from(e: LandscapeError) -> Self {
        Self::Landscape(e)
    }
}
