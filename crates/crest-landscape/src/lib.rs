//! Image-derived scalar landscapes for crest search problems.
//!
//! A [`Landscape`] is a dense, immutable 2-D grid of `u8` objective values.
//! Landscapes are usually produced from a raster image by
//! [`load_landscape`], which decodes the file, converts it to 8-bit luma,
//! downscales it and smooths it with a small Gaussian so that single-pixel
//! noise does not turn into spurious local optima.
//!
//! # Preprocessing
//!
//! The individual stages live in [`preprocess`] and are configured through
//! [`LoadConfig`]:
//!
//! - [`preprocess::downscale`]: bilinear resize by a fixed factor.
//! - [`preprocess::blur`]: separable Gaussian with reflected borders.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod grid;
pub mod load;
pub mod preprocess;

pub use config::LoadConfig;
pub use error::{ConfigError, LandscapeError, LoadError};
pub use grid::Landscape;
pub use load::{landscape_from_image, load_landscape};
