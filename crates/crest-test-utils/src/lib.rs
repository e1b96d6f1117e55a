//! Synthetic landscapes and temporary image fixtures for crest development.
//!
//! The landscape builders produce small grids with known optima so that
//! enumeration and search behaviour can be asserted exactly.
//! [`TempImage`] writes an image into a temporary directory that is removed
//! on drop, for exercising the file-loading path.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use crest_landscape::Landscape;
use image::{GrayImage, Luma};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Every cell set to `value`.
pub fn constant(width: usize, height: usize, value: u8) -> Landscape {
    Landscape::filled(width, height, value).expect("fixture dimensions are non-zero")
}

/// Values rising by `step` per column, starting at 0 on the left edge.
pub fn ramp(width: usize, height: usize, step: u8) -> Landscape {
    Landscape::from_fn(width, height, |x, _| (x as u32 * u32::from(step)).min(255) as u8)
        .expect("fixture dimensions are non-zero")
}

/// A single peak of height 255 at `(px, py)`, falling off by `slope` per
/// Chebyshev step.
pub fn cone(width: usize, height: usize, px: usize, py: usize, slope: u8) -> Landscape {
    Landscape::from_fn(width, height, |x, y| {
        let d = x.abs_diff(px).max(y.abs_diff(py));
        255u32.saturating_sub(d as u32 * u32::from(slope)) as u8
    })
    .expect("fixture dimensions are non-zero")
}

/// Two peaks: a global one of 255 at `high` and a local one of 200 at
/// `low`, each falling off by 10 per Chebyshev step.
pub fn twin_peaks(width: usize, height: usize, high: (usize, usize), low: (usize, usize)) -> Landscape {
    Landscape::from_fn(width, height, |x, y| {
        let fall = |(px, py): (usize, usize), top: u32| {
            let d = x.abs_diff(px).max(y.abs_diff(py)) as u32;
            top.saturating_sub(d * 10)
        };
        fall(high, 255).max(fall(low, 200)) as u8
    })
    .expect("fixture dimensions are non-zero")
}

/// Alternating `lo`/`hi` cells of `cell` pixels each.
pub fn checkerboard(width: usize, height: usize, cell: usize, lo: u8, hi: u8) -> Landscape {
    Landscape::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            lo
        } else {
            hi
        }
    })
    .expect("fixture dimensions are non-zero")
}

/// A grayscale image file in a private temporary directory.
///
/// The directory and file are deleted when the fixture is dropped.
pub struct TempImage {
    _dir: TempDir,
    path: PathBuf,
}

impl TempImage {
    /// Save `image` as `name` (format chosen from the extension).
    pub fn save(name: &str, image: &GrayImage) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        image.save(&path).expect("save fixture image");
        Self { _dir: dir, path }
    }

    /// Save `landscape` as a PNG, one pixel per cell.
    pub fn from_landscape(landscape: &Landscape) -> Self {
        let image = landscape.to_gray_image().expect("landscape fits in an image");
        Self::save("landscape.png", &image)
    }

    /// A `width x height` PNG with every pixel set to `value`.
    pub fn uniform(width: u32, height: u32, value: u8) -> Self {
        Self::save("uniform.png", &GrayImage::from_pixel(width, height, Luma([value])))
    }

    /// Write arbitrary bytes under `name`, e.g. to provoke decode errors.
    pub fn raw_bytes(name: &str, bytes: &[u8]) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).expect("write fixture bytes");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
