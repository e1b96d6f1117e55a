//! The [`Landscape`] grid.

use crate::error::LandscapeError;
use image::GrayImage;
use std::slice::ChunksExact;

/// A dense, immutable 2-D grid of objective values in `[0, 255]`.
///
/// Cells are addressed as `(x, y)` with `x` the column in `[0, width)` and
/// `y` the row in `[0, height)`. Storage is row-major: the value at
/// `(x, y)` is `as_slice()[y * width + x]`.
///
/// A landscape is never mutated after construction and may be shared
/// across threads without synchronisation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Landscape {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Landscape {
    /// Wrap a row-major value buffer.
    ///
    /// Returns `Err(LandscapeError::Empty)` if either dimension is zero,
    /// `Err(LandscapeError::TooLarge)` if the cell count overflows `usize`,
    /// or `Err(LandscapeError::DataLengthMismatch)` if `data` does not hold
    /// exactly `width * height` values.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, LandscapeError> {
        if width == 0 || height == 0 {
            return Err(LandscapeError::Empty { width, height });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(LandscapeError::TooLarge { width, height })?;
        if data.len() != expected {
            return Err(LandscapeError::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a landscape by evaluating `f(x, y)` for every cell.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> u8,
    ) -> Result<Self, LandscapeError> {
        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::from_raw(width, height, data)
    }

    /// A flat landscape with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self, LandscapeError> {
        Self::from_raw(width, height, vec![value; width.saturating_mul(height)])
    }

    /// Take ownership of an 8-bit grayscale image.
    pub fn from_gray_image(image: GrayImage) -> Result<Self, LandscapeError> {
        let width = image.width() as usize;
        let height = image.height() as usize;
        Self::from_raw(width, height, image.into_raw())
    }

    /// Copy the grid into an 8-bit grayscale image.
    pub fn to_gray_image(&self) -> Option<GrayImage> {
        GrayImage::from_raw(self.width as u32, self.height as u32, self.data.clone())
    }

    /// Number of columns (W).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (H).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    /// Row-major cell values.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over rows, `y = 0` first.
    pub fn rows(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(self.width)
    }

    /// Whether `(x, y)` names a cell of this grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.index_of(x, y).is_some()
    }

    /// Value at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<u8> {
        self.index_of(x, y).map(|i| self.data[i])
    }

    /// Value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn value(&self, x: usize, y: usize) -> u8 {
        assert!(
            x < self.width && y < self.height,
            "coordinate ({x}, {y}) out of bounds: [0, {}) x [0, {})",
            self.width,
            self.height
        );
        self.data[y * self.width + x]
    }

    /// Smallest and largest cell value.
    pub fn min_max(&self) -> (u8, u8) {
        self.data
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Coordinates and value of the highest cell. Ties resolve to the first
    /// cell in row-major order.
    pub fn peak(&self) -> (usize, usize, u8) {
        let (i, v) = self
            .data
            .iter()
            .enumerate()
            .fold((0, self.data[0]), |best, (i, &v)| if v > best.1 { (i, v) } else { best });
        (i % self.width, i / self.width, v)
    }

    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}
