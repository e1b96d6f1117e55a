//! Grayscale preprocessing: downscaling and separable Gaussian smoothing.
//!
//! Purpose
//! - Turn a full-resolution luma image into a coarse, smooth landscape so
//!   that hill-climbing style searches are not trapped by single-pixel
//!   noise.
//!
//! Design
//! - Downscaling uses bilinear filtering (`FilterType::Triangle`) to
//!   `round(w * f) x round(h * f)`.
//! - Smoothing is a separable Gaussian (horizontal pass, then vertical)
//!   accumulated in `f32`; the intermediate buffer is not rounded.
//! - Borders reflect without repeating the edge pixel (`dcb|abcd|cba`).
//! - Output rounds to nearest and clamps to `[0, 255]`.
//!
//! Complexity
//! - Blur is O(W·H·k) for a k-tap kernel.

use image::imageops::{self, FilterType};
use image::GrayImage;

/// Target size of a `width x height` image scaled by `factor`.
pub fn scaled_dimensions(width: u32, height: u32, factor: f64) -> (u32, u32) {
    let scale = |v: u32| (f64::from(v) * factor).round() as u32;
    (scale(width), scale(height))
}

/// Resize `image` by `factor` in both dimensions.
///
/// Returns a copy when the size is unchanged. A zero target dimension yields
/// an empty image; callers decide whether that is an error.
pub fn downscale(image: &GrayImage, factor: f64) -> GrayImage {
    let (w, h) = scaled_dimensions(image.width(), image.height(), factor);
    if (w, h) == image.dimensions() {
        return image.clone();
    }
    if w == 0 || h == 0 {
        return GrayImage::new(w, h);
    }
    imageops::resize(image, w, h, FilterType::Triangle)
}

/// Normalised 1-D Gaussian of `size` taps (odd) and standard deviation
/// `sigma`.
pub fn gaussian_kernel(size: u32, sigma: f64) -> Vec<f32> {
    let radius = i64::from(size / 2);
    let denom = 2.0 * sigma * sigma;
    let raw: Vec<f64> = (-radius..=radius)
        .map(|i| {
            let i = i as f64;
            (-(i * i) / denom).exp()
        })
        .collect();
    let sum: f64 = raw.iter().sum();
    raw.into_iter().map(|w| (w / sum) as f32).collect()
}

/// Apply `kernel` separably along rows and then columns.
///
/// A single-tap kernel returns an unchanged copy.
pub fn blur(image: &GrayImage, kernel: &[f32]) -> GrayImage {
    if kernel.len() <= 1 {
        return image.clone();
    }
    let w = image.width() as usize;
    let h = image.height() as usize;
    if w == 0 || h == 0 {
        return image.clone();
    }
    let radius = (kernel.len() / 2) as isize;
    let src = image.as_raw();

    // horizontal
    let mut tmp = vec![0f32; w * h];
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        for x in 0..w {
            let mut acc = 0f32;
            for (k, &weight) in kernel.iter().enumerate() {
                let xi = reflect_101(x as isize + k as isize - radius, w);
                acc += weight * f32::from(row[xi]);
            }
            tmp[y * w + x] = acc;
        }
    }

    // vertical
    let mut out = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0f32;
            for (k, &weight) in kernel.iter().enumerate() {
                let yi = reflect_101(y as isize + k as isize - radius, h);
                acc += weight * tmp[yi * w + x];
            }
            out[y * w + x] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }

    GrayImage::from_raw(w as u32, h as u32, out).unwrap_or_else(|| image.clone())
}

/// Reflect an out-of-range index back into `[0, n)` without repeating the
/// border sample.
fn reflect_101(i: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let n = n as isize;
    let period = 2 * n - 2;
    let i = i.rem_euclid(period);
    (if i >= n { period - i } else { i }) as usize
}
