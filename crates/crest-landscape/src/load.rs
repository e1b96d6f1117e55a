//! Loading landscapes from raster images.

use crate::config::LoadConfig;
use crate::error::LoadError;
use crate::grid::Landscape;
use crate::preprocess;
use image::{DynamicImage, ImageReader};
use log::debug;
use std::path::Path;

/// Read the image at `path` and turn it into a [`Landscape`].
///
/// The configuration is validated before the file is opened. The file
/// format is guessed from its contents, not its extension.
pub fn load_landscape(path: impl AsRef<Path>, config: &LoadConfig) -> Result<Landscape, LoadError> {
    let path = path.as_ref();
    config.validate()?;

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let image = reader.decode().map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    landscape_from_image(image, config)
}

/// Run the preprocessing pipeline on an already-decoded image.
///
/// Converts to 8-bit luma, downscales by `config.downscale_factor` and
/// blurs with a `config.blur_kernel_size`-tap Gaussian.
pub fn landscape_from_image(
    image: DynamicImage,
    config: &LoadConfig,
) -> Result<Landscape, LoadError> {
    config.validate()?;

    let gray = image.into_luma8();
    let (w, h) = gray.dimensions();
    if w == 0 || h == 0 {
        return Err(LoadError::Empty {
            width: w,
            height: h,
        });
    }

    let small = preprocess::downscale(&gray, config.downscale_factor);
    let (sw, sh) = small.dimensions();
    if sw == 0 || sh == 0 {
        return Err(LoadError::Empty {
            width: sw,
            height: sh,
        });
    }
    debug!(
        "downscaled {w}x{h} -> {sw}x{sh} (factor {})",
        config.downscale_factor
    );

    let smooth = if config.blur_kernel_size > 1 {
        let sigma = config.effective_sigma();
        debug!(
            "blurring with {}-tap gaussian, sigma {sigma:.3}",
            config.blur_kernel_size
        );
        let kernel = preprocess::gaussian_kernel(config.blur_kernel_size, sigma);
        preprocess::blur(&small, &kernel)
    } else {
        small
    };

    Ok(Landscape::from_gray_image(smooth)?)
}
