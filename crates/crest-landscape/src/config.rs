//! Landscape loading configuration.

use crate::error::ConfigError;

/// Parameters of the image-to-landscape preprocessing.
///
/// Validated by [`load_landscape`](crate::load_landscape) before any file is
/// touched; all values are plain data and may be changed freely before use.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadConfig {
    /// Scale applied to both image dimensions before smoothing.
    ///
    /// Default: 0.25. Smaller values give a coarser grid and faster search.
    /// Must be finite and in `(0, 1]`.
    pub downscale_factor: f64,

    /// Number of taps of the separable Gaussian blur.
    ///
    /// Default: 5. Larger kernels flatten more single-pixel local optima.
    /// Must be odd; 1 disables smoothing.
    pub blur_kernel_size: u32,

    /// Gaussian standard deviation.
    ///
    /// Default: `None`, which derives the sigma from the kernel size
    /// (see [`sigma_for_kernel`](Self::sigma_for_kernel)).
    pub blur_sigma: Option<f64>,
}

impl LoadConfig {
    /// Default downscale factor.
    pub const DEFAULT_DOWNSCALE_FACTOR: f64 = 0.25;

    /// Default blur kernel size.
    pub const DEFAULT_BLUR_KERNEL_SIZE: u32 = 5;

    /// A configuration that keeps the image as-is: no resize, no blur.
    pub fn raw() -> Self {
        Self {
            downscale_factor: 1.0,
            blur_kernel_size: 1,
            blur_sigma: None,
        }
    }

    /// Check every parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = self.downscale_factor;
        if !f.is_finite() || f <= 0.0 || f > 1.0 {
            return Err(ConfigError::InvalidDownscaleFactor { value: f });
        }
        if self.blur_kernel_size == 0 || self.blur_kernel_size % 2 == 0 {
            return Err(ConfigError::InvalidKernelSize {
                value: self.blur_kernel_size,
            });
        }
        if let Some(sigma) = self.blur_sigma {
            if !sigma.is_finite() || sigma <= 0.0 {
                return Err(ConfigError::InvalidSigma { value: sigma });
            }
        }
        Ok(())
    }

    /// Sigma derived from a kernel size: `0.3 * ((k - 1) / 2 - 1) + 0.8`.
    pub fn sigma_for_kernel(kernel_size: u32) -> f64 {
        0.3 * ((f64::from(kernel_size) - 1.0) * 0.5 - 1.0) + 0.8
    }

    /// The sigma actually used by the blur stage.
    pub fn effective_sigma(&self) -> f64 {
        self.blur_sigma
            .unwrap_or_else(|| Self::sigma_for_kernel(self.blur_kernel_size))
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            downscale_factor: Self::DEFAULT_DOWNSCALE_FACTOR,
            blur_kernel_size: Self::DEFAULT_BLUR_KERNEL_SIZE,
            blur_sigma: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = LoadConfig::default();
        assert_eq!(c.downscale_factor, 0.25);
        assert_eq!(c.blur_kernel_size, 5);
        assert!(c.validate().is_ok());
        assert!(LoadConfig::raw().validate().is_ok());
    }

    #[test]
    fn default_sigma_for_five_taps() {
        let sigma = LoadConfig::default().effective_sigma();
        assert!((sigma - 1.1).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_factor() {
        for value in [0.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            let c = LoadConfig {
                downscale_factor: value,
                ..LoadConfig::default()
            };
            assert!(
                matches!(c.validate(), Err(ConfigError::InvalidDownscaleFactor { .. })),
                "{value}"
            );
        }
    }

    #[test]
    fn rejects_even_or_zero_kernel() {
        for value in [0, 2, 4] {
            let c = LoadConfig {
                blur_kernel_size: value,
                ..LoadConfig::default()
            };
            assert_eq!(c.validate(), Err(ConfigError::InvalidKernelSize { value }));
        }
    }

    #[test]
    fn wide_odd_kernel_is_usable() {
        let c = LoadConfig {
            blur_kernel_size: 100_001,
            ..LoadConfig::default()
        };
        assert!(c.validate().is_ok());
        let kernel = crate::preprocess::gaussian_kernel(c.blur_kernel_size, c.effective_sigma());
        assert_eq!(kernel.len(), 100_001);
        assert!(kernel.iter().all(|w| w.is_finite()));
    }

    #[test]
    fn rejects_bad_sigma() {
        let c = LoadConfig {
            blur_sigma: Some(0.0),
            ..LoadConfig::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::InvalidSigma { .. })));
    }
}
