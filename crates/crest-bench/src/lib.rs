//! Benchmark profiles for the crest landscape search problem.
//!
//! - [`reference_profile`]: 100x100 landscape (10K cells), the typical size
//!   of a 400x400 image after quarter downscaling
//! - [`stress_profile`]: 1000x1000 landscape (1M cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use crest_landscape::Landscape;
use crest_problem::LandscapeProblem;

/// Build the reference profile: a 100x100 rolling landscape.
pub fn reference_profile() -> LandscapeProblem {
    LandscapeProblem::new(rolling(100, 100))
}

/// Build the stress profile: a 1000x1000 rolling landscape.
pub fn stress_profile() -> LandscapeProblem {
    LandscapeProblem::new(rolling(1000, 1000))
}

/// Deterministic landscape with many local optima.
///
/// Integer hash of the cell coordinates folded into `[0, 255]`, so the
/// benchmark does not depend on an image file.
pub fn rolling(width: usize, height: usize) -> Landscape {
    Landscape::from_fn(width, height, |x, y| {
        let h = (x as u64)
            .wrapping_mul(6364136223846793007)
            .wrapping_add((y as u64).wrapping_mul(1442695040888963407));
        (h >> 56) as u8
    })
    .unwrap_or_else(|e| panic!("benchmark landscape: {e}"))
}
