//! Crest: image-derived landscapes for local-search algorithms.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all crest sub-crates. For most users, adding `crest` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use crest::prelude::*;
//!
//! // A 4×4 plateau; real landscapes come from `LandscapeProblem::load`.
//! let landscape = Landscape::filled(4, 4, 100).unwrap();
//! let problem = LandscapeProblem::new(landscape);
//!
//! let corner = Position::new(0, 0, 100).unwrap();
//! let moves: Vec<Direction> = problem.actions(&corner).map(|(d, _)| d).collect();
//! assert_eq!(moves, [Direction::R, Direction::U, Direction::RU]);
//!
//! // Higher is better: pick the best neighbour with the descending key.
//! let best = problem.next(&corner).min_by_key(Position::descending_key);
//! assert_eq!(best.map(|p| p.z()), Some(100));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `crest-core` | `Position`, `Direction`, ordering, `SearchProblem` |
//! | [`landscape`] | `crest-landscape` | `Landscape` grid, preprocessing, image loading |
//! | [`problem`] | `crest-problem` | `LandscapeProblem`, path and surface export |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and traits (`crest-core`).
pub use crest_core as types;

/// Landscape grids and image loading (`crest-landscape`).
///
/// Use [`landscape::LoadConfig`] to change the downscale factor or blur
/// kernel; [`landscape::preprocess`] exposes the individual stages.
pub use crest_landscape as landscape;

/// The landscape search problem (`crest-problem`).
pub use crest_problem as problem;

/// Common imports for typical crest usage.
///
/// ```rust
/// use crest::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crest_core::{Direction, HeightOrder, Position, PositionError, SearchProblem};

    // Landscape
    pub use crest_landscape::{Landscape, LoadConfig, LoadError};

    // Problem
    pub use crest_problem::{LandscapeProblem, PathTrace, SurfaceExport};
}
