//! Landscape search problem for local-search drivers.
//!
//! [`LandscapeProblem`] owns a [`Landscape`](crest_landscape::Landscape)
//! and answers the three questions a hill-climbing style driver asks:
//!
//! - What is the objective value here? ([`LandscapeProblem::objective_value`])
//! - Where can I go from here? ([`LandscapeProblem::actions`],
//!   [`LandscapeProblem::next`], [`LandscapeProblem::neighbours`])
//! - Is this a legal position? ([`LandscapeProblem::validate`])
//!
//! Found paths are handed to external renderers through [`PathTrace`] and
//! [`SurfaceExport`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod problem;
pub mod trace;

#[cfg(test)]
pub(crate) mod compliance;

pub use problem::{Actions, LandscapeProblem};
pub use trace::{ExportError, PathSample, PathTrace, SurfaceExport};
