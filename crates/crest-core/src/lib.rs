//! Core types and traits for crest landscape search problems.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types that flow through every traversal operation:
//!
//! - [`Position`]: a validated `(x, y, z)` grid sample.
//! - [`Direction`]: the eight compass moves and their `(dx, dy)` deltas.
//! - [`HeightOrder`] and [`order::by_height_desc`]: the "higher is better"
//!   ordering policy used by priority-driven search drivers.
//! - [`SearchProblem`]: the seam through which search drivers consume a
//!   problem formulation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod order;
pub mod position;
pub mod problem;

pub use direction::Direction;
pub use error::{Axis, PositionError};
pub use order::HeightOrder;
pub use position::Position;
pub use problem::SearchProblem;
