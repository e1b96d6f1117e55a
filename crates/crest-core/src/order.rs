//! Height ordering policy for priority-driven consumers.
//!
//! Higher positions are preferred. The policy lives here, outside
//! [`Position`], so that drivers opt into it explicitly:
//!
//! - [`Position::descending_key`] for `sort_by_key`/`min_by_key`.
//! - [`by_height_desc`] for `sort_by` and friends.
//! - [`HeightOrder`] for ordered containers such as `BinaryHeap`.

use crate::position::Position;
use std::cmp::Ordering;

/// Comparator placing higher `z` first; ties fall back to `(x, y)`.
pub fn by_height_desc(a: &Position, b: &Position) -> Ordering {
    b.z()
        .cmp(&a.z())
        .then_with(|| a.x().cmp(&b.x()))
        .then_with(|| a.y().cmp(&b.y()))
}

/// A [`Position`] ordered by descending height.
///
/// `HeightOrder(a) < HeightOrder(b)` whenever `a.z() > b.z()`, so the
/// "smallest" element is the highest one. Wrap in
/// [`std::cmp::Reverse`] to pop the highest position from a max-heap
/// `BinaryHeap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HeightOrder(pub Position);

impl HeightOrder {
    /// The wrapped position.
    pub fn into_inner(self) -> Position {
        self.0
    }
}

impl From<Position> for HeightOrder {
    fn from(p: Position) -> Self {
        Self(p)
    }
}

impl Ord for HeightOrder {
    fn cmp(&self, other: &Self) -> Ordering {
        by_height_desc(&self.0, &other.0)
    }
}

impl PartialOrd for HeightOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
