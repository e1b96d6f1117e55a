//! The [`Position`] value type.

use crate::direction::Direction;
use crate::error::{Axis, PositionError};
use std::cmp::Reverse;
use std::fmt;

/// A grid coordinate paired with its landscape value.
///
/// Positions are immutable after construction. Every traversal operation
/// produces a fresh `Position` rather than adjusting an existing one.
///
/// `Position` deliberately has no `Ord`: ordering by height is a policy of
/// the consumer, see [`descending_key`](Self::descending_key) and
/// [`HeightOrder`](crate::HeightOrder).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    x: i64,
    y: i64,
    z: u8,
}

impl Position {
    /// Smallest admissible landscape value.
    pub const MIN_Z: i32 = 0;

    /// Largest admissible landscape value.
    pub const MAX_Z: i32 = 255;

    /// Create a position, rejecting negative coordinates and values outside
    /// `[0, 255]`.
    ///
    /// `z` is trusted to be the landscape value at `(x, y)`; it is not
    /// cross-checked against any landscape.
    pub fn new(x: i64, y: i64, z: i32) -> Result<Self, PositionError> {
        if x < 0 {
            return Err(PositionError::NegativeCoordinate {
                axis: Axis::X,
                value: x,
            });
        }
        if y < 0 {
            return Err(PositionError::NegativeCoordinate {
                axis: Axis::Y,
                value: y,
            });
        }
        let z = u8::try_from(z).map_err(|_| PositionError::ValueOutOfRange { value: z })?;
        Ok(Self { x, y, z })
    }

    /// The validation predicate over raw parts.
    ///
    /// False if `x < 0`, `y < 0`, `z < 0` or `z > 255`. Grid upper bounds
    /// are not known here; see `LandscapeProblem::validate` in
    /// `crest-problem` for the bounds-aware check.
    pub fn is_valid(x: i64, y: i64, z: i32) -> bool {
        x >= 0 && y >= 0 && (Self::MIN_Z..=Self::MAX_Z).contains(&z)
    }

    /// Apply [`is_valid`](Self::is_valid) to this position.
    pub fn validate(&self) -> bool {
        Self::is_valid(self.x, self.y, i32::from(self.z))
    }

    /// Column index.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Row index.
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Landscape value at `(x, y)`.
    pub fn z(&self) -> u8 {
        self.z
    }

    /// `(x, y, z)` triple, the sample format handed to path renderers.
    pub fn to_tuple3(&self) -> (i64, i64, u8) {
        (self.x, self.y, self.z)
    }

    /// Coordinates reached by moving one step in `direction`.
    ///
    /// Returns `None` only on `i64` overflow. The result may be negative;
    /// the caller decides whether it names a valid cell.
    pub fn offset(&self, direction: Direction) -> Option<(i64, i64)> {
        let (dx, dy) = direction.delta();
        Some((self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Sort key that puts higher positions first (`key = -z`).
    pub fn descending_key(&self) -> Reverse<u8> {
        Reverse(self.z)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.x, self.y, self.z)
    }
}

impl From<Position> for (i64, i64, u8) {
    fn from(p: Position) -> Self {
        p.to_tuple3()
    }
}
