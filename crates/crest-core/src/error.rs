//! Error types for position construction.

use std::error::Error;
use std::fmt;

/// Grid axis named in a [`PositionError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Column axis (`x`).
    X,
    /// Row axis (`y`).
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Errors from [`Position::new`](crate::Position::new).
///
/// Constructing an invalid position is a caller contract violation; values
/// are never clamped into range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionError {
    /// A coordinate is negative.
    NegativeCoordinate {
        /// The offending axis.
        axis: Axis,
        /// The offending value.
        value: i64,
    },
    /// The landscape value lies outside `[0, 255]`.
    ValueOutOfRange {
        /// The offending value.
        value: i32,
    },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCoordinate { axis, value } => {
                write!(f, "{axis} = {value} must be non-negative")
            }
            Self::ValueOutOfRange { value } => {
                write!(f, "z = {value} must be between 0 and 255 (inclusive)")
            }
        }
    }
}

impl Error for PositionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_axis_and_value() {
        let e = PositionError::NegativeCoordinate {
            axis: Axis::Y,
            value: -3,
        };
        assert_eq!(e.to_string(), "y = -3 must be non-negative");
    }

    #[test]
    fn display_value_out_of_range() {
        let e = PositionError::ValueOutOfRange { value: 256 };
        assert!(e.to_string().contains("256"));
    }
}
