//! The eight compass moves of an 8-connected grid.

use std::fmt;

/// A one-step move on the landscape grid.
///
/// Horizontal components move along `x` (`L` = -1, `R` = +1), vertical
/// components move along `y` (`U` = +1, `D` = -1). Diagonals combine one
/// horizontal and one vertical component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// `x - 1`.
    L,
    /// `x + 1`.
    R,
    /// `y + 1`.
    U,
    /// `y - 1`.
    D,
    /// `x - 1, y + 1`.
    LU,
    /// `x - 1, y - 1`.
    LD,
    /// `x + 1, y + 1`.
    RU,
    /// `x + 1, y - 1`.
    RD,
}

impl Direction {
    /// All directions in enumeration order: axis moves, then diagonals.
    pub const ALL: [Direction; 8] = [
        Direction::L,
        Direction::R,
        Direction::U,
        Direction::D,
        Direction::LU,
        Direction::LD,
        Direction::RU,
        Direction::RD,
    ];

    /// `(dx, dy)` applied to a position by this move.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::L => (-1, 0),
            Direction::R => (1, 0),
            Direction::U => (0, 1),
            Direction::D => (0, -1),
            Direction::LU => (-1, 1),
            Direction::LD => (-1, -1),
            Direction::RU => (1, 1),
            Direction::RD => (1, -1),
        }
    }

    /// Short label, e.g. `"L"` or `"RU"`.
    pub const fn label(self) -> &'static str {
        match self {
            Direction::L => "L",
            Direction::R => "R",
            Direction::U => "U",
            Direction::D => "D",
            Direction::LU => "LU",
            Direction::LD => "LD",
            Direction::RU => "RU",
            Direction::RD => "RD",
        }
    }

    /// The move that undoes this one.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::L => Direction::R,
            Direction::R => Direction::L,
            Direction::U => Direction::D,
            Direction::D => Direction::U,
            Direction::LU => Direction::RD,
            Direction::LD => Direction::RU,
            Direction::RU => Direction::LD,
            Direction::RD => Direction::LU,
        }
    }

    /// The move whose delta is `(dx, dy)`, if any.
    pub fn from_delta(dx: i64, dy: i64) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.delta() == (dx, dy))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
