//! [`LandscapeProblem`] and its move enumeration.

use crest_core::{Direction, Position, SearchProblem};
use crest_landscape::{load_landscape, Landscape, LoadConfig, LoadError};
use smallvec::SmallVec;
use std::array;
use std::iter::FusedIterator;
use std::path::Path;

/// A local-search problem over an image-derived landscape.
///
/// Moves are the eight compass steps of [`Direction`]. A candidate is kept
/// only if it lies inside the grid and forms a valid [`Position`]; every
/// other candidate is silently dropped.
///
/// Unlike the landscape-free [`Position::validate`], the problem checks the
/// upper grid bounds (`x < width`, `y < height`) explicitly, so
/// enumeration never performs an out-of-range lookup.
#[derive(Clone, Debug)]
pub struct LandscapeProblem {
    landscape: Landscape,
}

impl LandscapeProblem {
    /// Wrap an existing landscape.
    pub fn new(landscape: Landscape) -> Self {
        Self { landscape }
    }

    /// Load a landscape from an image with the default preprocessing.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load_with(path, &LoadConfig::default())
    }

    /// Load a landscape from an image with explicit preprocessing.
    pub fn load_with(path: impl AsRef<Path>, config: &LoadConfig) -> Result<Self, LoadError> {
        load_landscape(path, config).map(Self::new)
    }

    /// The underlying grid.
    pub fn landscape(&self) -> &Landscape {
        &self.landscape
    }

    /// Grid height (H).
    pub fn height(&self) -> usize {
        self.landscape.height()
    }

    /// Grid width (W).
    pub fn width(&self) -> usize {
        self.landscape.width()
    }

    /// Landscape value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics unless `0 <= x < width` and `0 <= y < height`. Use
    /// [`Landscape::get`] for a checked lookup.
    pub fn objective_value(&self, x: i64, y: i64) -> u8 {
        match self.landscape.get(x, y) {
            Some(z) => z,
            None => panic!(
                "objective_value({x}, {y}) out of bounds: [0, {}) x [0, {})",
                self.width(),
                self.height()
            ),
        }
    }

    /// The position at `(x, y)` with its landscape value, or `None`
    /// outside the grid.
    pub fn position(&self, x: i64, y: i64) -> Option<Position> {
        let z = self.landscape.get(x, y)?;
        Position::new(x, y, i32::from(z)).ok()
    }

    /// Whether `position` is admissible on this landscape.
    ///
    /// Applies [`Position::validate`] and additionally requires
    /// `x < width` and `y < height`.
    pub fn validate(&self, position: &Position) -> bool {
        position.validate() && self.landscape.contains(position.x(), position.y())
    }

    /// The candidate reached from `from` by one step in `direction`, if it
    /// is valid.
    pub fn step(&self, from: &Position, direction: Direction) -> Option<Position> {
        let (x, y) = from.offset(direction)?;
        let candidate = self.position(x, y)?;
        self.validate(&candidate).then_some(candidate)
    }

    /// Lazily enumerate the valid `(direction, position)` pairs of `from`.
    ///
    /// Items follow [`Direction::ALL`] order. The iterator is `Clone`, so
    /// the sequence can be restarted without recomputing anything else.
    pub fn actions(&self, from: &Position) -> Actions<'_> {
        Actions {
            problem: self,
            origin: *from,
            directions: Direction::ALL.into_iter(),
        }
    }

    /// [`actions`](Self::actions) without the direction labels.
    pub fn next(&self, from: &Position) -> impl Iterator<Item = Position> + Clone + '_ {
        self.actions(from).map(|(_, p)| p)
    }

    /// All valid neighbours of `from`, collected without heap allocation.
    pub fn neighbours(&self, from: &Position) -> SmallVec<[Position; 8]> {
        self.next(from).collect()
    }
}

impl From<Landscape> for LandscapeProblem {
    fn from(landscape: Landscape) -> Self {
        Self::new(landscape)
    }
}

impl SearchProblem for LandscapeProblem {
    type State = Position;
    type Action = Direction;

    fn objective(&self, state: &Position) -> f64 {
        f64::from(state.z())
    }

    fn actions<'a>(
        &'a self,
        state: &Position,
    ) -> Box<dyn Iterator<Item = (Direction, Position)> + 'a> {
        Box::new(LandscapeProblem::actions(self, state))
    }

    fn is_valid(&self, state: &Position) -> bool {
        self.validate(state)
    }
}

/// Iterator returned by [`LandscapeProblem::actions`].
#[derive(Clone, Debug)]
pub struct Actions<'a> {
    problem: &'a LandscapeProblem,
    origin: Position,
    directions: array::IntoIter<Direction, 8>,
}

impl Iterator for Actions<'_> {
    type Item = (Direction, Position);

    fn next(&mut self) -> Option<Self::Item> {
        let problem = self.problem;
        let origin = self.origin;
        self.directions
            .by_ref()
            .find_map(|d| problem.step(&origin, d).map(|p| (d, p)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.directions.len()))
    }
}

impl FusedIterator for Actions<'_> {}
