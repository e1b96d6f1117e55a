//! Handing found paths to external renderers.
//!
//! A search driver records the positions it visits in a [`PathTrace`].
//! [`SurfaceExport`] bundles the full landscape grid with that path as
//! JSON, the input format of the surface/path plotting tools. Nothing in
//! this crate renders anything.

use crest_core::{Direction, Position};
use crest_landscape::Landscape;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One `(x, y, z)` sample of an exported path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSample {
    /// Column index.
    pub x: i64,
    /// Row index.
    pub y: i64,
    /// Landscape value.
    pub z: u8,
}

impl From<Position> for PathSample {
    fn from(p: Position) -> Self {
        let (x, y, z) = p.to_tuple3();
        Self { x, y, z }
    }
}

/// An ordered sequence of visited positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathTrace {
    positions: Vec<Position>,
}

impl PathTrace {
    /// An empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a visited position.
    pub fn push(&mut self, position: Position) {
        self.positions.push(position);
    }

    /// Number of recorded positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Recorded positions in visiting order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// The most recently recorded position.
    pub fn last(&self) -> Option<&Position> {
        self.positions.last()
    }

    /// `(x, y, z)` triples in visiting order.
    pub fn to_tuples(&self) -> Vec<(i64, i64, u8)> {
        self.positions.iter().map(Position::to_tuple3).collect()
    }

    /// Whether `z` never decreases along the path.
    pub fn is_monotone_ascending(&self) -> bool {
        self.positions.windows(2).all(|w| w[0].z() <= w[1].z())
    }

    /// The moves between consecutive positions, or `None` if two
    /// consecutive positions are not one compass step apart.
    pub fn directions(&self) -> Option<Vec<Direction>> {
        self.positions
            .windows(2)
            .map(|w| Direction::from_delta(w[1].x() - w[0].x(), w[1].y() - w[0].y()))
            .collect()
    }
}

impl FromIterator<Position> for PathTrace {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Position> for PathTrace {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        self.positions.extend(iter);
    }
}

/// A landscape surface plus an optional path, ready for serialisation.
///
/// `values` holds the grid row by row (`values[y][x]`).
#[derive(Clone, Debug, Serialize)]
pub struct SurfaceExport<'a> {
    /// Grid width (W).
    pub width: usize,
    /// Grid height (H).
    pub height: usize,
    /// Row-major grid values.
    pub values: Vec<&'a [u8]>,
    /// Path samples in visiting order.
    pub path: Vec<PathSample>,
}

impl<'a> SurfaceExport<'a> {
    /// Export `landscape` without a path.
    pub fn new(landscape: &'a Landscape) -> Self {
        Self {
            width: landscape.width(),
            height: landscape.height(),
            values: landscape.rows().collect(),
            path: Vec::new(),
        }
    }

    /// Attach `trace` as the path to draw over the surface.
    pub fn with_path(mut self, trace: &PathTrace) -> Self {
        self.path = trace.positions().iter().copied().map(PathSample::from).collect();
        self
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(ExportError::Serialize)
    }

    /// Write pretty-printed JSON to `path`, creating parent directories.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        let io_err = |source: io::Error| ExportError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        fs::write(path, json).map_err(io_err)
    }
}

/// Errors from [`SurfaceExport`].
#[derive(Debug)]
pub enum ExportError {
    /// Writing the output file failed.
    Io {
        /// Destination path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// JSON serialisation failed.
    Serialize(serde_json::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to write {}: {source}", path.display()),
            Self::Serialize(e) => write!(f, "failed to serialize surface: {e}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize(e) => Some(e),
        }
    }
}
