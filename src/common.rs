//! Common types for the grid engine: coordinates, ids, errors and attack outcomes.

use core::fmt;
use thiserror::Error;

/// A cell on the grid. Both axes are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Handle of a vessel placed on a grid, in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VesselId(pub(crate) usize);

impl VesselId {
    /// Zero-based placement index.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Result of an attack against a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Nothing afloat at the targeted cell.
    Miss,
    /// Struck an intact cell of a vessel that is still afloat.
    Hit,
    /// Struck the last intact cell of the vessel, carrying its id.
    Sunk(VesselId),
}

impl AttackOutcome {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }
}

impl From<AttackOutcome> for bool {
    fn from(outcome: AttackOutcome) -> Self {
        outcome.is_hit()
    }
}

/// Errors raised while constructing grids and vessels or parsing alignments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// An extent was non-numeric or not positive after truncation.
    #[error("invalid grid dimensions {horizontal}x{vertical}: extents must be positive integers")]
    InvalidGridDimensions { horizontal: String, vertical: String },
    /// An anchor coordinate or length was non-numeric or not positive after truncation.
    #[error("invalid vessel geometry ({x}, {y}) length {length}: values must be positive integers")]
    InvalidVesselGeometry {
        x: String,
        y: String,
        length: String,
    },
    /// Alignment tag was neither `HORIZONTAL` nor `VERTICAL`.
    #[error("undefined vessel alignment {0:?}")]
    UndefinedAlignment(String),
}
