//! Vessel geometry and hit accounting.

use core::fmt;
use core::str::FromStr;

use crate::common::{Coordinate, GridError};
use crate::scalar::{positive, Scalar};

/// Axis along which a vessel extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Alignment {
    Horizontal,
    Vertical,
}

impl FromStr for Alignment {
    type Err = GridError;

    /// Accepts exactly `HORIZONTAL` or `VERTICAL`.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "HORIZONTAL" => Ok(Alignment::Horizontal),
            "VERTICAL" => Ok(Alignment::Vertical),
            _ => Err(GridError::UndefinedAlignment(tag.to_owned())),
        }
    }
}

impl TryFrom<&str> for Alignment {
    type Error = GridError;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Horizontal => f.write_str("HORIZONTAL"),
            Alignment::Vertical => f.write_str("VERTICAL"),
        }
    }
}

/// A linear vessel anchored at `(x, y)` with a fixed length.
///
/// The vessel does not know its alignment; that is chosen when it is placed
/// on a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vessel {
    x: usize,
    y: usize,
    length: usize,
    hits: usize,
}

impl Vessel {
    /// Create a vessel anchored at (`x`, `y`) spanning `length` cells.
    ///
    /// Each value is truncated toward zero and must then be a positive
    /// integer, otherwise `InvalidVesselGeometry` is returned.
    pub fn new<X, Y, L>(x: X, y: Y, length: L) -> Result<Self, GridError>
    where
        X: Scalar,
        Y: Scalar,
        L: Scalar,
    {
        match (
            positive(x.truncated()),
            positive(y.truncated()),
            positive(length.truncated()),
        ) {
            (Some(x), Some(y), Some(length)) => Ok(Vessel {
                x,
                y,
                length,
                hits: 0,
            }),
            _ => Err(GridError::InvalidVesselGeometry {
                x: format!("{:?}", x),
                y: format!("{:?}", y),
                length: format!("{:?}", length),
            }),
        }
    }

    /// Record one more hit. Not bounded by the length; the grid only calls
    /// this once per struck cell.
    pub fn register_hit(&mut self) {
        self.hits += 1;
    }

    /// Returns `true` once every cell has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.hits >= self.length
    }

    /// Number of cells not yet hit.
    pub fn remaining_intact_cells(&self) -> usize {
        self.length.saturating_sub(self.hits)
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn anchor(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Hits taken so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Last cell covered when laid out along `alignment`.
    /// `None` if the end would overflow the coordinate space.
    pub fn end(&self, alignment: Alignment) -> Option<Coordinate> {
        let span = self.length.checked_sub(1)?;
        match alignment {
            Alignment::Horizontal => Some(Coordinate::new(self.x.checked_add(span)?, self.y)),
            Alignment::Vertical => Some(Coordinate::new(self.x, self.y.checked_add(span)?)),
        }
    }

    /// Cells from the anchor to the end, inclusive, along `alignment`.
    pub fn cells(&self, alignment: Alignment) -> impl Iterator<Item = Coordinate> {
        let (x, y) = (self.x, self.y);
        let span = match (alignment, self.end(alignment)) {
            (Alignment::Horizontal, Some(end)) => x..=end.x,
            (Alignment::Vertical, Some(end)) => y..=end.y,
            (_, None) => 1..=0,
        };
        span.map(move |i| match alignment {
            Alignment::Horizontal => Coordinate::new(i, y),
            Alignment::Vertical => Coordinate::new(x, i),
        })
    }
}
