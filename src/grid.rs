//! Grid state: vessel placement, attacks and the win condition.
//!
//! Occupancy is sparse. Only cells holding an intact, not-yet-struck part of
//! a placed vessel are stored, so memory follows the fleet rather than the
//! grid area. A struck cell leaves the map for good.

use std::collections::HashMap;

use log::{debug, info, trace};

use crate::common::{AttackOutcome, Coordinate, GridError, VesselId};
use crate::config::CLASSIC_EXTENT;
use crate::scalar::{positive, Scalar};
use crate::vessel::{Alignment, Vessel};

/// Read-only summary of the fleet on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetStatus {
    /// Vessels successfully placed.
    pub placed: usize,
    /// Vessels destroyed.
    pub sunk: usize,
    /// Vessels with at least one intact cell.
    pub afloat: usize,
    /// Cells still occupied and not yet struck.
    pub intact_cells: usize,
}

/// A bounded grid of `horizontal_extent` × `vertical_extent` cells.
#[derive(Debug, Clone)]
pub struct Grid {
    horizontal_extent: usize,
    vertical_extent: usize,
    vessels: Vec<Vessel>,
    occupancy: HashMap<Coordinate, VesselId>,
    total_sunk: usize,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Extents are truncated toward zero and must then be positive,
    /// otherwise `InvalidGridDimensions` is returned.
    pub fn new<H: Scalar, V: Scalar>(horizontal: H, vertical: V) -> Result<Self, GridError> {
        match (positive(horizontal.truncated()), positive(vertical.truncated())) {
            (Some(horizontal_extent), Some(vertical_extent)) => {
                Ok(Grid::with_extents(horizontal_extent, vertical_extent))
            }
            _ => Err(GridError::InvalidGridDimensions {
                horizontal: format!("{:?}", horizontal),
                vertical: format!("{:?}", vertical),
            }),
        }
    }

    /// The classic 10×10 grid.
    pub fn classic() -> Self {
        Grid::with_extents(CLASSIC_EXTENT, CLASSIC_EXTENT)
    }

    fn with_extents(horizontal_extent: usize, vertical_extent: usize) -> Self {
        Grid {
            horizontal_extent,
            vertical_extent,
            vessels: Vec::new(),
            occupancy: HashMap::new(),
            total_sunk: 0,
        }
    }

    pub fn horizontal_extent(&self) -> usize {
        self.horizontal_extent
    }

    pub fn vertical_extent(&self) -> usize {
        self.vertical_extent
    }

    /// Number of vessels successfully placed.
    pub fn total_vessels(&self) -> usize {
        self.vessels.len()
    }

    /// Number of vessels destroyed.
    pub fn total_sunk(&self) -> usize {
        self.total_sunk
    }

    /// Number of cells still occupied and not yet struck.
    pub fn occupied_cells(&self) -> usize {
        self.occupancy.len()
    }

    /// A placed vessel by id.
    pub fn vessel(&self, id: VesselId) -> Option<&Vessel> {
        self.vessels.get(id.0)
    }

    /// All placed vessels in placement order.
    pub fn vessels(&self) -> impl Iterator<Item = (VesselId, &Vessel)> {
        self.vessels.iter().enumerate().map(|(i, v)| (VesselId(i), v))
    }

    /// Place `vessel` along `alignment`.
    ///
    /// Returns the new vessel's id, or `None` when no vessel was given or it
    /// would leave the grid or overlap another vessel. Nothing is modified on
    /// rejection.
    ///
    /// A vessel that arrives already destroyed counts as sunk from the moment
    /// it is placed; striking its cells afterwards reports plain hits.
    pub fn place_vessel(
        &mut self,
        vessel: Option<Vessel>,
        alignment: Alignment,
    ) -> Option<VesselId> {
        let vessel = vessel?;
        if !self.can_place(&vessel, alignment) {
            trace!(
                "rejected {}-cell vessel at {} {}",
                vessel.length(),
                vessel.anchor(),
                alignment
            );
            return None;
        }
        let id = VesselId(self.vessels.len());
        self.occupancy.extend(vessel.cells(alignment).map(|cell| (cell, id)));
        self.vessels.push(vessel);
        if vessel.is_destroyed() {
            self.total_sunk += 1;
        }
        debug!(
            "placed vessel {} ({} cells) at {} {}",
            id.0,
            vessel.length(),
            vessel.anchor(),
            alignment
        );
        Some(id)
    }

    /// Like [`Grid::place_vessel`], with the alignment given as a
    /// `HORIZONTAL`/`VERTICAL` tag.
    pub fn try_place_vessel(
        &mut self,
        vessel: Option<Vessel>,
        alignment: &str,
    ) -> Result<Option<VesselId>, GridError> {
        let Some(vessel) = vessel else {
            return Ok(None);
        };
        let alignment = alignment.parse()?;
        Ok(self.place_vessel(Some(vessel), alignment))
    }

    /// Returns `true` if `vessel` fits inside the grid along `alignment`
    /// without covering an occupied cell.
    pub fn can_place(&self, vessel: &Vessel, alignment: Alignment) -> bool {
        let end = match vessel.end(alignment) {
            Some(end) => end,
            None => return false,
        };
        // Anchors are positive by construction, so only the upper bound matters.
        if end.x > self.horizontal_extent || end.y > self.vertical_extent {
            return false;
        }
        !vessel
            .cells(alignment)
            .any(|cell| self.occupancy.contains_key(&cell))
    }

    /// Like [`Grid::can_place`], with the alignment given as a tag.
    pub fn try_can_place(&self, vessel: &Vessel, alignment: &str) -> Result<bool, GridError> {
        Ok(self.can_place(vessel, alignment.parse()?))
    }

    /// Returns `true` if an intact vessel cell sits at (`x`, `y`).
    /// Malformed coordinates are never occupied.
    pub fn has_occupant_at<X: Scalar, Y: Scalar>(&self, x: X, y: Y) -> bool {
        self.occupant_at(x, y).is_some()
    }

    /// Id of the vessel with an intact cell at (`x`, `y`), if any.
    pub fn occupant_at<X: Scalar, Y: Scalar>(&self, x: X, y: Y) -> Option<VesselId> {
        let cell = Self::lookup_key(&x, &y)?;
        self.occupancy.get(&cell).copied()
    }

    /// Fire at (`x`, `y`).
    ///
    /// A struck cell is removed from the grid whether or not the vessel sinks,
    /// so attacking it again is a miss. Empty, already struck, out of range and
    /// malformed coordinates all miss without changing anything.
    pub fn attack<X: Scalar, Y: Scalar>(&mut self, x: X, y: Y) -> AttackOutcome {
        let struck = Self::lookup_key(&x, &y)
            .and_then(|cell| self.occupancy.remove(&cell).map(|id| (cell, id)));
        let (cell, id) = match struck {
            Some(hit) => hit,
            None => {
                trace!("attack at ({:?}, {:?}) missed", x, y);
                return AttackOutcome::Miss;
            }
        };

        let vessel = &mut self.vessels[id.0];
        let was_destroyed = vessel.is_destroyed();
        vessel.register_hit();
        if was_destroyed || !vessel.is_destroyed() {
            debug!(
                "attack at {} hit vessel {} ({} cells intact)",
                cell,
                id.0,
                vessel.remaining_intact_cells()
            );
            return AttackOutcome::Hit;
        }

        self.total_sunk += 1;
        info!("attack at {} sank vessel {}", cell, id.0);
        if self.all_vessels_sunk() {
            info!("all {} vessels sunk", self.total_sunk);
        }
        AttackOutcome::Sunk(id)
    }

    /// Returns `true` once at least one vessel was placed and every placed
    /// vessel has been destroyed. An empty grid is not a lost grid.
    pub fn all_vessels_sunk(&self) -> bool {
        self.occupancy.is_empty() && self.total_sunk > 0 && self.total_sunk == self.vessels.len()
    }

    /// Summary counts for the fleet.
    pub fn fleet_status(&self) -> FleetStatus {
        FleetStatus {
            placed: self.vessels.len(),
            sunk: self.total_sunk,
            afloat: self.vessels.iter().filter(|v| !v.is_destroyed()).count(),
            intact_cells: self.occupancy.len(),
        }
    }

    fn lookup_key<X: Scalar, Y: Scalar>(x: &X, y: &Y) -> Option<Coordinate> {
        Some(Coordinate::new(positive(x.exact())?, positive(y.exact())?))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_placement_leaves_grid_untouched() {
        let mut grid = Grid::new(5, 5).unwrap();
        let long = Vessel::new(1, 1, 6).unwrap();
        assert_eq!(grid.place_vessel(Some(long), Alignment::Horizontal), None);
        assert_eq!(grid.occupied_cells(), 0);
        assert_eq!(grid.total_vessels(), 0);
    }

    #[test]
    fn lookup_key_requires_positive_integers() {
        assert_eq!(Grid::lookup_key(&3, &4), Some(Coordinate::new(3, 4)));
        assert_eq!(Grid::lookup_key(&3.5, &4), None);
        assert_eq!(Grid::lookup_key(&0, &4), None);
        assert_eq!(Grid::lookup_key(&-1, &4), None);
        assert_eq!(Grid::lookup_key(&"x", &4), None);
    }

    #[test]
    fn classic_matches_new_with_classic_extents() {
        let classic = Grid::classic();
        let built = Grid::new(CLASSIC_EXTENT, CLASSIC_EXTENT).unwrap();
        assert_eq!(classic.horizontal_extent(), built.horizontal_extent());
        assert_eq!(classic.vertical_extent(), built.vertical_extent());
        assert_eq!(classic.fleet_status(), built.fleet_status());
    }

    #[test]
    fn far_out_vessel_cannot_be_placed() {
        let grid = Grid::new(10, 10).unwrap();
        let vessel = Vessel::new(i64::MAX, 1, 2).unwrap();
        assert!(!grid.can_place(&vessel, Alignment::Horizontal));
    }
}
