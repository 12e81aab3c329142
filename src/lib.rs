//! Grid engine for a naval combat game.
//!
//! A [`Grid`] holds linear [`Vessel`]s placed horizontally or vertically,
//! resolves attacks against its cells and reports when every vessel has been
//! destroyed. Turn order, opponents and rendering are left to the caller.
//!
//! ```
//! use naval_grid::{Alignment, Grid, Vessel};
//!
//! let mut grid = Grid::new(10, 10)?;
//! let id = grid.place_vessel(Some(Vessel::new(2, 3, 2)?), Alignment::Vertical);
//! assert!(id.is_some());
//! assert!(grid.attack(2, 3).is_hit());
//! assert!(grid.attack(2, 4).is_hit());
//! assert!(grid.all_vessels_sunk());
//! # Ok::<(), naval_grid::GridError>(())
//! ```

mod common;
mod config;
mod grid;
mod logging;
mod scalar;
mod vessel;

pub use common::*;
pub use config::*;
pub use grid::*;
pub use logging::{configured_level, init_logging};
pub use scalar::Scalar;
pub use vessel::*;
