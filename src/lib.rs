//! # grid_seek
//!
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) routing on square
//! weighted grids. Cells carry a [u8] traversal cost (`0` is impassable) and
//! requests configure the heuristic formula, 4- or 8-neighbourhood movement,
//! diagonal and direction-change penalties, node reopening and tie-breaking.
//! Connected components are pre-computed to avoid flood-filling behaviour if
//! no path exists.
//!
//! ```
//! use grid_seek::{find_path, CostGrid, SearchRequest};
//! use grid_util::point::Point;
//!
//! let mut grid = CostGrid::new(8).unwrap();
//! grid.open_line(Point::new(0, 0), Point::new(7, 0)).unwrap();
//! let request = SearchRequest::new(Point::new(0, 0), Point::new(7, 0));
//! let response = find_path(&grid, &request).unwrap();
//! assert_eq!(response.path().unwrap().len(), 8);
//! ```

mod cost;
mod error;
mod grid;
mod heuristic;
mod request;
mod response;
mod search;

pub use error::{Result, SeekError};
pub use grid::CostGrid;
pub use request::{Formula, SearchRequest};
pub use response::{SearchOutcome, SearchResponse};
pub use search::find_path;

/// Cell value written by the `open_*` edit operations.
pub const OPEN_VALUE: u8 = 1;
/// Cell value written by the `close_*` edit operations; cost `0` marks a cell
/// impassable.
pub const CLOSED_VALUE: u8 = 0;

/// Multiplier applied to a cell's cost when it is entered diagonally and the
/// request lessens diagonal moves.
pub(crate) const DIAGONAL_FACTOR: f64 = 1.41;
/// Flat G surcharge for a move that breaks the parent's direction of travel.
pub(crate) const DIRECTION_PENALTY: i32 = 20;
/// Scale of the cross-product bias nudging equal-cost routes towards the
/// straight start-end line.
pub(crate) const TIEBREAK_FACTOR: f64 = 0.001;
