//! G engine: actual accumulated route cost and the direction-change
//! surcharge.

use grid_util::point::Point;

use crate::grid::CostGrid;
use crate::{DIAGONAL_FACTOR, DIRECTION_PENALTY};

/// Accumulated cost of stepping onto `node` from a parent carrying
/// `parent_g`. The cell's own cost is the contribution, scaled by
/// [DIAGONAL_FACTOR] and truncated when the producing move was diagonal and
/// the request lessens diagonals.
///
/// An impassable cell (cost 0) contributes nothing, leaving the result equal
/// to `parent_g`. That equality is the search engine's impassability signal;
/// there is no separate walkability check, so a deliberately zero-cost
/// "free" cell is indistinguishable from a blocked one.
pub(crate) fn accumulate(grid: &CostGrid, node: Point, parent_g: i32, lessen_diagonal: bool) -> i32 {
    let cell = i32::from(grid.cost(node.x, node.y));
    if lessen_diagonal {
        parent_g + (f64::from(cell) * DIAGONAL_FACTOR) as i32
    } else {
        parent_g + cell
    }
}

/// Surcharge for a move that breaks the parent's direction of travel.
///
/// `travel_dx` is the parent's own X displacement from its parent, 0 when the
/// parent was moving vertically or is the start node. A move that changes X
/// after vertical travel, or changes Y after horizontal travel, is charged
/// [DIRECTION_PENALTY]; everything else, or a request without the lessening
/// flag, is free.
pub(crate) fn direction_modifier(
    node: Point,
    parent: Point,
    lessen_direction_change: bool,
    travel_dx: i32,
) -> i32 {
    if !lessen_direction_change {
        return 0;
    }
    let mut modifier = 0;
    if node.x - parent.x != 0 && travel_dx == 0 {
        modifier += DIRECTION_PENALTY;
    }
    if node.y - parent.y != 0 && travel_dx != 0 {
        modifier += DIRECTION_PENALTY;
    }
    modifier
}
