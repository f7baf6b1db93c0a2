use core::fmt;

use grid_util::point::Point;
use itertools::Itertools;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::error::{Result, SeekError};
use crate::{CLOSED_VALUE, OPEN_VALUE};

/// Square cost map with a power-of-two side length.
///
/// Every cell holds a [u8] traversal cost: `0` marks the cell impassable and
/// any positive value multiplies the cost of entering it. The grid is
/// constructed once, edited in place through the `open_*`/`close_*`/`edit_*`
/// operations and read-shared by searches; a search never mutates it.
///
/// Two [UnionFind] structures track the connected components of passable
/// cells, one for cardinal movement and one including diagonals. Edits mark
/// the components dirty; [update](CostGrid::update) regenerates them.
/// [find_path](crate::find_path) only consults components that are current,
/// so a stale structure is skipped, never trusted.
#[derive(Clone, Debug)]
pub struct CostGrid {
    side: usize,
    cells: Vec<u8>,
    components: UnionFind<usize>,
    components_diagonal: UnionFind<usize>,
    components_dirty: bool,
}

impl CostGrid {
    /// Builds an all-impassable grid of the given side length.
    ///
    /// Fails with [SeekError::InvalidDimensions] unless `side` is a power of
    /// two.
    pub fn new(side: usize) -> Result<CostGrid> {
        if !side.is_power_of_two() {
            return Err(SeekError::InvalidDimensions {
                width: side,
                height: side,
            });
        }
        let mut grid = CostGrid {
            side,
            cells: vec![CLOSED_VALUE; side * side],
            components: UnionFind::new(side * side),
            components_diagonal: UnionFind::new(side * side),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Builds a grid from existing cost values, indexed as `cells[x][y]`.
    ///
    /// Fails with [SeekError::InvalidDimensions] if the input is empty,
    /// non-square or its side length is not a power of two.
    pub fn from_cells(cells: Vec<Vec<u8>>) -> Result<CostGrid> {
        let side = cells.len();
        let height = cells.first().map_or(0, Vec::len);
        if !side.is_power_of_two() || cells.iter().any(|column| column.len() != side) {
            return Err(SeekError::InvalidDimensions {
                width: side,
                height,
            });
        }
        let mut grid = CostGrid {
            side,
            cells: cells.into_iter().flatten().collect(),
            components: UnionFind::new(side * side),
            components_diagonal: UnionFind::new(side * side),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Side length of the (square) grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Cost of the cell at `(x, y)`.
    ///
    /// Callers must have validated the coordinate with
    /// [is_valid_point](CostGrid::is_valid_point); this accessor does not.
    pub fn cost(&self, x: i32, y: i32) -> u8 {
        debug_assert!(self.is_valid_point(x, y));
        self.cells[self.ix(x, y)]
    }

    /// Bounds predicate used by every caller before indexed access.
    pub fn is_valid_point(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.side && (y as usize) < self.side
    }

    fn ix(&self, x: i32, y: i32) -> usize {
        x as usize * self.side + y as usize
    }

    fn passable(&self, x: i32, y: i32) -> bool {
        self.cells[self.ix(x, y)] != CLOSED_VALUE
    }

    /// Sets every cell to the open value `1`.
    pub fn open_all(&mut self) {
        self.edit_all(OPEN_VALUE);
    }

    /// Sets every cell to the impassable value `0`.
    pub fn close_all(&mut self) {
        self.edit_all(CLOSED_VALUE);
    }

    /// Sets every cell to `value`.
    pub fn edit_all(&mut self, value: u8) {
        self.cells.fill(value);
        self.components_dirty = true;
    }

    /// Opens the single cell at `(x, y)`.
    pub fn open_point(&mut self, x: i32, y: i32) -> Result<()> {
        self.edit_point(x, y, OPEN_VALUE)
    }

    /// Closes the single cell at `(x, y)`.
    pub fn close_point(&mut self, x: i32, y: i32) -> Result<()> {
        self.edit_point(x, y, CLOSED_VALUE)
    }

    /// Sets the single cell at `(x, y)` to `value`.
    pub fn edit_point(&mut self, x: i32, y: i32, value: u8) -> Result<()> {
        if !self.is_valid_point(x, y) {
            return Err(self.out_of_bounds(Point::new(x, y)));
        }
        let ix = self.ix(x, y);
        self.cells[ix] = value;
        self.components_dirty = true;
        Ok(())
    }

    /// Opens every cell on the segment between `from` and `to`, inclusive.
    pub fn open_line(&mut self, from: Point, to: Point) -> Result<()> {
        self.edit_line(from, to, OPEN_VALUE)
    }

    /// Closes every cell on the segment between `from` and `to`, inclusive.
    pub fn close_line(&mut self, from: Point, to: Point) -> Result<()> {
        self.edit_line(from, to, CLOSED_VALUE)
    }

    /// Sets every cell on the segment between `from` and `to` to `value`,
    /// inclusive of both endpoints.
    ///
    /// The segment must be horizontal, vertical or an exact 45-degree
    /// diagonal; anything else fails with [SeekError::NotAligned]. Both
    /// endpoints are validated before any cell is written, so a failed edit
    /// leaves the grid untouched.
    pub fn edit_line(&mut self, from: Point, to: Point, value: u8) -> Result<()> {
        for point in [from, to] {
            if !self.is_valid_point(point.x, point.y) {
                return Err(self.out_of_bounds(point));
            }
        }
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
            return Err(SeekError::NotAligned { from, to });
        }
        let (step_x, step_y) = (dx.signum(), dy.signum());
        for i in 0..=dx.abs().max(dy.abs()) {
            let ix = self.ix(from.x + i * step_x, from.y + i * step_y);
            self.cells[ix] = value;
        }
        self.components_dirty = true;
        Ok(())
    }

    /// Opens the axis-aligned rectangle spanned by the two corners.
    pub fn open_area(&mut self, corner1: Point, corner2: Point) -> Result<()> {
        self.edit_area(corner1, corner2, OPEN_VALUE)
    }

    /// Closes the axis-aligned rectangle spanned by the two corners.
    pub fn close_area(&mut self, corner1: Point, corner2: Point) -> Result<()> {
        self.edit_area(corner1, corner2, CLOSED_VALUE)
    }

    /// Sets every cell inside the axis-aligned rectangle spanned by the two
    /// corners to `value`, inclusive of the corners themselves.
    ///
    /// The corners may be given in any order; each axis is normalized
    /// independently. The only failure is an out-of-bounds corner, checked
    /// before any cell is written.
    pub fn edit_area(&mut self, corner1: Point, corner2: Point, value: u8) -> Result<()> {
        for point in [corner1, corner2] {
            if !self.is_valid_point(point.x, point.y) {
                return Err(self.out_of_bounds(point));
            }
        }
        for x in corner1.x.min(corner2.x)..=corner1.x.max(corner2.x) {
            for y in corner1.y.min(corner2.y)..=corner1.y.max(corner2.y) {
                let ix = self.ix(x, y);
                self.cells[ix] = value;
            }
        }
        self.components_dirty = true;
        Ok(())
    }

    fn out_of_bounds(&self, point: Point) -> SeekError {
        SeekError::OutOfBounds {
            point,
            side: self.side,
        }
    }

    /// Regenerates the connected components if edits have dirtied them.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates fresh [UnionFind] structures linking passable neighbours to
    /// the same component, once for cardinal movement and once including
    /// diagonals. Diagonal neighbours are linked unconditionally, matching
    /// the search engine's corner-cutting movement rule.
    pub fn generate_components(&mut self) {
        info!("generating connected components for a {0}x{0} grid", self.side);
        let n = self.side * self.side;
        self.components = UnionFind::new(n);
        self.components_diagonal = UnionFind::new(n);
        self.components_dirty = false;
        for x in 0..self.side as i32 {
            for y in 0..self.side as i32 {
                if !self.passable(x, y) {
                    continue;
                }
                let ix = self.ix(x, y);
                for (nx, ny) in [(x + 1, y), (x, y + 1)] {
                    if self.is_valid_point(nx, ny) && self.passable(nx, ny) {
                        self.components.union(ix, self.ix(nx, ny));
                        self.components_diagonal.union(ix, self.ix(nx, ny));
                    }
                }
                for (nx, ny) in [(x + 1, y - 1), (x + 1, y + 1)] {
                    if self.is_valid_point(nx, ny) && self.passable(nx, ny) {
                        self.components_diagonal.union(ix, self.ix(nx, ny));
                    }
                }
            }
        }
    }

    /// Whether the component structures reflect the current cell values.
    pub(crate) fn components_current(&self) -> bool {
        !self.components_dirty
    }

    /// Checks that `end` cannot be reached from `start` under the given
    /// movement rule, judged purely on component membership.
    ///
    /// A search may leave an impassable start cell (its own cost never enters
    /// G) but can never enter an impassable end cell, so an impassable start
    /// is answered through its passable neighbours. Only meaningful while the
    /// components are current.
    pub fn unreachable(&self, start: Point, end: Point, diagonal: bool) -> bool {
        if !self.is_valid_point(start.x, start.y) || !self.is_valid_point(end.x, end.y) {
            return true;
        }
        if !self.passable(end.x, end.y) {
            return true;
        }
        let components = if diagonal {
            &self.components_diagonal
        } else {
            &self.components
        };
        let end_ix = self.ix(end.x, end.y);
        if self.passable(start.x, start.y) {
            return !components.equiv(self.ix(start.x, start.y), end_ix);
        }
        !crate::search::neighbourhood(start, diagonal).into_iter().any(|(p, _)| {
            self.is_valid_point(p.x, p.y)
                && self.passable(p.x, p.y)
                && components.equiv(self.ix(p.x, p.y), end_ix)
        })
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.side as i32 {
            let row = (0..self.side as i32)
                .map(|x| self.cost(x, y).to_string())
                .join(" ");
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
