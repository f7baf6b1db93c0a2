use grid_util::point::Point;

use crate::error::{Result, SeekError};

/// Heuristic distance formula; some formulas suit a scenario better than
/// others. Manhattan is well matched to 4-directional grids, for example.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Formula {
    Diagonal,
    Euclidean,
    #[default]
    Manhattan,
}

/// Immutable parameters for a single search: the start and end coordinates
/// plus the knobs that shape route calculation.
///
/// Built once per search with the consuming `with_*` methods and never
/// mutated afterwards.
///
/// ```
/// use grid_seek::{Formula, SearchRequest};
/// use grid_util::point::Point;
///
/// let request = SearchRequest::new(Point::new(0, 0), Point::new(7, 7))
///     .with_formula(Formula::Diagonal)
///     .with_diagonals(true)
///     .with_tie_breaker(true);
/// assert!(request.allow_diagonals());
/// ```
#[derive(Clone, Debug)]
pub struct SearchRequest {
    start: Point,
    end: Point,
    formula: Formula,
    heuristic_scale: i32,
    allow_diagonals: bool,
    lessen_diagonals: bool,
    lessen_direction_change: bool,
    reopen_closed_nodes: bool,
    use_tie_breaker: bool,
}

impl SearchRequest {
    /// A request from `start` to `end` with the default configuration:
    /// Manhattan heuristic at scale 2, cardinal moves only, no penalties, no
    /// reopening, no tie-breaking.
    pub fn new(start: Point, end: Point) -> SearchRequest {
        SearchRequest {
            start,
            end,
            formula: Formula::default(),
            heuristic_scale: 2,
            allow_diagonals: false,
            lessen_diagonals: false,
            lessen_direction_change: false,
            reopen_closed_nodes: false,
            use_tie_breaker: false,
        }
    }

    /// Selects the heuristic distance formula.
    pub fn with_formula(mut self, formula: Formula) -> Self {
        self.formula = formula;
        self
    }

    /// Scales the heuristic estimate. An accurate scale reduces search
    /// overhead; values above the true cost-per-step weight the search
    /// towards the goal. Rejects negative values.
    pub fn with_heuristic_scale(mut self, scale: i32) -> Result<Self> {
        if scale < 0 {
            return Err(SeekError::NegativeScale(scale));
        }
        self.heuristic_scale = scale;
        Ok(self)
    }

    /// Considers the four diagonal neighbours in addition to the cardinal
    /// ones when expanding a node.
    pub fn with_diagonals(mut self, allow: bool) -> Self {
        self.allow_diagonals = allow;
        self
    }

    /// Deprioritises diagonal steps by scaling their accumulated cost.
    pub fn with_lessen_diagonals(mut self, lessen: bool) -> Self {
        self.lessen_diagonals = lessen;
        self
    }

    /// Deprioritises changes of travel direction with a flat G surcharge,
    /// discouraging zig-zag routes.
    pub fn with_lessen_direction_change(mut self, lessen: bool) -> Self {
        self.lessen_direction_change = lessen;
        self
    }

    /// Permits a visited node to be revisited when a cheaper route to it is
    /// found later. Better paths at a performance cost.
    pub fn with_reopen_closed_nodes(mut self, reopen: bool) -> Self {
        self.reopen_closed_nodes = reopen;
        self
    }

    /// Biases equal-cost candidates towards the straight start-end line.
    pub fn with_tie_breaker(mut self, tie_break: bool) -> Self {
        self.use_tie_breaker = tie_break;
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn formula(&self) -> Formula {
        self.formula
    }

    pub fn heuristic_scale(&self) -> i32 {
        self.heuristic_scale
    }

    pub fn allow_diagonals(&self) -> bool {
        self.allow_diagonals
    }

    pub fn lessen_diagonals(&self) -> bool {
        self.lessen_diagonals
    }

    pub fn lessen_direction_change(&self) -> bool {
        self.lessen_direction_change
    }

    pub fn reopen_closed_nodes(&self) -> bool {
        self.reopen_closed_nodes
    }

    pub fn use_tie_breaker(&self) -> bool {
        self.use_tie_breaker
    }
}
