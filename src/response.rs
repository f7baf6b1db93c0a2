use grid_util::point::Point;

use crate::grid::CostGrid;

/// Result tag of a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A route was found; [SearchResponse::path] holds it.
    PathFound,
    /// The open set was exhausted without reaching the end coordinate.
    PathNotFound,
    /// No search has produced this response yet.
    #[default]
    NotSearched,
}

/// Outcome of a search call: the result tag plus, when found, the ordered
/// route from start to end inclusive (a single coordinate when start and end
/// coincide). Produced once per search and immutable thereafter.
#[derive(Clone, Debug, Default)]
pub struct SearchResponse {
    outcome: SearchOutcome,
    path: Option<Vec<Point>>,
}

impl SearchResponse {
    pub(crate) fn found(path: Vec<Point>) -> SearchResponse {
        SearchResponse {
            outcome: SearchOutcome::PathFound,
            path: Some(path),
        }
    }

    pub(crate) fn not_found() -> SearchResponse {
        SearchResponse {
            outcome: SearchOutcome::PathNotFound,
            path: None,
        }
    }

    pub fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    pub fn is_found(&self) -> bool {
        self.outcome == SearchOutcome::PathFound
    }

    /// The route, ordered start to end, when one was found.
    pub fn path(&self) -> Option<&[Point]> {
        self.path.as_deref()
    }

    /// Total cell cost the route accumulates on `grid`: the sum of the cost
    /// values of every cell entered after the start. Penalty surcharges are
    /// not part of this figure.
    pub fn path_cost(&self, grid: &CostGrid) -> i32 {
        self.path().map_or(0, |path| {
            path.iter()
                .skip(1)
                .map(|p| i32::from(grid.cost(p.x, p.y)))
                .sum()
        })
    }
}
