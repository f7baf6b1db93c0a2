//! Acceptance scenarios for the search engine: straight and diagonal routes,
//! penalty flags, weighted grids and the failure outcomes.

use grid_seek::{find_path, CostGrid, Formula, SearchOutcome, SearchRequest, SeekError};
use grid_util::point::Point;
use itertools::Itertools;

/// 8x8 grid with every cell open at cost 1.
fn open_grid() -> CostGrid {
    CostGrid::from_cells(vec![vec![1; 8]; 8]).unwrap()
}

/// 8x8 grid with costs rising towards the centre, except for a cost-1
/// channel leading in: down column 0, then along row 3 to the peak at
/// (3, 3). The cheap way to the centre is the channel, not the short
/// high-cost diagonal. Indexed as `cells[x][y]`.
fn pyramid_grid() -> CostGrid {
    CostGrid::from_cells(vec![
        vec![1, 1, 1, 1, 1, 1, 1, 1],
        vec![1, 4, 4, 1, 4, 4, 4, 1],
        vec![1, 4, 8, 1, 8, 8, 4, 1],
        vec![1, 4, 8, 1, 8, 8, 4, 1],
        vec![1, 4, 8, 8, 8, 8, 4, 1],
        vec![1, 4, 8, 8, 8, 8, 4, 1],
        vec![1, 4, 4, 4, 4, 4, 4, 1],
        vec![1, 1, 1, 1, 1, 1, 1, 1],
    ])
    .unwrap()
}

/// Asserts the route is well-formed for its request: endpoints match, every
/// step moves to an adjacent cell (axis-aligned unless diagonals were
/// allowed) and no cell after the start is impassable.
fn assert_path_valid(grid: &CostGrid, request: &SearchRequest, path: &[Point]) {
    assert_eq!(*path.first().unwrap(), request.start());
    assert_eq!(*path.last().unwrap(), request.end());
    for (a, b) in path.iter().tuple_windows() {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        assert!(dx <= 1 && dy <= 1 && dx + dy > 0, "step {a} -> {b}");
        if !request.allow_diagonals() {
            assert!(dx + dy == 1, "diagonal step {a} -> {b} in a cardinal search");
        }
    }
    for p in &path[1..] {
        assert!(grid.cost(p.x, p.y) > 0, "impassable cell {p} on the route");
    }
}

#[test]
fn zero_distance_route_is_the_start_alone() {
    // Even an impassable start cell routes to itself.
    let grid = CostGrid::new(8).unwrap();
    let request = SearchRequest::new(Point::new(0, 0), Point::new(0, 0));
    let response = find_path(&grid, &request).unwrap();
    assert_eq!(response.outcome(), SearchOutcome::PathFound);
    assert_eq!(response.path().unwrap(), &[Point::new(0, 0)]);
}

#[test]
fn horizontal_route_is_shortest() {
    let mut grid = CostGrid::new(8).unwrap();
    grid.open_line(Point::new(0, 0), Point::new(7, 0)).unwrap();
    let request = SearchRequest::new(Point::new(0, 0), Point::new(7, 0));
    let response = find_path(&grid, &request).unwrap();
    let path = response.path().unwrap();
    assert_eq!(path.len(), 8);
    for (i, p) in path.iter().enumerate() {
        assert_eq!(*p, Point::new(i as i32, 0));
    }
}

#[test]
fn vertical_route_is_shortest() {
    let mut grid = CostGrid::new(8).unwrap();
    grid.open_line(Point::new(0, 0), Point::new(0, 7)).unwrap();
    let request = SearchRequest::new(Point::new(0, 0), Point::new(0, 7));
    let response = find_path(&grid, &request).unwrap();
    let path = response.path().unwrap();
    assert_eq!(path.len(), 8);
    for (i, p) in path.iter().enumerate() {
        assert_eq!(*p, Point::new(0, i as i32));
    }
}

#[test]
fn diagonal_corridor_needs_diagonal_moves() {
    let mut grid = CostGrid::new(8).unwrap();
    grid.open_line(Point::new(0, 0), Point::new(7, 7)).unwrap();
    let request = SearchRequest::new(Point::new(0, 0), Point::new(7, 7));
    let response = find_path(&grid, &request).unwrap();
    assert_eq!(response.outcome(), SearchOutcome::PathNotFound);
    assert!(response.path().is_none());
}

#[test]
fn diagonal_corridor_is_followed_when_enabled() {
    let mut grid = CostGrid::new(8).unwrap();
    grid.open_line(Point::new(0, 0), Point::new(7, 7)).unwrap();
    let request =
        SearchRequest::new(Point::new(0, 0), Point::new(7, 7)).with_diagonals(true);
    let response = find_path(&grid, &request).unwrap();
    let path = response.path().unwrap();
    assert_eq!(path.len(), 8);
    for (i, p) in path.iter().enumerate() {
        assert_eq!(*p, Point::new(i as i32, i as i32));
    }
}

#[test]
fn direction_change_lessening_prefers_the_straight_detour() {
    // A diagonal corridor to the goal, and an L-shaped detour down column 0
    // and along row 7. With direction changes penalised, every diagonal step
    // breaks alignment and the single-turn detour wins despite being longer.
    let mut grid = CostGrid::new(8).unwrap();
    grid.open_line(Point::new(0, 0), Point::new(7, 7)).unwrap();
    grid.open_line(Point::new(0, 0), Point::new(0, 7)).unwrap();
    grid.open_line(Point::new(1, 7), Point::new(6, 7)).unwrap();
    let request = SearchRequest::new(Point::new(0, 0), Point::new(7, 7))
        .with_diagonals(true)
        .with_lessen_direction_change(true);
    let response = find_path(&grid, &request).unwrap();
    let path = response.path().unwrap();
    assert_eq!(path.len(), 14);
    for i in 0..=6 {
        assert_eq!(path[i], Point::new(0, i as i32));
    }
    for i in 1..=7 {
        assert_eq!(path[6 + i], Point::new(i as i32, 7));
    }
}

#[test]
fn weighted_grid_follows_the_low_cost_channel() {
    let grid = pyramid_grid();
    let request =
        SearchRequest::new(Point::new(0, 0), Point::new(3, 3)).with_diagonals(true);
    let response = find_path(&grid, &request).unwrap();
    let path = response.path().unwrap();
    assert_eq!(path.len(), 6);
    for i in 0..3 {
        assert_eq!(path[i], Point::new(0, i as i32));
    }
    for i in 1..3 {
        assert_eq!(path[2 + i], Point::new(i as i32, 3));
    }
    assert_eq!(path[5], Point::new(3, 3));
}

#[test]
fn all_closed_grid_finds_nothing_regardless_of_flags() {
    let grid = CostGrid::from_cells(vec![vec![0; 4]; 4]).unwrap();
    for diagonals in [false, true] {
        for reopen in [false, true] {
            for tie_break in [false, true] {
                let request = SearchRequest::new(Point::new(0, 0), Point::new(3, 3))
                    .with_diagonals(diagonals)
                    .with_reopen_closed_nodes(reopen)
                    .with_tie_breaker(tie_break)
                    .with_lessen_diagonals(true)
                    .with_lessen_direction_change(true);
                let response = find_path(&grid, &request).unwrap();
                assert_eq!(response.outcome(), SearchOutcome::PathNotFound);
            }
        }
    }
}

#[test]
fn open_grid_routes_are_minimal() {
    // Uniform costs: the route can never beat the Manhattan bound without
    // diagonals or the Chebyshev bound with them, and meets both exactly.
    let grid = open_grid();
    let cardinal = SearchRequest::new(Point::new(0, 0), Point::new(7, 7));
    let response = find_path(&grid, &cardinal).unwrap();
    let path = response.path().unwrap();
    assert_eq!(path.len(), 15);
    assert_path_valid(&grid, &cardinal, path);

    let diagonal = SearchRequest::new(Point::new(0, 0), Point::new(7, 7)).with_diagonals(true);
    let response = find_path(&grid, &diagonal).unwrap();
    let path = response.path().unwrap();
    assert_eq!(path.len(), 8);
    assert_path_valid(&grid, &diagonal, path);
}

#[test]
fn tie_breaker_finds_a_route_on_open_grids() {
    let grid = open_grid();
    for diagonals in [false, true] {
        let request = SearchRequest::new(Point::new(0, 0), Point::new(7, 7))
            .with_diagonals(diagonals)
            .with_tie_breaker(true);
        let response = find_path(&grid, &request).unwrap();
        assert_path_valid(&grid, &request, response.path().unwrap());
    }
}

#[test]
fn lessened_diagonals_find_a_route_on_open_grids() {
    let grid = open_grid();
    for diagonals in [false, true] {
        let request = SearchRequest::new(Point::new(0, 0), Point::new(7, 7))
            .with_diagonals(diagonals)
            .with_lessen_diagonals(true);
        let response = find_path(&grid, &request).unwrap();
        assert_path_valid(&grid, &request, response.path().unwrap());
    }
}

#[test]
fn lessened_direction_change_finds_a_route_on_open_grids() {
    let grid = open_grid();
    for diagonals in [false, true] {
        let request = SearchRequest::new(Point::new(0, 0), Point::new(7, 7))
            .with_diagonals(diagonals)
            .with_lessen_direction_change(true);
        let response = find_path(&grid, &request).unwrap();
        assert_path_valid(&grid, &request, response.path().unwrap());
    }
}

#[test]
fn reopening_finds_a_route_on_open_grids() {
    let grid = open_grid();
    for diagonals in [false, true] {
        let request = SearchRequest::new(Point::new(0, 0), Point::new(7, 7))
            .with_diagonals(diagonals)
            .with_reopen_closed_nodes(true);
        let response = find_path(&grid, &request).unwrap();
        assert_path_valid(&grid, &request, response.path().unwrap());
    }
}

#[test]
fn reopening_never_costs_more() {
    for (grid, diagonals) in [
        (pyramid_grid(), true),
        (pyramid_grid(), false),
        (open_grid(), true),
    ] {
        let request = SearchRequest::new(Point::new(0, 0), Point::new(7, 7))
            .with_diagonals(diagonals)
            .with_heuristic_scale(6)
            .unwrap();
        let closed = find_path(&grid, &request).unwrap();
        let reopened =
            find_path(&grid, &request.clone().with_reopen_closed_nodes(true)).unwrap();
        assert!(closed.is_found() && reopened.is_found());
        assert!(reopened.path_cost(&grid) <= closed.path_cost(&grid));
    }
}

#[test]
fn every_formula_finds_a_route() {
    let grid = open_grid();
    for formula in [Formula::Diagonal, Formula::Euclidean, Formula::Manhattan] {
        let request =
            SearchRequest::new(Point::new(0, 0), Point::new(7, 7)).with_formula(formula);
        let response = find_path(&grid, &request).unwrap();
        assert_path_valid(&grid, &request, response.path().unwrap());
    }
}

#[test]
fn heuristic_scale_still_finds_a_route() {
    let grid = open_grid();
    let request = SearchRequest::new(Point::new(0, 0), Point::new(7, 7))
        .with_heuristic_scale(4)
        .unwrap();
    let response = find_path(&grid, &request).unwrap();
    assert_path_valid(&grid, &request, response.path().unwrap());
}

#[test]
fn endpoints_outside_the_grid_are_errors() {
    let grid = CostGrid::new(8).unwrap();
    for (x, y) in [(-1, 0), (-1, -1), (0, -1), (999, 0), (0, 999), (999, 999)] {
        let bad = Point::new(x, y);
        let corner = Point::new(7, 7);
        for request in [
            SearchRequest::new(bad, corner),
            SearchRequest::new(corner, bad),
        ] {
            assert!(matches!(
                find_path(&grid, &request),
                Err(SeekError::OutOfBounds { .. })
            ));
        }
    }
}
