use grid_seek::{find_path, CostGrid, Formula, SearchRequest};
use grid_util::point::Point;

// Cell costs steer the route: a cost-1 channel through a cost-9 field is
// cheaper than the geometrically shorter diagonal, so the route hugs the
// channel. Penalty flags then discourage diagonal steps and zig-zagging.
fn main() {
    const N: usize = 16;
    let mut grid = CostGrid::new(N).unwrap();
    grid.edit_all(9);
    grid.edit_line(Point::new(0, 0), Point::new(0, 15), 1).unwrap();
    grid.edit_line(Point::new(1, 15), Point::new(15, 15), 1).unwrap();
    grid.update();
    println!("{}", grid);

    let request = SearchRequest::new(Point::new(0, 0), Point::new(15, 15))
        .with_formula(Formula::Diagonal)
        .with_diagonals(true)
        .with_lessen_diagonals(true)
        .with_lessen_direction_change(true);
    let response = find_path(&grid, &request).unwrap();
    let path = response.path().unwrap();
    println!("Route with {} steps, cell cost {}:", path.len() - 1, response.path_cost(&grid));
    for p in path {
        println!("{:?}", p);
    }
}
