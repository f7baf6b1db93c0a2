use grid_seek::{find_path, CostGrid, SearchRequest};
use grid_util::point::Point;

// In this demo a path is found on a grid with shape
// #####
// #S  #
// # # #
// #  E#
// #####
// S marks the start
// E marks the end
fn main() {
    let mut grid = CostGrid::new(8).unwrap();
    grid.open_area(Point::new(1, 1), Point::new(3, 3)).unwrap();
    grid.close_point(2, 2).unwrap();
    grid.update();
    let request = SearchRequest::new(Point::new(1, 1), Point::new(3, 3)).with_diagonals(true);
    let response = find_path(&grid, &request).unwrap();
    if let Some(path) = response.path() {
        println!("A path has been found:");
        for p in path {
            println!("{:?}", p);
        }
    }
}
