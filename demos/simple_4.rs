use grid_util::point::Point;
use tile_pathfinding::{find_path, render, Connectivity, Heuristic, PathError, TileGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() -> Result<(), PathError> {
    env_logger::init();
    let mut grid = TileGrid::new(3, 3)?;
    grid.set_walkable(1, 1, false)?;
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let path = find_path(&grid, start, end, Heuristic::Manhattan, Connectivity::Four)?;
    println!("Path:");
    for p in &path {
        println!("{:?}", p);
    }
    print!("{}", render(&grid, &path));
    Ok(())
}
