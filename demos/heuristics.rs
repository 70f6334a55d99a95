use grid_util::point::Point;
use tile_pathfinding::{
    find_path_with, render, Connectivity, Heuristic, PathError, SearchOptions, TileGrid,
};

// Runs every heuristic on the same board and reports how many tiles each one had to close.
// The signed Manhattan estimate is inadmissible and can come back with a longer route.

fn main() -> Result<(), PathError> {
    env_logger::init();
    const N: i32 = 12;
    let mut grid = TileGrid::new(N as usize, N as usize)?;
    for i in 2..N - 2 {
        grid.set_walkable(i, 4, false)?;
        grid.set_walkable(N - 5, i, false)?;
    }
    let start = Point::new(N - 1, N - 1);
    let end = Point::new(1, 1);
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        for heuristic in Heuristic::ALL {
            let outcome = find_path_with(
                &grid,
                start,
                end,
                &SearchOptions::new(heuristic, connectivity),
                None,
            )?;
            println!(
                "{:?} / {}: path length {}, closed {} tiles",
                connectivity,
                heuristic.name(),
                outcome.path.len(),
                outcome.visited.len()
            );
            print!("{}", render(&grid, &outcome.path));
        }
    }
    Ok(())
}
