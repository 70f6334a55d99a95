use grid_util::point::Point;
use tile_pathfinding::{
    find_path_with, render, Config, PathError, WallPattern,
};

// Builds a board from a TOML configuration, saves its walls as JSON, reloads them into a
// fresh board and searches it. Coordinates typed by a user are 1-based, the grid is 0-based.

const CONFIG: &str = r#"
[grid]
width = 8
height = 8

[search]
heuristic = "euclidean"
connectivity = "four"
"#;

fn parse_position(input: &str) -> Option<Point> {
    let mut parts = input.split(',').map(|s| s.trim().parse::<i32>().ok());
    let x = parts.next()??;
    let y = parts.next()??;
    Some(Point::new(x - 1, y - 1))
}

fn main() -> Result<(), PathError> {
    env_logger::init();
    let config = Config::from_toml_str(CONFIG)?;
    let mut grid = config.build_grid()?;
    for y in 0..6 {
        grid.toggle_walkable(3, y)?;
    }
    let saved = WallPattern::capture(&grid).to_json()?;
    println!("Saved walls: {}", saved);

    let mut restored = config.build_grid()?;
    WallPattern::from_json(&saved)?.apply(&mut restored)?;

    let (Some(start), Some(end)) = (parse_position("1, 1"), parse_position("8, 8")) else {
        return Ok(());
    };
    let outcome = find_path_with(&restored, start, end, &config.search, None)?;
    if outcome.found() {
        print!("{}", render(&restored, &outcome.path));
    } else {
        println!("No paths were found!");
    }
    Ok(())
}
