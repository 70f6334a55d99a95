use crate::grid::TileGrid;
use grid_util::point::Point;

/// Draws the grid one row per `y`, top row first: `#` for walls, `S` and `E` for the ends of
/// `path`, `*` for the rest of the path and `.` for open floor.
pub fn render(grid: &TileGrid, path: &[Point]) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            let c = if path.first() == Some(&p) {
                'S'
            } else if path.last() == Some(&p) {
                'E'
            } else if path.contains(&p) {
                '*'
            } else if !grid.is_walkable(&p) {
                '#'
            } else {
                '.'
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
