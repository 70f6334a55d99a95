use crate::connectivity::Connectivity;
use crate::error::PathError;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::debug;
use smallvec::SmallVec;

/// The walkability matrix searched by [find_path](crate::find_path). Tiles are addressed by
/// 0-based `(x, y)` and all start out walkable. Internally this wraps a [BoolGrid] in which
/// [true] marks a wall.
#[derive(Clone, Debug)]
pub struct TileGrid {
    pub(crate) grid: BoolGrid,
}

impl TileGrid {
    /// Creates a fully populated grid of walkable tiles.
    pub fn new(width: usize, height: usize) -> Result<TileGrid, PathError> {
        if width == 0 || height == 0 {
            return Err(PathError::InvalidDimensions { width, height });
        }
        debug!("Creating {}x{} tile grid", width, height);
        Ok(TileGrid {
            grid: BoolGrid::new(width, height, false),
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    pub(crate) fn check_bounds(&self, x: i32, y: i32) -> Result<(), PathError> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    pub fn get_walkable(&self, x: i32, y: i32) -> Result<bool, PathError> {
        self.check_bounds(x, y)?;
        Ok(!self.grid.get(x, y))
    }

    pub fn set_walkable(&mut self, x: i32, y: i32, walkable: bool) -> Result<(), PathError> {
        self.check_bounds(x, y)?;
        self.grid.set(x, y, !walkable);
        Ok(())
    }

    /// Flips a tile between wall and floor and returns its new walkability.
    pub fn toggle_walkable(&mut self, x: i32, y: i32) -> Result<bool, PathError> {
        let walkable = !self.get_walkable(x, y)?;
        self.set_walkable(x, y, walkable)?;
        Ok(walkable)
    }

    /// Makes every tile walkable again.
    pub fn clear_walls(&mut self) {
        debug!("Clearing all walls");
        self.grid = BoolGrid::new(self.width(), self.height(), false);
    }

    /// Walkability of a point already known to be inside the grid.
    pub(crate) fn is_walkable(&self, point: &Point) -> bool {
        !self.grid.get(point.x, point.y)
    }

    /// Whether a search may step onto `point`.
    pub(crate) fn can_move_to(&self, point: &Point) -> bool {
        self.in_bounds(point.x, point.y) && self.is_walkable(point)
    }

    /// All non-walkable tiles, column by column.
    pub fn blocked_tiles(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.width() as i32).flat_map(move |x| {
            (0..self.height() as i32)
                .map(move |y| Point::new(x, y))
                .filter(move |p| !self.is_walkable(p))
        })
    }

    /// In-bounds, walkable neighbours of `point` for the given connectivity.
    pub fn neighbours(
        &self,
        point: &Point,
        connectivity: Connectivity,
    ) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        connectivity
            .neighbourhood(point)
            .filter(|p| self.can_move_to(p))
            .collect::<SmallVec<[_; N_SMALLVEC_SIZE]>>()
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.height() as i32 {
            let values = (0..self.width() as i32)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
