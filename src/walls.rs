use crate::error::PathError;
use crate::grid::TileGrid;
use log::debug;
use serde::{Deserialize, Serialize};

/// The saved shape of a board's walls: `{"walls": [[x0, y0], [x1, y1], ...]}`, one pair per
/// non-walkable tile. Where it is stored is up to the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallPattern {
    pub walls: Vec<[i32; 2]>,
}

impl WallPattern {
    /// Records every non-walkable tile of `grid`, column by column.
    pub fn capture(grid: &TileGrid) -> WallPattern {
        WallPattern {
            walls: grid.blocked_tiles().map(|p| [p.x, p.y]).collect(),
        }
    }

    /// Marks every recorded tile as a wall. Tiles not in the pattern are left as they are.
    /// Stops at the first pair outside the grid; the pairs before it stay applied.
    pub fn apply(&self, grid: &mut TileGrid) -> Result<(), PathError> {
        debug!("Applying {} walls", self.walls.len());
        for &[x, y] in &self.walls {
            grid.set_walkable(x, y, false)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn to_json(&self) -> Result<String, PathError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<WallPattern, PathError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_shape() {
        let mut grid = TileGrid::new(4, 4).unwrap();
        grid.set_walkable(3, 1, false).unwrap();
        grid.set_walkable(0, 2, false).unwrap();
        let json = WallPattern::capture(&grid).to_json().unwrap();
        assert_eq!(json, r#"{"walls":[[0,2],[3,1]]}"#);
    }

    #[test]
    fn load_replays_walls() {
        let pattern = WallPattern::from_json(r#"{ "walls": [[1, 1], [2, 3]] }"#).unwrap();
        let mut grid = TileGrid::new(4, 4).unwrap();
        pattern.apply(&mut grid).unwrap();
        assert!(!grid.get_walkable(1, 1).unwrap());
        assert!(!grid.get_walkable(2, 3).unwrap());
        assert_eq!(WallPattern::capture(&grid), pattern);
    }

    #[test]
    fn load_into_smaller_grid_fails() {
        let pattern = WallPattern {
            walls: vec![[0, 0], [5, 0]],
        };
        let mut grid = TileGrid::new(3, 3).unwrap();
        assert!(matches!(
            pattern.apply(&mut grid),
            Err(PathError::OutOfBounds { x: 5, y: 0, .. })
        ));
        assert!(!grid.get_walkable(0, 0).unwrap());
    }

    #[test]
    fn malformed_pattern() {
        assert!(matches!(
            WallPattern::from_json(r#"{"walls": [[1]]}"#),
            Err(PathError::Pattern(_))
        ));
        assert!(WallPattern::from_json(r#"{"walls": []}"#).unwrap().is_empty());
    }
}
