use crate::error::PathError;
use crate::grid::TileGrid;
use crate::search::SearchOptions;
use serde::{Deserialize, Serialize};

/// Board dimensions, in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: 8,
            height: 8,
        }
    }
}

/// Host configuration, typically read from a TOML file:
///
/// ```toml
/// [grid]
/// width = 16
/// height = 12
///
/// [search]
/// heuristic = "manhattan"
/// connectivity = "four"
/// endpoint_policy = "reject"
/// ```
///
/// Missing tables and keys fall back to their defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridConfig,
    pub search: SearchOptions,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Config, PathError> {
        Ok(toml::from_str(s)?)
    }

    pub fn build_grid(&self) -> Result<TileGrid, PathError> {
        TileGrid::new(self.grid.width, self.grid.height)
    }
}
