//! # tile_pathfinding
//!
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over a rectangular grid of
//! walkable and blocked tiles. Every step costs 1, whether it is axis-aligned or diagonal;
//! neighbours are taken from a 4- or 8-connectivity ([Connectivity]) and the remaining cost
//! is estimated by one of a fixed family of [Heuristic]s, both chosen per search.
//!
//! ```
//! use tile_pathfinding::{find_path, Connectivity, Heuristic, TileGrid};
//! use grid_util::point::Point;
//!
//! let mut grid = TileGrid::new(3, 3).unwrap();
//! grid.set_walkable(1, 1, false).unwrap();
//! let path = find_path(
//!     &grid,
//!     Point::new(0, 0),
//!     Point::new(2, 2),
//!     Heuristic::Manhattan,
//!     Connectivity::Four,
//! )
//! .unwrap();
//! assert_eq!(path.len(), 5);
//! ```
//!
//! An unreachable goal is reported as an empty path. Besides the search itself the crate
//! offers a union-find reachability check ([Components]), a serializable [WallPattern] for
//! saving boards and a TOML [Config].
pub mod components;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod path;
pub mod render;
pub mod search;
pub mod walls;

pub use components::Components;
pub use config::{Config, GridConfig};
pub use connectivity::Connectivity;
pub use error::PathError;
pub use grid::TileGrid;
pub use heuristic::Heuristic;
pub use path::path_is_connected;
pub use render::render;
pub use search::{find_path, find_path_with, EndpointPolicy, SearchOptions, SearchOutcome};
pub use walls::WallPattern;

/// Cost of a single move in any direction.
pub const STEP_COST: u32 = 1;

/// Inline capacity for neighbour lists, enough for a full 8-neighbourhood.
pub(crate) const N_SMALLVEC_SIZE: usize = 8;
