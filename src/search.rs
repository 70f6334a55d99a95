/// A* over a [TileGrid], following the structure of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html):
/// a closed set kept in an index map so that parents can be referred to by position, and an
/// open [Frontier] ordered by estimated total cost. Closed nodes are never reopened.
use crate::connectivity::Connectivity;
use crate::error::PathError;
use crate::frontier::{Frontier, SearchNode};
use crate::grid::TileGrid;
use crate::heuristic::Heuristic;
use crate::path::{reconstruct_path, FxIndexMap};
use crate::STEP_COST;
use grid_util::point::Point;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// What to do when the start or end tile is a wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointPolicy {
    /// Search anyway. A walled start can still be left; a walled end is never stepped onto,
    /// so it only gives a path when it is also the start.
    #[default]
    Allow,
    /// Fail with [PathError::BlockedEndpoint].
    Reject,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub heuristic: Heuristic,
    pub connectivity: Connectivity,
    pub endpoint_policy: EndpointPolicy,
}

impl SearchOptions {
    pub fn new(heuristic: Heuristic, connectivity: Connectivity) -> SearchOptions {
        SearchOptions {
            heuristic,
            connectivity,
            endpoint_policy: EndpointPolicy::Allow,
        }
    }
}

/// Result of a search. `path` is empty when the end could not be reached; `visited` lists
/// the coordinates in the order they were closed, ending with the end when it was found.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchOutcome {
    pub path: Vec<Point>,
    pub visited: Vec<Point>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Computes a shortest path from `start` to `end`, both included. An unreachable end gives
/// an empty path rather than an error. The result is only guaranteed to be shortest when
/// `heuristic` is admissible for `connectivity`, see [Heuristic].
pub fn find_path(
    grid: &TileGrid,
    start: Point,
    end: Point,
    heuristic: Heuristic,
    connectivity: Connectivity,
) -> Result<Vec<Point>, PathError> {
    find_path_with(
        grid,
        start,
        end,
        &SearchOptions::new(heuristic, connectivity),
        None,
    )
    .map(|outcome| outcome.path)
}

/// Like [find_path] but also returns the traversal order. When `cancel` is given it is
/// polled before every expansion and the search stops with [PathError::Cancelled] once it
/// reads [true].
pub fn find_path_with(
    grid: &TileGrid,
    start: Point,
    end: Point,
    options: &SearchOptions,
    cancel: Option<&AtomicBool>,
) -> Result<SearchOutcome, PathError> {
    grid.check_bounds(start.x, start.y)?;
    grid.check_bounds(end.x, end.y)?;
    if options.endpoint_policy == EndpointPolicy::Reject {
        for p in [start, end] {
            if !grid.is_walkable(&p) {
                return Err(PathError::BlockedEndpoint { x: p.x, y: p.y });
            }
        }
    }
    debug!(
        "Searching {} -> {} ({:?}, {:?})",
        start, end, options.heuristic, options.connectivity
    );

    let heuristic = options.heuristic;
    let mut frontier = Frontier::new();
    let mut closed: FxIndexMap<Point, SearchNode> = FxIndexMap::default();
    let mut visited = Vec::new();
    frontier.insert(SearchNode::new(
        start,
        0,
        heuristic.estimate(&start, &end),
        None,
    ));

    let mut goal_index = None;
    while let Some(node) = frontier.extract_min() {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            warn!("Search {} -> {} cancelled after {} expansions", start, end, visited.len());
            return Err(PathError::Cancelled);
        }
        let point = node.point;
        let cost = node.g;
        trace!("Closing {} (g = {}, f = {})", point, cost, node.f());
        let (index, previous) = closed.insert_full(point, node);
        debug_assert!(previous.is_none(), "{} was closed twice", point);
        visited.push(point);
        if point == end {
            goal_index = Some(index);
            break;
        }

        for successor in grid.neighbours(&point, options.connectivity) {
            if closed.contains_key(&successor) {
                continue;
            }
            let new_cost = cost + STEP_COST;
            if let Some(open) = frontier.find_by_coordinate(&successor) {
                if open.g <= new_cost {
                    continue;
                }
            }
            let h = heuristic.estimate(&successor, &end);
            frontier.insert(SearchNode::new(successor, new_cost, h, Some(index)));
        }
    }

    let path = match goal_index {
        Some(index) => reconstruct_path(&closed, index),
        None => Vec::new(),
    };
    debug!(
        "Search {} -> {} closed {} nodes, path length {}",
        start,
        end,
        visited.len(),
        path.len()
    );
    Ok(SearchOutcome { path, visited })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::path_is_connected;

    fn grid_with_walls(width: usize, height: usize, walls: &[(i32, i32)]) -> TileGrid {
        let mut grid = TileGrid::new(width, height).unwrap();
        for &(x, y) in walls {
            grid.set_walkable(x, y, false).unwrap();
        }
        grid
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            let grid = TileGrid::new(1, 1).unwrap();
            let start = Point::new(0, 0);
            let path = find_path(&grid, start, start, Heuristic::Zero, connectivity).unwrap();
            assert_eq!(path, vec![start]);
        }
    }

    /// Asserts that the optimal solution is found around a blocked centre tile.
    #[test]
    fn solve_simple_problem() {
        //  ___
        // |S  |
        // | # |
        // |  E|
        //  ___
        for (connectivity, expected) in [(Connectivity::Four, 5), (Connectivity::Eight, 4)] {
            let grid = grid_with_walls(3, 3, &[(1, 1)]);
            let start = Point::new(0, 0);
            let end = Point::new(2, 2);
            for heuristic in [Heuristic::Zero, Heuristic::Manhattan, Heuristic::Euclidean] {
                let path = find_path(&grid, start, end, heuristic, connectivity).unwrap();
                assert_eq!(path.len(), expected);
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
                assert!(!path.contains(&Point::new(1, 1)));
                assert!(path_is_connected(&path, connectivity));
            }
        }
    }

    #[test]
    fn test_complex() {
        for (connectivity, expected) in [(Connectivity::Four, 15), (Connectivity::Eight, 9)] {
            let grid = grid_with_walls(10, 10, &[(1, 1), (5, 0), (0, 5), (8, 8)]);
            let start = Point::new(0, 0);
            let end = Point::new(7, 7);
            let path = find_path(&grid, start, end, Heuristic::Zero, connectivity).unwrap();
            assert_eq!(path.len(), expected);
            assert!(path_is_connected(&path, connectivity));
        }
    }

    // Tests whether allowing diagonals has the expected effect on path existence in a minimal setting.
    #[test]
    fn test_diagonal_switch_path() {
        //  __
        // | #|
        // |# |
        //  __
        let grid = grid_with_walls(2, 2, &[(1, 0), (0, 1)]);
        let start = Point::new(0, 0);
        let goal = Point::new(1, 1);
        let path = find_path(&grid, start, goal, Heuristic::Zero, Connectivity::Four).unwrap();
        let path_diag =
            find_path(&grid, start, goal, Heuristic::Zero, Connectivity::Eight).unwrap();
        assert!(path.is_empty());
        assert_eq!(path_diag, vec![start, goal]);
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let grid = TileGrid::new(4, 4).unwrap();
        let inside = Point::new(0, 0);
        for outside in [Point::new(4, 0), Point::new(0, 4), Point::new(-1, 2)] {
            for (start, end) in [(inside, outside), (outside, inside)] {
                let result = find_path(&grid, start, end, Heuristic::Zero, Connectivity::Four);
                assert!(matches!(result, Err(PathError::OutOfBounds { .. })));
            }
        }
    }

    /// A walled start is still searched from, a walled end only yields "no path".
    #[test]
    fn blocked_endpoints_are_searched_by_default() {
        let grid = grid_with_walls(3, 1, &[(0, 0)]);
        let walled = Point::new(0, 0);
        let path = find_path(
            &grid,
            walled,
            Point::new(2, 0),
            Heuristic::Manhattan,
            Connectivity::Four,
        )
        .unwrap();
        assert_eq!(path, vec![walled, Point::new(1, 0), Point::new(2, 0)]);

        let back = find_path(
            &grid,
            Point::new(2, 0),
            walled,
            Heuristic::Manhattan,
            Connectivity::Four,
        )
        .unwrap();
        assert!(back.is_empty());

        let same = find_path(&grid, walled, walled, Heuristic::Zero, Connectivity::Four).unwrap();
        assert_eq!(same, vec![walled]);
    }

    #[test]
    fn blocked_endpoints_rejected_on_request() {
        let grid = grid_with_walls(3, 1, &[(2, 0)]);
        let options = SearchOptions {
            endpoint_policy: EndpointPolicy::Reject,
            ..SearchOptions::default()
        };
        let result = find_path_with(&grid, Point::new(0, 0), Point::new(2, 0), &options, None);
        assert!(matches!(
            result,
            Err(PathError::BlockedEndpoint { x: 2, y: 0 })
        ));
    }

    #[test]
    fn boxed_in_goal_is_unreachable() {
        let grid = grid_with_walls(5, 5, &[(2, 1), (1, 2), (3, 2), (2, 3)]);
        let outcome = find_path_with(
            &grid,
            Point::new(0, 0),
            Point::new(2, 2),
            &SearchOptions::new(Heuristic::Manhattan, Connectivity::Four),
            None,
        )
        .unwrap();
        assert!(!outcome.found());
        // Every walkable tile outside the box gets closed before giving up
        assert_eq!(outcome.visited.len(), 25 - 4 - 1);
    }

    #[test]
    fn visited_records_closing_order() {
        let grid = TileGrid::new(4, 1).unwrap();
        let outcome = find_path_with(
            &grid,
            Point::new(0, 0),
            Point::new(3, 0),
            &SearchOptions::new(Heuristic::Manhattan, Connectivity::Four),
            None,
        )
        .unwrap();
        assert_eq!(outcome.visited, outcome.path);
        assert_eq!(outcome.visited.first(), Some(&Point::new(0, 0)));
        assert_eq!(outcome.visited.last(), Some(&Point::new(3, 0)));
    }

    #[test]
    fn cancelled_search() {
        let grid = TileGrid::new(8, 8).unwrap();
        let cancel = AtomicBool::new(true);
        let result = find_path_with(
            &grid,
            Point::new(0, 0),
            Point::new(7, 7),
            &SearchOptions::default(),
            Some(&cancel),
        );
        assert!(matches!(result, Err(PathError::Cancelled)));

        cancel.store(false, Ordering::Relaxed);
        let outcome = find_path_with(
            &grid,
            Point::new(0, 0),
            Point::new(7, 7),
            &SearchOptions::default(),
            Some(&cancel),
        )
        .unwrap();
        assert_eq!(outcome.path.len(), 8);
    }

    /// The signed Manhattan estimate is inadmissible but must still produce a valid route.
    #[test]
    fn signed_manhattan_still_connects() {
        let grid = grid_with_walls(6, 6, &[(2, 2), (3, 2), (4, 2), (2, 3)]);
        let start = Point::new(5, 5);
        let end = Point::new(0, 0);
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            let path =
                find_path(&grid, start, end, Heuristic::SignedManhattan, connectivity).unwrap();
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            assert!(path_is_connected(&path, connectivity));
        }
    }
}
