use crate::connectivity::Connectivity;
use crate::frontier::SearchNode;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;
use itertools::Itertools;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Follows parent links from the closed node at `goal` back to the start and returns the
/// route from start to goal, both included.
pub(crate) fn reconstruct_path(closed: &FxIndexMap<Point, SearchNode>, goal: usize) -> Vec<Point> {
    let mut path: Vec<Point> = std::iter::successors(closed.get_index(goal), |(_, node)| {
        node.parent.and_then(|parent| closed.get_index(parent))
    })
    .map(|(point, _)| *point)
    .collect();
    path.reverse();
    path
}

/// Checks that every consecutive pair of `path` is one allowed step apart.
pub fn path_is_connected(path: &[Point], connectivity: Connectivity) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| connectivity.is_step(a, b))
}
