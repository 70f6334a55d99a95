//! The open set of an A* search: a [BinaryHeap] ordered by estimated total cost paired with
//! a map holding the best open node per coordinate, so membership and cost lookups do not
//! need a second list.
use fxhash::FxHashMap;
use grid_util::point::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A coordinate discovered during one search. `parent` is the position of the parent node
/// in that search's closed set and is [None] only for the start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchNode {
    pub point: Point,
    pub g: u32,
    pub h: f64,
    pub parent: Option<usize>,
}

impl SearchNode {
    pub fn new(point: Point, g: u32, h: f64, parent: Option<usize>) -> SearchNode {
        SearchNode {
            point,
            g,
            h,
            parent,
        }
    }

    pub fn f(&self) -> f64 {
        self.g as f64 + self.h
    }
}

struct SmallestCostHolder {
    estimated_cost: f64,
    cost: u32,
    point: Point,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on estimated cost so the max-heap pops the smallest f, ties go to the
        // node furthest from the start
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<SmallestCostHolder>,
    open: FxHashMap<Point, SearchNode>,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }

    /// Adds `node` unless its coordinate is already open with a `g` at most as large.
    /// Returns whether the node was added. A replaced entry stays in the heap and is
    /// dropped when it surfaces.
    pub fn insert(&mut self, node: SearchNode) -> bool {
        if let Some(existing) = self.open.get(&node.point) {
            if existing.g <= node.g {
                return false;
            }
        }
        self.heap.push(SmallestCostHolder {
            estimated_cost: node.f(),
            cost: node.g,
            point: node.point,
        });
        self.open.insert(node.point, node);
        true
    }

    /// Removes and returns the open node with the lowest `f`.
    pub fn extract_min(&mut self) -> Option<SearchNode> {
        while let Some(SmallestCostHolder { cost, point, .. }) = self.heap.pop() {
            // Otherwise superseded by a cheaper insertion or already extracted
            if self.open.get(&point).is_some_and(|node| node.g == cost) {
                return self.open.remove(&point);
            }
        }
        None
    }

    pub fn find_by_coordinate(&self, point: &Point) -> Option<&SearchNode> {
        self.open.get(point)
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Number of open coordinates, not counting superseded heap entries.
    pub fn len(&self) -> usize {
        self.open.len()
    }
}
