use crate::connectivity::Connectivity;
use crate::grid::TileGrid;
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;

/// Connected components of the walkable tiles of a [TileGrid], computed with a
/// [UnionFind] structure. The labelling is a snapshot: it goes stale as soon as the grid
/// is edited and has to be generated again.
#[derive(Clone, Debug)]
pub struct Components {
    width: usize,
    height: usize,
    connectivity: Connectivity,
    sets: UnionFind<usize>,
}

impl Components {
    /// Links every walkable tile to its walkable neighbours.
    pub fn generate(grid: &TileGrid, connectivity: Connectivity) -> Components {
        let w = grid.width();
        let h = grid.height();
        debug!("Generating {:?} connected components for {}x{} grid", connectivity, w, h);
        let mut components = Components {
            width: w,
            height: h,
            connectivity,
            sets: UnionFind::new(w * h),
        };
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if !grid.is_walkable(&point) {
                    continue;
                }
                let parent_ix = components.get_ix(&point);
                for n in grid.neighbours(&point, connectivity) {
                    let ix = components.get_ix(&n);
                    components.sets.union(parent_ix, ix);
                }
            }
        }
        components
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    fn get_ix(&self, point: &Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// Retrieves the component id of a point, [None] if it lies outside the grid.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| self.sets.find(self.get_ix(point)))
    }

    /// Checks whether a search from `start` would reach `goal`. A walled start is not part of
    /// any component, so one of its walkable neighbours has to share the goal's component.
    pub fn reachable(&self, grid: &TileGrid, start: &Point, goal: &Point) -> bool {
        if !self.in_bounds(start) || !self.in_bounds(goal) {
            return false;
        }
        if start == goal {
            return true;
        }
        if !grid.is_walkable(goal) {
            return false;
        }
        let goal_ix = self.get_ix(goal);
        if grid.is_walkable(start) {
            self.sets.equiv(self.get_ix(start), goal_ix)
        } else {
            grid.neighbours(start, self.connectivity)
                .iter()
                .any(|p| self.sets.equiv(self.get_ix(p), goal_ix))
        }
    }
}
