use std::collections::VecDeque;

use fxhash::FxHashMap;
use grid_util::Point;
use log::debug;

use crate::{
    error::PathError,
    occupancy::OccupancyGrid,
    search::{SearchResult, SearchStats},
    solver::{check_endpoints, GridSolver},
};

/// Breadth-first search over the same moves as [AstarSolver](super::astar::AstarSolver).
/// Since every step costs the same, the first path found is a shortest one, which makes this
/// solver the reference for judging path lengths.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

/// Number of steps from `start` to every cell reachable from it.
pub fn distance_field<G: OccupancyGrid + ?Sized>(grid: &G, start: Point) -> FxHashMap<Point, usize> {
    let mut distances = FxHashMap::default();
    if !grid.is_traversable(start) {
        return distances;
    }
    let mut queue = VecDeque::new();
    distances.insert(start, 0);
    queue.push_back(start);
    while let Some(node) = queue.pop_front() {
        let d = distances[&node];
        for n in grid.neighborhood(node) {
            distances.entry(n).or_insert_with(|| {
                queue.push_back(n);
                d + 1
            });
        }
    }
    distances
}

impl GridSolver for BfsSolver {
    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }

    fn search<G: OccupancyGrid + ?Sized>(
        &self,
        grid: &G,
        start: Point,
        goal: Point,
    ) -> Result<Option<SearchResult<Point, i32>>, PathError> {
        check_endpoints(grid, start, goal)?;
        let mut stats = SearchStats::default();
        let mut parents: FxHashMap<Point, Point> = FxHashMap::default();
        let mut queue = VecDeque::new();
        parents.insert(start, start);
        queue.push_back(start);
        stats.pushed += 1;
        while let Some(node) = queue.pop_front() {
            if node == goal {
                let mut path = vec![goal];
                let mut current = goal;
                while current != start {
                    current = parents[&current];
                    path.push(current);
                }
                path.reverse();
                let cost = self.get_path_cost(&path);
                return Ok(Some(SearchResult { path, cost, stats }));
            }
            stats.expanded += 1;
            for (n, _) in self.successors(grid, &node) {
                if !parents.contains_key(&n) {
                    parents.insert(n, node);
                    queue.push_back(n);
                    stats.pushed += 1;
                }
            }
        }
        debug!("Breadth-first search from {start} exhausted: {stats:?}");
        Ok(None)
    }
}
