use grid_util::Point;
use log::{debug, info, warn};
use smallvec::SmallVec;

use crate::error::{Endpoint, PathError};
use crate::occupancy::OccupancyGrid;
use crate::search::{SearchContext, SearchResult, SearchStats};
use crate::{C, N_SMALLVEC_SIZE};

pub mod astar;
pub mod bfs;

/// Checks that the grid is non-empty and both endpoints are in bounds and traversable.
pub fn check_endpoints<G: OccupancyGrid + ?Sized>(
    grid: &G,
    start: Point,
    goal: Point,
) -> Result<(), PathError> {
    let (width, height) = grid.dimensions();
    if width == 0 || height == 0 {
        return Err(PathError::EmptyGrid { width, height });
    }
    for (role, point) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !grid.in_bounds(point) {
            return Err(PathError::OutOfBounds {
                role,
                point,
                width,
                height,
            });
        }
    }
    for (role, point) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if grid.is_blocked(point) {
            return Err(PathError::Blocked { role, point });
        }
    }
    Ok(())
}

/// A path finder over any [OccupancyGrid]. Implementors choose the heuristic; successor
/// generation, validation and the search loop are shared.
pub trait GridSolver {
    /// Estimated remaining cost from `p1` to `p2`.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    /// Every legal single step from `node`, each costing [C].
    fn successors<G: OccupancyGrid + ?Sized>(
        &self,
        grid: &G,
        node: &Point,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        grid.neighborhood(*node)
            .into_iter()
            .map(|p| (p, C))
            .collect()
    }

    /// Every step costs [C], whatever its direction.
    fn get_path_cost(&self, path: &[Point]) -> i32 {
        path.len().saturating_sub(1) as i32 * C
    }

    /// Runs a full search and returns the path with its cost and search statistics.
    /// `Ok(None)` means no path exists.
    fn search<G: OccupancyGrid + ?Sized>(
        &self,
        grid: &G,
        start: Point,
        goal: Point,
    ) -> Result<Option<SearchResult<Point, i32>>, PathError> {
        check_endpoints(grid, start, goal)?;
        if start == goal {
            return Ok(Some(SearchResult {
                path: vec![start],
                cost: 0,
                stats: SearchStats::default(),
            }));
        }
        let reachability = grid.reachability(&start, &goal);
        if reachability == Some(false) {
            info!("{goal} is not reachable from {start}");
            return Ok(None);
        }
        let mut ct = SearchContext::new();
        let result = ct.astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        );
        if result.is_none() {
            if reachability == Some(true) {
                warn!("{goal} is reachable from {start} but could not be pathed to, are the components correct?");
            } else {
                debug!("No path from {start} to {goal}");
            }
        }
        Ok(result)
    }

    /// Computes a path from start to goal, both included. Returns `Ok(None)` if the goal cannot
    /// be reached and an error if either endpoint is outside the grid or blocked.
    fn get_path_single_goal<G: OccupancyGrid + ?Sized>(
        &self,
        grid: &G,
        start: Point,
        goal: Point,
    ) -> Result<Option<Vec<Point>>, PathError> {
        Ok(self.search(grid, start, goal)?.map(|r| r.path))
    }
}
