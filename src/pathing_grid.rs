use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::occupancy::OccupancyGrid;

/// [PathingGrid] maintains information about components using a [UnionFind] structure in addition to the raw
/// [bool] grid values in the [BoolGrid] that determine whether a space is occupied ([true]) or
/// empty ([false]). Components follow the same movement rules as the search, so two cells in
/// different components have no path between them.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl PathingGrid {
    /// Wraps an existing [BoolGrid] and generates its components.
    pub fn from_bool_grid(grid: BoolGrid) -> PathingGrid {
        let mut pathing_grid = PathingGrid {
            components: UnionFind::new(grid.width() * grid.height()),
            grid,
            components_dirty: false,
        };
        pathing_grid.generate_components();
        pathing_grid
    }

    fn point_ix(&self, point: &Point) -> usize {
        self.grid.get_ix_point(point)
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.point_ix(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable_components(start, goal)
    }

    /// Checks if start and goal are not on the same component. Points outside the grid are
    /// unreachable from everywhere.
    pub fn unreachable_components(&self, start: &Point, goal: &Point) -> bool {
        if OccupancyGrid::in_bounds(self, *start) && OccupancyGrid::in_bounds(self, *goal) {
            !self
                .components
                .equiv(self.point_ix(start), self.point_ix(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    /// Every undirected step is visited once, from its left or upper end.
    pub fn generate_components(&mut self) {
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if self.grid.get(x, y) {
                    continue;
                }
                let parent_ix = self.point_ix(&point);
                for p in [
                    Point::new(x + 1, y),
                    Point::new(x, y + 1),
                    Point::new(x + 1, y + 1),
                    Point::new(x - 1, y + 1),
                ] {
                    if self.can_move_to(p, point) {
                        let ix = self.point_ix(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
        info!("Generated connected components for {w}x{h} grid");
    }
}

impl OccupancyGrid for PathingGrid {
    fn is_blocked(&self, point: Point) -> bool {
        self.grid.get_point(point)
    }
    fn dimensions(&self) -> (usize, usize) {
        (self.grid.width, self.grid.height)
    }
    /// Answers from the components unless blocking a cell has invalidated them.
    fn reachability(&self, start: &Point, goal: &Point) -> Option<bool> {
        if self.components_dirty {
            None
        } else {
            Some(self.reachable(start, goal))
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height as i32 {
            let values = (0..self.grid.width as i32)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl ValueGrid<bool> for PathingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        let mut base_grid = PathingGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        base_grid.generate_components();
        base_grid
    }
    fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        let p = Point::new(x, y);
        let was_blocked = self.grid.get(x, y);
        self.grid.set(x, y, blocked);
        if blocked {
            if !was_blocked {
                self.components_dirty = true;
            }
        } else {
            // Freeing a cell only adds steps incident to it: any diagonal step it unlocks
            // connects two cells that are also orthogonal neighbours of this one.
            let p_ix = self.point_ix(&p);
            for n in self.neighborhood(p) {
                let n_ix = self.point_ix(&n);
                self.components.union(p_ix, n_ix);
            }
        }
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 3x2 grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let mut path_graph = PathingGrid::new(3, 2, false);
        path_graph.grid.set(1, 0, true);
        path_graph.grid.set(1, 1, true);
        path_graph.generate_components();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(1, 1);
        let p3 = Point::new(0, 1);
        let p4 = Point::new(2, 0);
        assert!(path_graph.unreachable_components(&p1, &p2));
        assert!(path_graph.reachable(&p1, &p3));
        assert!(path_graph.unreachable_components(&p1, &p4));
        assert_eq!(path_graph.get_component(&p1), path_graph.get_component(&p3));
    }

    #[test]
    fn reachable_around_obstacle() {
        // |S  |
        // | # |
        // |  G|
        //  ___
        let mut pathing_grid = PathingGrid::new(3, 3, false);
        pathing_grid.set(1, 1, true);
        pathing_grid.update();
        assert!(pathing_grid.reachable(&Point::new(0, 0), &Point::new(2, 2)));
    }

    /// Two free cells touching only at a corner between blocked cells are separate components.
    #[test]
    fn diagonal_gap_splits_components() {
        //  ___
        // | #|
        // |# |
        //  __
        let mut pathing_grid = PathingGrid::new(2, 2, true);
        pathing_grid.set(0, 0, false);
        pathing_grid.set(1, 1, false);
        pathing_grid.generate_components();
        assert!(pathing_grid.unreachable_components(&Point::new(0, 0), &Point::new(1, 1)));
    }

    #[test]
    fn blocking_marks_dirty_and_update_regenerates() {
        let mut pathing_grid = PathingGrid::new(3, 3, false);
        let start = Point::new(0, 1);
        let goal = Point::new(2, 1);
        for y in 0..3 {
            pathing_grid.set(1, y, true);
        }
        assert!(pathing_grid.components_dirty);
        // Stale components are not trusted
        assert_eq!(pathing_grid.reachability(&start, &goal), None);
        pathing_grid.update();
        assert!(!pathing_grid.components_dirty);
        assert_eq!(pathing_grid.reachability(&start, &goal), Some(false));
    }

    #[test]
    fn unblocking_joins_components() {
        let mut pathing_grid = PathingGrid::new(3, 1, false);
        pathing_grid.set(1, 0, true);
        pathing_grid.update();
        let start = Point::new(0, 0);
        let goal = Point::new(2, 0);
        assert!(pathing_grid.unreachable_components(&start, &goal));
        pathing_grid.set(1, 0, false);
        assert!(!pathing_grid.components_dirty);
        assert!(pathing_grid.reachable(&start, &goal));
    }

    #[test]
    fn out_of_bounds_is_unreachable() {
        let pathing_grid = PathingGrid::new(2, 2, false);
        assert!(pathing_grid.unreachable_components(&Point::new(0, 0), &Point::new(5, 5)));
    }
}
