use grid_util::{BoolGrid, Point, ValueGrid};
use smallvec::SmallVec;

use crate::{N_SMALLVEC_SIZE, NEIGHBOUR_OFFSETS};

/// Read-only view of a grid as seen by the search: cells are either blocked or traversable.
///
/// Implementors only provide [is_blocked](Self::is_blocked) for in-bounds points and the grid
/// dimensions; the movement rules are shared by all grids through the provided methods.
pub trait OccupancyGrid {
    /// Whether the in-bounds cell at `point` is blocked.
    fn is_blocked(&self, point: Point) -> bool;

    /// Width and height of the grid.
    fn dimensions(&self) -> (usize, usize);

    fn in_bounds(&self, point: Point) -> bool {
        let (w, h) = self.dimensions();
        point.x >= 0 && point.y >= 0 && (point.x as usize) < w && (point.y as usize) < h
    }

    /// In bounds and not blocked.
    fn is_traversable(&self, point: Point) -> bool {
        self.in_bounds(point) && !self.is_blocked(point)
    }

    /// Whether a single step from `start` to the adjacent cell `pos` is legal. A diagonal
    /// step additionally requires the two cells sharing a row or column with both ends to be
    /// traversable. Those flanking cells are bounds-checked on their own.
    fn can_move_to(&self, pos: Point, start: Point) -> bool {
        debug_assert!((start.x - pos.x).abs() <= 1 && (start.y - pos.y).abs() <= 1);
        if !self.is_traversable(pos) {
            return false;
        }
        if pos.x == start.x || pos.y == start.y {
            return true;
        }
        self.is_traversable(Point::new(pos.x, start.y))
            && self.is_traversable(Point::new(start.x, pos.y))
    }

    /// All cells reachable from `point` in one legal step, in [NEIGHBOUR_OFFSETS] order.
    fn neighborhood(&self, point: Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|&p| self.can_move_to(p, point))
            .collect()
    }

    /// Whether `goal` can be reached from `start`, if the grid knows without searching.
    /// Grids without connectivity information return [None].
    fn reachability(&self, _start: &Point, _goal: &Point) -> Option<bool> {
        None
    }
}

/// `true` marks a blocked cell, as in [PathingGrid](crate::PathingGrid).
impl OccupancyGrid for BoolGrid {
    fn is_blocked(&self, point: Point) -> bool {
        self.get(point.x, point.y)
    }
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }
}
