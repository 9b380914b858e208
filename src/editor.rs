//! State of the interactive grid editor: painted obstacles, the start and goal markers, the
//! cells of the last found path and the goal animation. Input handling and drawing are left to
//! the caller; every operation here corresponds to one user action.
use core::fmt;
use std::time::Duration;

use grid_util::{BoolGrid, Point, ValueGrid};
use log::{debug, trace};

use crate::animate::GoalAnimator;
use crate::error::PathError;
use crate::occupancy::OccupancyGrid;
use crate::pathing_grid::PathingGrid;
use crate::solver::{astar::AstarSolver, GridSolver};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Blocked,
    Start,
    Goal,
    PathMark,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Blocked => '#',
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::PathMark => '*',
        }
    }
}

/// Editable grid of [Cell]s with at most one start and one goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Option<Point>,
    goal: Option<Point>,
}

impl CellGrid {
    pub fn new(width: usize, height: usize) -> CellGrid {
        CellGrid {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            start: None,
            goal: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    fn ix(&self, p: Point) -> Option<usize> {
        self.in_bounds(p)
            .then(|| p.y as usize * self.width + p.x as usize)
    }

    pub fn get(&self, p: Point) -> Option<Cell> {
        self.ix(p).map(|ix| self.cells[ix])
    }

    fn put(&mut self, p: Point, cell: Cell) {
        if let Some(ix) = self.ix(p) {
            self.cells[ix] = cell;
        }
    }

    /// Turns an empty cell into an obstacle.
    pub fn paint_obstacle(&mut self, p: Point) -> bool {
        if self.get(p) != Some(Cell::Empty) {
            return false;
        }
        trace!("Obstacle painted at {p}");
        self.put(p, Cell::Blocked);
        true
    }

    /// Turns an obstacle back into an empty cell.
    pub fn erase(&mut self, p: Point) -> bool {
        if self.get(p) != Some(Cell::Blocked) {
            return false;
        }
        self.put(p, Cell::Empty);
        true
    }

    /// Places the start on an empty cell, clearing the previous start marker.
    pub fn place_start(&mut self, p: Point) -> bool {
        if self.get(p) != Some(Cell::Empty) {
            return false;
        }
        if let Some(old) = self.start.take() {
            if self.get(old) == Some(Cell::Start) {
                self.put(old, Cell::Empty);
            }
        }
        trace!("Start placed at {p}");
        self.put(p, Cell::Start);
        self.start = Some(p);
        true
    }

    /// Places the goal on an empty cell, clearing the previous goal marker.
    pub fn place_goal(&mut self, p: Point) -> bool {
        if self.get(p) != Some(Cell::Empty) {
            return false;
        }
        if let Some(old) = self.goal.take() {
            if self.get(old) == Some(Cell::Goal) {
                self.put(old, Cell::Empty);
            }
        }
        trace!("Goal placed at {p}");
        self.put(p, Cell::Goal);
        self.goal = Some(p);
        true
    }

    /// Shifts the start by one cell unless the target is outside the grid, blocked or the
    /// start itself.
    pub fn move_start(&mut self, dx: i32, dy: i32) -> bool {
        let Some(start) = self.start else {
            return false;
        };
        let target = Point::new(start.x + dx, start.y + dy);
        match self.get(target) {
            None | Some(Cell::Blocked) | Some(Cell::Start) => false,
            Some(_) => {
                let vacated = if self.goal == Some(start) {
                    Cell::Goal
                } else {
                    Cell::Empty
                };
                self.put(start, vacated);
                self.put(target, Cell::Start);
                self.start = Some(target);
                trace!("Start moved to {target}");
                true
            }
        }
    }

    /// Moves the goal marker onto any traversable cell. The start marker is never overwritten.
    pub fn move_goal_to(&mut self, p: Point) -> bool {
        match self.get(p) {
            None | Some(Cell::Blocked) => false,
            Some(cell) => {
                if let Some(old) = self.goal {
                    if self.get(old) == Some(Cell::Goal) {
                        self.put(old, Cell::Empty);
                    }
                }
                if cell != Cell::Start {
                    self.put(p, Cell::Goal);
                }
                self.goal = Some(p);
                true
            }
        }
    }

    /// Marks the empty cells of a path.
    pub fn mark_path(&mut self, path: &[Point]) {
        for p in path {
            if self.get(*p) == Some(Cell::Empty) {
                self.put(*p, Cell::PathMark);
            }
        }
    }

    /// Removes all path marks.
    pub fn clear_path(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| **c == Cell::PathMark) {
            *cell = Cell::Empty;
        }
    }

    /// Empties the grid and forgets start and goal.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.start = None;
        self.goal = None;
    }

    /// Snapshot of the obstacles with connected components generated.
    pub fn to_pathing_grid(&self) -> PathingGrid {
        let mut grid = BoolGrid::new(self.width, self.height, false);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.get(Point::new(x, y)) == Some(Cell::Blocked) {
                    grid.set(x, y, true);
                }
            }
        }
        PathingGrid::from_bool_grid(grid)
    }
}

impl OccupancyGrid for CellGrid {
    fn is_blocked(&self, point: Point) -> bool {
        self.get(point) == Some(Cell::Blocked)
    }
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// An editing session: the grid, the solver and the goal animation, driven by user actions
/// and a clock.
#[derive(Clone, Debug)]
pub struct Editor {
    pub grid: CellGrid,
    pub solver: AstarSolver,
    pub animator: GoalAnimator,
    has_path: bool,
}

impl Editor {
    pub fn new(width: usize, height: usize) -> Editor {
        Editor {
            grid: CellGrid::new(width, height),
            solver: AstarSolver::new(),
            animator: GoalAnimator::default(),
            has_path: false,
        }
    }

    pub fn has_path(&self) -> bool {
        self.has_path
    }

    /// Replaces the shown path with a fresh search from start to goal and starts walking the
    /// goal back along it. Without both markers there is nothing to search.
    pub fn run_pathfinding(&mut self, now: Duration) -> Result<Option<Vec<Point>>, PathError> {
        self.grid.clear_path();
        self.has_path = true;
        self.animator.resume();
        let (Some(start), Some(goal)) = (self.grid.start(), self.grid.goal()) else {
            self.animator.stop();
            return Ok(None);
        };
        let path = self.solver.get_path_single_goal(&self.grid, start, goal);
        match &path {
            Ok(Some(path)) => {
                debug!("Showing path of {} cells", path.len());
                self.grid.mark_path(path);
                self.animator.start(path.clone(), now);
            }
            _ => self.animator.stop(),
        }
        path
    }

    /// Hides the path and holds the goal where it is.
    pub fn clear_path(&mut self) {
        self.has_path = false;
        self.grid.clear_path();
        self.animator.pause();
    }

    pub fn toggle_pause(&mut self) {
        self.animator.toggle_pause();
    }

    pub fn reset(&mut self) {
        self.grid.reset();
        self.animator.stop();
        self.has_path = false;
    }

    /// Moves the start and, while a path is shown, searches again from the new position.
    pub fn move_start(&mut self, dx: i32, dy: i32, now: Duration) -> Result<bool, PathError> {
        if !self.grid.move_start(dx, dy) {
            return Ok(false);
        }
        if self.has_path {
            self.run_pathfinding(now)?;
        }
        Ok(true)
    }

    /// Advances the goal animation, returning the goal's new cell if it moved. An obstacle
    /// painted onto the remaining path ends the animation with the goal left in place.
    pub fn tick(&mut self, now: Duration) -> Option<Point> {
        let next = self.animator.tick(now)?;
        if !self.grid.move_goal_to(next) {
            debug!("Goal animation stopped at {next}");
            self.animator.stop();
            return None;
        }
        Some(next)
    }
}
