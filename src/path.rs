//! Checks on paths handed to consumers such as a renderer.
use core::fmt;

use grid_util::Point;
use itertools::Itertools;

use crate::occupancy::OccupancyGrid;

/// First defect found in a path, with the index of the offending point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathViolation {
    Empty,
    OutOfBounds { index: usize },
    Blocked { index: usize },
    /// The point is not one of the eight cells around its predecessor.
    NotAdjacent { index: usize },
    /// Diagonal step into this point passes a blocked flanking cell.
    CornerCut { index: usize },
}

impl fmt::Display for PathViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathViolation::Empty => write!(f, "path is empty"),
            PathViolation::OutOfBounds { index } => write!(f, "point {index} is outside the grid"),
            PathViolation::Blocked { index } => write!(f, "point {index} is blocked"),
            PathViolation::NotAdjacent { index } => {
                write!(f, "point {index} is not adjacent to its predecessor")
            }
            PathViolation::CornerCut { index } => {
                write!(f, "step into point {index} cuts a blocked corner")
            }
        }
    }
}

impl std::error::Error for PathViolation {}

/// Whether `a` and `b` differ by exactly one of the eight unit offsets.
pub fn is_unit_step(a: &Point, b: &Point) -> bool {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
}

/// Whether moving from `a` to `b` is a single legal move on `grid`.
pub fn is_legal_step<G: OccupancyGrid + ?Sized>(grid: &G, a: &Point, b: &Point) -> bool {
    is_unit_step(a, b) && grid.can_move_to(*b, *a)
}

/// Number of steps in a path.
pub fn path_len(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}

/// Checks that every point is traversable and every step is a legal single move.
pub fn validate_path<G: OccupancyGrid + ?Sized>(
    grid: &G,
    path: &[Point],
) -> Result<(), PathViolation> {
    if path.is_empty() {
        return Err(PathViolation::Empty);
    }
    for (index, p) in path.iter().enumerate() {
        if !grid.in_bounds(*p) {
            return Err(PathViolation::OutOfBounds { index });
        }
        if grid.is_blocked(*p) {
            return Err(PathViolation::Blocked { index });
        }
    }
    for (index, (a, b)) in path.iter().tuple_windows().enumerate() {
        if !is_unit_step(a, b) {
            return Err(PathViolation::NotAdjacent { index: index + 1 });
        }
        if !grid.can_move_to(*b, *a) {
            return Err(PathViolation::CornerCut { index: index + 1 });
        }
    }
    Ok(())
}
