use grid_util::Point;

use crate::{solver::GridSolver, C};

/// Distance estimate used to order the frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// `|dx| + |dy|`. Overestimates whenever a diagonal step would cover both axes at once,
    /// so paths are legal but may be longer than necessary.
    #[default]
    Manhattan,
    /// `max(|dx|, |dy|)`. Exact on an empty grid and never overestimates, so paths are shortest.
    Chebyshev,
}

impl Heuristic {
    pub fn distance(&self, p1: &Point, p2: &Point) -> i32 {
        match self {
            Heuristic::Manhattan => p1.manhattan_distance(p2) * C,
            Heuristic::Chebyshev => (p1.x - p2.x).abs().max((p1.y - p2.y).abs()) * C,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub heuristic: Heuristic,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic: Heuristic::Manhattan,
        }
    }

    pub fn with_heuristic(heuristic: Heuristic) -> AstarSolver {
        AstarSolver { heuristic }
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        self.heuristic.distance(p1, p2)
    }
}
