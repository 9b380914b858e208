//! # grid_astar
//!
//! Shortest paths on an occupancy grid. A path is a sequence of cells where every
//! step moves to one of the eight neighbouring cells, each step costing the same.
//! Diagonal steps are only allowed when both orthogonal cells flanking the step are free,
//! so a path never squeezes between two blocked cells that touch at a corner.
//!
//! The search is [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//! Under 8-directional movement with unit diagonal cost the Manhattan distance
//! overestimates the remaining cost, so the returned path is always legal but not
//! always the shortest one. [Heuristic::Chebyshev](solver::astar::Heuristic::Chebyshev)
//! is available as an admissible alternative and [BfsSolver](solver::bfs::BfsSolver) as
//! an exact reference.
//!
//! [PathingGrid](pathing_grid::PathingGrid) pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! The [editor] and [animate] modules hold the state of an interactive grid editor
//! (obstacle painting, start/goal placement, path marks, goal animation) without any
//! window or input handling attached.
pub mod animate;
pub mod editor;
pub mod error;
pub mod occupancy;
pub mod path;
pub mod pathing_grid;
pub mod search;
pub mod solver;

pub use animate::GoalAnimator;
pub use editor::{Cell, CellGrid, Editor};
pub use error::{Endpoint, PathError};
pub use occupancy::OccupancyGrid;
pub use path::{validate_path, PathViolation};
pub use pathing_grid::PathingGrid;
pub use solver::{astar::AstarSolver, astar::Heuristic, bfs::BfsSolver, GridSolver};

/// Cost of a single step. Orthogonal and diagonal steps cost the same.
pub const C: i32 = 1;
/// Successor buffers hold at most the eight neighbours inline.
pub const N_SMALLVEC_SIZE: usize = 8;
/// Default delay between two goal moves of the [GoalAnimator].
pub const MOVE_INTERVAL_MS: u64 = 100;

/// The unit offsets in the order successors are generated: orthogonal first, then diagonal.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
