//! Errors reported when a search is requested with endpoints the grid cannot serve.
//!
//! An unreachable goal is not an error: searches report it as `Ok(None)`.

use std::fmt;

use grid_util::Point;

/// Which endpoint of a search request an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Invalid input to a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// The grid has no cells to search.
    EmptyGrid {
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// An endpoint lies outside the grid.
    OutOfBounds {
        /// Offending endpoint
        role: Endpoint,
        /// Requested coordinate
        point: Point,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// An endpoint lies on a blocked cell.
    Blocked {
        /// Offending endpoint
        role: Endpoint,
        /// Requested coordinate
        point: Point,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::EmptyGrid { width, height } => {
                write!(f, "cannot search an empty {width}x{height} grid")
            }
            PathError::OutOfBounds {
                role,
                point,
                width,
                height,
            } => write!(
                f,
                "{role} ({}, {}) lies outside the {width}x{height} grid",
                point.x, point.y
            ),
            PathError::Blocked { role, point } => {
                write!(f, "{role} ({}, {}) is a blocked cell", point.x, point.y)
            }
        }
    }
}

impl std::error::Error for PathError {}
