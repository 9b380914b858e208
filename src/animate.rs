use std::time::Duration;

use grid_util::Point;

use crate::MOVE_INTERVAL_MS;

/// Walks the goal back along a found path, one cell per `interval`.
///
/// Time is supplied by the caller as the elapsed time since any fixed instant, so the animator
/// can be driven by a frame clock or by tests alike.
#[derive(Clone, Debug)]
pub struct GoalAnimator {
    pub interval: Duration,
    remaining: Vec<Point>,
    origin: Option<Point>,
    last_move: Duration,
    active: bool,
    paused: bool,
}

impl Default for GoalAnimator {
    fn default() -> Self {
        GoalAnimator::new(Duration::from_millis(MOVE_INTERVAL_MS))
    }
}

impl GoalAnimator {
    pub fn new(interval: Duration) -> GoalAnimator {
        GoalAnimator {
            interval,
            remaining: Vec::new(),
            origin: None,
            last_move: Duration::ZERO,
            active: false,
            paused: false,
        }
    }

    /// Loads a start-to-goal path. The first move happens one interval after `now`.
    pub fn start(&mut self, path: Vec<Point>, now: Duration) {
        self.origin = path.first().copied();
        self.active = !path.is_empty();
        self.remaining = path;
        self.last_move = now;
    }

    /// Returns the next cell for the goal if one is due. The cells come from the end of the
    /// path, so the first one is the goal itself and the last one the start.
    pub fn tick(&mut self, now: Duration) -> Option<Point> {
        if !self.active || self.paused {
            return None;
        }
        if now.saturating_sub(self.last_move) < self.interval {
            return None;
        }
        let next = self.remaining.pop();
        self.last_move = now;
        if next.is_none() || next == self.origin || self.remaining.is_empty() {
            self.active = false;
        }
        next
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Drops the remaining path.
    pub fn stop(&mut self) {
        self.remaining.clear();
        self.origin = None;
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Cells not yet visited, in start-to-goal order.
    pub fn remaining(&self) -> &[Point] {
        &self.remaining
    }
}
