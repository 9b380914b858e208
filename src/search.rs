//! Best-first search with an explicit heuristic, in the shape of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html).
//!
//! The explored set lives in an insertion-ordered map from node to `(parent index, cost)`,
//! so every node is identified by its index in the map and the frontier only stores indices.
//! The start node is its own parent; reconstruction stops there.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Frontier entry. Ordered so that [BinaryHeap] pops the smallest estimated cost first and,
/// among equal estimates, the entry pushed first.
struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    sequence: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Counters describing the work done by one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expanded: usize,
    /// Entries pushed onto the frontier, including the start.
    pub pushed: usize,
    /// Frontier entries discarded because a cheaper route to their node was found later.
    pub stale: usize,
}

/// Result of a successful search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<N, C> {
    /// Nodes from start to the accepted node, both included.
    pub path: Vec<N>,
    pub cost: C,
    pub stats: SearchStats,
}

/// State of a single search: the explored nodes with their best known cost and
/// predecessor, and the frontier. Created empty for every search.
pub struct SearchContext<N, C> {
    to_see: BinaryHeap<SmallestCostHolder<C>>,
    parents: FxIndexMap<N, (usize, C)>,
    sequence: usize,
    stats: SearchStats,
}

impl<N, C> Default for SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, C> SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    pub fn new() -> Self {
        SearchContext {
            to_see: BinaryHeap::new(),
            parents: FxIndexMap::default(),
            sequence: 0,
            stats: SearchStats::default(),
        }
    }

    fn push(&mut self, estimated_cost: C, cost: C, index: usize) {
        self.to_see.push(SmallestCostHolder {
            estimated_cost,
            cost,
            sequence: self.sequence,
            index,
        });
        self.sequence += 1;
        self.stats.pushed += 1;
    }

    /// Walks the parent indices from `index` back to the self-referencing start node.
    fn reverse_path(&self, index: usize) -> Vec<N> {
        let mut path: Vec<N> = std::iter::successors(Some(index), |&i| {
            self.parents
                .get_index(i)
                .map(|(_, &(parent, _))| parent)
                .filter(|&parent| parent != i)
        })
        .filter_map(|i| self.parents.get_index(i).map(|(node, _)| node.clone()))
        .collect();
        path.reverse();
        path
    }

    /// Searches from `start` until a node satisfying `success` is popped from the frontier.
    /// Returns [None] once the frontier is exhausted.
    ///
    /// A node is re-entered into the frontier whenever a strictly cheaper route to it is
    /// found, so a heuristic that overestimates still yields a connected path, just not
    /// necessarily the cheapest one.
    pub fn astar<FN, IN, FH, FS>(
        &mut self,
        start: &N,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> Option<SearchResult<N, C>>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        self.to_see.clear();
        self.parents.clear();
        self.sequence = 0;
        self.stats = SearchStats::default();

        self.parents.insert(start.clone(), (0, Zero::zero()));
        self.push(Zero::zero(), Zero::zero(), 0);
        while let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() {
            let successors = {
                let Some((node, &(_, c))) = self.parents.get_index(index) else {
                    continue;
                };
                if success(node) {
                    let path = self.reverse_path(index);
                    debug!(
                        "Search succeeded: {} nodes on path, {:?}",
                        path.len(),
                        self.stats
                    );
                    return Some(SearchResult {
                        path,
                        cost,
                        stats: self.stats,
                    });
                }
                // We may have inserted a node several times into the binary heap if we found
                // a better way to access it. Ensure that we are currently dealing with the
                // best path and discard the others.
                if cost > c {
                    self.stats.stale += 1;
                    continue;
                }
                self.stats.expanded += 1;
                successors(node)
            };
            for (successor, move_cost) in successors {
                let new_cost = cost + move_cost;
                let h; // heuristic(&successor)
                let n; // index for successor
                match self.parents.entry(successor) {
                    Vacant(e) => {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            h = heuristic(e.key());
                            n = e.index();
                            e.insert((index, new_cost));
                        } else {
                            continue;
                        }
                    }
                }
                self.push(new_cost + h, new_cost, n);
            }
        }
        debug!("Search exhausted the frontier: {:?}", self.stats);
        None
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Best known cost of every node reached by the most recent search.
    pub fn costs(&self) -> impl Iterator<Item = (&N, C)> + '_ {
        self.parents.iter().map(|(node, &(_, cost))| (node, cost))
    }
}
