use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::data::Action;
use crate::state::State;

/// Counts of search nodes by depth. Append-only during one solve.
#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    /// Returns true when a new depth is reached.
    fn add(counts: &mut Vec<i32>, node: &SearchNode) -> bool {
        let mut new_depth = false;

        // while because duplicates can skip depths
        while node.dist as usize >= counts.len() {
            counts.push(0);
            new_depth = true;
        }
        counts[node.dist as usize] += 1;
        new_depth
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "States created total: {}",
            self.total_created().separated_string()
        )?;
        writeln!(
            f,
            "Unique states visited total: {}",
            self.total_unique_visited().separated_string()
        )?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        write!(f, "{}", self)
    }
}

/// Frontier entry: a state, the edge it was reached by and the path cost so
/// far. The full action path is not stored - it is reconstructed from the
/// parent chain once, at success.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) state: State,
    pub(crate) prev: Option<(State, Action)>,
    pub(crate) dist: i32,
    pub(crate) h: i32,
}

impl SearchNode {
    pub(crate) fn new(state: State, prev: Option<(State, Action)>, dist: i32, h: i32) -> Self {
        SearchNode {
            state,
            prev,
            dist,
            h,
        }
    }

    /// `h` is the heuristic scaled by 3, so scale `dist` to match.
    /// Order-equivalent to `dist + h/3` without leaving integers.
    fn cost(&self) -> i32 {
        3 * self.dist + self.h
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost().cmp(&other.cost())
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cost() == other.cost()
    }
}

impl Eq for SearchNode {}

#[cfg(test)]
mod tests {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use crate::data::Orientation;

    use super::*;

    #[test]
    fn ordering_by_estimated_total_cost() {
        let state = State::new(0, 0, Orientation::Standing);
        let cheap = SearchNode::new(state, None, 1, 0);
        let mid = SearchNode::new(state, None, 1, 2);
        let expensive = SearchNode::new(state, None, 2, 3);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(expensive));
        heap.push(Reverse(cheap));
        heap.push(Reverse(mid));

        assert_eq!(heap.pop().unwrap().0.cost(), 3);
        assert_eq!(heap.pop().unwrap().0.cost(), 5);
        assert_eq!(heap.pop().unwrap().0.cost(), 9);
    }

    #[test]
    fn depth_counting() {
        let state = State::new(0, 0, Orientation::Standing);
        let mut stats = Stats::new();

        assert!(stats.add_created(&SearchNode::new(state, None, 0, 0)));
        assert!(!stats.add_created(&SearchNode::new(state, None, 0, 0)));
        assert!(stats.add_created(&SearchNode::new(state, None, 2, 0)));
        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_unique_visited(), 0);
    }
}
