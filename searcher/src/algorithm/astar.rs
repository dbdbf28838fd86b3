//! Cost-ordered search.
//!
//! No heuristic is added to the accumulated cost, so the frontier
//! always yields the cheapest known path next. With uniform move
//! costs this finds the same path lengths as breadth-first search.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;
use std::fmt::Debug;
use std::hash::Hash;

use super::cache::BestCost;
use super::SearchAlgorithm;
use crate::algorithm::SearchQueue;
use crate::node::Node;
use crate::path::Path;
use crate::traits::{
    FnProblem, FnWeightedProblem, SearchProblem, Uniform, Weight, WeightedProblem,
};

/// Wrapper for nodes which sorts the cheapest node first, and
/// among equal costs the node which was queued first.
#[derive(Debug)]
struct Prioritized<S, W> {
    node: Node<S, W>,
    sequence: usize,
}

impl<S, W> PartialEq for Prioritized<S, W>
where
    W: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.node.cost.eq(&other.node.cost) && self.sequence.eq(&other.sequence)
    }
}

impl<S, W> Eq for Prioritized<S, W> where W: Ord {}

impl<S, W> Ord for Prioritized<S, W>
where
    W: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .cost
            .cmp(&other.node.cost)
            .then(self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<S, W> PartialOrd for Prioritized<S, W>
where
    W: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue which always yields the node
/// with the lowest accumulated cost.
#[derive(Debug)]
pub struct CostQueue<S, W>
where
    W: Ord,
{
    queue: BinaryHeap<Prioritized<S, W>>,
    sequence: usize,
}

impl<S, W> Default for CostQueue<S, W>
where
    W: Ord,
{
    fn default() -> Self {
        CostQueue {
            queue: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<S, W> SearchQueue for CostQueue<S, W>
where
    W: Ord,
{
    type Candidate = Node<S, W>;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop().map(|p| p.node)
    }

    fn push(&mut self, item: Self::Candidate) {
        self.sequence += 1;
        self.queue.push(Prioritized {
            node: item,
            sequence: self.sequence,
        });
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type AStarSearcher<P> = SearchAlgorithm<
    P,
    CostQueue<<P as WeightedProblem>::State, <P as WeightedProblem>::Weight>,
    BestCost<<P as WeightedProblem>::State, <P as WeightedProblem>::Weight>,
>;

/// Build a searcher for a problem with weighted moves.
pub fn build<P>(problem: P, origin: P::State) -> AStarSearcher<P>
where
    P: WeightedProblem,
{
    SearchAlgorithm::new(problem, origin)
}

/// Build a searcher for a problem where every move costs one step.
pub fn build_uniform<P>(problem: P, origin: P::State) -> AStarSearcher<Uniform<P>>
where
    P: SearchProblem,
{
    SearchAlgorithm::new(Uniform(problem), origin)
}

/// Search for the cheapest path when every move costs one step.
pub fn astar<S, G, F, I>(initial: S, goal_test: G, successors: F) -> Option<Path<S>>
where
    S: Debug + Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    // Without a step limit the only outcomes are found or exhausted.
    build_uniform(FnProblem::new(goal_test, successors), initial)
        .run()
        .unwrap_or_default()
}

/// Search for the cheapest path when `successors` reports
/// the cost of each move alongside the state it reaches.
pub fn astar_weighted<S, W, G, F, I>(
    initial: S,
    goal_test: G,
    successors: F,
) -> Option<Path<S, W>>
where
    S: Debug + Clone + Eq + Hash,
    W: Weight,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = (S, W)>,
{
    build(FnWeightedProblem::new(goal_test, successors), initial)
        .run()
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::basic::{bfs, dfs};

    fn grid(size: i32) -> impl Fn(&(i32, i32)) -> Vec<(i32, i32)> {
        move |&(r, c): &(i32, i32)| {
            vec![(r - 1, c), (r, c + 1), (r + 1, c), (r, c - 1)]
                .into_iter()
                .filter(|&(r, c)| r >= 0 && c >= 0 && r < size && c < size)
                .collect()
        }
    }

    #[test]
    fn queue_order() {
        let mut queue = CostQueue::default();
        queue.push(Node::root('c', 3));
        queue.push(Node::root('a', 1));
        queue.push(Node::root('b', 1));
        queue.push(Node::root('d', 0));

        let order: Vec<char> = std::iter::from_fn(|| queue.pop().map(|n| n.state)).collect();
        assert_eq!(order, vec!['d', 'a', 'b', 'c']);
    }

    #[test_log::test]
    fn open_grid() {
        let path = astar((4, 4), |p| *p == (0, 0), grid(5)).unwrap();
        assert_eq!(path.distance(), 8);
        assert_eq!(path.len(), 9);
        assert_eq!(path.cost(), 8);
        assert_eq!(path.origin(), &(4, 4));
        assert_eq!(path.destination(), &(0, 0));
    }

    #[test_log::test]
    fn matches_bfs_length() {
        let goal = |p: &(i32, i32)| *p == (6, 1);
        let a = astar((0, 5), goal, grid(7)).unwrap();
        let b = bfs((0, 5), goal, grid(7)).unwrap();
        let d = dfs((0, 5), goal, grid(7)).unwrap();

        assert_eq!(a.distance(), b.distance());
        assert!(a.cost() <= d.cost());
    }

    fn shortcut(n: &char) -> Vec<(char, u32)> {
        match n {
            'a' => vec![('b', 10), ('c', 1)],
            'c' => vec![('d', 1)],
            'd' => vec![('b', 1)],
            'b' => vec![('e', 1)],
            _ => vec![],
        }
    }

    #[test_log::test]
    fn cheaper_path_found_later() {
        let path = astar_weighted('a', |n| *n == 'e', shortcut).unwrap();
        assert_eq!(&path[..], &['a', 'c', 'd', 'b', 'e']);
        assert_eq!(path.cost(), 4);

        // Ignoring weights, the direct route is shorter.
        let unweighted = |n: &char| shortcut(n).into_iter().map(|(s, _)| s);
        let direct = bfs('a', |n| *n == 'e', unweighted).unwrap();
        assert_eq!(&direct[..], &['a', 'b', 'e']);
    }

    #[test_log::test]
    fn unreachable() {
        assert_eq!(astar_weighted('a', |n| *n == 'z', shortcut), None);
        assert_eq!(astar((0, 0), |p| *p == (9, 9), grid(3)), None);
    }

    #[test_log::test]
    fn stale_entries_are_skipped() {
        use std::cell::Cell;

        let expansions = Cell::new(0);
        let counted = |n: &char| {
            if *n == 'b' {
                expansions.set(expansions.get() + 1);
            }
            shortcut(n)
        };

        // 'b' is queued at 10 before the route through 'd' reaches it at 3.
        let problem = FnWeightedProblem::<char, u32, _, _>::new(|_: &char| false, counted);
        assert_eq!(build(problem, 'a').run().unwrap(), None);
        assert_eq!(expansions.get(), 1);
    }
}
