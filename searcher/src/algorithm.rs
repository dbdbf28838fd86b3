//! Provides the building blocks for search algorithms

use std::default::Default;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use self::cache::Cache;
use crate::errors::{Result, SearchError};
use crate::node::{Node, NodeArena};
use crate::path::Path;
use crate::traits::{SearchProblem, WeightedProblem};

pub mod astar;
pub(crate) mod basic;
pub mod cache;

/// Trait used to implement queues of search candidates
/// which should be checked for completion.
pub trait SearchQueue {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tunable behavior shared by all search algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Give up after expanding this many states.
    pub limit: Option<usize>,

    /// Log progress every time this many states have been expanded.
    pub progress: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: None,
            progress: 10_000,
        }
    }
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

/// Implementation of search, using generic components.
///
/// Uses a generic queue (Q) as the frontier and a generic cache (C)
/// as the explored set to provide a single foundation for multiple
/// search algorithms.
pub struct SearchAlgorithm<P, Q, C>
where
    P: WeightedProblem,
    Q: SearchQueue<Candidate = Node<P::State, P::Weight>> + Default,
    C: Cache<State = P::State, Cost = P::Weight>,
{
    problem: P,
    queue: Q,
    cache: C,
    explored: NodeArena<P::State, P::Weight>,
    counter: Option<StepLimit>,
    progress: usize,
}

impl<P, Q, C> SearchAlgorithm<P, Q, C>
where
    P: WeightedProblem,
    Q: SearchQueue<Candidate = Node<P::State, P::Weight>> + Default,
    C: Cache<State = P::State, Cost = P::Weight>,
{
    pub(crate) fn new(problem: P, origin: P::State) -> Self {
        let mut sr = SearchAlgorithm {
            problem,
            queue: Q::default(),
            cache: C::default(),
            explored: NodeArena::default(),
            counter: None,
            progress: SearchOptions::default().progress,
        };
        let cost = <P::Weight as Default>::default();
        sr.cache.record(&origin, &cost);
        sr.queue.push(Node::root(origin, cost));
        sr
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When this many states have been expanded,
    /// the search algorithm will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.counter = Some(StepLimit::new(limit))
    }

    /// Apply a full set of options.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.counter = options.limit.map(StepLimit::new);
        self.progress = options.progress.max(1);
        self
    }

    /// Run the search to completion.
    ///
    /// Returns `Ok(None)` when the frontier is exhausted
    /// without reaching a goal.
    pub fn run(mut self) -> Result<Option<Path<P::State, P::Weight>>> {
        let mut n = 0;
        while let Some(node) = self.queue.pop() {
            // Stale entries were superseded after they were queued.
            if !self.cache.check(&node.state, &node.cost) {
                trace!("Skipping {:?} at {:?}", node.state, node.cost);
                continue;
            }

            self.counter
                .as_mut()
                .map(|c| c.increment())
                .unwrap_or(Ok(()))?;
            n += 1;

            let is_goal = self.problem.is_goal(&node.state);
            let parent = self.explored.insert(node);

            if is_goal {
                let path = self.explored.build_path(parent);
                debug!(
                    "Found a path of {} steps ({:?}) after expanding {} states",
                    path.distance(),
                    path.cost(),
                    n
                );
                return Ok(Some(path));
            }

            let (state, cost) = {
                let current = self.explored.get(parent);
                (current.state.clone(), current.cost)
            };
            trace!("Expanding {:?} at {:?}", state, cost);

            for (child, weight) in self.problem.weighted_successors(&state) {
                let child_cost = cost + weight;
                if self.cache.admits(&child, &child_cost) {
                    self.cache.record(&child, &child_cost);
                    self.queue.push(Node::child(child, parent, child_cost));
                }
            }

            if n % self.progress == 0 {
                debug!(
                    "Q{} C{} E{} ({:?} {:?}) {}",
                    self.queue.len(),
                    self.cache.len(),
                    self.explored.len(),
                    state,
                    cost,
                    n
                );
            }
        }

        debug!("Search exhausted after expanding {} states", n);
        Ok(None)
    }
}

/// The frontier disciplines available for problems
/// where every move costs the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    #[default]
    AStar,
}

impl Algorithm {
    /// Run this algorithm on a problem, starting from `origin`.
    pub fn search<P>(
        self,
        problem: P,
        origin: P::State,
        options: SearchOptions,
    ) -> Result<Option<Path<P::State>>>
    where
        P: SearchProblem,
    {
        match self {
            Algorithm::BreadthFirst => basic::breadth_first::build(problem, origin)
                .with_options(options)
                .run(),
            Algorithm::DepthFirst => basic::depth_first::build(problem, origin)
                .with_options(options)
                .run(),
            Algorithm::AStar => astar::build_uniform(problem, origin)
                .with_options(options)
                .run(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::BreadthFirst => write!(f, "bfs"),
            Algorithm::DepthFirst => write!(f, "dfs"),
            Algorithm::AStar => write!(f, "astar"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(format!("Unknown search algorithm: {}", s)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::FnProblem;

    #[test]
    fn parse_algorithm() {
        assert_eq!("BFS".parse(), Ok(Algorithm::BreadthFirst));
        assert_eq!("a*".parse(), Ok(Algorithm::AStar));
        assert!("dijkstra".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::DepthFirst.to_string(), "dfs");
        assert_eq!(Algorithm::default(), Algorithm::AStar);
    }

    #[test_log::test]
    fn every_algorithm_reaches_goal() {
        for &algorithm in &[
            Algorithm::BreadthFirst,
            Algorithm::DepthFirst,
            Algorithm::AStar,
        ] {
            let bounded = |n: &i32| vec![n - 1, n + 1].into_iter().filter(|m| m.abs() <= 5);
            let problem = FnProblem::<i32, _, _>::new(|n: &i32| *n == 4, bounded);
            let path = algorithm
                .search(problem, 0, SearchOptions::default())
                .unwrap()
                .unwrap();
            assert_eq!(path.origin(), &0);
            assert_eq!(path.destination(), &4);
        }
    }
}
