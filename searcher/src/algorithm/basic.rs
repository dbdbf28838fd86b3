pub use breadth_first::bfs;
pub use depth_first::dfs;

pub mod breadth_first {
    use std::collections::VecDeque;
    use std::default::Default;
    use std::fmt::Debug;
    use std::hash::Hash;

    use crate::algorithm::cache::Explored;
    use crate::algorithm::{SearchAlgorithm, SearchQueue};
    use crate::node::Node;
    use crate::path::Path;
    use crate::traits::{FnProblem, SearchProblem, Uniform};

    /// First in, first out: the oldest node is expanded next.
    #[derive(Debug)]
    pub struct BreadthQueue<S> {
        queue: VecDeque<S>,
    }

    impl<S> SearchQueue for BreadthQueue<S> {
        type Candidate = S;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<S> Default for BreadthQueue<S> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    pub type BreadthFirstSearcher<P> = SearchAlgorithm<
        Uniform<P>,
        BreadthQueue<Node<<P as SearchProblem>::State, usize>>,
        Explored<<P as SearchProblem>::State, usize>,
    >;

    pub fn build<P>(problem: P, origin: P::State) -> BreadthFirstSearcher<P>
    where
        P: SearchProblem,
    {
        SearchAlgorithm::new(Uniform(problem), origin)
    }

    /// Breadth-first search, where ties are broken by the order
    /// in which `successors` returns states.
    ///
    /// Finds a path with the fewest moves, or `None` when the goal
    /// cannot be reached.
    pub fn bfs<S, G, F, I>(initial: S, goal_test: G, successors: F) -> Option<Path<S>>
    where
        S: Debug + Clone + Eq + Hash,
        G: Fn(&S) -> bool,
        F: Fn(&S) -> I,
        I: IntoIterator<Item = S>,
    {
        // Without a step limit the only outcomes are found or exhausted.
        build(FnProblem::new(goal_test, successors), initial)
            .run()
            .unwrap_or_default()
    }
}

pub mod depth_first {
    use std::default::Default;
    use std::fmt::Debug;
    use std::hash::Hash;

    use crate::algorithm::cache::Explored;
    use crate::algorithm::{SearchAlgorithm, SearchQueue};
    use crate::node::Node;
    use crate::path::Path;
    use crate::traits::{FnProblem, SearchProblem, Uniform};

    /// Last in, first out: the newest node is expanded next.
    #[derive(Debug)]
    pub struct DepthQueue<S> {
        queue: Vec<S>,
    }

    impl<S> Default for DepthQueue<S> {
        fn default() -> Self {
            DepthQueue { queue: Vec::new() }
        }
    }

    impl<S> SearchQueue for DepthQueue<S> {
        type Candidate = S;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.queue.push(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    pub type DepthFirstSearcher<P> = SearchAlgorithm<
        Uniform<P>,
        DepthQueue<Node<<P as SearchProblem>::State, usize>>,
        Explored<<P as SearchProblem>::State, usize>,
    >;

    pub fn build<P>(problem: P, origin: P::State) -> DepthFirstSearcher<P>
    where
        P: SearchProblem,
    {
        SearchAlgorithm::new(Uniform(problem), origin)
    }

    /// Depth-first search. Children are pushed in the order
    /// `successors` returns them, so the last successor is
    /// explored first.
    ///
    /// Finds some path when one exists, not necessarily the shortest.
    pub fn dfs<S, G, F, I>(initial: S, goal_test: G, successors: F) -> Option<Path<S>>
    where
        S: Debug + Clone + Eq + Hash,
        G: Fn(&S) -> bool,
        F: Fn(&S) -> I,
        I: IntoIterator<Item = S>,
    {
        build(FnProblem::new(goal_test, successors), initial)
            .run()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::SearchError;
    use crate::traits::FnProblem;

    fn diamond(n: &u8) -> Vec<u8> {
        match n {
            0 => vec![1, 2],
            1 => vec![3],
            2 => vec![3],
            _ => vec![],
        }
    }

    #[test_log::test]
    fn bfs_prefers_first_successor() {
        let path = bfs(0u8, |n| *n == 3, diamond).unwrap();
        assert_eq!(&path[..], &[0, 1, 3]);
        assert_eq!(path.cost(), 2);
    }

    #[test_log::test]
    fn dfs_prefers_last_successor() {
        let path = dfs(0u8, |n| *n == 3, diamond).unwrap();
        assert_eq!(&path[..], &[0, 2, 3]);
    }

    #[test_log::test]
    fn start_is_goal() {
        let path = bfs(7u8, |n| *n == 7, diamond).unwrap();
        assert_eq!(&path[..], &[7]);
        assert_eq!(path.distance(), 0);

        let path = dfs(7u8, |n| *n == 7, diamond).unwrap();
        assert_eq!(&path[..], &[7]);
    }

    #[test_log::test]
    fn unreachable() {
        assert_eq!(bfs(0u8, |n| *n == 9, diamond), None);
        assert_eq!(dfs(0u8, |n| *n == 9, diamond), None);
    }

    #[test_log::test]
    fn self_loops_terminate() {
        // Every state lists itself as a successor.
        let cycle = |n: &u8| vec![*n, (n + 1) % 5];
        assert_eq!(bfs(0u8, |n| *n == 10, cycle), None);
        assert_eq!(dfs(0u8, |n| *n == 10, cycle), None);

        let path = bfs(0u8, |n| *n == 4, cycle).unwrap();
        assert_eq!(&path[..], &[0, 1, 2, 3, 4]);
    }

    #[test_log::test]
    fn bfs_shortest_in_cycle() {
        // A ring of ten states, walkable in both directions.
        let ring = |n: &u8| vec![(n + 1) % 10, (n + 9) % 10];
        let path = bfs(0u8, |n| *n == 8, ring).unwrap();
        assert_eq!(&path[..], &[0, 9, 8]);

        let deep = dfs(0u8, |n| *n == 8, ring).unwrap();
        assert!(deep.distance() >= path.distance());
    }

    #[test_log::test]
    fn step_limit() {
        let problem = FnProblem::<u64, _, _>::new(|_: &u64| false, |n: &u64| vec![n + 1]);
        let mut searcher = breadth_first::build(problem, 0);
        searcher.set_limit(100);

        assert_eq!(
            searcher.run().unwrap_err(),
            SearchError::StepLimitExhausted(100)
        );
    }

    #[test_log::test]
    fn limit_not_reached() {
        use crate::algorithm::SearchOptions;

        let problem = FnProblem::<u64, _, _>::new(|n: &u64| *n == 50, |n: &u64| vec![n + 1]);
        let options = SearchOptions {
            limit: Some(100),
            progress: 10,
        };
        let path = depth_first::build(problem, 0)
            .with_options(options)
            .run()
            .unwrap()
            .unwrap();
        assert_eq!(path.distance(), 50);
    }
}
