use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Add;

/// Costs accumulated along a path.
///
/// `Default` must produce the zero cost.
pub trait Weight: Debug + Copy + Ord + Default + Add<Output = Self> {}

impl<T> Weight for T where T: Debug + Copy + Ord + Default + Add<Output = T> {}

/// Provides an interface for conducting searches.
///
/// A problem knows which states are accepted as solutions
/// and which states can be reached in one move from any
/// given state.
pub trait SearchProblem {
    type State: Debug + Clone + Eq + Hash;

    /// Is this state an accepted solution?
    fn is_goal(&self, state: &Self::State) -> bool;

    /// The states reachable in one move, in the order they
    /// should be considered.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;
}

/// A search problem whose moves carry a cost.
pub trait WeightedProblem {
    type State: Debug + Clone + Eq + Hash;
    type Weight: Weight;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// The states reachable in one move, each paired with
    /// the cost of the move.
    fn weighted_successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Weight)>;
}

/// Treats every move of a [SearchProblem] as costing one step.
#[derive(Debug, Clone)]
pub struct Uniform<P>(pub P);

impl<P> WeightedProblem for Uniform<P>
where
    P: SearchProblem,
{
    type State = P::State;
    type Weight = usize;

    fn is_goal(&self, state: &Self::State) -> bool {
        self.0.is_goal(state)
    }

    fn weighted_successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Weight)> {
        self.0
            .successors(state)
            .into_iter()
            .map(|s| (s, 1))
            .collect()
    }
}

/// A search problem built from a goal test and a successor function.
pub struct FnProblem<S, G, F> {
    goal_test: G,
    successors: F,
    state: PhantomData<fn(&S)>,
}

impl<S, G, F> FnProblem<S, G, F> {
    pub fn new(goal_test: G, successors: F) -> Self {
        Self {
            goal_test,
            successors,
            state: PhantomData,
        }
    }
}

impl<S, G, F, I> SearchProblem for FnProblem<S, G, F>
where
    S: Debug + Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    type State = S;

    fn is_goal(&self, state: &S) -> bool {
        (self.goal_test)(state)
    }

    fn successors(&self, state: &S) -> Vec<S> {
        (self.successors)(state).into_iter().collect()
    }
}

/// A weighted search problem built from a goal test and a
/// successor function which reports the cost of each move.
pub struct FnWeightedProblem<S, W, G, F> {
    goal_test: G,
    successors: F,
    state: PhantomData<fn(&S) -> W>,
}

impl<S, W, G, F> FnWeightedProblem<S, W, G, F> {
    pub fn new(goal_test: G, successors: F) -> Self {
        Self {
            goal_test,
            successors,
            state: PhantomData,
        }
    }
}

impl<S, W, G, F, I> WeightedProblem for FnWeightedProblem<S, W, G, F>
where
    S: Debug + Clone + Eq + Hash,
    W: Weight,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = (S, W)>,
{
    type State = S;
    type Weight = W;

    fn is_goal(&self, state: &S) -> bool {
        (self.goal_test)(state)
    }

    fn weighted_successors(&self, state: &S) -> Vec<(S, W)> {
        (self.successors)(state).into_iter().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn uniform_weights() {
        let problem =
            FnProblem::<u32, _, _>::new(|n: &u32| *n == 3, |n: &u32| vec![n + 1, n + 2]);
        let weighted = Uniform(problem);

        assert!(weighted.is_goal(&3));
        assert_eq!(weighted.weighted_successors(&0), vec![(1, 1), (2, 1)]);
    }
}
