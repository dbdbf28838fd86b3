//! Explored sets which prevent states from being expanded again.

use std::collections::{HashMap, HashSet};
use std::default::Default;
use std::hash::Hash;
use std::marker::PhantomData;

/// Defines the behavior required of an explored set.
pub trait Cache: Default {
    type State;
    type Cost;

    /// Should a newly generated node for this state be queued?
    fn admits(&self, state: &Self::State, cost: &Self::Cost) -> bool;

    /// Note that a node for this state was queued at this cost.
    fn record(&mut self, state: &Self::State, cost: &Self::Cost);

    /// Mark this state as explored as it leaves the frontier.
    ///
    /// Returns false when the node should be skipped instead of
    /// expanded.
    fn check(&mut self, state: &Self::State, cost: &Self::Cost) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Remembers every state which has been expanded, so that
/// each state is expanded at most once.
#[derive(Debug)]
pub struct Explored<S, W> {
    cache: HashSet<S>,
    cost: PhantomData<W>,
}

impl<S, W> Default for Explored<S, W>
where
    S: Hash + Eq,
{
    fn default() -> Self {
        Explored {
            cache: HashSet::default(),
            cost: PhantomData,
        }
    }
}

impl<S, W> Cache for Explored<S, W>
where
    S: Hash + Eq + Clone,
{
    type State = S;
    type Cost = W;

    fn admits(&self, state: &S, _cost: &W) -> bool {
        !self.cache.contains(state)
    }

    fn record(&mut self, _state: &S, _cost: &W) {}

    fn check(&mut self, state: &S, _cost: &W) -> bool {
        // Duplicates may be queued before the first copy is expanded.
        self.cache.insert(state.clone())
    }

    fn len(&self) -> usize {
        self.cache.len()
    }
}

/// Stores the cheapest known cost to reach every state
/// which has been queued.
#[derive(Debug)]
pub struct BestCost<S, W> {
    cache: HashMap<S, W>,
}

impl<S, W> Default for BestCost<S, W>
where
    S: Hash + Eq,
{
    fn default() -> Self {
        BestCost {
            cache: HashMap::default(),
        }
    }
}

impl<S, W> BestCost<S, W>
where
    S: Hash + Eq,
{
    /// The cheapest cost recorded for this state.
    pub fn best(&self, state: &S) -> Option<&W> {
        self.cache.get(state)
    }
}

impl<S, W> Cache for BestCost<S, W>
where
    S: Hash + Eq + Clone,
    W: Ord + Copy,
{
    type State = S;
    type Cost = W;

    // (a) States which have never been queued are admitted.
    // (b) States already queued at a lower or equal cost are ignored.
    // (c) States reached more cheaply than before are admitted, and
    //     the cheaper cost replaces the old one.
    fn admits(&self, state: &S, cost: &W) -> bool {
        self.cache.get(state).map(|best| cost < best).unwrap_or(true)
    }

    fn record(&mut self, state: &S, cost: &W) {
        self.cache.insert(state.clone(), *cost);
    }

    fn check(&mut self, state: &S, cost: &W) -> bool {
        self.cache.get(state).map(|best| cost <= best).unwrap_or(true)
    }

    fn len(&self) -> usize {
        self.cache.len()
    }
}
