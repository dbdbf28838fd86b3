//! Path data structures
//!
//! A path is the sequence of states visited from the start
//! of a search to the state which satisfied the goal test.

use std::fmt;
use std::ops::Deref;

/// A non-empty sequence of states, along with the total
/// cost of the moves between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<S, W = usize> {
    steps: Vec<S>,
    cost: W,
}

impl<S, W> Path<S, W>
where
    W: Copy,
{
    pub(crate) fn from_steps(steps: Vec<S>, cost: W) -> Self {
        assert!(!steps.is_empty(), "a path must contain at least one state");
        Path { steps, cost }
    }

    /// Where this path started
    pub fn origin(&self) -> &S {
        &self.steps[0]
    }

    /// Where this path ends
    pub fn destination(&self) -> &S {
        &self.steps[self.steps.len() - 1]
    }

    /// Number of moves made along this path.
    pub fn distance(&self) -> usize {
        self.steps.len() - 1
    }

    /// Total cost of the moves along this path.
    pub fn cost(&self) -> W {
        self.cost
    }

    /// Convert each state along this path, keeping the cost.
    pub fn map<T, F>(self, f: F) -> Path<T, W>
    where
        F: FnMut(S) -> T,
    {
        Path {
            steps: self.steps.into_iter().map(f).collect(),
            cost: self.cost,
        }
    }

    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }
}

impl<S, W> Deref for Path<S, W> {
    type Target = [S];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl<S, W> IntoIterator for Path<S, W> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'p, S, W> IntoIterator for &'p Path<S, W> {
    type Item = &'p S;
    type IntoIter = std::slice::Iter<'p, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<S, W> fmt::Display for Path<S, W>
where
    S: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
