use std::fmt::{self, Debug};

/// A connection between two vertices, identified by their
/// indices within a graph.
pub trait Edge: Debug + Clone + PartialEq {
    /// Index of the vertex this edge leaves.
    fn u(&self) -> usize;

    /// Index of the vertex this edge reaches.
    fn v(&self) -> usize;

    /// The same edge, travelled in the opposite direction.
    fn reversed(&self) -> Self;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnweightedEdge {
    pub u: usize,
    pub v: usize,
}

impl UnweightedEdge {
    pub fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }
}

impl Edge for UnweightedEdge {
    fn u(&self) -> usize {
        self.u
    }

    fn v(&self) -> usize {
        self.v
    }

    fn reversed(&self) -> Self {
        Self {
            u: self.v,
            v: self.u,
        }
    }
}

impl fmt::Display for UnweightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{} <-> {}}}", self.u, self.v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedEdge<W> {
    pub u: usize,
    pub v: usize,
    pub weight: W,
}

impl<W> WeightedEdge<W> {
    pub fn new(u: usize, v: usize, weight: W) -> Self {
        Self { u, v, weight }
    }
}

impl<W> Edge for WeightedEdge<W>
where
    W: Debug + Copy + PartialEq,
{
    fn u(&self) -> usize {
        self.u
    }

    fn v(&self) -> usize {
        self.v
    }

    fn reversed(&self) -> Self {
        Self {
            u: self.v,
            v: self.u,
            weight: self.weight,
        }
    }
}

impl<W> fmt::Display for WeightedEdge<W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{} <-({})-> {}}}", self.u, self.weight, self.v)
    }
}
