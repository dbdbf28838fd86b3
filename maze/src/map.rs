//! Trait to define a map suitable for pathfinding
//! on a grid, and the pathfinder which searches it.

use std::fmt;

use searcher::{Algorithm, Path, SearchOptions, SearchProblem, SearchResult};

use crate::location::Location;

/// Defines a map of locations on a grid.
///
/// The storage of the map is left to the implementing
/// structure, this trait simply requires a map to
/// return whether a given location is traversable.
///
/// Maps assume that traversal happens one square at
/// a time, never diagonally.
pub trait Map: Sized + fmt::Debug {
    /// Can a route pass through this location?
    fn is_traversable(&self, location: Location) -> bool;

    /// Traversable locations one step away, in the order
    /// up, right, down, left.
    fn neighbors(&self, location: Location) -> Vec<Location> {
        location
            .adjacent()
            .filter(|&l| self.is_traversable(l))
            .collect()
    }

    /// Build a re-usable pathfinder for this map
    fn pathfinder(&self) -> Pathfinder<'_, Self> {
        Pathfinder::new(self)
    }

    /// Build a path on this map
    fn path(
        &self,
        origin: Location,
        destination: Location,
    ) -> SearchResult<Option<Path<Location>>> {
        self.pathfinder().search(origin, destination)
    }
}

/// Holds the map and target while the search runs.
#[derive(Debug)]
struct Route<'m, M> {
    map: &'m M,
    target: Location,
}

impl<'m, M> SearchProblem for Route<'m, M>
where
    M: Map,
{
    type State = Location;

    fn is_goal(&self, state: &Location) -> bool {
        *state == self.target
    }

    fn successors(&self, state: &Location) -> Vec<Location> {
        self.map.neighbors(*state)
    }
}

/// Implements pathfinding for a map.
#[derive(Debug, Clone)]
pub struct Pathfinder<'m, M> {
    map: &'m M,
    algorithm: Algorithm,
    options: SearchOptions,
}

impl<'m, M> Pathfinder<'m, M>
where
    M: Map,
{
    /// Construct a new pathfinder.
    pub fn new(map: &'m M) -> Self {
        Self {
            map,
            algorithm: Algorithm::default(),
            options: SearchOptions::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Search for a path between the origin and destination given.
    ///
    /// Only the destination must be traversable: the search
    /// may set out from any location.
    pub fn search(
        &self,
        origin: Location,
        destination: Location,
    ) -> SearchResult<Option<Path<Location>>> {
        let route = Route {
            map: self.map,
            target: destination,
        };
        self.algorithm.search(route, origin, self.options.clone())
    }
}
