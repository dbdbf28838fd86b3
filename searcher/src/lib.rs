//! Generalized search algorithms over abstract state spaces.
//!
//! A search starts from an initial state and repeatedly expands
//! states from a frontier, using a successor function to discover
//! new states and a goal test to decide when to stop. The frontier
//! decides the algorithm: a FIFO queue gives breadth-first search,
//! a stack gives depth-first search, and a priority queue on the
//! accumulated cost gives [astar].
//!
//! The simplest entry points take closures:
//!
//! ```
//! let path = searcher::bfs(0u32, |n| *n == 6, |n| vec![n + 1, n * 2]).unwrap();
//! assert_eq!(&path[..], &[0, 1, 2, 3, 6]);
//! ```
//!
//! For more control, implement [SearchProblem] or [WeightedProblem]
//! and use the `build` function of an algorithm module.

pub mod algorithm;
mod errors;
pub mod graph;
pub mod node;
mod path;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use path::Path;
pub use traits::{FnProblem, FnWeightedProblem, SearchProblem, Uniform, Weight, WeightedProblem};

pub use algorithm::astar;
pub use algorithm::astar::{astar, astar_weighted};
pub use algorithm::basic::{bfs, breadth_first, depth_first, dfs};
pub use algorithm::{Algorithm, SearchOptions};
