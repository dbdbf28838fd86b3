#![deny(clippy::all)]

//! Grid mazes, and finding routes through them.

pub mod grid;
pub mod location;
pub mod map;

pub use grid::{Cell, Maze, MazeError};
pub use location::{Direction, Location, ParseLocationError};
pub use map::{Map, Pathfinder};
pub use searcher::Algorithm;

/// Data type used for coordinates
pub type Position = i32;
