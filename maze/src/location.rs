//! Locations on a grid.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Position;

/// A movement direction on the grid.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

impl Direction {
    /// Enumerates all directions clockwise, starting from up.
    ///
    /// Successor states are generated in this order.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A cell position in a maze, counted from the top left corner.
///
/// Locations are ordered by row, then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Location {
    pub row: Position,
    pub col: Position,
}

impl Location {
    pub fn new(row: Position, col: Position) -> Self {
        Self { row, col }
    }

    /// Step in a given direction.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.row - 1, self.col),
            Direction::Right => Self::new(self.row, self.col + 1),
            Direction::Down => Self::new(self.row + 1, self.col),
            Direction::Left => Self::new(self.row, self.col - 1),
        }
    }

    /// Iterate over all adjacent locations, whether or not
    /// they are inside any particular maze.
    pub fn adjacent(self) -> impl Iterator<Item = Self> {
        Direction::all().map(move |d| self.step(d))
    }

    /// Check if a location is adjacent.
    pub fn is_adjacent(self, other: Location) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Manhattan distance between two locations is the distance
    /// along each coordinate
    pub fn manhattan_distance(self, other: Location) -> Position {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{},{}}}", self.row, self.col)
    }
}

impl From<(Position, Position)> for Location {
    fn from(coordinates: (Position, Position)) -> Self {
        Self::new(coordinates.0, coordinates.1)
    }
}

impl From<(usize, usize)> for Location {
    fn from(coordinates: (usize, usize)) -> Self {
        Self::new(coordinates.0 as Position, coordinates.1 as Position)
    }
}

/// Error when parsing a location from string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseLocationError {
    #[error("Invalid location: {}", _0)]
    InvalidLiteral(String),

    #[error("Invalid number literal")]
    InvalidNumber,
}

impl From<::std::num::ParseIntError> for ParseLocationError {
    fn from(_: ::std::num::ParseIntError) -> Self {
        ParseLocationError::InvalidNumber
    }
}

impl FromStr for Location {
    type Err = ParseLocationError;

    /// Parses `row,col`, optionally wrapped in braces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*\{?\s*(?P<row>-?\d+)\s*,\s*(?P<col>-?\d+)\s*\}?\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParseLocationError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["row"].parse()?, cap["col"].parse()?))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn adjacent_order() {
        let here = Location::new(2, 2);
        let around: Vec<Location> = here.adjacent().collect();
        let expected: Vec<Location> =
            vec![(1, 2).into(), (2, 3).into(), (3, 2).into(), (2, 1).into()];
        assert_eq!(around, expected);
        assert!(around.iter().all(|l| l.is_adjacent(here)));
    }

    #[test]
    fn distance() {
        let a = Location::new(4, 4);
        assert_eq!(a.manhattan_distance(Location::default()), 8);
        assert_eq!(a.step(Direction::Up).step(Direction::Up.reverse()), a);
    }

    #[test]
    fn ordering() {
        let mut locations: Vec<Location> = vec![(1, 0).into(), (0, 5).into(), (0, 1).into()];
        locations.sort();
        let expected: Vec<Location> = vec![(0, 1).into(), (0, 5).into(), (1, 0).into()];
        assert_eq!(locations, expected);
    }

    #[test]
    fn parse() {
        assert_eq!("3,4".parse(), Ok(Location::new(3, 4)));
        assert_eq!("{ 0, 12 }".parse(), Ok(Location::new(0, 12)));
        assert_eq!(Location::new(7, 1).to_string(), "{7,1}");
        assert_eq!(
            "3;4".parse::<Location>(),
            Err(ParseLocationError::InvalidLiteral("3;4".to_string()))
        );
        assert_eq!(
            "99999999999,1".parse::<Location>(),
            Err(ParseLocationError::InvalidNumber)
        );
    }
}
