//! Rectangular mazes of open and blocked cells.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use itertools::iproduct;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use thiserror::Error;

use crate::location::Location;
use crate::map::Map;

/// Error returned for invalid maze operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("{0} is outside the {1}x{2} maze")]
    OutOfBounds(Location, usize, usize),

    #[error("Unexpected maze character: {0:?}")]
    UnknownCell(char),

    #[error("Row {0} has {1} cells, expected {2}")]
    RaggedRow(usize, usize, usize),

    #[error("A maze needs at least one cell")]
    Empty,
}

type Result<T> = std::result::Result<T, MazeError>;

/// The contents of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Blocked,
    Start,
    Goal,
    Path,
}

impl Cell {
    /// Can a route pass through this cell?
    pub fn is_open(self) -> bool {
        self != Cell::Blocked
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> char {
        match cell {
            Cell::Empty => ' ',
            Cell::Blocked => '#',
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Path => '.',
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = MazeError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            ' ' => Ok(Cell::Empty),
            '#' => Ok(Cell::Blocked),
            'S' => Ok(Cell::Start),
            'G' => Ok(Cell::Goal),
            '.' => Ok(Cell::Path),
            _ => Err(MazeError::UnknownCell(c)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// A grid of cells, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Vec<Cell>>,
}

impl Maze {
    /// A maze with no blocked cells.
    pub fn open(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "a maze needs at least one cell");
        Self {
            cells: vec![vec![Cell::Empty; cols]; rows],
        }
    }

    /// A maze where each cell is blocked with probability `sparseness`.
    pub fn generate<R>(rows: usize, cols: usize, sparseness: f64, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut maze = Self::open(rows, cols);
        for cell in maze.cells.iter_mut().flatten() {
            if rng.gen::<f64>() < sparseness {
                *cell = Cell::Blocked;
            }
        }
        maze
    }

    /// Generate a maze which is reproducible from its seed.
    pub fn random(rows: usize, cols: usize, sparseness: f64, seed: u64) -> Self {
        debug!(
            "Generating a {}x{} maze with sparseness {} from seed {}",
            rows, cols, sparseness, seed
        );
        Self::generate(rows, cols, sparseness, &mut Pcg64::seed_from_u64(seed))
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Pick any location in the maze, blocked or not.
    pub fn random_location<R>(&self, rng: &mut R) -> Location
    where
        R: Rng + ?Sized,
    {
        (rng.gen_range(0..self.rows()), rng.gen_range(0..self.cols())).into()
    }

    /// Iterate over every location in reading order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        iproduct!(0..self.rows(), 0..self.cols()).map(Location::from)
    }

    pub fn contains(&self, location: Location) -> bool {
        location.row >= 0
            && location.col >= 0
            && (location.row as usize) < self.rows()
            && (location.col as usize) < self.cols()
    }

    pub fn get(&self, location: Location) -> Option<Cell> {
        if self.contains(location) {
            Some(self.cells[location.row as usize][location.col as usize])
        } else {
            None
        }
    }

    /// Is there a blocked cell at this location?
    ///
    /// Locations outside the maze are not cells, so are not blocked.
    pub fn is_blocked(&self, location: Location) -> bool {
        self.get(location) == Some(Cell::Blocked)
    }

    pub fn set(&mut self, location: Location, cell: Cell) -> Result<()> {
        if !self.contains(location) {
            return Err(MazeError::OutOfBounds(location, self.rows(), self.cols()));
        }
        self.cells[location.row as usize][location.col as usize] = cell;
        Ok(())
    }

    pub fn block(&mut self, location: Location) -> Result<()> {
        self.set(location, Cell::Blocked)
    }

    /// Open neighbouring locations, in the order up, right, down, left.
    pub fn successors(&self, location: Location) -> Vec<Location> {
        self.neighbors(location)
    }

    /// Mark every location along a route as part of the path.
    pub fn mark_path<'p, I>(&mut self, path: I) -> Result<()>
    where
        I: IntoIterator<Item = &'p Location>,
    {
        for location in path {
            self.set(*location, Cell::Path)?;
        }
        Ok(())
    }

    pub fn mark_start(&mut self, location: Location) -> Result<()> {
        self.set(location, Cell::Start)
    }

    pub fn mark_goal(&mut self, location: Location) -> Result<()> {
        self.set(location, Cell::Goal)
    }

    /// Number of cells of a given kind.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }
}

impl Map for Maze {
    fn is_traversable(&self, location: Location) -> bool {
        self.get(location).map(Cell::is_open).unwrap_or(false)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parses the same layout that [Maze] displays.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells: Vec<Vec<Cell>> = Vec::new();
        for line in s.lines() {
            let row = line
                .chars()
                .map(Cell::try_from)
                .collect::<Result<Vec<Cell>>>()?;
            cells.push(row);
        }

        let cols = cells.first().map(|r| r.len()).unwrap_or(0);
        if cols == 0 {
            return Err(MazeError::Empty);
        }

        if let Some((index, row)) = cells.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MazeError::RaggedRow(index, row.len(), cols));
        }

        Ok(Maze { cells })
    }
}

impl From<Maze> for Vec<Vec<Cell>> {
    fn from(maze: Maze) -> Self {
        maze.cells
    }
}

/// Builds a `rows` by `cols` maze where every cell is blocked
/// except those listed.
#[cfg(test)]
pub(crate) fn walled(rows: usize, cols: usize, open: &[Location]) -> Maze {
    let mut maze = Maze::open(rows, cols);
    for location in maze.locations().collect::<Vec<_>>() {
        if !open.contains(&location) {
            maze.cells[location.row as usize][location.col as usize] = Cell::Blocked;
        }
    }
    maze
}

#[cfg(test)]
mod test {
    use super::*;

    const SMALL: &str = "S #\n# .\n  G\n";

    #[test]
    fn parse_and_render() {
        let maze: Maze = SMALL.parse().unwrap();
        assert_eq!(maze.rows(), 3);
        assert_eq!(maze.cols(), 3);
        assert_eq!(maze.get((0, 0).into()), Some(Cell::Start));
        assert!(maze.is_blocked((1, 0).into()));
        assert!(!maze.is_blocked((5, 5).into()));
        assert_eq!(maze.to_string(), SMALL);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("S x".parse::<Maze>(), Err(MazeError::UnknownCell('x')));
        assert_eq!("S \n#".parse::<Maze>(), Err(MazeError::RaggedRow(1, 1, 2)));
        assert_eq!("".parse::<Maze>(), Err(MazeError::Empty));
    }

    #[test]
    fn successors_skip_walls_and_edges() {
        let maze: Maze = SMALL.parse().unwrap();
        let expected: Vec<Location> = vec![(0, 1).into()];
        assert_eq!(maze.successors((0, 0).into()), expected);

        let expected: Vec<Location> = vec![(2, 2).into(), (1, 1).into()];
        assert_eq!(maze.successors((1, 2).into()), expected);
    }

    #[test]
    fn seeded_generation() {
        let a = Maze::random(10, 12, 0.2, 42);
        let b = Maze::random(10, 12, 0.2, 42);
        assert_eq!(a, b);
        assert_eq!(a.cols(), 12);
        assert_eq!(a.locations().count(), 120);

        assert_eq!(Maze::random(4, 4, 0.0, 1).count(Cell::Blocked), 0);
        assert_eq!(Maze::random(4, 4, 1.0, 1).count(Cell::Blocked), 16);
    }

    #[test]
    fn random_location_inside() {
        let maze = Maze::open(3, 7);
        let mut rng = Pcg64::seed_from_u64(9);
        for _ in 0..100 {
            assert!(maze.contains(maze.random_location(&mut rng)));
        }
    }

    #[test]
    fn marks() {
        let mut maze = Maze::open(2, 3);
        let path: Vec<Location> = vec![(0, 0).into(), (0, 1).into(), (1, 1).into()];
        maze.mark_path(&path).unwrap();
        maze.mark_start((0, 0).into()).unwrap();
        maze.mark_goal((1, 1).into()).unwrap();
        assert_eq!(maze.to_string(), "S. \n G \n");

        assert_eq!(
            maze.mark_goal((2, 0).into()),
            Err(MazeError::OutOfBounds((2, 0).into(), 2, 3))
        );
    }

    #[test]
    fn walls() {
        let maze = walled(3, 3, &[(0, 0).into(), (2, 2).into()]);
        assert_eq!(maze.count(Cell::Blocked), 7);
        assert!(maze.is_traversable((2, 2).into()));
    }
}
