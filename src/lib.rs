#![deny(clippy::all)]

use clap::{value_t, App, Arg, ArgMatches};

use lazy_static::lazy_static;
use log::info;
use thiserror::Error;

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use searcher::{Algorithm, SearchOptions};

pub mod puzzles;

type Error = anyhow::Error;
type Actor = Box<dyn (Fn(&Options) -> Result<(), Error>) + Send + Sync + 'static>;

macro_rules! puzzle {
    ($name:ident) => {
        (
            stringify!($name),
            Box::new(puzzles::$name::main) as Actor,
        )
    };
}

lazy_static! {
    static ref SOLVERS: HashMap<&'static str, Actor> = {
        let mut s: HashMap<&'static str, Actor> = HashMap::new();
        let puzzles: Vec<(&'static str, Actor)> = vec![
            puzzle!(cities),
            puzzle!(maze),
            puzzle!(missionaries),
        ];

        for (name, func) in puzzles.into_iter() {
            s.insert(name, func);
        }

        s
    };
}

/// Settings shared by every puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Search algorithm used where the puzzle offers a choice.
    pub algorithm: Algorithm,

    /// Number of rows and columns in a generated maze.
    pub size: usize,

    /// Chance that any generated maze cell is blocked.
    pub sparseness: f64,

    /// Seed for anything generated at random.
    pub seed: u64,

    /// Give up searching after this many expanded states.
    pub limit: Option<usize>,

    /// Solve mazes from the top left corner to the bottom right
    /// instead of between random cells.
    pub corners: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            size: 10,
            sparseness: 0.2,
            seed: 0,
            limit: None,
            corners: false,
        }
    }
}

impl Options {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            limit: self.limit,
            ..SearchOptions::default()
        }
    }
}

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("Classic Search")
        .version("1.0")
        .about("Solve classic search puzzles")
        .arg(
            Arg::with_name("puzzle")
                .value_name("PUZZLE")
                .required(true)
                .takes_value(true)
                .help("One of: cities, maze, missionaries"),
        )
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .value_name("ALGORITHM")
                .takes_value(true)
                .default_value("astar")
                .help("bfs, dfs or astar"),
        )
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("sparseness")
                .short("p")
                .long("sparseness")
                .value_name("P")
                .takes_value(true)
                .default_value("0.2"),
        )
        .arg(
            Arg::with_name("seed")
                .short("S")
                .long("seed")
                .value_name("SEED")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("STEPS")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("corners")
                .short("c")
                .long("corners")
                .help("Solve mazes from corner to corner"),
        )
}

/// Read the puzzle name and its options from parsed arguments.
pub fn parse_options(matches: &ArgMatches) -> Result<(String, Options), Error> {
    let puzzle = matches.value_of("puzzle").unwrap_or_default().to_string();

    let algorithm = matches
        .value_of("algorithm")
        .unwrap_or("astar")
        .parse::<Algorithm>()
        .map_err(CliError::InvalidAlgorithm)?;

    let size = value_t!(matches, "size", usize)?;
    if size == 0 {
        return Err(CliError::InvalidSize(size).into());
    }

    let sparseness = value_t!(matches, "sparseness", f64)?;
    if !(0.0..=1.0).contains(&sparseness) {
        return Err(CliError::InvalidSparseness(sparseness).into());
    }

    let seed = if matches.is_present("seed") {
        value_t!(matches, "seed", u64)?
    } else {
        SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs()
    };

    let limit = if matches.is_present("limit") {
        Some(value_t!(matches, "limit", usize)?)
    } else {
        None
    };

    Ok((
        puzzle,
        Options {
            algorithm,
            size,
            sparseness,
            seed,
            limit,
            corners: matches.is_present("corners"),
        },
    ))
}

/// Run the puzzle named on the command line.
pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();
    let (puzzle, options) = parse_options(&matches)?;
    info!("Puzzle {} with {:?}", puzzle, options);

    run(&puzzle, &options)
}

/// Run a puzzle by name.
pub fn run(puzzle: &str, options: &Options) -> Result<(), Error> {
    match SOLVERS.get(puzzle) {
        None => Err(CliError::PuzzleNotFound(puzzle.to_string()).into()),
        Some(actor) => actor(options),
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("No puzzle named {0}")]
    PuzzleNotFound(String),

    #[error("{0}")]
    InvalidAlgorithm(String),

    #[error("Maze size must be at least 1, got {0}")]
    InvalidSize(usize),

    #[error("Sparseness must be between 0 and 1, got {0}")]
    InvalidSparseness(f64),
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Result<(String, Options), Error> {
        let matches = app().get_matches_from_safe(args.iter().copied())?;
        parse_options(&matches)
    }

    #[test]
    fn defaults() {
        let (puzzle, options) = parse(&["classic-search", "maze", "--seed", "7"]).unwrap();
        assert_eq!(puzzle, "maze");
        assert_eq!(
            options,
            Options {
                seed: 7,
                ..Options::default()
            }
        );
    }

    #[test]
    fn all_options() {
        let (_, options) = parse(&[
            "classic-search",
            "maze",
            "-a",
            "dfs",
            "-s",
            "20",
            "-p",
            "0.5",
            "-S",
            "3",
            "-l",
            "100",
            "--corners",
        ])
        .unwrap();

        assert_eq!(options.algorithm, Algorithm::DepthFirst);
        assert_eq!(options.size, 20);
        assert_eq!(options.sparseness, 0.5);
        assert_eq!(options.seed, 3);
        assert_eq!(options.search_options().limit, Some(100));
        assert!(options.corners);
    }

    #[test]
    fn invalid_options() {
        assert!(parse(&["classic-search", "maze", "-a", "greedy"]).is_err());
        assert!(parse(&["classic-search", "maze", "-s", "0"]).is_err());
        assert!(parse(&["classic-search", "maze", "-p", "1.5"]).is_err());
        assert!(parse(&["classic-search"]).is_err());
    }

    #[test]
    fn unknown_puzzle() {
        let err = run("hanoi", &Options::default()).unwrap_err();
        assert_eq!(err.to_string(), "No puzzle named hanoi");
    }

    #[test]
    fn registered() {
        for name in &["cities", "maze", "missionaries"] {
            assert!(SOLVERS.contains_key(name));
        }
    }
}
