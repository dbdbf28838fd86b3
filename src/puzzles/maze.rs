use anyhow::Error;
use log::{info, warn};
use rand::SeedableRng;
use rand_pcg::Pcg64;

use std::fmt;

use maze::{Location, Map, Maze};
use searcher::Path;

use crate::Options;

/// A generated maze, the endpoints picked for it, and the route
/// found between them.
#[derive(Debug, Clone)]
pub struct Solution {
    pub seed: u64,
    pub maze: Maze,
    pub start: Location,
    pub goal: Location,
    pub path: Option<Path<Location>>,
}

/// Generate a maze and solve it with the chosen algorithm.
///
/// The maze, start and goal all come from one generator seeded
/// with `options.seed`, so a seed always reproduces the same puzzle.
/// With `options.corners` the route runs from the top left corner
/// to the bottom right one.
pub fn solve(options: &Options) -> Result<Solution, Error> {
    let mut rng = Pcg64::seed_from_u64(options.seed);
    let mut maze = Maze::generate(options.size, options.size, options.sparseness, &mut rng);
    let (start, goal) = if options.corners {
        let last = options.size.saturating_sub(1);
        (Location::default(), (last, last).into())
    } else {
        (
            maze.random_location(&mut rng),
            maze.random_location(&mut rng),
        )
    };

    info!(
        "Searching from {} to {} with {}",
        start, goal, options.algorithm
    );
    let path = maze
        .pathfinder()
        .with_algorithm(options.algorithm)
        .with_options(options.search_options())
        .search(start, goal)?;

    match &path {
        Some(route) => {
            info!("Found a route of {} steps", route.distance());
            maze.mark_path(route)?;
        }
        None => warn!("No route from {} to {}", start, goal),
    }
    maze.mark_start(start)?;
    maze.mark_goal(goal)?;

    Ok(Solution {
        seed: options.seed,
        maze,
        start,
        goal,
        path,
    })
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "seed = {}", self.seed)?;
        writeln!(f, "{}", self.maze)
    }
}

pub(crate) fn main(options: &Options) -> Result<(), Error> {
    let solution = solve(options)?;
    print!("{}", solution);
    Ok(())
}
