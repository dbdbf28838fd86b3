use anyhow::Error;
use log::info;

use std::fmt;

use searcher::{Algorithm, Path, SearchProblem};

use crate::Options;

/// Missionaries and cannibals on each bank at the start.
const MAX_NUM: u32 = 3;

/// Boat loads in the order they are tried: (missionaries, cannibals).
const LOADS: [(u32, u32); 5] = [(2, 0), (1, 0), (0, 2), (0, 1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    East,
    West,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::East => write!(f, "east"),
            Side::West => write!(f, "west"),
        }
    }
}

/// Who is on the west bank, and where the boat is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crossing {
    missionaries: u32,
    cannibals: u32,
    boat: Side,
}

impl Crossing {
    /// Everyone waiting on the west bank with the boat.
    pub fn start() -> Self {
        Self {
            missionaries: MAX_NUM,
            cannibals: MAX_NUM,
            boat: Side::West,
        }
    }

    pub fn west(&self) -> (u32, u32) {
        (self.missionaries, self.cannibals)
    }

    pub fn east(&self) -> (u32, u32) {
        (MAX_NUM - self.missionaries, MAX_NUM - self.cannibals)
    }

    pub fn boat(&self) -> Side {
        self.boat
    }

    /// Who is on the same bank as the boat.
    fn aboard(&self) -> (u32, u32) {
        match self.boat {
            Side::West => self.west(),
            Side::East => self.east(),
        }
    }

    /// Missionaries are never outnumbered on a bank where any are present.
    pub fn is_legal(&self) -> bool {
        let safe = |(m, c): (u32, u32)| m == 0 || m >= c;
        safe(self.west()) && safe(self.east())
    }

    pub fn is_solved(&self) -> bool {
        self.west() == (0, 0)
    }

    fn ferry(&self, missionaries: u32, cannibals: u32) -> Self {
        let (m, c) = match self.boat {
            Side::West => (self.missionaries - missionaries, self.cannibals - cannibals),
            Side::East => (self.missionaries + missionaries, self.cannibals + cannibals),
        };
        Self {
            missionaries: m,
            cannibals: c,
            boat: self.boat.other(),
        }
    }

    /// Every legal crossing of the boat from this state.
    pub fn successors(&self) -> Vec<Crossing> {
        let (missionaries, cannibals) = self.aboard();
        LOADS
            .iter()
            .filter(|&&(m, c)| m <= missionaries && c <= cannibals)
            .map(|&(m, c)| self.ferry(m, c))
            .filter(Crossing::is_legal)
            .collect()
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (wm, wc) = self.west();
        let (em, ec) = self.east();
        writeln!(
            f,
            "On the west bank there are {} missionaries and {} cannibals.",
            wm, wc
        )?;
        writeln!(
            f,
            "On the east bank there are {} missionaries and {} cannibals.",
            em, ec
        )?;
        write!(f, "The boat is on the {} bank", self.boat)
    }
}

/// The river crossing as a search problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct River;

impl SearchProblem for River {
    type State = Crossing;

    fn is_goal(&self, state: &Crossing) -> bool {
        state.is_solved()
    }

    fn successors(&self, state: &Crossing) -> Vec<Crossing> {
        state.successors()
    }
}

/// Tells the story of a solution, one crossing at a time.
pub struct Narration<'p>(pub &'p Path<Crossing>);

fn moved(before: u32, after: u32) -> u32 {
    if before > after {
        before - after
    } else {
        after - before
    }
}

impl<'p> fmt::Display for Narration<'p> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.0.origin())?;
        for pair in self.0.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            writeln!(f, "***")?;
            writeln!(
                f,
                "{} missionaries and {} cannibals moved from the {} bank to the {} bank.",
                moved(before.missionaries, after.missionaries),
                moved(before.cannibals, after.cannibals),
                before.boat,
                after.boat
            )?;
            writeln!(f, "{}", after)?;
        }
        Ok(())
    }
}

pub fn solve(options: &Options) -> Result<Option<Path<Crossing>>, Error> {
    let path =
        Algorithm::BreadthFirst.search(River, Crossing::start(), options.search_options())?;
    Ok(path)
}

/// The narrated solution, or a note that there is none.
pub fn report(path: Option<&Path<Crossing>>) -> String {
    match path {
        Some(path) => Narration(path).to_string(),
        None => "no solution found\n".to_string(),
    }
}

pub(crate) fn main(options: &Options) -> Result<(), Error> {
    let path = solve(options)?;
    if let Some(path) = &path {
        info!("Solved in {} crossings", path.distance());
    }
    print!("{}", report(path.as_ref()));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn solution() -> Path<Crossing> {
        solve(&Options::default()).unwrap().unwrap()
    }

    #[test]
    fn legality() {
        assert!(Crossing::start().is_legal());
        let outnumbered = Crossing {
            missionaries: 1,
            cannibals: 2,
            boat: Side::East,
        };
        assert!(!outnumbered.is_legal());
        let no_missionaries = Crossing {
            missionaries: 0,
            cannibals: 3,
            boat: Side::East,
        };
        assert!(no_missionaries.is_legal());
    }

    #[test]
    fn first_crossings() {
        let firsts: Vec<(u32, u32)> = Crossing::start()
            .successors()
            .iter()
            .map(Crossing::west)
            .collect();
        assert_eq!(firsts, vec![(3, 1), (3, 2), (2, 2)]);
        assert!(Crossing::start()
            .successors()
            .iter()
            .all(|s| s.boat() == Side::East));
    }

    #[test]
    fn solved() {
        let path = solution();
        assert_eq!(path.origin(), &Crossing::start());
        assert_eq!(path.destination().west(), (0, 0));
        assert_eq!(path.destination().boat(), Side::East);
        assert_eq!(path.distance(), 11);

        assert!(path.iter().all(Crossing::is_legal));
        for pair in path.windows(2) {
            assert!(pair[0].successors().contains(&pair[1]));
        }
    }

    #[test]
    fn narration() {
        let path = solution();
        let story = Narration(&path).to_string();

        assert!(story.starts_with(
            "On the west bank there are 3 missionaries and 3 cannibals.\n\
             On the east bank there are 0 missionaries and 0 cannibals.\n\
             The boat is on the west bank\n"
        ));
        assert_eq!(story.matches("***").count(), 11);
        assert!(story.ends_with(
            "On the west bank there are 0 missionaries and 0 cannibals.\n\
             On the east bank there are 3 missionaries and 3 cannibals.\n\
             The boat is on the east bank\n"
        ));
    }

    #[test]
    fn reports() {
        assert_eq!(report(None), "no solution found\n");

        let path = solution();
        assert_eq!(report(Some(&path)), Narration(&path).to_string());
    }

    #[test]
    fn other_algorithms() {
        let cheapest = Algorithm::AStar
            .search(River, Crossing::start(), Default::default())
            .unwrap()
            .unwrap();
        assert_eq!(cheapest.distance(), 11);

        let any = Algorithm::DepthFirst
            .search(River, Crossing::start(), Default::default())
            .unwrap()
            .unwrap();
        assert!(any.destination().is_solved());
    }
}
