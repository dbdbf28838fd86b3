use anyhow::{anyhow, Error};
use log::info;

use searcher::graph::{total_weight, GraphError, UnweightedGraph, WeightedGraph};
use searcher::Algorithm;

use crate::Options;

const CITIES: [&str; 15] = [
    "Atlanta",
    "Boston",
    "Chicago",
    "Dallas",
    "Detroit",
    "Houston",
    "Los Angeles",
    "Miami",
    "New York",
    "Philadelphia",
    "Phoenix",
    "Riverside",
    "San Francisco",
    "Seattle",
    "Washington",
];

/// Road distances between neighbouring cities, in miles.
const ROADS: [(&str, &str, u32); 26] = [
    ("Seattle", "Chicago", 1737),
    ("Seattle", "San Francisco", 678),
    ("San Francisco", "Riverside", 386),
    ("San Francisco", "Los Angeles", 348),
    ("Los Angeles", "Riverside", 50),
    ("Los Angeles", "Phoenix", 357),
    ("Riverside", "Phoenix", 307),
    ("Riverside", "Chicago", 1704),
    ("Phoenix", "Dallas", 887),
    ("Phoenix", "Houston", 1015),
    ("Dallas", "Chicago", 805),
    ("Dallas", "Atlanta", 721),
    ("Dallas", "Houston", 225),
    ("Houston", "Atlanta", 702),
    ("Houston", "Miami", 968),
    ("Atlanta", "Chicago", 588),
    ("Atlanta", "Washington", 543),
    ("Atlanta", "Miami", 604),
    ("Miami", "Washington", 923),
    ("Chicago", "Detroit", 238),
    ("Detroit", "Boston", 613),
    ("Detroit", "Washington", 396),
    ("Detroit", "New York", 482),
    ("Boston", "New York", 190),
    ("New York", "Philadelphia", 81),
    ("Philadelphia", "Washington", 123),
];

pub fn network() -> Result<UnweightedGraph<&'static str>, GraphError> {
    let mut graph = UnweightedGraph::new(CITIES.to_vec());
    for (from, to, _) in ROADS.iter() {
        graph.add_edge(from, to)?;
    }
    Ok(graph)
}

pub fn roads() -> Result<WeightedGraph<&'static str, u32>, GraphError> {
    let mut graph = WeightedGraph::new(CITIES.to_vec());
    for (from, to, distance) in ROADS.iter() {
        graph.add_edge(from, to, *distance)?;
    }
    Ok(graph)
}

pub(crate) fn main(options: &Options) -> Result<(), Error> {
    let (origin, destination) = ("Boston", "Miami");

    let network = network()?;
    println!("{}", network);

    let route = match options.algorithm {
        Algorithm::DepthFirst => network.dfs(&origin, |c| *c == destination),
        _ => network.bfs(&origin, |c| *c == destination),
    }
    .ok_or_else(|| anyhow!("No route from {} to {}", origin, destination))?;
    info!("Route with {} ({} stops)", options.algorithm, route.distance());
    println!("{}", route);
    println!();

    let roads = roads()?;
    println!("{}", roads);

    let shortest = roads
        .shortest_path(&origin, |c| *c == destination)
        .ok_or_else(|| anyhow!("No road from {} to {}", origin, destination))?;
    println!("{}", shortest);
    println!("Total distance: {} miles", shortest.cost());

    if let Some(index) = roads.graph().index_of(&origin) {
        let local: u32 = total_weight(roads.graph().edges_from(index));
        info!("Roads out of {} total {} miles", origin, local);
    }

    Ok(())
}
