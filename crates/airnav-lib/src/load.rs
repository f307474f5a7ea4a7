//! Flat-text loaders and serializers.
//!
//! Malformed lines are skipped with a `tracing` diagnostic; lines that would
//! violate a store invariant (duplicate keys, unknown endpoints) are skipped
//! the same way. A loaded store therefore always honors the structural
//! invariants, whatever the input file looked like.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::airspace::{Airspace, NavAirport, NavPoint};
use crate::error::Result;
use crate::graph::{CartesianGraph, Node};

/// The canonical 12-node demonstration network, in the graph file format.
/// Segment costs are left implicit so they derive from the coordinates.
const DEMO_GRAPH: &str = "\
# Demonstration network
[NODES]
A, 1, 20
B, 8, 17
C, 15, 20
D, 18, 15
E, 2, 4
F, 6, 5
G, 12, 12
H, 10, 3
I, 19, 1
J, 13, 5
K, 3, 15
L, 4, 10

[SEGMENTS]
AB, A, B
AE, A, E
AK, A, K
BA, B, A
BC, B, C
BF, B, F
BK, B, K
BG, B, G
CD, C, D
CG, C, G
DG, D, G
DH, D, H
DI, D, I
EF, E, F
FL, F, L
GB, G, B
GF, G, F
GH, G, H
ID, I, D
IJ, I, J
JI, J, I
KA, K, A
KL, K, L
LK, L, K
LF, L, F
";

/// Build the built-in demonstration graph.
pub fn demo_graph() -> CartesianGraph {
    graph_from_str(DEMO_GRAPH)
}

/// Parse a graph from the `[NODES]`/`[SEGMENTS]` text format. Fields may be
/// separated by commas or whitespace.
pub fn graph_from_str(text: &str) -> CartesianGraph {
    #[derive(PartialEq)]
    enum Section {
        None,
        Nodes,
        Segments,
    }

    let mut graph = CartesianGraph::new();
    let mut section = Section::None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line {
            "[NODES]" => {
                section = Section::Nodes;
                continue;
            }
            "[SEGMENTS]" => {
                section = Section::Segments;
                continue;
            }
            _ => {}
        }

        let fields = split_fields(line);
        match section {
            Section::Nodes => {
                let parsed = match fields.as_slice() {
                    [name, x, y, ..] => x
                        .parse::<f64>()
                        .and_then(|x| y.parse::<f64>().map(|y| Node::new(*name, x, y)))
                        .ok(),
                    _ => None,
                };
                match parsed {
                    Some(node) => {
                        if let Err(error) = graph.add_node(node) {
                            warn!(line, %error, "skipping node line");
                        }
                    }
                    None => warn!(line, "skipping malformed node line"),
                }
            }
            Section::Segments => {
                let (name, origin, destination, cost) = match fields.as_slice() {
                    [name, origin, destination] => (*name, *origin, *destination, None),
                    [name, origin, destination, cost, ..] => {
                        match cost.parse::<f64>() {
                            Ok(cost) => (*name, *origin, *destination, Some(cost)),
                            Err(_) => {
                                warn!(line, "skipping malformed segment line");
                                continue;
                            }
                        }
                    }
                    _ => {
                        warn!(line, "skipping malformed segment line");
                        continue;
                    }
                };
                if let Err(error) = graph.add_segment(name, origin, destination, cost) {
                    warn!(line, %error, "skipping segment line");
                }
            }
            Section::None => warn!(line, "line outside of any section"),
        }
    }

    graph
}

/// Load a graph from a file in the `[NODES]`/`[SEGMENTS]` format.
pub fn load_graph(path: &Path) -> Result<CartesianGraph> {
    let text = fs::read_to_string(path)?;
    let graph = graph_from_str(&text);
    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        segments = graph.segments().len(),
        "loaded graph"
    );
    Ok(graph)
}

/// Serialize a graph to the same text format the loader reads. Costs are
/// written explicitly so a round trip preserves them exactly.
pub fn graph_to_string(graph: &CartesianGraph) -> String {
    let mut out = String::from("# Graph file format\n[NODES]\n");
    for node in graph.nodes() {
        out.push_str(&format!("{}, {}, {}\n", node.name, node.x, node.y));
    }
    out.push_str("\n[SEGMENTS]\n");
    for segment in graph.segments() {
        out.push_str(&format!(
            "{}, {}, {}, {}\n",
            segment.name, segment.origin, segment.destination, segment.cost
        ));
    }
    out
}

/// Write a graph to a file in the `[NODES]`/`[SEGMENTS]` format.
pub fn save_graph(graph: &CartesianGraph, path: &Path) -> Result<()> {
    fs::write(path, graph_to_string(graph))?;
    Ok(())
}

/// Parse an airspace from the three flat-file section texts: navigation
/// fixes (`number name lat lon`), airway legs (`origin destination
/// distance`), and grouped airports (name line followed by `SID`/`STAR`
/// lines).
pub fn airspace_from_strs(nav: &str, seg: &str, airports: &str) -> Airspace {
    let mut airspace = Airspace::new();

    for line in content_lines(nav) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let parsed = match fields.as_slice() {
            [number, name, lat, lon, ..] => {
                match (
                    number.parse::<u32>(),
                    lat.parse::<f64>(),
                    lon.parse::<f64>(),
                ) {
                    (Ok(number), Ok(latitude), Ok(longitude)) => Some(NavPoint {
                        number,
                        name: (*name).to_string(),
                        latitude,
                        longitude,
                    }),
                    _ => None,
                }
            }
            _ => None,
        };
        match parsed {
            Some(point) => {
                if let Err(error) = airspace.add_point(point) {
                    warn!(line, %error, "skipping navigation point line");
                }
            }
            None => warn!(line, "skipping malformed navigation point line"),
        }
    }

    for line in content_lines(seg) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let parsed = match fields.as_slice() {
            [origin, destination, distance, ..] => {
                match (
                    origin.parse::<u32>(),
                    destination.parse::<u32>(),
                    distance.parse::<f64>(),
                ) {
                    (Ok(origin), Ok(destination), Ok(distance)) => {
                        Some((origin, destination, distance))
                    }
                    _ => None,
                }
            }
            _ => None,
        };
        match parsed {
            Some((origin, destination, distance)) => {
                if let Err(error) = airspace.add_segment(origin, destination, distance) {
                    warn!(line, %error, "skipping airway segment line");
                }
            }
            None => warn!(line, "skipping malformed airway segment line"),
        }
    }

    let mut current: Option<NavAirport> = None;
    for line in content_lines(airports) {
        if let Some(ids) = line.strip_prefix("SID") {
            match current.as_mut() {
                Some(airport) => airport.sids = parse_fix_numbers(ids, line),
                None => warn!(line, "SID line before any airport name"),
            }
        } else if let Some(ids) = line.strip_prefix("STAR") {
            match current.as_mut() {
                Some(airport) => airport.stars = parse_fix_numbers(ids, line),
                None => warn!(line, "STAR line before any airport name"),
            }
        } else {
            if let Some(airport) = current.take() {
                airspace.add_airport(airport);
            }
            current = Some(NavAirport {
                name: line.to_string(),
                sids: Vec::new(),
                stars: Vec::new(),
            });
        }
    }
    if let Some(airport) = current.take() {
        airspace.add_airport(airport);
    }

    airspace
}

/// Load an airspace from its three flat files.
pub fn load_airspace(nav: &Path, seg: &Path, airports: &Path) -> Result<Airspace> {
    let nav_text = fs::read_to_string(nav)?;
    let seg_text = fs::read_to_string(seg)?;
    let airports_text = fs::read_to_string(airports)?;
    let airspace = airspace_from_strs(&nav_text, &seg_text, &airports_text);
    debug!(
        points = airspace.point_count(),
        segments = airspace.segments().len(),
        airports = airspace.airports().len(),
        "loaded airspace"
    );
    Ok(airspace)
}

fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

fn split_fields(line: &str) -> Vec<&str> {
    if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    }
}

fn parse_fix_numbers(ids: &str, line: &str) -> Vec<u32> {
    ids.split_whitespace()
        .filter_map(|token| match token.parse::<u32>() {
            Ok(number) => Some(number),
            Err(_) => {
                warn!(line, token, "skipping unparsable fix number");
                None
            }
        })
        .collect()
}
