use std::path::Path;

use anyhow::{bail, Context, Result};

use airnav_lib::{demo_graph, load_airspace, load_graph, Airspace, CartesianGraph, Error, Network};

/// A loaded network, tagged by store kind so commands can branch on the
/// parts that differ (key types, coordinate axes, airport data).
pub enum NetworkSource {
    Graph(CartesianGraph),
    Airspace(Airspace),
}

impl NetworkSource {
    pub fn load(
        graph: Option<&Path>,
        airspace: Option<&[std::path::PathBuf]>,
        demo: bool,
    ) -> Result<Self> {
        match (graph, airspace, demo) {
            (Some(path), None, false) => {
                let graph = load_graph(path)
                    .with_context(|| format!("loading graph from {}", path.display()))?;
                Ok(NetworkSource::Graph(graph))
            }
            (None, Some([nav, seg, airports]), false) => {
                let airspace =
                    load_airspace(nav, seg, airports).context("loading airspace files")?;
                Ok(NetworkSource::Airspace(airspace))
            }
            (None, None, true) => Ok(NetworkSource::Graph(demo_graph())),
            (None, None, false) => {
                bail!("no network selected: pass --graph, --airspace or --demo")
            }
            _ => bail!("--graph, --airspace and --demo are mutually exclusive"),
        }
    }

    /// Resolve an airspace endpoint given on the command line. Accepts a
    /// fix number directly, otherwise looks the name up.
    pub fn resolve_fix(airspace: &Airspace, key: &str) -> Result<u32, Error> {
        if let Ok(number) = key.parse::<u32>() {
            return Ok(number);
        }
        match airspace.point_number_by_name(key) {
            Some(number) => Ok(number),
            None => Err(Error::UnknownNode {
                name: key.to_string(),
                suggestions: airspace.suggestions(key),
            }),
        }
    }
}
