use std::path::Path;

use anyhow::Result;
use tracing::info;

use airnav_lib::{kml, plan_route, RouteRequest};

use crate::source::NetworkSource;

pub fn export_kml(
    source: &NetworkSource,
    output: &Path,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    let document = match (source, from, to) {
        (NetworkSource::Graph(graph), Some(from), Some(to)) => {
            let request = RouteRequest::new(from.to_string(), to.to_string());
            let plan = plan_route(graph, &request)?;
            kml::graph_route_document(graph, &plan)
        }
        (NetworkSource::Graph(graph), _, _) => kml::graph_document(graph),
        (NetworkSource::Airspace(airspace), Some(from), Some(to)) => {
            let start = NetworkSource::resolve_fix(airspace, from)?;
            let goal = NetworkSource::resolve_fix(airspace, to)?;
            let request = RouteRequest::new(start, goal);
            let plan = plan_route(airspace, &request)?;
            kml::airspace_route_document(airspace, &plan)
        }
        (NetworkSource::Airspace(airspace), _, _) => kml::airspace_document(airspace),
    };

    let written = kml::write_document(output, &document)?;
    info!(path = %written.display(), "wrote KML document");
    println!("Wrote {}", written.display());
    Ok(())
}
