use anyhow::Result;
use tracing::info;

use airnav_lib::{plan_route, Error, Network, RouteAlgorithm, RouteRequest, RouteSummary};

use crate::source::NetworkSource;
use crate::OutputFormat;

pub fn route(
    source: &NetworkSource,
    from: &str,
    to: &str,
    algorithm: RouteAlgorithm,
    avoid: &[String],
    format: OutputFormat,
) -> Result<()> {
    let summary = match source {
        NetworkSource::Graph(graph) => {
            // A typo in an avoided name must fail loudly, not route through
            // the node it was meant to exclude.
            let avoid = avoid
                .iter()
                .map(|name| {
                    if graph.contains(name) {
                        Ok(name.clone())
                    } else {
                        Err(Error::UnknownNode {
                            name: name.clone(),
                            suggestions: graph.suggestions(name),
                        })
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            let request = RouteRequest::new(from.to_string(), to.to_string())
                .with_algorithm(algorithm)
                .avoiding(avoid);
            let plan = plan_route(graph, &request)?;
            RouteSummary::from_graph_plan(&plan)?
        }
        NetworkSource::Airspace(airspace) => {
            let start = NetworkSource::resolve_fix(airspace, from)?;
            let goal = NetworkSource::resolve_fix(airspace, to)?;
            let avoid = avoid
                .iter()
                .map(|key| NetworkSource::resolve_fix(airspace, key))
                .collect::<Result<Vec<_>, _>>()?;
            let request = RouteRequest::new(start, goal)
                .with_algorithm(algorithm)
                .avoiding(avoid);
            let plan = plan_route(airspace, &request)?;
            RouteSummary::from_airspace_plan(airspace, &plan)?
        }
    };

    info!(hops = summary.hops, cost = summary.cost, "route found");
    match format {
        OutputFormat::Text => print!("{}", summary.render()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}
