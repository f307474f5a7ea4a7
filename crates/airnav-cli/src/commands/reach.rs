use anyhow::Result;
use serde::Serialize;

use airnav_lib::reachable_points;

use crate::source::NetworkSource;
use crate::OutputFormat;

#[derive(Debug, Serialize)]
struct ReachReport {
    from: String,
    count: usize,
    points: Vec<String>,
}

pub fn reach(source: &NetworkSource, from: &str, format: OutputFormat) -> Result<()> {
    let (label, points) = match source {
        NetworkSource::Graph(graph) => {
            let reached = reachable_points(graph, &from.to_string())?;
            (from.to_string(), reached)
        }
        NetworkSource::Airspace(airspace) => {
            let start = NetworkSource::resolve_fix(airspace, from)?;
            let reached = reachable_points(airspace, &start)?;
            let named = reached
                .into_iter()
                .map(|number| match airspace.point(number) {
                    Some(point) => format!("{} ({})", point.name, number),
                    None => number.to_string(),
                })
                .collect();
            (start.to_string(), named)
        }
    };

    let report = ReachReport {
        from: label,
        count: points.len(),
        points,
    };

    match format {
        OutputFormat::Text => {
            println!("{} points reachable from {}:", report.count, report.from);
            for point in &report.points {
                println!("  {point}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
