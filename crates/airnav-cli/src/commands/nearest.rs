use anyhow::{bail, Result};
use serde::Serialize;

use crate::source::NetworkSource;
use crate::OutputFormat;

#[derive(Debug, Serialize)]
struct NearestReport {
    id: String,
    name: String,
    x: f64,
    y: f64,
}

pub fn nearest(source: &NetworkSource, x: f64, y: f64, format: OutputFormat) -> Result<()> {
    if !x.is_finite() || !y.is_finite() {
        bail!("query coordinate is not a finite number: ({x}, {y})");
    }
    let report = match source {
        NetworkSource::Graph(graph) => match graph.closest(x, y) {
            Some(node) => NearestReport {
                id: node.name.clone(),
                name: node.name.clone(),
                x: node.x,
                y: node.y,
            },
            None => bail!("the graph has no nodes"),
        },
        // For airspaces the x axis is longitude and y is latitude.
        NetworkSource::Airspace(airspace) => match airspace.closest(x, y) {
            Some(point) => NearestReport {
                id: point.number.to_string(),
                name: point.name.clone(),
                x: point.longitude,
                y: point.latitude,
            },
            None => bail!("the airspace has no points"),
        },
    };

    match format {
        OutputFormat::Text => println!(
            "Nearest point to ({x}, {y}): {} ({}) at ({}, {})",
            report.name, report.id, report.x, report.y
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
