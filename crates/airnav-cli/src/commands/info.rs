use anyhow::Result;
use serde::Serialize;

use crate::source::NetworkSource;
use crate::OutputFormat;

#[derive(Debug, Serialize)]
struct InfoReport {
    kind: &'static str,
    points: usize,
    segments: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    airports: Option<usize>,
}

pub fn info(source: &NetworkSource, format: OutputFormat) -> Result<()> {
    let report = match source {
        NetworkSource::Graph(graph) => InfoReport {
            kind: "graph",
            points: graph.nodes().count(),
            segments: graph.segments().len(),
            airports: None,
        },
        NetworkSource::Airspace(airspace) => InfoReport {
            kind: "airspace",
            points: airspace.points().count(),
            segments: airspace.segments().len(),
            airports: Some(airspace.airports().len()),
        },
    };

    match format {
        OutputFormat::Text => {
            println!("Network kind: {}", report.kind);
            println!("Points: {}", report.points);
            println!("Segments: {}", report.segments);
            if let Some(airports) = report.airports {
                println!("Airports: {airports}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
