//! KML export for graph stores and planned routes.
//!
//! A pure reader of the stores' public accessors: it builds a complete KML
//! document string that Google Earth can open, and never mutates the store.
//! Cartesian graphs are exported with `x` as longitude and `y` as latitude.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use crate::airspace::Airspace;
use crate::error::Result;
use crate::graph::CartesianGraph;
use crate::routing::RoutePlan;

const POINT_ICON: &str = "http://maps.google.com/mapfiles/kml/shapes/placemark_circle.png";
const AIRPORT_ICON: &str = "http://maps.google.com/mapfiles/kml/shapes/airports.png";

const STYLES: [(&str, &str); 5] = [
    ("normalPoint", "ff00aaff"),
    ("highlightPoint", "ff0000ff"),
    ("airport", "ffaa00ff"),
    ("normalLine", "7f00ff00"),
    ("highlightLine", "7fff0000"),
];

/// Export every node and segment of a graph.
pub fn graph_document(graph: &CartesianGraph) -> String {
    let mut body = String::new();
    for node in graph.nodes() {
        push_point(
            &mut body,
            &node.name,
            node.x,
            node.y,
            &format!("Node {} at ({}, {})", node.name, node.x, node.y),
            "normalPoint",
        );
    }
    for segment in graph.segments() {
        let (Some(origin), Some(destination)) =
            (graph.node(&segment.origin), graph.node(&segment.destination))
        else {
            continue;
        };
        push_line(
            &mut body,
            &format!("{}-{}", origin.name, destination.name),
            &[(origin.x, origin.y), (destination.x, destination.y)],
            &format!("Segment with cost {:.2}", segment.cost),
            "normalLine",
        );
    }
    document(&body)
}

/// Export an airspace: fixes, airway legs, and airport folders with their
/// SID/STAR sub-folders. Dangling references are skipped.
pub fn airspace_document(airspace: &Airspace) -> String {
    let mut body = String::new();
    for point in airspace.points() {
        push_point(
            &mut body,
            &format!("{} ({})", point.name, point.number),
            point.longitude,
            point.latitude,
            &format!(
                "NavPoint {} at ({:.6}, {:.6})",
                point.name, point.latitude, point.longitude
            ),
            "normalPoint",
        );
    }
    for segment in airspace.segments() {
        let (Some(origin), Some(destination)) = (
            airspace.point(segment.origin),
            airspace.point(segment.destination),
        ) else {
            continue;
        };
        push_line(
            &mut body,
            &format!("{}-{}", origin.name, destination.name),
            &[
                (origin.longitude, origin.latitude),
                (destination.longitude, destination.latitude),
            ],
            &format!("Airway segment: {:.2} km", segment.distance),
            "normalLine",
        );
    }
    for airport in airspace.airports() {
        let sids = airspace.sid_fixes(airport);
        let stars = airspace.star_fixes(airport);
        // The airport itself carries no coordinates; anchor it at its first
        // resolvable departure fix, as the interchange format expects.
        let Some(anchor) = sids.first() else {
            continue;
        };

        let _ = writeln!(body, "<Folder>");
        let _ = writeln!(body, "<name>Airport {}</name>", escape(&airport.name));
        push_point(
            &mut body,
            &format!("Airport {}", airport.name),
            anchor.longitude,
            anchor.latitude,
            &format!(
                "Airport {} with {} SIDs and {} STARs",
                airport.name,
                airport.sids.len(),
                airport.stars.len()
            ),
            "airport",
        );
        let _ = writeln!(body, "<Folder>");
        let _ = writeln!(body, "<name>SIDs for {}</name>", escape(&airport.name));
        for fix in &sids {
            push_point(
                &mut body,
                &format!("SID {}", fix.name),
                fix.longitude,
                fix.latitude,
                &format!("Departure route for {}", airport.name),
                "normalPoint",
            );
        }
        let _ = writeln!(body, "</Folder>");
        let _ = writeln!(body, "<Folder>");
        let _ = writeln!(body, "<name>STARs for {}</name>", escape(&airport.name));
        for fix in &stars {
            push_point(
                &mut body,
                &format!("STAR {}", fix.name),
                fix.longitude,
                fix.latitude,
                &format!("Arrival route for {}", airport.name),
                "normalPoint",
            );
        }
        let _ = writeln!(body, "</Folder>");
        let _ = writeln!(body, "</Folder>");
    }
    document(&body)
}

/// Export a planned route over a graph: highlighted placemarks for each step
/// plus a line connecting them in order.
pub fn graph_route_document(graph: &CartesianGraph, plan: &RoutePlan<String>) -> String {
    let steps: Vec<(String, f64, f64)> = plan
        .steps
        .iter()
        .filter_map(|name| graph.node(name))
        .map(|node| (node.name.clone(), node.x, node.y))
        .collect();
    route_body(&steps, plan.cost)
}

/// Export a planned route over an airspace.
pub fn airspace_route_document(airspace: &Airspace, plan: &RoutePlan<u32>) -> String {
    let steps: Vec<(String, f64, f64)> = plan
        .steps
        .iter()
        .filter_map(|number| airspace.point(*number))
        .map(|point| (point.name.clone(), point.longitude, point.latitude))
        .collect();
    route_body(&steps, plan.cost)
}

/// Write a document to disk, forcing the `.kml` extension. Returns the path
/// actually written.
pub fn write_document(path: &Path, document: &str) -> Result<PathBuf> {
    let path = path.with_extension("kml");
    fs::write(&path, document)?;
    Ok(path)
}

fn route_body(steps: &[(String, f64, f64)], cost: f64) -> String {
    let mut body = String::new();
    for (index, (name, lon, lat)) in steps.iter().enumerate() {
        push_point(
            &mut body,
            name,
            *lon,
            *lat,
            &format!("Point {} of path", index + 1),
            "highlightPoint",
        );
    }
    let coordinates: Vec<(f64, f64)> = steps.iter().map(|(_, lon, lat)| (*lon, *lat)).collect();
    if coordinates.len() > 1 {
        push_line(
            &mut body,
            "route",
            &coordinates,
            &format!("Path connecting {} points, total cost {:.2}", steps.len(), cost),
            "highlightLine",
        );
    }
    document(&body)
}

fn document(body: &str) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <kml xmlns=\"http://www.opengis.net/kml/2.2\">\n<Document>\n",
    );
    for (id, color) in STYLES {
        let icon = if id == "airport" { AIRPORT_ICON } else { POINT_ICON };
        if id.ends_with("Line") {
            let _ = writeln!(
                out,
                "<Style id=\"{id}\"><LineStyle><color>{color}</color><width>{}</width></LineStyle></Style>",
                if id == "highlightLine" { 4 } else { 2 }
            );
        } else {
            let _ = writeln!(
                out,
                "<Style id=\"{id}\"><IconStyle><color>{color}</color><scale>{}</scale>\
                 <Icon><href>{icon}</href></Icon></IconStyle></Style>",
                match id {
                    "airport" => 1.5,
                    "highlightPoint" => 1.2,
                    _ => 0.8,
                }
            );
        }
    }
    out.push_str(body);
    out.push_str("</Document>\n</kml>\n");
    out
}

fn push_point(body: &mut String, name: &str, lon: f64, lat: f64, description: &str, style: &str) {
    let _ = writeln!(
        body,
        "<Placemark><name>{}</name><description>{}</description>\
         <styleUrl>#{style}</styleUrl><Point><coordinates>{lon},{lat},0</coordinates></Point></Placemark>",
        escape(name),
        escape(description)
    );
}

fn push_line(body: &mut String, name: &str, points: &[(f64, f64)], description: &str, style: &str) {
    let coordinates = points
        .iter()
        .map(|(lon, lat)| format!("{lon},{lat},0"))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(
        body,
        "<Placemark><name>{}</name><description>{}</description>\
         <styleUrl>#{style}</styleUrl><LineString><tessellate>1</tessellate>\
         <coordinates>{coordinates}</coordinates></LineString></Placemark>",
        escape(name),
        escape(description)
    );
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
