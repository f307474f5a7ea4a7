//! airnav library entry points.
//!
//! This crate exposes two isomorphic graph stores (a generic Cartesian
//! graph and a geographic airspace) behind one routing contract, plus
//! breadth-first reachability and shortest-path search (Dijkstra and A*,
//! with optional avoid sets), flat-text loaders/serializers, and KML export.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod airspace;
pub mod error;
pub mod graph;
pub mod kml;
pub mod load;
pub mod network;
pub mod output;
pub mod routing;
pub mod search;

pub use airspace::{Airspace, NavAirport, NavPoint, NavSegment};
pub use error::{Error, Result};
pub use graph::{CartesianGraph, Node, Segment};
pub use load::{demo_graph, load_airspace, load_graph, save_graph};
pub use network::Network;
pub use output::{RouteStep, RouteSummary};
pub use routing::{
    plan_route, reachable_points, RouteAlgorithm, RoutePlan, RoutePlanner, RouteRequest,
};
pub use search::{Route, SearchConstraints};
