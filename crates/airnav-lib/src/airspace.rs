//! Geographic airspace store: navigation fixes, airway legs, and airports.
//!
//! Isomorphic to [`crate::graph::CartesianGraph`] but keyed by fix number,
//! with supplied leg distances (kilometres) instead of coordinate-derived
//! costs. Adjacency is derived by scanning legs by origin number; there is no
//! neighbor cache to keep consistent.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::network::{closest_matches, Network};

/// A navigation fix: uniquely numbered, named, located by latitude/longitude
/// in decimal degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct NavPoint {
    pub number: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A directed airway leg between two fixes, with its published distance.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSegment {
    pub origin: u32,
    pub destination: u32,
    pub distance: f64,
}

/// An airport with its departure (SID) and arrival (STAR) fix numbers.
///
/// Referenced fix numbers are not required to resolve; lookups treat dangling
/// references as absent. Validating them is the loader's job.
#[derive(Debug, Clone, PartialEq)]
pub struct NavAirport {
    pub name: String,
    pub sids: Vec<u32>,
    pub stars: Vec<u32>,
}

/// Store for one airspace: fixes, legs, airports.
#[derive(Debug, Clone, Default)]
pub struct Airspace {
    points: IndexMap<u32, NavPoint>,
    segments: Vec<NavSegment>,
    airports: Vec<NavAirport>,
}

impl Airspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes in insertion order.
    pub fn points(&self) -> impl Iterator<Item = &NavPoint> {
        self.points.values()
    }

    pub fn point(&self, number: u32) -> Option<&NavPoint> {
        self.points.get(&number)
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Resolve a fix by its case-sensitive name.
    pub fn point_number_by_name(&self, name: &str) -> Option<u32> {
        self.points
            .values()
            .find(|p| p.name == name)
            .map(|p| p.number)
    }

    pub fn segments(&self) -> &[NavSegment] {
        &self.segments
    }

    pub fn airports(&self) -> &[NavAirport] {
        &self.airports
    }

    pub fn airport(&self, name: &str) -> Option<&NavAirport> {
        self.airports.iter().find(|a| a.name == name)
    }

    /// Insert a fix. Rejects duplicate numbers and non-finite coordinates.
    pub fn add_point(&mut self, point: NavPoint) -> Result<()> {
        for value in [point.latitude, point.longitude] {
            if !value.is_finite() {
                return Err(Error::InvalidCoordinate { value });
            }
        }
        if self.points.contains_key(&point.number) {
            return Err(Error::DuplicateNode {
                name: point.number.to_string(),
            });
        }
        self.points.insert(point.number, point);
        Ok(())
    }

    /// Insert a directed leg between two existing fixes with its published
    /// distance. Duplicate ordered pairs are rejected; the reverse direction
    /// is a distinct leg, as bidirectional airways carry one each way.
    pub fn add_segment(&mut self, origin: u32, destination: u32, distance: f64) -> Result<()> {
        if !self.points.contains_key(&origin) {
            return Err(self.unknown(origin));
        }
        if !self.points.contains_key(&destination) {
            return Err(self.unknown(destination));
        }
        if self
            .segments
            .iter()
            .any(|s| s.origin == origin && s.destination == destination)
        {
            return Err(Error::DuplicateSegment {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        }
        if distance < 0.0 {
            return Err(Error::NegativeCost { cost: distance });
        }
        self.segments.push(NavSegment {
            origin,
            destination,
            distance,
        });
        Ok(())
    }

    pub fn add_airport(&mut self, airport: NavAirport) {
        self.airports.push(airport);
    }

    /// Remove a fix and every leg touching it in either direction. Airport
    /// SID/STAR lists keep the number; it simply stops resolving.
    pub fn remove_point(&mut self, number: u32) -> Result<()> {
        if self.points.shift_remove(&number).is_none() {
            return Err(self.unknown(number));
        }
        self.segments
            .retain(|s| s.origin != number && s.destination != number);
        Ok(())
    }

    /// Remove the exact directed leg `origin -> destination`.
    pub fn remove_segment(&mut self, origin: u32, destination: u32) -> Result<()> {
        let position = self
            .segments
            .iter()
            .position(|s| s.origin == origin && s.destination == destination)
            .ok_or_else(|| Error::UnknownSegment {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })?;
        self.segments.remove(position);
        Ok(())
    }

    /// SID fixes of an airport, skipping numbers that no longer resolve.
    pub fn sid_fixes(&self, airport: &NavAirport) -> Vec<&NavPoint> {
        airport
            .sids
            .iter()
            .filter_map(|number| self.points.get(number))
            .collect()
    }

    /// STAR fixes of an airport, skipping numbers that no longer resolve.
    pub fn star_fixes(&self, airport: &NavAirport) -> Vec<&NavPoint> {
        airport
            .stars
            .iter()
            .filter_map(|number| self.points.get(number))
            .collect()
    }

    /// Fix minimizing Euclidean distance in (longitude, latitude) degrees.
    /// Ties are broken by insertion order; `None` when the store is empty or
    /// the query coordinate is not finite.
    pub fn closest(&self, longitude: f64, latitude: f64) -> Option<&NavPoint> {
        if !longitude.is_finite() || !latitude.is_finite() {
            return None;
        }
        let mut best: Option<(&NavPoint, f64)> = None;
        for point in self.points.values() {
            let dlon = point.longitude - longitude;
            let dlat = point.latitude - latitude;
            let dist = (dlon * dlon + dlat * dlat).sqrt();
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((point, dist)),
            }
        }
        best.map(|(point, _)| point)
    }

    fn unknown(&self, number: u32) -> Error {
        Error::unknown_node(number.to_string())
    }
}

impl Network for Airspace {
    type Id = u32;

    fn contains(&self, id: &u32) -> bool {
        self.points.contains_key(id)
    }

    fn neighbors(&self, id: &u32) -> Vec<u32> {
        self.segments
            .iter()
            .filter(|s| s.origin == *id)
            .filter(|s| self.points.contains_key(&s.destination))
            .map(|s| s.destination)
            .collect()
    }

    fn cost_between(&self, a: &u32, b: &u32) -> Option<f64> {
        self.segments
            .iter()
            .find(|s| s.origin == *a && s.destination == *b)
            .or_else(|| {
                self.segments
                    .iter()
                    .find(|s| s.origin == *b && s.destination == *a)
            })
            .map(|s| s.distance)
    }

    /// Straight-line estimate in coordinate degrees. Leg distances are in
    /// kilometres, so the units do not line up; the estimate stays tiny
    /// relative to real leg costs, which preserves the historical search
    /// behavior but means A* optimality is only guaranteed on Cartesian
    /// stores.
    fn heuristic(&self, from: &u32, to: &u32) -> f64 {
        match (self.points.get(from), self.points.get(to)) {
            (Some(from), Some(to)) => {
                let dlat = from.latitude - to.latitude;
                let dlon = from.longitude - to.longitude;
                (dlat * dlat + dlon * dlon).sqrt()
            }
            _ => 0.0,
        }
    }

    fn suggestions(&self, query: &str) -> Vec<String> {
        closest_matches(self.points.values().map(|p| p.name.as_str()), query, 3)
    }
}
