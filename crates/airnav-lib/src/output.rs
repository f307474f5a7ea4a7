//! Structured route output for higher-level consumers.
//!
//! [`RouteSummary`] flattens a [`RoutePlan`] into display-ready strings so
//! front ends can serialize it (serde) or render plain text without knowing
//! which store variant produced the plan.

use std::fmt::Write;

use serde::Serialize;

use crate::airspace::Airspace;
use crate::error::{Error, Result};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    /// The point's identity key, rendered as text.
    pub id: String,
    /// Display name when it differs from the key (airspace fixes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Serializable summary of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub cost: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Summarize a plan over a Cartesian graph, where keys are the display
    /// names themselves.
    pub fn from_graph_plan(plan: &RoutePlan<String>) -> Result<Self> {
        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, name)| RouteStep {
                index,
                id: name.clone(),
                name: None,
            })
            .collect();
        Self::assemble(plan.algorithm, plan.cost, steps)
    }

    /// Summarize a plan over an airspace, resolving fix numbers to names.
    pub fn from_airspace_plan(airspace: &Airspace, plan: &RoutePlan<u32>) -> Result<Self> {
        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, number)| RouteStep {
                index,
                id: number.to_string(),
                name: airspace.point(*number).map(|p| p.name.clone()),
            })
            .collect();
        Self::assemble(plan.algorithm, plan.cost, steps)
    }

    fn assemble(algorithm: RouteAlgorithm, cost: f64, steps: Vec<RouteStep>) -> Result<Self> {
        let (Some(first), Some(last)) = (steps.first(), steps.last()) else {
            return Err(Error::EmptyRoute);
        };
        Ok(Self {
            algorithm,
            start: first.display_name().to_string(),
            goal: last.display_name().to_string(),
            hops: steps.len().saturating_sub(1),
            cost,
            steps,
        })
    }

    /// Render the summary as plain text, one step per line.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, cost {:.2}, algorithm: {})",
            self.start, self.goal, self.hops, self.cost, self.algorithm
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "{:>3}: {} ({})", step.index, step.display_name(), step.id);
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> RoutePlan<String> {
        RoutePlan {
            algorithm: RouteAlgorithm::Dijkstra,
            start: "A".to_string(),
            goal: "C".to_string(),
            steps: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            cost: 12.5,
        }
    }

    #[test]
    fn summary_counts_hops_and_keeps_cost() {
        let summary = RouteSummary::from_graph_plan(&plan()).unwrap();
        assert_eq!(summary.hops, 2);
        assert_eq!(summary.cost, 12.5);
        assert_eq!(summary.start, "A");
        assert_eq!(summary.goal, "C");
    }

    #[test]
    fn render_lists_each_step() {
        let summary = RouteSummary::from_graph_plan(&plan()).unwrap();
        let text = summary.render();
        assert!(text.contains("A -> C"));
        assert!(text.contains("  1: B (B)"));
    }

    #[test]
    fn empty_plan_is_rejected() {
        let empty = RoutePlan {
            algorithm: RouteAlgorithm::Dijkstra,
            start: "A".to_string(),
            goal: "A".to_string(),
            steps: Vec::new(),
            cost: 0.0,
        };
        let error = RouteSummary::from_graph_plan(&empty).unwrap_err();
        assert!(matches!(error, Error::EmptyRoute));
    }
}
