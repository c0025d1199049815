//! Turning a [`SearchOutcome`] into a route.
//!
//! Nothing accumulated during the search is trusted: distance, cost and state of charge are
//! re-derived from the Graph along the reconstructed Node sequence, and the cost is compared to
//! what the search found.

use crate::{
	cost::{edge_cost, ConsumptionRate},
	error::{PathDefect, RouteError},
	feasibility::Feasibility,
	graph::NodeIndex,
	search::{Relaxation, SearchOutcome},
	Graph, NodeId,
};

/// Allowed relative difference between the re-summed and the searched cost.
const COST_TOLERANCE: f64 = 1e-9;

/// The state of charge when reaching a Node of the route.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceStep {
	/// the Node
	pub node: NodeId,
	/// level after arriving and replenishing. `None` for an unlimited battery.
	#[cfg_attr(feature = "serde", serde(rename = "soc_kwh"))]
	pub level: Option<f64>,
	/// `level` in percent of the capacity
	#[cfg_attr(feature = "serde", serde(rename = "soc"))]
	pub percent: Option<f64>,
	/// energy added at the Node, if any
	#[cfg_attr(
		feature = "serde",
		serde(rename = "charged_kwh", default, skip_serializing_if = "Option::is_none")
	)]
	pub charged: Option<f64>,
}

/// A planned route
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteReport {
	/// the Nodes of the route, from source to target
	#[cfg_attr(feature = "serde", serde(rename = "optimal_path"))]
	pub path: Vec<NodeId>,
	/// sum of the Edge costs along `path`
	pub total_cost: f64,
	/// sum of the Edge distances along `path`
	#[cfg_attr(feature = "serde", serde(rename = "total_distance_km"))]
	pub total_distance: f64,
	/// one entry per Node of `path`
	#[cfg_attr(feature = "serde", serde(rename = "soc_timeline"))]
	pub timeline: Vec<ResourceStep>,
	/// the decisions of the search. Diagnostics only.
	#[cfg_attr(feature = "serde", serde(rename = "debug_steps"))]
	pub trace: Vec<Relaxation>,
}

impl RouteReport {
	/// The number of Nodes on the route
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// `true` if the route has no Nodes. Never the case for a planned route.
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// Total energy charged along the route
	pub fn charged(&self) -> f64 {
		self.timeline.iter().filter_map(|step| step.charged).sum()
	}
}

use std::fmt;
impl fmt::Display for RouteReport {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(
			fmt,
			"Route[Cost = {:.2}, Distance = {:.2}]: ",
			self.total_cost, self.total_distance
		)?;
		match self.path.split_first() {
			None => write!(fmt, "<empty>"),
			Some((first, rest)) => {
				write!(fmt, "{}", first)?;
				for id in rest {
					write!(fmt, " -> {}", id)?;
				}
				Ok(())
			}
		}
	}
}

/// Walks the label predecessors from the best label back to the source.
///
/// Returns the Node indices in source → target order. A Node may appear more than once when the
/// route returns after charging elsewhere, but every label can be visited at most once, so a
/// corrupted predecessor chain fails instead of looping.
pub fn reconstruct(graph: &Graph, outcome: &SearchOutcome) -> Result<Vec<NodeIndex>, RouteError> {
	let mut visited = vec![false; outcome.labels.len()];
	let mut steps = vec![];
	let mut node = outcome.target;
	let mut current = Some(outcome.best);
	while let Some(index) = current {
		let label = outcome
			.labels
			.get(index)
			.ok_or_else(|| broken(graph, node, PathDefect::Unterminated))?;
		if visited[index] {
			return Err(broken(graph, label.node, PathDefect::Cycle));
		}
		visited[index] = true;
		node = label.node;
		steps.push(node);
		current = label.prev;
	}
	if node != outcome.source {
		return Err(broken(graph, node, PathDefect::Unterminated));
	}
	steps.reverse();
	Ok(steps)
}

/// Reconstructs the route and re-derives its totals and state of charge.
pub fn build_report(
	graph: &Graph,
	rate: ConsumptionRate,
	feasibility: &Feasibility,
	outcome: SearchOutcome,
) -> Result<RouteReport, RouteError> {
	let steps = reconstruct(graph, &outcome)?;
	let capacity = feasibility.resources().capacity;
	let step = |node: NodeIndex, level: f64, charged: Option<f64>| ResourceStep {
		node: graph.id(node),
		level: finite(level),
		percent: finite(level * 100.0 / capacity),
		charged,
	};

	let mut level = feasibility.initial_level();
	let mut total_cost = 0.0;
	let mut total_distance = 0.0;
	let mut timeline = Vec::with_capacity(steps.len());
	timeline.push(step(outcome.source, level, None));

	for pair in steps.windows(2) {
		let (from, to) = (pair[0], pair[1]);
		let edge = graph
			.find_edge(from, to)
			.ok_or_else(|| broken(graph, to, PathDefect::MissingEdge))?;

		let traversal = feasibility.can_traverse(level, edge);
		if !traversal.feasible {
			return Err(broken(graph, to, PathDefect::Infeasible));
		}
		level = traversal.level;
		total_distance += edge.distance;
		total_cost += edge_cost(graph, edge, rate);

		timeline.push(step(
			to,
			level,
			Some(traversal.charged).filter(|&charged| charged > 0.0),
		));
	}

	let searched = outcome.cost();
	if (total_cost - searched).abs() > COST_TOLERANCE * searched.abs().max(1.0) {
		return Err(broken(
			graph,
			outcome.target,
			PathDefect::CostMismatch {
				resummed: total_cost,
				searched,
			},
		));
	}

	Ok(RouteReport {
		path: steps.iter().map(|&index| graph.id(index)).collect(),
		total_cost,
		total_distance,
		timeline,
		trace: outcome.trace,
	})
}

fn finite(level: f64) -> Option<f64> {
	Some(level).filter(|level| level.is_finite())
}

fn broken(graph: &Graph, index: NodeIndex, defect: PathDefect) -> RouteError {
	log::warn!("broken path at node {}: {}", graph.id(index), defect);
	RouteError::BrokenPath {
		node: graph.id(index),
		defect,
	}
}
