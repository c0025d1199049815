//! Error types for route planning.
//!
//! Every failure of a computation surfaces as a [`RouteError`]. None of them poison later
//! computations: a [`Graph`](crate::Graph) or [`RoutePlanner`](crate::RoutePlanner) that produced
//! an error can be used again.

use crate::NodeId;
use thiserror::Error;

/// Result type alias for route planning operations.
pub type Result<T> = std::result::Result<T, RouteError>;

/// The outcome of a failed route computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
	/// The input graph violates a structural invariant.
	#[error("malformed graph: {0}")]
	MalformedGraph(#[from] GraphError),

	/// A computation parameter is out of range or refers to an unknown node.
	#[error("invalid parameter: {0}")]
	InvalidParameter(#[from] ParameterError),

	/// The target cannot be reached from the source at all, ignoring the state of charge.
	#[error("no path from node {start} to node {target}")]
	NoPath {
		/// Node the search started from.
		start: NodeId,
		/// Node the search was looking for.
		target: NodeId,
	},

	/// Paths from the source to the target exist, but every one of them runs out of charge.
	#[error("node {target} is reachable from node {start}, but no path stays above the minimum charge")]
	InfeasiblePath {
		/// Node the search started from.
		start: NodeId,
		/// Node the search was looking for.
		target: NodeId,
	},

	/// The search produced a predecessor chain that cannot be turned into a valid route.
	///
	/// This signals a bug in the search, never a problem with the input.
	#[error("broken path at node {node}: {defect}")]
	BrokenPath {
		/// Node at which the defect was detected.
		node: NodeId,
		/// What went wrong.
		defect: PathDefect,
	},

	/// The search examined more edges than the configured bound allows.
	#[error("search exceeded {limit} relaxations")]
	IterationLimit {
		/// The configured bound.
		limit: usize,
	},
}

impl RouteError {
	/// A stable, machine readable identifier of the error kind.
	///
	/// ```
	/// # use charge_route::RouteError;
	/// let err = RouteError::NoPath { start: 1, target: 4 };
	/// assert_eq!(err.code(), "no_path");
	/// ```
	pub fn code(&self) -> &'static str {
		match self {
			RouteError::MalformedGraph(_) => "malformed_graph",
			RouteError::InvalidParameter(_) => "invalid_parameter",
			RouteError::NoPath { .. } => "no_path",
			RouteError::InfeasiblePath { .. } => "infeasible_path",
			RouteError::BrokenPath { .. } => "broken_path",
			RouteError::IterationLimit { .. } => "iteration_limit",
		}
	}

	/// An HTTP-style status number for the error kind.
	///
	/// Caller mistakes are in the 4xx range, internal defects are `500`.
	pub fn status(&self) -> u16 {
		match self {
			RouteError::MalformedGraph(_) | RouteError::InvalidParameter(_) => 400,
			RouteError::NoPath { .. } => 404,
			RouteError::InfeasiblePath { .. } => 422,
			RouteError::BrokenPath { .. } | RouteError::IterationLimit { .. } => 500,
		}
	}

	/// `true` if the error is an internal defect rather than a consequence of the input.
	pub fn is_internal(&self) -> bool {
		self.status() >= 500
	}
}

/// Structural problems in the input graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
	/// The node set is empty.
	#[error("the graph has no nodes")]
	Empty,

	/// Two nodes share an identifier.
	#[error("node id {id} is used more than once")]
	DuplicateNode {
		/// The repeated identifier.
		id: NodeId,
	},

	/// An edge references a node that is not in the node set.
	#[error("edge {from} -> {to} references unknown node {missing}")]
	UnknownNode {
		/// Start of the offending edge.
		from: NodeId,
		/// End of the offending edge.
		to: NodeId,
		/// The identifier that could not be resolved.
		missing: NodeId,
	},

	/// More than one edge connects the same ordered pair of nodes.
	#[error("more than one edge from {from} to {to}")]
	DuplicateEdge {
		/// Start of the edge.
		from: NodeId,
		/// End of the edge.
		to: NodeId,
	},

	/// An edge distance is negative, NaN or infinite.
	#[error("edge {from} -> {to} has invalid distance {distance}")]
	InvalidDistance {
		/// Start of the edge.
		from: NodeId,
		/// End of the edge.
		to: NodeId,
		/// The rejected value.
		distance: f64,
	},

	/// A node price is negative, NaN or infinite.
	#[error("node {id} has invalid price {price}")]
	InvalidPrice {
		/// The node.
		id: NodeId,
		/// The rejected value.
		price: f64,
	},
}

/// Invalid computation parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
	/// The consumption rate must be finite and strictly positive.
	#[error("consumption rate must be finite and > 0, got {0}")]
	ConsumptionRate(f64),

	/// The requested source node does not exist.
	#[error("unknown source node {0}")]
	UnknownSource(NodeId),

	/// The requested target node does not exist.
	#[error("unknown target node {0}")]
	UnknownTarget(NodeId),

	/// A resource setting is out of range.
	#[error("invalid resource configuration: {0}")]
	Resource(&'static str),

	/// A search setting is out of range.
	#[error("invalid search configuration: {0}")]
	Search(&'static str),
}

/// The ways a predecessor chain can be inconsistent.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PathDefect {
	/// A node appeared twice while walking predecessors.
	#[error("predecessor cycle")]
	Cycle,
	/// The walk ended before reaching the source.
	#[error("predecessor chain does not reach the source")]
	Unterminated,
	/// Two consecutive path nodes are not connected by an edge.
	#[error("no edge to the previous path node")]
	MissingEdge,
	/// Replaying the path runs out of charge.
	#[error("path violates the minimum charge on replay")]
	Infeasible,
	/// The re-summed cost differs from the cost found by the search.
	#[error("re-summed cost {resummed} differs from search cost {searched}")]
	CostMismatch {
		/// Cost obtained by summing the edge costs along the path.
		resummed: f64,
		/// Tentative cost the search assigned to the target.
		searched: f64,
	},
}
