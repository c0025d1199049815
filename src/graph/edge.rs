use super::NodeIndex;
use crate::NodeId;

/// A connection between two Nodes as supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
	/// the Node the Edge starts at
	pub from: NodeId,
	/// the Node the Edge leads to
	pub to: NodeId,
	/// physical length of the Edge
	#[cfg_attr(feature = "serde", serde(rename = "distance_km"))]
	pub distance: f64,
}

impl Edge {
	/// Creates a new Edge
	pub fn new(from: NodeId, to: NodeId, distance: f64) -> Edge {
		Edge { from, to, distance }
	}
}

/// How the Edges passed to [`Graph::new`](super::Graph::new) are interpreted.
///
/// Has no `Default`, every Graph states which one it uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EdgeMode {
	/// every Edge can only be traversed from `from` to `to`
	Directed,
	/// every Edge can be traversed in both directions
	Undirected,
}

/// A directed Edge inside a [`Graph`](super::Graph), referencing Nodes by their index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphEdge {
	/// index of the Node the Edge starts at
	pub source: NodeIndex,
	/// index of the Node the Edge leads to
	pub target: NodeIndex,
	/// physical length of the Edge
	pub distance: f64,
}
