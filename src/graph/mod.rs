//! The immutable road network a route is planned on.
//!
//! Nodes and Edges are stored in dense arenas and referenced by [`NodeIndex`] / [`EdgeIndex`]
//! internally. The caller-facing [`NodeId`]s are only resolved once, when the [`Graph`] is built.

mod node;
pub use self::node::Node;

mod edge;
pub use self::edge::{Edge, EdgeMode, GraphEdge};

mod node_list;
use self::node_list::NodeList;

use crate::{error::GraphError, NodeId};

/// Dense index of a Node inside a [`Graph`]
pub type NodeIndex = usize;
/// Dense index of a directed Edge inside a [`Graph`]
pub type EdgeIndex = usize;

/// A validated, read-only snapshot of Nodes and directed Edges.
///
/// ## Examples
/// ```
/// use charge_route::{Edge, EdgeMode, Graph, Node};
///
/// let graph = Graph::new(
///     vec![Node::new(1, "A", 0.0), Node::new(2, "B", 0.3)],
///     vec![Edge::new(1, 2, 10.0)],
///     EdgeMode::Undirected,
/// )
/// .unwrap();
///
/// assert_eq!(graph.node_count(), 2);
/// // undirected Edges are stored once per direction
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
	nodes: NodeList,
	edges: Vec<GraphEdge>,
	outgoing: Vec<Vec<EdgeIndex>>,
	mode: EdgeMode,
}

impl Graph {
	/// Validates the input and builds the Graph.
	///
	/// Fails with a [`GraphError`] if there are no Nodes, a Node id is repeated, a price or
	/// distance is negative or not finite, an Edge references an unknown Node, or the same
	/// ordered pair of Nodes is connected twice.
	pub fn new(
		nodes: impl IntoIterator<Item = Node>,
		edges: impl IntoIterator<Item = Edge>,
		mode: EdgeMode,
	) -> Result<Graph, GraphError> {
		let nodes = nodes.into_iter();
		let mut node_list = NodeList::with_capacity(nodes.size_hint().0);
		for node in nodes {
			node_list.add_node(node)?;
		}
		if node_list.is_empty() {
			return Err(GraphError::Empty);
		}

		let mut graph = Graph {
			outgoing: vec![Vec::new(); node_list.len()],
			nodes: node_list,
			edges: Vec::new(),
			mode,
		};

		let mut seen = hashbrown::HashSet::new();
		for edge in edges {
			let Edge { from, to, distance } = edge;
			if !distance.is_finite() || distance < 0.0 {
				return Err(GraphError::InvalidDistance { from, to, distance });
			}
			let resolve = |id| {
				graph.nodes.index_of(id).ok_or(GraphError::UnknownNode {
					from,
					to,
					missing: id,
				})
			};
			let source = resolve(from)?;
			let target = resolve(to)?;

			graph.push_edge(&mut seen, source, target, distance)?;
			if mode == EdgeMode::Undirected && source != target {
				graph.push_edge(&mut seen, target, source, distance)?;
			}
		}

		Ok(graph)
	}

	fn push_edge(
		&mut self,
		seen: &mut hashbrown::HashSet<(NodeIndex, NodeIndex)>,
		source: NodeIndex,
		target: NodeIndex,
		distance: f64,
	) -> Result<(), GraphError> {
		if !seen.insert((source, target)) {
			return Err(GraphError::DuplicateEdge {
				from: self.nodes[source].id,
				to: self.nodes[target].id,
			});
		}
		let index = self.edges.len();
		self.edges.push(GraphEdge {
			source,
			target,
			distance,
		});
		self.outgoing[source].push(index);
		Ok(())
	}

	/// The number of Nodes
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// The number of directed Edges (undirected input counts twice)
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// How the Edges were interpreted when building the Graph
	pub fn mode(&self) -> EdgeMode {
		self.mode
	}

	/// Resolves a caller-facing id to the index of its Node
	pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
		self.nodes.index_of(id)
	}

	/// The Node at `index`
	///
	/// ## Panics
	/// if `index` is not a valid index of this Graph
	#[track_caller]
	pub fn node(&self, index: NodeIndex) -> &Node {
		&self.nodes[index]
	}

	/// Shorthand for `self.node(index).id`
	#[track_caller]
	pub fn id(&self, index: NodeIndex) -> NodeId {
		self.nodes[index].id
	}

	/// Price per unit of energy at the Node at `index`
	#[track_caller]
	pub fn price(&self, index: NodeIndex) -> f64 {
		self.nodes[index].price
	}

	/// All Nodes in insertion order
	pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node)> + '_ {
		self.nodes.iter()
	}

	/// The Edge at `index`
	#[track_caller]
	pub fn edge(&self, index: EdgeIndex) -> &GraphEdge {
		&self.edges[index]
	}

	/// Length of the Edge at `index`
	#[track_caller]
	pub fn distance(&self, index: EdgeIndex) -> f64 {
		self.edges[index].distance
	}

	/// The outgoing Edges of a Node, in the order they were supplied
	#[track_caller]
	pub fn neighbors(&self, index: NodeIndex) -> impl Iterator<Item = (EdgeIndex, &GraphEdge)> + '_ {
		self.outgoing[index]
			.iter()
			.map(move |&edge| (edge, &self.edges[edge]))
	}

	/// The Edge from `source` to `target`, if there is one
	pub fn find_edge(&self, source: NodeIndex, target: NodeIndex) -> Option<&GraphEdge> {
		self.outgoing
			.get(source)?
			.iter()
			.map(|&edge| &self.edges[edge])
			.find(|edge| edge.target == target)
	}

	/// Index of the first Node supplied. The default source of a route.
	pub fn first(&self) -> NodeIndex {
		0
	}

	/// Index of the last Node supplied. The default target of a route.
	pub fn last(&self) -> NodeIndex {
		self.nodes.len() - 1
	}
}
