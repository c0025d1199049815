use super::{Node, NodeIndex};
use crate::{
	error::GraphError,
	node_id::{node_id_map_with_cap, NodeIdMap},
	NodeId,
};

/// Arena of Nodes. Indices are handed out densely in insertion order and never reused.
#[derive(Clone, Debug)]
pub(crate) struct NodeList {
	nodes: slab::Slab<Node>,
	id_map: NodeIdMap<NodeIndex>,
}

impl NodeList {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			nodes: slab::Slab::with_capacity(capacity),
			id_map: node_id_map_with_cap(capacity),
		}
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn add_node(&mut self, node: Node) -> Result<NodeIndex, GraphError> {
		if !node.price.is_finite() || node.price < 0.0 {
			return Err(GraphError::InvalidPrice {
				id: node.id,
				price: node.price,
			});
		}
		if self.id_map.contains_key(&node.id) {
			return Err(GraphError::DuplicateNode { id: node.id });
		}
		let id = node.id;
		let index = self.nodes.insert(node);
		self.id_map.insert(id, index);
		Ok(index)
	}

	pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
		self.id_map.get(&id).copied()
	}

	pub fn iter(&self) -> slab::Iter<Node> {
		self.nodes.iter()
	}
}

use std::ops::Index;
impl Index<NodeIndex> for NodeList {
	type Output = Node;
	#[track_caller]
	fn index(&self, index: NodeIndex) -> &Node {
		&self.nodes[index]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dense_indices() {
		let mut nodes = NodeList::with_capacity(2);
		let a = nodes.add_node(Node::new(10, "a", 0.1)).unwrap();
		let b = nodes.add_node(Node::new(3, "b", 0.2)).unwrap();

		assert_eq!((a, b), (0, 1));
		assert_eq!(nodes.len(), 2);
		assert_eq!(nodes.index_of(3), Some(1));
		assert_eq!(nodes.index_of(4), None);
		assert_eq!(nodes[a].name, "a");
		let ids: Vec<_> = nodes.iter().map(|(_, node)| node.id).collect();
		assert_eq!(ids, vec![10, 3]);
	}

	#[test]
	fn rejects_bad_nodes() {
		let mut nodes = NodeList::with_capacity(2);
		nodes.add_node(Node::new(1, "a", 0.1)).unwrap();

		assert_eq!(
			nodes.add_node(Node::new(1, "again", 0.1)),
			Err(GraphError::DuplicateNode { id: 1 })
		);
		assert!(matches!(
			nodes.add_node(Node::new(2, "negative", -0.5)),
			Err(GraphError::InvalidPrice { id: 2, .. })
		));
		assert!(matches!(
			nodes.add_node(Node::new(3, "nan", f64::NAN)),
			Err(GraphError::InvalidPrice { id: 3, .. })
		));
		assert_eq!(nodes.len(), 1);
	}
}
