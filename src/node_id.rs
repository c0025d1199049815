//! A Module with some utilities for working with NodeIds

use super::NodeId;

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIds with a faster Hasher
pub type NodeIdMap<V> = hashbrown::HashMap<NodeId, V, BuildNodeIdHasher>;

/// A [`BuildHasher`](std::hash::BuildHasher) specialized on NodeIds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildNodeIdHasher;

/// A [`Hasher`](std::hash::Hasher) specialized on NodeIds
///
/// NodeIds are already unique small integers, so the id itself is the hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeIdHasher(u64);

impl std::hash::BuildHasher for BuildNodeIdHasher {
	type Hasher = NodeIdHasher;
	fn build_hasher(&self) -> NodeIdHasher {
		NodeIdHasher(0)
	}
}
impl std::hash::Hasher for NodeIdHasher {
	/// folds arbitrary bytes into the state. Only reached for keys that are not NodeIds.
	fn write(&mut self, bytes: &[u8]) {
		for &byte in bytes {
			self.0 = self.0.rotate_left(8) ^ u64::from(byte);
		}
	}
	/// Writes a single NodeId into this hasher.
	fn write_u32(&mut self, id: NodeId) {
		self.0 = u64::from(id)
	}
	fn finish(&self) -> u64 {
		self.0
	}
}

/// create a new [`NodeIdMap`] by calling the [`with_capacity_and_hasher`](hashbrown::HashMap::with_capacity_and_hasher) Function
pub fn node_id_map_with_cap<V>(capacity: usize) -> NodeIdMap<V> {
	NodeIdMap::with_capacity_and_hasher(capacity, BuildNodeIdHasher)
}
