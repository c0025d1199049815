use super::LabelIndex;
use crate::NodeId;
use std::cmp::Ordering;

/// A heap entry. Ordered so that a max-heap pops the smallest `cost`, then the smallest `id`,
/// then the oldest label.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Element {
	pub cost: f64,
	pub id: NodeId,
	pub label: LabelIndex,
}

impl Element {
	/// `true` if `self` has to be settled before `other`
	pub fn precedes(&self, other: &Element) -> bool {
		self.key_cmp(other) == Ordering::Less
	}

	fn key_cmp(&self, other: &Element) -> Ordering {
		self.cost
			.total_cmp(&other.cost)
			.then_with(|| self.id.cmp(&other.id))
			.then_with(|| self.label.cmp(&other.label))
	}
}

impl PartialEq for Element {
	fn eq(&self, rhs: &Self) -> bool {
		self.key_cmp(rhs) == Ordering::Equal
	}
}
impl Eq for Element {}
impl PartialOrd for Element {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for Element {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.key_cmp(self)
	}
}
