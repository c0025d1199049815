use crate::NodeId;

/// A waypoint of the road network: somewhere energy can be bought.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
	/// unique identifier within one graph
	pub id: NodeId,
	/// display name, not used by the search
	#[cfg_attr(feature = "serde", serde(default))]
	pub name: String,
	/// price per unit of energy bought at this node
	#[cfg_attr(feature = "serde", serde(rename = "cost_per_kwh"))]
	pub price: f64,
	/// `true` (default): the state of charge may be replenished on arrival.
	///
	/// `false`: the node is a plain waypoint.
	#[cfg_attr(feature = "serde", serde(default = "charging_default"))]
	pub charging: bool,
}

#[cfg(feature = "serde")]
fn charging_default() -> bool {
	true
}

impl Node {
	/// Creates a new charging Node
	///
	/// ## Examples
	/// ```
	/// # use charge_route::Node;
	/// let node = Node::new(2, "Depot", 0.30);
	///
	/// assert_eq!(node.price, 0.30);
	/// assert!(node.charging);
	/// ```
	pub fn new(id: NodeId, name: impl Into<String>, price: f64) -> Node {
		Node {
			id,
			name: name.into(),
			price,
			charging: true,
		}
	}

	/// Turns the Node into a waypoint where no replenishment happens.
	pub fn without_charging(mut self) -> Node {
		self.charging = false;
		self
	}
}
