//! The monetary cost of driving along an Edge.

use crate::{error::ParameterError, graph::GraphEdge, Graph};

/// Energy consumed per unit of distance. Constant for one computation.
///
/// Always finite and strictly positive.
/// ```
/// # use charge_route::ConsumptionRate;
/// assert!(ConsumptionRate::new(0.2).is_ok());
/// assert!(ConsumptionRate::new(0.0).is_err());
/// assert!(ConsumptionRate::new(-1.0).is_err());
/// assert!(ConsumptionRate::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ConsumptionRate(f64);

impl ConsumptionRate {
	/// Validates and wraps a rate
	pub fn new(rate: f64) -> Result<ConsumptionRate, ParameterError> {
		if rate.is_finite() && rate > 0.0 {
			Ok(ConsumptionRate(rate))
		} else {
			Err(ParameterError::ConsumptionRate(rate))
		}
	}

	/// The raw rate
	pub fn get(self) -> f64 {
		self.0
	}

	/// Energy needed to cover `distance`
	pub fn energy(self, distance: f64) -> f64 {
		distance * self.0
	}
}

/// `distance × consumption × price(destination)`: the price of the energy used on the Edge,
/// bought at the Node the Edge leads to.
///
/// Pure and deterministic; identical inputs give bit-identical results.
///
/// ## Examples
/// ```
/// use charge_route::{edge_cost, ConsumptionRate, Edge, EdgeMode, Graph, Node};
///
/// let graph = Graph::new(
///     vec![Node::new(1, "A", 0.0), Node::new(2, "B", 0.25)],
///     vec![Edge::new(1, 2, 10.0)],
///     EdgeMode::Directed,
/// )
/// .unwrap();
/// let rate = ConsumptionRate::new(0.2).unwrap();
///
/// let cost = edge_cost(&graph, graph.edge(0), rate);
/// assert!((cost - 0.5).abs() < 1e-12);
/// ```
pub fn edge_cost(graph: &Graph, edge: &GraphEdge, rate: ConsumptionRate) -> f64 {
	rate.energy(edge.distance) * graph.price(edge.target)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Edge, EdgeMode, Node};

	#[test]
	fn uses_destination_price() {
		let graph = Graph::new(
			vec![Node::new(1, "A", 100.0), Node::new(2, "B", 0.28)],
			vec![Edge::new(1, 2, 15.0), Edge::new(2, 1, 15.0)],
			EdgeMode::Directed,
		)
		.unwrap();
		let rate = ConsumptionRate::new(0.2).unwrap();

		assert!((edge_cost(&graph, graph.edge(0), rate) - 0.84).abs() < 1e-12);
		assert!((edge_cost(&graph, graph.edge(1), rate) - 300.0).abs() < 1e-9);
	}

	#[test]
	fn deterministic() {
		let graph = Graph::new(
			vec![Node::new(1, "A", 0.1), Node::new(2, "B", 0.3)],
			vec![Edge::new(1, 2, 0.1 + 0.2)],
			EdgeMode::Directed,
		)
		.unwrap();
		let rate = ConsumptionRate::new(0.7).unwrap();
		let first = edge_cost(&graph, graph.edge(0), rate);
		for _ in 0..10 {
			assert_eq!(edge_cost(&graph, graph.edge(0), rate).to_bits(), first.to_bits());
		}
	}

	#[test]
	fn zero_distance_is_free() {
		let graph = Graph::new(
			vec![Node::new(1, "A", 0.1), Node::new(2, "B", 0.3)],
			vec![Edge::new(1, 2, 0.0)],
			EdgeMode::Directed,
		)
		.unwrap();
		let rate = ConsumptionRate::new(3.0).unwrap();
		assert_eq!(edge_cost(&graph, graph.edge(0), rate), 0.0);
	}
}
