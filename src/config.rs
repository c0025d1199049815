use crate::error::ParameterError;

/// How the search picks the next label to settle.
///
/// Both strategies settle labels in the same order and produce identical results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Frontier {
	/// scan all labels for the smallest cost. Quadratic, best for small dense Graphs.
	LinearScan,
	/// keep labels in a binary heap. `O((N + E) log N)` without a battery, best for large sparse Graphs.
	BinaryHeap,
}

/// Options for configuring the search of a [`RoutePlanner`](crate::RoutePlanner)
///
/// Default options:
/// ```
/// # use charge_route::{Frontier, SearchConfig};
/// assert_eq!(
/// 	SearchConfig {
/// 		frontier: Frontier::LinearScan,
/// 		record_trace: true,
/// 		max_relaxations: None,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// The selection strategy (defaults to [`Frontier::LinearScan`])
	pub frontier: Frontier,
	/// `true` (default): every label the search creates is recorded in the
	/// [`trace`](crate::RouteReport::trace) of the result.
	///
	/// `false`: the trace stays empty. The route itself is not affected.
	pub record_trace: bool,
	/// Upper bound on the number of Edges examined. `None` (default) means `N²` for every Node of
	/// a Graph with `N` Nodes, so `N³` in total.
	///
	/// An unlimited battery never needs more than `N²`. With a limited one, a Node may be
	/// reached by several paths that are each worth extending.
	pub max_relaxations: Option<usize>,
}

impl SearchConfig {
	/// an example SearchConfig for large Graphs: heap selection, no trace
	///
	/// Values:
	/// ```
	/// # use charge_route::{Frontier, SearchConfig};
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		frontier: Frontier::BinaryHeap,
	/// 		record_trace: false,
	/// 		max_relaxations: None,
	/// 	},
	/// 	SearchConfig::LARGE_GRAPH
	/// );
	/// ```
	pub const LARGE_GRAPH: SearchConfig = SearchConfig {
		frontier: Frontier::BinaryHeap,
		record_trace: false,
		max_relaxations: None,
	};

	/// Creates a default config with the given Frontier
	pub fn with_frontier(frontier: Frontier) -> SearchConfig {
		SearchConfig {
			frontier,
			..Default::default()
		}
	}

	/// The relaxation bound for a Graph with `node_count` Nodes
	pub fn relaxation_limit(&self, node_count: usize) -> usize {
		self.max_relaxations
			.unwrap_or_else(|| {
				node_count
					.saturating_mul(node_count)
					.saturating_mul(node_count)
					.max(1)
			})
	}

	/// Checks that all values are within range
	pub fn validate(&self) -> Result<(), ParameterError> {
		if self.max_relaxations == Some(0) {
			return Err(ParameterError::Search("max_relaxations must be at least 1"));
		}
		Ok(())
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig {
			frontier: Frontier::LinearScan,
			record_trace: true,
			max_relaxations: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn relaxation_limit() {
		let config = SearchConfig::default();
		assert_eq!(config.relaxation_limit(4), 64);
		assert_eq!(config.relaxation_limit(1), 1);

		let config = SearchConfig {
			max_relaxations: Some(3),
			..SearchConfig::LARGE_GRAPH
		};
		assert_eq!(config.relaxation_limit(100), 3);
		assert!(config.validate().is_ok());

		let config = SearchConfig {
			max_relaxations: Some(0),
			..Default::default()
		};
		assert!(config.validate().is_err());
	}
}
