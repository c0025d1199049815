use crate::{
	config::SearchConfig,
	cost::ConsumptionRate,
	error::{ParameterError, Result},
	feasibility::{Feasibility, ResourceConfig},
	graph::NodeIndex,
	report::{build_report, RouteReport},
	search::dijkstra_search,
	Graph, NodeId,
};

/// Plans routes on one [`Graph`] for one vehicle.
///
/// Holds no state between calls: every [`plan`](Self::plan) creates its own search state, and
/// independent planners can run on different threads at the same time.
#[derive(Clone, Copy, Debug)]
pub struct RoutePlanner<'a> {
	graph: &'a Graph,
	rate: ConsumptionRate,
	resources: ResourceConfig,
	config: SearchConfig,
}

impl<'a> RoutePlanner<'a> {
	/// Creates a new RoutePlanner with the default [`SearchConfig`]
	///
	/// ## Arguments
	/// - `graph` - the Graph to plan on
	/// - `rate` - energy consumed per unit of distance
	/// - `resources` - the battery. Use [`ResourceConfig::UNLIMITED`] to ignore the state of charge.
	///
	/// ## Errors
	/// [`RouteError::InvalidParameter`](crate::RouteError::InvalidParameter) if `resources` is
	/// out of range
	pub fn new(graph: &'a Graph, rate: ConsumptionRate, resources: ResourceConfig) -> Result<RoutePlanner<'a>> {
		resources.validate()?;
		Ok(RoutePlanner {
			graph,
			rate,
			resources,
			config: SearchConfig::default(),
		})
	}

	/// Replaces the [`SearchConfig`]
	pub fn with_config(self, config: SearchConfig) -> Result<RoutePlanner<'a>> {
		config.validate()?;
		Ok(RoutePlanner { config, ..self })
	}

	/// The Graph this planner works on
	pub fn graph(&self) -> &'a Graph {
		self.graph
	}

	/// The current search options
	pub fn config(&self) -> &SearchConfig {
		&self.config
	}

	/// Calculates the cheapest feasible route from `source` to `target`.
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// use charge_route::prelude::*;
	///
	/// let graph = Graph::new(
	///     vec![
	///         Node::new(1, "Home", 0.0),
	///         Node::new(2, "Mall", 0.30),
	///         Node::new(3, "Depot", 0.25),
	///         Node::new(4, "Office", 0.28),
	///     ],
	///     vec![
	///         Edge::new(1, 2, 10.0),
	///         Edge::new(2, 3, 10.0),
	///         Edge::new(3, 4, 10.0),
	///         Edge::new(1, 3, 25.0),
	///         Edge::new(2, 4, 15.0),
	///     ],
	///     EdgeMode::Directed,
	/// )
	/// .unwrap();
	///
	/// let rate = ConsumptionRate::new(0.2).unwrap();
	/// let planner = RoutePlanner::new(&graph, rate, ResourceConfig::UNLIMITED).unwrap();
	///
	/// let route = planner.plan(1, 4).unwrap();
	/// assert_eq!(route.path, vec![1, 2, 4]);
	/// assert!((route.total_cost - 1.44).abs() < 1e-9);
	/// assert_eq!(route.total_distance, 25.0);
	/// ```
	///
	/// ## Errors
	/// - [`InvalidParameter`](crate::RouteError::InvalidParameter) if either id is unknown
	/// - [`NoPath`](crate::RouteError::NoPath) if `target` cannot be reached at all
	/// - [`InfeasiblePath`](crate::RouteError::InfeasiblePath) if every way to `target` runs flat
	pub fn plan(&self, source: NodeId, target: NodeId) -> Result<RouteReport> {
		let source_index = self
			.graph
			.index_of(source)
			.ok_or(ParameterError::UnknownSource(source))?;
		let target_index = self
			.graph
			.index_of(target)
			.ok_or(ParameterError::UnknownTarget(target))?;
		self.plan_indices(source_index, target_index)
	}

	/// Like [`plan`](Self::plan), defaulting to the first Node as source and the last Node as target
	pub fn plan_between(&self, source: Option<NodeId>, target: Option<NodeId>) -> Result<RouteReport> {
		let source = source.unwrap_or_else(|| self.graph.id(self.graph.first()));
		let target = target.unwrap_or_else(|| self.graph.id(self.graph.last()));
		self.plan(source, target)
	}

	/// Plans from the first to the last Node of the Graph
	pub fn plan_default(&self) -> Result<RouteReport> {
		self.plan_between(None, None)
	}

	fn plan_indices(&self, source: NodeIndex, target: NodeIndex) -> Result<RouteReport> {
		log::debug!(
			"planning {} -> {} on {} nodes / {} edges",
			self.graph.id(source),
			self.graph.id(target),
			self.graph.node_count(),
			self.graph.edge_count()
		);
		let feasibility = Feasibility::new(self.graph, self.rate, self.resources);
		let outcome = dijkstra_search(
			self.graph,
			self.rate,
			&feasibility,
			source,
			target,
			&self.config,
		)?;
		let report = build_report(self.graph, self.rate, &feasibility, outcome)?;
		log::debug!("planned {}", report);
		Ok(report)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Edge, EdgeMode, Node, ParameterError, Replenishment, RouteError};

	fn graph() -> Graph {
		Graph::new(
			vec![
				Node::new(7, "A", 0.1),
				Node::new(3, "B", 0.2),
				Node::new(5, "C", 0.3),
			],
			vec![Edge::new(7, 3, 1.0), Edge::new(3, 5, 1.0)],
			EdgeMode::Directed,
		)
		.unwrap()
	}

	#[test]
	fn defaults_to_first_and_last() {
		let graph = graph();
		let rate = ConsumptionRate::new(1.0).unwrap();
		let planner = RoutePlanner::new(&graph, rate, ResourceConfig::UNLIMITED).unwrap();

		assert_eq!(planner.plan_default().unwrap().path, vec![7, 3, 5]);
		assert_eq!(planner.plan_between(Some(3), None).unwrap().path, vec![3, 5]);
		assert_eq!(planner.plan_between(None, Some(3)).unwrap().path, vec![7, 3]);
	}

	#[test]
	fn unknown_endpoints() {
		let graph = graph();
		let rate = ConsumptionRate::new(1.0).unwrap();
		let planner = RoutePlanner::new(&graph, rate, ResourceConfig::UNLIMITED).unwrap();

		assert_eq!(
			planner.plan(1, 5).unwrap_err(),
			RouteError::InvalidParameter(ParameterError::UnknownSource(1))
		);
		assert_eq!(
			planner.plan(7, 1).unwrap_err(),
			RouteError::InvalidParameter(ParameterError::UnknownTarget(1))
		);
	}

	#[test]
	fn invalid_configuration() {
		let graph = graph();
		let rate = ConsumptionRate::new(1.0).unwrap();
		let battery = ResourceConfig::new(10.0, 20.0, Replenishment::None);
		assert!(matches!(
			RoutePlanner::new(&graph, rate, battery),
			Err(RouteError::InvalidParameter(ParameterError::Resource(_)))
		));

		let planner = RoutePlanner::new(&graph, rate, ResourceConfig::UNLIMITED).unwrap();
		let config = SearchConfig {
			max_relaxations: Some(0),
			..Default::default()
		};
		assert!(planner.with_config(config).is_err());
		assert_eq!(
			planner.with_config(SearchConfig::LARGE_GRAPH).unwrap().config(),
			&SearchConfig::LARGE_GRAPH
		);
	}
}
