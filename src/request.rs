//! Self-contained route requests, as received from an external caller.
//!
//! With the `serde` feature the types below (de)serialize to the JSON shape of the ChargeRoute
//! HTTP API:
//! ```
//! # #[cfg(feature = "serde")] {
//! # use charge_route::request::{RouteRequest, RouteResponse};
//! let request: RouteRequest = serde_json::from_str(r#"{
//!     "nodes": [
//!         { "id": 1, "name": "Home", "cost_per_kwh": 0.0 },
//!         { "id": 2, "name": "Office", "cost_per_kwh": 0.3 }
//!     ],
//!     "edges": [{ "from": 1, "to": 2, "distance_km": 12.0 }],
//!     "vehicle": { "consumption_kwh_per_km": 0.2 }
//! }"#).unwrap();
//!
//! let response = RouteResponse::from(request.solve());
//! let json = serde_json::to_value(&response).unwrap();
//! assert_eq!(json["status"], "ok");
//! assert_eq!(json["optimal_path"], serde_json::json!([1, 2]));
//! # }
//! ```

use crate::{
	error::RouteError, ConsumptionRate, Edge, EdgeMode, Graph, Node, NodeId, Replenishment,
	ResourceConfig, RouteReport, RoutePlanner,
};

/// The vehicle driving a route
///
/// Percentages are taken as given: an `initial_soc_pct` or `min_soc_pct` outside `0..=100` is
/// not clamped, solving fails with [`RouteError::InvalidParameter`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
	/// energy used per unit of distance
	#[cfg_attr(feature = "serde", serde(rename = "consumption_kwh_per_km"))]
	pub consumption: f64,
	/// usable battery capacity. `None`: the state of charge is not tracked.
	#[cfg_attr(feature = "serde", serde(rename = "battery_kwh", default))]
	pub battery: Option<f64>,
	/// state of charge at the source in percent (defaults to `100`)
	#[cfg_attr(feature = "serde", serde(default))]
	pub initial_soc_pct: Option<f64>,
	/// the state of charge may not drop below this percentage (defaults to `0`)
	#[cfg_attr(feature = "serde", serde(default))]
	pub min_soc_pct: Option<f64>,
}

impl Vehicle {
	/// The battery model of this vehicle
	///
	/// ```
	/// # use charge_route::{request::Vehicle, Replenishment, ResourceConfig};
	/// let vehicle = Vehicle {
	///     consumption: 0.2,
	///     battery: Some(60.0),
	///     initial_soc_pct: Some(50.0),
	///     min_soc_pct: Some(10.0),
	/// };
	/// let battery = vehicle.resources(Replenishment::Full);
	/// assert_eq!(battery.initial, 30.0);
	/// assert_eq!(battery.minimum, 6.0);
	/// ```
	pub fn resources(&self, replenishment: Replenishment) -> ResourceConfig {
		match self.battery {
			None => ResourceConfig::UNLIMITED,
			Some(capacity) => ResourceConfig::from_percent(
				capacity,
				self.initial_soc_pct.unwrap_or(100.0),
				replenishment,
			)
			.with_minimum(self.min_soc_pct.unwrap_or(0.0) / 100.0 * capacity),
		}
	}
}

#[cfg(feature = "serde")]
fn directed() -> EdgeMode {
	EdgeMode::Directed
}

#[cfg(feature = "serde")]
fn no_replenishment() -> Replenishment {
	Replenishment::None
}

/// Everything needed to plan one route
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
	/// the Nodes of the Graph. The first and last one are the default endpoints.
	pub nodes: Vec<Node>,
	/// the Edges of the Graph
	pub edges: Vec<Edge>,
	/// the vehicle
	pub vehicle: Vehicle,
	/// what charging Nodes do. A request that leaves this out never charges.
	#[cfg_attr(feature = "serde", serde(default = "no_replenishment"))]
	pub replenishment: Replenishment,
	/// how `edges` are interpreted. A request that leaves this out is directed.
	#[cfg_attr(feature = "serde", serde(default = "directed"))]
	pub edge_mode: EdgeMode,
	/// start of the route (defaults to the first Node)
	#[cfg_attr(feature = "serde", serde(default))]
	pub source: Option<NodeId>,
	/// end of the route (defaults to the last Node)
	#[cfg_attr(feature = "serde", serde(default))]
	pub target: Option<NodeId>,
}

impl RouteRequest {
	/// Builds the Graph, validates the parameters and plans the route.
	///
	/// Every call works on its own copy of the Graph.
	pub fn solve(&self) -> Result<RouteReport, RouteError> {
		let graph = Graph::new(
			self.nodes.iter().cloned(),
			self.edges.iter().copied(),
			self.edge_mode,
		)?;
		let rate = ConsumptionRate::new(self.vehicle.consumption)?;
		let planner = RoutePlanner::new(&graph, rate, self.vehicle.resources(self.replenishment))?;
		planner.plan_between(self.source, self.target)
	}
}

/// Solves independent requests. In parallel if the `parallel` feature is enabled.
///
/// The results are in the same order as `requests`. A failing request does not affect the others.
pub fn solve_all(requests: &[RouteRequest]) -> Vec<Result<RouteReport, RouteError>> {
	#[cfg(feature = "parallel")]
	{
		use rayon::prelude::*;
		requests.par_iter().map(RouteRequest::solve).collect()
	}
	#[cfg(not(feature = "parallel"))]
	{
		requests.iter().map(RouteRequest::solve).collect()
	}
}

/// The outward-facing form of a [`RouteError`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorReport {
	/// stable identifier, see [`RouteError::code`]
	pub code: String,
	/// HTTP-style status, see [`RouteError::status`]
	pub http_status: u16,
	/// human readable description
	pub message: String,
}

impl From<&RouteError> for ErrorReport {
	fn from(err: &RouteError) -> ErrorReport {
		ErrorReport {
			code: err.code().to_owned(),
			http_status: err.status(),
			message: err.to_string(),
		}
	}
}

/// The answer to a [`RouteRequest`]. Serialized with a `"status": "ok" | "error"` tag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum RouteResponse {
	/// a route was found
	Ok(RouteReport),
	/// no route, and why
	Error(ErrorReport),
}

impl From<Result<RouteReport, RouteError>> for RouteResponse {
	fn from(result: Result<RouteReport, RouteError>) -> RouteResponse {
		match result {
			Ok(report) => RouteResponse::Ok(report),
			Err(err) => RouteResponse::Error(ErrorReport::from(&err)),
		}
	}
}
