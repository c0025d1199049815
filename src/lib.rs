#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find the cheapest route between charging stations.
//!
//! ## Introduction
//! Planning a trip for an electric vehicle is a shortest path problem with a twist: every Edge of
//! the road network costs money, namely the energy used to drive it, bought at the price of the
//! station the Edge leads to. But the battery only holds so much, and an Edge that is cheap on
//! paper is useless if the vehicle cannot reach its end without running flat.
//!
//! This crate searches the cost graph with Dijkstra's Algorithm and tracks the state of charge
//! along every path it extends. Edges that would drain the battery below a minimum are never
//! relaxed, and arriving at a charging station may top the battery up again, following an
//! explicit [`Replenishment`] policy.
//!
//! The cost of an Edge is `distance × consumption × price(destination)`. Only cost is optimized;
//! travel time plays no role.
//!
//! ## Examples
//! Creating the Graph:
//! ```
//! use charge_route::prelude::*;
//!
//! let graph = Graph::new(
//!     vec![
//!         Node::new(1, "Home", 0.0),
//!         Node::new(2, "Mall", 0.30),
//!         Node::new(3, "Depot", 0.25),
//!         Node::new(4, "Office", 0.28),
//!     ],
//!     vec![
//!         Edge::new(1, 2, 10.0),
//!         Edge::new(2, 3, 10.0),
//!         Edge::new(3, 4, 10.0),
//!         Edge::new(1, 3, 25.0),
//!         Edge::new(2, 4, 15.0),
//!     ],
//!     EdgeMode::Directed,
//! )
//! .unwrap();
//! ```
//! The Graph is validated once and never changes afterwards. Edges referencing unknown Nodes,
//! negative distances or prices all fail with [`GraphError`].
//!
//! Whether Edges are one-way streets or can be driven both ways is stated explicitly with
//! [`EdgeMode`].
//!
//! ### Planning
//! Finding the cheapest route:
//! ```
//! # use charge_route::prelude::*;
//! #
//! # let graph = Graph::new(
//! #     vec![
//! #         Node::new(1, "Home", 0.0),
//! #         Node::new(2, "Mall", 0.30),
//! #         Node::new(3, "Depot", 0.25),
//! #         Node::new(4, "Office", 0.28),
//! #     ],
//! #     vec![
//! #         Edge::new(1, 2, 10.0),
//! #         Edge::new(2, 3, 10.0),
//! #         Edge::new(3, 4, 10.0),
//! #         Edge::new(1, 3, 25.0),
//! #         Edge::new(2, 4, 15.0),
//! #     ],
//! #     EdgeMode::Directed,
//! # )
//! # .unwrap();
//! #
//! let rate = ConsumptionRate::new(0.2).unwrap(); // kWh per km
//! let planner = RoutePlanner::new(&graph, rate, ResourceConfig::UNLIMITED).unwrap();
//!
//! let route = planner.plan(1, 4).unwrap();
//!
//! assert_eq!(route.path, vec![1, 2, 4]);
//! assert!((route.total_cost - 1.44).abs() < 1e-9);
//! assert_eq!(route.total_distance, 25.0);
//! ```
//! The returned [`RouteReport`] also contains the state of charge at every Node of the route and
//! a trace of all decisions the search made.
//!
//! ### The Battery
//! With a limited battery, the same request can fail:
//! ```
//! # use charge_route::prelude::*;
//! #
//! # let graph = Graph::new(
//! #     vec![
//! #         Node::new(1, "Home", 0.0),
//! #         Node::new(2, "Mall", 0.30),
//! #         Node::new(3, "Depot", 0.25),
//! #         Node::new(4, "Office", 0.28),
//! #     ],
//! #     vec![
//! #         Edge::new(1, 2, 10.0),
//! #         Edge::new(2, 3, 10.0),
//! #         Edge::new(3, 4, 10.0),
//! #         Edge::new(1, 3, 25.0),
//! #         Edge::new(2, 4, 15.0),
//! #     ],
//! #     EdgeMode::Directed,
//! # )
//! # .unwrap();
//! # let rate = ConsumptionRate::new(0.2).unwrap();
//! #
//! // 4 kWh battery, starting half full, no charging on the way
//! let battery = ResourceConfig::new(4.0, 2.0, Replenishment::None);
//! let planner = RoutePlanner::new(&graph, rate, battery).unwrap();
//!
//! assert_eq!(
//!     planner.plan(1, 4),
//!     Err(RouteError::InfeasiblePath { start: 1, target: 4 }),
//! );
//!
//! // charging to full at every station fixes that
//! let battery = ResourceConfig::new(4.0, 2.0, Replenishment::Full);
//! let planner = RoutePlanner::new(&graph, rate, battery).unwrap();
//!
//! let route = planner.plan(1, 4).unwrap();
//! assert_eq!(route.path, vec![1, 2, 4]);
//! assert_eq!(route.timeline[1].charged, Some(4.0));
//! ```
//! A target that cannot be reached at all, battery or not, fails with [`RouteError::NoPath`]
//! instead.
//!
//! ### Configuration
//! [`RoutePlanner::with_config`] takes a [`SearchConfig`] to choose between a linear scan
//! (default, best for small dense Graphs) and a binary heap for selecting the next path to extend, and to
//! turn the decision trace off.
//! ```
//! # use charge_route::prelude::*;
//! # let graph = Graph::new(vec![Node::new(1, "Home", 0.0)], vec![], EdgeMode::Directed).unwrap();
//! # let rate = ConsumptionRate::new(0.2).unwrap();
//! let planner = RoutePlanner::new(&graph, rate, ResourceConfig::UNLIMITED)
//!     .unwrap()
//!     .with_config(SearchConfig::LARGE_GRAPH)
//!     .unwrap();
//!
//! let route = planner.plan(1, 1).unwrap();
//! assert_eq!(route.path, vec![1]);
//! assert!(route.trace.is_empty());
//! ```
//!
//! ### Requests
//! The [`request`] Module bundles a Graph, a vehicle and the endpoints into one [`RouteRequest`]
//! that can be deserialized (with the default `serde` feature) and solved in one go.
//! [`request::solve_all`] solves many of them in parallel (with the default `parallel` feature).
//!
//! ## Logging
//! The crate logs through the [`log`](https://docs.rs/log) facade: one `debug` record per
//! planned route and per search, `trace` records for every relaxation.

/// The Type used to identify a Node
pub type NodeId = u32;

pub mod node_id;

pub mod graph;
pub use self::graph::{Edge, EdgeMode, Graph, Node};

mod cost;
pub use self::cost::{edge_cost, ConsumptionRate};

mod feasibility;
pub use self::feasibility::{Feasibility, Replenishment, ResourceConfig, Traversal, LEVEL_TOLERANCE};

mod config;
pub use self::config::{Frontier, SearchConfig};

pub mod search;
pub use self::search::Relaxation;

pub mod report;
pub use self::report::{ResourceStep, RouteReport};

mod planner;
pub use self::planner::RoutePlanner;

pub mod request;
pub use self::request::{RouteRequest, RouteResponse};

pub mod error;
pub use self::error::{GraphError, ParameterError, PathDefect, RouteError};

/// The most commonly used items
pub mod prelude {
	pub use crate::{
		ConsumptionRate, Edge, EdgeMode, Frontier, Graph, Node, NodeId, Replenishment,
		ResourceConfig, RouteError, RoutePlanner, RouteReport, SearchConfig,
	};
}
