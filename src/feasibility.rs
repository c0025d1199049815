//! Tracking the state of charge along a path.
//!
//! Levels are measured in energy units, the same unit [`ConsumptionRate::energy`] produces.
//! Driving along an Edge depletes the level; arriving at a charging Node may replenish it,
//! according to the configured [`Replenishment`] policy.

use crate::{cost::ConsumptionRate, error::ParameterError, graph::GraphEdge, Graph};

/// Slack allowed below the minimum level before a traversal counts as infeasible.
///
/// Absorbs rounding noise of repeated subtraction.
pub const LEVEL_TOLERANCE: f64 = 1e-9;

/// What happens to the state of charge when arriving at a charging Node.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "policy", rename_all = "snake_case"))]
pub enum Replenishment {
	/// the level is never raised
	None,
	/// the level is raised to the full capacity
	Full,
	/// when arriving with less than `below × capacity`, the level is raised to
	/// `target × capacity`. Both are fractions in `0.0..=1.0`.
	Threshold {
		/// fraction of the capacity under which charging starts
		below: f64,
		/// fraction of the capacity charged up to
		target: f64,
	},
}

impl Replenishment {
	/// A typical charging stop: below 20%, charge up to 80%.
	pub const TWENTY_EIGHTY: Replenishment = Replenishment::Threshold {
		below: 0.2,
		target: 0.8,
	};

	/// The level after arriving with `level` at a charging Node. Never lower than `level`.
	pub fn apply(self, level: f64, capacity: f64) -> f64 {
		match self {
			Replenishment::None => level,
			Replenishment::Full => capacity.max(level),
			Replenishment::Threshold { below, target } => {
				if level < below * capacity {
					(target * capacity).max(level)
				} else {
					level
				}
			}
		}
	}

	/// `true` if every continuation that is feasible starting with `other` is also feasible
	/// starting with `level`, and reaches every charging Node with at least as much charge.
	///
	/// A higher level always wins unless the policy charges low levels past higher ones: a
	/// [`Threshold`](Replenishment::Threshold) with `target > below` may raise a nearly empty
	/// battery above one that was just too full to be charged. Then only equal levels, or levels
	/// that are both still under the threshold, compare.
	///
	/// ```
	/// # use charge_route::Replenishment;
	/// assert!(Replenishment::None.dominates(8.0, 2.0, 10.0));
	/// assert!(!Replenishment::TWENTY_EIGHTY.dominates(8.0, 2.0, 10.0));
	/// assert!(Replenishment::TWENTY_EIGHTY.dominates(1.5, 1.0, 10.0));
	/// ```
	pub fn dominates(self, level: f64, other: f64, capacity: f64) -> bool {
		match self {
			Replenishment::Threshold { below, target } if target > below => {
				level == other || (other <= level && level < below * capacity)
			}
			_ => other <= level,
		}
	}
}

/// Options describing the battery of one computation
///
/// Default options are [`ResourceConfig::UNLIMITED`]:
/// ```
/// # use charge_route::{ResourceConfig, Replenishment};
/// assert_eq!(
/// 	ResourceConfig {
/// 		capacity: f64::INFINITY,
/// 		initial: f64::INFINITY,
/// 		minimum: 0.0,
/// 		replenishment: Replenishment::None,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResourceConfig {
	/// The most energy the battery can hold. May be infinite.
	pub capacity: f64,
	/// The level at the source Node
	pub initial: f64,
	/// The level may never drop below this. Checked on arrival, before replenishment.
	pub minimum: f64,
	/// What charging Nodes do to the level
	pub replenishment: Replenishment,
}

impl ResourceConfig {
	/// A battery that never runs out. Every Edge is feasible.
	pub const UNLIMITED: ResourceConfig = ResourceConfig {
		capacity: f64::INFINITY,
		initial: f64::INFINITY,
		minimum: 0.0,
		replenishment: Replenishment::None,
	};

	/// A battery of `capacity` starting at `initial`, allowed to drain down to zero.
	pub fn new(capacity: f64, initial: f64, replenishment: Replenishment) -> ResourceConfig {
		ResourceConfig {
			capacity,
			initial,
			minimum: 0.0,
			replenishment,
		}
	}

	/// Like [`new`](Self::new), with the initial level given in percent of the capacity.
	///
	/// ```
	/// # use charge_route::{ResourceConfig, Replenishment};
	/// let config = ResourceConfig::from_percent(60.0, 75.0, Replenishment::Full);
	/// assert_eq!(config.initial, 45.0);
	/// ```
	pub fn from_percent(capacity: f64, initial_pct: f64, replenishment: Replenishment) -> ResourceConfig {
		ResourceConfig::new(capacity, initial_pct / 100.0 * capacity, replenishment)
	}

	/// Sets the minimum level
	pub fn with_minimum(self, minimum: f64) -> ResourceConfig {
		ResourceConfig { minimum, ..self }
	}

	/// `true` if no Edge can ever be infeasible
	pub fn is_unlimited(&self) -> bool {
		self.initial == f64::INFINITY && self.capacity == f64::INFINITY
	}

	/// Checks that all values are within range
	pub fn validate(&self) -> Result<(), ParameterError> {
		// `!(x > 0.0)` instead of `x <= 0.0` to also catch NaN
		if !(self.capacity > 0.0) {
			return Err(ParameterError::Resource("capacity must be > 0"));
		}
		if !(0.0..=self.capacity).contains(&self.initial) {
			return Err(ParameterError::Resource(
				"initial level must be between 0 and the capacity",
			));
		}
		if !self.minimum.is_finite() || !(0.0..=self.capacity).contains(&self.minimum) {
			return Err(ParameterError::Resource(
				"minimum level must be finite and between 0 and the capacity",
			));
		}
		if let Replenishment::Threshold { below, target } = self.replenishment {
			let unit = 0.0..=1.0;
			if !unit.contains(&below) || !unit.contains(&target) {
				return Err(ParameterError::Resource(
					"replenishment thresholds must be fractions between 0 and 1",
				));
			}
		}
		Ok(())
	}
}

impl Default for ResourceConfig {
	fn default() -> ResourceConfig {
		ResourceConfig::UNLIMITED
	}
}

/// The result of driving along one Edge with a given level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Traversal {
	/// `false` if the level would drop below the minimum
	pub feasible: bool,
	/// level on arrival, before any replenishment
	pub arrival: f64,
	/// level after replenishment. Equal to `arrival` if nothing was charged.
	pub level: f64,
	/// energy added at the destination
	pub charged: f64,
}

/// Decides whether an Edge can be driven with the charge accumulated along a specific path.
#[derive(Clone, Copy, Debug)]
pub struct Feasibility<'a> {
	graph: &'a Graph,
	rate: ConsumptionRate,
	resources: ResourceConfig,
}

impl<'a> Feasibility<'a> {
	/// Creates the filter for one computation. `resources` must already be validated.
	pub fn new(graph: &'a Graph, rate: ConsumptionRate, resources: ResourceConfig) -> Feasibility<'a> {
		Feasibility {
			graph,
			rate,
			resources,
		}
	}

	/// The level at the source Node
	pub fn initial_level(&self) -> f64 {
		self.resources.initial
	}

	/// The battery this filter models
	pub fn resources(&self) -> &ResourceConfig {
		&self.resources
	}

	/// `true` if a path holding `level` can go anywhere a path holding `other` can.
	/// See [`Replenishment::dominates`].
	pub fn dominates(&self, level: f64, other: f64) -> bool {
		self.resources
			.replenishment
			.dominates(level, other, self.resources.capacity)
	}

	/// Drives along `edge`, starting with `level` at its source Node.
	///
	/// ## Examples
	/// ```
	/// use charge_route::*;
	///
	/// let graph = Graph::new(
	///     vec![Node::new(1, "A", 0.3), Node::new(2, "B", 0.3)],
	///     vec![Edge::new(1, 2, 50.0)],
	///     EdgeMode::Directed,
	/// )
	/// .unwrap();
	/// let rate = ConsumptionRate::new(0.2).unwrap();
	/// let battery = ResourceConfig::new(40.0, 12.0, Replenishment::Full);
	/// let filter = Feasibility::new(&graph, rate, battery);
	///
	/// let step = filter.can_traverse(12.0, graph.edge(0));
	/// assert!(step.feasible);
	/// assert_eq!(step.arrival, 2.0);
	/// assert_eq!(step.level, 40.0);
	///
	/// assert!(!filter.can_traverse(9.0, graph.edge(0)).feasible);
	/// ```
	pub fn can_traverse(&self, level: f64, edge: &GraphEdge) -> Traversal {
		let arrival = level - self.rate.energy(edge.distance);
		if arrival + LEVEL_TOLERANCE < self.resources.minimum {
			return Traversal {
				feasible: false,
				arrival,
				level: arrival,
				charged: 0.0,
			};
		}

		let refilled = if self.graph.node(edge.target).charging {
			self.resources
				.replenishment
				.apply(arrival, self.resources.capacity)
		} else {
			arrival
		};
		Traversal {
			feasible: true,
			arrival,
			level: refilled,
			charged: if refilled > arrival {
				refilled - arrival
			} else {
				0.0
			},
		}
	}
}
