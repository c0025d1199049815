//! Dijkstra's Algorithm over the cost graph, filtered by the state of charge.
//!
//! The search does not settle Nodes but labels: one label per way of reaching a Node, holding
//! the cost and battery level of that path. An Edge is only relaxed if the level of the label
//! being extended suffices to drive it, which makes feasibility a property of the path rather
//! than of the Graph. A Node keeps every label that no other label at the same Node beats in
//! both cost and level, so a more expensive path that arrives with more charge is still
//! extended when the cheaper one runs flat later on.
//!
//! With an unlimited battery all levels are equal, one label per Node survives and the search
//! is plain Dijkstra.

mod element;
use self::element::Element;

use crate::{
	config::{Frontier, SearchConfig},
	cost::{edge_cost, ConsumptionRate},
	error::RouteError,
	feasibility::Feasibility,
	graph::NodeIndex,
	Graph, NodeId,
};
use std::collections::BinaryHeap;

/// Index of a [`Label`] in [`SearchOutcome::labels`]
pub type LabelIndex = usize;

/// One improvement found by the search, recorded for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relaxation {
	/// the Node whose Edge was relaxed
	pub current: NodeId,
	/// the Node that was reached by a path not beaten by any known one
	pub next: NodeId,
	/// the cost of that path
	#[cfg_attr(feature = "serde", serde(rename = "newCost"))]
	pub cost: f64,
}

/// A path from the source, identified by its last Node and its predecessor label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
	/// the Node the path ends at
	pub node: NodeIndex,
	/// sum of the Edge costs along the path
	pub cost: f64,
	/// battery level after arriving (and replenishing) at `node`
	pub level: f64,
	/// the label this one extends. `None` only for the source.
	pub prev: Option<LabelIndex>,
}

/// The state left behind by a successful search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
	/// where the search started
	pub source: NodeIndex,
	/// the Node the search was looking for. Always reached.
	pub target: NodeIndex,
	/// every label ever created, including the ones dropped later
	pub labels: Vec<Label>,
	/// the cheapest label at `target`
	pub best: LabelIndex,
	/// every label that was created, in the order it happened. Empty if not recorded.
	pub trace: Vec<Relaxation>,
	/// number of Edges examined
	pub relaxations: usize,
	/// number of Edges skipped by the feasibility filter
	pub rejected: usize,
}

impl SearchOutcome {
	/// The cost of the best path, `f64::INFINITY` if `best` is not a label
	pub fn cost(&self) -> f64 {
		self.labels
			.get(self.best)
			.map_or(f64::INFINITY, |label| label.cost)
	}
}

enum Selector {
	Scan,
	Heap(BinaryHeap<Element>),
}

impl Selector {
	fn new(frontier: Frontier, node_count: usize) -> Selector {
		match frontier {
			Frontier::LinearScan => Selector::Scan,
			Frontier::BinaryHeap => Selector::Heap(BinaryHeap::with_capacity(node_count)),
		}
	}

	fn push(&mut self, element: Element) {
		if let Selector::Heap(heap) = self {
			heap.push(element);
		}
	}

	/// The open label with the smallest cost, ties broken by the lowest Node id
	fn pop(&mut self, graph: &Graph, labels: &[Label], open: &[bool]) -> Option<LabelIndex> {
		match self {
			Selector::Scan => {
				let mut best: Option<Element> = None;
				for (index, label) in labels.iter().enumerate() {
					if !open[index] {
						continue;
					}
					let candidate = Element {
						cost: label.cost,
						id: graph.id(label.node),
						label: index,
					};
					if best.map_or(true, |best| candidate.precedes(&best)) {
						best = Some(candidate);
					}
				}
				best.map(|element| element.label)
			}
			Selector::Heap(heap) => {
				while let Some(Element { label, .. }) = heap.pop() {
					// settled and dominated labels are skipped instead of removed
					if open[label] {
						return Some(label);
					}
				}
				None
			}
		}
	}
}

/// Searches the cheapest feasible path from `source` to `target`.
///
/// Labels are open from their creation until they are either settled, when selected with the
/// smallest cost among all open labels, or dropped, when a new label at the same Node is at
/// most as expensive and [dominates](Feasibility::dominates) its level. A new label that an
/// existing one already beats is never created. The search ends when the first label at
/// `target` is settled, or when no label is open.
///
/// ## Errors
/// - [`RouteError::NoPath`] if `target` is unreachable even when ignoring the state of charge
/// - [`RouteError::InfeasiblePath`] if `target` is reachable, but not without running flat
/// - [`RouteError::IterationLimit`] if more Edges are examined than the config allows
pub fn dijkstra_search(
	graph: &Graph,
	rate: ConsumptionRate,
	feasibility: &Feasibility,
	source: NodeIndex,
	target: NodeIndex,
	config: &SearchConfig,
) -> Result<SearchOutcome, RouteError> {
	let node_count = graph.node_count();
	let limit = config.relaxation_limit(node_count);
	let beats = |a: &Label, b: &Label| a.cost <= b.cost && feasibility.dominates(a.level, b.level);

	let mut labels = vec![Label {
		node: source,
		cost: 0.0,
		level: feasibility.initial_level(),
		prev: None,
	}];
	let mut open = vec![true];
	// per Node, the labels no other label beats
	let mut kept: Vec<Vec<LabelIndex>> = vec![vec![]; node_count];
	kept[source].push(0);

	let mut best = None;
	let mut trace = Vec::new();
	let mut relaxations = 0;
	let mut rejected = 0;
	let mut settled_count = 0;

	let mut frontier = Selector::new(config.frontier, node_count);
	frontier.push(Element {
		cost: 0.0,
		id: graph.id(source),
		label: 0,
	});

	while let Some(current) = frontier.pop(graph, &labels, &open) {
		open[current] = false;
		settled_count += 1;
		let from = labels[current];
		if from.node == target {
			best = Some(current);
			break;
		}

		for (_, edge) in graph.neighbors(from.node) {
			let next = edge.target;
			relaxations += 1;
			if relaxations > limit {
				log::warn!("search exceeded {} relaxations", limit);
				return Err(RouteError::IterationLimit { limit });
			}

			let traversal = feasibility.can_traverse(from.level, edge);
			if !traversal.feasible {
				rejected += 1;
				log::trace!(
					"{} -> {} rejected: arrival level {}",
					graph.id(from.node),
					graph.id(next),
					traversal.arrival
				);
				continue;
			}

			let candidate = Label {
				node: next,
				cost: from.cost + edge_cost(graph, edge, rate),
				level: traversal.level,
				prev: Some(current),
			};
			if kept[next].iter().any(|&other| beats(&labels[other], &candidate)) {
				continue;
			}
			// settled labels are never dropped
			kept[next].retain(|&other| {
				let dropped = open[other] && beats(&candidate, &labels[other]);
				if dropped {
					open[other] = false;
				}
				!dropped
			});

			log::trace!(
				"{} -> {} reached for {} with level {}",
				graph.id(from.node),
				graph.id(next),
				candidate.cost,
				candidate.level
			);
			if config.record_trace {
				trace.push(Relaxation {
					current: graph.id(from.node),
					next: graph.id(next),
					cost: candidate.cost,
				});
			}

			let index = labels.len();
			labels.push(candidate);
			open.push(true);
			kept[next].push(index);
			frontier.push(Element {
				cost: candidate.cost,
				id: graph.id(next),
				label: index,
			});
		}
	}

	log::debug!(
		"search {} -> {}: settled {} of {} labels at {} nodes, {} relaxations, {} rejected",
		graph.id(source),
		graph.id(target),
		settled_count,
		labels.len(),
		node_count,
		relaxations,
		rejected
	);

	let best = match best {
		Some(best) => best,
		None => {
			let (start, target_id) = (graph.id(source), graph.id(target));
			return Err(if rejected > 0 && reachable(graph, source, target) {
				RouteError::InfeasiblePath {
					start,
					target: target_id,
				}
			} else {
				RouteError::NoPath {
					start,
					target: target_id,
				}
			});
		}
	};

	Ok(SearchOutcome {
		source,
		target,
		labels,
		best,
		trace,
		relaxations,
		rejected,
	})
}

/// `true` if `target` can be reached from `source` at all, ignoring costs and charge
pub fn reachable(graph: &Graph, source: NodeIndex, target: NodeIndex) -> bool {
	let mut seen = vec![false; graph.node_count()];
	let mut stack = vec![source];
	seen[source] = true;
	while let Some(current) = stack.pop() {
		if current == target {
			return true;
		}
		for (_, edge) in graph.neighbors(current) {
			if !seen[edge.target] {
				seen[edge.target] = true;
				stack.push(edge.target);
			}
		}
	}
	false
}
