use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use env_logger::Env;
use nanorand::{Rng, WyRand};

use charge_route::prelude::*;
use charge_route::request::{solve_all, RouteRequest, Vehicle};

/// A random road network: every Node connects to up to `degree` random others.
fn random_network(node_count: u32, degree: u32, seed: u64) -> (Vec<Node>, Vec<Edge>) {
    let mut rng = WyRand::new_seed(seed);
    let nodes = (1..=node_count)
        .map(|id| {
            let cents: u32 = rng.generate_range(0..60);
            Node::new(id, format!("Station {}", id), cents as f64 / 100.0)
        })
        .collect();

    let mut seen = std::collections::HashSet::new();
    let mut edges = Vec::with_capacity((node_count * degree) as usize);
    for from in 1..=node_count {
        // a chain through all Nodes keeps everything reachable
        if from < node_count {
            seen.insert((from, from + 1));
            edges.push(Edge::new(from, from + 1, 5.0));
        }
        for _ in 0..degree {
            let to: u32 = rng.generate_range(1..=node_count);
            // unordered, so the network also works undirected
            if to != from && seen.insert((from.min(to), from.max(to))) {
                let km: u32 = rng.generate_range(1..80);
                edges.push(Edge::new(from, to, km as f64));
            }
        }
    }
    (nodes, edges)
}

// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "warn")
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("Plan Route");
    init();

    let rate = ConsumptionRate::new(0.2).unwrap();
    let battery = ResourceConfig::new(60.0, 48.0, Replenishment::Full);

    for node_count in [64, 512, 4096] {
        let (nodes, edges) = random_network(node_count, 4, 4);
        let graph = Graph::new(nodes, edges, EdgeMode::Undirected).unwrap();

        for frontier in [Frontier::LinearScan, Frontier::BinaryHeap] {
            let planner = RoutePlanner::new(&graph, rate, battery)
                .unwrap()
                .with_config(SearchConfig {
                    frontier,
                    record_trace: false,
                    ..Default::default()
                })
                .unwrap();

            let id = BenchmarkId::new(format!("{:?}", frontier), node_count);
            group.bench_with_input(id, &planner, |b, planner| {
                b.iter(|| planner.plan_default())
            });
        }
    }
}

fn bench_requests(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solve Requests");
    group.sample_size(10);

    let requests: Vec<RouteRequest> = (0..64)
        .map(|seed| {
            let (nodes, edges) = random_network(256, 4, seed);
            RouteRequest {
                nodes,
                edges,
                vehicle: Vehicle {
                    consumption: 0.2,
                    battery: Some(60.0),
                    initial_soc_pct: Some(80.0),
                    min_soc_pct: Some(10.0),
                },
                replenishment: Replenishment::Full,
                edge_mode: EdgeMode::Directed,
                source: None,
                target: None,
            }
        })
        .collect();

    #[cfg(feature = "parallel")]
    let id = "64 requests, Parallel";
    #[cfg(not(feature = "parallel"))]
    let id = "64 requests, Single Threaded";

    group.bench_function(id, |b| b.iter(|| solve_all(&requests)));
}

criterion_group!(benches, bench_plan, bench_requests);
criterion_main!(benches);
