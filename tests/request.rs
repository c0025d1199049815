#![cfg(feature = "serde")]

use charge_route::request::{solve_all, RouteRequest, RouteResponse};
use charge_route::{EdgeMode, Replenishment};
use serde_json::{json, Value};

fn sample() -> Value {
    json!({
        "nodes": [
            { "id": 1, "name": "Start", "lat": 52.52, "lon": 13.40, "cost_per_kwh": 0.0 },
            { "id": 2, "name": "B", "lat": 52.53, "lon": 13.45, "cost_per_kwh": 0.30 },
            { "id": 3, "name": "C", "lat": 52.50, "lon": 13.50, "cost_per_kwh": 0.25 },
            { "id": 4, "name": "End", "lat": 52.48, "lon": 13.55, "cost_per_kwh": 0.28 }
        ],
        "edges": [
            { "from": 1, "to": 2, "distance_km": 10 },
            { "from": 2, "to": 3, "distance_km": 10 },
            { "from": 3, "to": 4, "distance_km": 10 },
            { "from": 1, "to": 3, "distance_km": 25 },
            { "from": 2, "to": 4, "distance_km": 15 }
        ],
        "vehicle": {
            "battery_kwh": 60,
            "initial_soc_pct": 80,
            "consumption_kwh_per_km": 0.2
        },
        "optimization": "cost"
    })
}

fn respond(request: Value) -> Value {
    let request: RouteRequest = serde_json::from_value(request).unwrap();
    serde_json::to_value(RouteResponse::from(request.solve())).unwrap()
}

#[test]
fn sample_payload() {
    let _ = env_logger::builder().is_test(true).try_init();
    let request: RouteRequest = serde_json::from_value(sample()).unwrap();
    assert_eq!(request.edge_mode, EdgeMode::Directed);
    assert_eq!(request.replenishment, Replenishment::None);
    assert!(request.nodes.iter().all(|node| node.charging));

    let response = respond(sample());
    assert_eq!(response["status"], "ok");
    assert_eq!(response["optimal_path"], json!([1, 2, 4]));
    assert_eq!(response["total_distance_km"], 25.0);
    let cost = response["total_cost"].as_f64().unwrap();
    assert!((cost - 1.44).abs() < 1e-9);

    // soc in percent of the 60 kWh battery, soc_kwh in energy
    let timeline = response["soc_timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline[0]["node"], 1);
    assert_eq!(timeline[0]["soc"], 80.0);
    assert_eq!(timeline[0]["soc_kwh"], 48.0);
    assert!(timeline[0].get("charged_kwh").is_none());
    let second = timeline[1]["soc"].as_f64().unwrap();
    assert!((second - 76.666_666_666).abs() < 1e-6);
    let last = timeline[2]["soc"].as_f64().unwrap();
    assert!((last - 71.666_666_666).abs() < 1e-6);
    let last = timeline[2]["soc_kwh"].as_f64().unwrap();
    assert!((last - 43.0).abs() < 1e-9);

    let first_step = &response["debug_steps"][0];
    assert_eq!(first_step["current"], 1);
    assert_eq!(first_step["next"], 2);
    assert!((first_step["newCost"].as_f64().unwrap() - 0.6).abs() < 1e-9);
}

#[test]
fn unconstrained_vehicle() {
    let mut request = sample();
    request["vehicle"] = json!({ "consumption_kwh_per_km": 0.2 });

    let response = respond(request);
    assert_eq!(response["status"], "ok");
    assert_eq!(response["soc_timeline"][1]["soc"], Value::Null);
    assert_eq!(response["soc_timeline"][1]["soc_kwh"], Value::Null);
}

#[test]
fn percentages_are_not_clamped() {
    for (field, value) in [("initial_soc_pct", 120.0), ("initial_soc_pct", -5.0), ("min_soc_pct", 150.0)] {
        let mut request = sample();
        request["vehicle"][field] = json!(value);
        let response = respond(request);
        assert_eq!(response["code"], "invalid_parameter", "{} = {}", field, value);
        assert_eq!(response["http_status"], 400);
    }
}

#[test]
fn malformed_graph() {
    let mut request = sample();
    request["edges"][1]["to"] = json!(99);

    let response = respond(request);
    assert_eq!(response["status"], "error");
    assert_eq!(response["code"], "malformed_graph");
    assert_eq!(response["http_status"], 400);
    assert!(response["message"].as_str().unwrap().contains("99"));
}

#[test]
fn explicit_endpoints_and_policy() {
    let mut request = sample();
    request["source"] = json!(4);
    request["target"] = json!(1);
    request["edge_mode"] = json!("undirected");
    request["replenishment"] = json!({ "policy": "threshold", "below": 0.2, "target": 0.8 });

    let parsed: RouteRequest = serde_json::from_value(request.clone()).unwrap();
    assert_eq!(parsed.replenishment, Replenishment::TWENTY_EIGHTY);

    let response = respond(request);
    assert_eq!(response["status"], "ok");
    assert_eq!(response["optimal_path"], json!([4, 3, 1]));
}

#[test]
fn infeasible_and_missing() {
    let mut request = sample();
    request["vehicle"]["initial_soc_pct"] = json!(5);
    let response = respond(request);
    assert_eq!(response["code"], "infeasible_path");
    assert_eq!(response["http_status"], 422);

    let mut request = sample();
    request["source"] = json!(4);
    request["target"] = json!(1);
    let response = respond(request);
    assert_eq!(response["code"], "no_path");
    assert_eq!(response["http_status"], 404);

    let mut request = sample();
    request["vehicle"]["consumption_kwh_per_km"] = json!(0);
    let response = respond(request);
    assert_eq!(response["code"], "invalid_parameter");
}

#[test]
fn responses_parse_back() {
    let response = respond(sample());
    let parsed: RouteResponse = serde_json::from_value(response).unwrap();
    match parsed {
        RouteResponse::Ok(report) => assert_eq!(report.path, vec![1, 2, 4]),
        RouteResponse::Error(err) => panic!("unexpected error {:?}", err),
    }
}

#[test]
fn batches() {
    let requests: Vec<RouteRequest> = (0..16)
        .map(|i| {
            let mut request = sample();
            if i % 4 == 0 {
                request["source"] = json!(4);
                request["target"] = json!(1);
            }
            serde_json::from_value(request).unwrap()
        })
        .collect();

    let results = solve_all(&requests);
    assert_eq!(results.len(), 16);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.is_err(), i % 4 == 0, "request {}", i);
    }
}
