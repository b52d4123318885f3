/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Agent detail page against an in-process stateful backend.

use axum::extract::{Path, State};
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use zerogate_client::ApiClient;
use zerogate_console::agent_detail::AgentDetailState;

#[derive(Clone)]
struct Backend {
    services: Arc<Mutex<Vec<Value>>>,
    routes: Arc<Mutex<Vec<String>>>,
}

fn service(id: i64, name: &str, port: i32) -> Value {
    json!({
        "id": id,
        "agent_id": 1,
        "name": name,
        "description": "",
        "port": port,
        "protocol": "tcp",
        "enabled": true,
        "created_at": "2025-05-01T00:00:00Z",
        "updated_at": "2025-05-01T00:00:00Z"
    })
}

fn agent_json(routes: &[String]) -> Value {
    json!({
        "id": 1,
        "name": "edge-1",
        "ip": "10.77.0.2",
        "status": "online",
        "group_id": 5,
        "routes": serde_json::to_string(routes).unwrap(),
        "created_at": "2025-05-01T00:00:00Z",
        "updated_at": "2025-05-01T00:00:00Z"
    })
}

async fn spawn_backend() -> (String, Backend) {
    let backend = Backend {
        services: Arc::new(Mutex::new(vec![
            service(10, "web", 443),
            service(11, "postgres", 5432),
        ])),
        routes: Arc::new(Mutex::new(vec!["10.0.0.0/8".to_string()])),
    };

    let empty = get(|| async { Json(json!([])) });
    let app = Router::new()
        .route(
            "/api/v1/agents/:id",
            get(|State(backend): State<Backend>| async move {
                Json(agent_json(&backend.routes.lock().unwrap()))
            }),
        )
        .route(
            "/api/v1/agents/:id/routes",
            put(
                |State(backend): State<Backend>, Json(body): Json<Value>| async move {
                    let routes: Vec<String> =
                        serde_json::from_value(body["routes"].clone()).unwrap();
                    *backend.routes.lock().unwrap() = routes;
                    Json(agent_json(&backend.routes.lock().unwrap()))
                },
            ),
        )
        .route(
            "/api/v1/agents/:id/services",
            get(|State(backend): State<Backend>| async move {
                Json(Value::Array(backend.services.lock().unwrap().clone()))
            }),
        )
        .route(
            "/api/v1/agents/:id/services/:service_id",
            delete(
                |State(backend): State<Backend>, Path((_, service_id)): Path<(i64, i64)>| async move {
                    backend
                        .services
                        .lock()
                        .unwrap()
                        .retain(|s| s["id"] != json!(service_id));
                },
            ),
        )
        .route("/api/v1/agents/:id/audit-logs", empty.clone())
        .route("/api/v1/agents/:id/access-logs", empty.clone())
        .route("/api/v1/agents/:id/metrics", empty.clone())
        .route("/api/v1/groups", empty.clone())
        .route("/api/v1/policies", empty)
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), backend)
}

#[tokio::test]
async fn test_batch_refresh_loads_the_whole_page() {
    let (base_url, _) = spawn_backend().await;
    let client = ApiClient::new(&base_url);

    let mut state = AgentDetailState::new(1, 100);
    state.refresh(&client).await;

    assert!(state.notices.is_empty());
    assert_eq!(state.agent.as_ref().unwrap().name, "edge-1");
    assert_eq!(state.services.len(), 2);
    assert_eq!(state.routes, vec!["10.0.0.0/8".to_string()]);
}

#[tokio::test]
async fn test_removed_service_disappears_from_refetched_list() {
    let (base_url, _) = spawn_backend().await;
    let client = ApiClient::new(&base_url);

    let mut state = AgentDetailState::new(1, 100);
    state.refresh(&client).await;
    assert_eq!(state.services.len(), 2);

    state.remove_service(&client, 10).await;

    assert!(state.notices.is_empty());
    assert_eq!(state.services.len(), 1);
    assert_eq!(state.services[0].id, 11);
}

#[tokio::test]
async fn test_added_route_round_trips_through_refetch() {
    let (base_url, backend) = spawn_backend().await;
    let client = ApiClient::new(&base_url);

    let mut state = AgentDetailState::new(1, 100);
    state.refresh(&client).await;

    state.add_route(&client, "192.168.1.0/24").await;

    assert!(state.notices.is_empty());
    assert_eq!(
        state.routes,
        vec!["10.0.0.0/8".to_string(), "192.168.1.0/24".to_string()]
    );
    assert_eq!(backend.routes.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_removing_unknown_route_makes_no_backend_call() {
    let (base_url, backend) = spawn_backend().await;
    let client = ApiClient::new(&base_url);

    let mut state = AgentDetailState::new(1, 100);
    state.refresh(&client).await;

    state.remove_route(&client, "172.16.0.0/12").await;

    assert!(!state.notices.is_empty());
    assert_eq!(backend.routes.lock().unwrap().len(), 1);
}
