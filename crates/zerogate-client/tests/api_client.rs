/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Client tests against an in-process stub control plane.
//!
//! The stub records every request it receives so tests can assert on the
//! exact wire shape the client emits, not just on what it parses back.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use zerogate_client::{ApiClient, AuditLogQuery};
use zerogate_models::models::agents::NewAgent;
use zerogate_models::models::policies::PolicyUpdate;

#[derive(Debug, Clone)]
struct Recorded {
    path: String,
    body: Option<Value>,
    bearer: Option<String>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

fn record(log: &Log, path: &str, headers: &HeaderMap, body: Option<Value>) {
    let bearer = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.to_string());
    log.lock().unwrap().push(Recorded {
        path: path.to_string(),
        body,
        bearer,
    });
}

fn stub_agent(id: i64) -> Value {
    json!({
        "id": id,
        "name": "edge-1",
        "ip": "10.77.0.2",
        "status": "online",
        "created_at": "2025-05-01T00:00:00Z",
        "updated_at": "2025-05-01T00:00:00Z"
    })
}

async fn spawn_stub() -> (String, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            "/api/v1/agents",
            post(
                |State(log): State<Log>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    record(&log, "/api/v1/agents", &headers, Some(body));
                    let mut agent = stub_agent(1);
                    agent["api_key"] = json!("zg_one_time_key");
                    Json(agent)
                },
            ),
        )
        .route(
            "/api/v1/agents/:id",
            get(
                |State(log): State<Log>,
                 Path(id): Path<i64>,
                 headers: HeaderMap| async move {
                    record(&log, &format!("/api/v1/agents/{}", id), &headers, None);
                    if id == 404 {
                        return (StatusCode::NOT_FOUND, "agent not found".to_string())
                            .into_response();
                    }
                    Json(stub_agent(id)).into_response()
                },
            ),
        )
        .route(
            "/api/v1/agents/:id/routes",
            put(
                |State(log): State<Log>,
                 Path(id): Path<i64>,
                 headers: HeaderMap,
                 Json(body): Json<Value>| async move {
                    let routes = body["routes"].clone();
                    record(
                        &log,
                        &format!("/api/v1/agents/{}/routes", id),
                        &headers,
                        Some(body),
                    );
                    let mut agent = stub_agent(id);
                    agent["routes"] = json!(serde_json::to_string(&routes).unwrap());
                    Json(agent)
                },
            ),
        )
        .route(
            "/api/v1/policies/:id",
            put(
                |State(log): State<Log>,
                 Path(id): Path<i64>,
                 headers: HeaderMap,
                 Json(body): Json<Value>| async move {
                    let enabled = body["enabled"].as_bool().unwrap_or(true);
                    record(
                        &log,
                        &format!("/api/v1/policies/{}", id),
                        &headers,
                        Some(body),
                    );
                    Json(json!({
                        "id": id,
                        "name": "web-to-db",
                        "description": "",
                        "source_group_id": 1,
                        "dest_group_id": 2,
                        "allowed_ports": "5432",
                        "action": "allow",
                        "enabled": enabled,
                        "created_at": "2025-05-01T00:00:00Z",
                        "updated_at": "2025-05-01T00:00:00Z"
                    }))
                },
            ),
        )
        .route(
            "/api/v1/audit-logs",
            get(
                |State(log): State<Log>,
                 Query(params): Query<HashMap<String, String>>,
                 headers: HeaderMap| async move {
                    record(
                        &log,
                        "/api/v1/audit-logs",
                        &headers,
                        Some(json!(params)),
                    );
                    Json(json!([]))
                },
            ),
        )
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), log)
}

#[tokio::test]
async fn test_create_agent_returns_assigned_ip_and_key() {
    let (base_url, log) = spawn_stub().await;
    let client = ApiClient::new(&base_url);

    let new_agent = NewAgent::new("edge-1".to_string(), None, Some(2)).unwrap();
    let agent = client.create_agent(&new_agent).await.unwrap();

    assert_eq!(agent.ip, "10.77.0.2");
    assert_eq!(agent.api_key.as_deref(), Some("zg_one_time_key"));

    let recorded = log.lock().unwrap();
    assert_eq!(
        recorded[0].body,
        Some(json!({"name": "edge-1", "group_id": 2}))
    );
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let (base_url, log) = spawn_stub().await;
    let client = ApiClient::new(&base_url).with_token("session-token");

    client.get_agent(1).await.unwrap();

    let recorded = log.lock().unwrap();
    assert_eq!(recorded[0].bearer.as_deref(), Some("session-token"));
}

#[tokio::test]
async fn test_enabled_toggle_sends_minimal_patch() {
    let (base_url, log) = spawn_stub().await;
    let client = ApiClient::new(&base_url);

    let policy = client
        .update_policy(4, &PolicyUpdate::set_enabled(false))
        .await
        .unwrap();

    assert!(!policy.enabled);
    let recorded = log.lock().unwrap();
    assert_eq!(recorded[0].body, Some(json!({"enabled": false})));
}

#[tokio::test]
async fn test_replace_routes_sends_whole_array() {
    let (base_url, log) = spawn_stub().await;
    let client = ApiClient::new(&base_url);

    let routes = vec!["192.168.1.0/24".to_string(), "10.1.0.0/16".to_string()];
    let agent = client.replace_routes(1, &routes).await.unwrap();

    assert_eq!(agent.routes(), routes);
    let recorded = log.lock().unwrap();
    assert_eq!(
        recorded[0].body,
        Some(json!({"routes": ["192.168.1.0/24", "10.1.0.0/16"]}))
    );
}

#[tokio::test]
async fn test_audit_query_parameters_reach_the_wire() {
    let (base_url, log) = spawn_stub().await;
    let client = ApiClient::new(&base_url);

    let query = AuditLogQuery {
        agent_id: Some(3),
        action: Some("key_regenerated".to_string()),
        limit: Some(25),
    };
    let logs = client.list_audit_logs(&query).await.unwrap();
    assert!(logs.is_empty());

    let recorded = log.lock().unwrap();
    assert_eq!(
        recorded[0].body,
        Some(json!({
            "agent_id": "3",
            "action": "key_regenerated",
            "limit": "25"
        }))
    );
}

#[tokio::test]
async fn test_error_carries_status_and_body_text() {
    let (base_url, _log) = spawn_stub().await;
    let client = ApiClient::new(&base_url);

    let err = client.get_agent(404).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("404"), "missing status in: {}", message);
    assert!(
        message.contains("agent not found"),
        "missing body in: {}",
        message
    );
}

#[tokio::test]
async fn test_get_agent_is_idempotent() {
    let (base_url, log) = spawn_stub().await;
    let client = ApiClient::new(&base_url);

    let first = client.get_agent(7).await.unwrap();
    let second = client.get_agent(7).await.unwrap();
    assert_eq!(first.id, second.id);

    let recorded = log.lock().unwrap();
    assert_eq!(recorded.len(), 2);
    assert!(recorded.iter().all(|r| r.path == "/api/v1/agents/7"));
}
