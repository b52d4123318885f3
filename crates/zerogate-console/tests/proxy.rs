/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! End-to-end proxy tests against an in-process origin.

use axum::http::header;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use zerogate_console::proxy;

/// Origin that echoes enough of the request back to assert forwarding.
async fn spawn_origin() -> String {
    let app = Router::new()
        .route(
            "/api/v1/agents",
            get(|request: axum::extract::Request| async move {
                let query = request.uri().query().unwrap_or("").to_string();
                (
                    [
                        (header::CONTENT_ENCODING, "gzip"),
                        (header::HeaderName::from_static("x-origin"), "zerogate-test"),
                    ],
                    Json(json!({"query": query})),
                )
            }),
        )
        .route(
            "/api/v1/agents/echo",
            post(|Json(body): Json<Value>| async move { Json(json!({"received": body})) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_proxy(backend_url: &str) -> String {
    let app = proxy::router(backend_url);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_api_requests_pass_through_with_query() {
    let origin = spawn_origin().await;
    let proxy_url = spawn_proxy(&origin).await;

    let response = reqwest::get(format!("{}/api/v1/agents?limit=5", proxy_url))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("x-origin").unwrap(),
        "zerogate-test"
    );

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["query"], json!("limit=5"));
}

#[tokio::test]
async fn test_origin_framing_headers_are_stripped() {
    let origin = spawn_origin().await;
    let proxy_url = spawn_proxy(&origin).await;

    let response = reqwest::get(format!("{}/api/v1/agents", proxy_url))
        .await
        .unwrap();

    // The origin claimed gzip without compressing; relaying that header
    // would corrupt the response for downstream clients.
    assert!(response.headers().get(header::CONTENT_ENCODING.as_str()).is_none());
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["query"], json!(""));
}

#[tokio::test]
async fn test_request_bodies_are_forwarded() {
    let origin = spawn_origin().await;
    let proxy_url = spawn_proxy(&origin).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/v1/agents/echo", proxy_url))
        .json(&json!({"name": "edge-1"}))
        .send()
        .await
        .unwrap();

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["received"], json!({"name": "edge-1"}));
}

#[tokio::test]
async fn test_non_api_paths_get_404() {
    let origin = spawn_origin().await;
    let proxy_url = spawn_proxy(&origin).await;

    let response = reqwest::get(format!("{}/metrics", proxy_url)).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_dead_origin_yields_bad_gateway() {
    let proxy_url = spawn_proxy("http://127.0.0.1:1").await;

    let response = reqwest::get(format!("{}/api/v1/agents", proxy_url))
        .await
        .unwrap();
    assert_eq!(response.status(), 502);
}
