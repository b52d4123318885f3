/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Edge proxy relaying `/api/v1/*` to the control-plane origin.
//!
//! Any method passes through with its query string and body intact; paths
//! outside the API prefix get a 404. Response framing headers
//! (`content-encoding`, `content-length`, `transfer-encoding`) are stripped
//! so the local server frames the relayed body itself.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Router;
use zerogate_utils::config::Settings;
use zerogate_utils::logging::prelude::*;

const API_PREFIX: &str = "/api/v1/";

// Request headers owned by the local hop, never forwarded.
const HOP_REQUEST_HEADERS: [&str; 4] = ["host", "content-length", "transfer-encoding", "connection"];

// Response headers describing the origin's framing, dropped on relay.
const STRIPPED_RESPONSE_HEADERS: [&str; 3] =
    ["content-encoding", "content-length", "transfer-encoding"];

#[derive(Clone)]
struct ProxyState {
    http: reqwest::Client,
    backend_url: String,
}

/// Builds the proxy router for the given backend origin.
pub fn router(backend_url: &str) -> Router {
    let state = ProxyState {
        http: reqwest::Client::new(),
        backend_url: backend_url.trim_end_matches('/').to_string(),
    };
    Router::new().fallback(forward).with_state(state)
}

/// Binds the configured listen address and serves the proxy until the task
/// is cancelled.
pub async fn serve(settings: &Settings) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = router(&settings.proxy.backend_url);
    let listener = tokio::net::TcpListener::bind(&settings.proxy.listen_addr).await?;
    info!(
        "Edge proxy listening on {} -> {}",
        settings.proxy.listen_addr, settings.proxy.backend_url
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn forward(State(state): State<ProxyState>, request: Request) -> Response {
    let path = request.uri().path().to_string();
    if !path.starts_with(API_PREFIX) {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }

    let mut url = format!("{}{}", state.backend_url, path);
    if let Some(query) = request.uri().query() {
        url.push('?');
        url.push_str(query);
    }

    let method = match reqwest::Method::from_bytes(request.method().as_str().as_bytes()) {
        Ok(method) => method,
        Err(_) => return (StatusCode::METHOD_NOT_ALLOWED, "Bad method").into_response(),
    };

    let (parts, body) = request.into_parts();
    let body_bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read request body for {}: {}", path, e);
            return (StatusCode::BAD_REQUEST, "Bad request body").into_response();
        }
    };

    let mut outbound = state.http.request(method.clone(), &url);
    for (name, value) in parts.headers.iter() {
        if HOP_REQUEST_HEADERS.contains(&name.as_str()) {
            continue;
        }
        outbound = outbound.header(name.as_str(), value.as_bytes());
    }

    debug!("Proxying {} {}", method, url);
    let upstream = match outbound.body(body_bytes).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Proxy request to {} failed: {}", url, e);
            return (StatusCode::BAD_GATEWAY, format!("Upstream error: {}", e)).into_response();
        }
    };

    relay(upstream).await
}

async fn relay(upstream: reqwest::Response) -> Response {
    let status = StatusCode::from_u16(upstream.status().as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = Response::builder().status(status);
    for (name, value) in upstream.headers().iter() {
        if STRIPPED_RESPONSE_HEADERS.contains(&name.as_str()) {
            continue;
        }
        builder = builder.header(name.as_str(), value.as_bytes());
    }

    let body = upstream.bytes().await.unwrap_or_default();
    builder
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response())
}
