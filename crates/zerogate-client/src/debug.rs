/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Ad-hoc diagnostics. Each call issues exactly one backend run.

use crate::client::{ApiClient, Result};
use reqwest::Method;
use zerogate_models::models::debug::{
    DnsLookupRequest, DnsReport, HttpCheckReport, HttpCheckRequest, PingReport, PingRequest,
    PortCheckReport, PortCheckRequest, TracerouteReport, TracerouteRequest,
};

impl ApiClient {
    pub async fn ping(&self, request: &PingRequest) -> Result<PingReport> {
        self.request(
            Method::POST,
            "/api/v1/debug/ping",
            Some(serde_json::to_value(request)?),
        )
        .await
    }

    pub async fn port_check(&self, request: &PortCheckRequest) -> Result<PortCheckReport> {
        self.request(
            Method::POST,
            "/api/v1/debug/port-check",
            Some(serde_json::to_value(request)?),
        )
        .await
    }

    pub async fn traceroute(&self, request: &TracerouteRequest) -> Result<TracerouteReport> {
        self.request(
            Method::POST,
            "/api/v1/debug/traceroute",
            Some(serde_json::to_value(request)?),
        )
        .await
    }

    pub async fn dns_lookup(&self, request: &DnsLookupRequest) -> Result<DnsReport> {
        self.request(
            Method::POST,
            "/api/v1/debug/dns",
            Some(serde_json::to_value(request)?),
        )
        .await
    }

    pub async fn http_check(&self, request: &HttpCheckRequest) -> Result<HttpCheckReport> {
        self.request(
            Method::POST,
            "/api/v1/debug/http",
            Some(serde_json::to_value(request)?),
        )
        .await
    }
}
