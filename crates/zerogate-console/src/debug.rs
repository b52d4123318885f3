/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Diagnostics console state.
//!
//! One backend call per run; results accumulate in an ordered log of tagged
//! entries the user can clear. A new run is refused while one is still
//! outstanding.

use crate::notices::Notices;
use zerogate_client::ApiClient;
use zerogate_models::models::debug::{
    DnsLookupRequest, DnsReport, HttpCheckReport, HttpCheckRequest, PingReport, PingRequest,
    PortCheckReport, PortCheckRequest, TracerouteReport, TracerouteRequest,
};

#[derive(Debug, Clone)]
pub enum DebugEntry {
    Ping(PingReport),
    Port(PortCheckReport),
    Traceroute(TracerouteReport),
    Dns(DnsReport),
    Http(HttpCheckReport),
    Error(String),
}

#[derive(Debug, Default)]
pub struct DebugConsole {
    entries: Vec<DebugEntry>,
    in_flight: bool,
    pub notices: Notices,
}

impl DebugConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[DebugEntry] {
        &self.entries
    }

    pub fn is_running(&self) -> bool {
        self.in_flight
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub async fn run_ping(&mut self, client: &ApiClient, request: &PingRequest) {
        if !self.begin_run() {
            return;
        }
        let entry = match client.ping(request).await {
            Ok(report) => DebugEntry::Ping(report),
            Err(e) => DebugEntry::Error(e.to_string()),
        };
        self.finish_run(entry);
    }

    pub async fn run_port_check(&mut self, client: &ApiClient, request: &PortCheckRequest) {
        if !self.begin_run() {
            return;
        }
        let entry = match client.port_check(request).await {
            Ok(report) => DebugEntry::Port(report),
            Err(e) => DebugEntry::Error(e.to_string()),
        };
        self.finish_run(entry);
    }

    pub async fn run_traceroute(&mut self, client: &ApiClient, request: &TracerouteRequest) {
        if !self.begin_run() {
            return;
        }
        let entry = match client.traceroute(request).await {
            Ok(report) => DebugEntry::Traceroute(report),
            Err(e) => DebugEntry::Error(e.to_string()),
        };
        self.finish_run(entry);
    }

    pub async fn run_dns_lookup(&mut self, client: &ApiClient, request: &DnsLookupRequest) {
        if !self.begin_run() {
            return;
        }
        let entry = match client.dns_lookup(request).await {
            Ok(report) => DebugEntry::Dns(report),
            Err(e) => DebugEntry::Error(e.to_string()),
        };
        self.finish_run(entry);
    }

    pub async fn run_http_check(&mut self, client: &ApiClient, request: &HttpCheckRequest) {
        if !self.begin_run() {
            return;
        }
        let entry = match client.http_check(request).await {
            Ok(report) => DebugEntry::Http(report),
            Err(e) => DebugEntry::Error(e.to_string()),
        };
        self.finish_run(entry);
    }

    fn begin_run(&mut self) -> bool {
        if self.in_flight {
            self.notices.error("A diagnostic is already running");
            return false;
        }
        self.in_flight = true;
        true
    }

    fn finish_run(&mut self, entry: DebugEntry) {
        self.entries.push(entry);
        self.in_flight = false;
    }
}
