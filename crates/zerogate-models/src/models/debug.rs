// src/models/debug.rs

//! Request and report types for the ad-hoc diagnostics endpoints.
//!
//! Diagnostics run on the backend; the console submits one request per run
//! and renders whatever report comes back. Field names match the backend's
//! JSON exactly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request for a reachability probe between two agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingRequest {
    pub source_agent_id: i64,
    pub dest_agent_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// One probe row in a ping report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingProbe {
    pub seq: u32,
    pub success: bool,
    pub latency: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingReport {
    pub source: String,
    pub destination: String,
    pub packets_sent: u32,
    pub packets_recv: u32,
    pub packet_loss: f64,
    pub avg_latency: f64,
    pub results: Vec<PingProbe>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortCheckRequest {
    pub source_agent_id: i64,
    pub dest_agent_id: i64,
    pub port: u16,
    pub protocol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortCheckReport {
    pub source: String,
    pub destination: String,
    pub port: u16,
    pub protocol: String,
    /// "open" or "closed".
    pub status: String,
    pub latency_ms: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracerouteRequest {
    pub source_agent_id: i64,
    pub dest_agent_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hops: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracerouteHop {
    pub hop: u32,
    pub ip: String,
    pub host: String,
    pub latency: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracerouteReport {
    pub source: String,
    pub destination: String,
    pub hops: Vec<TracerouteHop>,
    pub total_hops: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsLookupRequest {
    pub source_agent_id: i64,
    pub domain: String,
    pub record_type: String,
}

/// DNS report; on resolver failure the backend fills `error` instead of
/// `records`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsReport {
    pub domain: String,
    pub record_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub latency_ms: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpCheckRequest {
    pub source_agent_id: i64,
    pub url: String,
    pub method: String,
}

/// HTTP probe report. A transport-level failure is reported with
/// `status_code` 0 and the error text in `status_text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpCheckReport {
    pub url: String,
    pub method: String,
    pub status_code: u16,
    pub status_text: String,
    pub duration_ms: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_vpn: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_report_deserializes() {
        let report: PingReport = serde_json::from_str(
            r#"{
                "source": "Server (VPN Gateway)",
                "destination": "10.0.0.3",
                "packets_sent": 4,
                "packets_recv": 3,
                "packet_loss": 25.0,
                "avg_latency": 12.4,
                "results": [{"seq": 1, "success": true, "latency": 11}]
            }"#,
        )
        .unwrap();
        assert_eq!(report.packets_recv, 3);
        assert!(report.results[0].success);
    }

    #[test]
    fn test_dns_report_error_variant() {
        let report: DnsReport = serde_json::from_str(
            r#"{"domain":"nope.invalid","record_type":"A","error":"no such host","latency_ms":5}"#,
        )
        .unwrap();
        assert!(report.records.is_none());
        assert!(report.error.is_some());
    }

    #[test]
    fn test_http_report_failure_shape() {
        let report: HttpCheckReport = serde_json::from_str(
            r#"{"url":"http://10.0.0.9","method":"GET","status_code":0,"status_text":"Error: timeout","duration_ms":10000}"#,
        )
        .unwrap();
        assert_eq!(report.status_code, 0);
        assert!(report.headers.is_none());
    }
}
