// src/models/metrics.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A periodic sample of an agent's runtime counters.
///
/// The metrics endpoint returns newest-first; the console treats the head of
/// the list as the latest sample and performs no client-side sort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentMetrics {
    pub id: i64,
    pub agent_id: i64,
    pub heartbeat_latency_ms: i32,
    pub bytes_sent: i64,
    pub bytes_received: i64,
    pub active_connections: i32,
    pub failed_connections: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_usage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<f64>,
    pub created_at: DateTime<Utc>,
}
