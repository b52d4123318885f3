// src/models/logs.rs

//! Audit and access log records.
//!
//! Both are append-only, generated by the backend; the console only reads
//! them. `AuditLog.details` is a JSON-encoded string on the wire and is
//! decoded through one central parse-or-default helper.

use crate::models::agents::Agent;
use crate::models::services::Service;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Well-known audit actions emitted by the backend. The field itself is
// free-form; these exist so console code does not scatter string literals.
pub const ACTION_CONNECTED: &str = "connected";
pub const ACTION_DISCONNECTED: &str = "disconnected";
pub const ACTION_KEY_REGENERATED: &str = "key_regenerated";
pub const ACTION_SERVICE_ADDED: &str = "service_added";
pub const ACTION_SERVICE_REMOVED: &str = "service_removed";
pub const ACTION_ROUTES_UPDATED: &str = "routes_updated";

/// An immutable audit event record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,
    pub action: String,
    /// JSON-encoded object; decode with [`AuditLog::details`].
    #[serde(default)]
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    /// Decodes `details` into a JSON object. A malformed or non-object value
    /// degrades to an empty map, never an error.
    pub fn details(&self) -> Map<String, Value> {
        match serde_json::from_str::<Value>(&self.details) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Outcome of an inter-agent connection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessAction {
    Allowed,
    Denied,
}

/// Record of an inter-agent connection attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessLog {
    pub id: i64,
    pub source_agent_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_agent: Option<Agent>,
    pub dest_agent_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_agent: Option<Agent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
    pub action: AccessAction,
    pub port: i32,
    pub protocol: String,
    pub bytes_sent: i64,
    pub bytes_received: i64,
    pub duration_ms: i64,
    pub created_at: DateTime<Utc>,
}
