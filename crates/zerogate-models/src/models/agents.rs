// src/models/agents.rs

use crate::models::groups::Group;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Connectivity status reported by the backend for an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Online,
    Offline,
}

/// A managed network endpoint registered with the control plane.
///
/// `api_key` is only populated on creation and key regeneration; subsequent
/// fetches omit it. `group` is a read-only projection the backend may or may
/// not join in; group membership is always mutated through `group_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    pub ip: String,
    pub status: AgentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    /// JSON-encoded array of CIDR strings, opaque on the wire. Use
    /// [`Agent::routes`] instead of decoding this per call site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Agent {
    /// Decodes the JSON-encoded `routes` field into an ordered list of CIDR
    /// strings. An absent or malformed value degrades to an empty list and
    /// never fails the caller.
    pub fn routes(&self) -> Vec<String> {
        self.routes
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }
}

/// Encodes a route list the way the backend stores it.
pub fn routes_to_json(routes: &[String]) -> String {
    serde_json::to_string(routes).unwrap_or_else(|_| "[]".to_string())
}

/// Request body for creating an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAgent {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
}

impl NewAgent {
    pub fn new(
        name: String,
        description: Option<String>,
        group_id: Option<i64>,
    ) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        Ok(NewAgent {
            name,
            description,
            group_id,
        })
    }
}

/// Partial update body for an agent; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
}

/// Body for the group-assignment endpoint. `group_id: None` detaches the
/// agent from its group, so the field is always serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignGroupRequest {
    pub group_id: Option<i64>,
}

/// Body for the whole-array route replacement endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesRequest {
    pub routes: Vec<String>,
}

/// Response of the key regeneration endpoint. The previous key is invalid
/// the moment this returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegeneratedKey {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
