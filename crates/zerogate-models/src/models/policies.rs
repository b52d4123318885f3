// src/models/policies.rs

use crate::models::groups::Group;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether matched traffic is permitted or blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAction {
    Allow,
    Deny,
}

/// A directional access rule between two groups, with optional Zero-Trust
/// constraints (validity window, region list, minimum posture score).
///
/// The console only evaluates group membership and the `enabled` flag; the
/// time/region/posture constraints are enforced by the backend at traffic
/// time and are carried here purely as contract fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub source_group_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_group: Option<Group>,
    pub dest_group_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_group: Option<Group>,
    /// Comma-separated port list, or `*` for all ports.
    pub allowed_ports: String,
    pub action: PolicyAction,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    /// Comma-separated country codes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_regions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_posture_score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a policy with the full constraint set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPolicy {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source_group_id: i64,
    pub dest_group_id: i64,
    pub allowed_ports: String,
    pub action: PolicyAction,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_regions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_posture_score: Option<i32>,
}

impl NewPolicy {
    pub fn new(
        name: String,
        source_group_id: i64,
        dest_group_id: i64,
        allowed_ports: String,
        action: PolicyAction,
    ) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if source_group_id == 0 || dest_group_id == 0 {
            return Err("Source and destination groups are required".to_string());
        }
        Ok(NewPolicy {
            name,
            description: None,
            source_group_id,
            dest_group_id,
            allowed_ports,
            action,
            enabled: true,
            valid_from: None,
            valid_until: None,
            allowed_regions: None,
            min_posture_score: None,
        })
    }
}

/// Partial update body for a policy.
///
/// `enabled` is always serialized when set so the list-view toggle can turn
/// a policy off; every other unset field is left out of the patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_ports: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<PolicyAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_regions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_posture_score: Option<i32>,
}

impl PolicyUpdate {
    /// Patch that flips only the `enabled` flag.
    pub fn set_enabled(enabled: bool) -> Self {
        PolicyUpdate {
            enabled: Some(enabled),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_policy_success() {
        let policy = NewPolicy::new(
            "web-to-db".to_string(),
            1,
            2,
            "5432".to_string(),
            PolicyAction::Allow,
        )
        .unwrap();
        assert!(policy.enabled);
        assert_eq!(policy.action, PolicyAction::Allow);
    }

    #[test]
    fn test_new_policy_requires_groups() {
        let result = NewPolicy::new(
            "p".to_string(),
            0,
            2,
            "*".to_string(),
            PolicyAction::Deny,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_policy_empty_name() {
        let result = NewPolicy::new(
            " ".to_string(),
            1,
            2,
            "*".to_string(),
            PolicyAction::Allow,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_enabled_toggle_patch_is_minimal() {
        let patch = PolicyUpdate::set_enabled(false);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"enabled": false}));
    }

    #[test]
    fn test_policy_action_wire_format() {
        assert_eq!(
            serde_json::to_string(&PolicyAction::Deny).unwrap(),
            "\"deny\""
        );
    }

    #[test]
    fn test_policy_deserializes_with_constraints() {
        let policy: Policy = serde_json::from_str(
            r#"{
                "id": 4,
                "name": "office-hours",
                "description": "",
                "source_group_id": 1,
                "dest_group_id": 2,
                "allowed_ports": "443,8443",
                "action": "allow",
                "enabled": true,
                "valid_from": "2025-05-01T09:00:00Z",
                "valid_until": "2025-05-01T17:00:00Z",
                "allowed_regions": "US,DE",
                "min_posture_score": 70,
                "created_at": "2025-05-01T00:00:00Z",
                "updated_at": "2025-05-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(policy.min_posture_score, Some(70));
        assert_eq!(policy.allowed_regions.as_deref(), Some("US,DE"));
    }
}
