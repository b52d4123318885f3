// src/models/posture.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-agent security posture snapshot.
///
/// Collected out-of-band by the agent heartbeat; referenced by
/// `Policy::min_posture_score`. The console models it for contract
/// completeness but no view renders it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevicePosture {
    pub id: i64,
    pub agent_id: i64,
    pub os_name: String,
    pub os_version: String,
    pub hostname: String,
    pub antivirus_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antivirus_name: Option<String>,
    pub firewall_enabled: bool,
    pub disk_encrypted: bool,
    pub screen_lock_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_patch_date: Option<DateTime<Utc>>,
    pub pending_patches: i32,
    /// Computed score in 0..=100.
    pub posture_score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
