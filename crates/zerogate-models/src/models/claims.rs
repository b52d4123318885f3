// src/models/claims.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a pending device-enrollment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

/// A token-addressed device-enrollment request awaiting administrator
/// approval. Created out-of-band by the enrolling device; the console only
/// fetches it by token and resolves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimDetails {
    pub id: i64,
    pub token: String,
    #[serde(default)]
    pub public_key: String,
    pub status: ClaimStatus,
    pub ip: String,
    pub hostname: String,
    pub created_at: DateTime<Utc>,
}

/// Body of the claim-approval endpoint. The email identifies the approving
/// administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveClaimRequest {
    pub token: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveClaimResponse {
    pub status: ClaimStatus,
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ClaimStatus::Pending).unwrap(),
            "\"pending\""
        );
        let status: ClaimStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(status, ClaimStatus::Approved);
    }
}
