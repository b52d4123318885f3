/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Audit and access log queries.

use crate::client::{limit_query, ApiClient, Result};
use reqwest::Method;
use url::form_urlencoded;
use zerogate_models::models::logs::{AccessLog, AuditLog};

/// Filter for the global audit log listing. Unset fields are omitted from
/// the query string so the backend defaults apply.
#[derive(Debug, Clone, Default)]
pub struct AuditLogQuery {
    pub agent_id: Option<i64>,
    pub action: Option<String>,
    pub limit: Option<u32>,
}

impl AuditLogQuery {
    fn to_query_string(&self) -> String {
        let mut pairs = form_urlencoded::Serializer::new(String::new());
        if let Some(agent_id) = self.agent_id {
            pairs.append_pair("agent_id", &agent_id.to_string());
        }
        if let Some(action) = &self.action {
            pairs.append_pair("action", action);
        }
        if let Some(limit) = self.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
        let encoded = pairs.finish();
        if encoded.is_empty() {
            String::new()
        } else {
            format!("?{}", encoded)
        }
    }
}

impl ApiClient {
    /// Lists audit logs, optionally filtered by agent, action and limit.
    pub async fn list_audit_logs(&self, query: &AuditLogQuery) -> Result<Vec<AuditLog>> {
        let path = format!("/api/v1/audit-logs{}", query.to_query_string());
        self.request(Method::GET, &path, None).await
    }

    /// Lists audit logs for one agent.
    pub async fn agent_audit_logs(&self, agent_id: i64, limit: Option<u32>) -> Result<Vec<AuditLog>> {
        let path = format!(
            "/api/v1/agents/{}/audit-logs{}",
            agent_id,
            limit_query(limit)
        );
        self.request(Method::GET, &path, None).await
    }

    /// Lists access logs where the agent is either endpoint.
    pub async fn agent_access_logs(
        &self,
        agent_id: i64,
        limit: Option<u32>,
    ) -> Result<Vec<AccessLog>> {
        let path = format!(
            "/api/v1/agents/{}/access-logs{}",
            agent_id,
            limit_query(limit)
        );
        self.request(Method::GET, &path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_query_empty() {
        assert_eq!(AuditLogQuery::default().to_query_string(), "");
    }

    #[test]
    fn test_audit_query_full() {
        let query = AuditLogQuery {
            agent_id: Some(3),
            action: Some("key_regenerated".to_string()),
            limit: Some(25),
        };
        assert_eq!(
            query.to_query_string(),
            "?agent_id=3&action=key_regenerated&limit=25"
        );
    }
}
