/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Audit log view state and its text search.

use crate::notices::Notices;
use zerogate_client::{ApiClient, AuditLogQuery};
use zerogate_models::models::logs::AuditLog;

/// Case-insensitive substring search over action, the raw details string and
/// the denormalized agent name. A view over held state, never a refetch; an
/// empty query matches everything.
pub fn filter_logs<'a>(logs: &'a [AuditLog], query: &str) -> Vec<&'a AuditLog> {
    if query.is_empty() {
        return logs.iter().collect();
    }
    let needle = query.to_lowercase();
    logs.iter()
        .filter(|log| {
            log.action.to_lowercase().contains(&needle)
                || log.details.to_lowercase().contains(&needle)
                || log
                    .agent
                    .as_ref()
                    .is_some_and(|agent| agent.name.to_lowercase().contains(&needle))
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct AuditState {
    pub logs: Vec<AuditLog>,
    pub notices: Notices,
}

impl AuditState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches logs with the given backend-side filter. Failure leaves the
    /// held list untouched.
    pub async fn refresh(&mut self, client: &ApiClient, query: &AuditLogQuery) {
        match client.list_audit_logs(query).await {
            Ok(logs) => self.logs = logs,
            Err(e) => self
                .notices
                .error(format!("Failed to load audit logs: {}", e)),
        }
    }

    pub fn search<'a>(&'a self, query: &str) -> Vec<&'a AuditLog> {
        filter_logs(&self.logs, query)
    }
}
