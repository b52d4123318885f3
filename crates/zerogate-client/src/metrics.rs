/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Agent metrics queries.

use crate::client::{limit_query, ApiClient, Result};
use reqwest::Method;
use zerogate_models::models::metrics::AgentMetrics;

impl ApiClient {
    /// Lists metric samples for an agent, newest first (ordering is owned by
    /// the backend).
    pub async fn agent_metrics(
        &self,
        agent_id: i64,
        limit: Option<u32>,
    ) -> Result<Vec<AgentMetrics>> {
        let path = format!("/api/v1/agents/{}/metrics{}", agent_id, limit_query(limit));
        self.request(Method::GET, &path, None).await
    }
}
