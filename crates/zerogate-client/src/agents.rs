/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Agent operations.

use crate::client::{ApiClient, Result};
use reqwest::Method;
use zerogate_models::models::agents::{
    Agent, AgentUpdate, AssignGroupRequest, NewAgent, RegeneratedKey, RoutesRequest,
};

impl ApiClient {
    /// Lists all agents.
    pub async fn list_agents(&self) -> Result<Vec<Agent>> {
        self.request(Method::GET, "/api/v1/agents", None).await
    }

    /// Fetches a single agent by id.
    pub async fn get_agent(&self, id: i64) -> Result<Agent> {
        self.request(Method::GET, &format!("/api/v1/agents/{}", id), None)
            .await
    }

    /// Creates an agent. The response carries the backend-assigned `ip` and
    /// the one-time `api_key`.
    pub async fn create_agent(&self, new_agent: &NewAgent) -> Result<Agent> {
        self.request(
            Method::POST,
            "/api/v1/agents",
            Some(serde_json::to_value(new_agent)?),
        )
        .await
    }

    /// Applies a partial update to an agent.
    pub async fn update_agent(&self, id: i64, update: &AgentUpdate) -> Result<Agent> {
        self.request(
            Method::PUT,
            &format!("/api/v1/agents/{}", id),
            Some(serde_json::to_value(update)?),
        )
        .await
    }

    /// Deletes an agent.
    pub async fn delete_agent(&self, id: i64) -> Result<()> {
        self.request_no_content(Method::DELETE, &format!("/api/v1/agents/{}", id), None)
            .await
    }

    /// Regenerates the agent's API key, invalidating the previous one.
    pub async fn regenerate_key(&self, id: i64) -> Result<RegeneratedKey> {
        self.request(
            Method::POST,
            &format!("/api/v1/agents/{}/regenerate-key", id),
            None,
        )
        .await
    }

    /// Replaces the agent's advertised routes with the given array. The
    /// backend has no incremental route mutation; this is always a whole-array
    /// replace.
    pub async fn replace_routes(&self, id: i64, routes: &[String]) -> Result<Agent> {
        let body = RoutesRequest {
            routes: routes.to_vec(),
        };
        self.request(
            Method::PUT,
            &format!("/api/v1/agents/{}/routes", id),
            Some(serde_json::to_value(body)?),
        )
        .await
    }

    /// Assigns the agent to a group, or detaches it when `group_id` is None.
    pub async fn assign_group(&self, id: i64, group_id: Option<i64>) -> Result<Agent> {
        let body = AssignGroupRequest { group_id };
        self.request(
            Method::PUT,
            &format!("/api/v1/agents/{}/group", id),
            Some(serde_json::to_value(body)?),
        )
        .await
    }
}
