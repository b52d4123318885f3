/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Service operations, always scoped under an owning agent.

use crate::client::{ApiClient, Result};
use reqwest::Method;
use zerogate_models::models::services::{NewService, Service};

impl ApiClient {
    pub async fn list_services(&self, agent_id: i64) -> Result<Vec<Service>> {
        self.request(
            Method::GET,
            &format!("/api/v1/agents/{}/services", agent_id),
            None,
        )
        .await
    }

    pub async fn create_service(&self, agent_id: i64, new_service: &NewService) -> Result<Service> {
        self.request(
            Method::POST,
            &format!("/api/v1/agents/{}/services", agent_id),
            Some(serde_json::to_value(new_service)?),
        )
        .await
    }

    pub async fn delete_service(&self, agent_id: i64, service_id: i64) -> Result<()> {
        self.request_no_content(
            Method::DELETE,
            &format!("/api/v1/agents/{}/services/{}", agent_id, service_id),
            None,
        )
        .await
    }
}
