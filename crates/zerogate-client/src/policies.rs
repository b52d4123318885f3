/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Policy operations.

use crate::client::{ApiClient, Result};
use reqwest::Method;
use zerogate_models::models::policies::{NewPolicy, Policy, PolicyUpdate};

impl ApiClient {
    pub async fn list_policies(&self) -> Result<Vec<Policy>> {
        self.request(Method::GET, "/api/v1/policies", None).await
    }

    pub async fn create_policy(&self, new_policy: &NewPolicy) -> Result<Policy> {
        self.request(
            Method::POST,
            "/api/v1/policies",
            Some(serde_json::to_value(new_policy)?),
        )
        .await
    }

    /// Applies a partial update; unset fields are omitted from the patch.
    pub async fn update_policy(&self, id: i64, update: &PolicyUpdate) -> Result<Policy> {
        self.request(
            Method::PUT,
            &format!("/api/v1/policies/{}", id),
            Some(serde_json::to_value(update)?),
        )
        .await
    }

    pub async fn delete_policy(&self, id: i64) -> Result<()> {
        self.request_no_content(Method::DELETE, &format!("/api/v1/policies/{}", id), None)
            .await
    }
}
