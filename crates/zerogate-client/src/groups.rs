/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Group operations.

use crate::client::{ApiClient, Result};
use reqwest::Method;
use zerogate_models::models::groups::{Group, GroupUpdate, NewGroup};

impl ApiClient {
    /// Lists all groups with their denormalized member agents.
    pub async fn list_groups(&self) -> Result<Vec<Group>> {
        self.request(Method::GET, "/api/v1/groups", None).await
    }

    pub async fn create_group(&self, new_group: &NewGroup) -> Result<Group> {
        self.request(
            Method::POST,
            "/api/v1/groups",
            Some(serde_json::to_value(new_group)?),
        )
        .await
    }

    pub async fn update_group(&self, id: i64, update: &GroupUpdate) -> Result<Group> {
        self.request(
            Method::PUT,
            &format!("/api/v1/groups/{}", id),
            Some(serde_json::to_value(update)?),
        )
        .await
    }

    pub async fn delete_group(&self, id: i64) -> Result<()> {
        self.request_no_content(Method::DELETE, &format!("/api/v1/groups/{}", id), None)
            .await
    }
}
