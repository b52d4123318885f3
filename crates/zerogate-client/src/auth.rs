/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Console login.

use crate::client::{ApiClient, Result};
use reqwest::Method;
use zerogate_models::models::auth::{LoginRequest, LoginResponse};

impl ApiClient {
    /// Exchanges an operator email for a session token.
    pub async fn login(&self, email: &str) -> Result<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
        };
        self.request(
            Method::POST,
            "/api/v1/login",
            Some(serde_json::to_value(&request)?),
        )
        .await
    }
}
