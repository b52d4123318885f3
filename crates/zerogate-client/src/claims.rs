/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Device claim lookup and approval.

use crate::client::{ApiClient, Result};
use reqwest::Method;
use url::form_urlencoded;
use zerogate_models::models::claims::{ApproveClaimRequest, ApproveClaimResponse, ClaimDetails};

impl ApiClient {
    /// Fetches the claim identified by an enrollment token.
    pub async fn claim_details(&self, token: &str) -> Result<ClaimDetails> {
        let encoded: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("token", token)
            .finish();
        self.request(Method::GET, &format!("/api/v1/claim?{}", encoded), None)
            .await
    }

    /// Approves a pending claim on behalf of the given operator.
    pub async fn approve_claim(&self, token: &str, email: &str) -> Result<ApproveClaimResponse> {
        let request = ApproveClaimRequest {
            token: token.to_string(),
            email: email.to_string(),
        };
        self.request(
            Method::POST,
            "/api/v1/claim/approve",
            Some(serde_json::to_value(&request)?),
        )
        .await
    }
}
