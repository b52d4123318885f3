/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use zerogate_utils::logging::prelude::*;
use zerogate_utils::Settings;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// API client for the Zerogate control plane.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Builds a client from application settings, honoring the configured
    /// request timeout.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.console.request_timeout))
            .build()?;
        Ok(Self {
            http,
            base_url: settings.console.api_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attaches a bearer token to every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs one request and deserializes the 2xx body into `T`.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let response = self.send(method, path, body).await?;
        let parsed = response.json::<T>().await.map_err(|e| {
            error!("Failed to deserialize response from {}: {}", path, e);
            Box::new(e) as Box<dyn std::error::Error + Send + Sync>
        })?;
        Ok(parsed)
    }

    /// Performs one request and discards the body (delete endpoints return
    /// 204 with no content).
    pub(crate) async fn request_no_content(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<()> {
        self.send(method, path, body).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut req = self
            .http
            .request(method.clone(), &url)
            .header("Content-Type", "application/json");
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        let response = req.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            Box::new(e) as Box<dyn std::error::Error + Send + Sync>
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!("{} {} failed with status {}: {}", method, url, status, error_body);
            return Err(format!(
                "Request failed. Status: {}, Body: {}",
                status, error_body
            )
            .into());
        }

        Ok(response)
    }
}

/// Builds a `?limit=` suffix for list endpoints; an unset limit yields an
/// empty string so the backend default applies.
pub(crate) fn limit_query(limit: Option<u32>) -> String {
    match limit {
        Some(n) => format!("?limit={}", n),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:8080/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_limit_query() {
        assert_eq!(limit_query(Some(50)), "?limit=50");
        assert_eq!(limit_query(None), "");
    }
}
