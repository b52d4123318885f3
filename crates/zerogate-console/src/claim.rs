/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Device-claim approval flow.
//!
//! The flow is a small state machine driven by explicit events so the
//! transitions stay testable without a backend: `Loading` moves to either
//! `Error` or `AwaitingApproval`, approval moves to `Approved`. `Error` and
//! `Approved` are terminal. A failed approval keeps the flow in
//! `AwaitingApproval` and only surfaces a notice.

use crate::notices::Notices;
use crate::session::Session;
use zerogate_client::ApiClient;
use zerogate_models::models::claims::ClaimDetails;

#[derive(Debug, Clone)]
pub enum ClaimFlow {
    Loading,
    Error { message: String },
    AwaitingApproval { details: ClaimDetails },
    Approved,
}

impl ClaimFlow {
    pub fn on_fetched(self, details: ClaimDetails) -> ClaimFlow {
        match self {
            ClaimFlow::Loading => ClaimFlow::AwaitingApproval { details },
            other => other,
        }
    }

    pub fn on_fetch_failed(self) -> ClaimFlow {
        match self {
            ClaimFlow::Loading => ClaimFlow::Error {
                message: "This claim link is expired or invalid".to_string(),
            },
            other => other,
        }
    }

    pub fn on_approved(self) -> ClaimFlow {
        match self {
            ClaimFlow::AwaitingApproval { .. } => ClaimFlow::Approved,
            other => other,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimFlow::Error { .. } | ClaimFlow::Approved)
    }
}

/// Drives [`ClaimFlow`] against the backend. The session is handed in
/// explicitly at approval time; an unauthenticated visitor is sent through
/// login first and resumes here with the same token.
#[derive(Debug)]
pub struct ClaimController {
    token: Option<String>,
    pub state: ClaimFlow,
    pub notices: Notices,
}

impl ClaimController {
    /// A missing token is terminal immediately; nothing is fetched.
    pub fn new(token: Option<String>) -> Self {
        let state = match &token {
            Some(_) => ClaimFlow::Loading,
            None => ClaimFlow::Error {
                message: "No claim token provided".to_string(),
            },
        };
        ClaimController {
            token,
            state,
            notices: Notices::new(),
        }
    }

    /// The token to resume with after a login hand-off.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub async fn fetch(&mut self, client: &ApiClient) {
        if !matches!(self.state, ClaimFlow::Loading) {
            return;
        }
        let Some(token) = self.token.clone() else {
            return;
        };
        let state = std::mem::replace(&mut self.state, ClaimFlow::Loading);
        self.state = match client.claim_details(&token).await {
            Ok(details) => state.on_fetched(details),
            Err(_) => state.on_fetch_failed(),
        };
    }

    pub async fn approve(&mut self, client: &ApiClient, session: &Session) {
        if !matches!(self.state, ClaimFlow::AwaitingApproval { .. }) {
            return;
        }
        let Some(token) = self.token.clone() else {
            return;
        };
        let authed = client.clone().with_token(session.token.clone());
        match authed.approve_claim(&token, &session.email).await {
            Ok(_) => {
                let state = std::mem::replace(&mut self.state, ClaimFlow::Loading);
                self.state = state.on_approved();
                self.notices.info("Device approved");
            }
            Err(e) => {
                self.notices.error(format!("Failed to approve claim: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details() -> ClaimDetails {
        serde_json::from_value(json!({
            "id": 1,
            "token": "claim-token",
            "status": "pending",
            "ip": "10.0.0.30",
            "hostname": "laptop-1",
            "created_at": "2025-05-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_missing_token_is_immediately_terminal() {
        let controller = ClaimController::new(None);
        assert!(matches!(controller.state, ClaimFlow::Error { .. }));
        assert!(controller.state.is_terminal());
    }

    #[test]
    fn test_fetch_success_awaits_approval() {
        let state = ClaimFlow::Loading.on_fetched(details());
        assert!(matches!(state, ClaimFlow::AwaitingApproval { .. }));
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_fetch_failure_is_terminal() {
        let state = ClaimFlow::Loading.on_fetch_failed();
        match &state {
            ClaimFlow::Error { message } => assert!(message.contains("expired or invalid")),
            other => panic!("unexpected state: {:?}", other),
        }
        assert!(state.is_terminal());
    }

    #[test]
    fn test_approval_moves_to_approved() {
        let state = ClaimFlow::Loading.on_fetched(details()).on_approved();
        assert!(matches!(state, ClaimFlow::Approved));
        assert!(state.is_terminal());
    }

    #[test]
    fn test_approval_from_loading_does_nothing() {
        let state = ClaimFlow::Loading.on_approved();
        assert!(matches!(state, ClaimFlow::Loading));
    }

    #[tokio::test]
    async fn test_failed_approval_keeps_awaiting_state() {
        let mut controller = ClaimController::new(Some("claim-token".to_string()));
        controller.state = ClaimFlow::AwaitingApproval { details: details() };

        let client = ApiClient::new("http://127.0.0.1:1");
        let session = Session {
            email: "ops@example.com".to_string(),
            token: "session".to_string(),
        };
        controller.approve(&client, &session).await;

        assert!(matches!(controller.state, ClaimFlow::AwaitingApproval { .. }));
        assert!(!controller.notices.is_empty());
    }
}
