// src/models/auth.rs

use serde::{Deserialize, Serialize};

/// Body of the login endpoint. The backend issues a bearer token for the
/// given email; no password exchange happens at this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"token":"dev-token-a","user":{"email":"a@example.com","role":"admin"}}"#,
        )
        .unwrap();
        assert_eq!(response.user.role, "admin");
    }
}
