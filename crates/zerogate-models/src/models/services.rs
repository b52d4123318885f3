// src/models/services.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Transport protocol of an exposed service port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
}

/// A named port exposed by an agent.
///
/// Services are created and deleted under a specific agent; the backend
/// exposes no update operation for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub agent_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub port: i32,
    pub protocol: Protocol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_addr: Option<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a service under an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewService {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub port: i32,
    pub protocol: Protocol,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_addr: Option<String>,
}

impl NewService {
    pub fn new(
        name: String,
        description: Option<String>,
        port: i32,
        protocol: Protocol,
        local_addr: Option<String>,
    ) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if port <= 0 || port > 65535 {
            return Err("Port must be in 1..=65535".to_string());
        }
        Ok(NewService {
            name,
            description,
            port,
            protocol,
            local_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_service_success() {
        let service = NewService::new("web".to_string(), None, 443, Protocol::Tcp, None);
        assert!(service.is_ok());
    }

    #[test]
    fn test_new_service_rejects_zero_port() {
        let result = NewService::new("web".to_string(), None, 0, Protocol::Tcp, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_service_rejects_out_of_range_port() {
        let result = NewService::new("web".to_string(), None, 70000, Protocol::Udp, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_protocol_wire_format() {
        assert_eq!(serde_json::to_string(&Protocol::Udp).unwrap(), "\"udp\"");
    }
}
