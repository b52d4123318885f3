//! Data models for the resources exposed by the control-plane API
pub mod agents;
pub mod auth;
pub mod claims;
pub mod debug;
pub mod groups;
pub mod logs;
pub mod metrics;
pub mod policies;
pub mod posture;
pub mod services;

pub use agents::{Agent, AgentStatus, AgentUpdate, NewAgent};
pub use auth::{LoginRequest, LoginResponse, UserInfo};
pub use claims::{ApproveClaimRequest, ApproveClaimResponse, ClaimDetails, ClaimStatus};
pub use groups::{Group, GroupUpdate, NewGroup};
pub use logs::{AccessAction, AccessLog, AuditLog};
pub use metrics::AgentMetrics;
pub use policies::{NewPolicy, Policy, PolicyAction, PolicyUpdate};
pub use posture::DevicePosture;
pub use services::{NewService, Protocol, Service};
