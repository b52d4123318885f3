//! Data models for the Zerogate control-plane API contract.
//!
//! Every type here mirrors the JSON the backend produces or accepts. The
//! console never owns these records; it holds read-through copies and sends
//! mutations back through the ids, never through denormalized joins.

pub mod models;
pub mod validate;

pub use models::agents::{Agent, AgentStatus, AgentUpdate, NewAgent};
pub use models::groups::{Group, GroupUpdate, NewGroup};
pub use models::logs::{AccessAction, AccessLog, AuditLog};
pub use models::metrics::AgentMetrics;
pub use models::policies::{NewPolicy, Policy, PolicyAction, PolicyUpdate};
pub use models::services::{NewService, Protocol, Service};
pub use validate::validate_cidr;
