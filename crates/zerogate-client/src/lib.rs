/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # Zerogate API Client
//!
//! Typed wrapper over the control-plane HTTP API. One method per backend
//! operation, one HTTP request per call, no retries, no caching, no request
//! deduplication. This is deliberately a pass-through, not a resilience
//! layer; callers own refetch and error-presentation policy.
//!
//! All failures surface as message-text errors: transport problems carry the
//! reqwest error text, non-2xx responses carry the status and response body.
//! Callers cannot (and per the contract, should not) distinguish a 404 from
//! a 500 beyond that text.

mod agents;
mod auth;
mod claims;
mod client;
mod debug;
mod groups;
mod logs;
mod metrics;
mod policies;
mod services;

pub use client::{ApiClient, Result};
pub use logs::AuditLogQuery;
