/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # Zerogate Console
//!
//! Administrative console for the Zerogate control plane. It renders and
//! mutates fleet state through the typed API client, never owning any of it:
//! every view holds read-through copies and refetches after mutations.
//!
//! ## View-State Modules
//!
//! - [`dashboard`]: fleet overview with a cancellable background poller
//! - [`agent_detail`]: per-agent page with batch fetch and route editing
//! - [`audit`]: audit log view with client-side text search
//! - [`claim`]: device-enrollment approval state machine
//! - [`debug`]: ad-hoc diagnostics console
//! - [`table`]: generic sortable/filterable tabular presentation
//!
//! ## Supporting Modules
//!
//! - [`notices`]: short-lived user-facing messages
//! - [`session`]: signed-in operator session persistence
//! - [`proxy`]: edge proxy relaying `/api/v1/*` to the backend origin
//! - [`cli`]: command-line interface

pub mod agent_detail;
pub mod audit;
pub mod claim;
pub mod cli;
pub mod dashboard;
pub mod debug;
pub mod notices;
pub mod proxy;
pub mod session;
pub mod table;
