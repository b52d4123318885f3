/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Fleet overview state and its background refresh loop.

use crate::notices::Notices;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};
use zerogate_client::ApiClient;
use zerogate_models::models::agents::{Agent, AgentStatus};
use zerogate_models::models::policies::Policy;
use zerogate_utils::logging::prelude::*;

/// Agents plus policies for the overview page. Derivations are linear scans
/// over the held lists and never mutate them.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub agents: Vec<Agent>,
    pub policies: Vec<Policy>,
    pub notices: Notices,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches agents and policies concurrently. Either failure fails the
    /// whole batch: a notice is pushed and the previously held lists stay
    /// untouched.
    pub async fn refresh(&mut self, client: &ApiClient) {
        match tokio::try_join!(client.list_agents(), client.list_policies()) {
            Ok((agents, policies)) => {
                self.agents = agents;
                self.policies = policies;
            }
            Err(e) => {
                self.notices.error(format!("Failed to refresh dashboard: {}", e));
            }
        }
    }

    pub fn online_agents(&self) -> Vec<&Agent> {
        self.agents
            .iter()
            .filter(|a| a.status == AgentStatus::Online)
            .collect()
    }

    pub fn offline_agents(&self) -> Vec<&Agent> {
        self.agents
            .iter()
            .filter(|a| a.status == AgentStatus::Offline)
            .collect()
    }

    pub fn enabled_policies(&self) -> Vec<&Policy> {
        self.policies.iter().filter(|p| p.enabled).collect()
    }
}

/// Periodic dashboard refetch as an explicitly cancellable task.
///
/// The timer never outlives the view: `stop()` aborts the task, and dropping
/// the poller does the same.
pub struct Poller {
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawns the refresh loop. The first refresh happens immediately, then
    /// one per `interval_secs`.
    pub fn start(
        state: Arc<Mutex<DashboardState>>,
        client: ApiClient,
        interval_secs: u64,
    ) -> Poller {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(interval_secs));
            loop {
                ticker.tick().await;
                debug!("Dashboard poll tick");
                let mut state = state.lock().await;
                state.refresh(&client).await;
            }
        });
        Poller { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
