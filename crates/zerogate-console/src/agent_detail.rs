/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! Per-agent detail page state.
//!
//! One batch fetch pulls everything the page renders; mutations go through
//! the API and then refetch, so the held state always mirrors the backend
//! rather than being patched optimistically.

use crate::notices::Notices;
use zerogate_client::ApiClient;
use zerogate_models::models::agents::Agent;
use zerogate_models::models::groups::Group;
use zerogate_models::models::logs::{AccessLog, AuditLog};
use zerogate_models::models::metrics::AgentMetrics;
use zerogate_models::models::policies::Policy;
use zerogate_models::models::services::{NewService, Service};
use zerogate_models::validate_cidr;

#[derive(Debug)]
pub struct AgentDetailState {
    agent_id: i64,
    list_limit: u32,
    pub agent: Option<Agent>,
    pub services: Vec<Service>,
    pub audit_logs: Vec<AuditLog>,
    pub access_logs: Vec<AccessLog>,
    pub groups: Vec<Group>,
    pub metrics: Vec<AgentMetrics>,
    pub policies: Vec<Policy>,
    /// Parsed route list; the JSON-string wire form never leaves the model
    /// layer.
    pub routes: Vec<String>,
    api_key: Option<String>,
    key_visible: bool,
    pub notices: Notices,
}

impl AgentDetailState {
    pub fn new(agent_id: i64, list_limit: u32) -> Self {
        AgentDetailState {
            agent_id,
            list_limit,
            agent: None,
            services: Vec::new(),
            audit_logs: Vec::new(),
            access_logs: Vec::new(),
            groups: Vec::new(),
            metrics: Vec::new(),
            policies: Vec::new(),
            routes: Vec::new(),
            api_key: None,
            key_visible: false,
            notices: Notices::new(),
        }
    }

    pub fn agent_id(&self) -> i64 {
        self.agent_id
    }

    /// Fetches everything the page shows in one concurrent batch. Any single
    /// failure fails the batch; held state stays untouched and a notice is
    /// pushed.
    pub async fn refresh(&mut self, client: &ApiClient) {
        let limit = Some(self.list_limit);
        let result = tokio::try_join!(
            client.get_agent(self.agent_id),
            client.list_services(self.agent_id),
            client.agent_audit_logs(self.agent_id, limit),
            client.list_groups(),
            client.agent_metrics(self.agent_id, limit),
            client.agent_access_logs(self.agent_id, limit),
            client.list_policies(),
        );

        match result {
            Ok((agent, services, audit_logs, groups, metrics, access_logs, policies)) => {
                self.routes = agent.routes();
                self.agent = Some(agent);
                self.services = services;
                self.audit_logs = audit_logs;
                self.groups = groups;
                self.metrics = metrics;
                self.access_logs = access_logs;
                self.policies = policies;
            }
            Err(e) => {
                self.notices
                    .error(format!("Failed to load agent {}: {}", self.agent_id, e));
            }
        }
    }

    /// Enabled policies whose destination group is this agent's group. An
    /// agent without a group matches nothing.
    pub fn inbound_policies(&self) -> Vec<&Policy> {
        self.policies_matching(|p, group_id| p.dest_group_id == group_id)
    }

    /// Enabled policies whose source group is this agent's group.
    pub fn outbound_policies(&self) -> Vec<&Policy> {
        self.policies_matching(|p, group_id| p.source_group_id == group_id)
    }

    fn policies_matching(&self, matches: impl Fn(&Policy, i64) -> bool) -> Vec<&Policy> {
        let Some(group_id) = self.agent.as_ref().and_then(|a| a.group_id) else {
            return Vec::new();
        };
        self.policies
            .iter()
            .filter(|p| p.enabled && matches(p, group_id))
            .collect()
    }

    /// Latest sample, relying on the endpoint's newest-first ordering.
    pub fn latest_metric(&self) -> Option<&AgentMetrics> {
        self.metrics.first()
    }

    /// Validates and appends a route, then replaces the whole array on the
    /// backend. A rejected CIDR surfaces a notice and performs no API call.
    pub async fn add_route(&mut self, client: &ApiClient, route: &str) {
        if let Err(reason) = validate_cidr(route) {
            self.notices.error(reason);
            return;
        }
        if self.routes.iter().any(|r| r == route) {
            self.notices.error(format!("Route {} is already present", route));
            return;
        }
        let mut routes = self.routes.clone();
        routes.push(route.to_string());
        self.replace_routes(client, routes).await;
    }

    pub async fn remove_route(&mut self, client: &ApiClient, route: &str) {
        let routes: Vec<String> = self
            .routes
            .iter()
            .filter(|r| r.as_str() != route)
            .cloned()
            .collect();
        if routes.len() == self.routes.len() {
            self.notices.error(format!("Route {} is not present", route));
            return;
        }
        self.replace_routes(client, routes).await;
    }

    async fn replace_routes(&mut self, client: &ApiClient, routes: Vec<String>) {
        match client.replace_routes(self.agent_id, &routes).await {
            Ok(_) => self.refresh(client).await,
            Err(e) => self.notices.error(format!("Failed to update routes: {}", e)),
        }
    }

    pub async fn add_service(&mut self, client: &ApiClient, new_service: &NewService) {
        match client.create_service(self.agent_id, new_service).await {
            Ok(_) => self.refresh(client).await,
            Err(e) => self.notices.error(format!("Failed to add service: {}", e)),
        }
    }

    pub async fn remove_service(&mut self, client: &ApiClient, service_id: i64) {
        match client.delete_service(self.agent_id, service_id).await {
            Ok(()) => self.refresh(client).await,
            Err(e) => self.notices.error(format!("Failed to remove service: {}", e)),
        }
    }

    pub async fn regenerate_key(&mut self, client: &ApiClient) {
        match client.regenerate_key(self.agent_id).await {
            Ok(key) => {
                self.set_api_key(key.api_key);
                self.notices.info("API key regenerated");
            }
            Err(e) => self.notices.error(format!("Failed to regenerate key: {}", e)),
        }
    }

    /// Stores a key returned by creation or regeneration; it is never
    /// refetchable afterwards. The reveal flag resets to masked.
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
        self.key_visible = false;
    }

    pub fn toggle_key_visibility(&mut self) {
        self.key_visible = !self.key_visible;
    }

    /// The held key, masked unless explicitly revealed. `None` when no key
    /// has been issued this session.
    pub fn api_key_display(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            if self.key_visible {
                key.clone()
            } else {
                "*".repeat(key.len())
            }
        })
    }
}
