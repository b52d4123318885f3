/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # CLI Commands Module
//!
//! Implements the command handlers for the Zerogate console binary.
//!
//! Every handler follows the same sequence:
//! 1. Load configuration
//! 2. Initialize logging
//! 3. Build the API client (attaching the persisted session token if present)
//! 4. Perform the operation and print the result
//!
//! Handlers return an error (and therefore a non-zero exit code) when the
//! operation fails; controller notices are replayed through the logger
//! before that happens.

use crate::agent_detail::AgentDetailState;
use crate::audit::AuditState;
use crate::claim::{ClaimController, ClaimFlow};
use crate::dashboard::{DashboardState, Poller};
use crate::debug::{DebugConsole, DebugEntry};
use crate::notices::{NoticeLevel, Notices};
use crate::proxy;
use crate::session::Session;
use crate::table::{Column, Table};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{interval, Duration};
use zerogate_client::{ApiClient, AuditLogQuery};
use zerogate_models::models::agents::NewAgent;
use zerogate_models::models::debug::{
    DnsLookupRequest, HttpCheckRequest, PingRequest, PortCheckRequest, TracerouteRequest,
};
use zerogate_models::models::groups::{GroupUpdate, NewGroup};
use zerogate_models::models::policies::{NewPolicy, PolicyAction, PolicyUpdate};
use zerogate_models::models::services::{NewService, Protocol};
use zerogate_utils::config::Settings;
use zerogate_utils::logging::prelude::*;

use super::{
    AgentCommands, ClaimCommands, DebugCommands, GroupCommands, PolicyCommands, RouteCommands,
    ServiceCommands,
};

type CmdResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Loads settings, initializes logging and builds a client carrying the
/// persisted session token when one exists.
fn setup(config: Option<String>) -> Result<(Settings, ApiClient), Box<dyn std::error::Error + Send + Sync>> {
    let settings = Settings::new(config)?;
    zerogate_utils::logging::init_with_format(&settings.log.level, &settings.log.format)?;
    let mut client = ApiClient::from_settings(&settings)?;
    if let Some(session) = Session::load(&settings.session.file) {
        client = client.with_token(session.token);
    }
    Ok((settings, client))
}

/// Replays accumulated notices through the logger. The first error notice
/// fails the command.
fn check(notices: &mut Notices) -> CmdResult {
    let mut failure = None;
    for notice in notices.drain() {
        match notice.level {
            NoticeLevel::Info => info!("{}", notice.message),
            NoticeLevel::Error => {
                error!("{}", notice.message);
                if failure.is_none() {
                    failure = Some(notice.message);
                }
            }
        }
    }
    match failure {
        Some(message) => Err(message.into()),
        None => Ok(()),
    }
}

fn rows<T: Serialize>(items: &[T]) -> Result<Vec<serde_json::Value>, serde_json::Error> {
    items.iter().map(serde_json::to_value).collect()
}

fn print_json<T: Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_policy_action(action: &str) -> Result<PolicyAction, Box<dyn std::error::Error + Send + Sync>> {
    match action.to_lowercase().as_str() {
        "allow" => Ok(PolicyAction::Allow),
        "deny" => Ok(PolicyAction::Deny),
        other => Err(format!("Unknown policy action: {}", other).into()),
    }
}

fn parse_protocol(protocol: &str) -> Result<Protocol, Box<dyn std::error::Error + Send + Sync>> {
    match protocol.to_lowercase().as_str() {
        "tcp" => Ok(Protocol::Tcp),
        "udp" => Ok(Protocol::Udp),
        other => Err(format!("Unknown protocol: {}", other).into()),
    }
}

pub async fn serve_proxy(config: Option<String>) -> CmdResult {
    let (settings, _) = setup(config)?;
    proxy::serve(&settings).await
}

pub async fn dashboard(config: Option<String>, watch: bool) -> CmdResult {
    let (settings, client) = setup(config)?;
    let state = Arc::new(Mutex::new(DashboardState::new()));

    if !watch {
        let mut state = state.lock().await;
        state.refresh(&client).await;
        check(&mut state.notices)?;
        print_dashboard(&state)?;
        return Ok(());
    }

    let poller = Poller::start(state.clone(), client, settings.console.poll_interval);
    let mut ticker = interval(Duration::from_secs(settings.console.poll_interval));
    info!("Watching fleet state; press Ctrl-C to stop");
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = ticker.tick() => {
                let mut state = state.lock().await;
                // Surface refresh failures without stopping the watch.
                for notice in state.notices.drain() {
                    match notice.level {
                        NoticeLevel::Info => info!("{}", notice.message),
                        NoticeLevel::Error => error!("{}", notice.message),
                    }
                }
                print_dashboard(&state)?;
            }
        }
    }
    poller.stop();
    Ok(())
}

fn print_dashboard(state: &DashboardState) -> CmdResult {
    println!(
        "Agents: {} online, {} offline | Policies: {} enabled of {}",
        state.online_agents().len(),
        state.offline_agents().len(),
        state.enabled_policies().len(),
        state.policies.len()
    );
    let mut table = Table::new(vec![
        Column::new("ID", "id"),
        Column::new("Name", "name"),
        Column::new("IP", "ip"),
        Column::new("Status", "status"),
        Column::new("Group", "group.name"),
    ])
    .with_filter_column(1);
    table.set_rows(rows(&state.agents)?);
    print!("{}", table.render());
    Ok(())
}

pub async fn agents(config: Option<String>, command: AgentCommands) -> CmdResult {
    let (settings, client) = setup(config)?;
    match command {
        AgentCommands::List => {
            let agents = client.list_agents().await?;
            let mut table = Table::new(vec![
                Column::new("ID", "id"),
                Column::new("Name", "name"),
                Column::new("IP", "ip"),
                Column::new("Status", "status"),
                Column::new("Version", "version"),
            ])
            .with_filter_column(1);
            table.set_rows(rows(&agents)?);
            print!("{}", table.render());
        }
        AgentCommands::Show { id } => {
            let mut state = AgentDetailState::new(id, settings.console.list_limit);
            state.refresh(&client).await;
            check(&mut state.notices)?;
            if let Some(agent) = &state.agent {
                print_json(agent)?;
            }
            println!("Routes: {}", state.routes.join(", "));
            if let Some(metric) = state.latest_metric() {
                println!(
                    "Latest sample: {} active connections, {} ms heartbeat",
                    metric.active_connections, metric.heartbeat_latency_ms
                );
            }
            let inbound: Vec<&str> = state.inbound_policies().iter().map(|p| p.name.as_str()).collect();
            let outbound: Vec<&str> = state.outbound_policies().iter().map(|p| p.name.as_str()).collect();
            println!("Inbound policies: {}", inbound.join(", "));
            println!("Outbound policies: {}", outbound.join(", "));
            println!("Services: {}", state.services.len());
        }
        AgentCommands::Create {
            name,
            description,
            group_id,
        } => {
            let new_agent = NewAgent::new(name, description, group_id)?;
            let agent = client.create_agent(&new_agent).await?;
            println!("Agent {} created with ip {}", agent.id, agent.ip);
            if let Some(api_key) = &agent.api_key {
                println!("API key (shown once): {}", api_key);
            }
        }
        AgentCommands::Delete { id } => {
            client.delete_agent(id).await?;
            println!("Agent {} deleted", id);
        }
        AgentCommands::RegenerateKey { id } => {
            let key = client.regenerate_key(id).await?;
            println!("New API key (shown once): {}", key.api_key);
        }
        AgentCommands::SetGroup { id, group_id } => {
            let agent = client.assign_group(id, group_id).await?;
            match agent.group_id {
                Some(group_id) => println!("Agent {} assigned to group {}", id, group_id),
                None => println!("Agent {} detached from its group", id),
            }
        }
        AgentCommands::Routes { command } => {
            routes(&settings, &client, command).await?;
        }
    }
    Ok(())
}

async fn routes(settings: &Settings, client: &ApiClient, command: RouteCommands) -> CmdResult {
    let id = match &command {
        RouteCommands::List { id } | RouteCommands::Add { id, .. } | RouteCommands::Remove { id, .. } => *id,
    };
    let mut state = AgentDetailState::new(id, settings.console.list_limit);
    state.refresh(client).await;
    check(&mut state.notices)?;

    match command {
        RouteCommands::List { .. } => {}
        RouteCommands::Add { route, .. } => {
            state.add_route(client, &route).await;
            check(&mut state.notices)?;
        }
        RouteCommands::Remove { route, .. } => {
            state.remove_route(client, &route).await;
            check(&mut state.notices)?;
        }
    }
    for route in &state.routes {
        println!("{}", route);
    }
    Ok(())
}

pub async fn groups(config: Option<String>, command: GroupCommands) -> CmdResult {
    let (_, client) = setup(config)?;
    match command {
        GroupCommands::List => {
            let groups = client.list_groups().await?;
            let mut table = Table::new(vec![
                Column::new("ID", "id"),
                Column::new("Name", "name"),
                Column::new("Description", "description"),
            ])
            .with_filter_column(1);
            table.set_rows(rows(&groups)?);
            print!("{}", table.render());
        }
        GroupCommands::Create { name, description } => {
            let group = client.create_group(&NewGroup::new(name, description)?).await?;
            println!("Group {} created", group.id);
        }
        GroupCommands::Update {
            id,
            name,
            description,
        } => {
            let update = GroupUpdate { name, description };
            client.update_group(id, &update).await?;
            println!("Group {} updated", id);
        }
        GroupCommands::Delete { id } => {
            client.delete_group(id).await?;
            println!("Group {} deleted", id);
        }
    }
    Ok(())
}

pub async fn policies(config: Option<String>, command: PolicyCommands) -> CmdResult {
    let (_, client) = setup(config)?;
    match command {
        PolicyCommands::List => {
            let policies = client.list_policies().await?;
            let mut table = Table::new(vec![
                Column::new("ID", "id"),
                Column::new("Name", "name"),
                Column::new("Source", "source_group_id"),
                Column::new("Dest", "dest_group_id"),
                Column::new("Ports", "allowed_ports"),
                Column::new("Action", "action"),
                Column::new("Enabled", "enabled"),
            ])
            .with_filter_column(1);
            table.set_rows(rows(&policies)?);
            print!("{}", table.render());
        }
        PolicyCommands::Create {
            name,
            source_group_id,
            dest_group_id,
            allowed_ports,
            action,
            description,
        } => {
            let mut new_policy = NewPolicy::new(
                name,
                source_group_id,
                dest_group_id,
                allowed_ports,
                parse_policy_action(&action)?,
            )?;
            new_policy.description = description;
            let policy = client.create_policy(&new_policy).await?;
            println!("Policy {} created", policy.id);
        }
        PolicyCommands::Update {
            id,
            name,
            description,
            allowed_ports,
            action,
        } => {
            let update = PolicyUpdate {
                name,
                description,
                allowed_ports,
                action: action.as_deref().map(parse_policy_action).transpose()?,
                ..Default::default()
            };
            client.update_policy(id, &update).await?;
            println!("Policy {} updated", id);
        }
        PolicyCommands::Delete { id } => {
            client.delete_policy(id).await?;
            println!("Policy {} deleted", id);
        }
        PolicyCommands::Enable { id } => {
            client.update_policy(id, &PolicyUpdate::set_enabled(true)).await?;
            println!("Policy {} enabled", id);
        }
        PolicyCommands::Disable { id } => {
            client.update_policy(id, &PolicyUpdate::set_enabled(false)).await?;
            println!("Policy {} disabled", id);
        }
    }
    Ok(())
}

pub async fn services(config: Option<String>, command: ServiceCommands) -> CmdResult {
    let (settings, client) = setup(config)?;
    match command {
        ServiceCommands::List { agent_id } => {
            let services = client.list_services(agent_id).await?;
            let mut table = Table::new(vec![
                Column::new("ID", "id"),
                Column::new("Name", "name"),
                Column::new("Port", "port"),
                Column::new("Protocol", "protocol"),
                Column::new("Enabled", "enabled"),
            ])
            .with_filter_column(1);
            table.set_rows(rows(&services)?);
            print!("{}", table.render());
        }
        ServiceCommands::Add {
            agent_id,
            name,
            port,
            protocol,
            description,
            local_addr,
        } => {
            let new_service =
                NewService::new(name, description, port, parse_protocol(&protocol)?, local_addr)?;
            let mut state = AgentDetailState::new(agent_id, settings.console.list_limit);
            state.refresh(&client).await;
            check(&mut state.notices)?;
            state.add_service(&client, &new_service).await;
            check(&mut state.notices)?;
            println!("Agent {} now exposes {} services", agent_id, state.services.len());
        }
        ServiceCommands::Remove {
            agent_id,
            service_id,
        } => {
            let mut state = AgentDetailState::new(agent_id, settings.console.list_limit);
            state.refresh(&client).await;
            check(&mut state.notices)?;
            state.remove_service(&client, service_id).await;
            check(&mut state.notices)?;
            println!("Agent {} now exposes {} services", agent_id, state.services.len());
        }
    }
    Ok(())
}

pub async fn audit(
    config: Option<String>,
    agent_id: Option<i64>,
    action: Option<String>,
    limit: Option<u32>,
    search: Option<String>,
) -> CmdResult {
    let (settings, client) = setup(config)?;
    let query = AuditLogQuery {
        agent_id,
        action,
        limit: limit.or(Some(settings.console.list_limit)),
    };

    let mut state = AuditState::new();
    state.refresh(&client, &query).await;
    check(&mut state.notices)?;

    let hits = state.search(search.as_deref().unwrap_or(""));
    let mut table = Table::new(vec![
        Column::new("Time", "created_at"),
        Column::new("Agent", "agent.name"),
        Column::new("Action", "action"),
        Column::new("Details", "details"),
    ])
    .with_filter_column(2);
    table.set_rows(rows(&hits)?);
    print!("{}", table.render());
    Ok(())
}

pub async fn debug(config: Option<String>, command: DebugCommands) -> CmdResult {
    let (_, client) = setup(config)?;
    let mut console = DebugConsole::new();

    match command {
        DebugCommands::Ping {
            source,
            dest,
            count,
        } => {
            let request = PingRequest {
                source_agent_id: source,
                dest_agent_id: dest,
                count,
            };
            console.run_ping(&client, &request).await;
        }
        DebugCommands::PortCheck {
            source,
            dest,
            port,
            protocol,
        } => {
            parse_protocol(&protocol)?;
            let request = PortCheckRequest {
                source_agent_id: source,
                dest_agent_id: dest,
                port,
                protocol,
            };
            console.run_port_check(&client, &request).await;
        }
        DebugCommands::Traceroute {
            source,
            dest,
            max_hops,
        } => {
            let request = TracerouteRequest {
                source_agent_id: source,
                dest_agent_id: dest,
                max_hops,
            };
            console.run_traceroute(&client, &request).await;
        }
        DebugCommands::Dns {
            source,
            domain,
            record_type,
        } => {
            let request = DnsLookupRequest {
                source_agent_id: source,
                domain,
                record_type,
            };
            console.run_dns_lookup(&client, &request).await;
        }
        DebugCommands::Http {
            source,
            url,
            method,
        } => {
            let request = HttpCheckRequest {
                source_agent_id: source,
                url,
                method,
            };
            console.run_http_check(&client, &request).await;
        }
    }

    check(&mut console.notices)?;
    match console.entries().last() {
        Some(DebugEntry::Ping(report)) => print_json(report),
        Some(DebugEntry::Port(report)) => print_json(report),
        Some(DebugEntry::Traceroute(report)) => print_json(report),
        Some(DebugEntry::Dns(report)) => print_json(report),
        Some(DebugEntry::Http(report)) => print_json(report),
        Some(DebugEntry::Error(message)) => Err(message.clone().into()),
        None => Err("Diagnostic produced no result".into()),
    }
}

pub async fn login(config: Option<String>, email: String) -> CmdResult {
    let (settings, client) = setup(config)?;
    let response = client.login(&email).await?;
    let session = Session {
        email: response.user.email.clone(),
        token: response.token,
    };
    session.save(&settings.session.file)?;
    println!("Signed in as {} ({})", response.user.email, response.user.role);
    Ok(())
}

pub async fn claim(config: Option<String>, command: ClaimCommands) -> CmdResult {
    let (settings, client) = setup(config)?;
    match command {
        ClaimCommands::Show { token } => {
            let mut controller = ClaimController::new(Some(token));
            controller.fetch(&client).await;
            print_claim_state(&controller.state)
        }
        ClaimCommands::Approve { token } => {
            let Some(session) = Session::load(&settings.session.file) else {
                return Err("Not signed in; run `zerogate-console login <email>` first".into());
            };
            let mut controller = ClaimController::new(Some(token));
            controller.fetch(&client).await;
            if matches!(controller.state, ClaimFlow::AwaitingApproval { .. }) {
                controller.approve(&client, &session).await;
            }
            check(&mut controller.notices)?;
            print_claim_state(&controller.state)
        }
    }
}

fn print_claim_state(state: &ClaimFlow) -> CmdResult {
    match state {
        ClaimFlow::Loading => {
            println!("Claim not yet loaded");
            Ok(())
        }
        ClaimFlow::Error { message } => Err(message.clone().into()),
        ClaimFlow::AwaitingApproval { details } => {
            println!(
                "Pending claim from {} ({}), requested {}",
                details.hostname, details.ip, details.created_at
            );
            Ok(())
        }
        ClaimFlow::Approved => {
            println!("Device approved");
            Ok(())
        }
    }
}
