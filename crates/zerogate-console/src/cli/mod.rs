/// Command-line interface module for the Zerogate console.
pub mod commands;
use clap::{Parser, Subcommand};

/// CLI configuration structure.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional path to a configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the edge proxy
    Proxy,
    /// Show the fleet summary
    Dashboard {
        /// Keep refreshing on the configured poll interval
        #[arg(long)]
        watch: bool,
    },
    /// Manage agents
    Agents {
        #[command(subcommand)]
        command: AgentCommands,
    },
    /// Manage groups
    Groups {
        #[command(subcommand)]
        command: GroupCommands,
    },
    /// Manage policies
    Policies {
        #[command(subcommand)]
        command: PolicyCommands,
    },
    /// Manage services exposed by an agent
    Services {
        #[command(subcommand)]
        command: ServiceCommands,
    },
    /// Query audit logs
    Audit {
        /// Only events for this agent
        #[arg(long)]
        agent_id: Option<i64>,
        /// Only events with this action
        #[arg(long)]
        action: Option<String>,
        /// Maximum number of events
        #[arg(long)]
        limit: Option<u32>,
        /// Client-side text search over the fetched events
        #[arg(long)]
        search: Option<String>,
    },
    /// Run network diagnostics through the backend
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
    /// Sign in and persist the session
    Login {
        /// Operator email
        email: String,
    },
    /// Inspect or approve device claims
    Claim {
        #[command(subcommand)]
        command: ClaimCommands,
    },
}

#[derive(Subcommand)]
pub enum AgentCommands {
    /// List all agents
    List,
    /// Show one agent in detail
    Show { id: i64 },
    /// Register a new agent
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        group_id: Option<i64>,
    },
    /// Delete an agent
    Delete { id: i64 },
    /// Regenerate an agent's API key
    RegenerateKey { id: i64 },
    /// Assign the agent to a group, or detach it when no group is given
    SetGroup {
        id: i64,
        #[arg(long)]
        group_id: Option<i64>,
    },
    /// Manage an agent's advertised routes
    Routes {
        #[command(subcommand)]
        command: RouteCommands,
    },
}

#[derive(Subcommand)]
pub enum RouteCommands {
    /// List the agent's routes
    List { id: i64 },
    /// Add a CIDR route
    Add { id: i64, route: String },
    /// Remove a CIDR route
    Remove { id: i64, route: String },
}

#[derive(Subcommand)]
pub enum GroupCommands {
    /// List all groups
    List,
    /// Create a group
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a group
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a group
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum PolicyCommands {
    /// List all policies
    List,
    /// Create a policy
    Create {
        name: String,
        #[arg(long)]
        source_group_id: i64,
        #[arg(long)]
        dest_group_id: i64,
        /// Comma-separated port list, or `*` for all ports
        #[arg(long, default_value = "*")]
        allowed_ports: String,
        /// "allow" or "deny"
        #[arg(long, default_value = "allow")]
        action: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a policy
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        allowed_ports: Option<String>,
        /// "allow" or "deny"
        #[arg(long)]
        action: Option<String>,
    },
    /// Delete a policy
    Delete { id: i64 },
    /// Enable a policy
    Enable { id: i64 },
    /// Disable a policy
    Disable { id: i64 },
}

#[derive(Subcommand)]
pub enum ServiceCommands {
    /// List an agent's services
    List { agent_id: i64 },
    /// Expose a new service on an agent
    Add {
        agent_id: i64,
        name: String,
        #[arg(long)]
        port: i32,
        /// "tcp" or "udp"
        #[arg(long, default_value = "tcp")]
        protocol: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        local_addr: Option<String>,
    },
    /// Remove a service from an agent
    Remove { agent_id: i64, service_id: i64 },
}

#[derive(Subcommand)]
pub enum DebugCommands {
    /// Reachability probe between two agents
    Ping {
        #[arg(long)]
        source: i64,
        #[arg(long)]
        dest: i64,
        #[arg(long)]
        count: Option<u32>,
    },
    /// Check a port on a destination agent
    PortCheck {
        #[arg(long)]
        source: i64,
        #[arg(long)]
        dest: i64,
        #[arg(long)]
        port: u16,
        /// "tcp" or "udp"
        #[arg(long, default_value = "tcp")]
        protocol: String,
    },
    /// Trace the path between two agents
    Traceroute {
        #[arg(long)]
        source: i64,
        #[arg(long)]
        dest: i64,
        #[arg(long)]
        max_hops: Option<u32>,
    },
    /// Resolve a domain from an agent
    Dns {
        #[arg(long)]
        source: i64,
        domain: String,
        #[arg(long, default_value = "A")]
        record_type: String,
    },
    /// Probe an HTTP endpoint from an agent
    Http {
        #[arg(long)]
        source: i64,
        url: String,
        #[arg(long, default_value = "GET")]
        method: String,
    },
}

#[derive(Subcommand)]
pub enum ClaimCommands {
    /// Show the claim behind an enrollment token
    Show { token: String },
    /// Approve a pending claim (requires a signed-in session)
    Approve { token: String },
}

/// Parses command-line arguments into the Cli structure.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
