use zerogate_console::cli::commands;
use zerogate_console::cli::{parse_cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = parse_cli();

    match cli.command {
        Commands::Proxy => {
            commands::serve_proxy(cli.config).await?;
        }
        Commands::Dashboard { watch } => {
            commands::dashboard(cli.config, watch).await?;
        }
        Commands::Agents { command } => {
            commands::agents(cli.config, command).await?;
        }
        Commands::Groups { command } => {
            commands::groups(cli.config, command).await?;
        }
        Commands::Policies { command } => {
            commands::policies(cli.config, command).await?;
        }
        Commands::Services { command } => {
            commands::services(cli.config, command).await?;
        }
        Commands::Audit {
            agent_id,
            action,
            limit,
            search,
        } => {
            commands::audit(cli.config, agent_id, action, limit, search).await?;
        }
        Commands::Debug { command } => {
            commands::debug(cli.config, command).await?;
        }
        Commands::Login { email } => {
            commands::login(cli.config, email).await?;
        }
        Commands::Claim { command } => {
            commands::claim(cli.config, command).await?;
        }
    }

    Ok(())
}
