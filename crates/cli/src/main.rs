//! Staff portal CLI - renders the dashboard for the logged-in user
//!
//! Usage:
//!   portal --token <TOKEN>         - Render the dashboard for the token's user
//!   portal --json                  - Emit the resolved dashboard as JSON
//!   portal --config portal.json    - Use custom endpoints

mod render;

use clap::Parser;
use client::PortalClient;
use identity::MembershipResolver;
use shared::{PortalConfig, TracingLogger};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Staff portal - role badges and dashboard buttons for one user")]
#[command(version)]
struct Cli {
    /// Bearer token identifying the logged-in user
    #[arg(short, long, env = "PORTAL_TOKEN")]
    token: String,

    /// Endpoint configuration file (JSON)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Override the portal resource base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Override the identity endpoint URL
    #[arg(long)]
    identity_url: Option<String>,

    /// Output the resolved dashboard as JSON instead of styled text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PortalConfig::from_file(path)?,
        None => PortalConfig::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(identity_url) = cli.identity_url {
        config.identity_url = identity_url;
    }

    let portal = PortalClient::new(config)?;
    let data = portal.fetch_dashboard_data(&cli.token).await?;

    let membership = MembershipResolver::new(Arc::new(TracingLogger), data.directory.clone())
        .resolve(&data.profile.id);

    let items = resolver::resolve(&data.roles, &membership.roles)?;
    let buttons = resolver::filter(&data.buttons, &data.access, &membership.roles);

    if cli.json {
        render::print_json(&data.profile, &items, &buttons)?;
    } else {
        render::print_dashboard(&data.profile, &items, &buttons);
    }

    Ok(())
}
