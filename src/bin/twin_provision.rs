//! Twin provisioning CLI
//!
//! Provisions the spaces described in a YAML topology against a digital-twin
//! management API, reusing spaces that already exist.
//!
//! Usage:
//!   cargo run --bin twin-provision -- \
//!     --base-url https://twin.example.net/management/api/v1.0 \
//!     --topology config/provision-sample.yaml
//!
//! Connection settings fall back to TWIN_MANAGEMENT_BASE_URL,
//! TWIN_ACCESS_TOKEN and TWIN_HTTP_TIMEOUT_SECS (a .env file is honoured).

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use twin_provision::{provision_topology_file, HttpTwinClient, SpaceProvisioner, TwinConfig};

#[derive(Parser, Debug)]
#[command(name = "twin-provision")]
#[command(about = "Provision a digital-twin space hierarchy from a YAML topology")]
struct Args {
    /// Topology file to provision
    #[arg(long, short = 't', default_value = "config/provision-sample.yaml")]
    topology: PathBuf,

    /// Management API base URL
    #[arg(long, env = "TWIN_MANAGEMENT_BASE_URL")]
    base_url: String,

    /// Bearer token sent with every request
    #[arg(long, env = "TWIN_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "TWIN_HTTP_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Print the provisioning report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config =
        TwinConfig::new(&args.base_url)?.with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(token) = args.token {
        config = config.with_access_token(token);
    }

    let client = HttpTwinClient::new(&config)?;
    let provisioner = SpaceProvisioner::new(Arc::new(client));

    let report = provision_topology_file(&provisioner, &args.topology)
        .await
        .with_context(|| format!("Failed to provision {}", args.topology.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Provisioned {} space(s): {} created, {} reused, {} skipped",
            report.space_ids().len(),
            report.created_count(),
            report.reused_count(),
            report.skipped().len()
        );
    }

    Ok(())
}
