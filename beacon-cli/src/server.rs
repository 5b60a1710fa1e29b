//! Server command - start the API server
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to beacon-server crate)
//! - Level 4: configuration validation

use std::net::IpAddr;

use anyhow::{Context, Result};
use clap::Args;

use beacon_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, env = "BEACON_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port number to listen on
    #[arg(long, env = "PORT", default_value = "8080")]
    pub port: u16,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
///
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServerArgs) -> Result<()> {
    let config = configure_server(&args)?;

    tracing::info!("Starting Beacon server on {}", config.addr());

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs) -> Result<ServerConfig> {
    validate_port(args.port)?;

    Ok(ServerConfig {
        host: args.host,
        port: args.port,
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to build tokio runtime")?;

    runtime.block_on(run_server(config))
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Port 0 would bind an ephemeral port nobody can find
fn validate_port(port: u16) -> Result<()> {
    if port == 0 {
        anyhow::bail!("Port must be between 1 and 65535, got 0");
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
