//! Example to run the Beacon server standalone
//!
//! Run with: cargo run -p beacon-server --example run_server

use beacon_server::{run_server, ServerConfig};
use std::net::{IpAddr, Ipv4Addr};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 8080,
    };

    println!("Starting Beacon server on {}", config.addr());
    println!("Try: curl http://{}/", config.addr());

    run_server(config).await
}
