//! Beacon CLI - Command-line interface
//!
//! Commands:
//! - serve: Start the API server (default when no command is given)

mod server;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "beacon")]
#[command(about = "Minimal API status service")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Server options used when no command is given
    #[command(flatten)]
    serve: server::ServerArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve(server::ServerArgs),
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(args)) => server::run(args),
        None => server::run(cli.serve),
    }
}

/// Initialize logging, honouring RUST_LOG when set
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["beacon"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_bare_start_reads_environment() {
        std::env::set_var("PORT", "9000");
        std::env::set_var("BEACON_HOST", "127.0.0.1");

        let bare = Cli::try_parse_from(["beacon"]).unwrap();
        let serve = Cli::try_parse_from(["beacon", "serve"]).unwrap();

        std::env::remove_var("PORT");
        std::env::remove_var("BEACON_HOST");

        assert!(bare.command.is_none());
        assert_eq!(bare.serve.port, 9000);
        assert_eq!(bare.serve.host.to_string(), "127.0.0.1");
        match serve.command {
            Some(Commands::Serve(args)) => assert_eq!(args.port, bare.serve.port),
            None => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_bare_start_port_flag() {
        let cli = Cli::try_parse_from(["beacon", "--port", "7000"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.serve.port, 7000);
    }

    #[test]
    fn test_serve_port_flag() {
        let cli = Cli::try_parse_from(["beacon", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Some(Commands::Serve(args)) => assert_eq!(args.port, 9000),
            None => panic!("expected serve command"),
        }
    }
}
