//! User Vault - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;

use user_vault::{
    cli::{Cli, Commands},
    commands,
    config::Config,
    infra::init_tracing,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config.with_log_path(cli.log_file.clone()),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing (verbose mode sets debug level)
    let guard = match init_tracing(cli.verbose, &config.security_log_path) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Seed(args) => commands::seed::execute(args, config).await,
        Commands::Add(args) => commands::add::execute(args, config).await,
        Commands::Check(args) => commands::check::execute(args).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        drop(guard);
        std::process::exit(1);
    }
}
