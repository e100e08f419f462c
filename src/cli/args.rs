//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// User Vault - Seeds a MongoDB users collection behind an injection gate
#[derive(Parser, Debug)]
#[command(name = "user-vault")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Security log file path
    #[arg(long, global = true, env = "SECURITY_LOG_PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert the demo accounts and the injection probe
    Seed(SeedArgs),

    /// Add a single user record
    Add(AddArgs),

    /// Check a value against the input sanitizer
    Check(CheckArgs),
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Use an in-memory store instead of MongoDB
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Username to insert
    #[arg(short, long)]
    pub username: String,

    /// Password to insert
    #[arg(short, long)]
    pub password: String,

    /// Parse both values as JSON (e.g. '{"$gt": ""}')
    #[arg(long)]
    pub json: bool,

    /// Use an in-memory store instead of MongoDB
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Value to check
    pub value: String,

    /// Parse the value as JSON before checking
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_dry_run() {
        let cli = Cli::try_parse_from(["user-vault", "seed", "--dry-run"]).unwrap();
        assert!(matches!(cli.command, Commands::Seed(SeedArgs { dry_run: true })));
    }

    #[test]
    fn test_parse_add_with_json() {
        let cli = Cli::try_parse_from([
            "user-vault",
            "-v",
            "add",
            "--username",
            "intruder",
            "--password",
            r#"{"$gt": ""}"#,
            "--json",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.username, "intruder");
                assert_eq!(args.password, r#"{"$gt": ""}"#);
                assert!(args.json);
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_add_requires_password() {
        assert!(Cli::try_parse_from(["user-vault", "add", "--username", "admin"]).is_err());
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["user-vault", "check", "a$b"]).unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.value, "a$b");
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
