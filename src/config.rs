//! Command line and environment configuration.
//!
//! Every option can also be supplied through the environment; a `.env` file in
//! the working directory is loaded before parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::db::Database;

#[derive(Debug, Parser)]
#[command(name = "notes-server")]
#[command(about = "Minimal JSON HTTP service for short text notes")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub serve: ServeConfig,

    /// Directory for JSON log files (all.log and error.log)
    #[arg(long, env = "NOTES_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve(ServeConfig),
    /// Apply the database schema and exit
    Migrate(StorageConfig),
}

impl Cli {
    /// The subcommand to run, falling back to `serve` with the top-level options.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Serve(self.serve))
    }
}

#[derive(Debug, Clone, Args)]
pub struct ServeConfig {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "NOTES_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for the HTTP API
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[command(flatten)]
    pub storage: StorageConfig,
}

impl ServeConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Args)]
pub struct StorageConfig {
    /// Path to the SQLite database file [default: platform data directory]
    #[arg(long, env = "NOTES_DATABASE")]
    pub database: Option<PathBuf>,
}

impl StorageConfig {
    /// Opens the configured database and brings its schema up to date.
    pub fn open_database(&self) -> anyhow::Result<Database> {
        let db = match &self.database {
            Some(path) => Database::open(path)?,
            None => Database::open_default()?,
        };
        db.migrate()?;
        Ok(db)
    }
}
