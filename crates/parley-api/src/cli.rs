//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Parley: session-keyed chat relay service.
#[derive(Debug, Parser)]
#[command(name = "parley", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// SQLite database URL (defaults to ~/.parley/parley.db)
    #[arg(long, env = "PARLEY_DB_URL", global = true)]
    pub db_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 8787)]
        port: u16,

        /// Completion backend endpoint; omit to run offline
        #[arg(long, env = "PARLEY_BACKEND_URL")]
        backend_url: Option<String>,

        /// API key for the completion backend
        #[arg(long, env = "PARLEY_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Model identifier sent to the backend
        #[arg(long)]
        model: Option<String>,

        /// Override the fixed system prompt
        #[arg(long)]
        system_prompt: Option<String>,

        /// Force offline mode even if a backend URL is configured
        #[arg(long)]
        offline: bool,
    },

    /// Print the stored history for a session (debug)
    History {
        /// Session key to inspect
        session_id: String,

        /// Emit raw JSON instead of formatted lines
        #[arg(long)]
        json: bool,
    },
}
