//! Parley CLI and HTTP gateway entry point.
//!
//! Binary name: `parley`
//!
//! Parses CLI arguments, initializes the database and service wiring,
//! then either starts the HTTP gateway or runs a one-shot command.

mod cli;
mod http;
mod state;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use parley_infra::backend::HttpCompletionBackend;
use parley_types::config::ServiceConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,parley=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve {
            host,
            port,
            backend_url,
            api_key,
            model,
            system_prompt,
            offline,
        } => {
            let mut config = ServiceConfig {
                offline,
                ..ServiceConfig::default()
            };
            if let Some(model) = model {
                config.model = model;
            }
            if let Some(prompt) = system_prompt {
                config.system_prompt = prompt;
            }

            // Degraded mode is a configuration decision, never derived
            // from request metadata.
            let backend = match (&backend_url, config.offline) {
                (Some(url), false) => Some(HttpCompletionBackend::new(
                    url.clone(),
                    api_key.map(SecretString::from),
                )?),
                _ => None,
            };
            if backend.is_none() {
                tracing::warn!("No completion backend configured; running in offline mode");
            }

            let state = AppState::init(cli.db_url, &config, backend).await?;

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Parley gateway listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::History { session_id, json } => {
            // One-shot read; no backend needed.
            let config = ServiceConfig {
                offline: true,
                ..ServiceConfig::default()
            };
            let state = AppState::init(cli.db_url, &config, None).await?;

            let messages = state.chat.history(&session_id).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&messages)?);
            } else if messages.is_empty() {
                println!(
                    "  {}",
                    console::style(format!("No history for session '{session_id}'")).dim()
                );
            } else {
                for msg in &messages {
                    println!(
                        "  {} {}",
                        console::style(format!("{}:", msg.role)).bold(),
                        msg.content
                    );
                }
            }
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
