use std::io;

mod cli;
use cli::{CliMode, parse_cli_mode};
mod tui;
use tui::run_dashboard;

use youth_events_hub::{config::ServerConfig, server};

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    setup_logging();

    let cli_mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("Usage: youth-events-hub [--serve] [--theme NAME]");
            return Ok(());
        }
    };

    match cli_mode {
        CliMode::Serve => {
            let config = match ServerConfig::from_env() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Configuration error: {}", e);
                    tracing::error!("Configuration failed: {}", e);
                    return Ok(());
                }
            };

            if let Err(e) = server::serve(config).await {
                eprintln!("Server error: {}", e);
                tracing::error!("Server failed: {}", e);
            }
            Ok(())
        }
        CliMode::Dashboard { theme } => run_dashboard(theme),
    }
}

fn setup_logging() {
    let log_dir = dirs::config_dir()
        .map(|d| d.join("youth-events-hub"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "youth-events-hub.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("youth-events-hub started");
}
