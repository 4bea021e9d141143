//! Loglens
//!
//! Terminal client for the log-analysis service.
//!
//! Architecture:
//! - Configuration: CLI arguments with environment fallbacks
//! - Gateway: HTTP communication with the service behind a trait seam
//! - Controllers: login form and log browser state machines
//! - Runtime: one event loop turning commands into spawned requests
//!   and completions back into messages

mod app;
mod auth;
mod browser;
mod config;
mod format;
mod gateway;
mod keymap;
mod msg;
mod runtime;
mod view;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::Config;
use crate::gateway::HttpGateway;
use crate::runtime::Runtime;

#[derive(Parser)]
#[command(name = "loglens")]
#[command(about = "Terminal client for the log-analysis service", long_about = None)]
struct Cli {
    /// Service URL
    #[arg(
        long,
        env = "LOGLENS_SERVICE_URL",
        default_value = "http://localhost:8000"
    )]
    service_url: String,

    /// Records per page at startup
    #[arg(long, env = "LOGLENS_PAGE_SIZE", default_value_t = 10)]
    page_size: u32,

    /// Seconds to wait after a successful analysis trigger before reloading
    #[arg(long, env = "LOGLENS_REFRESH_DELAY", default_value_t = 3)]
    refresh_delay: u64,

    /// HTTP request timeout in seconds
    #[arg(long, env = "LOGLENS_REQUEST_TIMEOUT", default_value_t = 30)]
    request_timeout: u64,

    /// Write tracing output to this file (the terminal itself is the UI)
    #[arg(long, env = "LOGLENS_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        service_url: cli.service_url,
        page_size: cli.page_size,
        refresh_delay: Duration::from_secs(cli.refresh_delay),
        request_timeout: Duration::from_secs(cli.request_timeout),
        log_file: cli.log_file,
    };
    config.validate()?;

    init_tracing(config.log_file.as_deref())?;
    info!("starting loglens against {}", config.service_url);

    let gateway = Arc::new(HttpGateway::new(&config)?);
    let (app, initial) = App::new(&config);

    Runtime::new(gateway).run(app, initial).await
}

/// Initialize logging into a file, leaving stdout to the UI
///
/// Without a configured log file, tracing stays uninitialized and all
/// spans/events are no-ops.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = std::fs::File::create(path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loglens=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();
    Ok(())
}
