//! notewire entry point.
//!
//! Runs one local session against the in-process supervisor: the seeded
//! repository, the default credential pair, and this terminal as the
//! transport.
//!
//! ```bash
//! notewire
//! notewire --fetch-latency-ms 500 --log-file notewire.log
//! ```

use std::{path::PathBuf, sync::Arc, time::Duration};

use clap::Parser;
use notewire_app::Theme;
use notewire_core::{CredentialPolicy, MemoryRepository};
use notewire_server::Supervisor;
use notewire_term::TerminalTransport;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Multi-screen text interface over a supervised session
#[derive(Parser, Debug)]
#[command(name = "notewire")]
#[command(about = "Login, list, compose, and read items in your terminal")]
#[command(version)]
struct Args {
    /// Username the credential policy accepts
    #[arg(long, default_value = "user")]
    username: String,

    /// Password the credential policy accepts
    #[arg(long, default_value = "pass")]
    password: String,

    /// Simulated repository latency in milliseconds
    #[arg(long, default_value = "0")]
    fetch_latency_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    ///
    /// Recommended while the terminal is in raw mode; stderr output would
    /// interleave with rendered frames.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    match &args.log_file {
        Some(path) => {
            let file = Arc::new(std::fs::File::create(path)?);
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(file).with_ansi(false))
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args)?;

    let mut repository = MemoryRepository::seeded();
    if args.fetch_latency_ms > 0 {
        repository = repository.with_latency(Duration::from_millis(args.fetch_latency_ms));
    }

    let policy = CredentialPolicy::new(args.username, args.password);
    let supervisor = Supervisor::new(repository, policy, Theme::default());

    let transport = TerminalTransport::new()?;
    let handle = supervisor.create_session(transport).await?;
    handle.wait().await;

    Ok(())
}
