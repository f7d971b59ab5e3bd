//! Subpanel - terminal catalog of subscription offers

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use subpanel::app;
use subpanel::types::config::{Config, OutputMode};

#[derive(Parser, Debug)]
#[command(name = "subpanel")]
#[command(about = "Subpanel - terminal catalog of subscription offers")]
#[command(version)]
struct Args {
    /// Catalog file (.json or .toml) with offers, services and history.
    /// Defaults to catalog.toml in the config directory, then a demo catalog.
    #[arg(long, env = "SUBPANEL_CATALOG", value_name = "PATH")]
    catalog: Option<std::path::PathBuf>,

    /// Print mode: render the screen once to stdout and exit.
    #[arg(short = 'p', long)]
    print: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug { "debug" } else { "info" };

    if args.print {
        // Print mode: logs go to stderr so stdout stays clean
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| filter.into()),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        // TUI mode uses the alternate screen, so logs go to a file
        let log_path = std::env::temp_dir().join("subpanel.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| filter.into()),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file)),
            )
            .init();

        if args.debug {
            eprintln!("Debug logs written to: {}", log_path.display());
        }
    }

    let output_mode = if args.print {
        OutputMode::Print
    } else {
        OutputMode::Interactive
    };

    app::run(Config {
        catalog_path: args.catalog,
        output_mode,
    })
    .await
}
