use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod notifier;
mod render;

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Paginated results, file gallery and calendar events from static JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every collection view.
#[derive(Args, Debug, Clone)]
pub(crate) struct PageArgs {
    /// Directory, base URL or single JSON document (overrides DASHBOARD_DATA)
    #[arg(short, long)]
    pub(crate) source: Option<String>,
    /// 1-based page to show
    #[arg(short, long)]
    pub(crate) page: Option<usize>,
    /// Records per page (10, 25, 50 or 100)
    #[arg(long)]
    pub(crate) page_size: Option<usize>,
    /// Print the page as JSON instead of cards
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of the results list
    Results {
        #[command(flatten)]
        args: PageArgs,
    },
    /// Show one page of the file gallery
    Files {
        #[command(flatten)]
        args: PageArgs,
    },
    /// Show calendar events, paginated or filtered by date range
    Events {
        #[command(flatten)]
        args: PageArgs,
        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day of the range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Serve the JSON API
    Serve {
        #[arg(short, long, default_value = "5500")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Directory or base URL holding the JSON documents
        #[arg(short, long)]
        data: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Results { args } => commands::browse::run_results(&args).await,
        Commands::Files { args } => commands::browse::run_files(&args).await,
        Commands::Events { args, from, to } => commands::browse::run_events(&args, from, to).await,
        Commands::Serve { port, host, data } => {
            commands::serve::run(port, host, data).await?;
            Ok(ExitCode::SUCCESS)
        },
    }
}
