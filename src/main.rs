use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use taskchart::chart::DEFAULT_CHART_WIDTH;
use taskchart::commands::Command;
use taskchart::error::ChartResult;
use taskchart::menu;

/// taskchart - Terminal Gantt charts for CSV project plans
#[derive(Parser)]
#[command(name = "tch")]
#[command(version = "0.1.0")]
#[command(about = "Terminal Gantt charts for CSV project plans", long_about = None)]
struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Initialize logging based on the RUST_LOG environment variable
///
/// Examples:
/// - `RUST_LOG=trace` - show all trace logs
/// - `RUST_LOG=debug` - show debug and above (timeline math, file reads)
/// - `RUST_LOG=warn` - show warn and above (the default)
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run_app().await {
        eprintln!("error: {}", e.full_message());
        process::exit(1);
    }
}

/// Main application logic - separated for testability
async fn run_app() -> ChartResult<()> {
    let args = Args::parse();
    run_with_args(&args).await
}

/// Run the given arguments: dispatch a subcommand, or open the interactive
/// menu shell when none was given.
async fn run_with_args(args: &Args) -> ChartResult<()> {
    match &args.command {
        Some(cmd) => {
            let result = cmd.execute().await?;
            if !result.is_empty() {
                println!("{}", result);
            }
        }
        None => {
            menu::run_shell(DEFAULT_CHART_WIDTH)?;
        }
    }

    Ok(())
}
