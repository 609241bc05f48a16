mod analysis;
mod chart;
mod cli_messages;
mod config;
mod consts;
mod controller;
mod dataset;
mod events;
mod logging;
mod sentiment;
mod session;
mod ui;

use crate::consts::cli_consts::{HEADLESS_HEIGHT, HEADLESS_WIDTH};
use crate::controller::{Selection, VisualizationKind};
use crate::sentiment::Sentiment;
use crate::session::{SessionError, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Sentiment analysis dashboard for labeled text datasets
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Dataset file (.xlsx, .xls, .ods or .csv). Overrides the config file.
        #[arg(long, value_name = "PATH")]
        dataset: Option<PathBuf>,

        /// Config file. Defaults to ~/.sentiment-dashboard/config.json when present.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Paint a dark background behind the dashboard
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Render one chart as plain text to stdout
    Render {
        /// Dataset file (.xlsx, .xls, .ods or .csv). Overrides the config file.
        #[arg(long, value_name = "PATH")]
        dataset: Option<PathBuf>,

        /// Config file. Defaults to ~/.sentiment-dashboard/config.json when present.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Chart to draw
        #[arg(long, value_enum)]
        view: VisualizationKind,

        /// Sentiment class for per-class charts
        #[arg(long, value_enum, default_value_t = Sentiment::Positive)]
        sentiment: Sentiment,

        /// Output width in characters
        #[arg(long, default_value_t = HEADLESS_WIDTH)]
        width: u16,

        /// Output height in lines
        #[arg(long, default_value_t = HEADLESS_HEIGHT)]
        height: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let result = match args.command {
        Command::Start {
            dataset,
            config,
            with_background,
        } => start(dataset, config, with_background).await,
        Command::Render {
            dataset,
            config,
            view,
            sentiment,
            width,
            height,
        } => {
            let selection = Selection {
                kind: view,
                sentiment,
            };
            render(dataset, config, selection, width, height).await
        }
    };

    if let Err(e) = result {
        crate::print_cmd_error!(e.title(), &e.to_string());
        std::process::exit(1);
    }
    Ok(())
}

/// Starts the interactive dashboard.
async fn start(
    dataset: Option<PathBuf>,
    config: Option<PathBuf>,
    with_background: bool,
) -> Result<(), SessionError> {
    let session = setup_session(dataset, config.as_deref())?;
    run_tui_mode(session, with_background).await
}

/// Renders a single chart without a terminal UI.
async fn render(
    dataset: Option<PathBuf>,
    config: Option<PathBuf>,
    selection: Selection,
    width: u16,
    height: u16,
) -> Result<(), SessionError> {
    let session = setup_session(dataset, config.as_deref())?;
    run_headless_mode(session, selection, width, height).await
}
