//! Morero CLI Application
//!
//! Command-line interface and MCP server for the delay-risk estimator.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::{process::ExitCode, time::Duration};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, MoreroMcpServer};
use morero_core::{display::OperationStatus, EstimatorBuilder, EstimatorError};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    match run(Args::parse()).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast_ref::<EstimatorError>().filter(|e| e.is_notice()) {
            // Notices are refused edits, not failures: show the message alone.
            Some(notice) => {
                eprint!("{}", OperationStatus::from(notice));
                Ok(ExitCode::FAILURE)
            }
            None => Err(e),
        },
    }
}

async fn run(args: Args) -> Result<()> {
    let Args {
        draft_file,
        no_color,
        delay_ms,
        command,
    } = args;

    let estimator = EstimatorBuilder::new()
        .with_draft_path(draft_file)
        .with_delay(Duration::from_millis(delay_ms))
        .build()
        .await
        .context("Failed to initialize estimator")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Morero started");

    match command {
        Some(Project { command }) => {
            Cli::new(estimator, renderer)
                .handle_project_command(command)
                .await
        }
        Some(Stage { command }) => {
            Cli::new(estimator, renderer)
                .handle_stage_command(command)
                .await
        }
        Some(Submit) => Cli::new(estimator, renderer).submit().await,
        Some(Results(args)) => Cli::new(estimator, renderer).results(args).await,
        Some(Predict) => Cli::new(estimator, renderer).predict().await,
        Some(Reset) => Cli::new(estimator, renderer).reset().await,
        Some(Catalog) => Cli::new(estimator, renderer).catalog(),
        Some(Serve) => {
            info!("Starting Morero MCP server");
            let server = MoreroMcpServer::new(estimator.predictor());
            run_stdio_server(server).await.context("MCP server failed")
        }
        Some(Show) | None => Cli::new(estimator, renderer).show().await,
    }
}
