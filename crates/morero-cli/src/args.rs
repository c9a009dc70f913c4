use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ProjectCommands, ResultsArgs, StageCommands};

/// Delay-risk estimator for construction project stages
///
/// Morero keeps a scenario draft (a project name and its stages with planned
/// durations, start dates and risk factors), scores each stage for the
/// likelihood of delay and renders the results with recommendations. It runs
/// as a command-line tool or as an MCP (Model Context Protocol) server for AI
/// assistants.
#[derive(Parser)]
#[command(version, about, name = "morero")]
pub struct Args {
    /// Path to the scenario draft file. Defaults to
    /// $XDG_DATA_HOME/morero/draft.json
    #[arg(long, global = true)]
    pub draft_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Processing delay before results are shown, in milliseconds
    #[arg(long, global = true, env = "MORERO_DELAY_MS", default_value_t = 2000)]
    pub delay_ms: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Morero CLI
///
/// - `show`, `project`, `stage`, `reset`: edit the scenario draft
/// - `submit`, `results`, `predict`: validate the draft and view results
/// - `catalog`: list the accepted stages, risk factors and units
/// - `serve`: start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Show the current scenario draft
    #[command(alias = "ls")]
    Show,
    /// Manage the project
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage stages of the scenario
    #[command(alias = "s")]
    Stage {
        #[command(subcommand)]
        command: StageCommands,
    },
    /// Validate the draft and print its results address
    Submit,
    /// Open a results address and show the prediction
    #[command(alias = "r")]
    Results(ResultsArgs),
    /// Validate the draft and show the prediction right away
    Predict,
    /// Discard the draft and start again from the sample scenario
    Reset,
    /// List stage kinds, risk factors and duration units
    Catalog,
    /// Start the MCP server
    Serve,
}
