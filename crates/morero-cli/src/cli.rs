//! Command-line argument wrappers and command handling.
//!
//! The argument structs carry clap derives and convert into the core
//! parameter types, keeping clap out of the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Estimator
//! ```
//!
//! [`Cli`] runs one command against the [`Estimator`] and renders the
//! markdown it produces.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use morero_core::{
    display::{AssessmentReport, Catalog, OperationStatus},
    params::{OpenResults, RenameProject, StageRef, ToggleRisk, UpdateStage},
    Estimator, EstimatorError, Route, Scenario,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Rename the project
#[derive(Args)]
pub struct RenameProjectArgs {
    /// New project name
    pub name: String,
}

impl From<RenameProjectArgs> for RenameProject {
    fn from(val: RenameProjectArgs) -> Self {
        RenameProject { name: val.name }
    }
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Rename the project
    #[command(alias = "mv")]
    Rename(RenameProjectArgs),
}

/// Remove a stage
///
/// The scenario always keeps at least one stage.
#[derive(Args)]
pub struct RemoveStageArgs {
    #[arg(help = "ID of the stage to remove")]
    pub id: u64,
}

impl From<RemoveStageArgs> for StageRef {
    fn from(val: RemoveStageArgs) -> Self {
        StageRef { id: val.id }
    }
}

/// Update the details of a stage
///
/// Only the given fields change. Pass an empty string to clear name,
/// duration or start date.
#[derive(Args)]
pub struct UpdateStageArgs {
    #[arg(help = "ID of the stage to update")]
    pub id: u64,
    #[arg(
        short,
        long,
        help = "Stage name (Planning, Procurement, Delivery, Foundation, Structural Work, Finishing, Testing & Commissioning)"
    )]
    pub name: Option<String>,
    #[arg(short, long, help = "Planned duration as a positive number, e.g. 3 or 2.5")]
    pub duration: Option<String>,
    #[arg(short, long, help = "Duration unit (weeks, months)")]
    pub unit: Option<String>,
    #[arg(short, long, help = "Start date as YYYY-MM-DD")]
    pub start_date: Option<String>,
}

impl From<UpdateStageArgs> for UpdateStage {
    fn from(val: UpdateStageArgs) -> Self {
        UpdateStage {
            id: val.id,
            name: val.name,
            duration: val.duration,
            unit: val.unit,
            start_date: val.start_date,
        }
    }
}

/// Select or deselect a risk factor on a stage
#[derive(Args)]
pub struct ToggleRiskArgs {
    #[arg(help = "ID of the stage")]
    pub id: u64,
    #[arg(
        help = "Risk factor (Complicated Design, Bad Ground Conditions, Resource Shortages, Regulatory Approvals, Supplier Delays, Weather Risks)"
    )]
    pub risk: String,
}

impl From<ToggleRiskArgs> for ToggleRisk {
    fn from(val: ToggleRiskArgs) -> Self {
        ToggleRisk {
            id: val.id,
            risk: val.risk,
        }
    }
}

#[derive(Subcommand)]
pub enum StageCommands {
    /// Append a blank stage
    #[command(alias = "a")]
    Add,
    /// Remove a stage
    #[command(aliases = ["rm", "d"])]
    Remove(RemoveStageArgs),
    /// Update the details of a stage
    #[command(alias = "u")]
    Update(UpdateStageArgs),
    /// Select or deselect a risk factor on a stage
    #[command(alias = "t")]
    Toggle(ToggleRiskArgs),
}

/// Open a results address
#[derive(Args)]
pub struct ResultsArgs {
    #[arg(help = "Results address as printed by `morero submit`")]
    pub address: String,
}

impl From<ResultsArgs> for OpenResults {
    fn from(val: ResultsArgs) -> Self {
        OpenResults {
            address: val.address,
        }
    }
}

// ============================================================================
// Command Handling
// ============================================================================

/// Runs one command and renders its output.
pub struct Cli {
    estimator: Estimator,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(estimator: Estimator, renderer: TerminalRenderer) -> Self {
        Self {
            estimator,
            renderer,
        }
    }

    /// Print the current draft.
    pub async fn show(&self) -> Result<()> {
        let draft = self
            .estimator
            .load_draft()
            .await
            .context("Failed to load draft")?;
        self.renderer.render(&draft.to_string())
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Rename(args) => {
                let draft = self.estimator.rename_project(&args.into()).await?;
                let status =
                    OperationStatus::success(format!("Project renamed to '{}'", draft.project_name()));
                self.renderer.render(&status.to_string())
            }
        }
    }

    pub async fn handle_stage_command(&self, command: StageCommands) -> Result<()> {
        let output = match command {
            StageCommands::Add => self.estimator.add_stage().await?.to_string(),
            StageCommands::Remove(args) => {
                self.estimator.remove_stage(&args.into()).await?.to_string()
            }
            StageCommands::Update(args) => {
                self.estimator.update_stage(&args.into()).await?.to_string()
            }
            StageCommands::Toggle(args) => {
                self.estimator.toggle_risk(&args.into()).await?.to_string()
            }
        };
        self.renderer.render(&output)
    }

    /// Validate the draft and print its results address.
    pub async fn submit(&self) -> Result<()> {
        let submission = self.estimator.submit().await?;
        self.renderer.render(&submission.to_string())
    }

    /// Resolve a results address. An address without a usable scenario
    /// shows the draft instead.
    pub async fn results(&self, args: ResultsArgs) -> Result<()> {
        match self.estimator.open_results(&args.into()) {
            Route::Results(scenario) => self.run_prediction(scenario).await,
            Route::Builder => self.show().await,
        }
    }

    /// Validate the draft and show its results.
    pub async fn predict(&self) -> Result<()> {
        let submission = self.estimator.submit().await?;
        self.run_prediction(submission.scenario).await
    }

    /// Restore the sample draft.
    pub async fn reset(&self) -> Result<()> {
        let draft = self
            .estimator
            .reset_draft()
            .await
            .context("Failed to reset draft")?;
        let status = OperationStatus::success("Draft reset to the sample scenario".to_string());
        self.renderer.render(&format!("{status}\n{draft}"))
    }

    pub fn catalog(&self) -> Result<()> {
        self.renderer.render(&Catalog.to_string())
    }

    /// Wait out the processing delay, or stop early on Ctrl-C. Dropping the
    /// prediction future cancels the run.
    async fn run_prediction(&self, scenario: Scenario) -> Result<()> {
        eprintln!("Running Predictive Analysis...");
        eprintln!("Estimating probability of delay per stage");

        let assessment = tokio::select! {
            result = self.estimator.predict(scenario) => result?,
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted while waiting for results");
                return Err(EstimatorError::Cancelled.into());
            }
        };

        self.renderer
            .render(&AssessmentReport::new(&assessment).to_string())
    }
}
