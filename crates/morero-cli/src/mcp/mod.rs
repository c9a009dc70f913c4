//! MCP server implementation for Morero
//!
//! Exposes the scenario builder and the prediction run as Model Context
//! Protocol tools. The server keeps one builder session in memory for its
//! lifetime; nothing is written to disk.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use morero_core::{Predictor, ScenarioBuilder};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
// Re-export parameter types and result type from handlers for external use
pub use handlers::{McpResult, OpenResults, RenameProject, StageRef, ToggleRisk, UpdateStage};

/// MCP server for Morero
#[derive(Clone)]
pub struct MoreroMcpServer {
    session: Arc<Mutex<ScenarioBuilder>>,
    predictor: Predictor,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl MoreroMcpServer {
    /// Create a new server whose session starts from the sample scenario
    pub fn new(predictor: Predictor) -> Self {
        Self {
            session: Arc::new(Mutex::new(ScenarioBuilder::sample())),
            predictor,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.session.clone(), self.predictor)
    }

    #[tool(
        name = "show_scenario",
        description = "Show the scenario being built: the project name and every stage with its ID, name, duration, start date, planned end date and selected risk factors. Blank fields show as '(not set)'. Use the stage IDs with the other stage tools."
    )]
    async fn show_scenario(&self) -> McpResult {
        self.handlers().show_scenario().await
    }

    #[tool(
        name = "set_project_name",
        description = "Set the project name of the scenario. Any text is accepted here; a blank name is refused when the scenario is submitted."
    )]
    async fn set_project_name(&self, params: Parameters<RenameProject>) -> McpResult {
        self.handlers().set_project_name(params).await
    }

    #[tool(
        name = "add_stage",
        description = "Append a blank stage (unit 'months', no name, duration or start date) and return its new ID. Fill it in with update_stage."
    )]
    async fn add_stage(&self) -> McpResult {
        self.handlers().add_stage().await
    }

    #[tool(
        name = "remove_stage",
        description = "Remove a stage by ID. The scenario always keeps at least one stage; removing the last one is refused."
    )]
    async fn remove_stage(&self, params: Parameters<StageRef>) -> McpResult {
        self.handlers().remove_stage(params).await
    }

    #[tool(
        name = "update_stage",
        description = "Change fields of a stage by ID. Provide any of: name (Planning, Procurement, Delivery, Foundation, Structural Work, Finishing, Testing & Commissioning), duration (positive number, fractions such as 2.5 allowed), unit ('weeks' or 'months'), start_date (YYYY-MM-DD). An empty string clears name, duration or start_date. Omitted fields are left unchanged."
    )]
    async fn update_stage(&self, params: Parameters<UpdateStage>) -> McpResult {
        self.handlers().update_stage(params).await
    }

    #[tool(
        name = "toggle_risk",
        description = "Select a risk factor on a stage, or deselect it if already selected. Risk factors: Complicated Design, Bad Ground Conditions, Resource Shortages, Regulatory Approvals, Supplier Delays, Weather Risks."
    )]
    async fn toggle_risk(&self, params: Parameters<ToggleRisk>) -> McpResult {
        self.handlers().toggle_risk(params).await
    }

    #[tool(
        name = "reset_scenario",
        description = "Discard the current scenario and start again from the sample: project 'Bridge Construction' with one 3-month Planning stage starting 2025-01-01."
    )]
    async fn reset_scenario(&self) -> McpResult {
        self.handlers().reset_scenario().await
    }

    #[tool(
        name = "submit_scenario",
        description = "Validate the scenario and return its results address. Refused with a notice if the project name is blank or a stage is missing its name, duration or start date. The address can be opened later with open_results."
    )]
    async fn submit_scenario(&self) -> McpResult {
        self.handlers().submit_scenario().await
    }

    #[tool(
        name = "run_prediction",
        description = "Validate the scenario, wait for the processing delay and return the results: per-stage delay risk percentage, risk level (low/medium/high) and notes, a risk overview chart and recommendations."
    )]
    async fn run_prediction(&self) -> McpResult {
        self.handlers().run_prediction().await
    }

    #[tool(
        name = "open_results",
        description = "Open a results address returned by submit_scenario and return the prediction for the scenario it carries. An address without a usable scenario shows the scenario builder instead."
    )]
    async fn open_results(&self, params: Parameters<OpenResults>) -> McpResult {
        self.handlers().open_results(params).await
    }

    #[tool(
        name = "list_catalog",
        description = "List the accepted stage names, risk factors with their score weights, and duration units."
    )]
    async fn list_catalog(&self) -> McpResult {
        self.handlers().list_catalog()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for MoreroMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "morero".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Morero estimates the likelihood of delay for each stage of a construction project.

## Core Concepts
- **Scenario**: a project name and an ordered list of stages, edited in one session
- **Stage**: a name from a fixed list, a planned duration in weeks or months, a start date and any number of risk factors
- **Results**: each stage gets a risk percentage (20% base, capped at 85%), a level (low below 35%, medium below 60%, high otherwise) and notes

## Workflow
1. Review the session with `show_scenario` (it starts from a sample scenario)
2. Name the project with `set_project_name`
3. Add stages with `add_stage` and fill them in with `update_stage`
4. Attribute hazards with `toggle_risk`
5. Get results with `run_prediction`, or `submit_scenario` for a results address to open later with `open_results`

## Tool Categories
- **Scenario**: show_scenario, set_project_name, reset_scenario
- **Stages**: add_stage, remove_stage, update_stage, toggle_risk
- **Results**: submit_scenario, run_prediction, open_results
- **Reference**: list_catalog"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: MoreroMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Morero MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
