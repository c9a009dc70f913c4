//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use morero_core::{
    display::{AssessmentReport, Catalog, OperationStatus},
    handlers as session, params as core, Predictor, Route, ScenarioBuilder, Submission,
};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types stay free of MCP concerns. This transparent wrapper
// passes deserialization straight through to the wrapped type and reuses its
// JSON schema.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type StageRef = McpParams<core::StageRef>;
pub type RenameProject = McpParams<core::RenameProject>;
pub type UpdateStage = McpParams<core::UpdateStage>;
pub type ToggleRisk = McpParams<core::ToggleRisk>;
pub type OpenResults = McpParams<core::OpenResults>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(output: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        output.to_string(),
    )]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Mutex<ScenarioBuilder>>,
    predictor: Predictor,
}

impl McpHandlers {
    pub fn new(session: Arc<Mutex<ScenarioBuilder>>, predictor: Predictor) -> Self {
        Self { session, predictor }
    }

    pub async fn show_scenario(&self) -> McpResult {
        debug!("show_scenario");
        let session = self.session.lock().await;
        text(&*session)
    }

    pub async fn set_project_name(
        &self,
        Parameters(params): Parameters<RenameProject>,
    ) -> McpResult {
        debug!("set_project_name: {:?}", params);
        let mut session = self.session.lock().await;
        session::handle_rename_project(&mut session, params.as_ref());
        text(OperationStatus::success(format!(
            "Project renamed to '{}'",
            session.project_name()
        )))
    }

    pub async fn add_stage(&self) -> McpResult {
        debug!("add_stage");
        let mut session = self.session.lock().await;
        let created = session::handle_add_stage(&mut session)
            .map_err(|e| to_mcp_error("Failed to add stage", &e))?;
        text(created)
    }

    pub async fn remove_stage(&self, Parameters(params): Parameters<StageRef>) -> McpResult {
        debug!("remove_stage: {:?}", params);
        let mut session = self.session.lock().await;
        let removed = session::handle_remove_stage(&mut session, params.as_ref())
            .map_err(|e| to_mcp_error("Failed to remove stage", &e))?;
        text(removed)
    }

    pub async fn update_stage(&self, Parameters(params): Parameters<UpdateStage>) -> McpResult {
        debug!("update_stage: {:?}", params);
        let mut session = self.session.lock().await;
        let updated = session::handle_update_stage(&mut session, params.as_ref())
            .map_err(|e| to_mcp_error("Failed to update stage", &e))?;
        text(updated)
    }

    pub async fn toggle_risk(&self, Parameters(params): Parameters<ToggleRisk>) -> McpResult {
        debug!("toggle_risk: {:?}", params);
        let mut session = self.session.lock().await;
        let toggled = session::handle_toggle_risk(&mut session, params.as_ref())
            .map_err(|e| to_mcp_error("Failed to toggle risk", &e))?;
        text(toggled)
    }

    pub async fn reset_scenario(&self) -> McpResult {
        debug!("reset_scenario");
        let mut session = self.session.lock().await;
        *session = ScenarioBuilder::sample();
        text(format!(
            "{}\n{}",
            OperationStatus::success("Scenario reset to the sample".to_string()),
            *session
        ))
    }

    async fn submission(&self) -> Result<Submission, ErrorData> {
        let session = self.session.lock().await;
        Submission::from_builder(&session).map_err(|e| to_mcp_error("Failed to submit", &e))
    }

    pub async fn submit_scenario(&self) -> McpResult {
        debug!("submit_scenario");
        text(self.submission().await?)
    }

    pub async fn run_prediction(&self) -> McpResult {
        debug!("run_prediction");
        // The session lock is released before the processing delay.
        let submission = self.submission().await?;
        let assessment = self
            .predictor
            .run(submission.scenario)
            .await
            .map_err(|e| to_mcp_error("Prediction failed", &e))?;
        text(AssessmentReport::new(&assessment))
    }

    pub async fn open_results(&self, Parameters(params): Parameters<OpenResults>) -> McpResult {
        debug!("open_results: {:?}", params);
        match Route::resolve(&params.as_ref().address) {
            Route::Results(scenario) => {
                let assessment = self
                    .predictor
                    .run(scenario)
                    .await
                    .map_err(|e| to_mcp_error("Prediction failed", &e))?;
                text(AssessmentReport::new(&assessment))
            }
            Route::Builder => {
                let session = self.session.lock().await;
                text(&*session)
            }
        }
    }

    pub fn list_catalog(&self) -> McpResult {
        debug!("list_catalog");
        text(Catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn handlers() -> McpHandlers {
        McpHandlers::new(
            Arc::new(Mutex::new(ScenarioBuilder::sample())),
            Predictor::new(Duration::ZERO),
        )
    }

    fn output(result: CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|content| content.as_text().map(|text| text.text.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_edits_share_session() {
        let handlers = handlers();
        handlers.add_stage().await.unwrap();
        handlers
            .update_stage(Parameters(McpParams(core::UpdateStage {
                id: 2,
                name: Some("Delivery".to_string()),
                duration: Some("2".to_string()),
                unit: Some("weeks".to_string()),
                start_date: Some("2025-05-01".to_string()),
            })))
            .await
            .unwrap();

        let shown = output(handlers.show_scenario().await.unwrap());
        assert!(shown.contains("### Stage 2: Delivery"));
        assert!(shown.contains("- Duration: 2 weeks"));
    }

    #[tokio::test]
    async fn test_notice_is_invalid_params() {
        let handlers = handlers();
        let err = handlers
            .remove_stage(Parameters(McpParams(core::StageRef { id: 1 })))
            .await
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "At least one stage is required");
    }

    #[tokio::test]
    async fn test_run_prediction_report() {
        let handlers = handlers();
        handlers
            .toggle_risk(Parameters(McpParams(core::ToggleRisk {
                id: 1,
                risk: "Regulatory Approvals".to_string(),
            })))
            .await
            .unwrap();

        let report = output(handlers.run_prediction().await.unwrap());
        assert!(report.contains("# Predictive Analysis Results"));
        assert!(report.contains("| Planning | 3 months | 🟡 45% | Regulatory approvals |"));
    }

    #[tokio::test]
    async fn test_open_results_redirect() {
        let handlers = handlers();
        let shown = output(
            handlers
                .open_results(Parameters(McpParams(core::OpenResults {
                    address: "/results".to_string(),
                })))
                .await
                .unwrap(),
        );
        assert!(shown.starts_with("# Predictive Insights: Scenario Setup"));
        assert!(shown.contains("- Project: Bridge Construction"));
        assert!(!shown.contains("redirected"));
    }
}
