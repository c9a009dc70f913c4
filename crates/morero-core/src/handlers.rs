//! Session edits shared by every interface.
//!
//! The CLI applies these to the builder loaded from its draft file; the MCP
//! server applies them to the builder it holds in memory. Each handler
//! validates its parameters first, so a refused edit never touches the
//! session, and returns a display wrapper describing what changed.
//!
//! ```text
//! Interface → Params → Handler → ScenarioBuilder
//! ```
//!
//! # Examples
//!
//! ```rust
//! use morero_core::{handlers, params::ToggleRisk, ScenarioBuilder};
//!
//! let mut builder = ScenarioBuilder::sample();
//! let result = handlers::handle_toggle_risk(
//!     &mut builder,
//!     &ToggleRisk { id: 1, risk: "weather risks".to_string() },
//! )?;
//! assert_eq!(result.changes, vec!["Selected risk 'Weather Risks'"]);
//! # Ok::<(), morero_core::EstimatorError>(())
//! ```

use crate::{
    builder::ScenarioBuilder,
    display::{CreateResult, DeleteResult, UpdateResult},
    error::{EstimatorError, Result},
    models::StageDraft,
    params::{RenameProject, StageRef, ToggleRisk, UpdateStage},
};

/// Replace the project name.
pub fn handle_rename_project(builder: &mut ScenarioBuilder, params: &RenameProject) {
    builder.set_project_name(params.name.clone());
}

/// Append a blank stage.
pub fn handle_add_stage(builder: &mut ScenarioBuilder) -> Result<CreateResult<StageDraft>> {
    let id = builder.add_stage()?;
    let stage = builder
        .stage(id)
        .cloned()
        .ok_or(EstimatorError::StageNotFound { id })?;
    Ok(CreateResult::new(stage))
}

/// Remove a stage, keeping at least one.
pub fn handle_remove_stage(
    builder: &mut ScenarioBuilder,
    params: &StageRef,
) -> Result<DeleteResult<StageDraft>> {
    builder.remove_stage(params.stage_id()).map(DeleteResult::new)
}

/// Replace the provided fields of a stage.
pub fn handle_update_stage(
    builder: &mut ScenarioBuilder,
    params: &UpdateStage,
) -> Result<UpdateResult<StageDraft>> {
    let updates = params.validate()?;
    let stage = builder.apply_updates(params.stage_id(), &updates)?.clone();
    let changes = updates.iter().map(|update| update.describe()).collect();
    Ok(UpdateResult::with_changes(stage, changes))
}

/// Flip one risk factor on a stage.
pub fn handle_toggle_risk(
    builder: &mut ScenarioBuilder,
    params: &ToggleRisk,
) -> Result<UpdateResult<StageDraft>> {
    let id = params.stage_id();
    let risk = params.validate()?;
    let selected = builder.toggle_risk(id, risk)?;
    let stage = builder
        .stage(id)
        .cloned()
        .ok_or(EstimatorError::StageNotFound { id })?;

    let change = if selected {
        format!("Selected risk '{risk}'")
    } else {
        format!("Deselected risk '{risk}'")
    };
    Ok(UpdateResult::with_changes(stage, vec![change]))
}
