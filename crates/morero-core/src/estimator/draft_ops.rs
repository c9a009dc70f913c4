//! Builder-session operations for the Estimator.
//!
//! Every edit loads the draft file, applies one of the shared
//! [`handlers`](crate::handlers) and saves it again. Refused edits leave the
//! file as it was.

use super::Estimator;
use crate::{
    builder::ScenarioBuilder,
    display::{CreateResult, DeleteResult, UpdateResult},
    error::Result,
    handlers,
    models::StageDraft,
    params::{RenameProject, StageRef, ToggleRisk, UpdateStage},
};

impl Estimator {
    /// Loads the current builder session, or the sample session if none has
    /// been saved.
    pub async fn load_draft(&self) -> Result<ScenarioBuilder> {
        self.with_store(|store| store.load()).await
    }

    /// Replaces the project name. Blank names are kept and refused on submit.
    pub async fn rename_project(&self, params: &RenameProject) -> Result<ScenarioBuilder> {
        let params = params.clone();
        self.with_store(move |store| {
            let (builder, ()) = store.modify(|builder| {
                handlers::handle_rename_project(builder, &params);
                Ok(())
            })?;
            Ok(builder)
        })
        .await
    }

    /// Appends a blank stage.
    pub async fn add_stage(&self) -> Result<CreateResult<StageDraft>> {
        self.with_store(|store| {
            let (_, created) = store.modify(handlers::handle_add_stage)?;
            Ok(created)
        })
        .await
    }

    /// Removes a stage.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::LastStage` - only one stage is left
    /// * `EstimatorError::StageNotFound` - no stage has this id
    pub async fn remove_stage(&self, params: &StageRef) -> Result<DeleteResult<StageDraft>> {
        let params = params.clone();
        self.with_store(move |store| {
            let (_, removed) =
                store.modify(|builder| handlers::handle_remove_stage(builder, &params))?;
            Ok(removed)
        })
        .await
    }

    /// Replaces the provided fields of a stage, reporting each change.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::InvalidInput` - no field given, or a value is not
    ///   valid for its field
    /// * `EstimatorError::StageNotFound` - no stage has this id
    pub async fn update_stage(&self, params: &UpdateStage) -> Result<UpdateResult<StageDraft>> {
        // Reject bad values before touching the draft file.
        params.validate()?;
        let params = params.clone();
        self.with_store(move |store| {
            let (_, updated) =
                store.modify(|builder| handlers::handle_update_stage(builder, &params))?;
            Ok(updated)
        })
        .await
    }

    /// Selects a risk factor on a stage if absent, deselects it if present.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::InvalidInput` - the risk factor name is unknown
    /// * `EstimatorError::StageNotFound` - no stage has this id
    pub async fn toggle_risk(&self, params: &ToggleRisk) -> Result<UpdateResult<StageDraft>> {
        params.validate()?;
        let params = params.clone();
        self.with_store(move |store| {
            let (_, toggled) =
                store.modify(|builder| handlers::handle_toggle_risk(builder, &params))?;
            Ok(toggled)
        })
        .await
    }

    /// Discards the saved session and starts over from the sample.
    pub async fn reset_draft(&self) -> Result<ScenarioBuilder> {
        self.with_store(|store| store.reset()).await
    }
}
