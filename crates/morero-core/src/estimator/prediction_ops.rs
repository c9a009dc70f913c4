//! Submission and prediction operations for the Estimator.

use log::info;

use super::Estimator;
use crate::{
    address::{Route, Submission},
    error::Result,
    models::{Assessment, Scenario},
    params::OpenResults,
};

impl Estimator {
    /// Validates the saved session and encodes it into a results address.
    /// The session itself is left as it was.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::EmptyProjectName` - project name is blank
    /// * `EstimatorError::IncompleteStage` - a stage is missing a name,
    ///   duration or start date
    pub async fn submit(&self) -> Result<Submission> {
        let builder = self.load_draft().await?;
        let submission = Submission::from_builder(&builder)?;
        info!(
            "Submitted '{}' with {} stage(s)",
            submission.scenario.project_name,
            submission.scenario.len()
        );
        Ok(submission)
    }

    /// Resolves a results address. Unusable addresses lead back to the
    /// builder.
    pub fn open_results(&self, params: &OpenResults) -> Route {
        Route::resolve(&params.address)
    }

    /// Scores a scenario after the processing delay. Dropping the returned
    /// future before it completes cancels the run.
    pub async fn predict(&self, scenario: Scenario) -> Result<Assessment> {
        info!(
            "Running prediction for '{}' ({} ms delay)",
            scenario.project_name,
            self.predictor.delay().as_millis()
        );
        self.predictor.run(scenario).await
    }
}
