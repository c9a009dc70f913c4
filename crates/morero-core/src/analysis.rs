//! Prediction runs with a cancellable processing delay.
//!
//! Scoring itself is instantaneous; a run waits for a fixed delay first,
//! standing in for a backend round-trip. The wait lives in a spawned tokio
//! task raced against a cancellation signal, so a run abandoned by the user
//! stops instead of lingering.

use std::time::Duration;

use log::debug;
use tokio::{
    sync::oneshot,
    task::{self, JoinHandle},
    time,
};

use crate::{
    error::{EstimatorError, Result},
    models::{Assessment, Scenario},
    scoring,
};

/// Delay before results are released.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Starts prediction runs with a configured delay.
#[derive(Debug, Clone, Copy)]
pub struct Predictor {
    delay: Duration,
}

impl Predictor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start a run for the scenario. Must be called within a tokio runtime.
    pub fn spawn(&self, scenario: Scenario) -> PendingPrediction {
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        let delay = self.delay;

        let handle = task::spawn(async move {
            tokio::select! {
                _ = time::sleep(delay) => {
                    debug!("Prediction for '{}' finished waiting", scenario.project_name);
                    Ok(scoring::assess(&scenario))
                }
                _ = cancel_rx => {
                    debug!("Prediction for '{}' cancelled", scenario.project_name);
                    Err(EstimatorError::Cancelled)
                }
            }
        });

        PendingPrediction {
            cancel: Some(cancel_tx),
            handle: Some(handle),
        }
    }

    /// Start a run and wait for its results.
    pub async fn run(&self, scenario: Scenario) -> Result<Assessment> {
        self.spawn(scenario).wait().await
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

/// A prediction in flight. Dropping it cancels the run.
#[derive(Debug)]
pub struct PendingPrediction {
    cancel: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<Result<Assessment>>>,
}

impl PendingPrediction {
    /// Signal the run to stop. Has no effect once results are ready.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            // The receiver is gone once the run has finished.
            let _ = cancel.send(());
        }
    }

    /// Whether the run has completed, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.handle
            .as_ref()
            .map_or(true, |handle| handle.is_finished())
    }

    /// Wait for the results.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::Cancelled` - the run was cancelled first
    /// * `EstimatorError::Configuration` - the task could not be joined
    pub async fn wait(mut self) -> Result<Assessment> {
        let Some(handle) = self.handle.take() else {
            return Err(EstimatorError::Cancelled);
        };
        // Keep the sender alive until the task resolves so waiting does not
        // read as cancellation.
        let _cancel = self.cancel.take();

        handle.await.map_err(|e| EstimatorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

impl Drop for PendingPrediction {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::models::{DurationUnit, RiskFactor, Stage, StageDuration, StageId, StageKind};

    fn scenario() -> Scenario {
        Scenario {
            project_name: "Tunnel".to_string(),
            stages: vec![Stage {
                id: StageId(1),
                name: StageKind::Foundation,
                duration: StageDuration::new(8.0).unwrap(),
                unit: DurationUnit::Weeks,
                start_date: "2025-02-03".parse().unwrap(),
                risks: [RiskFactor::BadGroundConditions]
                    .into_iter()
                    .collect::<BTreeSet<_>>(),
            }],
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_waits_for_delay_then_scores() {
        let predictor = Predictor::default();
        let started = time::Instant::now();

        let assessment = predictor.run(scenario()).await.unwrap();

        assert!(started.elapsed() >= DEFAULT_DELAY);
        assert_eq!(assessment.project_name, "Tunnel");
        assert_eq!(assessment.results.len(), 1);
        assert_eq!(assessment.results[0].risk, 35);
        assert_eq!(assessment.results[0].notes, "Ground conditions");
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_not_finished_before_delay() {
        let pending = Predictor::new(Duration::from_secs(5)).spawn(scenario());
        time::sleep(Duration::from_secs(1)).await;
        assert!(!pending.is_finished());
        assert!(pending.wait().await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_run() {
        let mut pending = Predictor::default().spawn(scenario());
        pending.cancel();

        let result = pending.wait().await;
        assert!(matches!(result, Err(EstimatorError::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_completion_keeps_results() {
        let mut pending = Predictor::new(Duration::from_millis(10)).spawn(scenario());
        time::sleep(Duration::from_millis(50)).await;
        pending.cancel();

        assert!(pending.wait().await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_scenario_same_results() {
        let predictor = Predictor::new(Duration::ZERO);
        let first = predictor.run(scenario()).await.unwrap();
        let second = predictor.run(scenario()).await.unwrap();
        assert_eq!(first, second);
    }
}
