//! High-level estimator API for command-line sessions.
//!
//! The [`Estimator`] ties together the draft file that holds the builder
//! session between commands and the [`Predictor`] that releases results after
//! the processing delay.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Draft Ops     │    │ ScenarioBuilder │    │   DraftStore    │
//! │ (add, remove,   │───▶│ (validation,    │───▶│  (JSON file)    │
//! │  update, ...)   │    │  snapshots)     │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Prediction Ops  │    │    Predictor    │    │    Scoring      │
//! │ (submit, open,  │───▶│ (delay, cancel) │───▶│ (fixed table)   │
//! │  predict)       │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configuration and construction of [`Estimator`]
//! - [`draft_ops`]: builder-session edits persisted to the draft file
//! - [`prediction_ops`]: submission, results addresses and prediction runs
//!
//! # Usage
//!
//! ```rust,no_run
//! use morero_core::{params::ToggleRisk, EstimatorBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let estimator = EstimatorBuilder::new()
//!     .with_draft_path(Some("/tmp/morero/draft.json"))
//!     .build()
//!     .await?;
//!
//! let stage = estimator.add_stage().await?.resource;
//! estimator
//!     .toggle_risk(&ToggleRisk {
//!         id: stage.id.0,
//!         risk: "Weather Risks".to_string(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use tokio::task;

pub mod builder;
pub mod draft_ops;
pub mod prediction_ops;

pub use builder::EstimatorBuilder;

use crate::{
    analysis::Predictor,
    drafts::DraftStore,
    error::{EstimatorError, Result},
};

/// Main estimator interface for command-line sessions.
pub struct Estimator {
    pub(crate) store: DraftStore,
    pub(crate) predictor: Predictor,
}

impl Estimator {
    pub(crate) fn new(store: DraftStore, predictor: Predictor) -> Self {
        Self { store, predictor }
    }

    /// Location of the draft file backing this session.
    pub fn draft_path(&self) -> &Path {
        self.store.path()
    }

    /// Predictor used for results.
    pub fn predictor(&self) -> Predictor {
        self.predictor
    }

    /// Run a blocking draft-file operation off the async runtime.
    pub(crate) async fn with_store<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&DraftStore) -> Result<T> + Send + 'static,
    {
        let store = self.store.clone();
        task::spawn_blocking(move || operation(&store))
            .await
            .map_err(|e| EstimatorError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }
}
