//! Builder for creating and configuring Estimator instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use super::Estimator;
use crate::{
    analysis::{Predictor, DEFAULT_DELAY},
    drafts::DraftStore,
    error::{EstimatorError, Result},
};

/// Builder for creating and configuring Estimator instances.
#[derive(Debug, Clone)]
pub struct EstimatorBuilder {
    draft_path: Option<PathBuf>,
    delay: Duration,
}

impl EstimatorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            draft_path: None,
            delay: DEFAULT_DELAY,
        }
    }

    /// Sets a custom draft file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/morero/draft.json` or
    /// `~/.local/share/morero/draft.json`
    pub fn with_draft_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.draft_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the processing delay before results are released.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Builds the configured estimator.
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError::XdgDirectory` if no default draft location
    /// can be determined
    /// Returns `EstimatorError::FileSystem` if the draft directory cannot be
    /// created
    pub async fn build(self) -> Result<Estimator> {
        let draft_path = if let Some(path) = self.draft_path {
            path
        } else {
            Self::default_draft_path()?
        };

        if let Some(parent) = draft_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            let parent = parent.to_path_buf();
            tokio::task::spawn_blocking(move || {
                std::fs::create_dir_all(&parent).map_err(|e| EstimatorError::file_system(&parent, e))
            })
            .await
            .map_err(|e| EstimatorError::Configuration {
                message: format!("Task join error: {e}"),
            })??;
        }

        Ok(Estimator::new(
            DraftStore::new(draft_path),
            Predictor::new(self.delay),
        ))
    }

    /// Returns the default draft path following XDG Base Directory
    /// specification.
    fn default_draft_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("morero")
            .place_data_file("draft.json")
            .map_err(|e| EstimatorError::XdgDirectory(e.to_string()))
    }
}

impl Default for EstimatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
