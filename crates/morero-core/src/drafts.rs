//! Draft file storage for command-line sessions.
//!
//! Each CLI invocation is a separate process, so the builder session lives
//! in a small JSON file between commands. Only the editable draft is kept;
//! results are always recomputed and never written.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    builder::ScenarioBuilder,
    error::{EstimatorError, Result},
};

/// Reads and writes the builder session at a fixed path.
#[derive(Debug, Clone)]
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved session, or the sample session if nothing is saved
    /// yet.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::FileSystem` - the file exists but cannot be read
    /// * `EstimatorError::Serialization` - the file is not a valid session
    pub fn load(&self) -> Result<ScenarioBuilder> {
        if !self.path.exists() {
            debug!("No draft at {}, starting from sample", self.path.display());
            return Ok(ScenarioBuilder::sample());
        }

        let contents =
            fs::read_to_string(&self.path).map_err(|e| EstimatorError::file_system(&self.path, e))?;
        let builder = serde_json::from_str(&contents)?;
        debug!("Loaded draft from {}", self.path.display());
        Ok(builder)
    }

    /// Persist the session. Writes to a sibling temporary file first and
    /// renames it into place so a failed write never leaves a torn draft.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::FileSystem` - the directory or file cannot be written
    /// * `EstimatorError::Serialization` - the session cannot be serialized
    pub fn save(&self, builder: &ScenarioBuilder) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| EstimatorError::file_system(parent, e))?;
        }

        let contents = serde_json::to_string_pretty(builder)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, contents).map_err(|e| EstimatorError::file_system(&staging, e))?;
        fs::rename(&staging, &self.path).map_err(|e| EstimatorError::file_system(&self.path, e))?;
        debug!("Saved draft to {}", self.path.display());
        Ok(())
    }

    /// Load, apply a change, and save only if the change succeeded.
    ///
    /// A refused change (for example removing the last stage) leaves the file
    /// untouched. The file is not locked: with two processes editing the same
    /// draft, the later save wins and the other edit is lost.
    pub fn modify<T, F>(&self, change: F) -> Result<(ScenarioBuilder, T)>
    where
        F: FnOnce(&mut ScenarioBuilder) -> Result<T>,
    {
        let mut builder = self.load()?;
        let outcome = change(&mut builder)?;
        self.save(&builder)?;
        Ok((builder, outcome))
    }

    /// Replace the saved session with the sample session.
    pub fn reset(&self) -> Result<ScenarioBuilder> {
        let builder = ScenarioBuilder::sample();
        self.save(&builder)?;
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::RiskFactor;

    fn store() -> (TempDir, DraftStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = DraftStore::new(dir.path().join("nested").join("draft.json"));
        (dir, store)
    }

    #[test]
    fn test_load_missing_file_gives_sample() {
        let (_dir, store) = store();
        assert_eq!(store.load().unwrap(), ScenarioBuilder::sample());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, store) = store();
        let mut builder = ScenarioBuilder::sample();
        builder.set_project_name("Ring Road");
        builder.add_stage().unwrap();

        store.save(&builder).unwrap();
        assert_eq!(store.load().unwrap(), builder);
    }

    #[test]
    fn test_modify_refused_change_leaves_file() {
        let (_dir, store) = store();
        let first = store.load().unwrap().stages()[0].id;
        store.reset().unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let err = store.modify(|b| b.remove_stage(first)).unwrap_err();
        assert!(matches!(err, EstimatorError::LastStage));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_modify_persists_change() {
        let (_dir, store) = store();
        let (_, id) = store.modify(ScenarioBuilder::add_stage).unwrap();
        store
            .modify(|b| b.toggle_risk(id, RiskFactor::SupplierDelays))
            .unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded
            .stage(id)
            .unwrap()
            .risks
            .contains(&RiskFactor::SupplierDelays));
    }

    #[test]
    fn test_last_save_wins() {
        let (_dir, store) = store();
        let stale = store.reset().unwrap();
        store.modify(ScenarioBuilder::add_stage).unwrap();
        assert_eq!(store.load().unwrap().stages().len(), 2);

        store.save(&stale).unwrap();
        assert_eq!(store.load().unwrap(), stale);
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let (_dir, store) = store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ broken").unwrap();
        assert!(matches!(
            store.load(),
            Err(EstimatorError::Serialization { .. })
        ));
    }
}
