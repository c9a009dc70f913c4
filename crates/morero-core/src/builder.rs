//! Scenario builder: the explicit, session-owned editing state.
//!
//! A [`ScenarioBuilder`] holds the project name and the ordered stage drafts
//! while a user edits them. It always contains at least one stage. When the
//! user submits, [`ScenarioBuilder::submit`] validates everything and hands
//! back an immutable [`Scenario`] snapshot, so scoring never observes the
//! mutable state.
//!
//! ```rust
//! use morero_core::{
//!     models::{RiskFactor, StageKind, StageUpdate},
//!     ScenarioBuilder,
//! };
//!
//! let mut builder = ScenarioBuilder::new("Harbour Wall");
//! let id = builder.stages()[0].id;
//! builder.update_stage(id, StageUpdate::Name(Some(StageKind::Foundation)))?;
//! builder.update_stage(id, StageUpdate::parse("duration", "6")?)?;
//! builder.update_stage(id, StageUpdate::parse("start_date", "2025-05-01")?)?;
//! builder.toggle_risk(id, RiskFactor::WeatherRisks)?;
//!
//! let scenario = builder.submit()?;
//! assert_eq!(scenario.stages.len(), 1);
//! # Ok::<(), morero_core::EstimatorError>(())
//! ```

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{EstimatorError, Result},
    models::{
        DurationUnit, RiskFactor, Scenario, StageDraft, StageDuration, StageId, StageKind,
        StageUpdate,
    },
};

/// Project name the sample session starts with.
pub const SAMPLE_PROJECT_NAME: &str = "Bridge Construction";

/// Editing state for one scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "BuilderState")]
pub struct ScenarioBuilder {
    project_name: String,
    stages: Vec<StageDraft>,
    next_id: u64,
}

/// Unchecked serialized form, validated on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuilderState {
    project_name: String,
    stages: Vec<StageDraft>,
    #[serde(default)]
    next_id: u64,
}

impl TryFrom<BuilderState> for ScenarioBuilder {
    type Error = EstimatorError;

    fn try_from(state: BuilderState) -> Result<Self> {
        if state.stages.is_empty() {
            return Err(EstimatorError::LastStage);
        }

        let mut seen = HashSet::new();
        for stage in &state.stages {
            if !seen.insert(stage.id) {
                return Err(EstimatorError::invalid_input("stages")
                    .with_reason(format!("Duplicate stage ID {}", stage.id)));
            }
        }

        let mut after_max = 1;
        for stage in &state.stages {
            let next = stage.id.0.checked_add(1).ok_or_else(|| {
                EstimatorError::invalid_input("stages")
                    .with_reason(format!("Stage ID {} is out of range", stage.id))
            })?;
            after_max = after_max.max(next);
        }

        Ok(Self {
            project_name: state.project_name,
            stages: state.stages,
            next_id: state.next_id.max(after_max),
        })
    }
}

impl ScenarioBuilder {
    /// A session with the given project name and one blank stage.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            stages: vec![StageDraft::blank(StageId(1))],
            next_id: 2,
        }
    }

    /// The default session: a bridge project with a three-month planning
    /// stage starting on 2025-01-01.
    pub fn sample() -> Self {
        let mut stage = StageDraft::blank(StageId(1));
        stage.name = Some(StageKind::Planning);
        stage.duration = StageDuration::new(3.0);
        stage.unit = DurationUnit::Months;
        stage.start_date = Some(jiff::civil::date(2025, 1, 1));

        Self {
            project_name: SAMPLE_PROJECT_NAME.to_string(),
            stages: vec![stage],
            next_id: 2,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Stage drafts in scenario order.
    pub fn stages(&self) -> &[StageDraft] {
        &self.stages
    }

    /// Look up a stage draft by id.
    pub fn stage(&self, id: StageId) -> Option<&StageDraft> {
        self.stages.iter().find(|stage| stage.id == id)
    }

    fn stage_mut(&mut self, id: StageId) -> Result<&mut StageDraft> {
        self.stages
            .iter_mut()
            .find(|stage| stage.id == id)
            .ok_or(EstimatorError::StageNotFound { id })
    }

    /// Replace the project name. Blank names are accepted here and rejected
    /// on submit.
    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.project_name = name.into();
        debug!("Project renamed to '{}'", self.project_name);
    }

    /// Append a blank stage and return its freshly assigned id.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::InvalidInput` - every stage id has been handed out
    pub fn add_stage(&mut self) -> Result<StageId> {
        let id = StageId(self.next_id);
        self.next_id = self.next_id.checked_add(1).ok_or_else(|| {
            EstimatorError::invalid_input("stages").with_reason("No stage IDs left in this scenario")
        })?;
        self.stages.push(StageDraft::blank(id));
        debug!("Added stage {id}");
        Ok(id)
    }

    /// Remove a stage.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::LastStage` - the scenario has a single stage; it is
    ///   left unchanged
    /// * `EstimatorError::StageNotFound` - no stage has this id
    pub fn remove_stage(&mut self, id: StageId) -> Result<StageDraft> {
        if self.stages.len() == 1 {
            return Err(EstimatorError::LastStage);
        }
        let position = self
            .stages
            .iter()
            .position(|stage| stage.id == id)
            .ok_or(EstimatorError::StageNotFound { id })?;
        debug!("Removed stage {id}");
        Ok(self.stages.remove(position))
    }

    /// Replace one field of a stage.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::StageNotFound` - no stage has this id
    pub fn update_stage(&mut self, id: StageId, update: StageUpdate) -> Result<&StageDraft> {
        let stage = self.stage_mut(id)?;
        match update {
            StageUpdate::Name(name) => stage.name = name,
            StageUpdate::Duration(duration) => stage.duration = duration,
            StageUpdate::Unit(unit) => stage.unit = unit,
            StageUpdate::StartDate(date) => stage.start_date = date,
        }
        debug!("Updated {} of stage {id}", update.field());
        Ok(&*stage)
    }

    /// Replace several fields of one stage together. Either every update is
    /// applied or, for an unknown id, none is.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::StageNotFound` - no stage has this id
    pub fn apply_updates(&mut self, id: StageId, updates: &[StageUpdate]) -> Result<&StageDraft> {
        self.stage_mut(id)?;
        for update in updates {
            self.update_stage(id, *update)?;
        }
        self.stage(id).ok_or(EstimatorError::StageNotFound { id })
    }

    /// Select the risk factor if absent, deselect it if present. Returns
    /// whether the factor is selected afterwards.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::StageNotFound` - no stage has this id
    pub fn toggle_risk(&mut self, id: StageId, risk: RiskFactor) -> Result<bool> {
        let stage = self.stage_mut(id)?;
        let selected = if stage.risks.remove(&risk) {
            false
        } else {
            stage.risks.insert(risk);
            true
        };
        debug!(
            "{} '{}' on stage {id}",
            if selected { "Selected" } else { "Deselected" },
            risk.as_str()
        );
        Ok(selected)
    }

    /// Validate the session and take an immutable snapshot of it.
    ///
    /// All-or-nothing: the first violation is reported and nothing is
    /// submitted.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::EmptyProjectName` - project name is blank
    /// * `EstimatorError::IncompleteStage` - the first stage (1-based
    ///   position) missing a name, duration or start date
    pub fn submit(&self) -> Result<Scenario> {
        if self.project_name.trim().is_empty() {
            return Err(EstimatorError::EmptyProjectName);
        }

        let stages = self
            .stages
            .iter()
            .enumerate()
            .map(|(index, draft)| {
                draft.to_stage().ok_or(EstimatorError::IncompleteStage {
                    position: index + 1,
                    field: draft.missing_field().unwrap_or("details"),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Submitted scenario '{}' with {} stage(s)",
            self.project_name,
            stages.len()
        );

        Ok(Scenario {
            project_name: self.project_name.clone(),
            stages,
        })
    }
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(builder: &mut ScenarioBuilder, id: StageId) {
        builder
            .update_stage(id, StageUpdate::Name(Some(StageKind::Delivery)))
            .unwrap();
        builder
            .update_stage(id, StageUpdate::Duration(StageDuration::new(2.0)))
            .unwrap();
        builder
            .update_stage(id, StageUpdate::StartDate(Some(jiff::civil::date(2025, 6, 1))))
            .unwrap();
    }

    #[test]
    fn test_sample_session_matches_defaults() {
        let builder = ScenarioBuilder::sample();
        assert_eq!(builder.project_name(), "Bridge Construction");
        assert_eq!(builder.stages().len(), 1);

        let stage = &builder.stages()[0];
        assert_eq!(stage.name, Some(StageKind::Planning));
        assert_eq!(stage.duration, StageDuration::new(3.0));
        assert_eq!(stage.unit, DurationUnit::Months);
        assert_eq!(stage.start_date, Some(jiff::civil::date(2025, 1, 1)));
        assert!(stage.risks.is_empty());
    }

    #[test]
    fn test_add_stage_assigns_unique_ids() {
        let mut builder = ScenarioBuilder::sample();
        let a = builder.add_stage().unwrap();
        let b = builder.add_stage().unwrap();
        assert_ne!(a, b);
        assert_ne!(a, builder.stages()[0].id);
        assert_eq!(builder.stages().len(), 3);

        let added = builder.stage(b).unwrap();
        assert_eq!(added.name, None);
        assert_eq!(added.duration, None);
        assert_eq!(added.unit, DurationUnit::Months);
        assert_eq!(added.start_date, None);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut builder = ScenarioBuilder::sample();
        let a = builder.add_stage().unwrap();
        builder.remove_stage(a).unwrap();
        let b = builder.add_stage().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_last_stage_is_refused() {
        let mut builder = ScenarioBuilder::sample();
        let before = builder.clone();
        let only = builder.stages()[0].id;

        let err = builder.remove_stage(only).unwrap_err();
        assert!(matches!(err, EstimatorError::LastStage));
        assert_eq!(err.to_string(), "At least one stage is required");
        assert_eq!(builder, before);
    }

    #[test]
    fn test_remove_unknown_stage() {
        let mut builder = ScenarioBuilder::sample();
        builder.add_stage().unwrap();
        let err = builder.remove_stage(StageId(99)).unwrap_err();
        assert!(matches!(err, EstimatorError::StageNotFound { id: StageId(99) }));
        assert_eq!(builder.stages().len(), 2);
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let mut builder = ScenarioBuilder::sample();
        let first = builder.stages()[0].id;
        let second = builder.add_stage().unwrap();
        let third = builder.add_stage().unwrap();

        let removed = builder.remove_stage(second).unwrap();
        assert_eq!(removed.id, second);
        let ids: Vec<_> = builder.stages().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![first, third]);
    }

    #[test]
    fn test_toggle_risk_is_symmetric() {
        let mut builder = ScenarioBuilder::sample();
        let id = builder.stages()[0].id;

        assert!(builder.toggle_risk(id, RiskFactor::SupplierDelays).unwrap());
        assert!(builder.stage(id).unwrap().risks.contains(&RiskFactor::SupplierDelays));

        assert!(!builder.toggle_risk(id, RiskFactor::SupplierDelays).unwrap());
        assert!(builder.stage(id).unwrap().risks.is_empty());
    }

    #[test]
    fn test_toggle_unknown_stage() {
        let mut builder = ScenarioBuilder::sample();
        assert!(matches!(
            builder.toggle_risk(StageId(42), RiskFactor::WeatherRisks),
            Err(EstimatorError::StageNotFound { .. })
        ));
    }

    #[test]
    fn test_update_can_clear_field() {
        let mut builder = ScenarioBuilder::sample();
        let id = builder.stages()[0].id;
        builder.update_stage(id, StageUpdate::StartDate(None)).unwrap();
        assert_eq!(builder.stage(id).unwrap().start_date, None);
    }

    #[test]
    fn test_submit_rejects_blank_project_name() {
        let mut builder = ScenarioBuilder::sample();
        builder.set_project_name("   ");
        assert!(matches!(
            builder.submit(),
            Err(EstimatorError::EmptyProjectName)
        ));
    }

    #[test]
    fn test_submit_project_name_checked_before_stages() {
        let mut builder = ScenarioBuilder::new("");
        builder.add_stage().unwrap();
        assert!(matches!(
            builder.submit(),
            Err(EstimatorError::EmptyProjectName)
        ));
    }

    #[test]
    fn test_submit_names_first_incomplete_stage() {
        let mut builder = ScenarioBuilder::sample();
        let second = builder.add_stage().unwrap();
        builder
            .update_stage(second, StageUpdate::Name(Some(StageKind::Finishing)))
            .unwrap();
        builder
            .update_stage(second, StageUpdate::Duration(StageDuration::new(4.0)))
            .unwrap();
        builder.add_stage().unwrap();

        match builder.submit().unwrap_err() {
            EstimatorError::IncompleteStage { position, field } => {
                assert_eq!(position, 2);
                assert_eq!(field, "a start date");
            }
            other => panic!("Expected IncompleteStage, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_snapshot_is_independent() {
        let mut builder = ScenarioBuilder::sample();
        let id = builder.add_stage().unwrap();
        complete(&mut builder, id);

        let scenario = builder.submit().unwrap();
        builder.toggle_risk(id, RiskFactor::WeatherRisks).unwrap();

        assert_eq!(scenario.project_name, "Bridge Construction");
        assert_eq!(scenario.stages.len(), 2);
        assert!(scenario.stages[1].risks.is_empty());
        assert_eq!(scenario.stages[1].name, StageKind::Delivery);
    }

    #[test]
    fn test_deserialize_rejects_empty_stage_list() {
        let json = r#"{"projectName":"Empty","stages":[],"nextId":1}"#;
        assert!(serde_json::from_str::<ScenarioBuilder>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let json = r#"{"projectName":"Dup","stages":[{"id":1},{"id":1}],"nextId":2}"#;
        assert!(serde_json::from_str::<ScenarioBuilder>(json).is_err());
    }

    #[test]
    fn test_deserialize_repairs_stale_next_id() {
        let json = r#"{"projectName":"Stale","stages":[{"id":7}],"nextId":3}"#;
        let mut builder: ScenarioBuilder = serde_json::from_str(json).unwrap();
        assert_eq!(builder.add_stage().unwrap(), StageId(8));
    }

    #[test]
    fn test_deserialize_rejects_id_without_successor() {
        let json = r#"{"projectName":"X","stages":[{"id":18446744073709551615}],"nextId":1}"#;
        match serde_json::from_str::<ScenarioBuilder>(json) {
            Err(err) => assert!(err.to_string().contains("out of range")),
            Ok(builder) => panic!("Expected rejection, got {builder:?}"),
        }
    }

    #[test]
    fn test_add_stage_refuses_when_ids_exhausted() {
        let json = r#"{"projectName":"X","stages":[{"id":1}],"nextId":18446744073709551615}"#;
        let mut builder: ScenarioBuilder = serde_json::from_str(json).unwrap();
        let before = builder.clone();

        match builder.add_stage().unwrap_err() {
            EstimatorError::InvalidInput { field, .. } => assert_eq!(field, "stages"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
        assert_eq!(builder, before);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut builder = ScenarioBuilder::sample();
        let id = builder.add_stage().unwrap();
        builder.toggle_risk(id, RiskFactor::ComplicatedDesign).unwrap();

        let json = serde_json::to_string(&builder).unwrap();
        let restored: ScenarioBuilder = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, builder);
    }
}
