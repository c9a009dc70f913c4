//! Scenario snapshot handed from the builder to scoring.

use serde::{Deserialize, Serialize};

use super::Stage;

/// Display name used when a results address carries no project name.
pub const DEFAULT_PROJECT_NAME: &str = "Project";

/// An immutable, validated scenario: a named project and its ordered,
/// non-empty list of stages.
///
/// Produced by [`crate::ScenarioBuilder::submit`] or by resolving a results
/// address; scoring never sees the mutable builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Free-text project name
    pub project_name: String,

    /// Ordered stages, never empty
    pub stages: Vec<Stage>,
}

impl Scenario {
    /// Number of stages in the scenario.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false for a scenario built through the builder or an address.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
