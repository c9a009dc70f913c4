//! Parameter structures for estimator operations
//!
//! Shared parameter structures used by every interface (CLI, MCP) without
//! framework-specific derives. Interface layers wrap them: the CLI converts
//! its clap argument structs into these, the MCP server deserializes them
//! through a transparent wrapper that adds a JSON schema.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Values arrive as strings and are validated here into the typed
//! [`StageUpdate`] and [`RiskFactor`] values the builder accepts.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{EstimatorError, Result},
    models::{RiskFactor, StageId, StageUpdate},
};

/// Parameters for operations on a single stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StageRef {
    /// ID of the stage
    pub id: u64,
}

impl StageRef {
    pub fn stage_id(&self) -> StageId {
        StageId(self.id)
    }
}

/// Parameters for renaming the project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RenameProject {
    /// New project name (free text)
    pub name: String,
}

/// Parameters for editing stage fields.
///
/// Each provided field is replaced; an empty string clears it. Fields that
/// are not provided are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateStage {
    /// ID of the stage to update
    pub id: u64,
    /// Stage name, one of: Planning, Procurement, Delivery, Foundation,
    /// Structural Work, Finishing, Testing & Commissioning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Planned duration, a positive number such as 3 or 2.5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Duration unit, 'weeks' or 'months'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Start date as YYYY-MM-DD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

impl UpdateStage {
    pub fn stage_id(&self) -> StageId {
        StageId(self.id)
    }

    /// Validate the provided fields into typed updates, in field order.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::InvalidInput` - no field was provided, or a value
    ///   is invalid for its field
    ///
    /// # Examples
    ///
    /// ```rust
    /// use morero_core::{models::StageUpdate, params::UpdateStage};
    ///
    /// let params = UpdateStage {
    ///     id: 1,
    ///     unit: Some("weeks".to_string()),
    ///     duration: Some("6".to_string()),
    ///     ..Default::default()
    /// };
    /// let updates = params.validate()?;
    /// assert_eq!(updates.len(), 2);
    /// assert_eq!(updates[0].field(), "duration");
    /// # Ok::<(), morero_core::EstimatorError>(())
    /// ```
    pub fn validate(&self) -> Result<Vec<StageUpdate>> {
        let fields = [
            ("name", &self.name),
            ("duration", &self.duration),
            ("unit", &self.unit),
            ("start_date", &self.start_date),
        ];

        let updates = fields
            .iter()
            .filter_map(|(field, value)| value.as_deref().map(|value| (field, value)))
            .map(|(field, value)| StageUpdate::parse(field, value))
            .collect::<Result<Vec<_>>>()?;

        if updates.is_empty() {
            return Err(EstimatorError::invalid_input("fields").with_reason(
                "Provide at least one of name, duration, unit or start_date to update",
            ));
        }
        Ok(updates)
    }
}

/// Parameters for toggling a risk factor on a stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ToggleRisk {
    /// ID of the stage
    pub id: u64,
    /// Risk factor, one of: Complicated Design, Bad Ground Conditions,
    /// Resource Shortages, Regulatory Approvals, Supplier Delays, Weather Risks
    pub risk: String,
}

impl ToggleRisk {
    pub fn stage_id(&self) -> StageId {
        StageId(self.id)
    }

    /// Validate the risk factor name.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::InvalidInput` - the name is not one of the six
    ///   risk factors
    pub fn validate(&self) -> Result<RiskFactor> {
        self.risk
            .parse()
            .map_err(|reason| EstimatorError::invalid_input("risk").with_reason(reason))
    }
}

/// Parameters for opening a results address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OpenResults {
    /// Results address as produced by submitting a scenario
    pub address: String,
}
