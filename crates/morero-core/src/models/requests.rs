//! Typed field updates applied to a stage draft.

use jiff::civil::Date;

use super::{DurationUnit, StageDuration, StageKind};
use crate::error::{EstimatorError, Result};

/// Replacement value for one field of a stage draft. `None` clears the
/// field back to blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageUpdate {
    Name(Option<StageKind>),
    Duration(Option<StageDuration>),
    Unit(DurationUnit),
    StartDate(Option<Date>),
}

impl StageUpdate {
    /// Parse a field name and a raw value into a typed update.
    ///
    /// Field names are `name`, `duration`, `unit` and `start_date` (also
    /// `startDate` and `start-date`). A blank value clears the field, except
    /// for `unit` which always holds a value.
    ///
    /// # Errors
    ///
    /// * `EstimatorError::InvalidInput` - unknown field, value outside the
    ///   fixed enumerations, non-positive duration or malformed date
    ///
    /// # Examples
    ///
    /// ```rust
    /// use morero_core::models::{StageKind, StageUpdate};
    ///
    /// let update = StageUpdate::parse("name", "structural work")?;
    /// assert_eq!(update, StageUpdate::Name(Some(StageKind::StructuralWork)));
    ///
    /// let cleared = StageUpdate::parse("duration", "")?;
    /// assert_eq!(cleared, StageUpdate::Duration(None));
    /// # Ok::<(), morero_core::EstimatorError>(())
    /// ```
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let value = value.trim();
        let field_key = field.trim().to_lowercase().replace(['-', '_'], "");

        match field_key.as_str() {
            "name" => {
                if value.is_empty() {
                    return Ok(StageUpdate::Name(None));
                }
                value
                    .parse::<StageKind>()
                    .map(|kind| StageUpdate::Name(Some(kind)))
                    .map_err(|reason| EstimatorError::invalid_input("name").with_reason(reason))
            }
            "duration" => {
                if value.is_empty() {
                    return Ok(StageUpdate::Duration(None));
                }
                value
                    .parse::<StageDuration>()
                    .map(|duration| StageUpdate::Duration(Some(duration)))
                    .map_err(|reason| EstimatorError::invalid_input("duration").with_reason(reason))
            }
            "unit" => value
                .parse::<DurationUnit>()
                .map(StageUpdate::Unit)
                .map_err(|reason| EstimatorError::invalid_input("unit").with_reason(reason)),
            "startdate" => {
                if value.is_empty() {
                    return Ok(StageUpdate::StartDate(None));
                }
                value
                    .parse::<Date>()
                    .map(|date| StageUpdate::StartDate(Some(date)))
                    .map_err(|e| {
                        EstimatorError::invalid_input("start_date")
                            .with_reason(format!("Invalid date: {value}. Expected YYYY-MM-DD ({e})"))
                    })
            }
            _ => Err(EstimatorError::invalid_input("field").with_reason(format!(
                "Unknown field: {field}. Must be 'name', 'duration', 'unit' or 'start_date'"
            ))),
        }
    }

    /// Name of the field this update targets.
    pub fn field(&self) -> &'static str {
        match self {
            StageUpdate::Name(_) => "name",
            StageUpdate::Duration(_) => "duration",
            StageUpdate::Unit(_) => "unit",
            StageUpdate::StartDate(_) => "start_date",
        }
    }

    /// Human-readable description of the change for update summaries.
    pub fn describe(&self) -> String {
        match self {
            StageUpdate::Name(Some(kind)) => format!("Set name to '{}'", kind.as_str()),
            StageUpdate::Duration(Some(duration)) => format!("Set duration to {duration}"),
            StageUpdate::Unit(unit) => format!("Set unit to '{}'", unit.as_str()),
            StageUpdate::StartDate(Some(date)) => format!("Set start date to {date}"),
            StageUpdate::Name(None)
            | StageUpdate::Duration(None)
            | StageUpdate::StartDate(None) => format!("Cleared {}", self.field()),
        }
    }
}
