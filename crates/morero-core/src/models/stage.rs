//! Stage model definitions: the editable draft and the validated stage.

use std::{collections::BTreeSet, fmt, str::FromStr};

use jiff::{civil::Date, Span};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};

use super::{DurationUnit, RiskFactor, StageKind};

/// Identifier of a stage, unique within one builder session.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct StageId(pub u64);

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Planned length of a stage in its unit: a positive, finite number.
///
/// Fractional values such as `2.5` are kept as entered. Whole values print
/// and serialize without a fractional part, so `3` stays `3 months`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct StageDuration(f64);

// NaN never gets past `new`, so equality is total.
impl Eq for StageDuration {}

impl StageDuration {
    /// Returns `None` unless `value` is finite and greater than zero.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn is_whole(self) -> bool {
        self.0.fract() == 0.0
    }
}

impl TryFrom<f64> for StageDuration {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
            .ok_or_else(|| format!("Invalid duration: {value}. Must be a positive number"))
    }
}

impl FromStr for StageDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| format!("Invalid duration: {s}. Must be a positive number"))
    }
}

impl fmt::Display for StageDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for StageDuration {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() && self.0 <= u64::MAX as f64 {
            serializer.serialize_u64(self.0 as u64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// A stage as it is being edited in the builder. Every field except the id
/// and unit may still be blank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StageDraft {
    /// Identifier assigned when the stage was added
    pub id: StageId,

    /// Selected stage kind
    #[serde(default)]
    pub name: Option<StageKind>,

    /// Planned duration, always positive when set
    #[serde(default)]
    pub duration: Option<StageDuration>,

    /// Unit of the planned duration
    #[serde(default)]
    pub unit: DurationUnit,

    /// Planned start date
    #[serde(default)]
    pub start_date: Option<Date>,

    /// Selected risk factors
    #[serde(default)]
    pub risks: BTreeSet<RiskFactor>,
}

impl StageDraft {
    /// A blank stage with the default unit.
    pub fn blank(id: StageId) -> Self {
        Self {
            id,
            name: None,
            duration: None,
            unit: DurationUnit::default(),
            start_date: None,
            risks: BTreeSet::new(),
        }
    }

    /// Name of the first required field that is still blank, phrased for a
    /// notice.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.is_none() {
            Some("a name")
        } else if self.duration.is_none() {
            Some("a duration")
        } else if self.start_date.is_none() {
            Some("a start date")
        } else {
            None
        }
    }

    /// Converts the draft into a validated stage if every required field is
    /// present.
    pub fn to_stage(&self) -> Option<Stage> {
        Some(Stage {
            id: self.id,
            name: self.name?,
            duration: self.duration?,
            unit: self.unit,
            start_date: self.start_date?,
            risks: self.risks.clone(),
        })
    }
}

impl From<Stage> for StageDraft {
    fn from(stage: Stage) -> Self {
        Self {
            id: stage.id,
            name: Some(stage.name),
            duration: Some(stage.duration),
            unit: stage.unit,
            start_date: Some(stage.start_date),
            risks: stage.risks,
        }
    }
}

/// A fully specified stage, ready to be scored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// Identifier carried over from the draft
    pub id: StageId,

    /// Stage kind
    pub name: StageKind,

    /// Planned duration
    pub duration: StageDuration,

    /// Unit of the planned duration
    pub unit: DurationUnit,

    /// Planned start date
    pub start_date: Date,

    /// Selected risk factors
    #[serde(default)]
    pub risks: BTreeSet<RiskFactor>,
}

impl Stage {
    /// Duration formatted as `"{duration} {unit}"`, e.g. `3 months`.
    pub fn duration_label(&self) -> String {
        format!("{} {}", self.duration, self.unit.as_str())
    }

    /// Planned finish date, or `None` if it falls outside the supported
    /// calendar range.
    ///
    /// Fractional weeks round to whole days. A fractional month is taken as
    /// that share of the month reached after the whole months, in days.
    #[allow(clippy::cast_possible_truncation)]
    pub fn end_date(&self) -> Option<Date> {
        let value = self.duration.get();
        match self.unit {
            DurationUnit::Weeks => {
                let days = (value * 7.0).round() as i64;
                self.start_date
                    .checked_add(Span::new().try_days(days).ok()?)
                    .ok()
            }
            DurationUnit::Months => {
                let months = value.trunc() as i64;
                let whole = self
                    .start_date
                    .checked_add(Span::new().try_months(months).ok()?)
                    .ok()?;
                let days = (value.fract() * f64::from(whole.days_in_month())).round() as i64;
                whole.checked_add(Span::new().try_days(days).ok()?).ok()
            }
        }
    }
}
