//! Scoring output types.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::StageKind;

/// Qualitative bucket derived from a risk percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!("Invalid risk level: {s}")),
        }
    }
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Level with its traffic-light icon.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use morero_core::models::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::High.with_icon(), "🔴 high");
    /// assert_eq!(RiskLevel::Medium.with_icon(), "🟡 medium");
    /// assert_eq!(RiskLevel::Low.with_icon(), "🟢 low");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            RiskLevel::High => "🔴 high",
            RiskLevel::Medium => "🟡 medium",
            RiskLevel::Low => "🟢 low",
        }
    }

    /// The icon alone.
    pub fn icon(&self) -> &'static str {
        match self {
            RiskLevel::High => "🔴",
            RiskLevel::Medium => "🟡",
            RiskLevel::Low => "🟢",
        }
    }
}

/// Scoring output for one stage. Created fresh on every run, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StageResult {
    /// Stage label
    pub stage: StageKind,

    /// Formatted duration, e.g. `3 months`
    pub duration: String,

    /// Delay risk percentage (0-100, capped at 85)
    pub risk: u8,

    /// Bucket derived from `risk`
    pub risk_level: RiskLevel,

    /// Comma-separated risk notes, or `Standard monitoring`
    pub notes: String,
}

/// All stage results of one prediction run, in scenario order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Project the results belong to
    pub project_name: String,

    /// One result per stage
    pub results: Vec<StageResult>,
}

impl Assessment {
    /// Highest risk across all stages, if any.
    pub fn peak(&self) -> Option<&StageResult> {
        self.results.iter().max_by_key(|result| result.risk)
    }

    /// Number of stages at the given level.
    pub fn count_at(&self, level: RiskLevel) -> usize {
        self.results
            .iter()
            .filter(|result| result.risk_level == level)
            .count()
    }
}
