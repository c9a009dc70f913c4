//! Fixed enumerations shared by every surface: stage kinds, risk factors and
//! duration units.
//!
//! These closed sets are the only external schema of the estimator. Their
//! serialized form is the exact label; parsing user input is lenient about
//! case and separators (`structural-work`, `testing and commissioning`) but
//! never accepts a value outside the set.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fold a label or user input into a comparable form.
fn fold(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .replace('&', "and")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn lookup<T: Copy>(all: &[T], label: fn(&T) -> &'static str, input: &str) -> Option<T> {
    let wanted = fold(input);
    all.iter().copied().find(|item| fold(label(item)) == wanted)
}

/// The kind of construction stage being assessed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum StageKind {
    Planning,
    Procurement,
    Delivery,
    Foundation,
    #[serde(rename = "Structural Work")]
    StructuralWork,
    Finishing,
    #[serde(rename = "Testing & Commissioning")]
    TestingAndCommissioning,
}

impl StageKind {
    /// Every stage kind, in the order the builder offers them.
    pub const ALL: [StageKind; 7] = [
        StageKind::Planning,
        StageKind::Procurement,
        StageKind::Delivery,
        StageKind::Foundation,
        StageKind::StructuralWork,
        StageKind::Finishing,
        StageKind::TestingAndCommissioning,
    ];

    /// Exact display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Planning => "Planning",
            StageKind::Procurement => "Procurement",
            StageKind::Delivery => "Delivery",
            StageKind::Foundation => "Foundation",
            StageKind::StructuralWork => "Structural Work",
            StageKind::Finishing => "Finishing",
            StageKind::TestingAndCommissioning => "Testing & Commissioning",
        }
    }
}

impl FromStr for StageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(&Self::ALL, Self::as_str, s).ok_or_else(|| format!("Invalid stage name: {s}"))
    }
}

/// One of the six categorical hazards a user can attribute to a stage.
///
/// The derived ordering follows declaration order, so a `BTreeSet` of risk
/// factors always iterates in catalog order regardless of how the tags were
/// toggled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum RiskFactor {
    #[serde(rename = "Complicated Design")]
    ComplicatedDesign,
    #[serde(rename = "Bad Ground Conditions")]
    BadGroundConditions,
    #[serde(rename = "Resource Shortages")]
    ResourceShortages,
    #[serde(rename = "Regulatory Approvals")]
    RegulatoryApprovals,
    #[serde(rename = "Supplier Delays")]
    SupplierDelays,
    #[serde(rename = "Weather Risks")]
    WeatherRisks,
}

impl RiskFactor {
    /// Every risk factor, in catalog order.
    pub const ALL: [RiskFactor; 6] = [
        RiskFactor::ComplicatedDesign,
        RiskFactor::BadGroundConditions,
        RiskFactor::ResourceShortages,
        RiskFactor::RegulatoryApprovals,
        RiskFactor::SupplierDelays,
        RiskFactor::WeatherRisks,
    ];

    /// Exact display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFactor::ComplicatedDesign => "Complicated Design",
            RiskFactor::BadGroundConditions => "Bad Ground Conditions",
            RiskFactor::ResourceShortages => "Resource Shortages",
            RiskFactor::RegulatoryApprovals => "Regulatory Approvals",
            RiskFactor::SupplierDelays => "Supplier Delays",
            RiskFactor::WeatherRisks => "Weather Risks",
        }
    }
}

impl FromStr for RiskFactor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(&Self::ALL, Self::as_str, s).ok_or_else(|| format!("Invalid risk factor: {s}"))
    }
}

/// Unit of a stage's planned duration.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Weeks,
    #[default]
    Months,
}

impl DurationUnit {
    /// Every duration unit.
    pub const ALL: [DurationUnit; 2] = [DurationUnit::Weeks, DurationUnit::Months];

    /// Exact display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
        }
    }
}

impl FromStr for DurationUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(&Self::ALL, Self::as_str, s)
            .ok_or_else(|| format!("Invalid duration unit: {s}. Must be 'weeks' or 'months'"))
    }
}
