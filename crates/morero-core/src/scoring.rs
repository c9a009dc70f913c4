//! Delay-risk scoring.
//!
//! A deterministic lookup and sum over a fixed table, not a statistical
//! model. Every stage starts at [`BASE_RISK`], gains the weight of each
//! selected risk factor from [`RISK_WEIGHTS`], and is capped at
//! [`RISK_CEILING`]. The capped percentage is bucketed into a [`RiskLevel`]
//! and notes are built from [`NOTE_FRAGMENTS`] in table order.
//!
//! ```rust
//! use morero_core::{
//!     models::{DurationUnit, RiskFactor, RiskLevel, Stage, StageDuration, StageId, StageKind},
//!     scoring::score,
//! };
//!
//! let stage = Stage {
//!     id: StageId(1),
//!     name: StageKind::Planning,
//!     duration: StageDuration::new(3.0).unwrap(),
//!     unit: DurationUnit::Months,
//!     start_date: "2025-01-01".parse().unwrap(),
//!     risks: [RiskFactor::RegulatoryApprovals, RiskFactor::WeatherRisks]
//!         .into_iter()
//!         .collect(),
//! };
//!
//! let result = score(&stage);
//! assert_eq!(result.risk, 55);
//! assert_eq!(result.risk_level, RiskLevel::Medium);
//! assert_eq!(result.notes, "Regulatory approvals, Weather risks");
//! ```

use crate::models::{Assessment, RiskFactor, RiskLevel, Scenario, Stage, StageResult};

/// Risk every stage starts from.
pub const BASE_RISK: u8 = 20;

/// Hard ceiling on the reported percentage.
pub const RISK_CEILING: u8 = 85;

/// Lowest percentage reported as [`RiskLevel::High`].
pub const HIGH_THRESHOLD: u8 = 60;

/// Lowest percentage reported as [`RiskLevel::Medium`].
pub const MEDIUM_THRESHOLD: u8 = 35;

/// Increment added for each selected risk factor.
pub const RISK_WEIGHTS: [(RiskFactor, u8); 6] = [
    (RiskFactor::ComplicatedDesign, 20),
    (RiskFactor::BadGroundConditions, 15),
    (RiskFactor::ResourceShortages, 15),
    (RiskFactor::RegulatoryApprovals, 25),
    (RiskFactor::SupplierDelays, 20),
    (RiskFactor::WeatherRisks, 10),
];

/// Note fragment per noteworthy risk factor, in output order.
pub const NOTE_FRAGMENTS: [(RiskFactor, &str); 4] = [
    (RiskFactor::RegulatoryApprovals, "Regulatory approvals"),
    (RiskFactor::SupplierDelays, "Supplier delays"),
    (RiskFactor::WeatherRisks, "Weather risks"),
    (RiskFactor::BadGroundConditions, "Ground conditions"),
];

/// Notes used when no noteworthy risk factor is selected.
pub const STANDARD_MONITORING: &str = "Standard monitoring";

const NOTE_SEPARATOR: &str = ", ";

impl RiskFactor {
    /// Increment this factor adds to a stage's risk.
    pub fn weight(&self) -> u8 {
        RISK_WEIGHTS
            .iter()
            .find(|(factor, _)| factor == self)
            .map_or(0, |(_, weight)| *weight)
    }
}

impl RiskLevel {
    /// Bucket a risk percentage: ≥60 high, ≥35 medium, otherwise low.
    pub fn from_percentage(risk: u8) -> Self {
        if risk >= HIGH_THRESHOLD {
            RiskLevel::High
        } else if risk >= MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Uncapped sum of the base risk and every selected factor's weight.
pub fn raw_risk<'a>(risks: impl IntoIterator<Item = &'a RiskFactor>) -> u16 {
    risks
        .into_iter()
        .map(|factor| u16::from(factor.weight()))
        .fold(u16::from(BASE_RISK), |total, weight| total + weight)
}

/// Score a single stage. Pure: the same stage always yields the same result.
pub fn score(stage: &Stage) -> StageResult {
    let raw = raw_risk(&stage.risks);
    // Bounded by RISK_CEILING, so the narrowing is lossless.
    let risk = raw.min(u16::from(RISK_CEILING)) as u8;

    let fragments: Vec<&str> = NOTE_FRAGMENTS
        .iter()
        .filter(|(factor, _)| stage.risks.contains(factor))
        .map(|(_, fragment)| *fragment)
        .collect();

    let notes = if fragments.is_empty() {
        STANDARD_MONITORING.to_string()
    } else {
        fragments.join(NOTE_SEPARATOR)
    };

    StageResult {
        stage: stage.name,
        duration: stage.duration_label(),
        risk,
        risk_level: RiskLevel::from_percentage(risk),
        notes,
    }
}

/// Score every stage of a scenario in order.
pub fn assess(scenario: &Scenario) -> Assessment {
    Assessment {
        project_name: scenario.project_name.clone(),
        results: scenario.stages.iter().map(score).collect(),
    }
}
