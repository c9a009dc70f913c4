//! Listing of the fixed enumerations the estimator accepts.

use std::fmt;

use crate::{
    models::{DurationUnit, RiskFactor, StageKind},
    scoring::{BASE_RISK, HIGH_THRESHOLD, MEDIUM_THRESHOLD, RISK_CEILING},
};

/// Markdown listing of stage kinds, risk factors with their weights, and
/// duration units.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Catalog")?;
        writeln!(f)?;

        writeln!(f, "## Stages")?;
        writeln!(f)?;
        for kind in StageKind::ALL {
            writeln!(f, "- {kind}")?;
        }
        writeln!(f)?;

        writeln!(f, "## Risk Factors")?;
        writeln!(f)?;
        for risk in RiskFactor::ALL {
            writeln!(f, "- {risk} (+{}%)", risk.weight())?;
        }
        writeln!(f)?;

        writeln!(f, "## Duration Units")?;
        writeln!(f)?;
        for unit in DurationUnit::ALL {
            writeln!(f, "- {unit}")?;
        }
        writeln!(f)?;

        writeln!(f, "## Scoring")?;
        writeln!(f)?;
        writeln!(f, "- Base risk: {BASE_RISK}%")?;
        writeln!(f, "- Ceiling: {RISK_CEILING}%")?;
        writeln!(f, "- High from {HIGH_THRESHOLD}%, medium from {MEDIUM_THRESHOLD}%")
    }
}
