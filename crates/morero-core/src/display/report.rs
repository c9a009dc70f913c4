//! Results view for a prediction run.
//!
//! [`AssessmentReport`] renders an [`Assessment`] the way the results page
//! lays it out: a header, the stage table, a bar chart of risk percentages
//! and the standing recommendations.

use std::fmt;

use crate::models::{Assessment, RiskLevel, StageResult};

/// Recommendations shown with every report, in display order.
pub const RECOMMENDATIONS: [&str; 4] = [
    "Add 1 month buffer to high-risk stages for schedule contingency",
    "Secure backup supplier contracts to mitigate procurement delays",
    "Engage regulatory consultants early in planning phase",
    "Implement weekly risk monitoring dashboards for active stages",
];

/// Width of a bar at 100% risk, in characters.
pub const CHART_WIDTH: usize = 40;

/// Markdown report for one assessment.
///
/// # Examples
///
/// ```rust
/// use morero_core::{display::AssessmentReport, scoring, ScenarioBuilder};
///
/// let scenario = ScenarioBuilder::sample().submit()?;
/// let report = AssessmentReport::new(&scoring::assess(&scenario)).to_string();
///
/// assert!(report.contains("Risk assessment and recommendations for Bridge Construction"));
/// assert!(report.contains("| Planning | 3 months | 🟢 20% | Standard monitoring |"));
/// # Ok::<(), morero_core::EstimatorError>(())
/// ```
pub struct AssessmentReport<'a> {
    assessment: &'a Assessment,
}

impl<'a> AssessmentReport<'a> {
    pub fn new(assessment: &'a Assessment) -> Self {
        Self { assessment }
    }

    fn fmt_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Stage Risk Assessment")?;
        writeln!(f)?;
        writeln!(f, "| Stage | Duration | Risk % | Notes |")?;
        writeln!(f, "|-------|----------|--------|-------|")?;
        for result in &self.assessment.results {
            writeln!(
                f,
                "| {} | {} | {} {}% | {} |",
                result.stage,
                result.duration,
                result.risk_level.icon(),
                result.risk,
                result.notes
            )?;
        }
        writeln!(f)
    }

    fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(peak) = self.assessment.peak() {
            writeln!(
                f,
                "Highest risk: **{}** at {}% ({})",
                peak.stage,
                peak.risk,
                peak.risk_level.with_icon()
            )?;
        }
        writeln!(
            f,
            "Stages by level: {} high, {} medium, {} low",
            self.assessment.count_at(RiskLevel::High),
            self.assessment.count_at(RiskLevel::Medium),
            self.assessment.count_at(RiskLevel::Low)
        )?;
        writeln!(f)
    }

    fn fmt_chart(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Risk Overview Chart")?;
        writeln!(f)?;
        writeln!(f, "```text")?;
        let label_width = self
            .assessment
            .results
            .iter()
            .map(|result| result.stage.as_str().chars().count())
            .max()
            .unwrap_or(0);
        for result in &self.assessment.results {
            writeln!(
                f,
                "{:<label_width$} {} {:<CHART_WIDTH$} {:>3}%",
                result.stage.as_str(),
                result.risk_level.icon(),
                bar(result),
                result.risk
            )?;
        }
        writeln!(f, "```")?;
        writeln!(f)
    }

    fn fmt_recommendations(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## AI Recommendations")?;
        writeln!(f)?;
        for recommendation in RECOMMENDATIONS {
            writeln!(f, "- → {recommendation}")?;
        }
        Ok(())
    }
}

/// Bar for one stage, rounded to the nearest character.
fn bar(result: &StageResult) -> String {
    let filled = (usize::from(result.risk) * CHART_WIDTH + 50) / 100;
    "█".repeat(filled.min(CHART_WIDTH))
}

impl fmt::Display for AssessmentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Predictive Analysis Results")?;
        writeln!(f)?;
        writeln!(
            f,
            "Risk assessment and recommendations for {}",
            self.assessment.project_name
        )?;
        writeln!(f)?;
        self.fmt_table(f)?;
        self.fmt_summary(f)?;
        self.fmt_chart(f)?;
        self.fmt_recommendations(f)
    }
}
