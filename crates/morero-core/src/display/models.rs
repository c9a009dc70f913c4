//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data structures stay free of
//! presentation logic. Everything renders as markdown for the terminal
//! renderer and for MCP tool output.

use std::{collections::BTreeSet, fmt};

use crate::{
    builder::ScenarioBuilder,
    models::{
        DurationUnit, RiskFactor, RiskLevel, Scenario, Stage, StageDraft, StageKind, StageResult,
    },
};

/// Placeholder for blank draft fields.
const NOT_SET: &str = "(not set)";

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn write_risks(f: &mut fmt::Formatter<'_>, risks: &BTreeSet<RiskFactor>) -> fmt::Result {
    if risks.is_empty() {
        return writeln!(f, "- Risks: none");
    }
    let labels: Vec<&str> = risks.iter().map(RiskFactor::as_str).collect();
    writeln!(f, "- Risks: {}", labels.join(", "))
}

impl fmt::Display for StageDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.name.map_or(NOT_SET, |name| name.as_str());
        writeln!(f, "### Stage {}: {title}", self.id)?;
        writeln!(f)?;

        match self.duration {
            Some(duration) => writeln!(f, "- Duration: {duration} {}", self.unit)?,
            None => writeln!(f, "- Duration: {NOT_SET} ({})", self.unit)?,
        }

        match self.start_date {
            Some(date) => writeln!(f, "- Start date: {date}")?,
            None => writeln!(f, "- Start date: {NOT_SET}")?,
        }

        if let Some(end) = self.to_stage().as_ref().and_then(Stage::end_date) {
            writeln!(f, "- Planned end: {end}")?;
        }

        write_risks(f, &self.risks)?;
        writeln!(f)
    }
}

impl fmt::Display for ScenarioBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.project_name().trim().is_empty() {
            NOT_SET
        } else {
            self.project_name()
        };
        writeln!(f, "# Predictive Insights: Scenario Setup")?;
        writeln!(f)?;
        writeln!(f, "- Project: {name}")?;
        writeln!(f, "- Stages: {}", self.stages().len())?;
        writeln!(f)?;

        writeln!(f, "## Project Stages")?;
        writeln!(f)?;
        for stage in self.stages() {
            write!(f, "{stage}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Stage {}: {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Duration: {}", self.duration_label())?;
        writeln!(f, "- Start date: {}", self.start_date)?;
        if let Some(end) = self.end_date() {
            writeln!(f, "- Planned end: {end}")?;
        }
        write_risks(f, &self.risks)?;
        writeln!(f)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.project_name)?;
        writeln!(f)?;
        for stage in &self.stages {
            write!(f, "{stage}")?;
        }
        Ok(())
    }
}

impl fmt::Display for StageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} {}% ({})",
            self.stage,
            self.duration,
            self.risk_level.icon(),
            self.risk,
            self.notes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StageDuration, StageId, StageUpdate};

    #[test]
    fn test_blank_draft_shows_missing_fields() {
        let output = StageDraft::blank(StageId(4)).to_string();
        assert!(output.contains("### Stage 4: (not set)"));
        assert!(output.contains("- Duration: (not set) (months)"));
        assert!(output.contains("- Start date: (not set)"));
        assert!(output.contains("- Risks: none"));
        assert!(!output.contains("Planned end"));
    }

    #[test]
    fn test_complete_draft_shows_end_date() {
        let mut draft = StageDraft::blank(StageId(1));
        draft.name = Some(StageKind::Foundation);
        draft.duration = StageDuration::new(6.0);
        draft.unit = DurationUnit::Weeks;
        draft.start_date = Some(jiff::civil::date(2025, 3, 1));
        draft.risks.insert(RiskFactor::WeatherRisks);
        draft.risks.insert(RiskFactor::ComplicatedDesign);

        let output = draft.to_string();
        assert!(output.contains("### Stage 1: Foundation"));
        assert!(output.contains("- Duration: 6 weeks"));
        assert!(output.contains("- Planned end: 2025-04-12"));
        assert!(output.contains("- Risks: Complicated Design, Weather Risks"));
    }

    #[test]
    fn test_builder_display() {
        let mut builder = ScenarioBuilder::sample();
        builder.add_stage().unwrap();
        let output = builder.to_string();

        assert!(output.contains("- Project: Bridge Construction"));
        assert!(output.contains("- Stages: 2"));
        assert!(output.contains("### Stage 1: Planning"));
        assert!(output.contains("- Planned end: 2025-04-01"));
        assert!(output.contains("### Stage 2: (not set)"));
    }

    #[test]
    fn test_builder_display_blank_project() {
        let mut builder = ScenarioBuilder::sample();
        builder.set_project_name("   ");
        assert!(builder.to_string().contains("- Project: (not set)"));
    }

    #[test]
    fn test_cleared_name_shows_placeholder() {
        let mut builder = ScenarioBuilder::sample();
        let id = builder.stages()[0].id;
        let stage = builder.update_stage(id, StageUpdate::Name(None)).unwrap();
        assert!(stage.to_string().contains("(not set)"));
    }

    #[test]
    fn test_stage_result_display() {
        let result = StageResult {
            stage: StageKind::StructuralWork,
            duration: "4 months".to_string(),
            risk: 55,
            risk_level: RiskLevel::Medium,
            notes: "Regulatory approvals, Weather risks".to_string(),
        };
        assert_eq!(
            result.to_string(),
            "Structural Work (4 months): 🟡 55% (Regulatory approvals, Weather risks)"
        );
    }
}
