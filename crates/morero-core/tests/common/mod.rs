use std::{collections::BTreeSet, time::Duration};

use morero_core::{
    models::{DurationUnit, RiskFactor, Stage, StageDuration, StageId, StageKind},
    Estimator, EstimatorBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test estimator backed by a temporary draft
/// file. The prediction delay is disabled.
#[allow(dead_code)]
pub async fn create_test_estimator() -> (TempDir, Estimator) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let draft_path = temp_dir.path().join("drafts").join("draft.json");
    let estimator = EstimatorBuilder::new()
        .with_draft_path(Some(&draft_path))
        .with_delay(Duration::ZERO)
        .build()
        .await
        .expect("Failed to create estimator");
    (temp_dir, estimator)
}

/// Helper function to build a complete stage with the given risks.
#[allow(dead_code)]
pub fn stage_with_risks(risks: &[RiskFactor]) -> Stage {
    Stage {
        id: StageId(1),
        name: StageKind::Foundation,
        duration: StageDuration::new(4.0).expect("positive duration"),
        unit: DurationUnit::Weeks,
        start_date: jiff::civil::date(2025, 5, 5),
        risks: risks.iter().copied().collect::<BTreeSet<_>>(),
    }
}
